//! Wire types for the recommendation service API
//!
//! The service owns the matching and ranking; this side only builds the
//! request body and decodes the `recommendations` array it gets back.

use serde::{Deserialize, Serialize};

/// Address of the recommendation service.
pub const ENDPOINT: &str = "http://localhost:8001";

/// Language filter forwarded to the service ("all" = no filter).
pub const LANGUAGE: &str = "all";
/// Issues fetched per repository on the service side.
pub const PER_PAGE: u32 = 20;
/// Number of top-starred repositories the service scans.
pub const TOP_N: u32 = 100;
/// Sentence embedding model the service ranks with.
pub const MODEL: &str = "all-MiniLM-L6-v2";

/// Request body for `POST /recommend`.
///
/// Everything except `student_profile` is a fixed constant in this version
/// and is forwarded verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendRequest {
  pub student_profile: String,
  pub language: String,
  pub per_page: u32,
  pub top_n: u32,
  pub model: String,
}

impl RecommendRequest {
  /// Build a request for the given profile text with the fixed options.
  pub fn for_profile(profile: &str) -> Self {
    Self {
      student_profile: profile.to_string(),
      language: LANGUAGE.to_string(),
      per_page: PER_PAGE,
      top_n: TOP_N,
      model: MODEL.to_string(),
    }
  }
}

/// One suggested issue: title, owning repository, and link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationItem {
  pub title: String,
  pub repo: String,
  pub url: String,
}

/// Success response body for `POST /recommend`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
  pub recommendations: Vec<RecommendationItem>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn request_carries_fixed_options() {
    let request = RecommendRequest::for_profile("rust and async networking");

    assert_eq!(request.student_profile, "rust and async networking");
    assert_eq!(request.language, "all");
    assert_eq!(request.per_page, 20);
    assert_eq!(request.top_n, 100);
    assert_eq!(request.model, "all-MiniLM-L6-v2");
  }

  #[test]
  fn request_serializes_with_expected_field_names() {
    let request = RecommendRequest::for_profile("");
    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(value["student_profile"], "");
    assert_eq!(value["language"], "all");
    assert_eq!(value["per_page"], 20);
    assert_eq!(value["top_n"], 100);
    assert_eq!(value["model"], "all-MiniLM-L6-v2");
  }

  #[test]
  fn response_decodes_recommendations() {
    let body = r#"{
      "recommendations": [
        {"title": "Fix bug", "repo": "org/repo", "url": "https://x/1"}
      ]
    }"#;

    let response: RecommendResponse = serde_json::from_str(body).unwrap();
    assert_eq!(response.recommendations.len(), 1);
    assert_eq!(response.recommendations[0].title, "Fix bug");
    assert_eq!(response.recommendations[0].repo, "org/repo");
    assert_eq!(response.recommendations[0].url, "https://x/1");
  }
}
