//! The profile/results view
//!
//! Two state cells: the profile text the user is editing and the last
//! successfully fetched result list. Submission builds an immutable request
//! from the current text plus the fixed options, runs one exchange, and on
//! success replaces the result list wholesale. A failed submission leaves
//! both cells untouched, so stale results stay visible.

use crate::api::{RecommendRequest, RecommendationItem};
use crate::client::{RecommendError, Recommender};

pub struct RecommenderView<R> {
  recommender: R,
  profile: String,
  results: Option<Vec<RecommendationItem>>,
}

impl<R: Recommender> RecommenderView<R> {
  /// Fresh view: empty profile, no results yet.
  pub fn new(recommender: R) -> Self {
    Self { recommender, profile: String::new(), results: None }
  }

  /// Replace the profile text. No validation; empty is permitted.
  pub fn set_profile(&mut self, text: impl Into<String>) {
    self.profile = text.into();
  }

  pub fn profile(&self) -> &str {
    &self.profile
  }

  /// Last successful result list, if any request has completed.
  pub fn results(&self) -> Option<&[RecommendationItem]> {
    self.results.as_deref()
  }

  /// Snapshot the current profile into a request with the fixed options.
  pub fn build_request(&self) -> RecommendRequest {
    RecommendRequest::for_profile(&self.profile)
  }

  /// Replace the result list wholesale.
  ///
  /// No generation guard: when completions are applied out of order the
  /// last one applied wins, matching the submit-while-in-flight behavior
  /// this tool inherits.
  pub fn apply(&mut self, items: Vec<RecommendationItem>) {
    self.results = Some(items);
  }

  /// Run one exchange against the service.
  ///
  /// On failure the error is returned to the single top-level catch site
  /// and the result list keeps its previous value.
  pub async fn submit(&mut self) -> Result<(), RecommendError> {
    let request = self.build_request();
    let items = self.recommender.recommend(&request).await?;
    self.apply(items);
    Ok(())
  }
}
