//! HTTP client for the recommendation service
//!
//! A thin reqwest wrapper behind the `Recommender` trait so the view can be
//! exercised against an in-process mock in tests.

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use crate::api::{RecommendRequest, RecommendResponse, RecommendationItem, ENDPOINT};

/// Failure modes of one recommendation exchange.
#[derive(Debug, Error)]
pub enum RecommendError {
  /// Server answered outside the 2xx range. The body is not read.
  #[error("request failed with status: {0}")]
  Status(u16),
  /// The exchange never completed (connection, DNS, or read failure).
  #[error("transport failure: {0}")]
  Transport(String),
  /// 2xx body that does not decode to a `recommendations` array.
  #[error("malformed response: {0}")]
  Malformed(String),
}

/// One submission to the recommendation service.
#[async_trait]
pub trait Recommender {
  async fn recommend(
    &self,
    request: &RecommendRequest,
  ) -> Result<Vec<RecommendationItem>, RecommendError>;
}

/// Configuration for the HTTP recommender.
#[derive(Debug, Clone)]
pub struct ClientConfig {
  /// Base URL of the recommendation service.
  pub base_url: String,
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self { base_url: ENDPOINT.to_string() }
  }
}

/// reqwest-backed implementation used by the CLI.
pub struct HttpRecommender {
  client: Client,
  config: ClientConfig,
}

impl Default for HttpRecommender {
  fn default() -> Self {
    Self::new()
  }
}

impl HttpRecommender {
  /// Client against the fixed service endpoint.
  pub fn new() -> Self {
    Self::with_config(ClientConfig::default())
  }

  /// Client against a custom base URL (tests point this at a mock server).
  pub fn with_config(config: ClientConfig) -> Self {
    // No timeout: a hung exchange suspends until the server gives up.
    Self { client: Client::new(), config }
  }
}

#[async_trait]
impl Recommender for HttpRecommender {
  async fn recommend(
    &self,
    request: &RecommendRequest,
  ) -> Result<Vec<RecommendationItem>, RecommendError> {
    let url = format!("{}/recommend", self.config.base_url);

    let response = self
      .client
      .post(&url)
      .json(request)
      .send()
      .await
      .map_err(|e| RecommendError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
      return Err(RecommendError::Status(status.as_u16()));
    }

    let body = response.text().await.map_err(|e| RecommendError::Transport(e.to_string()))?;
    let decoded: RecommendResponse =
      serde_json::from_str(&body).map_err(|e| RecommendError::Malformed(e.to_string()))?;

    Ok(decoded.recommendations)
  }
}
