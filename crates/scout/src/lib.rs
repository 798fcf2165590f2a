//! Scout - GitHub Issue Recommendation Client
//!
//! Collects a free-text profile description, submits it to the external
//! recommendation service, and renders the suggested issues as cards.

pub mod api;
pub mod client;
pub mod commands;
pub mod display;
pub mod log;
pub mod view;

// Re-export commonly used types for easier testing
pub use api::{RecommendRequest, RecommendationItem};
pub use client::{ClientConfig, HttpRecommender, RecommendError, Recommender};
pub use view::RecommenderView;
