//! Access to the remote analysis API.
//!
//! The dashboard never computes metrics itself. [`ProjectService`] is the seam
//! between the application state and whatever produces analyses: the HTTP
//! client in production and scripted fakes in tests.

pub mod client;

use futures::future::BoxFuture;

use crate::error::ServiceError;
use crate::types::{AnalysisResult, Recommendation, RepositoryIdentifier};

pub use client::HttpProjectService;

/// Source of repository analyses and recommendations.
pub trait ProjectService: Send + Sync {
    /// `GET /projects/{owner}/{repo}`
    fn fetch_analysis<'a>(
        &'a self,
        id: &'a RepositoryIdentifier,
    ) -> BoxFuture<'a, Result<AnalysisResult, ServiceError>>;

    /// `GET /projects/{owner}/{repo}/recommendations`
    fn fetch_recommendations<'a>(
        &'a self,
        id: &'a RepositoryIdentifier,
    ) -> BoxFuture<'a, Result<Vec<Recommendation>, ServiceError>>;

    /// `GET /health`; any 2xx reply means the API is available.
    fn check_health(&self) -> BoxFuture<'_, Result<serde_json::Value, ServiceError>>;
}
