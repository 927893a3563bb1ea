use futures::future::BoxFuture;
use futures::FutureExt;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use super::ProjectService;
use crate::config::Settings;
use crate::error::ServiceError;
use crate::types::{AnalysisResult, Recommendation, RecommendationSet, RepositoryIdentifier};

/// The `{success, data}` wrapper every project endpoint replies with.
#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    #[serde(default)]
    success: bool,
    data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    fn into_data(self) -> Result<T, ServiceError> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(ServiceError::Rejected),
        }
    }
}

/// [`ProjectService`] backed by the HTTP API.
#[derive(Clone)]
pub struct HttpProjectService {
    base_url: String,
    client: Client,
}

impl HttpProjectService {
    /// Create a client for the API rooted at `base_url` (e.g. `http://localhost:8000/api/v1`).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ServiceError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, ServiceError> {
        Self::new(&settings.api_base, settings.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // The identifier is forwarded verbatim; malformed input fails server-side.
    fn project_url(&self, id: &RepositoryIdentifier) -> String {
        format!("{}/projects/{}/{}", self.base_url, id.owner, id.name)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ServiceError> {
        log::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Status(status.as_u16()));
        }
        Ok(response.json().await?)
    }

    pub async fn analysis(&self, id: &RepositoryIdentifier) -> Result<AnalysisResult, ServiceError> {
        let envelope: ApiEnvelope<AnalysisResult> = self.get_json(&self.project_url(id)).await?;
        envelope.into_data()
    }

    pub async fn recommendations(
        &self,
        id: &RepositoryIdentifier,
    ) -> Result<Vec<Recommendation>, ServiceError> {
        let url = format!("{}/recommendations", self.project_url(id));
        let envelope: ApiEnvelope<RecommendationSet> = self.get_json(&url).await?;
        Ok(envelope.into_data()?.recommendations)
    }

    pub async fn health(&self) -> Result<serde_json::Value, ServiceError> {
        self.get_json(&format!("{}/health", self.base_url)).await
    }
}

impl ProjectService for HttpProjectService {
    fn fetch_analysis<'a>(
        &'a self,
        id: &'a RepositoryIdentifier,
    ) -> BoxFuture<'a, Result<AnalysisResult, ServiceError>> {
        self.analysis(id).boxed()
    }

    fn fetch_recommendations<'a>(
        &'a self,
        id: &'a RepositoryIdentifier,
    ) -> BoxFuture<'a, Result<Vec<Recommendation>, ServiceError>> {
        self.recommendations(id).boxed()
    }

    fn check_health(&self) -> BoxFuture<'_, Result<serde_json::Value, ServiceError>> {
        self.health().boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_requires_success_and_data() {
        let ok: ApiEnvelope<RecommendationSet> =
            serde_json::from_value(json!({ "success": true, "data": { "recommendations": [] } }))
                .unwrap();
        assert!(ok.into_data().is_ok());

        let rejected: ApiEnvelope<RecommendationSet> =
            serde_json::from_value(json!({ "success": false, "data": { "recommendations": [] } }))
                .unwrap();
        assert!(matches!(rejected.into_data(), Err(ServiceError::Rejected)));

        let empty: ApiEnvelope<AnalysisResult> =
            serde_json::from_value(json!({ "success": true })).unwrap();
        assert!(matches!(empty.into_data(), Err(ServiceError::Rejected)));
    }

    #[test]
    fn test_project_url() {
        let service = HttpProjectService::new("http://localhost:8000/api/v1/", Duration::from_secs(5))
            .unwrap();
        assert_eq!(service.base_url(), "http://localhost:8000/api/v1");
        assert_eq!(
            service.project_url(&RepositoryIdentifier::parse("apache/iotdb")),
            "http://localhost:8000/api/v1/projects/apache/iotdb"
        );
        assert_eq!(
            service.project_url(&RepositoryIdentifier::parse("iotdb")),
            "http://localhost:8000/api/v1/projects/iotdb/"
        );
    }
}
