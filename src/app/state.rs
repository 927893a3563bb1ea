use chrono::{DateTime, Utc};

use super::catalog::Selection;
use super::request::{RequestLane, RequestState, RequestToken};
use super::view::{NavigationHistory, Page, Tab, ViewState};
use crate::error::ServiceError;
use crate::metrics::{Overview, TierReport};
use crate::types::{AnalysisResult, Recommendation, RepositoryIdentifier};
use crate::utils::{group_by_priority, RecommendationGroups};

/// Reachability of the analysis API, shown in the header.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ApiStatus {
    #[default]
    Unknown,
    Available(serde_json::Value),
    Unavailable,
}

/// Main application state
///
/// The analysis and recommendation lanes are independent: each has its own
/// request sequence and neither ever touches the other's state.
#[derive(Debug, Clone)]
pub struct App {
    pub selection: Selection,
    pub view: ViewState,
    pub history: NavigationHistory,
    pub api_status: ApiStatus,
    pub last_analysis_time: Option<DateTime<Utc>>,
    analysis: RequestLane<AnalysisResult>,
    recommendations: RequestLane<Vec<Recommendation>>,
    /// Repository the recommendation lane was last started for
    recommendations_for: Option<RepositoryIdentifier>,
}

impl App {
    /// Build the initial state from the navigation token active at startup.
    pub fn new(initial_token: &str, default_project: &str) -> Self {
        Self {
            selection: Selection::new(default_project),
            view: ViewState::from_token(initial_token),
            history: NavigationHistory::new(Page::from_token(initial_token).token()),
            api_status: ApiStatus::Unknown,
            last_analysis_time: None,
            analysis: RequestLane::new(),
            recommendations: RequestLane::new(),
            recommendations_for: None,
        }
    }

    // --- navigation ---

    /// Explicit navigation to `page`; records the token in the history.
    pub fn navigate(&mut self, page: Page) {
        self.view.apply_token(page.token());
        self.history.push(page.token());
    }

    /// Navigation token changed from outside (history movement).
    pub fn apply_token(&mut self, token: &str) {
        if self.view.apply_token(token) {
            log::debug!("Navigated to {:?}", self.view.page);
        }
    }

    pub fn go_back(&mut self) {
        if let Some(token) = self.history.back().map(str::to_string) {
            self.apply_token(&token);
        }
    }

    pub fn go_forward(&mut self) {
        if let Some(token) = self.history.forward().map(str::to_string) {
            self.apply_token(&token);
        }
    }

    /// Token to persist for the next start.
    pub fn current_token(&self) -> &'static str {
        self.view.page.token()
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.view.select_tab(tab);
    }

    // --- analysis lane ---

    /// Start analyzing the selected repository.
    ///
    /// Any previous result or error is cleared immediately; a request still in
    /// flight is superseded.
    pub fn begin_analysis(&mut self) -> (RequestToken, RepositoryIdentifier) {
        let id = self.selection.identifier();
        let token = self.analysis.begin();
        log::info!("Analyzing {} (request #{})", id, token.sequence());
        (token, id)
    }

    /// Apply the outcome of an analysis request. Returns `false` if it was stale.
    pub fn complete_analysis(
        &mut self,
        token: RequestToken,
        outcome: Result<AnalysisResult, ServiceError>,
    ) -> bool {
        let succeeded = outcome.is_ok();
        let outcome = outcome.map_err(|e| {
            log::error!("Analysis request #{} failed: {}", token.sequence(), e);
            e.user_message().to_string()
        });

        if !self.analysis.complete(token, outcome) {
            log::debug!("Dropping stale analysis response #{}", token.sequence());
            return false;
        }

        if succeeded {
            self.view.reset_tab();
            self.invalidate_recommendations();
            self.last_analysis_time = Some(Utc::now());
        }
        true
    }

    /// Drop the displayed result (or error) and ignore anything in flight.
    pub fn clear_results(&mut self) {
        self.analysis.clear();
        self.invalidate_recommendations();
        self.last_analysis_time = None;
    }

    pub fn analysis_state(&self) -> &RequestState<AnalysisResult> {
        self.analysis.state()
    }

    pub fn is_analyzing(&self) -> bool {
        self.analysis.state().is_loading()
    }

    pub fn analysis_result(&self) -> Option<&AnalysisResult> {
        self.analysis.state().success()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.analysis.state().failure()
    }

    pub fn tier_report(&self) -> Option<TierReport> {
        self.analysis_result().map(TierReport::from_result)
    }

    pub fn overview(&self) -> Option<Overview> {
        self.analysis_result().map(Overview::from_result)
    }

    // --- recommendation lane ---

    /// Repository recommendations are bound to, taken from the displayed result.
    pub fn bound_repository(&self) -> Option<RepositoryIdentifier> {
        self.analysis_result()
            .map(|result| result.basic_info.identifier())
            .filter(RepositoryIdentifier::is_valid)
    }

    /// Whether the recommendations tab needs a fetch for the bound repository.
    pub fn needs_recommendations(&self) -> bool {
        self.view.page == Page::Explorer
            && self.view.active_tab == Tab::Recommendations
            && self
                .bound_repository()
                .is_some_and(|id| self.recommendations_for.as_ref() != Some(&id))
    }

    /// Start a recommendation fetch if one is needed.
    pub fn begin_recommendations(&mut self) -> Option<(RequestToken, RepositoryIdentifier)> {
        if !self.needs_recommendations() {
            return None;
        }
        let id = self.bound_repository()?;
        let token = self.recommendations.begin();
        self.recommendations_for = Some(id.clone());
        log::info!("Fetching recommendations for {} (request #{})", id, token.sequence());
        Some((token, id))
    }

    /// Apply the outcome of a recommendation request.
    ///
    /// Failures are only logged; the tab then shows an empty list.
    pub fn complete_recommendations(
        &mut self,
        token: RequestToken,
        outcome: Result<Vec<Recommendation>, ServiceError>,
    ) -> bool {
        let outcome = outcome.map_err(|e| {
            log::warn!("Failed to fetch recommendations: {}", e);
            e.to_string()
        });

        if !self.recommendations.complete(token, outcome) {
            log::debug!("Dropping stale recommendations response #{}", token.sequence());
            return false;
        }
        true
    }

    pub fn recommendations_state(&self) -> &RequestState<Vec<Recommendation>> {
        self.recommendations.state()
    }

    pub fn recommendations_loading(&self) -> bool {
        self.recommendations.state().is_loading()
    }

    /// Fetched recommendations; empty while idle, loading or after a failure.
    pub fn recommendations(&self) -> &[Recommendation] {
        self.recommendations
            .state()
            .success()
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn recommendation_groups(&self) -> RecommendationGroups {
        group_by_priority(self.recommendations())
    }

    fn invalidate_recommendations(&mut self) {
        self.recommendations.clear();
        self.recommendations_for = None;
    }

    // --- health ---

    pub fn set_api_status(&mut self, outcome: Result<serde_json::Value, ServiceError>) {
        self.api_status = match outcome {
            Ok(payload) => ApiStatus::Available(payload),
            Err(e) => {
                log::warn!("API health check failed: {}", e);
                ApiStatus::Unavailable
            }
        };
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new("", "apache/iotdb")
    }
}
