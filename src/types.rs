//! # Common Types
//!
//! This module contains the records exchanged with the analysis API and shared
//! throughout the application. Every numeric field falls back to `0` when the
//! API omits it or sends `null`, so the classifiers always see a concrete value.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Deserialize a field that may be `null`, replacing `null` with the type's default.
///
/// Combine with `#[serde(default)]` so that absent keys behave the same way.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize a string field, turning `null` or any non-string value into `""`.
pub fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(value) => Ok(value),
        _ => Ok(String::new()),
    }
}

/// Deserialize a trend leniently; anything but a recognized string is `Unknown`.
pub fn trend_or_unknown<'de, D>(deserializer: D) -> Result<Trend, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(value) => Ok(Trend::parse(&value)),
        _ => Ok(Trend::Unknown),
    }
}

/// An `owner/name` repository identifier.
///
/// Parsing is permissive: input without a separator yields an empty `name`
/// and is still sent to the service, which reports the failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RepositoryIdentifier {
    /// Account or organization owning the repository
    pub owner: String,
    /// Repository name
    pub name: String,
}

impl RepositoryIdentifier {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Split free-form input on `/`, keeping the first two segments.
    pub fn parse(input: &str) -> Self {
        let mut parts = input.split('/');
        let owner = parts.next().unwrap_or_default().to_string();
        let name = parts.next().unwrap_or_default().to_string();
        Self { owner, name }
    }

    /// Both segments are non-empty.
    pub fn is_valid(&self) -> bool {
        !self.owner.is_empty() && !self.name.is_empty()
    }
}

impl fmt::Display for RepositoryIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Identity of the analyzed repository as reported by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicInfo {
    /// `owner/name` as echoed by the service
    #[serde(deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub owner: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Hosting platform, e.g. `github`
    #[serde(deserialize_with = "null_as_default")]
    pub platform: String,
}

impl BasicInfo {
    /// The identifier recommendations are fetched for.
    pub fn identifier(&self) -> RepositoryIdentifier {
        RepositoryIdentifier::new(self.owner.clone(), self.name.clone())
    }
}

/// Direction of recent project activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
    /// Missing or unrecognized trend values
    #[default]
    #[serde(other)]
    Unknown,
}

impl Trend {
    pub fn parse(value: &str) -> Self {
        match value {
            "increasing" => Trend::Increasing,
            "decreasing" => Trend::Decreasing,
            "stable" => Trend::Stable,
            _ => Trend::Unknown,
        }
    }
}

/// Activity section of an analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Activity {
    /// Averaged activity score over recent months
    #[serde(deserialize_with = "null_as_default")]
    pub score: f64,
    #[serde(deserialize_with = "trend_or_unknown")]
    pub trend: Trend,
}

/// A contributor and their contribution count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyContributor {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub contributions: f64,
}

/// Community section of an analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Community {
    #[serde(deserialize_with = "null_as_default")]
    pub total_contributors: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub active_contributors: f64,
    /// Minimum number of contributors whose departure would stall the project
    #[serde(deserialize_with = "null_as_default")]
    pub bus_factor: f64,
    /// Most significant contributors, in the order the API ranks them
    #[serde(deserialize_with = "null_as_default")]
    pub key_contributors: Vec<KeyContributor>,
}

/// Issue-handling section of an analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Issues {
    #[serde(deserialize_with = "null_as_default")]
    pub new_issues: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub closed_issues: f64,
    /// Closed relative to opened, as a percentage
    #[serde(deserialize_with = "null_as_default")]
    pub resolution_efficiency: f64,
    /// Average first response time in hours
    #[serde(deserialize_with = "null_as_default")]
    pub avg_response_time: f64,
}

/// The result of analyzing a repository, as computed by the analysis API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    /// Which repository this result describes
    #[serde(deserialize_with = "null_as_default")]
    pub basic_info: BasicInfo,
    /// Activity score and trend
    #[serde(deserialize_with = "null_as_default")]
    pub activity: Activity,
    /// Contributor counts, bus factor and key contributors
    #[serde(deserialize_with = "null_as_default")]
    pub community: Community,
    /// Issue throughput and responsiveness
    #[serde(deserialize_with = "null_as_default")]
    pub issues: Issues,
    /// Approachability for first-time contributors, 0-100
    #[serde(deserialize_with = "null_as_default")]
    pub newbie_friendly_score: f64,
}

/// Recommendation urgency buckets, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Buckets in the order they are shown.
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Returns `None` for anything outside `high|medium|low`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            Priority::High => "🔴",
            Priority::Medium => "🟡",
            Priority::Low => "🟢",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High priority",
            Priority::Medium => "Medium priority",
            Priority::Low => "Low priority",
        }
    }
}

/// A contribution recommendation for a repository.
///
/// `priority` is kept as the raw string the service sent so that unknown
/// values can be dropped during grouping instead of failing the whole payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recommendation {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// Category of the recommendation, e.g. `beginner` or `maintenance`
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "string_or_empty")]
    pub priority: String,
}

impl Recommendation {
    pub fn priority(&self) -> Option<Priority> {
        Priority::parse(&self.priority)
    }
}

/// Payload of the recommendation endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationSet {
    #[serde(deserialize_with = "null_as_default")]
    pub recommendations: Vec<Recommendation>,
}
