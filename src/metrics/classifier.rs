//! Maps raw analysis numbers to display tiers.
//!
//! Every function here is total: non-finite input is treated as `0` and the
//! fallback branch always yields a tier.

use crate::types::{AnalysisResult, Trend};

/// Visual weight of a tier, mapped to colors by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Success,
    Info,
    Warning,
    Danger,
    Neutral,
}

/// How a [`Trend`] is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendTier {
    pub emoji: &'static str,
    pub label: &'static str,
    pub advisory: Option<&'static str>,
    pub tone: Tone,
}

pub fn trend_tier(trend: Trend) -> TrendTier {
    match trend {
        Trend::Increasing => TrendTier {
            emoji: "↗️",
            label: "Increasing",
            advisory: Some("Project activity is growing, which is a positive signal"),
            tone: Tone::Success,
        },
        Trend::Decreasing => TrendTier {
            emoji: "↘️",
            label: "Decreasing",
            advisory: Some("Project activity has declined and may need attention"),
            tone: Tone::Warning,
        },
        Trend::Stable => TrendTier {
            emoji: "➡️",
            label: "Stable",
            advisory: Some("Project activity is holding steady"),
            tone: Tone::Info,
        },
        Trend::Unknown => TrendTier {
            emoji: "❓",
            label: "Unknown",
            advisory: None,
            tone: Tone::Neutral,
        },
    }
}

/// Color band of the activity score gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityTier {
    Good,
    Warning,
    Risk,
}

impl ActivityTier {
    pub fn tone(&self) -> Tone {
        match self {
            ActivityTier::Good => Tone::Success,
            ActivityTier::Warning => Tone::Warning,
            ActivityTier::Risk => Tone::Danger,
        }
    }
}

/// `> 700` good, `(300, 700]` warning, `<= 300` risk.
pub fn activity_tier(score: f64) -> ActivityTier {
    let score = finite_or_zero(score);
    if score > 700.0 {
        ActivityTier::Good
    } else if score > 300.0 {
        ActivityTier::Warning
    } else {
        ActivityTier::Risk
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BusFactorTier {
    Risk,
    Caution,
    Good,
}

impl BusFactorTier {
    pub fn advisory(&self) -> &'static str {
        match self {
            BusFactorTier::Risk => {
                "⚠️ Bus factor is low; losing a key contributor could seriously hurt the project"
            }
            BusFactorTier::Caution => {
                "ℹ️ Bus factor is moderate; growing more core contributors is recommended"
            }
            BusFactorTier::Good => "✅ Bus factor is healthy; work is well spread across contributors",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            BusFactorTier::Risk => Tone::Danger,
            BusFactorTier::Caution => Tone::Warning,
            BusFactorTier::Good => Tone::Success,
        }
    }
}

/// `<= 2` risk, `<= 4` caution, otherwise good.
pub fn bus_factor_tier(bus_factor: f64) -> BusFactorTier {
    let bus_factor = finite_or_zero(bus_factor);
    if bus_factor <= 2.0 {
        BusFactorTier::Risk
    } else if bus_factor <= 4.0 {
        BusFactorTier::Caution
    } else {
        BusFactorTier::Good
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionTier {
    Good,
    Moderate,
    Poor,
}

impl ResolutionTier {
    pub fn advisory(&self) -> &'static str {
        match self {
            ResolutionTier::Good => "✅ Issues are resolved very efficiently",
            ResolutionTier::Moderate => "ℹ️ Issue resolution efficiency is moderate",
            ResolutionTier::Poor => "⚠️ Issue resolution is slow; a backlog may be building up",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            ResolutionTier::Good => Tone::Success,
            ResolutionTier::Moderate => Tone::Info,
            ResolutionTier::Poor => Tone::Warning,
        }
    }
}

/// `>= 80` good, `>= 60` moderate, otherwise poor.
pub fn resolution_tier(efficiency_percent: f64) -> ResolutionTier {
    let efficiency = finite_or_zero(efficiency_percent);
    if efficiency >= 80.0 {
        ResolutionTier::Good
    } else if efficiency >= 60.0 {
        ResolutionTier::Moderate
    } else {
        ResolutionTier::Poor
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// All tiers of one analysis, classified together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierReport {
    pub trend: TrendTier,
    pub activity: ActivityTier,
    pub bus_factor: BusFactorTier,
    pub resolution: ResolutionTier,
}

impl TierReport {
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            trend: trend_tier(result.activity.trend),
            activity: activity_tier(result.activity.score),
            bus_factor: bus_factor_tier(result.community.bus_factor),
            resolution: resolution_tier(result.issues.resolution_efficiency),
        }
    }
}

/// Headline numbers shown above the tabs.
#[derive(Debug, Clone, PartialEq)]
pub struct Overview {
    pub full_name: String,
    pub activity_score: f64,
    pub contributors: f64,
    pub newbie_friendly_score: f64,
    /// Upper-cased platform, `GITHUB` when the API leaves it blank
    pub platform: String,
}

impl Overview {
    pub fn from_result(result: &AnalysisResult) -> Self {
        let platform = match result.basic_info.platform.trim() {
            "" => "GITHUB".to_string(),
            platform => platform.to_uppercase(),
        };
        Self {
            full_name: result.basic_info.full_name.clone(),
            activity_score: finite_or_zero(result.activity.score),
            contributors: finite_or_zero(result.community.total_contributors),
            newbie_friendly_score: finite_or_zero(result.newbie_friendly_score),
            platform,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Activity, BasicInfo};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_trend_table() {
        let increasing = trend_tier(Trend::Increasing);
        assert_eq!((increasing.emoji, increasing.label), ("↗️", "Increasing"));
        assert!(increasing.advisory.is_some());

        let decreasing = trend_tier(Trend::Decreasing);
        assert_eq!((decreasing.emoji, decreasing.label), ("↘️", "Decreasing"));
        assert!(decreasing.advisory.is_some());

        let stable = trend_tier(Trend::Stable);
        assert_eq!((stable.emoji, stable.label), ("➡️", "Stable"));
        assert!(stable.advisory.is_some());

        let unknown = trend_tier(Trend::parse("exploding"));
        assert_eq!((unknown.emoji, unknown.label), ("❓", "Unknown"));
        assert_eq!(unknown.advisory, None);
    }

    #[test]
    fn test_activity_boundaries() {
        assert_eq!(activity_tier(700.0), ActivityTier::Warning);
        assert_eq!(activity_tier(701.0), ActivityTier::Good);
        assert_eq!(activity_tier(300.0), ActivityTier::Risk);
        assert_eq!(activity_tier(301.0), ActivityTier::Warning);
        assert_eq!(activity_tier(0.0), ActivityTier::Risk);
        assert_eq!(activity_tier(-5.0), ActivityTier::Risk);
        assert_eq!(activity_tier(f64::NAN), ActivityTier::Risk);
        assert_eq!(activity_tier(700.5), ActivityTier::Good);
    }

    #[test]
    fn test_bus_factor_boundaries() {
        assert_eq!(bus_factor_tier(2.0), BusFactorTier::Risk);
        assert_eq!(bus_factor_tier(3.0), BusFactorTier::Caution);
        assert_eq!(bus_factor_tier(4.0), BusFactorTier::Caution);
        assert_eq!(bus_factor_tier(5.0), BusFactorTier::Good);
        assert_eq!(bus_factor_tier(0.0), BusFactorTier::Risk);
        assert_eq!(bus_factor_tier(f64::INFINITY), BusFactorTier::Risk);
    }

    #[test]
    fn test_resolution_boundaries() {
        assert_eq!(resolution_tier(79.0), ResolutionTier::Moderate);
        assert_eq!(resolution_tier(80.0), ResolutionTier::Good);
        assert_eq!(resolution_tier(59.0), ResolutionTier::Poor);
        assert_eq!(resolution_tier(60.0), ResolutionTier::Moderate);
        assert_eq!(resolution_tier(100.0), ResolutionTier::Good);
        assert_eq!(resolution_tier(f64::NAN), ResolutionTier::Poor);
    }

    #[test]
    fn test_non_string_trend_still_classified() {
        let result: AnalysisResult = serde_json::from_value(serde_json::json!({
            "activity": { "score": 850, "trend": 3 }
        }))
        .unwrap();
        let report = TierReport::from_result(&result);

        assert_eq!(result.activity.trend, Trend::Unknown);
        assert_eq!(report.trend.label, "Unknown");
        assert_eq!(report.activity, ActivityTier::Good);
    }

    #[test]
    fn test_overview_platform_fallback() {
        let mut result = AnalysisResult {
            activity: Activity {
                score: 123.5,
                trend: Trend::Stable,
            },
            ..AnalysisResult::default()
        };
        assert_eq!(Overview::from_result(&result).platform, "GITHUB");

        result.basic_info = BasicInfo {
            platform: "gitee".to_string(),
            ..BasicInfo::default()
        };
        let overview = Overview::from_result(&result);
        assert_eq!(overview.platform, "GITEE");
        assert_eq!(overview.activity_score, 123.5);
    }
}
