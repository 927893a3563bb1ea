pub mod classifier;

pub use classifier::{
    activity_tier, bus_factor_tier, resolution_tier, trend_tier, ActivityTier, BusFactorTier,
    Overview, ResolutionTier, TierReport, Tone, TrendTier,
};
