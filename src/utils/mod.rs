mod grouping;

pub use grouping::{group_by_priority, RecommendationGroups};
