use crate::types::{Priority, Recommendation};

/// Recommendations partitioned by priority, buckets ordered high, medium, low.
///
/// Only non-empty buckets are present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecommendationGroups {
    buckets: Vec<(Priority, Vec<Recommendation>)>,
}

impl RecommendationGroups {
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn get(&self, priority: Priority) -> Option<&[Recommendation]> {
        self.buckets
            .iter()
            .find(|(p, _)| *p == priority)
            .map(|(_, recs)| recs.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Priority, &[Recommendation])> {
        self.buckets.iter().map(|(p, recs)| (*p, recs.as_slice()))
    }

    pub fn priorities(&self) -> Vec<Priority> {
        self.buckets.iter().map(|(p, _)| *p).collect()
    }
}

/// Stable partition of `recommendations` by priority.
///
/// Input order is kept inside each bucket. Recommendations whose priority is
/// not `high`, `medium` or `low` are dropped.
pub fn group_by_priority(recommendations: &[Recommendation]) -> RecommendationGroups {
    let buckets = Priority::ALL
        .iter()
        .filter_map(|&priority| {
            let recs: Vec<Recommendation> = recommendations
                .iter()
                .filter(|rec| rec.priority() == Some(priority))
                .cloned()
                .collect();
            (!recs.is_empty()).then_some((priority, recs))
        })
        .collect();

    RecommendationGroups { buckets }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rec(title: &str, priority: &str) -> Recommendation {
        Recommendation {
            title: title.to_string(),
            priority: priority.to_string(),
            ..Recommendation::default()
        }
    }

    fn titles(recs: &[Recommendation]) -> Vec<&str> {
        recs.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_order_preserved_within_bucket() {
        let input = vec![rec("A", "high"), rec("B", "low"), rec("C", "high")];
        let groups = group_by_priority(&input);

        assert_eq!(titles(groups.get(Priority::High).unwrap()), vec!["A", "C"]);
        assert_eq!(titles(groups.get(Priority::Low).unwrap()), vec!["B"]);
        assert_eq!(groups.get(Priority::Medium), None);
    }

    #[test]
    fn test_bucket_order() {
        let input = vec![
            rec("low one", "low"),
            rec("medium one", "medium"),
            rec("high one", "high"),
        ];
        let groups = group_by_priority(&input);
        assert_eq!(
            groups.priorities(),
            vec![Priority::High, Priority::Medium, Priority::Low]
        );
    }

    #[test]
    fn test_unknown_priority_dropped() {
        let groups = group_by_priority(&[rec("X", "urgent")]);
        assert!(groups.is_empty());

        let groups = group_by_priority(&[rec("X", "urgent"), rec("Y", "medium"), rec("Z", "HIGH")]);
        assert_eq!(groups.priorities(), vec![Priority::Medium]);
    }

    #[test]
    fn test_non_string_priority_does_not_discard_payload() {
        let set: crate::types::RecommendationSet = serde_json::from_value(serde_json::json!({
            "recommendations": [
                { "title": "A", "priority": "high" },
                { "title": "B", "priority": 1 }
            ]
        }))
        .unwrap();
        let groups = group_by_priority(&set.recommendations);

        assert_eq!(groups.priorities(), vec![Priority::High]);
        assert_eq!(titles(groups.get(Priority::High).unwrap()), vec!["A"]);
    }

    #[test]
    fn test_empty_input() {
        let groups = group_by_priority(&[]);
        assert!(groups.is_empty());
        assert_eq!(groups.iter().count(), 0);
    }
}
