//! Stable event sorting

use std::cmp::Ordering;

use crate::types::{InsightEvent, SortField, SortOrder};

/// Sort `events` in place by `field`
///
/// The sort is stable in both directions: descending order compares with
/// the operands swapped instead of reversing the output, so equal keys keep
/// their input order.
pub fn sort_events(events: &mut [InsightEvent], field: SortField, order: SortOrder) {
    events.sort_by(|a, b| match order {
        SortOrder::Asc => compare(a, b, field),
        SortOrder::Desc => compare(b, a, field),
    });
}

/// Owned convenience wrapper around [`sort_events`]
pub fn sorted(mut events: Vec<InsightEvent>, field: SortField, order: SortOrder) -> Vec<InsightEvent> {
    sort_events(&mut events, field, order);
    events
}

fn compare(a: &InsightEvent, b: &InsightEvent, field: SortField) -> Ordering {
    match field {
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::Severity => a.severity.rank().cmp(&b.severity.rank()),
        SortField::Score => a.metrics.score.cmp(&b.metrics.score),
        // Byte-wise, so uppercase sorts before lowercase
        SortField::Title => a.title.cmp(&b.title),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;
    use crate::types::{Category, Location, Metrics, Severity};

    fn event(id: &str, title: &str, severity: Severity, score: u8, hours_ago: i64) -> InsightEvent {
        InsightEvent {
            id: id.to_string(),
            title: title.to_string(),
            description: "d".to_string(),
            category: Category::Ops,
            severity,
            created_at: Utc::now() - Duration::hours(hours_ago),
            updated_at: None,
            location: Location::new(0.0, 0.0, None),
            metrics: Metrics {
                score,
                confidence: 0.5,
                impact: 0,
            },
            tags: vec![],
            created_by: None,
        }
    }

    fn sample() -> Vec<InsightEvent> {
        vec![
            event("1", "beta", Severity::Medium, 70, 5),
            event("2", "Alpha", Severity::High, 90, 1),
            event("3", "gamma", Severity::Low, 70, 3),
            event("4", "alpha", Severity::Medium, 10, 4),
            event("5", "Delta", Severity::High, 55, 2),
        ]
    }

    fn ids(events: &[InsightEvent]) -> Vec<&str> {
        events.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_severity_uses_rank_not_name() {
        let asc = sorted(sample(), SortField::Severity, SortOrder::Asc);
        assert_eq!(ids(&asc), vec!["3", "1", "4", "2", "5"]);
    }

    #[test]
    fn test_severity_desc_is_stable() {
        let desc = sorted(sample(), SortField::Severity, SortOrder::Desc);
        // High ties (2, 5) and Medium ties (1, 4) keep input order
        assert_eq!(ids(&desc), vec!["2", "5", "1", "4", "3"]);
    }

    #[test]
    fn test_score_ties_keep_input_order() {
        let desc = sorted(sample(), SortField::Score, SortOrder::Desc);
        assert_eq!(ids(&desc), vec!["2", "1", "3", "5", "4"]);
        let asc = sorted(sample(), SortField::Score, SortOrder::Asc);
        assert_eq!(ids(&asc), vec!["4", "5", "1", "3", "2"]);
    }

    #[test]
    fn test_created_at_chronological() {
        let asc = sorted(sample(), SortField::CreatedAt, SortOrder::Asc);
        assert_eq!(ids(&asc), vec!["1", "4", "3", "5", "2"]);
        let desc = sorted(sample(), SortField::CreatedAt, SortOrder::Desc);
        assert_eq!(ids(&desc), vec!["2", "5", "3", "4", "1"]);
    }

    #[test]
    fn test_title_is_case_aware() {
        let asc = sorted(sample(), SortField::Title, SortOrder::Asc);
        assert_eq!(ids(&asc), vec!["2", "5", "4", "1", "3"]);
    }
}
