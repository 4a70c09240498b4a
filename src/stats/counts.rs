//! Category and severity counts

use crate::types::{EventStats, InsightEvent};

/// Count events per category and severity
///
/// Every category and severity appears in the result, zero-filled.
pub fn compute_stats(snapshot: &[InsightEvent]) -> EventStats {
    snapshot.iter().fold(EventStats::zeroed(), |mut stats, event| {
        stats.record(event.category, event.severity);
        stats
    })
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::store::EventStore;
    use crate::types::{Category, Severity};

    #[test]
    fn test_empty_snapshot_is_zero_filled() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.by_category.len(), 6);
        assert_eq!(stats.by_severity.len(), 3);
        assert!(stats.by_category.values().all(|c| *c == 0));
        assert!(stats.by_severity.values().all(|c| *c == 0));
        assert_eq!(stats.by_category.keys().copied().collect::<Vec<_>>(), Category::ALL.to_vec());
        assert_eq!(stats.by_severity.keys().copied().collect::<Vec<_>>(), Severity::ALL.to_vec());
    }

    #[test]
    fn test_stats_serialize_with_variant_keys() {
        let store = EventStore::with_seed_data(Utc::now()).unwrap();
        let stats = compute_stats(&store.all());

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["byCategory"]["Ops"], 7);
        assert_eq!(json["bySeverity"]["High"], 10);

        let back: EventStats = serde_json::from_value(json).unwrap();
        assert_eq!(back, stats);
    }

    #[test]
    fn test_seed_counts() {
        let store = EventStore::with_seed_data(Utc::now()).unwrap();
        let snapshot = store.all();
        let stats = compute_stats(&snapshot);

        assert_eq!(stats.total, 32);
        assert_eq!(stats.by_category.values().sum::<usize>(), 32);
        assert_eq!(stats.by_severity.values().sum::<usize>(), 32);

        let high = snapshot.iter().filter(|e| e.severity == Severity::High).count();
        assert_eq!(stats.severity_count(Severity::High), high);
        assert_eq!(stats.severity_count(Severity::High), 10);
        assert_eq!(stats.severity_count(Severity::Medium), 11);
        assert_eq!(stats.severity_count(Severity::Low), 11);
        assert_eq!(stats.category_count(Category::Ops), 7);
        assert_eq!(stats.category_count(Category::Fraud), 5);
    }
}
