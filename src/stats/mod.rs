//! Statistics and insight engine
//!
//! Summaries are derived on demand from a snapshot; nothing is cached.

mod counts;
mod insights;
mod trend;

pub use counts::compute_stats;
pub use insights::{compute_insights, high_severity_change, highest_impact, top_category};
pub use trend::{compute_trend, DEFAULT_TREND_DAYS};

use chrono::{DateTime, Utc};

use crate::types::{DashboardSummary, InsightEvent};

/// Stats, 14-day trend and insights in one pass over the same snapshot
pub fn summarize(snapshot: &[InsightEvent], now: DateTime<Utc>) -> DashboardSummary {
    DashboardSummary {
        stats: compute_stats(snapshot),
        trend_data: compute_trend(snapshot, DEFAULT_TREND_DAYS, now),
        insights: compute_insights(snapshot, now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::EventStore;

    #[test]
    fn test_summary_over_seed_data() {
        let now = Utc::now();
        let store = EventStore::with_seed_data(now).unwrap();
        let summary = summarize(&store.all(), now);

        assert_eq!(summary.stats.total, 32);
        assert_eq!(summary.trend_data.len(), 14);
        // Every seed event is at most 11 days old
        assert_eq!(summary.trend_data.iter().map(|p| p.count).sum::<usize>(), 32);

        // All seeded High events are under two days old, so the
        // week-over-week rule has no prior window to compare against
        let titles: Vec<&str> = summary.insights.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Top Category This Week", "Highest Impact Event"]);
        assert_eq!(summary.insights[0].description, "Ops (7 events)");
        assert_eq!(
            summary.insights[1].description,
            "Quarterly Revenue Target Exceeded (Impact: 15200)"
        );
    }
}
