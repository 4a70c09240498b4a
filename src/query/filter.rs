//! Conjunctive event filtering

use rayon::prelude::*;

use crate::types::{EventFilters, InsightEvent};

/// Threshold for using parallel filtering (event count)
const PARALLEL_FILTER_THRESHOLD: usize = 1000;

/// Apply `criteria` to `snapshot`, keeping input order
///
/// With no dimension constrained the snapshot is returned as-is.
pub fn filter_events(snapshot: &[InsightEvent], criteria: &EventFilters) -> Vec<InsightEvent> {
    if criteria.is_unconstrained() {
        return snapshot.to_vec();
    }

    let needle = criteria.search.as_deref().map(str::to_lowercase);
    let matcher = |e: &&InsightEvent| matches(e, criteria, needle.as_deref());

    // Indexed parallel collect keeps the original order
    if snapshot.len() > PARALLEL_FILTER_THRESHOLD {
        snapshot.par_iter().filter(matcher).cloned().collect()
    } else {
        snapshot.iter().filter(matcher).cloned().collect()
    }
}

/// True when `event` satisfies every present dimension of `criteria`
///
/// `needle` is the lowercased search term.
fn matches(event: &InsightEvent, criteria: &EventFilters, needle: Option<&str>) -> bool {
    if let Some(categories) = &criteria.category {
        if !categories.contains(&event.category) {
            return false;
        }
    }

    if let Some(severities) = &criteria.severity {
        if !severities.contains(&event.severity) {
            return false;
        }
    }

    if let Some(min_score) = criteria.min_score {
        if i64::from(event.metrics.score) < min_score {
            return false;
        }
    }

    if let Some(range) = &criteria.date_range {
        if !range.contains(&event.created_at) {
            return false;
        }
    }

    if let Some(needle) = needle {
        let hit = event.title.to_lowercase().contains(needle)
            || event.description.to_lowercase().contains(needle)
            || event.tags.iter().any(|t| t.to_lowercase().contains(needle));
        if !hit {
            return false;
        }
    }

    if let Some(tags) = &criteria.tags {
        if !event.tags.iter().any(|t| tags.contains(t)) {
            return false;
        }
    }

    true
}
