//! Derived insights
//!
//! Rules run in a fixed order and each contributes at most one insight:
//!
//! 1. High-severity week-over-week change (skipped when the prior week had none)
//! 2. Top category over the trailing 7 days (skipped when the week is empty)
//! 3. Highest single impact event (skipped only for an empty snapshot)

use chrono::{DateTime, Duration, Utc};

use crate::types::{Category, Insight, InsightEvent, Severity, TrendDirection};

/// `[start, end)` membership
fn within(at: &DateTime<Utc>, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
    *at >= start && *at < end
}

/// Evaluate all insight rules against `snapshot` as of `now`
pub fn compute_insights(snapshot: &[InsightEvent], now: DateTime<Utc>) -> Vec<Insight> {
    [
        high_severity_change(snapshot, now),
        top_category(snapshot, now),
        highest_impact(snapshot),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Rule 1: High severity count in `[now-7d, now)` against `[now-14d, now-7d)`
pub fn high_severity_change(snapshot: &[InsightEvent], now: DateTime<Utc>) -> Option<Insight> {
    let week_ago = now - Duration::days(7);
    let two_weeks_ago = now - Duration::days(14);

    let high = snapshot.iter().filter(|e| e.severity == Severity::High);
    let (current, prior) = high.fold((0u64, 0u64), |(cur, prev), e| {
        if within(&e.created_at, week_ago, now) {
            (cur + 1, prev)
        } else if within(&e.created_at, two_weeks_ago, week_ago) {
            (cur, prev + 1)
        } else {
            (cur, prev)
        }
    });

    if prior == 0 {
        return None;
    }

    let delta = current.abs_diff(prior);
    let percentage = ((delta as f64 / prior as f64) * 100.0).round() as u64;

    let (trend, description) = if current > prior {
        (
            TrendDirection::Up,
            format!("Increased by {}% vs previous 7 days", percentage),
        )
    } else if current < prior {
        (
            TrendDirection::Down,
            format!("Decreased by {}% vs previous 7 days", percentage),
        )
    } else {
        (
            TrendDirection::Stable,
            "Unchanged vs previous 7 days".to_string(),
        )
    };

    Some(Insight {
        title: "High Severity Events".to_string(),
        description,
        trend,
        percentage: Some(percentage),
    })
}

/// Rule 2: most frequent category in `[now-7d, now)`
///
/// Ties go to the category encountered first while iterating the snapshot.
pub fn top_category(snapshot: &[InsightEvent], now: DateTime<Utc>) -> Option<Insight> {
    let week_ago = now - Duration::days(7);

    // First-seen order is kept by pushing to the end
    let mut counts: Vec<(Category, usize)> = Vec::new();
    for event in snapshot.iter().filter(|e| within(&e.created_at, week_ago, now)) {
        match counts.iter_mut().find(|(c, _)| *c == event.category) {
            Some((_, n)) => *n += 1,
            None => counts.push((event.category, 1)),
        }
    }

    let mut best: Option<(Category, usize)> = None;
    for (category, count) in counts {
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((category, count));
        }
    }

    best.map(|(category, count)| Insight {
        title: "Top Category This Week".to_string(),
        description: format!("{} ({} events)", category, count),
        trend: TrendDirection::Stable,
        percentage: None,
    })
}

/// Rule 3: event with the largest `metrics.impact`, first one wins ties
pub fn highest_impact(snapshot: &[InsightEvent]) -> Option<Insight> {
    let mut best: Option<&InsightEvent> = None;
    for event in snapshot {
        if best.map_or(true, |b| event.metrics.impact > b.metrics.impact) {
            best = Some(event);
        }
    }

    best.map(|event| Insight {
        title: "Highest Impact Event".to_string(),
        description: format!("{} (Impact: {})", event.title, event.metrics.impact),
        trend: TrendDirection::Stable,
        percentage: None,
    })
}
