//! Daily event counts

use std::collections::HashMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::types::{InsightEvent, TrendPoint};
use crate::utils::time::{day_label, utc_day};

/// Default trend window in days
pub const DEFAULT_TREND_DAYS: u32 = 14;

/// One point per UTC calendar day from `now - (days - 1)` through `now`
///
/// Oldest day first. `days == 0` yields an empty series.
pub fn compute_trend(snapshot: &[InsightEvent], days: u32, now: DateTime<Utc>) -> Vec<TrendPoint> {
    let mut per_day: HashMap<NaiveDate, usize> = HashMap::new();
    for event in snapshot {
        *per_day.entry(utc_day(&event.created_at)).or_insert(0) += 1;
    }

    let today = utc_day(&now);
    (0..days)
        .rev()
        .map(|offset| {
            let day = today - Duration::days(i64::from(offset));
            TrendPoint {
                date: day_label(day),
                day,
                count: per_day.get(&day).copied().unwrap_or(0),
            }
        })
        .collect()
}
