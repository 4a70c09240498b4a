//! Aggregate statistics and insights

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Category, Severity};

/// Counts over a snapshot
///
/// Both maps always hold every category / severity, zero-filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventStats {
    pub total: usize,
    pub by_category: BTreeMap<Category, usize>,
    pub by_severity: BTreeMap<Severity, usize>,
}

impl EventStats {
    /// All-zero counts with every category and severity present
    pub fn zeroed() -> Self {
        Self {
            total: 0,
            by_category: Category::ALL.iter().map(|c| (*c, 0)).collect(),
            by_severity: Severity::ALL.iter().map(|s| (*s, 0)).collect(),
        }
    }

    /// Count one event
    pub fn record(&mut self, category: Category, severity: Severity) {
        self.total += 1;
        *self.by_category.entry(category).or_default() += 1;
        *self.by_severity.entry(severity).or_default() += 1;
    }

    pub fn category_count(&self, category: Category) -> usize {
        self.by_category.get(&category).copied().unwrap_or_default()
    }

    pub fn severity_count(&self, severity: Severity) -> usize {
        self.by_severity.get(&severity).copied().unwrap_or_default()
    }
}

/// Events created on one UTC calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Display label, e.g. `Oct 16`
    pub date: String,
    /// The calendar day itself
    pub day: NaiveDate,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

/// A human-readable observation derived from the collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub title: String,
    pub description: String,
    pub trend: TrendDirection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<u64>,
}

/// Everything the dashboard landing page shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub stats: EventStats,
    pub trend_data: Vec<TrendPoint>,
    pub insights: Vec<Insight>,
}
