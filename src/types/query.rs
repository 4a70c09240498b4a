//! Filter criteria, sort keys and pages

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Category, Severity};

/// Inclusive `createdAt` bounds; both ends are always present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn contains(&self, at: &DateTime<Utc>) -> bool {
        *at >= self.start && *at <= self.end
    }
}

/// Conjunctive filter criteria
///
/// `None` means "do not filter on this dimension". `Some` of an empty set is
/// a real constraint that nothing satisfies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<HashSet<Category>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<HashSet<Severity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_score: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashSet<String>>,
}

impl EventFilters {
    /// True when no dimension is constrained
    pub fn is_unconstrained(&self) -> bool {
        self.category.is_none()
            && self.severity.is_none()
            && self.min_score.is_none()
            && self.date_range.is_none()
            && self.search.is_none()
            && self.tags.is_none()
    }

    pub fn with_categories<I: IntoIterator<Item = Category>>(mut self, categories: I) -> Self {
        self.category = Some(categories.into_iter().collect());
        self
    }

    pub fn with_severities<I: IntoIterator<Item = Severity>>(mut self, severities: I) -> Self {
        self.severity = Some(severities.into_iter().collect());
        self
    }

    pub fn with_min_score(mut self, min_score: i64) -> Self {
        self.min_score = Some(min_score);
        self
    }

    pub fn with_date_range(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.date_range = Some(DateRange { start, end });
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }
}

/// Field an event list can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    CreatedAt,
    Severity,
    Score,
    Title,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// One page of a longer sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
}
