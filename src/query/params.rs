//! Query-string parameters for the event list
//!
//! Every value arrives as a raw string so that malformed input surfaces as
//! `InvalidArgument` instead of a framework rejection.

use std::collections::HashSet;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{DashboardError, DashboardResult};
use crate::types::{DateRange, EventFilters, SortField, SortOrder};
use crate::utils::time::{parse_date_param, DayBound};

use super::EventQuery;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 50;

/// Raw `GET /api/events` parameters
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventListParams {
    /// Comma-separated categories
    pub category: Option<String>,
    /// Comma-separated severities
    pub severity: Option<String>,
    pub min_score: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub search: Option<String>,
    /// Comma-separated tags
    pub tags: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    /// createdAt | severity | score | title
    pub sort: Option<String>,
    /// asc | desc
    pub order: Option<String>,
}

impl EventListParams {
    /// Validate and convert into an [`EventQuery`]
    ///
    /// Empty parameters count as absent.
    pub fn into_query(self) -> DashboardResult<EventQuery> {
        let mut filters = EventFilters::default();

        if let Some(raw) = present(&self.category) {
            filters.category = Some(parse_list(raw)?);
        }
        if let Some(raw) = present(&self.severity) {
            filters.severity = Some(parse_list(raw)?);
        }
        if let Some(raw) = present(&self.min_score) {
            filters.min_score = Some(parse_int("minScore", raw)?);
        }

        filters.date_range = match (present(&self.start_date), present(&self.end_date)) {
            (Some(start), Some(end)) => {
                let range = DateRange {
                    start: parse_date_param(start, DayBound::Start)?,
                    end: parse_date_param(end, DayBound::End)?,
                };
                if range.start > range.end {
                    return Err(DashboardError::InvalidArgument(
                        "startDate must not be after endDate".to_string(),
                    ));
                }
                Some(range)
            }
            (None, None) => None,
            _ => {
                return Err(DashboardError::InvalidArgument(
                    "startDate and endDate must be given together".to_string(),
                ))
            }
        };

        if let Some(raw) = present(&self.search) {
            filters.search = Some(raw.to_string());
        }
        if let Some(raw) = present(&self.tags) {
            let tags: HashSet<String> = split(raw).map(str::to_string).collect();
            filters.tags = Some(tags);
        }

        let page = match present(&self.page) {
            Some(raw) => parse_int("page", raw)?,
            None => DEFAULT_PAGE,
        };
        let limit = match present(&self.limit) {
            Some(raw) => parse_int("limit", raw)?,
            None => DEFAULT_LIMIT,
        };

        let sort = match present(&self.sort) {
            Some(raw) => {
                let field = parse_sort_field(raw)?;
                let order = match present(&self.order) {
                    Some(raw) => parse_sort_order(raw)?,
                    None => SortOrder::default(),
                };
                Some((field, order))
            }
            None => None,
        };

        Ok(EventQuery {
            filters,
            sort,
            page,
            limit,
        })
    }
}

pub fn parse_sort_field(raw: &str) -> DashboardResult<SortField> {
    match raw.trim() {
        "createdAt" => Ok(SortField::CreatedAt),
        "severity" => Ok(SortField::Severity),
        "score" => Ok(SortField::Score),
        "title" => Ok(SortField::Title),
        other => Err(DashboardError::InvalidArgument(format!(
            "cannot sort by '{}'",
            other
        ))),
    }
}

pub fn parse_sort_order(raw: &str) -> DashboardResult<SortOrder> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "asc" => Ok(SortOrder::Asc),
        "desc" => Ok(SortOrder::Desc),
        other => Err(DashboardError::InvalidArgument(format!(
            "unknown sort order '{}'",
            other
        ))),
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn split(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty())
}

fn parse_list<T>(raw: &str) -> DashboardResult<HashSet<T>>
where
    T: FromStr<Err = DashboardError> + Eq + std::hash::Hash,
{
    split(raw).map(T::from_str).collect()
}

fn parse_int(name: &str, raw: &str) -> DashboardResult<i64> {
    raw.parse::<i64>().map_err(|_| {
        DashboardError::InvalidArgument(format!("{} must be an integer, got '{}'", name, raw))
    })
}
