//! Query engine
//!
//! Filtering, sorting and pagination over an event snapshot. Every function
//! here is pure: it takes a snapshot and never touches the store.

mod filter;
mod paginate;
pub mod params;
mod sort;

pub use filter::filter_events;
pub use paginate::paginate;
pub use params::EventListParams;
pub use sort::{sort_events, sorted};

use crate::error::DashboardResult;
use crate::types::{EventFilters, InsightEvent, Page, SortField, SortOrder};

/// A complete list request: filter, optional sort, page window
#[derive(Debug, Clone, PartialEq)]
pub struct EventQuery {
    pub filters: EventFilters,
    pub sort: Option<(SortField, SortOrder)>,
    pub page: i64,
    pub limit: i64,
}

impl Default for EventQuery {
    fn default() -> Self {
        Self {
            filters: EventFilters::default(),
            sort: None,
            page: params::DEFAULT_PAGE,
            limit: params::DEFAULT_LIMIT,
        }
    }
}

impl EventQuery {
    pub fn new(filters: EventFilters) -> Self {
        Self {
            filters,
            ..Default::default()
        }
    }

    pub fn sorted_by(mut self, field: SortField, order: SortOrder) -> Self {
        self.sort = Some((field, order));
        self
    }

    pub fn page(mut self, page: i64, limit: i64) -> Self {
        self.page = page;
        self.limit = limit;
        self
    }

    /// Filter, then sort, then paginate `snapshot`
    pub fn run(&self, snapshot: &[InsightEvent]) -> DashboardResult<Page<InsightEvent>> {
        let mut events = filter_events(snapshot, &self.filters);
        if let Some((field, order)) = self.sort {
            sort_events(&mut events, field, order);
        }
        tracing::debug!(
            matched = events.len(),
            of = snapshot.len(),
            sorted = self.sort.is_some(),
            "event query"
        );
        paginate(events, self.page, self.limit)
    }
}
