//! Data types for the insight dashboard
//!
//! This module contains all the core data structures used throughout the application.

mod event;
mod query;
mod role;
mod summary;
mod user;

pub use event::{Category, EventPatch, InsightEvent, Location, Metrics, NewEvent, Severity};
pub use query::{DateRange, EventFilters, Page, SortField, SortOrder};
pub use role::{Action, Principal, Role};
pub use summary::{DashboardSummary, EventStats, Insight, TrendDirection, TrendPoint};
pub use user::{User, UserSummary};
