//! Insight Dashboard
//!
//! Role-based access to a store of insight events, with a query engine and
//! derived statistics, served over a JSON HTTP API.
//!
//! # Features
//!
//! - **RBAC**: static admin / analyst / viewer permission matrix and a single gate
//! - **Event Store**: thread-safe in-memory repository with never-reused ids
//! - **Query Engine**: composable filters, stable sort, 1-based pagination
//! - **Insights**: per-category and per-severity counts, 14-day trend, derived insights
//! - **Sessions**: bcrypt passwords and HS256 JWT tokens
//!
//! # Modules
//!
//! - `types`: Core data structures (InsightEvent, Principal, EventFilters, ...)
//! - `error`: Error taxonomy shared by every operation
//! - `auth`: Permission matrix, authorization gate, credentials, user directory
//! - `store`: Event repository and demo seed data
//! - `query`: Filter, sort, paginate, query-string parsing
//! - `stats`: Counts, trend and insight rules
//! - `dashboard`: Gated facade, one method per API operation
//! - `api`: Axum router and handlers
//! - `config`: Environment configuration
//! - `utils`: UTC calendar helpers
//!
//! # Example
//!
//! ```no_run
//! use insight_dashboard::auth::{BcryptHasher, JwtAuth};
//! use insight_dashboard::query::EventQuery;
//! use insight_dashboard::Dashboard;
//!
//! let dashboard = Dashboard::new(
//!     JwtAuth::new(&JwtAuth::generate_secret()),
//!     BcryptHasher::default(),
//! );
//! dashboard.seed_demo_data(chrono::Utc::now()).unwrap();
//!
//! let session = dashboard.login("viewer@test.com", "password").unwrap();
//! let page = dashboard
//!     .list_events(Some(&session.user), &EventQuery::default())
//!     .unwrap();
//! assert_eq!(page.total, 32);
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod query;
pub mod stats;
pub mod store;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{ConfigError, ServerConfig};
pub use dashboard::{Dashboard, Session};
pub use error::{DashboardError, DashboardResult};
pub use store::EventStore;
pub use types::{
    Action, Category, DashboardSummary, EventFilters, EventPatch, InsightEvent, NewEvent, Page,
    Principal, Role, Severity,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
