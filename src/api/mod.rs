//! HTTP API for the insight dashboard
//!
//! Handlers resolve the caller with [`extract::CurrentUser`], call one
//! [`Dashboard`](crate::dashboard::Dashboard) operation and map its error
//! through [`error::ApiError`].

pub mod error;
pub mod extract;
pub mod http;
pub mod rest;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use http::create_router;
pub use state::AppState;
