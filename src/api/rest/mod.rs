//! REST API handlers
//!
//! - `POST /api/auth/login`, `POST /api/auth/logout`, `GET /api/auth/me`
//! - `GET|POST /api/events`, `GET /api/events/stats`
//! - `GET|PUT|DELETE /api/events/:id`
//! - `GET /api/users`, `PUT /api/users/:id/role`

pub mod auth;
pub mod events;
pub mod users;

use serde::Serialize;

/// Body for operations with nothing else to report
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
