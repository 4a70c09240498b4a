//! User administration endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::error::ApiResult;
use crate::api::extract::{CurrentUser, JsonBody};
use crate::api::state::AppState;
use crate::types::UserSummary;

#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub users: Vec<UserSummary>,
}

#[derive(Debug, Deserialize)]
pub struct RoleChangeRequest {
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct RoleChangeResponse {
    pub success: bool,
    pub user: UserSummary,
}

/// GET /api/users - All users, without password hashes
pub async fn list_users(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
) -> ApiResult<Json<UserListResponse>> {
    let users = state.dashboard.list_users(user.principal())?;
    Ok(Json(UserListResponse { users }))
}

/// PUT /api/users/:id/role - Assign a new role
pub async fn change_role(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<RoleChangeRequest>,
) -> ApiResult<Json<RoleChangeResponse>> {
    let updated = state
        .dashboard
        .change_role(user.principal(), &id, &body.role)?;
    Ok(Json(RoleChangeResponse {
        success: true,
        user: updated,
    }))
}
