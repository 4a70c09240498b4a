//! Session endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse},
    Json,
};
use serde::{Deserialize, Serialize};

use super::SuccessResponse;
use crate::api::error::ApiResult;
use crate::api::extract::{CurrentUser, JsonBody, TOKEN_COOKIE};
use crate::api::state::AppState;
use crate::error::DashboardError;
use crate::types::Principal;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: Principal,
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: Principal,
}

fn session_cookie(value: &str, max_age: i64) -> String {
    format!(
        "{}={}; HttpOnly; SameSite=Lax; Path=/; Max-Age={}",
        TOKEN_COOKIE, value, max_age
    )
}

/// POST /api/auth/login - Exchange credentials for a session token
pub async fn login(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<LoginRequest>,
) -> ApiResult<impl IntoResponse> {
    if body.email.trim().is_empty() || body.password.is_empty() {
        return Err(DashboardError::InvalidArgument("Email and password are required".into()).into());
    }

    let session = state.dashboard.login(body.email.trim(), &body.password)?;
    let cookie = session_cookie(&session.token, state.dashboard.token_ttl());

    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(LoginResponse {
            user: session.user,
            token: session.token,
        }),
    ))
}

/// POST /api/auth/logout - Clear the session cookie
pub async fn logout() -> impl IntoResponse {
    (
        AppendHeaders([(SET_COOKIE, session_cookie("", 0))]),
        Json(SuccessResponse::ok()),
    )
}

/// GET /api/auth/me - The authenticated caller
pub async fn me(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
) -> ApiResult<Json<UserResponse>> {
    let user = state.dashboard.current_user(user.principal())?;
    Ok(Json(UserResponse { user }))
}
