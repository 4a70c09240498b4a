//! Event endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Serialize;

use super::SuccessResponse;
use crate::api::error::ApiResult;
use crate::api::extract::{CurrentUser, JsonBody};
use crate::api::state::AppState;
use crate::auth::authenticate;
use crate::query::EventListParams;
use crate::types::{DashboardSummary, EventPatch, InsightEvent, NewEvent, Page};

/// Paginated event list
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventListResponse {
    pub events: Vec<InsightEvent>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
}

impl From<Page<InsightEvent>> for EventListResponse {
    fn from(page: Page<InsightEvent>) -> Self {
        Self {
            events: page.items,
            total: page.total,
            page: page.page,
            limit: page.limit,
            total_pages: page.total_pages,
        }
    }
}

/// GET /api/events - Filter, sort and paginate events
pub async fn list_events(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Query(params): Query<EventListParams>,
) -> ApiResult<Json<EventListResponse>> {
    // A missing session outranks malformed filters
    authenticate(user.principal())?;
    let query = params.into_query()?;
    let page = state.dashboard.list_events(user.principal(), &query)?;
    Ok(Json(page.into()))
}

/// POST /api/events - Create an event as the caller
pub async fn create_event(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    JsonBody(fields): JsonBody<NewEvent>,
) -> ApiResult<impl IntoResponse> {
    let event = state.dashboard.create_event(user.principal(), fields)?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// GET /api/events/stats - Counts, 14-day trend and insights
pub async fn get_stats(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
) -> ApiResult<Json<DashboardSummary>> {
    let summary = state.dashboard.summary(user.principal(), Utc::now())?;
    Ok(Json(summary))
}

/// GET /api/events/:id
pub async fn get_event(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<InsightEvent>> {
    Ok(Json(state.dashboard.get_event(user.principal(), &id)?))
}

/// PUT /api/events/:id - Merge a partial update
pub async fn update_event(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<EventPatch>,
) -> ApiResult<Json<InsightEvent>> {
    Ok(Json(state.dashboard.update_event(user.principal(), &id, patch)?))
}

/// DELETE /api/events/:id
pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<SuccessResponse>> {
    state.dashboard.delete_event(user.principal(), &id)?;
    Ok(Json(SuccessResponse::ok()))
}
