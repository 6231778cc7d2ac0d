//! Administrator moderation endpoints.
//!
//! Each transition delegates to [`techweek_lifecycle::LifecycleService`];
//! the handler layer only shapes requests and responses. Wrong-state
//! transitions surface as 409, unknown IDs as 404, provider failures as
//! 502 — with no partial state left behind.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use techweek_core::types::DbId;
use techweek_db::repositories::EventRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for the reject endpoint.
#[derive(Debug, Deserialize)]
pub struct RejectRequest {
    pub reason: String,
}

/// GET /api/v1/admin/events
///
/// Every event regardless of state, newest submission first.
pub async fn list_events(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let events = EventRepo::list_admin(&state.pool).await?;
    Ok(Json(DataResponse { data: events }))
}

/// POST /api/v1/events/{id}/approve
pub async fn approve_event(
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let event = state.lifecycle.approve(event_id).await?;
    Ok(Json(DataResponse { data: event }))
}

/// POST /api/v1/events/{id}/reject
pub async fn reject_event(
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
    Json(input): Json<RejectRequest>,
) -> AppResult<impl IntoResponse> {
    let event = state.lifecycle.reject(event_id, &input.reason).await?;
    Ok(Json(DataResponse { data: event }))
}

/// POST /api/v1/events/{id}/publish
pub async fn publish_event(
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let event = state.lifecycle.publish(event_id).await?;
    Ok(Json(DataResponse { data: event }))
}
