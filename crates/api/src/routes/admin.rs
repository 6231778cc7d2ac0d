use axum::routing::{get, post};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Moderation routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin/events", get(admin::list_events))
        .route("/events/{id}/approve", post(admin::approve_event))
        .route("/events/{id}/reject", post(admin::reject_event))
        .route("/events/{id}/publish", post(admin::publish_event))
}
