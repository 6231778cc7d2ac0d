use axum::routing::{get, post};
use axum::Router;

use crate::handlers::events;
use crate::state::AppState;

/// Public event routes: submission, listing, detail.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/events",
            post(events::submit_event).get(events::list_events),
        )
        .route("/events/{public_id}", get(events::get_event))
}
