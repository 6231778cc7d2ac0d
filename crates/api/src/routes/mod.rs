pub mod admin;
pub mod events;
pub mod health;
pub mod taxonomies;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /events                      submit (POST, public), list (GET, public)
/// /events/{public_id}          public detail (GET)
/// /events/{id}/approve         approve (POST, admin)
/// /events/{id}/reject          reject with reason (POST, admin)
/// /events/{id}/publish         publish (POST, admin)
/// /admin/events                full listing (GET, admin)
/// /themes                      submission-form vocabulary (GET)
/// /audiences                   submission-form vocabulary (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(events::router())
        .merge(admin::router())
        .merge(taxonomies::router())
}
