use axum::routing::get;
use axum::Router;

use crate::handlers::taxonomies;
use crate::state::AppState;

/// Reference-vocabulary routes for the submission form.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/themes", get(taxonomies::list_themes))
        .route("/audiences", get(taxonomies::list_audiences))
}
