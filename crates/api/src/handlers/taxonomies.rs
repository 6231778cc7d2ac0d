//! Reference-vocabulary endpoints backing the submission form.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use techweek_db::repositories::TaxonomyRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/themes
pub async fn list_themes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let themes = TaxonomyRepo::list_themes(&state.pool).await?;
    Ok(Json(DataResponse { data: themes }))
}

/// GET /api/v1/audiences
pub async fn list_audiences(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let audiences = TaxonomyRepo::list_audiences(&state.pool).await?;
    Ok(Json(DataResponse { data: audiences }))
}
