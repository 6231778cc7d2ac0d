//! Public-facing event endpoints: submission, listing, detail.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use techweek_core::format::validate_format;
use techweek_core::lifecycle::EventStatus;
use techweek_core::types::{DbId, Timestamp};
use techweek_core::CoreError;
use techweek_db::models::cohost::CreateCohost;
use techweek_db::models::event::{CreateEvent, Event};
use techweek_db::repositories::{CohostRepo, EventRepo, TaxonomyRepo};
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for the public submission form.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitEventRequest {
    #[validate(length(min = 3, max = 200, message = "title must be 3-200 characters"))]
    pub title: String,
    #[validate(length(min = 10, message = "description must be at least 10 characters"))]
    pub description: String,
    #[validate(length(min = 1, message = "commune is required"))]
    pub commune: String,
    pub format: String,
    #[validate(range(min = 1, max = 10000, message = "capacity must be 1-10000"))]
    pub capacity: i32,
    #[validate(url(message = "logo_url must be a valid URL"))]
    pub logo_url: Option<String>,
    #[validate(length(min = 1, message = "organizer_name is required"))]
    pub organizer_name: String,
    #[validate(email(message = "organizer_email must be a valid email"))]
    pub organizer_email: String,
    pub start_at: Timestamp,
    pub end_at: Timestamp,
    #[validate(nested)]
    #[serde(default)]
    pub cohosts: Vec<CohostRequest>,
    #[serde(default)]
    pub theme_ids: Vec<DbId>,
    #[serde(default)]
    pub audience_ids: Vec<DbId>,
}

/// A co-host entry on the submission form.
#[derive(Debug, Deserialize, Validate)]
pub struct CohostRequest {
    #[validate(length(min = 1, message = "co-host company_name is required"))]
    pub company_name: String,
    pub logo_url: Option<String>,
    #[validate(length(min = 1, message = "co-host contact_name is required"))]
    pub contact_name: String,
    #[validate(email(message = "co-host contact_email must be a valid email"))]
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub website: Option<String>,
    pub linkedin: Option<String>,
}

/// POST /api/v1/events
///
/// Create an event in `Submitted` state, with its co-hosts and
/// theme/audience links. No email is sent at submission time.
pub async fn submit_event(
    State(state): State<AppState>,
    Json(input): Json<SubmitEventRequest>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    validate_format(&input.format).map_err(CoreError::Validation)?;
    if input.end_at <= input.start_at {
        return Err(CoreError::Validation("end_at must be after start_at".to_string()).into());
    }

    let create = CreateEvent {
        title: input.title.clone(),
        description: input.description.clone(),
        commune: input.commune.clone(),
        format: input.format.clone(),
        capacity: input.capacity,
        logo_url: input.logo_url.clone(),
        organizer_name: input.organizer_name.clone(),
        organizer_email: input.organizer_email.clone(),
        start_at: input.start_at,
        end_at: input.end_at,
    };
    let event = EventRepo::create(&state.pool, &create).await?;

    for cohost in &input.cohosts {
        let create = CreateCohost {
            company_name: cohost.company_name.clone(),
            logo_url: cohost.logo_url.clone(),
            contact_name: cohost.contact_name.clone(),
            contact_email: cohost.contact_email.clone(),
            contact_phone: cohost.contact_phone.clone(),
            website: cohost.website.clone(),
            linkedin: cohost.linkedin.clone(),
        };
        CohostRepo::create(&state.pool, event.id, &create).await?;
    }
    for theme_id in &input.theme_ids {
        TaxonomyRepo::link_theme(&state.pool, event.id, *theme_id).await?;
    }
    for audience_id in &input.audience_ids {
        TaxonomyRepo::link_audience(&state.pool, event.id, *audience_id).await?;
    }

    tracing::info!(
        event_id = event.id,
        public_id = %event.public_id,
        cohosts = input.cohosts.len(),
        "Event submitted"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: event })))
}

/// GET /api/v1/events
///
/// Public listing: approved events (whatever their later state) except
/// soft-deleted ones, ordered by start time.
pub async fn list_events(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let events = EventRepo::list_public(&state.pool).await?;
    Ok(Json(DataResponse { data: events }))
}

/// GET /api/v1/events/{public_id}
///
/// Public event detail, addressed by the external UUID. Unapproved and
/// soft-deleted events are indistinguishable from missing ones.
pub async fn get_event(
    State(state): State<AppState>,
    Path(public_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let event = EventRepo::find_by_public_id(&state.pool, public_id)
        .await?
        .filter(is_publicly_visible)
        .ok_or_else(|| AppError::NotFound(format!("Event {public_id} not found")))?;
    Ok(Json(DataResponse { data: event }))
}

fn is_publicly_visible(event: &Event) -> bool {
    event.approved_at.is_some() && event.status() != Some(EventStatus::Deleted)
}
