//! Event entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use techweek_core::diff::SyncedFields;
use techweek_core::lifecycle::{EventStatus, StatusId};
use techweek_core::types::{DbId, Timestamp};
use uuid::Uuid;

/// A row from the `events` table.
///
/// Events are never physically deleted — `Deleted` is a status, and
/// `deleted_at` records when the remote copy was found cancelled.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    /// External-facing identifier, distinct from the internal row ID.
    pub public_id: Uuid,
    pub title: String,
    pub description: String,
    pub commune: String,
    pub format: String,
    pub capacity: i32,
    pub logo_url: Option<String>,
    pub organizer_name: String,
    pub organizer_email: String,
    pub start_at: Timestamp,
    pub end_at: Timestamp,
    /// Identifier of the mirrored Luma event, set at approval.
    pub luma_event_id: Option<String>,
    pub luma_url: Option<String>,
    pub luma_created_at: Option<Timestamp>,
    pub status_id: StatusId,
    pub rejection_reason: Option<String>,
    pub submitted_at: Timestamp,
    pub approved_at: Option<Timestamp>,
    pub rejected_at: Option<Timestamp>,
    pub waiting_luma_edit_at: Option<Timestamp>,
    pub published_at: Option<Timestamp>,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Event {
    /// Resolve the raw status ID to the lifecycle enum.
    ///
    /// A row whose `status_id` falls outside the seeded range indicates
    /// schema corruption, so this returns `None` rather than guessing.
    pub fn status(&self) -> Option<EventStatus> {
        EventStatus::from_id(self.status_id)
    }

    /// The provider-synced subset of fields, for reconciliation diffing.
    pub fn synced_fields(&self) -> SyncedFields {
        SyncedFields {
            title: self.title.clone(),
            start_at: self.start_at,
            end_at: self.end_at,
        }
    }
}

/// DTO for creating an event from the public submission form.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEvent {
    pub title: String,
    pub description: String,
    pub commune: String,
    pub format: String,
    pub capacity: i32,
    pub logo_url: Option<String>,
    pub organizer_name: String,
    pub organizer_email: String,
    pub start_at: Timestamp,
    pub end_at: Timestamp,
}
