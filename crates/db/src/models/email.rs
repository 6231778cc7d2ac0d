//! Outbound email queue models.

use serde::Serialize;
use sqlx::FromRow;
use techweek_core::lifecycle::StatusId;
use techweek_core::types::{DbId, Timestamp};

/// Delivery status of a queued email.
///
/// Variant discriminants match the seed data order (1-based) in the
/// `email_statuses` table. `Failed` is terminal — retries, if any, are an
/// external concern and never happen silently inside the queue.
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailStatus {
    /// Durable record created, delivery not yet attempted.
    Queued = 1,
    /// Delivered (or suppressed with a synthetic marker outside production).
    Sent = 2,
    /// Delivery failed; `error` holds the reason.
    Failed = 3,
}

impl EmailStatus {
    /// Return the database status ID.
    pub fn id(self) -> StatusId {
        self as StatusId
    }

    /// Resolve a database status ID back to the enum.
    pub fn from_id(id: StatusId) -> Option<Self> {
        match id {
            1 => Some(Self::Queued),
            2 => Some(Self::Sent),
            3 => Some(Self::Failed),
            _ => None,
        }
    }
}

/// A row from the `queued_emails` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct QueuedEmail {
    pub id: DbId,
    /// Template name, e.g. `event-rejected` or `event-sync-update`.
    pub template: String,
    pub recipient: String,
    pub subject: String,
    pub body: String,
    /// Arbitrary template data (the structured diff for sync updates).
    pub data: serde_json::Value,
    pub status_id: StatusId,
    /// Failure reason when `status_id` is `Failed`.
    pub error: Option<String>,
    /// Delivery annotation, e.g. the suppression marker.
    pub delivery_note: Option<String>,
    pub sent_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// DTO for enqueueing an email.
#[derive(Debug, Clone)]
pub struct CreateEmail {
    pub template: String,
    pub recipient: String,
    pub subject: String,
    pub body: String,
    pub data: serde_json::Value,
}
