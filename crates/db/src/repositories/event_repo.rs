//! Repository for the `events` table.
//!
//! Every lifecycle write is a conditional update guarded by the expected
//! current status (`WHERE status_id = ...`), so two administrators acting
//! on the same event cannot silently overwrite each other — the loser's
//! update matches zero rows and surfaces as `None`.

use sqlx::PgPool;
use techweek_core::lifecycle::EventStatus;
use techweek_core::types::{DbId, Timestamp};
use uuid::Uuid;

use crate::models::event::{CreateEvent, Event};

/// Column list for `events` queries.
const COLUMNS: &str = "\
    id, public_id, title, description, commune, format, capacity, logo_url, \
    organizer_name, organizer_email, start_at, end_at, \
    luma_event_id, luma_url, luma_created_at, \
    status_id, rejection_reason, \
    submitted_at, approved_at, rejected_at, waiting_luma_edit_at, published_at, deleted_at, \
    created_at, updated_at";

/// Provides read/write operations for events, including the guarded
/// lifecycle transitions.
pub struct EventRepo;

impl EventRepo {
    /// Insert a new event in `Submitted` state, returning the full row.
    pub async fn create(pool: &PgPool, input: &CreateEvent) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events \
                (public_id, title, description, commune, format, capacity, logo_url, \
                 organizer_name, organizer_email, start_at, end_at, status_id, submitted_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, NOW()) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(Uuid::new_v4())
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.commune)
            .bind(&input.format)
            .bind(input.capacity)
            .bind(&input.logo_url)
            .bind(&input.organizer_name)
            .bind(&input.organizer_email)
            .bind(input.start_at)
            .bind(input.end_at)
            .bind(EventStatus::Submitted.id())
            .fetch_one(pool)
            .await
    }

    /// Find an event by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an event by its external-facing public ID.
    pub async fn find_by_public_id(
        pool: &PgPool,
        public_id: Uuid,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE public_id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(public_id)
            .fetch_optional(pool)
            .await
    }

    /// List all events for the admin dashboard, newest submission first.
    pub async fn list_admin(pool: &PgPool) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events ORDER BY submitted_at DESC");
        sqlx::query_as::<_, Event>(&query).fetch_all(pool).await
    }

    /// List events for the public-facing site.
    ///
    /// Filters on `approved_at IS NOT NULL`, not on the `Published` status.
    /// An approved-but-not-yet-published event is therefore already listed.
    /// This matches the long-observed listing behavior and is deliberately
    /// not unified with the admin "live" condition.
    pub async fn list_public(pool: &PgPool) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM events \
             WHERE approved_at IS NOT NULL AND status_id <> $1 \
             ORDER BY start_at ASC"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(EventStatus::Deleted.id())
            .fetch_all(pool)
            .await
    }

    /// List the reconciliation candidates: published events that have a
    /// remote Luma counterpart.
    pub async fn list_published_with_remote(pool: &PgPool) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM events \
             WHERE status_id = $1 AND luma_event_id IS NOT NULL \
             ORDER BY id"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(EventStatus::Published.id())
            .fetch_all(pool)
            .await
    }

    /// Transition to `WaitingLumaEdit` (approval), attaching the freshly
    /// created Luma record.
    ///
    /// Guarded by the two approvable source states (`Submitted`,
    /// `Rejected`). Clears any prior rejection. Returns `None` when the
    /// event is not in an approvable state.
    pub async fn mark_waiting_luma_edit(
        pool: &PgPool,
        id: DbId,
        luma_event_id: &str,
        luma_url: &str,
        luma_created_at: Timestamp,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events \
             SET status_id = $2, \
                 approved_at = NOW(), \
                 waiting_luma_edit_at = NOW(), \
                 rejected_at = NULL, \
                 rejection_reason = NULL, \
                 luma_event_id = $3, \
                 luma_url = $4, \
                 luma_created_at = $5, \
                 updated_at = NOW() \
             WHERE id = $1 AND status_id IN ($6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(EventStatus::WaitingLumaEdit.id())
            .bind(luma_event_id)
            .bind(luma_url)
            .bind(luma_created_at)
            .bind(EventStatus::Submitted.id())
            .bind(EventStatus::Rejected.id())
            .fetch_optional(pool)
            .await
    }

    /// Transition to `Rejected` with a reason.
    ///
    /// Guarded by the rejectable source states (`Submitted`,
    /// `WaitingLumaEdit`). Clears approval and publication timestamps.
    pub async fn mark_rejected(
        pool: &PgPool,
        id: DbId,
        reason: &str,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events \
             SET status_id = $2, \
                 rejected_at = NOW(), \
                 rejection_reason = $3, \
                 approved_at = NULL, \
                 waiting_luma_edit_at = NULL, \
                 published_at = NULL, \
                 updated_at = NOW() \
             WHERE id = $1 AND status_id IN ($4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(EventStatus::Rejected.id())
            .bind(reason)
            .bind(EventStatus::Submitted.id())
            .bind(EventStatus::WaitingLumaEdit.id())
            .fetch_optional(pool)
            .await
    }

    /// Transition to `Published`. Guarded by `WaitingLumaEdit` exactly.
    pub async fn mark_published(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events \
             SET status_id = $2, published_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND status_id = $3 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(EventStatus::Published.id())
            .bind(EventStatus::WaitingLumaEdit.id())
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a published event whose remote copy was cancelled.
    ///
    /// Guarded by `Published`, so a second reconciliation run finds no
    /// matching row and the cancellation is applied exactly once.
    pub async fn mark_deleted(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events \
             SET status_id = $2, deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND status_id = $3 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(EventStatus::Deleted.id())
            .bind(EventStatus::Published.id())
            .fetch_optional(pool)
            .await
    }

    /// Overwrite the provider-synced fields with remote values.
    ///
    /// Only title, start, and end are touched; everything else remains
    /// locally authoritative. Guarded by `Published` so a concurrent
    /// cancellation wins over a field sync.
    pub async fn apply_remote_sync(
        pool: &PgPool,
        id: DbId,
        title: &str,
        start_at: Timestamp,
        end_at: Timestamp,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events \
             SET title = $2, start_at = $3, end_at = $4, updated_at = NOW() \
             WHERE id = $1 AND status_id = $5 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(title)
            .bind(start_at)
            .bind(end_at)
            .bind(EventStatus::Published.id())
            .fetch_optional(pool)
            .await
    }
}
