//! Repository for the `queued_emails` table.
//!
//! The queue is durable-first: a row is inserted (`Queued`) before any
//! delivery attempt, then flipped to `Sent` or `Failed` afterwards. Rows
//! are never deleted or silently retried.

use sqlx::PgPool;
use techweek_core::types::DbId;

use crate::models::email::{CreateEmail, EmailStatus, QueuedEmail};

/// Column list for `queued_emails` queries.
const COLUMNS: &str = "\
    id, template, recipient, subject, body, data, status_id, error, \
    delivery_note, sent_at, created_at";

/// Provides CRUD operations for the outbound email queue.
pub struct EmailRepo;

impl EmailRepo {
    /// Insert a queued email, returning the full row.
    pub async fn create(pool: &PgPool, input: &CreateEmail) -> Result<QueuedEmail, sqlx::Error> {
        let query = format!(
            "INSERT INTO queued_emails (template, recipient, subject, body, data, status_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, QueuedEmail>(&query)
            .bind(&input.template)
            .bind(&input.recipient)
            .bind(&input.subject)
            .bind(&input.body)
            .bind(&input.data)
            .bind(EmailStatus::Queued.id())
            .fetch_one(pool)
            .await
    }

    /// Find a queued email by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<QueuedEmail>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM queued_emails WHERE id = $1");
        sqlx::query_as::<_, QueuedEmail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Mark a queued email as sent, with an optional delivery annotation
    /// (the suppression marker in non-production contexts).
    pub async fn mark_sent(
        pool: &PgPool,
        id: DbId,
        delivery_note: Option<&str>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE queued_emails \
             SET status_id = $2, delivery_note = $3, sent_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(EmailStatus::Sent.id())
        .bind(delivery_note)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Mark a queued email as terminally failed with a reason.
    pub async fn mark_failed(pool: &PgPool, id: DbId, reason: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE queued_emails \
             SET status_id = $2, error = $3 \
             WHERE id = $1",
        )
        .bind(id)
        .bind(EmailStatus::Failed.id())
        .bind(reason)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// List all emails queued for a template, newest first.
    pub async fn list_by_template(
        pool: &PgPool,
        template: &str,
    ) -> Result<Vec<QueuedEmail>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM queued_emails \
             WHERE template = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, QueuedEmail>(&query)
            .bind(template)
            .fetch_all(pool)
            .await
    }

    /// List all emails addressed to a recipient, newest first.
    pub async fn list_for_recipient(
        pool: &PgPool,
        recipient: &str,
    ) -> Result<Vec<QueuedEmail>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM queued_emails \
             WHERE recipient = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, QueuedEmail>(&query)
            .bind(recipient)
            .fetch_all(pool)
            .await
    }
}
