//! Repository for the `event_cohosts` table.

use sqlx::PgPool;
use techweek_core::types::DbId;

use crate::models::cohost::{CreateCohost, EventCohost};

/// Column list for `event_cohosts` queries.
const COLUMNS: &str = "\
    id, event_id, company_name, logo_url, contact_name, contact_email, \
    contact_phone, website, linkedin, created_at";

/// Provides CRUD operations for event co-hosts.
pub struct CohostRepo;

impl CohostRepo {
    /// Attach a co-host to an event, returning the full row.
    pub async fn create(
        pool: &PgPool,
        event_id: DbId,
        input: &CreateCohost,
    ) -> Result<EventCohost, sqlx::Error> {
        let query = format!(
            "INSERT INTO event_cohosts \
                (event_id, company_name, logo_url, contact_name, contact_email, \
                 contact_phone, website, linkedin) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EventCohost>(&query)
            .bind(event_id)
            .bind(&input.company_name)
            .bind(&input.logo_url)
            .bind(&input.contact_name)
            .bind(&input.contact_email)
            .bind(&input.contact_phone)
            .bind(&input.website)
            .bind(&input.linkedin)
            .fetch_one(pool)
            .await
    }

    /// List the co-hosts of an event in attachment order.
    pub async fn list_for_event(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Vec<EventCohost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM event_cohosts WHERE event_id = $1 ORDER BY id");
        sqlx::query_as::<_, EventCohost>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }

    /// Contact email addresses of an event's co-hosts, for the remote
    /// add-hosts call at approval time.
    pub async fn emails_for_event(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT contact_email FROM event_cohosts WHERE event_id = $1 ORDER BY id",
        )
        .bind(event_id)
        .fetch_all(pool)
        .await
    }
}
