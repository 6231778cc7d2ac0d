//! Repository for the theme/audience vocabularies and their join tables.

use sqlx::PgPool;
use techweek_core::types::DbId;

use crate::models::taxonomy::{EventAudience, EventTheme};

const THEME_COLUMNS: &str = "id, name, created_at";
const AUDIENCE_COLUMNS: &str = "id, name, created_at";

/// Read/link operations for the shared reference vocabularies.
pub struct TaxonomyRepo;

impl TaxonomyRepo {
    /// List all themes ordered by name.
    pub async fn list_themes(pool: &PgPool) -> Result<Vec<EventTheme>, sqlx::Error> {
        let query = format!("SELECT {THEME_COLUMNS} FROM event_themes ORDER BY name");
        sqlx::query_as::<_, EventTheme>(&query).fetch_all(pool).await
    }

    /// List all audiences ordered by name.
    pub async fn list_audiences(pool: &PgPool) -> Result<Vec<EventAudience>, sqlx::Error> {
        let query = format!("SELECT {AUDIENCE_COLUMNS} FROM event_audiences ORDER BY name");
        sqlx::query_as::<_, EventAudience>(&query)
            .fetch_all(pool)
            .await
    }

    /// Link a theme to an event. Duplicate links are ignored.
    pub async fn link_theme(
        pool: &PgPool,
        event_id: DbId,
        theme_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO event_theme_links (event_id, theme_id) \
             VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(event_id)
        .bind(theme_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Link an audience to an event. Duplicate links are ignored.
    pub async fn link_audience(
        pool: &PgPool,
        event_id: DbId,
        audience_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO event_audience_links (event_id, audience_id) \
             VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(event_id)
        .bind(audience_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Themes linked to an event.
    pub async fn themes_for_event(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Vec<EventTheme>, sqlx::Error> {
        let query = format!(
            "SELECT t.id, t.name, t.created_at FROM event_themes t \
             JOIN event_theme_links l ON l.theme_id = t.id \
             WHERE l.event_id = $1 ORDER BY t.name"
        );
        sqlx::query_as::<_, EventTheme>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }

    /// Audiences linked to an event.
    pub async fn audiences_for_event(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Vec<EventAudience>, sqlx::Error> {
        let query = format!(
            "SELECT a.id, a.name, a.created_at FROM event_audiences a \
             JOIN event_audience_links l ON l.audience_id = a.id \
             WHERE l.event_id = $1 ORDER BY a.name"
        );
        sqlx::query_as::<_, EventAudience>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }
}
