//! Shared reference vocabularies: themes and audiences.
//!
//! Both are many-to-many with events via the `event_theme_links` and
//! `event_audience_links` join tables.

use serde::Serialize;
use sqlx::FromRow;
use techweek_core::types::{DbId, Timestamp};

/// A row from the `event_themes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventTheme {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}

/// A row from the `event_audiences` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventAudience {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}
