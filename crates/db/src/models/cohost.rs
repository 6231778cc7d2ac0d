//! Event co-host entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use techweek_core::types::{DbId, Timestamp};

/// A row from the `event_cohosts` table.
///
/// Co-hosts are owned exclusively by one event and cascade-deleted with it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventCohost {
    pub id: DbId,
    pub event_id: DbId,
    pub company_name: String,
    pub logo_url: Option<String>,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub website: Option<String>,
    pub linkedin: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for attaching a co-host at submission time.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCohost {
    pub company_name: String,
    pub logo_url: Option<String>,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub website: Option<String>,
    pub linkedin: Option<String>,
}
