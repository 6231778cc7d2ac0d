//! Scheduled job execution records.

use serde::Serialize;
use sqlx::FromRow;
use techweek_core::types::Timestamp;

/// Last-run status value for a successful execution.
pub const JOB_STATUS_SUCCESS: &str = "success";

/// Last-run status value for a failed execution.
pub const JOB_STATUS_ERROR: &str = "error";

/// A row from the `job_executions` table, keyed by job ID.
///
/// One row per registered job; the runner updates it after every run, so
/// the table doubles as the overlap guard — a job's next due time is
/// always computed from the persisted `last_run_at`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct JobExecution {
    pub job_id: String,
    pub schedule: String,
    pub last_run_at: Option<Timestamp>,
    pub last_status: Option<String>,
    pub last_error: Option<String>,
    /// Monotonically increasing execution counter.
    pub run_count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
