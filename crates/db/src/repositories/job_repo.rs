//! Repository for the `job_executions` table.

use sqlx::PgPool;

use crate::models::job::JobExecution;

/// Column list for `job_executions` queries.
const COLUMNS: &str = "\
    job_id, schedule, last_run_at, last_status, last_error, run_count, \
    created_at, updated_at";

/// Provides CRUD operations for job execution records.
pub struct JobRepo;

impl JobRepo {
    /// Register a job, creating its execution record if absent.
    ///
    /// The schedule expression is refreshed on every registration so a
    /// redeployed runner picks up changed intervals.
    pub async fn register(
        pool: &PgPool,
        job_id: &str,
        schedule: &str,
    ) -> Result<JobExecution, sqlx::Error> {
        let query = format!(
            "INSERT INTO job_executions (job_id, schedule) \
             VALUES ($1, $2) \
             ON CONFLICT (job_id) DO UPDATE SET schedule = $2, updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JobExecution>(&query)
            .bind(job_id)
            .bind(schedule)
            .fetch_one(pool)
            .await
    }

    /// Fetch a job's execution record.
    pub async fn find_by_id(
        pool: &PgPool,
        job_id: &str,
    ) -> Result<Option<JobExecution>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM job_executions WHERE job_id = $1");
        sqlx::query_as::<_, JobExecution>(&query)
            .bind(job_id)
            .fetch_optional(pool)
            .await
    }

    /// Record the outcome of a run: last-run time, status, error message,
    /// and the incremented execution counter.
    pub async fn record_run(
        pool: &PgPool,
        job_id: &str,
        status: &str,
        error: Option<&str>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE job_executions \
             SET last_run_at = NOW(), \
                 last_status = $2, \
                 last_error = $3, \
                 run_count = run_count + 1, \
                 updated_at = NOW() \
             WHERE job_id = $1",
        )
        .bind(job_id)
        .bind(status)
        .bind(error)
        .execute(pool)
        .await?;
        Ok(())
    }
}
