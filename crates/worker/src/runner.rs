//! Polling job runner backed by the `job_executions` table.
//!
//! Each registered job has a stable ID, a parsed [`Schedule`], and an
//! async callback. The runner polls: on every tick it reads the job's
//! persisted `last_run_at` and fires the callback once the schedule says
//! a run is due. Because due-ness is computed from the stored timestamp,
//! a restarted runner resumes the cadence instead of re-firing
//! everything, and a single runner never starts overlapping runs of the
//! same job.

use std::time::Duration;

use chrono::Utc;
use futures::future::BoxFuture;
use techweek_core::schedule::Schedule;
use techweek_db::models::job::{JOB_STATUS_ERROR, JOB_STATUS_SUCCESS};
use techweek_db::repositories::JobRepo;
use techweek_db::DbPool;
use tokio_util::sync::CancellationToken;

/// How often the runner checks whether any job is due.
const POLL_INTERVAL: Duration = Duration::from_secs(30);

type JobFn = Box<dyn Fn() -> BoxFuture<'static, anyhow::Result<()>> + Send + Sync>;

struct JobEntry {
    id: &'static str,
    expression: String,
    schedule: Schedule,
    run: JobFn,
}

/// Runs registered jobs on their schedules until cancelled.
pub struct JobRunner {
    pool: DbPool,
    jobs: Vec<JobEntry>,
}

impl JobRunner {
    pub fn new(pool: DbPool) -> Self {
        Self { pool, jobs: Vec::new() }
    }

    /// Register a job under a stable ID with a schedule expression
    /// (`every 30m`, `hourly`, ...).
    pub fn register<F, Fut>(mut self, id: &'static str, expression: &str, f: F) -> anyhow::Result<Self>
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        let schedule: Schedule = expression.parse()?;
        self.jobs.push(JobEntry {
            id,
            expression: expression.to_string(),
            schedule,
            run: Box::new(move || Box::pin(f())),
        });
        Ok(self)
    }

    /// Run every job that is currently due, recording each outcome.
    ///
    /// Public so tests can drive the runner without waiting for ticks.
    pub async fn run_pending(&self) -> Result<(), sqlx::Error> {
        let now = Utc::now();
        for job in &self.jobs {
            let Some(execution) = JobRepo::find_by_id(&self.pool, job.id).await? else {
                // register_all ran before the loop; a missing row means the
                // table was truncated underneath us.
                tracing::warn!(job_id = job.id, "Job has no execution record; skipping");
                continue;
            };
            if !job.schedule.is_due(execution.last_run_at, now) {
                continue;
            }

            tracing::info!(job_id = job.id, run_count = execution.run_count, "Job starting");
            match (job.run)().await {
                Ok(()) => {
                    JobRepo::record_run(&self.pool, job.id, JOB_STATUS_SUCCESS, None).await?;
                    tracing::info!(job_id = job.id, "Job finished");
                }
                Err(e) => {
                    let reason = e.to_string();
                    JobRepo::record_run(&self.pool, job.id, JOB_STATUS_ERROR, Some(&reason))
                        .await?;
                    tracing::error!(job_id = job.id, error = %reason, "Job failed");
                }
            }
        }
        Ok(())
    }

    /// Upsert the execution record for every registered job.
    pub async fn register_all(&self) -> Result<(), sqlx::Error> {
        for job in &self.jobs {
            JobRepo::register(&self.pool, job.id, &job.expression).await?;
        }
        Ok(())
    }

    /// Poll until `cancel` is triggered.
    ///
    /// A database error during a poll is logged and retried on the next
    /// tick rather than taking the runner down.
    pub async fn run(self, cancel: CancellationToken) -> Result<(), sqlx::Error> {
        self.register_all().await?;
        tracing::info!(jobs = self.jobs.len(), "Job runner started");

        let mut interval = tokio::time::interval(POLL_INTERVAL);
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("Job runner stopping");
                    return Ok(());
                }
                _ = interval.tick() => {
                    if let Err(e) = self.run_pending().await {
                        tracing::error!(error = %e, "Job runner poll failed");
                    }
                }
            }
        }
    }
}
