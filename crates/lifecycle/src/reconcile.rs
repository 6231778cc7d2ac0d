//! Periodic reconciliation against the remote provider.
//!
//! Pull-based and idempotent: each published event with a remote
//! counterpart is fetched, diffed on the provider-authoritative fields,
//! and either updated, soft-deleted (remote cancelled), or left alone.
//! Running twice on unchanged remote data produces zero additional side
//! effects because the diff check gates both the write and the email.

use std::sync::Arc;

use serde::Serialize;
use techweek_core::diff::{EventDiff, SyncedFields};
use techweek_db::models::event::Event;
use techweek_db::repositories::EventRepo;
use techweek_db::DbPool;
use techweek_luma::{EventProvider, LumaError};
use techweek_notify::{templates, EmailQueue};

use crate::error::LifecycleError;

/// Outcome counts of one reconciliation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    /// Published events with a remote counterpart.
    pub candidates: usize,
    /// Events whose synced fields were overwritten with remote values.
    pub updated: usize,
    /// Events soft-deleted because the remote copy was cancelled.
    pub cancelled: usize,
    /// Events that errored during processing. Not-found is a valid
    /// outcome, not a failure; these are transient faults retried on the
    /// next scheduled run.
    pub failed: usize,
}

/// What happened to a single event during a pass.
enum Outcome {
    Unchanged,
    Updated,
    Cancelled,
}

/// Reconciles local published events with their remote counterparts.
#[derive(Clone)]
pub struct Reconciler {
    pool: DbPool,
    provider: Arc<dyn EventProvider>,
    emails: EmailQueue,
}

impl Reconciler {
    /// Create a reconciler with an injected provider and email queue.
    pub fn new(pool: DbPool, provider: Arc<dyn EventProvider>, emails: EmailQueue) -> Self {
        Self {
            pool,
            provider,
            emails,
        }
    }

    /// Run one reconciliation pass over all candidates.
    ///
    /// Events are processed concurrently with per-item result capture:
    /// one event's failure never aborts the batch.
    pub async fn run(&self) -> Result<SyncReport, sqlx::Error> {
        let candidates = EventRepo::list_published_with_remote(&self.pool).await?;

        let mut report = SyncReport {
            candidates: candidates.len(),
            ..SyncReport::default()
        };

        let outcomes =
            futures::future::join_all(candidates.iter().map(|e| self.reconcile_event(e))).await;

        for (event, outcome) in candidates.iter().zip(outcomes) {
            match outcome {
                Ok(Outcome::Unchanged) => {}
                Ok(Outcome::Updated) => report.updated += 1,
                Ok(Outcome::Cancelled) => report.cancelled += 1,
                Err(e) => {
                    report.failed += 1;
                    tracing::error!(event_id = event.id, error = %e, "Reconciliation item failed");
                }
            }
        }

        tracing::info!(
            candidates = report.candidates,
            updated = report.updated,
            cancelled = report.cancelled,
            failed = report.failed,
            "Reconciliation pass complete"
        );

        Ok(report)
    }

    /// Reconcile a single event against its remote record.
    async fn reconcile_event(&self, event: &Event) -> Result<Outcome, LifecycleError> {
        let Some(luma_event_id) = event.luma_event_id.as_deref() else {
            // Candidate query guarantees a remote ID; guard anyway.
            return Ok(Outcome::Unchanged);
        };

        let remote = match self.provider.get_event(luma_event_id).await {
            Ok(remote) => remote,
            Err(LumaError::NotFound { .. }) => return self.cancel(event).await,
            // Transient fault: skip this run, retry on the next schedule.
            Err(e) => return Err(e.into()),
        };

        let local = event.synced_fields();
        let diff = EventDiff::between(
            &local,
            &SyncedFields {
                title: remote.name.clone(),
                start_at: remote.start_at,
                end_at: remote.end_at,
            },
        );

        if diff.is_empty() {
            return Ok(Outcome::Unchanged);
        }

        let Some(updated) = EventRepo::apply_remote_sync(
            &self.pool,
            event.id,
            &remote.name,
            remote.start_at,
            remote.end_at,
        )
        .await?
        else {
            // Guard miss: the event left Published under us. Let the next
            // pass observe the new state.
            return Ok(Outcome::Unchanged);
        };

        tracing::info!(
            event_id = event.id,
            changed = ?diff.changed_fields(),
            "Applied remote changes"
        );
        self.emails.send(templates::sync_update(&updated, &diff)).await?;

        Ok(Outcome::Updated)
    }

    /// The remote copy is gone: soft-delete locally, exactly once.
    async fn cancel(&self, event: &Event) -> Result<Outcome, LifecycleError> {
        let Some(deleted) = EventRepo::mark_deleted(&self.pool, event.id).await? else {
            // Already transitioned out of Published; nothing to do.
            return Ok(Outcome::Unchanged);
        };

        tracing::info!(event_id = event.id, "Remote event cancelled; soft-deleted locally");
        self.emails.send(templates::cancelled(&deleted)).await?;

        Ok(Outcome::Cancelled)
    }
}
