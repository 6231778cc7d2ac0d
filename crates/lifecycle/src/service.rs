//! Administrator lifecycle transitions.
//!
//! Each transition re-validates the state machine in Rust for a clear
//! error message, then performs a conditional update guarded by the
//! expected current status. A guard miss means another writer got there
//! first and surfaces as a conflict — transitions are never silently
//! replayed, so notifications cannot double-send.

use std::sync::Arc;

use techweek_core::lifecycle::{self, EventStatus};
use techweek_core::CoreError;
use techweek_db::models::event::Event;
use techweek_db::repositories::{CohostRepo, EventRepo};
use techweek_db::DbPool;
use techweek_luma::{CreateRemoteEvent, EventProvider, Visibility};
use techweek_notify::{templates, EmailQueue};

use crate::error::LifecycleError;

/// Orchestrates approve/reject/publish across the store, the provider,
/// and the email queue.
#[derive(Clone)]
pub struct LifecycleService {
    pool: DbPool,
    provider: Arc<dyn EventProvider>,
    emails: EmailQueue,
}

impl LifecycleService {
    /// Create a service with an injected provider and email queue.
    pub fn new(pool: DbPool, provider: Arc<dyn EventProvider>, emails: EmailQueue) -> Self {
        Self {
            pool,
            provider,
            emails,
        }
    }

    /// Approve a submitted (or previously rejected) event.
    ///
    /// Creates the remote Luma record first, then transitions to
    /// `WaitingLumaEdit`, attaches co-hosts remotely (partial failure
    /// tolerated), and queues the "ready to edit" email.
    pub async fn approve(&self, event_id: i64) -> Result<Event, LifecycleError> {
        let event = self.find(event_id).await?;
        let current = self.status_of(&event)?;
        lifecycle::validate_transition(current, EventStatus::WaitingLumaEdit)
            .map_err(CoreError::Conflict)?;

        let created = self
            .provider
            .create_event(&CreateRemoteEvent {
                name: event.title.clone(),
                description: event.description.clone(),
                start_at: event.start_at,
                end_at: event.end_at,
            })
            .await?;

        let updated = EventRepo::mark_waiting_luma_edit(
            &self.pool,
            event_id,
            &created.api_id,
            &created.url,
            created.created_at,
        )
        .await?
        .ok_or_else(|| {
            CoreError::Conflict(format!("Event {event_id} changed state during approval"))
        })?;

        let cohost_emails = CohostRepo::emails_for_event(&self.pool, event_id).await?;
        if !cohost_emails.is_empty() {
            match self.provider.add_hosts(&created.api_id, &cohost_emails).await {
                Ok(results) => {
                    for result in results.iter().filter(|r| !r.success) {
                        tracing::warn!(
                            event_id,
                            email = %result.email,
                            error = ?result.error,
                            "Co-host could not be added to remote event"
                        );
                    }
                }
                Err(e) => {
                    tracing::warn!(event_id, error = %e, "Adding co-hosts to remote event failed");
                }
            }
        }

        self.emails.send(templates::ready_to_edit(&updated)).await?;

        tracing::info!(event_id, luma_event_id = %created.api_id, "Event approved");
        Ok(updated)
    }

    /// Reject an event with a reason, notifying the submitter.
    ///
    /// The reason is validated before any mutation and forwarded verbatim.
    pub async fn reject(&self, event_id: i64, reason: &str) -> Result<Event, LifecycleError> {
        lifecycle::validate_rejection_reason(reason).map_err(CoreError::Validation)?;

        let event = self.find(event_id).await?;
        let current = self.status_of(&event)?;
        lifecycle::validate_transition(current, EventStatus::Rejected)
            .map_err(CoreError::Conflict)?;

        let updated = EventRepo::mark_rejected(&self.pool, event_id, reason)
            .await?
            .ok_or_else(|| {
                CoreError::Conflict(format!("Event {event_id} changed state during rejection"))
            })?;

        self.emails.send(templates::rejected(&updated, reason)).await?;

        tracing::info!(event_id, "Event rejected");
        Ok(updated)
    }

    /// Publish an event that finished its Luma edit step.
    ///
    /// Flipping the remote visibility to public is a precondition, not a
    /// best-effort step: if the provider call fails the whole publish
    /// fails and the local state is unchanged.
    pub async fn publish(&self, event_id: i64) -> Result<Event, LifecycleError> {
        let event = self.find(event_id).await?;
        let current = self.status_of(&event)?;
        if current != EventStatus::WaitingLumaEdit {
            return Err(CoreError::Conflict(format!(
                "Event {event_id} is not ready to publish (status: {current})"
            ))
            .into());
        }

        if let Some(luma_event_id) = &event.luma_event_id {
            self.provider
                .update_visibility(luma_event_id, Visibility::Public)
                .await?;
        }

        let updated = EventRepo::mark_published(&self.pool, event_id)
            .await?
            .ok_or_else(|| {
                CoreError::Conflict(format!("Event {event_id} changed state during publication"))
            })?;

        self.emails.send(templates::published(&updated)).await?;

        tracing::info!(event_id, "Event published");
        Ok(updated)
    }

    async fn find(&self, event_id: i64) -> Result<Event, LifecycleError> {
        EventRepo::find_by_id(&self.pool, event_id)
            .await?
            .ok_or_else(|| {
                CoreError::NotFound {
                    entity: "Event",
                    id: event_id,
                }
                .into()
            })
    }

    fn status_of(&self, event: &Event) -> Result<EventStatus, LifecycleError> {
        event.status().ok_or_else(|| {
            CoreError::Internal(format!(
                "Event {} has unknown status id {}",
                event.id, event.status_id
            ))
            .into()
        })
    }
}
