//! Durable-first email queue.

use techweek_db::models::email::{CreateEmail, QueuedEmail};
use techweek_db::repositories::EmailRepo;
use techweek_db::DbPool;

use crate::mailer::Mailer;

/// Delivery note recorded when delivery is suppressed (no SMTP configured).
pub const DELIVERY_SUPPRESSED: &str = "suppressed";

/// Enqueue-then-deliver email pipeline.
///
/// A `queued_emails` row is created before any delivery attempt, so the
/// record survives a delivery failure. Delivery failures mark the row as
/// terminally failed with a reason; there is no silent retry inside the
/// same call.
#[derive(Clone)]
pub struct EmailQueue {
    pool: DbPool,
    mailer: Option<std::sync::Arc<Mailer>>,
}

impl EmailQueue {
    /// Create a queue. Pass `None` as the mailer to suppress delivery:
    /// rows are still created and marked sent with a synthetic marker.
    pub fn new(pool: DbPool, mailer: Option<Mailer>) -> Self {
        Self {
            pool,
            mailer: mailer.map(std::sync::Arc::new),
        }
    }

    /// Queue an email and attempt delivery.
    ///
    /// The returned row reflects the delivery outcome. Only persistence
    /// errors propagate — a failed SMTP handoff is recorded on the row,
    /// not raised, so lifecycle transitions never roll back over email.
    pub async fn send(&self, input: CreateEmail) -> Result<QueuedEmail, sqlx::Error> {
        let queued = EmailRepo::create(&self.pool, &input).await?;

        match &self.mailer {
            None => {
                EmailRepo::mark_sent(&self.pool, queued.id, Some(DELIVERY_SUPPRESSED)).await?;
                tracing::debug!(
                    id = queued.id,
                    template = %queued.template,
                    "Email delivery suppressed"
                );
            }
            Some(mailer) => {
                match mailer
                    .deliver(&queued.recipient, &queued.subject, &queued.body)
                    .await
                {
                    Ok(()) => EmailRepo::mark_sent(&self.pool, queued.id, None).await?,
                    Err(e) => {
                        tracing::error!(
                            id = queued.id,
                            template = %queued.template,
                            recipient = %queued.recipient,
                            error = %e,
                            "Email delivery failed"
                        );
                        EmailRepo::mark_failed(&self.pool, queued.id, &e.to_string()).await?;
                    }
                }
            }
        }

        Ok(EmailRepo::find_by_id(&self.pool, queued.id)
            .await?
            .unwrap_or(queued))
    }
}
