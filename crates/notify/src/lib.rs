//! Outbound notification infrastructure.
//!
//! Every lifecycle transition that "sends an email" goes through
//! [`EmailQueue`]: a durable `queued_emails` row is created before any
//! delivery attempt, and the row's status records the outcome. When SMTP
//! is not configured (tests, staging) delivery is suppressed and the row
//! is marked sent with a synthetic marker, so state-machine tests can
//! assert "a notification was queued" without dispatching network email.

pub mod mailer;
pub mod queue;
pub mod templates;

pub use mailer::{EmailConfig, EmailError, Mailer};
pub use queue::{EmailQueue, DELIVERY_SUPPRESSED};
