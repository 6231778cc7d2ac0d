//! Domain logic for the Tech Week event moderation backend.
//!
//! This crate has zero internal dependencies so it can be used by the
//! repository layer, the HTTP API, and the worker alike:
//!
//! - [`lifecycle`] — the event moderation state machine.
//! - [`diff`] — field-by-field comparison against the remote provider copy.
//! - [`timefmt`] — human-readable date ranges in the event's local timezone.
//! - [`schedule`] — schedule expressions for the background job runner.

pub mod diff;
pub mod error;
pub mod format;
pub mod lifecycle;
pub mod schedule;
pub mod timefmt;
pub mod types;

pub use error::CoreError;
pub use lifecycle::EventStatus;
