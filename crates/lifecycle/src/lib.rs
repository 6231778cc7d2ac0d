//! Event lifecycle orchestration.
//!
//! [`LifecycleService`] implements the administrator transitions
//! (approve, reject, publish) and [`Reconciler`] the periodic pull-based
//! sync against the remote provider. Both take the provider and the email
//! queue by injection so tests can substitute fakes.

pub mod error;
pub mod reconcile;
pub mod service;

pub use error::LifecycleError;
pub use reconcile::{Reconciler, SyncReport};
pub use service::LifecycleService;
