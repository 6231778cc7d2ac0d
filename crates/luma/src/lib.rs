//! Client for the external event-hosting provider (Luma).
//!
//! The rest of the workspace only depends on the narrow [`EventProvider`]
//! contract; [`LumaClient`] is the production implementation. There is no
//! ambient singleton — construct a client explicitly and inject it, so
//! tests can substitute a fake.

pub mod client;
pub mod provider;

pub use client::LumaClient;
pub use provider::{
    CreateRemoteEvent, CreatedEvent, EventProvider, HostResult, LumaError, RemoteEvent, Visibility,
};
