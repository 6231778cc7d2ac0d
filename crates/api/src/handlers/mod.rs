//! HTTP request handlers, grouped by audience.

pub mod admin;
pub mod events;
pub mod taxonomies;
