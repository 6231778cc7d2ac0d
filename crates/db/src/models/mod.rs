//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts

pub mod cohost;
pub mod email;
pub mod event;
pub mod job;
pub mod taxonomy;
