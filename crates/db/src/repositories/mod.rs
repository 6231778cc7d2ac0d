//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod cohost_repo;
pub mod email_repo;
pub mod event_repo;
pub mod job_repo;
pub mod taxonomy_repo;

pub use cohost_repo::CohostRepo;
pub use email_repo::EmailRepo;
pub use event_repo::EventRepo;
pub use job_repo::JobRepo;
pub use taxonomy_repo::TaxonomyRepo;
