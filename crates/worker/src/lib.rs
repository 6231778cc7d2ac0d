//! Background job runner.
//!
//! Hosts the scheduled jobs that keep the listing honest, chiefly the
//! periodic Luma reconciliation pass. Jobs are registered with
//! [`JobRunner`] and their executions recorded in `job_executions`.

pub mod runner;

pub use runner::JobRunner;
