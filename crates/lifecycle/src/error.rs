use techweek_core::CoreError;
use techweek_luma::LumaError;

/// Error type for lifecycle transitions.
#[derive(Debug, thiserror::Error)]
pub enum LifecycleError {
    /// A domain-level error: not found, wrong state, invalid input.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A provider call failed. For `publish` this aborts the transition.
    #[error("Provider error: {0}")]
    Provider(#[from] LumaError),
}
