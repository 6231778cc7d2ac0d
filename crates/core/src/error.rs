use crate::types::DbId;

/// Domain-level error taxonomy shared across the workspace.
///
/// Variants are produced at the boundary where the condition is first
/// detected and matched on structurally downstream — never inferred from
/// message text.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
