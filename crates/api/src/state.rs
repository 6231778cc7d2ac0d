use std::sync::Arc;

use techweek_lifecycle::LifecycleService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: techweek_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Lifecycle orchestration (approve/reject/publish) with the injected
    /// provider and email queue.
    pub lifecycle: LifecycleService,
}
