use std::sync::Arc;

use postboard_db::store::PostStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Post storage (Postgres in production, in-memory in tests).
    pub store: Arc<dyn PostStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
