use std::sync::Arc;

use crate::config::ServerConfig;
use crate::store::PlanStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (timeouts, CORS origins, generation delay).
    pub config: Arc<ServerConfig>,
    /// In-process plan history.
    pub store: Arc<PlanStore>,
}
