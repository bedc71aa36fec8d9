pub mod health;
pub mod videos;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /videos                 generate (POST), history (GET)
/// /videos/{id}            plan detail
/// /videos/{id}/export     plan JSON download
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/videos", videos::router())
}
