//! Route definitions for video plan generation and history.
//!
//! Mounted at `/videos`.
//!
//! ```text
//! POST /                  generate
//! GET  /                  list
//! GET  /{id}              get_by_id
//! GET  /{id}/export       export
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::videos;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(videos::list).post(videos::generate))
        .route("/{id}", get(videos::get_by_id))
        .route("/{id}/export", get(videos::export))
}
