//! Route definitions for the `/assistant` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::assistant;
use crate::state::AppState;

/// Routes mounted at `/assistant`.
///
/// ```text
/// POST /message  -> ask the assistant (requires auth)
/// GET  /history  -> past exchanges (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/message", post(assistant::message))
        .route("/history", get(assistant::history))
}
