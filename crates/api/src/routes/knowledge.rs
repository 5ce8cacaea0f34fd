//! Route definitions for the `/knowledge` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::knowledge;
use crate::state::AppState;

/// Routes mounted at `/knowledge`.
///
/// ```text
/// GET /        -> list articles
/// GET /{slug}  -> get article by slug
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(knowledge::list))
        .route("/{slug}", get(knowledge::get_by_slug))
}
