//! Route definitions for the `/detections` resource.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use plantguard_core::pipeline::MAX_IMAGE_BYTES;

use crate::handlers::detections;
use crate::state::AppState;

/// Routes mounted at `/detections`.
///
/// ```text
/// GET  /         -> list history (requires auth)
/// POST /analyze  -> run analysis (multipart, requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(detections::list))
        .route(
            "/analyze",
            post(detections::analyze)
                // Image limit plus headroom for multipart framing; the
                // pipeline enforces the exact per-file limit.
                .layer(DefaultBodyLimit::max(MAX_IMAGE_BYTES as usize + 64 * 1024)),
        )
}
