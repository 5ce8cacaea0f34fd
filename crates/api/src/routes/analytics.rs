//! Route definitions for the `/analytics` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::analytics;
use crate::state::AppState;

/// Routes mounted at `/analytics`.
///
/// ```text
/// GET /trends                   -> monthly disease trends
/// GET /trends/export            -> trends as CSV download
/// GET /crop-distribution        -> crop shares
/// GET /treatment-effectiveness  -> treatment scores
/// GET /weather                  -> weekly weather readings
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/trends", get(analytics::trends))
        .route("/trends/export", get(analytics::export_trends))
        .route("/crop-distribution", get(analytics::crop_distribution))
        .route(
            "/treatment-effectiveness",
            get(analytics::treatment_effectiveness),
        )
        .route("/weather", get(analytics::weather))
}
