pub mod analytics;
pub mod assistant;
pub mod auth;
pub mod detections;
pub mod health;
pub mod knowledge;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                       register (public)
/// /auth/login                          login (public)
/// /auth/refresh                        refresh (public)
/// /auth/logout                         logout (requires auth)
///
/// /detections                          list history (requires auth)
/// /detections/analyze                  run analysis (multipart, requires auth)
///
/// /knowledge                           list articles (public)
/// /knowledge/{slug}                    get article (public)
///
/// /assistant/message                   ask the assistant (requires auth)
/// /assistant/history                   past exchanges (requires auth)
///
/// /analytics/trends                    monthly disease trends (public)
/// /analytics/trends/export             trends as CSV (public)
/// /analytics/crop-distribution         crop shares (public)
/// /analytics/treatment-effectiveness   treatment scores (public)
/// /analytics/weather                   weekly weather readings (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/detections", detections::router())
        .nest("/knowledge", knowledge::router())
        .nest("/assistant", assistant::router())
        .nest("/analytics", analytics::router())
}
