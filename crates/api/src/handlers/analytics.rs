//! Handlers for the `/analytics` resource (read-only dashboard data).
//!
//! Each endpoint serves rows from its externally seeded table; an empty
//! table falls back to generated placeholder rows so the dashboard always
//! renders.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use plantguard_core::analytics::{
    placeholder_crop_distribution, placeholder_treatment_effectiveness, placeholder_trends,
    placeholder_weather, trends_csv, CropShare, TreatmentScore, TrendPoint, WeatherPoint,
};
use plantguard_db::repositories::AnalyticsRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/analytics/trends
pub async fn trends(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<TrendPoint>>>> {
    let rows = trend_rows(&state).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/v1/analytics/crop-distribution
pub async fn crop_distribution(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<CropShare>>>> {
    let rows = AnalyticsRepo::list_crop_distribution(&state.pool).await?;
    let data: Vec<CropShare> = if rows.is_empty() {
        placeholder_crop_distribution()
    } else {
        rows.into_iter().map(CropShare::from).collect()
    };
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/analytics/treatment-effectiveness
pub async fn treatment_effectiveness(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<TreatmentScore>>>> {
    let rows = AnalyticsRepo::list_treatment_effectiveness(&state.pool).await?;
    let data: Vec<TreatmentScore> = if rows.is_empty() {
        placeholder_treatment_effectiveness()
    } else {
        rows.into_iter().map(TreatmentScore::from).collect()
    };
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/analytics/weather
pub async fn weather(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<WeatherPoint>>>> {
    let rows = AnalyticsRepo::list_weather(&state.pool).await?;
    let data: Vec<WeatherPoint> = if rows.is_empty() {
        placeholder_weather()
    } else {
        rows.into_iter().map(WeatherPoint::from).collect()
    };
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/analytics/trends/export
///
/// The trend rows as a downloadable CSV file.
pub async fn export_trends(State(state): State<AppState>) -> AppResult<Response> {
    let rows = trend_rows(&state).await?;
    let csv = trends_csv(&rows);

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"disease-trends.csv\"",
            ),
        ],
        csv,
    )
        .into_response())
}

async fn trend_rows(state: &AppState) -> AppResult<Vec<TrendPoint>> {
    let rows = AnalyticsRepo::list_trends(&state.pool).await?;
    Ok(if rows.is_empty() {
        placeholder_trends()
    } else {
        rows.into_iter().map(TrendPoint::from).collect()
    })
}
