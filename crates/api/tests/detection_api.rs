//! HTTP-level integration tests for the analysis pipeline and diagnosis
//! history endpoints.

mod common;

use axum::http::StatusCode;
use common::{access_token_for, body_json, get_auth, post_multipart_auth};
use sqlx::PgPool;

/// Smallest valid 1x1 PNG (8-byte signature + IHDR + IDAT + IEND).
const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x62, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

/// Analysis without a token is rejected before any upload work.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_analyze_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_multipart_auth(
        app,
        "/api/v1/detections/analyze",
        "not-a-valid-token",
        "image",
        "leaf.png",
        "image/png",
        TINY_PNG,
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A valid image from a signed-in user yields 201 with a full diagnosis
/// and a saved history record.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_analyze_happy_path(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = access_token_for(app.clone(), "analyzer@test.com").await;

    let response = post_multipart_auth(
        app.clone(),
        "/api/v1/detections/analyze",
        &token,
        "image",
        "leaf.png",
        "image/png",
        TINY_PNG,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let data = &json["data"];
    assert!(data["record_id"].is_number(), "diagnosis must be saved");
    assert!(data["disease_name"].is_string());
    assert!(!data["plant_type"].as_str().unwrap().is_empty());

    let confidence = data["confidence"].as_f64().unwrap();
    assert!((0.0..=1.0).contains(&confidence));

    let severity = data["severity"].as_str().unwrap();
    assert!(["low", "medium", "high"].contains(&severity));

    assert!(data["treatment"].as_array().unwrap().len() > 0);
    assert!(data["prevention"].as_array().unwrap().len() > 0);
    assert!(data["image_url"].as_str().unwrap().starts_with("http"));
    assert_eq!(data["image_width"], 1);
    assert_eq!(data["image_height"], 1);
    assert!(data["warning"].is_null(), "no warning on a clean save");

    // The record shows up in history.
    let response = get_auth(app, "/api/v1/detections", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let history = json["data"].as_array().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["disease_name"], data["disease_name"]);
}

/// A non-image upload is rejected with 400 and creates no record.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_analyze_rejects_non_image(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = access_token_for(app.clone(), "pdfuser@test.com").await;

    let response = post_multipart_auth(
        app.clone(),
        "/api/v1/detections/analyze",
        &token,
        "image",
        "notes.pdf",
        "application/pdf",
        b"%PDF-1.4 not an image",
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get_auth(app, "/api/v1/detections", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

/// A form without the `image` field is a 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_analyze_missing_image_field(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = access_token_for(app.clone(), "nofield@test.com").await;

    let response = post_multipart_auth(
        app,
        "/api/v1/detections/analyze",
        &token,
        "attachment",
        "leaf.png",
        "image/png",
        TINY_PNG,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// History is per-user: one user's detections never leak into another's list.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_history_is_owner_scoped(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token_a = access_token_for(app.clone(), "owner-a@test.com").await;
    let token_b = access_token_for(app.clone(), "owner-b@test.com").await;

    let response = post_multipart_auth(
        app.clone(),
        "/api/v1/detections/analyze",
        &token_a,
        "image",
        "leaf.png",
        "image/png",
        TINY_PNG,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get_auth(app.clone(), "/api/v1/detections", &token_b).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);

    let response = get_auth(app, "/api/v1/detections", &token_a).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}
