//! Shared harness for HTTP-level integration tests.
//!
//! Builds the real application router (same middleware stack as `main.rs`)
//! over a `#[sqlx::test]`-provided pool, with a local image store rooted in
//! a throwaway directory.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use plantguard_api::auth::jwt::JwtConfig;
use plantguard_api::config::{ServerConfig, StorageConfig};
use plantguard_api::router::build_app_router;
use plantguard_api::state::AppState;
use plantguard_core::detection::{CatalogDetector, DetectionService};
use plantguard_storage::{LocalImageStore, StorageBackend};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(upload_dir: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 60,
        analyze_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
        storage: StorageConfig {
            backend: StorageBackend::Local,
            upload_dir: upload_dir.to_string(),
            public_base_url: "http://localhost:3000/uploads".to_string(),
            s3_bucket: None,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and a throwaway upload directory.
pub fn build_test_app(pool: PgPool) -> Router {
    let upload_dir = tempfile::tempdir()
        .expect("tempdir should be creatable")
        .keep();
    let config = test_config(&upload_dir.to_string_lossy());
    build_test_app_with(pool, config, Arc::new(CatalogDetector))
}

/// Same as [`build_test_app`] but with a caller-supplied config and
/// detection backend, for tests that need to reshape the timeouts or
/// control how long a detection takes.
pub fn build_test_app_with(
    pool: PgPool,
    config: ServerConfig,
    detector: Arc<dyn DetectionService>,
) -> Router {
    let image_store = Arc::new(LocalImageStore::new(
        &config.storage.upload_dir,
        &config.storage.public_base_url,
    ));
    let state = AppState::new(pool, Arc::new(config.clone()), image_store, detector);

    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request should build"),
    )
    .await
    .expect("request should not fail at the transport level")
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .expect("request should build"),
    )
    .await
    .expect("request should not fail at the transport level")
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request should build"),
    )
    .await
    .expect("request should not fail at the transport level")
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::from(body.to_string()))
            .expect("request should build"),
    )
    .await
    .expect("request should not fail at the transport level")
}

/// POST a single-file multipart form with the given field name.
pub async fn post_multipart_auth(
    app: Router,
    uri: &str,
    token: &str,
    field: &str,
    file_name: &str,
    content_type: &str,
    bytes: &[u8],
) -> Response<Body> {
    let boundary = "plantguard-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::from(body))
            .expect("request should build"),
    )
    .await
    .expect("request should not fail at the transport level")
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Collect a response body into a UTF-8 string.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body should be UTF-8")
}

// ---------------------------------------------------------------------------
// Account helpers
// ---------------------------------------------------------------------------

/// Register a user through the API and return the auth response JSON.
pub async fn register_user(app: Router, email: &str, password: &str) -> serde_json::Value {
    let body = serde_json::json!({
        "email": email,
        "password": password,
        "display_name": "Test Grower",
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

/// Register a user and return just the access token.
pub async fn access_token_for(app: Router, email: &str) -> String {
    let json = register_user(app, email, "a-sufficient-password").await;
    json["access_token"]
        .as_str()
        .expect("register response must carry an access token")
        .to_string()
}
