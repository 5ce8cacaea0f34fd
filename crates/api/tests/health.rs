//! Health endpoint integration test.

mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn health_reports_ok_with_reachable_db(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = common::get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = common::body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
    assert!(json["version"].is_string());
}
