//! HTTP-level integration tests for the plant-care assistant endpoints.

mod common;

use axum::http::StatusCode;
use common::{access_token_for, body_json, get_auth, post_json, post_json_auth};
use sqlx::PgPool;

/// The assistant requires authentication.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_message_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "message": "How do I treat tomato blight?" });
    let response = post_json(app, "/api/v1/assistant/message", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A disease question gets a reply with structured advice and is saved to
/// history.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_disease_question_returns_structured_advice(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = access_token_for(app.clone(), "asker@test.com").await;

    let body = serde_json::json!({ "message": "How do I treat tomato blight?" });
    let response = post_json_auth(app.clone(), "/api/v1/assistant/message", &token, body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["data"]["response"].is_string());
    let structured = &json["data"]["structured"];
    assert!(structured["symptoms"].as_array().unwrap().len() > 0);
    assert!(structured["treatments"].as_array().unwrap().len() > 0);

    let response = get_auth(app, "/api/v1/assistant/history", &token).await;
    let json = body_json(response).await;
    let history = json["data"].as_array().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["message"], "How do I treat tomato blight?");
}

/// Non-disease questions get a plain reply with no structured block.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_greeting_has_no_structured_block(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = access_token_for(app.clone(), "greeter@test.com").await;

    let body = serde_json::json!({ "message": "Hello there!" });
    let response = post_json_auth(app, "/api/v1/assistant/message", &token, body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["data"]["response"].is_string());
    assert!(json["data"]["structured"].is_null());
}

/// Empty messages are rejected with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_empty_message_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = access_token_for(app.clone(), "mute@test.com").await;

    let body = serde_json::json!({ "message": "   " });
    let response = post_json_auth(app, "/api/v1/assistant/message", &token, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// History is newest first.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_history_newest_first(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = access_token_for(app.clone(), "historian@test.com").await;

    for message in ["first question", "second question"] {
        let body = serde_json::json!({ "message": message });
        let response =
            post_json_auth(app.clone(), "/api/v1/assistant/message", &token, body).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = get_auth(app, "/api/v1/assistant/history", &token).await;
    let json = body_json(response).await;
    let history = json["data"].as_array().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["message"], "second question");
    assert_eq!(history[1]["message"], "first question");
}
