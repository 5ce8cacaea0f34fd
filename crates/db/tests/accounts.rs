//! Integration tests for user and session repositories.

use chrono::{Duration, Utc};
use sqlx::PgPool;

use plantguard_db::models::session::CreateSession;
use plantguard_db::models::user::CreateUser;
use plantguard_db::repositories::{SessionRepo, UserRepo};

fn new_user(email: &str) -> CreateUser {
    CreateUser {
        email: email.to_string(),
        display_name: Some("Test Grower".to_string()),
        password_hash: "$argon2id$stub".to_string(),
    }
}

/// Duplicate emails violate the unique constraint.
#[sqlx::test(migrations = "./migrations")]
async fn duplicate_email_is_rejected(pool: PgPool) {
    UserRepo::create(&pool, &new_user("grower@test.com"))
        .await
        .expect("first insert should succeed");

    let result = UserRepo::create(&pool, &new_user("grower@test.com")).await;
    assert!(result.is_err(), "second insert must hit uq_users_email");
}

/// Login bookkeeping: failures increment, success resets and stamps.
#[sqlx::test(migrations = "./migrations")]
async fn login_counters_round_trip(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("grower@test.com"))
        .await
        .expect("insert should succeed");
    assert_eq!(user.failed_login_count, 0);
    assert!(user.last_login_at.is_none());

    UserRepo::increment_failed_login(&pool, user.id)
        .await
        .expect("increment should succeed");
    UserRepo::increment_failed_login(&pool, user.id)
        .await
        .expect("increment should succeed");

    let reloaded = UserRepo::find_by_id(&pool, user.id)
        .await
        .expect("find should succeed")
        .expect("user exists");
    assert_eq!(reloaded.failed_login_count, 2);

    UserRepo::record_successful_login(&pool, user.id)
        .await
        .expect("reset should succeed");

    let reloaded = UserRepo::find_by_id(&pool, user.id)
        .await
        .expect("find should succeed")
        .expect("user exists");
    assert_eq!(reloaded.failed_login_count, 0);
    assert!(reloaded.last_login_at.is_some());
}

/// A revoked session is no longer found by its token hash.
#[sqlx::test(migrations = "./migrations")]
async fn revoked_session_is_not_found(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("grower@test.com"))
        .await
        .expect("insert should succeed");

    let session = SessionRepo::create(
        &pool,
        &CreateSession {
            user_id: user.id,
            refresh_token_hash: "deadbeef".repeat(8),
            expires_at: Utc::now() + Duration::days(7),
        },
    )
    .await
    .expect("session insert should succeed");

    let found = SessionRepo::find_by_refresh_token_hash(&pool, &session.refresh_token_hash)
        .await
        .expect("lookup should succeed");
    assert!(found.is_some());

    assert!(SessionRepo::revoke(&pool, session.id)
        .await
        .expect("revoke should succeed"));

    let found = SessionRepo::find_by_refresh_token_hash(&pool, &session.refresh_token_hash)
        .await
        .expect("lookup should succeed");
    assert!(found.is_none(), "revoked sessions must not resolve");
}

/// An expired session is not found even when unrevoked.
#[sqlx::test(migrations = "./migrations")]
async fn expired_session_is_not_found(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("grower@test.com"))
        .await
        .expect("insert should succeed");

    SessionRepo::create(
        &pool,
        &CreateSession {
            user_id: user.id,
            refresh_token_hash: "feedface".repeat(8),
            expires_at: Utc::now() - Duration::minutes(1),
        },
    )
    .await
    .expect("session insert should succeed");

    let found = SessionRepo::find_by_refresh_token_hash(&pool, &"feedface".repeat(8))
        .await
        .expect("lookup should succeed");
    assert!(found.is_none());
}
