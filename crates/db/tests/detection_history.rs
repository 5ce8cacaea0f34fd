//! Integration tests for the diagnosis-history repository.
//!
//! Exercises the repository layer against a real database: insertion with
//! server-assigned ids, reverse-chronological listing, and per-owner
//! isolation.

use sqlx::PgPool;

use plantguard_db::models::detection::CreateDetection;
use plantguard_db::models::user::CreateUser;
use plantguard_db::repositories::{DetectionRepo, UserRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_test_user(pool: &PgPool, email: &str) -> i64 {
    let input = CreateUser {
        email: email.to_string(),
        display_name: None,
        password_hash: "$argon2id$stub".to_string(),
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
        .id
}

fn new_detection(user_id: i64, disease: &str) -> CreateDetection {
    CreateDetection {
        user_id,
        plant_type: "Tomato".to_string(),
        disease_name: disease.to_string(),
        description: "Dark spots with concentric rings".to_string(),
        confidence: 0.9,
        severity: "medium".to_string(),
        treatment: vec!["Remove affected leaves".to_string()],
        prevention: vec!["Rotate crops".to_string()],
        image_url: "https://img.test/uploads/a.jpg".to_string(),
        image_width: Some(640),
        image_height: Some(480),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

/// Insert assigns an id and a creation timestamp and echoes the input back.
#[sqlx::test(migrations = "./migrations")]
async fn create_assigns_id_and_timestamp(pool: PgPool) {
    let user_id = create_test_user(&pool, "grower@test.com").await;

    let row = DetectionRepo::create(&pool, &new_detection(user_id, "Tomato Early Blight"))
        .await
        .expect("insert should succeed");

    assert!(row.id > 0);
    assert_eq!(row.user_id, user_id);
    assert_eq!(row.disease_name, "Tomato Early Blight");
    assert_eq!(row.severity, "medium");
    assert_eq!(row.treatment.len(), 1);
    assert_eq!(row.image_width, Some(640));
}

/// Listing returns records newest-first.
#[sqlx::test(migrations = "./migrations")]
async fn list_by_owner_is_reverse_chronological(pool: PgPool) {
    let user_id = create_test_user(&pool, "grower@test.com").await;

    for disease in ["Tomato Early Blight", "Potato Late Blight", "Rice Blast"] {
        DetectionRepo::create(&pool, &new_detection(user_id, disease))
            .await
            .expect("insert should succeed");
    }

    let rows = DetectionRepo::list_by_owner(&pool, user_id)
        .await
        .expect("list should succeed");

    assert_eq!(rows.len(), 3);
    for pair in rows.windows(2) {
        assert!(
            pair[0].created_at >= pair[1].created_at,
            "rows must be ordered created_at DESC"
        );
    }
}

/// Listing only returns the owner's records.
#[sqlx::test(migrations = "./migrations")]
async fn list_by_owner_isolates_users(pool: PgPool) {
    let alice = create_test_user(&pool, "alice@test.com").await;
    let bob = create_test_user(&pool, "bob@test.com").await;

    DetectionRepo::create(&pool, &new_detection(alice, "Rice Blast"))
        .await
        .expect("insert should succeed");

    let bobs = DetectionRepo::list_by_owner(&pool, bob)
        .await
        .expect("list should succeed");
    assert!(bobs.is_empty(), "empty history must be an empty list");

    let alices = DetectionRepo::list_by_owner(&pool, alice)
        .await
        .expect("list should succeed");
    assert_eq!(alices.len(), 1);
    assert!(alices.iter().all(|d| d.user_id == alice));
}

/// Out-of-range confidence is rejected by the table constraint.
#[sqlx::test(migrations = "./migrations")]
async fn confidence_constraint_is_enforced(pool: PgPool) {
    let user_id = create_test_user(&pool, "grower@test.com").await;

    let mut input = new_detection(user_id, "Tomato Early Blight");
    input.confidence = 1.5;

    let result = DetectionRepo::create(&pool, &input).await;
    assert!(result.is_err(), "confidence > 1 must violate the CHECK");
}
