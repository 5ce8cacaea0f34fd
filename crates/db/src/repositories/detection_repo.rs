//! Repository for the `detections` table.
//!
//! Detection records are immutable: there is deliberately no update or
//! delete method here.

use sqlx::PgPool;

use plantguard_core::types::DbId;

use crate::models::detection::{CreateDetection, Detection};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, plant_type, disease_name, description, confidence, \
                        severity, treatment, prevention, image_url, image_width, \
                        image_height, created_at";

/// Provides insert and read operations for diagnosis history.
pub struct DetectionRepo;

impl DetectionRepo {
    /// Insert a new detection, returning the created row with its
    /// server-assigned id and timestamp.
    pub async fn create(pool: &PgPool, input: &CreateDetection) -> Result<Detection, sqlx::Error> {
        let query = format!(
            "INSERT INTO detections (user_id, plant_type, disease_name, description,
                                     confidence, severity, treatment, prevention,
                                     image_url, image_width, image_height)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Detection>(&query)
            .bind(input.user_id)
            .bind(&input.plant_type)
            .bind(&input.disease_name)
            .bind(&input.description)
            .bind(input.confidence)
            .bind(&input.severity)
            .bind(&input.treatment)
            .bind(&input.prevention)
            .bind(&input.image_url)
            .bind(input.image_width)
            .bind(input.image_height)
            .fetch_one(pool)
            .await
    }

    /// List a user's detections, most recent first. Returns an empty list
    /// (not an error) for users with no history.
    pub async fn list_by_owner(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Detection>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM detections
             WHERE user_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Detection>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
