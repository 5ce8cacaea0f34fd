//! Detection (diagnosis history) model and DTOs.

use serde::Serialize;
use sqlx::FromRow;

use plantguard_core::types::{DbId, Timestamp};

/// A row from the `detections` table. Immutable once written.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Detection {
    pub id: DbId,
    pub user_id: DbId,
    pub plant_type: String,
    pub disease_name: String,
    pub description: String,
    /// Always within `[0, 1]` (enforced by a CHECK constraint).
    pub confidence: f64,
    /// One of `low`, `medium`, `high` (enforced by a CHECK constraint).
    pub severity: String,
    pub treatment: Vec<String>,
    pub prevention: Vec<String>,
    pub image_url: String,
    pub image_width: Option<i32>,
    pub image_height: Option<i32>,
    pub created_at: Timestamp,
}

/// DTO for creating a new detection record.
#[derive(Debug, Clone)]
pub struct CreateDetection {
    pub user_id: DbId,
    pub plant_type: String,
    pub disease_name: String,
    pub description: String,
    pub confidence: f64,
    pub severity: String,
    pub treatment: Vec<String>,
    pub prevention: Vec<String>,
    pub image_url: String,
    pub image_width: Option<i32>,
    pub image_height: Option<i32>,
}
