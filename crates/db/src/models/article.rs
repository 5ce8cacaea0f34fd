//! Knowledge article model. Read-only from the application's point of view.

use serde::Serialize;
use sqlx::FromRow;

use plantguard_core::types::{DbId, Timestamp};

/// A row from the `knowledge_articles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Article {
    pub id: DbId,
    pub title: String,
    pub category: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub image_url: Option<String>,
    pub image_alt: Option<String>,
    pub slug: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
