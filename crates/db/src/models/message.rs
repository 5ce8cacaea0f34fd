//! Assistant message history model and DTOs.

use serde::Serialize;
use sqlx::FromRow;

use plantguard_core::types::{DbId, Timestamp};

/// A row from the `message_history` table: one exchange with the assistant.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MessageEntry {
    pub id: DbId,
    pub user_id: DbId,
    pub message: String,
    pub response: String,
    pub created_at: Timestamp,
}

/// DTO for recording a new exchange.
#[derive(Debug)]
pub struct CreateMessage {
    pub user_id: DbId,
    pub message: String,
    pub response: String,
}
