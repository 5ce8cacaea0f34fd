//! Repository for the `message_history` table.

use sqlx::PgPool;

use plantguard_core::types::DbId;

use crate::models::message::{CreateMessage, MessageEntry};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, message, response, created_at";

/// Records and lists assistant exchanges.
pub struct MessageRepo;

impl MessageRepo {
    /// Insert a new exchange, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMessage) -> Result<MessageEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO message_history (user_id, message, response)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MessageEntry>(&query)
            .bind(input.user_id)
            .bind(&input.message)
            .bind(&input.response)
            .fetch_one(pool)
            .await
    }

    /// List a user's exchanges, most recent first.
    pub async fn list_by_owner(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<MessageEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM message_history
             WHERE user_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, MessageEntry>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
