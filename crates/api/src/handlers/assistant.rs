//! Handlers for the `/assistant` resource (canned plant-care advice).

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use plantguard_core::assistant::{self, StructuredAdvice};
use plantguard_db::models::message::{CreateMessage, MessageEntry};
use plantguard_db::repositories::MessageRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /assistant/message`.
#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    pub message: String,
}

/// Response body for `POST /assistant/message`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structured: Option<StructuredAdvice>,
    /// Soft warning when the exchange could not be saved to history.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// POST /api/v1/assistant/message
///
/// Answer a plant-care question and record the exchange. A failed history
/// write degrades to a warning; the reply itself is never lost.
pub async fn message(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<MessageRequest>,
) -> AppResult<Json<DataResponse<MessageResponse>>> {
    let trimmed = input.message.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest("Message must not be empty".into()));
    }

    let reply = assistant::reply(trimmed);

    let record = CreateMessage {
        user_id: auth_user.user_id,
        message: trimmed.to_string(),
        response: reply.response.clone(),
    };
    let warning = match MessageRepo::create(&state.pool, &record).await {
        Ok(_) => None,
        Err(e) => {
            tracing::warn!(user_id = auth_user.user_id, error = %e, "Assistant exchange not persisted");
            Some("This exchange was not saved to your history".to_string())
        }
    };

    Ok(Json(DataResponse {
        data: MessageResponse {
            response: reply.response,
            structured: reply.structured,
            warning,
        },
    }))
}

/// GET /api/v1/assistant/history
///
/// List the caller's past exchanges, newest first.
pub async fn history(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<MessageEntry>>>> {
    let entries = MessageRepo::list_by_owner(&state.pool, auth_user.user_id).await?;
    Ok(Json(DataResponse { data: entries }))
}
