//! Handlers for the `/detections` resource: running an analysis on an
//! uploaded image and listing the caller's diagnosis history.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use plantguard_core::detection::DiagnosisCandidate;
use plantguard_core::error::CoreError;
use plantguard_core::imaging::image_dimensions;
use plantguard_core::pipeline::{
    DiagnosisSink, FailureReason, PersistError, UploadSession, UploadState,
};
use plantguard_core::store::ImageFile;
use plantguard_core::types::DbId;
use plantguard_db::models::detection::{CreateDetection, Detection};
use plantguard_db::repositories::DetectionRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Response body for `POST /detections/analyze`.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    /// Id of the saved history record; `None` when the save failed.
    pub record_id: Option<DbId>,
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
    /// Soft warning when the diagnosis could not be saved to history.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

// ---------------------------------------------------------------------------
// Persistence seam
// ---------------------------------------------------------------------------

/// [`DiagnosisSink`] over the detections repository. Image dimensions are
/// captured at construction since the pipeline only hands the sink the
/// candidate and the stored URL.
struct RepoSink {
    pool: plantguard_db::DbPool,
    image_width: Option<i32>,
    image_height: Option<i32>,
}

#[async_trait]
impl DiagnosisSink for RepoSink {
    async fn save(
        &self,
        candidate: &DiagnosisCandidate,
        owner_id: DbId,
        image_url: &str,
    ) -> Result<DbId, PersistError> {
        let input = CreateDetection {
            user_id: owner_id,
            plant_type: candidate.plant_type.clone(),
            disease_name: candidate.disease_name.clone(),
            description: candidate.description.clone(),
            confidence: candidate.confidence,
            severity: candidate.severity.as_str().to_string(),
            treatment: candidate.treatment.clone(),
            prevention: candidate.prevention.clone(),
            image_url: image_url.to_string(),
            image_width: self.image_width,
            image_height: self.image_height,
        };
        let row = DetectionRepo::create(&self.pool, &input)
            .await
            .map_err(|e| PersistError(e.to_string()))?;
        Ok(row.id)
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/detections/analyze
///
/// Accepts a multipart form with a required `image` field, runs the
/// upload-and-analysis pipeline, and returns the diagnosis. Requires
/// authentication; a second request while the caller already has an
/// analysis in flight gets a 409.
pub async fn analyze(
    State(state): State<AppState>,
    auth_user: AuthUser,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<AnalyzeResponse>>)> {
    let user_id = auth_user.user_id;

    // One analysis per user at a time. The guard releases the slot on
    // drop, so a request cut off mid-analysis does not wedge the user.
    let _guard = state.begin_analysis(user_id).ok_or_else(|| {
        AppError::Core(CoreError::Conflict(
            "An analysis is already in progress for this account".into(),
        ))
    })?;

    run_analysis(&state, user_id, multipart).await
}

/// GET /api/v1/detections
///
/// List the caller's diagnosis history, most recent first.
pub async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Detection>>>> {
    let detections = DetectionRepo::list_by_owner(&state.pool, auth_user.user_id).await?;
    Ok(Json(DataResponse { data: detections }))
}

// ---------------------------------------------------------------------------
// Pipeline driver
// ---------------------------------------------------------------------------

async fn run_analysis(
    state: &AppState,
    user_id: DbId,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<AnalyzeResponse>>)> {
    let file = read_image_field(multipart).await?;
    let (image_width, image_height) = match image_dimensions(&file.bytes) {
        Some((w, h)) => (Some(w as i32), Some(h as i32)),
        None => (None, None),
    };

    let sink = Arc::new(RepoSink {
        pool: state.pool.clone(),
        image_width,
        image_height,
    });

    let mut session = UploadSession::new(
        Arc::clone(&state.image_store),
        Arc::clone(&state.detector),
        sink,
        Duration::from_secs(state.config.analyze_timeout_secs),
    );

    session.select(file);
    if let UploadState::Failed(reason) = session.state() {
        return Err(AppError::BadRequest(reason.to_string()));
    }

    // Requests have no client-driven cancel path; the token exists for the
    // pipeline's contract and stays unfired here.
    session
        .confirm(Some(user_id), &CancellationToken::new())
        .await
        .map_err(|e| AppError::InternalError(format!("Pipeline rejected confirm: {e}")))?;

    match session.into_state() {
        UploadState::Result(outcome) => {
            if let Some(warning) = &outcome.persist_warning {
                tracing::warn!(user_id, warning = %warning, "Diagnosis not persisted");
            }
            let response = AnalyzeResponse {
                record_id: outcome.record_id,
                plant_type: outcome.candidate.plant_type,
                disease_name: outcome.candidate.disease_name,
                description: outcome.candidate.description,
                confidence: outcome.candidate.confidence,
                severity: outcome.candidate.severity.as_str().to_string(),
                treatment: outcome.candidate.treatment,
                prevention: outcome.candidate.prevention,
                image_url: outcome.image_url,
                image_width,
                image_height,
                warning: outcome.persist_warning,
            };
            Ok((StatusCode::CREATED, Json(DataResponse { data: response })))
        }
        UploadState::Failed(FailureReason::Timeout) => Err(AppError::AnalysisTimeout),
        UploadState::Failed(reason @ FailureReason::Upload(_)) => {
            tracing::error!(user_id, error = %reason, "Image upload failed");
            Err(AppError::InternalError(reason.to_string()))
        }
        UploadState::Failed(reason) => Err(AppError::BadRequest(reason.to_string())),
        other => Err(AppError::InternalError(format!(
            "Pipeline ended in unexpected state: {other:?}"
        ))),
    }
}

/// Pull the required `image` field out of the multipart form.
async fn read_image_field(mut multipart: Multipart) -> AppResult<ImageFile> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("image") {
            continue; // ignore unknown fields
        }
        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        return Ok(ImageFile {
            file_name,
            content_type,
            bytes: bytes.to_vec(),
        });
    }
    Err(AppError::BadRequest(
        "Missing required 'image' field".into(),
    ))
}
