//! Upload-and-analysis pipeline state machine.
//!
//! One submission moves through `Idle -> Previewing -> Analyzing ->
//! Result | Failed`, with a user-initiated `remove` back to `Idle`. All
//! steps run sequentially for a single submission; a `select` while a
//! pipeline is in flight is ignored, so `Analyzing` acts as a mutex for
//! the session.
//!
//! Failure policy: an upload failure is terminal for the submission, but a
//! persistence failure after a successful upload and detection is not:
//! the machine still reaches `Result` and carries the save failure as a
//! soft warning. Availability of the diagnosis outranks durability of the
//! history record.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::detection::{DetectionService, DiagnosisCandidate};
use crate::store::{ImageFile, ImageStore};
use crate::types::DbId;

/// Maximum accepted image size (10 MiB).
pub const MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

/// Terminal failure reasons for a submission.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FailureReason {
    #[error("Unsupported file type '{0}'. Please select an image file.")]
    InvalidFileType(String),

    #[error("File size {0} bytes exceeds the 10 MiB limit")]
    FileTooLarge(u64),

    #[error("Image upload failed: {0}")]
    Upload(String),

    #[error("Analysis timed out")]
    Timeout,
}

/// States of one upload session.
#[derive(Debug)]
pub enum UploadState {
    Idle,
    Previewing(ImageFile),
    Analyzing,
    Result(Box<AnalysisOutcome>),
    Failed(FailureReason),
}

/// What `Analyzing` produced once the upload succeeded.
#[derive(Debug)]
pub struct AnalysisOutcome {
    pub candidate: DiagnosisCandidate,
    /// Public URL of the stored image; non-empty whenever `Result` is reached.
    pub image_url: String,
    /// Id of the persisted history record, if the save succeeded.
    pub record_id: Option<DbId>,
    /// Soft warning when the save failed; the diagnosis itself is unaffected.
    pub persist_warning: Option<String>,
}

/// Errors aborting `confirm` before the pipeline starts. The session state
/// is left unchanged (`Previewing`), so the submission is not lost.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfirmError {
    #[error("Sign in to analyze plant images")]
    AuthRequired,

    #[error("No image is awaiting analysis")]
    NotPreviewing,
}

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct PersistError(pub String);

/// Persistence seam for computed diagnoses. The API crate implements this
/// over the detections repository.
#[async_trait]
pub trait DiagnosisSink: Send + Sync {
    async fn save(
        &self,
        candidate: &DiagnosisCandidate,
        owner_id: DbId,
        image_url: &str,
    ) -> Result<DbId, PersistError>;
}

/// Guard a file before it may enter `Previewing`.
pub fn validate_image(file: &ImageFile) -> Result<(), FailureReason> {
    if !file.content_type.starts_with("image/") {
        return Err(FailureReason::InvalidFileType(file.content_type.clone()));
    }
    if file.size() > MAX_IMAGE_BYTES {
        return Err(FailureReason::FileTooLarge(file.size()));
    }
    Ok(())
}

/// One user's upload session, driving validate -> upload -> detect -> save.
pub struct UploadSession {
    state: UploadState,
    store: Arc<dyn ImageStore>,
    detector: Arc<dyn DetectionService>,
    sink: Arc<dyn DiagnosisSink>,
    analyze_timeout: Duration,
}

impl UploadSession {
    pub fn new(
        store: Arc<dyn ImageStore>,
        detector: Arc<dyn DetectionService>,
        sink: Arc<dyn DiagnosisSink>,
        analyze_timeout: Duration,
    ) -> Self {
        Self {
            state: UploadState::Idle,
            store,
            detector,
            sink,
            analyze_timeout,
        }
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    /// Consume the session, yielding its final state.
    pub fn into_state(self) -> UploadState {
        self.state
    }

    /// Accept a file for preview. Invalid files transition to `Failed`
    /// without any network call; a `select` while `Analyzing` is ignored.
    pub fn select(&mut self, file: ImageFile) {
        if matches!(self.state, UploadState::Analyzing) {
            return;
        }
        self.state = match validate_image(&file) {
            Ok(()) => UploadState::Previewing(file),
            Err(reason) => UploadState::Failed(reason),
        };
    }

    /// User-initiated reset: clears preview and result. Already-uploaded
    /// blobs are deliberately not deleted here.
    pub fn remove(&mut self) {
        self.state = UploadState::Idle;
    }

    /// Run the pipeline for the previewed file.
    ///
    /// Requires an authenticated owner: with `None` the call aborts with
    /// [`ConfirmError::AuthRequired`] and the state stays `Previewing` so
    /// the submission survives a sign-in round trip. Cancelling `cancel`
    /// abandons the analysis and returns the session to `Idle`; exceeding
    /// `analyze_timeout` fails the submission with `FailureReason::Timeout`.
    pub async fn confirm(
        &mut self,
        owner: Option<DbId>,
        cancel: &CancellationToken,
    ) -> Result<(), ConfirmError> {
        let file = match &self.state {
            UploadState::Previewing(file) => file.clone(),
            _ => return Err(ConfirmError::NotPreviewing),
        };
        let Some(owner_id) = owner else {
            return Err(ConfirmError::AuthRequired);
        };

        self.state = UploadState::Analyzing;

        let store = Arc::clone(&self.store);
        let detector = Arc::clone(&self.detector);
        let sink = Arc::clone(&self.sink);
        let run = run_pipeline(store, detector, sink, file, owner_id);

        self.state = tokio::select! {
            () = cancel.cancelled() => UploadState::Idle,
            finished = tokio::time::timeout(self.analyze_timeout, run) => match finished {
                Err(_elapsed) => UploadState::Failed(FailureReason::Timeout),
                Ok(state) => state,
            },
        };
        Ok(())
    }
}

/// upload -> detect -> save, in order. Only the upload step can fail the
/// submission; the save step degrades to a warning.
async fn run_pipeline(
    store: Arc<dyn ImageStore>,
    detector: Arc<dyn DetectionService>,
    sink: Arc<dyn DiagnosisSink>,
    file: ImageFile,
    owner_id: DbId,
) -> UploadState {
    let image_url = match store.upload(&file).await {
        Ok(url) => url,
        Err(e) => return UploadState::Failed(FailureReason::Upload(e.to_string())),
    };

    let candidate = detector.detect(&file).await;

    let (record_id, persist_warning) = match sink.save(&candidate, owner_id, &image_url).await {
        Ok(id) => (Some(id), None),
        Err(e) => (
            None,
            Some(format!("Diagnosis was not saved to your history: {e}")),
        ),
    };

    UploadState::Result(Box::new(AnalysisOutcome {
        candidate,
        image_url,
        record_id,
        persist_warning,
    }))
}
