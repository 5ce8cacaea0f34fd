use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use plantguard_core::detection::DetectionService;
use plantguard_core::store::ImageStore;
use plantguard_core::types::DbId;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: plantguard_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Blob store for uploaded crop images.
    pub image_store: Arc<dyn ImageStore>,
    /// Detection backend producing diagnoses.
    pub detector: Arc<dyn DetectionService>,
    /// Users with an analysis currently in flight. One analysis per user
    /// at a time; a second request while listed here gets a 409.
    pub active_analyses: Arc<Mutex<HashSet<DbId>>>,
}

impl AppState {
    pub fn new(
        pool: plantguard_db::DbPool,
        config: Arc<ServerConfig>,
        image_store: Arc<dyn ImageStore>,
        detector: Arc<dyn DetectionService>,
    ) -> Self {
        Self {
            pool,
            config,
            image_store,
            detector,
            active_analyses: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Claim the caller's analysis slot. Returns `None` while the user
    /// already has an analysis in flight.
    pub fn begin_analysis(&self, user_id: DbId) -> Option<AnalysisGuard> {
        AnalysisGuard::acquire(&self.active_analyses, user_id)
    }
}

/// Holds a user's in-flight analysis slot. The slot is released on drop,
/// which also covers request futures dropped mid-flight by a timeout layer
/// or a client disconnect.
pub struct AnalysisGuard {
    active: Arc<Mutex<HashSet<DbId>>>,
    user_id: DbId,
}

impl AnalysisGuard {
    fn acquire(active: &Arc<Mutex<HashSet<DbId>>>, user_id: DbId) -> Option<Self> {
        let claimed = active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(user_id);
        claimed.then(|| Self {
            active: Arc::clone(active),
            user_id,
        })
    }
}

impl Drop for AnalysisGuard {
    fn drop(&mut self) {
        self.active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.user_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_claim_for_same_user_is_refused() {
        let active = Arc::new(Mutex::new(HashSet::new()));
        let guard = AnalysisGuard::acquire(&active, 1);
        assert!(guard.is_some());
        assert!(AnalysisGuard::acquire(&active, 1).is_none());
        assert!(AnalysisGuard::acquire(&active, 2).is_some());
    }

    #[test]
    fn dropping_the_guard_frees_the_slot() {
        let active = Arc::new(Mutex::new(HashSet::new()));
        let guard = AnalysisGuard::acquire(&active, 1);
        drop(guard);
        assert!(AnalysisGuard::acquire(&active, 1).is_some());
    }
}
