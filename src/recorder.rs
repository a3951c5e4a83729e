//! Branch visit recording.
//!
//! The recorder is an injected collaborator: the hook and CLI layers only
//! see the [`BranchVisitRecorder`] trait, so tests can substitute the
//! in-memory implementation for the JSON-backed one.

use std::path::PathBuf;

use crate::error::{Result, TrkError};
use crate::git::is_valid_ref_name;
use crate::models::VisitEvent;
use crate::store::VisitLog;

/// Records that a branch was just visited.
///
/// One call per branch-level checkout. No retries; a failed recording is
/// reported once and not reattempted.
pub trait BranchVisitRecorder {
    /// Durably record a visit to `branch`.
    ///
    /// Fails with [`TrkError::InvalidBranchName`] for an empty name, the
    /// detached-HEAD sentinel, or a syntactically invalid ref short-name,
    /// and with [`TrkError::RecorderUnavailable`] when the store cannot be
    /// reached.
    fn record_visit(&mut self, branch: &str) -> Result<VisitEvent>;
}

/// Reject names the recorder must never accept.
fn validate_branch_name(branch: &str) -> Result<&str> {
    let branch = branch.trim();
    if !is_valid_ref_name(branch) {
        return Err(TrkError::InvalidBranchName(branch.to_string()));
    }
    Ok(branch)
}

// ============================================================================
// JsonRecorder
// ============================================================================

/// Recorder backed by the JSON visit log on disk.
pub struct JsonRecorder {
    store_path: PathBuf,
}

impl JsonRecorder {
    pub fn new(store_path: impl Into<PathBuf>) -> Self {
        Self {
            store_path: store_path.into(),
        }
    }

    pub fn store_path(&self) -> &PathBuf {
        &self.store_path
    }
}

impl BranchVisitRecorder for JsonRecorder {
    fn record_visit(&mut self, branch: &str) -> Result<VisitEvent> {
        let branch = validate_branch_name(branch)?;

        let mut log = VisitLog::load(&self.store_path)
            .map_err(|e| TrkError::RecorderUnavailable(e.to_string()))?;
        let event = log.record(branch);
        log.save(&self.store_path)
            .map_err(|e| TrkError::RecorderUnavailable(e.to_string()))?;

        Ok(event)
    }
}

// ============================================================================
// MemoryRecorder
// ============================================================================

/// In-memory recorder for tests.
///
/// Collects events instead of persisting them, and can be armed to fail
/// with `RecorderUnavailable` to exercise failure paths.
#[derive(Debug, Default)]
pub struct MemoryRecorder {
    pub visits: Vec<VisitEvent>,
    pub unavailable: bool,
}

impl MemoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A recorder whose every call fails with `RecorderUnavailable`.
    pub fn unavailable() -> Self {
        Self {
            visits: Vec::new(),
            unavailable: true,
        }
    }
}

impl BranchVisitRecorder for MemoryRecorder {
    fn record_visit(&mut self, branch: &str) -> Result<VisitEvent> {
        let branch = validate_branch_name(branch)?;

        if self.unavailable {
            return Err(TrkError::RecorderUnavailable(
                "in-memory recorder marked unavailable".to_string(),
            ));
        }

        let event = VisitEvent::new(branch);
        self.visits.push(event.clone());
        Ok(event)
    }
}
