//! Durable visit log backing the JSON recorder.
//!
//! Visits are kept as pretty JSON in `<store-dir>/visits.json`, with the
//! store directory created on first write.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::VisitEvent;

pub const STORE_FILE_NAME: &str = "visits.json";

/// The full history of recorded branch visits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisitLog {
    pub visits: Vec<VisitEvent>,
}

impl VisitLog {
    /// Load the log from `path`.
    ///
    /// A missing file yields an empty log; unreadable or unparsable content
    /// is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    /// Append a visit for `branch` and return the new event.
    ///
    /// Repeated visits to the same branch append further events; recording
    /// a name twice is never an error.
    pub fn record(&mut self, branch: &str) -> VisitEvent {
        let event = VisitEvent::new(branch);
        self.visits.push(event.clone());
        event
    }

    /// Write the log to `path`, creating the parent directory if needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Deduplicated branch names, in first-visit order.
    pub fn branches(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for visit in &self.visits {
            if !seen.contains(&visit.branch.as_str()) {
                seen.push(visit.branch.as_str());
            }
        }
        seen
    }
}
