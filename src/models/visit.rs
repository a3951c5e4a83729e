use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single recorded branch checkout.
///
/// Created once per branch-level checkout and handed to the recorder;
/// nothing is retained in-process beyond the call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitEvent {
    /// Unique event ID
    pub id: Uuid,
    /// Branch short-name (e.g., "main", "feature/foo")
    pub branch: String,
    /// When the checkout happened
    pub timestamp: DateTime<Utc>,
}

impl VisitEvent {
    /// Create a new visit event stamped with the current time.
    pub fn new(branch: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            branch: branch.into(),
            timestamp: Utc::now(),
        }
    }
}
