use serde::Serialize;
use uuid::Uuid;

// ============================================================================
// Base Response Types
// ============================================================================

/// Wrapper for successful responses with data
#[derive(Debug, Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Error response format
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

// ============================================================================
// Visit Operation Responses
// ============================================================================

/// Response for a recorded branch visit
#[derive(Debug, Serialize)]
pub struct RecordVisitData {
    pub id: Uuid,
    pub branch: String,
}

// ============================================================================
// Log Responses
// ============================================================================

/// A single log entry in API responses
#[derive(Debug, Serialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: String,
    pub operation: String,
    pub details: serde_json::Value,
}

/// Response for log viewing
#[derive(Debug, Serialize)]
pub struct LogsData {
    pub entries: Vec<LogEntry>,
    pub count: usize,
}

/// Response for log clearing
#[derive(Debug, Serialize)]
pub struct ClearLogsData {
    pub cleared: bool,
}
