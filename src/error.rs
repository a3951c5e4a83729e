use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrkError {
    #[error("Invalid branch name: {0:?}. Must be a non-empty git ref short-name")]
    InvalidBranchName(String),

    #[error("Recorder unavailable: {0}")]
    RecorderUnavailable(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TrkError>;
