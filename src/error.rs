use thiserror::Error;

#[derive(Error, Debug)]
pub enum FingerForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Insufficient notes: need at least 2 to score a transition, got {count}")]
    InsufficientNotes { count: usize },

    #[error("Fingering length mismatch: expected {expected} fingers (one per note), got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Malformed calibration table '{key}': {reason}")]
    MalformedTable { key: String, reason: String },

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type FfResult<T> = Result<T, FingerForgeError>;
