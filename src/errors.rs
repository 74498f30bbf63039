use thiserror::Error;

/// Error type that captures failures around the recurrence engine: file access,
/// (de)serialization, and malformed caller input.
#[derive(Debug, Error)]
pub enum RecurringError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
