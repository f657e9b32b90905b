use thiserror::Error;

pub mod api_failure;

pub use api_failure::{ApiFailure, FailureKind, ToastLevel};

pub type Result<T> = std::result::Result<T, ExpenseError>;

/// Error type that captures failures at the edges of the expense core.
///
/// Aggregation itself never fails; these variants come from decoding API
/// payloads, reading configuration, and establishing a session.
#[derive(Debug, Error)]
pub enum ExpenseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Session error: {0}")]
    Session(String),
    #[error("Configuration error: {0}")]
    Config(String),
}
