//! Error types for the case workflow crate
//!
//! These are faults around the decision core (bad config, unreadable
//! files, unknown names at the CLI boundary). A rejected transition is a
//! verdict, not an error; see `domain::ValidationResult`.

use thiserror::Error;

/// Result type alias for case workflow operations
pub type Result<T> = std::result::Result<T, CaseWorkflowError>;

/// Main error type for case workflow operations
#[derive(Debug, Error)]
pub enum CaseWorkflowError {
    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Unknown case state or actor role name
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error with context
    #[error("{context}: {message}")]
    Wrapped { context: String, message: String },
}

impl CaseWorkflowError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            CaseWorkflowError::InvalidJson(_) => "INVALID_JSON",
            CaseWorkflowError::FileNotFound(_) => "FILE_NOT_FOUND",
            CaseWorkflowError::ConfigError(_) => "CONFIG_ERROR",
            CaseWorkflowError::InvalidArgument(_) => "INVALID_ARGUMENT",
            CaseWorkflowError::Io(_) => "IO_ERROR",
            CaseWorkflowError::Wrapped { .. } => "WRAPPED_ERROR",
        }
    }

    /// Wrap an error with additional context
    pub fn wrap<E: std::fmt::Display>(error: E, context: impl Into<String>) -> Self {
        CaseWorkflowError::Wrapped {
            context: context.into(),
            message: error.to_string(),
        }
    }
}

/// Exit code for a fault. Rejected verdicts exit with `VERDICT_REJECTED_EXIT_CODE`.
pub fn to_exit_code(_error: &CaseWorkflowError) -> i32 {
    1
}

/// Exit code used by the CLI when a transition or path is rejected.
pub const VERDICT_REJECTED_EXIT_CODE: i32 = 2;
