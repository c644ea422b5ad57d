//! Error types and exit codes for gradelite
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, too many grades)
//! - 3: Data error (invalid selection, no credit weight)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid selection, zero credits (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during gradelite operations
#[derive(Error, Debug)]
pub enum GradeliteError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("invalid selection: unknown {level} '{value}' (run `gradelite catalog` to list valid selections)")]
    InvalidSelection { level: String, value: String },

    #[error("selection has no credit weight; choose a program year, semester and branch first")]
    NoCredits,

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl GradeliteError {
    /// Create an error for a catalog miss at the given nesting level
    pub fn invalid_selection(level: &str, value: impl std::fmt::Display) -> Self {
        GradeliteError::InvalidSelection {
            level: level.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GradeliteError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed operation
    pub fn failed(operation: &str, reason: impl std::fmt::Display) -> Self {
        GradeliteError::FailedOperation {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GradeliteError::UnknownFormat(_)
            | GradeliteError::DuplicateFormat
            | GradeliteError::UsageError(_)
            | GradeliteError::InvalidValue { .. } => ExitCode::Usage,

            GradeliteError::InvalidSelection { .. } | GradeliteError::NoCredits => ExitCode::Data,

            GradeliteError::Io(_)
            | GradeliteError::Json(_)
            | GradeliteError::Toml(_)
            | GradeliteError::FailedOperation { .. }
            | GradeliteError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GradeliteError::UnknownFormat(_) => "unknown_format",
            GradeliteError::DuplicateFormat => "duplicate_format",
            GradeliteError::UsageError(_) => "usage_error",
            GradeliteError::InvalidValue { .. } => "invalid_value",
            GradeliteError::InvalidSelection { .. } => "invalid_selection",
            GradeliteError::NoCredits => "no_credits",
            GradeliteError::Io(_) => "io_error",
            GradeliteError::Json(_) => "json_error",
            GradeliteError::Toml(_) => "toml_error",
            GradeliteError::FailedOperation { .. } => "failed_operation",
            GradeliteError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for gradelite operations
pub type Result<T> = std::result::Result<T, GradeliteError>;
