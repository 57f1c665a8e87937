//! Error types and exit codes for edgeline
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing edge list, malformed edge line)

use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type used throughout edgeline
pub type Result<T> = std::result::Result<T, EdgelineError>;

/// Exit codes for the edgeline CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing or malformed edge list (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during edgeline operations
#[derive(Error, Debug)]
pub enum EdgelineError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("edge list not found: {path:?}")]
    EdgeListNotFound { path: PathBuf },

    #[error("invalid edge line {line}: {reason}")]
    InvalidEdgeLine { line: usize, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl EdgelineError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            EdgelineError::UnknownFormat(_) | EdgelineError::UsageError(_) => ExitCode::Usage,

            EdgelineError::EdgeListNotFound { .. } | EdgelineError::InvalidEdgeLine { .. } => {
                ExitCode::Data
            }

            EdgelineError::Io(_) | EdgelineError::Json(_) | EdgelineError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Stable machine-readable error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            EdgelineError::UnknownFormat(_) => "unknown_format",
            EdgelineError::UsageError(_) => "usage_error",
            EdgelineError::EdgeListNotFound { .. } => "edge_list_not_found",
            EdgelineError::InvalidEdgeLine { .. } => "invalid_edge_line",
            EdgelineError::Io(_) => "io_error",
            EdgelineError::Json(_) => "json_error",
            EdgelineError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            EdgelineError::UnknownFormat("xml".to_string()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            EdgelineError::InvalidEdgeLine {
                line: 3,
                reason: "bad weight".to_string(),
            }
            .exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            EdgelineError::Other("boom".to_string()).exit_code(),
            ExitCode::Failure
        );
    }

    #[test]
    fn test_to_json_envelope() {
        let err = EdgelineError::EdgeListNotFound {
            path: PathBuf::from("missing.csv"),
        };
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "edge_list_not_found");
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("missing.csv"));
    }
}
