//! Error types and exit codes for admit
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage or validation error (bad flags/args, invalid form fields)
//! - 3: Remote data error (catalog/config fetch or save failed)
//!
//! Every variant owns its data as strings so an error can be kept in a
//! controller's render state and copied out to the presentation layer.

use std::fmt;

use thiserror::Error;

/// Exit codes for the admit binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage or validation error (2)
    Usage = 2,
    /// Remote data error (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// A single offending field reported by form validation
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors that can occur during admit operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdmitError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("unknown category: {0} (expected: criteria, major, object, or region)")]
    UnknownCategory(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("validation failed: {}", join_issues(.issues))]
    ValidationFailed { issues: Vec<FieldIssue> },

    // Remote data errors (exit code 3)
    #[error("failed to load configuration: {reason}")]
    FetchFailed { reason: String },

    #[error("failed to save configuration: {reason}")]
    SaveFailed { reason: String },

    // Generic failures (exit code 1)
    #[error("{operation} timed out after {seconds}s")]
    Timeout { operation: String, seconds: u64 },

    #[error("cannot {action} while the form is {state}")]
    NotEditable { action: String, state: String },

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for AdmitError {
    fn from(err: serde_json::Error) -> Self {
        AdmitError::Other(format!("JSON error: {}", err))
    }
}

impl From<reqwest::Error> for AdmitError {
    fn from(err: reqwest::Error) -> Self {
        AdmitError::FailedOperation {
            operation: "reach admissions API".to_string(),
            reason: err.to_string(),
        }
    }
}

impl AdmitError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl fmt::Display) -> Self {
        AdmitError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed operation
    pub fn operation(operation: &str, reason: impl fmt::Display) -> Self {
        AdmitError::FailedOperation {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Wrap any error raised while loading a modal into `FetchFailed`
    pub fn into_fetch_failed(self) -> Self {
        match self {
            AdmitError::FetchFailed { .. } => self,
            other => AdmitError::FetchFailed {
                reason: other.to_string(),
            },
        }
    }

    /// Wrap any error raised while saving into `SaveFailed`
    pub fn into_save_failed(self) -> Self {
        match self {
            AdmitError::SaveFailed { .. } => self,
            other => AdmitError::SaveFailed {
                reason: other.to_string(),
            },
        }
    }

    /// Field issues, if this is a validation failure
    pub fn field_issues(&self) -> &[FieldIssue] {
        match self {
            AdmitError::ValidationFailed { issues } => issues,
            _ => &[],
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AdmitError::UnknownFormat(_)
            | AdmitError::UnknownCategory(_)
            | AdmitError::UsageError(_)
            | AdmitError::InvalidValue { .. }
            | AdmitError::ValidationFailed { .. } => ExitCode::Usage,

            AdmitError::FetchFailed { .. } | AdmitError::SaveFailed { .. } => ExitCode::Data,

            AdmitError::Timeout { .. }
            | AdmitError::NotEditable { .. }
            | AdmitError::FailedOperation { .. }
            | AdmitError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            AdmitError::UnknownFormat(_) => "unknown_format",
            AdmitError::UnknownCategory(_) => "unknown_category",
            AdmitError::UsageError(_) => "usage_error",
            AdmitError::InvalidValue { .. } => "invalid_value",
            AdmitError::ValidationFailed { .. } => "validation_failed",
            AdmitError::FetchFailed { .. } => "fetch_failed",
            AdmitError::SaveFailed { .. } => "save_failed",
            AdmitError::Timeout { .. } => "timeout",
            AdmitError::NotEditable { .. } => "not_editable",
            AdmitError::FailedOperation { .. } => "failed_operation",
            AdmitError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let AdmitError::ValidationFailed { issues } = self {
            error_obj["fields"] = serde_json::json!(issues);
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for admit operations
pub type Result<T> = std::result::Result<T, AdmitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_by_kind() {
        assert_eq!(
            AdmitError::FetchFailed {
                reason: "x".into()
            }
            .exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            AdmitError::SaveFailed {
                reason: "x".into()
            }
            .exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            AdmitError::ValidationFailed { issues: vec![] }.exit_code(),
            ExitCode::Usage
        );
        assert_eq!(AdmitError::Other("x".into()).exit_code(), ExitCode::Failure);
    }

    #[test]
    fn test_into_fetch_failed_keeps_existing_reason() {
        let err = AdmitError::FetchFailed {
            reason: "401".into(),
        };
        assert_eq!(err.clone().into_fetch_failed(), err);

        let wrapped = AdmitError::operation("reach admissions API", "refused").into_fetch_failed();
        assert_eq!(
            wrapped,
            AdmitError::FetchFailed {
                reason: "failed to reach admissions API: refused".into()
            }
        );
    }

    #[test]
    fn test_validation_message_lists_fields() {
        let err = AdmitError::ValidationFailed {
            issues: vec![
                FieldIssue::new("name", "is required"),
                FieldIssue::new("end_date", "must not be earlier than start date"),
            ],
        };
        assert_eq!(
            err.to_string(),
            "validation failed: name: is required; end_date: must not be earlier than start date"
        );
    }

    #[test]
    fn test_to_json_envelope() {
        let err = AdmitError::ValidationFailed {
            issues: vec![FieldIssue::new("year_id", "is required")],
        };
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 2);
        assert_eq!(json["error"]["type"], "validation_failed");
        assert_eq!(json["error"]["fields"][0]["field"], "year_id");
    }
}
