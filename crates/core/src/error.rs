//! Error types for the task view engine.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ViewError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    /// A date string did not have the expected three-part shape
    #[error("Malformed date '{value}': expected {expected}")]
    MalformedDate { value: String, expected: &'static str },

    /// A label outside one of the closed sets (status, priority, sort field)
    #[error("Unknown {kind} '{value}'")]
    UnknownValue { kind: &'static str, value: String },

    #[error("Task {id} not found")]
    TaskNotFound { id: i64 },

    /// A field that must be filled in was left blank
    #[error("Field '{field}' cannot be empty")]
    MissingField { field: &'static str },
}

impl ViewError {
    pub fn malformed_date(value: impl Into<String>, expected: &'static str) -> Self {
        Self::MalformedDate {
            value: value.into(),
            expected,
        }
    }

    pub fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownValue {
            kind,
            value: value.into(),
        }
    }
}
