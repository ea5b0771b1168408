//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid {field} '{value}' (expected one of: {})", .expected.join(", "))]
    InvalidEnumValue {
        field: &'static str,
        value: String,
        expected: &'static [&'static str],
    },

    #[error("Student not found: {0}")]
    StudentNotFound(String),

    #[error("Course with ID {0} not found")]
    CourseNotFound(String),
}

impl DomainError {
    /// Check if this error is a failed lookup
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DomainError::StudentNotFound(_) | DomainError::CourseNotFound(_)
        )
    }
}
