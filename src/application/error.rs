//! # Application Errors
//!
//! Error types for the application layer.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── Domain(DomainError)         - Business rule or arithmetic failures
//! ├── Repository(RepositoryError) - Snapshot source failures
//! └── Validation(String)          - Caller input rejected
//! ```
//!
//! # Examples
//!
//! ```
//! use execution_planner::application::error::ApplicationError;
//! use execution_planner::infrastructure::persistence::RepositoryError;
//!
//! let err = ApplicationError::validation("amount must be positive");
//! assert!(err.is_validation());
//!
//! let err: ApplicationError = RepositoryError::io("unreadable").into();
//! assert!(!err.is_validation());
//! ```

use crate::domain::errors::DomainError;
use crate::domain::value_objects::ArithmeticError;
use crate::infrastructure::persistence::RepositoryError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain error from business logic.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// The exchange snapshot could not be obtained.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Request validation failed.
    #[error("validation error: {0}")]
    Validation(String),
}

impl ApplicationError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<ArithmeticError> for ApplicationError {
    fn from(err: ArithmeticError) -> Self {
        Self::Domain(err.into())
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_error_validation() {
        let err = ApplicationError::validation("amount must be positive");
        assert!(err.to_string().contains("amount must be positive"));
        assert!(err.is_validation());
    }

    #[test]
    fn application_error_from_domain_error() {
        let domain_err = DomainError::InvalidQuantity("negative".to_string());
        let app_err: ApplicationError = domain_err.into();
        assert!(app_err.to_string().contains("negative"));
        assert!(!app_err.is_validation());
    }

    #[test]
    fn application_error_from_repository_error() {
        let repo_err = RepositoryError::source_unavailable("data/exchanges", "not found");
        let app_err: ApplicationError = repo_err.into();
        assert!(matches!(app_err, ApplicationError::Repository(_)));
        assert!(app_err.to_string().contains("data/exchanges"));
    }

    #[test]
    fn application_error_from_arithmetic_error() {
        let app_err: ApplicationError = ArithmeticError::Overflow.into();
        assert!(matches!(
            app_err,
            ApplicationError::Domain(DomainError::Arithmetic(ArithmeticError::Overflow))
        ));
    }
}
