//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (input
/// validation, malformed identifiers). Storage concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// User-supplied input failed validation. The message is user-facing.
    #[error("{0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// The user-facing message of a validation failure, if this is one.
    pub fn validation_message(&self) -> Option<&str> {
        match self {
            Self::Validation(msg) => Some(msg),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_displays_bare_message() {
        let err = DomainError::validation("quantity must be at least 1");
        assert_eq!(err.to_string(), "quantity must be at least 1");
        assert_eq!(err.validation_message(), Some("quantity must be at least 1"));
    }

    #[test]
    fn invalid_id_is_not_a_validation_message() {
        let err = DomainError::invalid_id("empty");
        assert_eq!(err.to_string(), "invalid identifier: empty");
        assert_eq!(err.validation_message(), None);
    }
}
