//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Pricing is a pure computation, so the only failure is a caller handing in
/// an input outside the validated domain. There is no transient fault to
/// retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An input was outside its allowed range (e.g. a negative price).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// The human-readable message naming the violated constraint.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArgument(msg) => msg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_display_includes_message() {
        let err = DomainError::invalid_argument("base price cannot be negative");
        assert_eq!(err.to_string(), "invalid argument: base price cannot be negative");
        assert_eq!(err.message(), "base price cannot be negative");
    }
}
