//! Validation session error types
//!
//! These are structural failures that abort the call in progress. A
//! comparison whose side cannot be resolved is not an error; it is recorded
//! as an `Unresolved` outcome instead.

use respcheck_path::JsonPathError;

use crate::config::ConfigurationError;

/// Result type for validation session operations
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Validation session errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid JSON, could not set root node: {0}")]
    InvalidInput(String),

    #[error("Validation session has no root node; initialize it with `from_json` or `from_node` first")]
    InvalidState,

    #[error("No node found at path: {path}")]
    NotFound { path: String },

    #[error(transparent)]
    Path(#[from] JsonPathError),

    #[error(transparent)]
    Config(#[from] ConfigurationError),
}

impl ValidationError {
    /// Create a new `InvalidInput` error
    #[must_use]
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new `NotFound` error
    #[must_use]
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    #[must_use]
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState)
    }

    /// True when a resolved value could not be converted to the requested type
    #[must_use]
    pub fn is_conversion(&self) -> bool {
        matches!(self, Self::Path(e) if e.is_conversion())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            ValidationError::not_found("a.b[3]").to_string(),
            "No node found at path: a.b[3]"
        );
        assert!(ValidationError::InvalidState.is_invalid_state());
    }

    #[test]
    fn wraps_conversion_errors() {
        let err: ValidationError =
            JsonPathError::conversion_error("a", "i64", "invalid type").into();
        assert!(err.is_conversion());
        assert!(!err.is_not_found());
    }
}
