//! Path Resolution Error Types
//!
//! Walking a path never fails: malformed indexers, out-of-range indices and
//! missing properties all degrade to absence. Errors only arise at the edges,
//! when JSON text has to be parsed or a resolved node has to be converted
//! into a caller's type.

use std::error::Error;
use std::fmt;

/// Path resolution error kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid JSON syntax
    InvalidJson,
    /// Resolved value is not representable as the requested type
    Conversion,
}

/// Main path resolution error type
#[derive(Debug, Clone)]
pub struct JsonPathError {
    pub kind: ErrorKind,
    pub message: String,
}

impl fmt::Display for JsonPathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JSON Path Error: {}", self.message)
    }
}

impl Error for JsonPathError {}

/// Result type for path resolution operations
pub type JsonPathResult<T> = Result<T, JsonPathError>;

impl JsonPathError {
    #[must_use]
    pub fn new(kind: ErrorKind, message: String) -> Self {
        Self { kind, message }
    }

    #[must_use]
    pub fn invalid_json(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidJson, msg.into())
    }

    #[must_use]
    pub fn conversion(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conversion, msg.into())
    }

    /// Creates a conversion error for a value found at `path`
    ///
    /// # Arguments
    /// * `path` - Path expression the value was resolved from (may be empty)
    /// * `target_type` - Name of the requested Rust type
    /// * `reason` - Serde error details
    pub fn conversion_error(
        path: &str,
        target_type: &'static str,
        reason: impl fmt::Display,
    ) -> Self {
        let message = if path.is_empty() {
            format!("cannot convert value to {target_type}: {reason}")
        } else {
            format!("cannot convert value at '{path}' to {target_type}: {reason}")
        };
        Self::conversion(message)
    }

    /// Creates a JSON parsing error from the underlying parser failure
    #[must_use]
    pub fn json_parse_error(error: &serde_json::Error) -> Self {
        Self::invalid_json(format!(
            "JSON parse error: {} at line {} column {}",
            error,
            error.line(),
            error.column()
        ))
    }

    #[must_use]
    pub fn is_conversion(&self) -> bool {
        self.kind == ErrorKind::Conversion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_error_names_path_and_type() {
        let err = JsonPathError::conversion_error("a.b", "i64", "invalid type: string");
        assert!(err.is_conversion());
        assert_eq!(
            err.to_string(),
            "JSON Path Error: cannot convert value at 'a.b' to i64: invalid type: string"
        );
    }

    #[test]
    fn json_parse_error_reports_position() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{\"a\":").unwrap_err();
        let err = JsonPathError::json_parse_error(&parse_err);
        assert_eq!(err.kind, ErrorKind::InvalidJson);
        assert!(err.message.contains("line 1"));
    }
}
