//! Respcheck Public API
//!
//! Fluent validation of JSON documents. Navigate with path expressions,
//! compare the values two paths resolve to, and collect a table of keyed
//! pass/fail/unresolved outcomes.
//!
//! ```rust
//! use respcheck::{ValidationSession, ValidationStatus};
//!
//! let mut session = ValidationSession::from_json(
//!     r#"{"expected": {"total": 3}, "actual": [{"total": 3}, {"total": 4}]}"#,
//! )?;
//! let root = session.root()?;
//! let actual = session.navigate_into(&root, "actual")?;
//!
//! session.iterate_each(&actual, |session, _item| {
//!     session
//!         .expect::<i64>(&root, "expected.total")?
//!         .equals_path(session, "total")?
//!         .validate(session)?;
//!     Ok(())
//! })?;
//!
//! // Both comparisons share the left key, so the second one wins.
//! let record = &session.validations()["expected.total"];
//! assert_eq!(record.status, ValidationStatus::Fail);
//! # Ok::<(), respcheck::ValidationError>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;
pub mod config;
pub mod error;
pub mod report;
pub mod session;

// Re-export all public API components
pub use builder::{PendingComparison, RightNotSet, RightSet};
pub use config::{ConfigurationError, SessionConfig, Validator};
pub use error::{Result, ValidationError};
pub use report::{
    EQUAL_NOT_FOUND, EXPECTED_NOT_FOUND, ValidationRecord, ValidationStatus, ValidationSummary,
    Validations, display_path,
};
pub use session::ValidationSession;

// Re-export important types from the path package
pub use respcheck_path::{JsonNodeExt, JsonPath, JsonPathError, Location};

/// Create a session rooted at the parsed `json` document
///
/// Shorthand for `ValidationSession::from_json`
///
/// # Errors
///
/// Returns `ValidationError::InvalidInput` if `json` is not a JSON document.
pub fn from_json(json: &str) -> Result<ValidationSession> {
    ValidationSession::from_json(json)
}

/// Create a session rooted at `node`
///
/// Shorthand for `ValidationSession::from_node`
#[must_use]
pub fn from_node(node: serde_json::Value) -> ValidationSession {
    ValidationSession::from_node(node)
}
