//! Chaining methods
//!
//! Let a comparison read left to right:
//!
//! ```rust
//! use respcheck::ValidationSession;
//!
//! let mut session = ValidationSession::from_json(r#"{"a": {"b": [{"id": 1}, {"id": 2}]}}"#)?;
//! let root = session.root()?;
//!
//! session
//!     .expect::<i64>(&root, "a.b[0].id")?
//!     .equals_path(&session, "a.b[1].id")?
//!     .validate(&mut session)?;
//!
//! assert_eq!(session.summary().failed, 1);
//! # Ok::<(), respcheck::ValidationError>(())
//! ```

use std::fmt;

use serde::de::DeserializeOwned;

use crate::builder::core::{PendingComparison, RightNotSet, RightSet};
use crate::error::Result;
use crate::report::Validations;
use crate::session::ValidationSession;

impl<T: DeserializeOwned> PendingComparison<T, RightNotSet> {
    /// Resolve the right-hand side against the session's current context.
    ///
    /// # Errors
    ///
    /// See [`ValidationSession::equals_path`].
    pub fn equals_path(
        self,
        session: &ValidationSession,
        path: &str,
    ) -> Result<PendingComparison<T, RightSet<T>>> {
        session.equals_path(self, path)
    }
}

impl<T: PartialEq + fmt::Display> PendingComparison<T, RightSet<T>> {
    /// Record this comparison's outcome in the session's results table.
    ///
    /// # Errors
    ///
    /// See [`ValidationSession::record_validation`].
    pub fn validate(self, session: &mut ValidationSession) -> Result<&Validations> {
        session.record_validation(self)
    }
}
