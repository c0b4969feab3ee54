//! Core `PendingComparison` structures
//!
//! A comparison is built in two steps: `expect` captures the left side,
//! `equals_path` captures the right side. The type parameter `S` tracks
//! which step the builder is at, so only a fully paired comparison can be
//! recorded.

use std::fmt;

use crate::report::{
    EQUAL_NOT_FOUND, EXPECTED_NOT_FOUND, ValidationRecord, ValidationStatus, display_path,
};

/// State marker indicating the right-hand side has not been resolved yet
#[derive(Debug, Clone, Copy)]
pub struct RightNotSet;

/// State marker holding the resolved right-hand side
#[derive(Debug, Clone)]
pub struct RightSet<T> {
    /// Key of the right-hand side (current context path joined with the
    /// requested path)
    pub key: String,
    /// Resolved value, `None` when the path selected nothing
    pub value: Option<T>,
}

/// Comparison descriptor under construction
///
/// Type parameter `S` tracks the build state:
/// - `RightNotSet`: left side captured, `equals_path` available
/// - `RightSet<T>`: both sides captured, `validate` available
#[derive(Debug, Clone)]
#[must_use = "a comparison does nothing until it is validated"]
pub struct PendingComparison<T, S = RightNotSet> {
    pub(crate) left_key: String,
    pub(crate) left_value: Option<T>,
    pub(crate) state: S,
}

impl<T, S> PendingComparison<T, S> {
    #[must_use]
    pub fn left_key(&self) -> &str {
        &self.left_key
    }

    #[must_use]
    pub fn left_value(&self) -> Option<&T> {
        self.left_value.as_ref()
    }
}

impl<T> PendingComparison<T, RightNotSet> {
    pub(crate) fn new(left_key: String, left_value: Option<T>) -> Self {
        Self {
            left_key,
            left_value,
            state: RightNotSet,
        }
    }

    pub(crate) fn with_right(self, key: String, value: Option<T>) -> PendingComparison<T, RightSet<T>> {
        PendingComparison {
            left_key: self.left_key,
            left_value: self.left_value,
            state: RightSet { key, value },
        }
    }
}

impl<T> PendingComparison<T, RightSet<T>> {
    #[must_use]
    pub fn right_key(&self) -> &str {
        &self.state.key
    }

    #[must_use]
    pub fn right_value(&self) -> Option<&T> {
        self.state.value.as_ref()
    }
}

impl<T> PendingComparison<T, RightSet<T>>
where
    T: PartialEq + fmt::Display,
{
    /// Decide the outcome and the key it is recorded under.
    ///
    /// A missing left side is keyed by the left key, a missing right side by
    /// the right key; resolved comparisons are always keyed by the left key.
    pub(crate) fn outcome(self, display_components: usize) -> (String, ValidationRecord) {
        let Some(left) = self.left_value else {
            return (
                self.left_key,
                ValidationRecord::new(ValidationStatus::Unresolved, EXPECTED_NOT_FOUND),
            );
        };
        let Some(right) = self.state.value else {
            return (
                self.state.key,
                ValidationRecord::new(ValidationStatus::Unresolved, EQUAL_NOT_FOUND),
            );
        };

        let left_path = display_path(&self.left_key, display_components);
        let right_path = display_path(&self.state.key, display_components);
        let record = if left == right {
            ValidationRecord::new(
                ValidationStatus::Pass,
                format!("Expected {left_path} ({left}) is equal to {right_path} ({right})"),
            )
        } else {
            ValidationRecord::new(
                ValidationStatus::Fail,
                format!("Expected {left_path} ({left}) is not equal to {right_path} ({right})"),
            )
        };
        (self.left_key, record)
    }
}
