//! Validation outcomes
//!
//! The results table is the only artifact a session produces. It maps a
//! validation key (a path string) to the outcome recorded under it.

use serde::Serialize;

/// Message recorded when the expected (left) side does not resolve
pub const EXPECTED_NOT_FOUND: &str = "Expected value not found";

/// Message recorded when the compared (right) side does not resolve
pub const EQUAL_NOT_FOUND: &str = "Equal value not found";

/// Outcome of a single comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ValidationStatus {
    Pass,
    Fail,
    /// One side of the comparison did not resolve to a value
    Unresolved,
}

impl ValidationStatus {
    #[inline]
    #[must_use]
    pub fn is_pass(self) -> bool {
        self == ValidationStatus::Pass
    }

    #[inline]
    #[must_use]
    pub fn is_unresolved(self) -> bool {
        self == ValidationStatus::Unresolved
    }
}

/// Recorded comparison outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationRecord {
    pub status: ValidationStatus,
    pub message: String,
}

impl ValidationRecord {
    #[must_use]
    pub fn new(status: ValidationStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

/// Results table keyed by validation key; last write wins
pub type Validations = hashbrown::HashMap<String, ValidationRecord>;

/// Outcome counts over a results table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ValidationSummary {
    pub passed: usize,
    pub failed: usize,
    pub unresolved: usize,
}

impl ValidationSummary {
    #[must_use]
    pub fn from_validations(validations: &Validations) -> Self {
        validations
            .values()
            .fold(Self::default(), |mut summary, record| {
                match record.status {
                    ValidationStatus::Pass => summary.passed += 1,
                    ValidationStatus::Fail => summary.failed += 1,
                    ValidationStatus::Unresolved => summary.unresolved += 1,
                }
                summary
            })
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.unresolved
    }

    /// True when every recorded comparison passed (vacuously true when empty)
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.unresolved == 0
    }
}

/// Shorten a key to its last `components` top-level path components.
///
/// Dots inside bracketed indexers do not count as separators. Keys built
/// from object properties whose names contain `.` are split like any other
/// dotted path.
#[must_use]
pub fn display_path(path: &str, components: usize) -> String {
    let parts = respcheck_path::split_components(path);
    let start = parts.len().saturating_sub(components);
    parts[start..].join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_path_keeps_trailing_components() {
        assert_eq!(display_path("a.b[0].id", 2), "b[0].id");
        assert_eq!(display_path("id", 2), "id");
        assert_eq!(display_path("a.b[@.id==2].name", 2), "b[@.id==2].name");
        assert_eq!(display_path("a.b.c.d", 3), "b.c.d");
        assert_eq!(
            display_path("root.people[@.name==O'Brien].age", 2),
            "people[@.name==O'Brien].age"
        );
    }

    #[test]
    fn summary_counts() {
        let mut validations = Validations::new();
        validations.insert("a".into(), ValidationRecord::new(ValidationStatus::Pass, "ok"));
        validations.insert("b".into(), ValidationRecord::new(ValidationStatus::Fail, "no"));
        validations.insert(
            "c".into(),
            ValidationRecord::new(ValidationStatus::Unresolved, EXPECTED_NOT_FOUND),
        );

        let summary = ValidationSummary::from_validations(&validations);
        assert_eq!(
            summary,
            ValidationSummary {
                passed: 1,
                failed: 1,
                unresolved: 1
            }
        );
        assert_eq!(summary.total(), 3);
        assert!(!summary.all_passed());
        assert!(ValidationSummary::default().all_passed());
    }
}
