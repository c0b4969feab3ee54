//! Path Expression Syntax Tree
//!
//! Typed representation of a parsed path: an ordered list of segments, each
//! a property name with an optional bracketed indexer.

use std::fmt;

/// One `.`-separated step of a path expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegment {
    /// Object property to dereference. Empty means the indexer applies to
    /// the current node directly.
    pub property: String,
    /// Optional bracketed indexer following the property name
    pub indexer: Option<Indexer>,
}

impl PathSegment {
    #[must_use]
    pub fn property(name: impl Into<String>) -> Self {
        Self {
            property: name.into(),
            indexer: None,
        }
    }

    #[must_use]
    pub fn with_indexer(mut self, indexer: Indexer) -> Self {
        self.indexer = Some(indexer);
        self
    }
}

/// Bracketed array indexer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Indexer {
    /// Non-negative array index (`[3]`)
    Index(usize),
    /// First element matching an equality predicate (`[@.id==2]`)
    Predicate(Predicate),
    /// Unrecognized bracket content. Kept verbatim so the failure surfaces
    /// at evaluation time, where it resolves to nothing.
    Malformed(String),
}

/// Equality predicate selecting the first matching array element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    /// Nested path as written after `@.`
    pub property: String,
    /// Parsed form of `property`, resolved against each element
    pub segments: Vec<PathSegment>,
    pub operator: ComparisonOp,
    /// Literal with surrounding quotes stripped
    pub literal: String,
}

/// Predicate comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    /// Equality comparison (==)
    Equal,
    /// Inequality comparison (!=)
    NotEqual,
}

impl ComparisonOp {
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ComparisonOp::Equal => "==",
            ComparisonOp::NotEqual => "!=",
        }
    }

    /// Compare a rendered element value against the predicate literal
    #[inline]
    #[must_use]
    pub fn matches(self, rendered: &str, literal: &str) -> bool {
        match self {
            ComparisonOp::Equal => rendered == literal,
            ComparisonOp::NotEqual => rendered != literal,
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Indexer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Indexer::Index(index) => write!(f, "[{index}]"),
            Indexer::Predicate(predicate) => write!(
                f,
                "[@.{}{}\"{}\"]",
                predicate.property, predicate.operator, predicate.literal
            ),
            Indexer::Malformed(raw) => write!(f, "[{raw}]"),
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.property)?;
        if let Some(indexer) = &self.indexer {
            write!(f, "{indexer}")?;
        }
        Ok(())
    }
}
