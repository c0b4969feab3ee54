//! Located JSON nodes
//!
//! A [`Location`] pairs a node with the canonical path it was reached by,
//! so keys derived from it name the node's full position in the document.

use serde::Serialize;
use serde_json::Value;

use crate::JsonPath;

/// A JSON node together with its canonical path from the document root.
///
/// The root itself has the empty path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    path: String,
    value: Value,
}

impl Location {
    #[must_use]
    pub fn new(path: impl Into<String>, value: Value) -> Self {
        Self {
            path: path.into(),
            value,
        }
    }

    #[must_use]
    pub fn root(value: Value) -> Self {
        Self::new(String::new(), value)
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[inline]
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        self.value
    }

    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Qualify a relative path expression with this node's path
    #[must_use]
    pub fn qualify(&self, relative: &str) -> String {
        join_path(&self.path, relative)
    }

    /// Resolve `path` relative to this node, keeping the canonical path
    #[must_use]
    pub fn locate(&self, path: &str) -> Option<Location> {
        JsonPath::parse(path).locate_from(self)
    }

    /// Child location for an array element
    #[must_use]
    pub fn element(&self, index: usize, value: Value) -> Location {
        Location::new(format!("{}[{index}]", self.path), value)
    }

    /// Child location for an object property
    ///
    /// The name is appended verbatim. The path grammar has no escaping, so a
    /// key containing `.` or `[` (such as `"a.b"`) yields a path that reads as
    /// more than one component and does not resolve back to this node.
    #[must_use]
    pub fn property(&self, name: &str, value: Value) -> Location {
        Location::new(join_path(&self.path, name), value)
    }
}

/// Join a base path and a relative expression with `.`
///
/// An empty side contributes nothing, and a relative part starting with `[`
/// attaches directly to the base.
#[must_use]
pub fn join_path(base: &str, relative: &str) -> String {
    if base.is_empty() {
        relative.to_string()
    } else if relative.is_empty() {
        base.to_string()
    } else if relative.starts_with('[') {
        format!("{base}{relative}")
    } else {
        format!("{base}.{relative}")
    }
}
