//! Respcheck path resolver
//!
//! A miniature JSONPath-like query language over `serde_json::Value` trees.
//! Paths are dotted property chains where any segment may carry a
//! bracketed indexer:
//!
//! ```text
//! path        ::= segment ('.' segment)*
//! segment     ::= propertyName ('[' indexer ']')?
//! indexer     ::= integer | predicate
//! predicate   ::= '@.' nestedPath ('==' | '!=') literal
//! literal     ::= quoted-string | bare-token
//! ```
//!
//! Resolution never fails: anything that cannot be followed yields `None`.
//!
//! # Examples
//!
//! ```rust
//! use respcheck_path::JsonPath;
//! use serde_json::json;
//!
//! let doc = json!({"a": {"b": [{"id": 1, "name": "x"}, {"id": 2, "name": "y"}]}});
//!
//! let name = JsonPath::parse("a.b[@.id==2].name").resolve(&doc);
//! assert_eq!(name, Some(&json!("y")));
//!
//! assert_eq!(JsonPath::parse("a.b[5]").resolve(&doc), None);
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod ast;
pub mod error;
mod evaluator;
pub mod location;
pub mod parser;
pub mod tokenizer;
pub mod value;

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde_json::Value;

pub use self::{
    ast::{ComparisonOp, Indexer, PathSegment, Predicate},
    error::{ErrorKind, JsonPathError, JsonPathResult},
    location::{Location, join_path},
    parser::PathParser,
    tokenizer::split_components,
    value::{JsonNodeExt, render},
};

/// A parsed path expression, reusable across documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonPath {
    expression: String,
    segments: Vec<PathSegment>,
}

impl JsonPath {
    /// Parse a path expression. Never fails; see [`Indexer::Malformed`].
    #[must_use]
    pub fn parse(expression: &str) -> Self {
        Self {
            expression: expression.to_string(),
            segments: PathParser::new(expression).parse(),
        }
    }

    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// A blank expression selects nothing
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.expression.trim().is_empty()
    }

    /// Resolve against `node`, returning the selected node if any
    #[must_use]
    pub fn resolve<'v>(&self, node: &'v Value) -> Option<&'v Value> {
        if self.is_blank() {
            return None;
        }
        evaluator::walk(node, &self.segments, None)
    }

    /// Resolve against `node`, returning the selected node with its
    /// canonical path relative to `node`
    #[must_use]
    pub fn locate(&self, node: &Value) -> Option<Location> {
        if self.is_blank() {
            return None;
        }
        let mut canonical = String::new();
        let value = evaluator::walk(node, &self.segments, Some(&mut canonical))?;
        Some(Location::new(canonical, value.clone()))
    }

    /// Resolve against a located node; the result's path is qualified with
    /// the node's own path
    #[must_use]
    pub fn locate_from(&self, node: &Location) -> Option<Location> {
        let relative = self.locate(node.value())?;
        let path = join_path(node.path(), relative.path());
        Some(Location::new(path, relative.into_value()))
    }

    /// Resolve and convert the selected node into `T`.
    ///
    /// Returns `Ok(None)` when nothing is selected or the node is JSON null.
    ///
    /// # Errors
    ///
    /// Returns a `Conversion` error when the node is not representable as `T`.
    pub fn get<T: DeserializeOwned>(&self, node: &Value) -> JsonPathResult<Option<T>> {
        match self.resolve(node) {
            Some(found) => value::convert(found, &self.expression),
            None => Ok(None),
        }
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expression)
    }
}

impl FromStr for JsonPath {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// Resolve `path` against `node`
#[must_use]
pub fn resolve<'v>(node: &'v Value, path: &str) -> Option<&'v Value> {
    JsonPath::parse(path).resolve(node)
}

/// Resolve `path` against `node`, keeping the canonical path
#[must_use]
pub fn locate(node: &Value, path: &str) -> Option<Location> {
    JsonPath::parse(path).locate(node)
}

/// Resolve `path` against `node` and convert the result into `T`
///
/// # Errors
///
/// Returns a `Conversion` error when the node is not representable as `T`.
pub fn get<T: DeserializeOwned>(node: &Value, path: &str) -> JsonPathResult<Option<T>> {
    JsonPath::parse(path).get(node)
}

/// Parse JSON text into a document tree
///
/// # Errors
///
/// Returns an `InvalidJson` error when the text is not valid JSON.
pub fn parse_document(json: &str) -> JsonPathResult<Value> {
    serde_json::from_str(json).map_err(|e| JsonPathError::json_parse_error(&e))
}
