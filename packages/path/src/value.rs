//! Typed access to JSON nodes
//!
//! Safe accessors over `serde_json::Value` that return optional results
//! instead of assuming a node's shape.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{JsonPathError, JsonPathResult};
use crate::JsonPath;

/// Render a node the way predicates compare it: strings without quotes,
/// everything else as compact JSON.
#[must_use]
pub fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Convert a resolved node into `T`. JSON null counts as no value.
pub(crate) fn convert<T: DeserializeOwned>(value: &Value, path: &str) -> JsonPathResult<Option<T>> {
    if value.is_null() {
        return Ok(None);
    }
    serde_json::from_value(value.clone())
        .map(Some)
        .map_err(|e| JsonPathError::conversion_error(path, std::any::type_name::<T>(), e))
}

/// Extension methods for navigating and converting JSON nodes
pub trait JsonNodeExt {
    /// Predicate rendering of this node
    fn render(&self) -> String;

    /// Convert this node into `T`; `Ok(None)` for JSON null
    ///
    /// # Errors
    ///
    /// Returns a conversion error if the node is not representable as `T`.
    fn as_scalar<T: DeserializeOwned>(&self) -> JsonPathResult<Option<T>>;

    /// Resolve a path expression relative to this node
    fn at(&self, path: &str) -> Option<&Value>;

    /// Resolve a path expression and convert the result into `T`
    ///
    /// # Errors
    ///
    /// Returns a conversion error if the resolved node is not representable as `T`.
    fn get_as<T: DeserializeOwned>(&self, path: &str) -> JsonPathResult<Option<T>>;
}

impl JsonNodeExt for Value {
    fn render(&self) -> String {
        render(self)
    }

    fn as_scalar<T: DeserializeOwned>(&self) -> JsonPathResult<Option<T>> {
        convert(self, "")
    }

    fn at(&self, path: &str) -> Option<&Value> {
        JsonPath::parse(path).resolve(self)
    }

    fn get_as<T: DeserializeOwned>(&self, path: &str) -> JsonPathResult<Option<T>> {
        JsonPath::parse(path).get(self)
    }
}
