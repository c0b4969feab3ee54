//! Validation session
//!
//! A session owns a root document, a current navigation context and the
//! results table. Navigation and iteration move the current context;
//! comparisons resolve their right-hand side against it at call time and
//! record an outcome keyed by path.
//!
//! ```text
//! Uninitialized --initialize--> Rooted --navigate/iterate/compare--> Rooted
//!       ^                                                              |
//!       +----------------------------reset-----------------------------+
//! ```
//!
//! Each session is an independent value; separate sessions can be used from
//! separate threads without coordination. The root and current nodes are
//! shared handles, so asking for them repeatedly does not copy the document.

use std::fmt;
use std::sync::Arc;

use respcheck_path::{JsonPath, Location};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::builder::{PendingComparison, RightNotSet, RightSet};
use crate::config::{SessionConfig, Validator};
use crate::error::{Result, ValidationError};
use crate::report::{ValidationStatus, ValidationSummary, Validations};

/// Stateful validation context over one JSON document
#[derive(Debug, Clone, Default)]
pub struct ValidationSession {
    root: Option<Arc<Location>>,
    current: Option<Arc<Location>>,
    validations: Validations,
    config: SessionConfig,
}

impl ValidationSession {
    /// Create an uninitialized session with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an uninitialized session with a custom configuration
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Config` if the configuration is invalid.
    pub fn with_config(config: SessionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// Create a session rooted at the parsed `json` document
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidInput` if `json` is not a JSON
    /// document or is the literal `null`.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut session = Self::new();
        session.initialize(json)?;
        Ok(session)
    }

    /// Create a session rooted at `node`
    #[must_use]
    pub fn from_node(node: Value) -> Self {
        let mut session = Self::new();
        session.initialize_with(node);
        session
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.root.is_some()
    }

    /// Parse `json` and adopt it as the root; the current context becomes
    /// the root and the results table is cleared.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidInput` if `json` is not a JSON
    /// document or is the literal `null`. The session is left untouched.
    pub fn initialize(&mut self, json: &str) -> Result<Arc<Location>> {
        let document = respcheck_path::parse_document(json)
            .map_err(|e| ValidationError::invalid_input(e.message))?;
        if document.is_null() {
            return Err(ValidationError::invalid_input("document is null"));
        }
        Ok(self.initialize_with(document))
    }

    /// Adopt `node` as the root; the current context becomes the root and
    /// the results table is cleared.
    pub fn initialize_with(&mut self, node: Value) -> Arc<Location> {
        let root = Arc::new(Location::root(node));
        tracing::debug!(kind = value_kind(root.value()), "validation session initialized");
        self.current = Some(Arc::clone(&root));
        self.root = Some(Arc::clone(&root));
        self.validations.clear();
        root
    }

    /// Shared handle to the root document
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidState` before initialization.
    pub fn root(&self) -> Result<Arc<Location>> {
        self.ensure_rooted().map(Arc::clone)
    }

    /// The current navigation context
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidState` before initialization.
    pub fn current(&self) -> Result<&Location> {
        self.ensure_rooted()?;
        self.current.as_deref().ok_or(ValidationError::InvalidState)
    }

    /// Resolve `path` against `node` and make the result the current context.
    ///
    /// `node` is expected to come from this session: its root, a location
    /// returned by navigation, or an element handed to an `iterate_each`
    /// visitor. The session does not check where a `Location` came from, so
    /// navigating from a node of another document moves the current context
    /// outside this session's root.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidState` before initialization and
    /// `ValidationError::NotFound` when the path selects nothing or selects
    /// JSON null. On error the current context is unchanged.
    pub fn navigate_into(&mut self, node: &Location, path: &str) -> Result<Arc<Location>> {
        self.ensure_rooted()?;
        let found = node
            .locate(path)
            .filter(|location| !location.value().is_null())
            .ok_or_else(|| ValidationError::not_found(node.qualify(path)))?;

        tracing::debug!(path = %found.path(), "navigated into node");
        let found = Arc::new(found);
        self.current = Some(Arc::clone(&found));
        Ok(found)
    }

    /// Visit every non-null element of an array, or every non-null property
    /// value of an object in insertion order. The current context is set to
    /// each element just before `visitor` runs. Scalars have no elements.
    ///
    /// Nested iterations share the same current context: after an inner
    /// iteration returns, the context is wherever the inner one left it.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidState` before initialization, or the
    /// first error returned by `visitor`, which stops the iteration.
    pub fn iterate_each<F>(&mut self, node: &Location, mut visitor: F) -> Result<()>
    where
        F: FnMut(&mut Self, &Location) -> Result<()>,
    {
        self.ensure_rooted()?;
        match node.value() {
            Value::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    if item.is_null() {
                        continue;
                    }
                    self.visit(node.element(index, item.clone()), &mut visitor)?;
                }
            }
            Value::Object(map) => {
                for (name, item) in map {
                    if item.is_null() {
                        continue;
                    }
                    self.visit(node.property(name, item.clone()), &mut visitor)?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn visit<F>(&mut self, element: Location, visitor: &mut F) -> Result<()>
    where
        F: FnMut(&mut Self, &Location) -> Result<()>,
    {
        let element = Arc::new(element);
        self.current = Some(Arc::clone(&element));
        visitor(self, element.as_ref())
    }

    /// Resolve `path` against `node` and convert the result into `T`
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidState` before initialization, or a
    /// conversion error when the resolved value is not representable as `T`.
    pub fn get<T: DeserializeOwned>(&self, node: &Location, path: &str) -> Result<Option<T>> {
        self.ensure_rooted()?;
        Ok(JsonPath::parse(path).get(node.value())?)
    }

    /// Capture the left-hand side of a comparison: the value at `path`
    /// relative to `node`, keyed by `node`'s path joined with `path`.
    /// A missing value is carried forward, not reported.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidState` before initialization, or a
    /// conversion error when the resolved value is not representable as `T`.
    pub fn expect<T: DeserializeOwned>(
        &self,
        node: &Location,
        path: &str,
    ) -> Result<PendingComparison<T>> {
        let value = self.get(node, path)?;
        Ok(PendingComparison::new(node.qualify(path), value))
    }

    /// Capture the right-hand side of a comparison, resolved against the
    /// current context as it is now.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidState` before initialization, or a
    /// conversion error when the resolved value is not representable as `T`.
    pub fn equals_path<T: DeserializeOwned>(
        &self,
        pending: PendingComparison<T, RightNotSet>,
        path: &str,
    ) -> Result<PendingComparison<T, RightSet<T>>> {
        let current = self.current()?;
        let value = JsonPath::parse(path).get(current.value())?;
        Ok(pending.with_right(current.qualify(path), value))
    }

    /// Record the comparison's outcome, replacing any earlier outcome under
    /// the same key.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidState` before initialization.
    pub fn record_validation<T: PartialEq + fmt::Display>(
        &mut self,
        comparison: PendingComparison<T, RightSet<T>>,
    ) -> Result<&Validations> {
        self.ensure_rooted()?;
        let (key, record) = comparison.outcome(self.config.display_components);

        if self.config.log_outcomes {
            match record.status {
                ValidationStatus::Unresolved => {
                    tracing::warn!(key = %key, message = %record.message, "validation unresolved");
                }
                status => {
                    tracing::debug!(key = %key, ?status, message = %record.message, "validation recorded");
                }
            }
        }

        self.validations.insert(key, record);
        Ok(&self.validations)
    }

    /// The results table as recorded so far
    #[must_use]
    pub fn validations(&self) -> &Validations {
        &self.validations
    }

    #[must_use]
    pub fn summary(&self) -> ValidationSummary {
        ValidationSummary::from_validations(&self.validations)
    }

    /// Return to the uninitialized state, dropping root, context and results
    pub fn reset(&mut self) {
        tracing::debug!(recorded = self.validations.len(), "validation session reset");
        self.root = None;
        self.current = None;
        self.validations.clear();
    }

    /// Hand over the results table and reset the session
    pub fn take_validations(&mut self) -> Validations {
        let validations = std::mem::take(&mut self.validations);
        self.reset();
        validations
    }

    fn ensure_rooted(&self) -> Result<&Arc<Location>> {
        self.root.as_ref().ok_or(ValidationError::InvalidState)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
