//! Session configuration
//!
//! Controls how outcome messages are rendered and whether outcomes are
//! logged as they are recorded.

/// Number of trailing path components shown in outcome messages
pub const DEFAULT_DISPLAY_COMPONENTS: usize = 2;

/// Configuration validation result type
pub type ConfigResult<T> = std::result::Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid configuration parameter: {0}")]
    InvalidParameter(String),
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidParameter` if a parameter is
    /// outside its valid range.
    fn validate(&self) -> ConfigResult<()>;
}

/// Validation session configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Trailing path components kept when a key is shown in a message
    /// (`a.b[0].id` with 2 renders as `b[0].id`)
    pub display_components: usize,
    /// Emit a tracing event for every recorded outcome
    pub log_outcomes: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            display_components: DEFAULT_DISPLAY_COMPONENTS,
            log_outcomes: true,
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn display_components(mut self, components: usize) -> Self {
        self.display_components = components;
        self
    }

    #[must_use]
    pub fn log_outcomes(mut self, enabled: bool) -> Self {
        self.log_outcomes = enabled;
        self
    }
}

impl Validator for SessionConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.display_components == 0 {
            return Err(ConfigurationError::InvalidParameter(
                "display_components must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SessionConfig::default();
        assert_eq!(config.display_components, 2);
        assert!(config.log_outcomes);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_display_components_rejected() {
        let config = SessionConfig::new().display_components(0);
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid configuration parameter: display_components must be at least 1"
        );
    }
}
