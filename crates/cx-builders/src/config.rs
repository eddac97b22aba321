//! Builder configuration

use cx_types::{DEFAULT_PRIORITY, DEFAULT_REPEAT_COUNT};
use serde::Deserialize;

use crate::error::BuilderError;

/// Defaults applied by [`IntentBuilder`](crate::IntentBuilder) when a caller
/// does not supply a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Priority of newly created intents
    pub default_priority: i32,
    /// Repeat count of newly added training phrases
    pub default_repeat_count: u32,
}

impl BuilderConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With default priority
    #[inline]
    #[must_use]
    pub fn with_default_priority(mut self, priority: i32) -> Self {
        self.default_priority = priority;
        self
    }

    /// With default repeat count
    #[inline]
    #[must_use]
    pub fn with_default_repeat_count(mut self, repeat_count: u32) -> Self {
        self.default_repeat_count = repeat_count;
        self
    }

    /// Parse from a TOML document; missing keys keep their defaults
    ///
    /// # Errors
    /// Returns error if the TOML is malformed or the values are invalid
    pub fn from_toml(source: &str) -> Result<Self, BuilderError> {
        let config: Self =
            toml::from_str(source).map_err(|e| BuilderError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configured values
    ///
    /// # Errors
    /// Returns error if the default repeat count is zero
    pub fn validate(&self) -> Result<(), BuilderError> {
        if self.default_repeat_count == 0 {
            return Err(BuilderError::Config(
                "default_repeat_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            default_priority: DEFAULT_PRIORITY,
            default_repeat_count: DEFAULT_REPEAT_COUNT,
        }
    }
}
