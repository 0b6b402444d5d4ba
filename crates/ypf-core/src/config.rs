//! Finder configuration
//!
//! Defaults, then an optional TOML file, then command-line overrides via the
//! `with_*` builders.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use ypf_index::DEFAULT_MAX_DEPTH;
use ypf_resolve::{OutputFormat, RenderOptions};

/// Finder configuration
///
/// ```toml
/// max_depth = 32
/// format = "json"
/// json_indent = 4
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FinderConfig {
    /// Map levels the key index descends
    pub max_depth: usize,
    /// Result output format
    pub format: OutputFormat,
    /// Spaces per JSON indentation level
    pub json_indent: usize,
}

impl FinderConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With index depth limit
    #[inline]
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// With output format
    #[inline]
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// With JSON indentation
    #[inline]
    #[must_use]
    pub fn with_json_indent(mut self, json_indent: usize) -> Self {
        self.json_indent = json_indent;
        self
    }

    /// Parse and validate TOML config text
    ///
    /// # Errors
    /// Returns [`ConfigError::Decode`] for malformed TOML or unknown keys and
    /// [`ConfigError::Invalid`] for out-of-range values.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`FinderConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::io_error(path, e))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::Invalid {
                field: "max_depth",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.json_indent > 16 {
            return Err(ConfigError::Invalid {
                field: "json_indent",
                reason: format!("{} exceeds the maximum of 16", self.json_indent),
            });
        }
        Ok(())
    }

    /// Rendering options derived from this config
    #[inline]
    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            json_indent: self.json_indent,
        }
    }
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            format: OutputFormat::Text,
            json_indent: 2,
        }
    }
}
