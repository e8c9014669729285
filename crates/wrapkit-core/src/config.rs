// Rust guideline compliant 2026-10-16

//! Configuration management for wrapkit.

use crate::{Error, Result};
use http::HeaderValue;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default content type for rendered envelopes.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Configuration for rendering behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Whether 5xx responses reveal the attached error's text by default.
    #[serde(default)]
    pub show_error: bool,

    /// Content type written with every rendered envelope.
    #[serde(default = "default_content_type")]
    pub content_type: String,

    /// Whether the JSON encoder pretty-prints bodies.
    #[serde(default)]
    pub pretty: bool,
}

fn default_content_type() -> String {
    DEFAULT_CONTENT_TYPE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_error: false,
            content_type: default_content_type(),
            pretty: false,
        }
    }
}

impl Config {
    /// Loads configuration from an optional file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. The TOML file at `path`, if given and present
    /// 3. Environment variables with `WRAPKIT_` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration file exists but cannot be read
    /// - The configuration file contains invalid TOML
    /// - An environment variable or the resulting values fail validation
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) if path.exists() => {
                let content = std::fs::read_to_string(path)?;
                Self::parse_toml(&content)?
            }
            _ => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Parses and validates configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or the values fail validation.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config = Self::parse_toml(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    /// Returns the content type as a header value.
    ///
    /// # Errors
    ///
    /// Returns an error if the content type is not a valid header value.
    pub fn content_type_header(&self) -> Result<HeaderValue> {
        HeaderValue::from_str(&self.content_type).map_err(|_| {
            Error::InvalidConfig(format!("content_type is not a valid header value: {:?}", self.content_type))
        })
    }

    fn parse_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::InvalidConfig(format!("Invalid config file: {}", e)))
    }

    /// Applies overrides from `lookup`.
    ///
    /// Supported variables:
    /// - `WRAPKIT_SHOW_ERROR` - Reveal 5xx error text (true/false)
    /// - `WRAPKIT_CONTENT_TYPE` - Content type header value
    /// - `WRAPKIT_PRETTY` - Pretty-print JSON bodies (true/false)
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(val) = lookup("WRAPKIT_SHOW_ERROR") {
            self.show_error = val.parse().map_err(|_| {
                Error::InvalidConfig("WRAPKIT_SHOW_ERROR must be true or false".to_string())
            })?;
        }

        if let Some(val) = lookup("WRAPKIT_CONTENT_TYPE") {
            self.content_type = val;
        }

        if let Some(val) = lookup("WRAPKIT_PRETTY") {
            self.pretty = val.parse().map_err(|_| {
                Error::InvalidConfig("WRAPKIT_PRETTY must be true or false".to_string())
            })?;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - content_type is not a valid header value
    /// - content_type does not name a JSON media type
    fn validate(&self) -> Result<()> {
        self.content_type_header()?;

        let media_type = self
            .content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        if media_type != "application/json" && !media_type.ends_with("+json") {
            return Err(Error::InvalidConfig(format!(
                "content_type must be a JSON media type, got {}",
                self.content_type
            )));
        }

        Ok(())
    }
}
