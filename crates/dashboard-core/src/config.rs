//! Configuration for dashboard link builders.
//!
//! The base path is the prefix under which the dashboard is served (empty when
//! it is mounted at the server root). It is passed explicitly to builders
//! rather than read from shared state.

use crate::Error;
use serde::{Deserialize, Serialize};
use url::Url;
use validator::{Validate, ValidationError};

/// Configuration for building dashboard links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct DashboardConfig {
    /// Path prefix prepended to every link, e.g. `/sonar`
    #[validate(custom(function = "validate_base_path"))]
    #[serde(default)]
    pub base_path: String,

    /// Optional server origin used to turn links into absolute URLs
    #[validate(url)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,
}

fn validate_base_path(base_path: &str) -> Result<(), ValidationError> {
    if base_path.is_empty() {
        return Ok(());
    }
    if !base_path.starts_with('/') {
        return Err(ValidationError::new("base_path_must_start_with_slash"));
    }
    if base_path.ends_with('/') {
        return Err(ValidationError::new("base_path_must_not_end_with_slash"));
    }
    if base_path.contains(['?', '#']) {
        return Err(ValidationError::new("base_path_must_be_a_path"));
    }
    Ok(())
}

impl DashboardConfig {
    /// Create a new configuration for the given base path.
    ///
    /// # Arguments
    ///
    /// * `base_path` - Path prefix of the dashboard (e.g. "/sonar", or "" for the root)
    ///
    /// # Errors
    ///
    /// Returns an error if the base path is malformed.
    pub fn new(base_path: impl Into<String>) -> Result<Self, Error> {
        let config = Self {
            base_path: base_path.into(),
            server_url: None,
        };

        config.check()?;
        Ok(config)
    }

    /// Set the server origin used for absolute links.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not absolute.
    pub fn with_server_url(mut self, server_url: impl Into<String>) -> Result<Self, Error> {
        self.server_url = Some(server_url.into());
        self.check()?;
        Ok(self)
    }

    /// Load and validate a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the values are invalid.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let config: Self = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    /// Parse the configured server URL.
    ///
    /// # Errors
    ///
    /// Returns an error if no server URL is configured or it cannot be parsed.
    pub fn parse_server_url(&self) -> Result<Url, Error> {
        let server_url = self
            .server_url
            .as_deref()
            .ok_or_else(|| Error::ConfigError("No server URL configured".to_string()))?;
        Url::parse(server_url)
            .map_err(|e| Error::ConfigError(format!("Invalid server URL: {}", e)))
    }

    /// Validate the configuration, reporting failures as [`Error::ConfigError`].
    ///
    /// # Errors
    ///
    /// Returns an error if the base path or server URL is malformed.
    pub fn check(&self) -> Result<(), Error> {
        self.validate()
            .map_err(|e| Error::ConfigError(format!("Invalid configuration: {}", e)))
    }
}
