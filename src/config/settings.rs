//! Client configuration settings
//!
//! Defines the API version selection, base URL resolution and loading logic

use crate::utils::error::{helpers::configuration_error, PlacesError, PlacesResult};
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, warn};

/// Base URL of the Legacy Places API
pub const LEGACY_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";

/// Base URL of the New Places API
pub const NEW_BASE_URL: &str = "https://places.googleapis.com/v1/places";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const API_KEY_VAR: &str = "GOOGLE_PLACES_API_KEY";
const VERSION_VAR: &str = "GOOGLE_PLACES_API_VERSION";
const TIMEOUT_VAR: &str = "GOOGLE_PLACES_TIMEOUT";
const BASE_URL_VAR: &str = "GOOGLE_PLACES_BASE_URL";

/// Places API generation targeted by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ApiVersion {
    /// REST-style API under `maps.googleapis.com`
    #[default]
    Legacy,
    /// JSON/header based API under `places.googleapis.com`
    New,
}

impl ApiVersion {
    /// Label used in configuration and error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiVersion::Legacy => "Legacy",
            ApiVersion::New => "New",
        }
    }

    /// Base URL for this version
    pub fn base_url(&self) -> &'static str {
        match self {
            ApiVersion::Legacy => LEGACY_BASE_URL,
            ApiVersion::New => NEW_BASE_URL,
        }
    }

    /// Resolve a free-form label: exactly `"Legacy"` selects Legacy, anything else selects New.
    pub fn from_label(label: &str) -> Self {
        if label == "Legacy" {
            ApiVersion::Legacy
        } else {
            ApiVersion::New
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = PlacesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Legacy" => Ok(ApiVersion::Legacy),
            "New" => Ok(ApiVersion::New),
            other => Err(configuration_error(format!(
                "Unknown Places API version '{}', expected 'Legacy' or 'New'",
                other
            ))),
        }
    }
}

/// Immutable client configuration
///
/// The base URL is derived from the version at construction time. Changing the
/// version afterwards is not supported; build a new configuration instead.
#[derive(Clone)]
pub struct Configuration {
    api_key: String,
    version: ApiVersion,
    base_url: String,
    timeout: Duration,
}

impl Configuration {
    /// Create a configuration for the given key and version
    pub fn new(api_key: impl Into<String>, version: ApiVersion) -> PlacesResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(configuration_error("API key cannot be empty"));
        }

        Ok(Self {
            api_key,
            version,
            base_url: version.base_url().to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Create a configuration from a version label.
    ///
    /// Only the exact string `"Legacy"` selects the Legacy API; every other
    /// label, including `"legacy"` or a typo, falls back to the New API.
    pub fn from_version_label(api_key: impl Into<String>, label: &str) -> PlacesResult<Self> {
        let version = ApiVersion::from_label(label);
        if version == ApiVersion::New && label != "New" {
            warn!("Unrecognized Places API version '{}', using New", label);
        }
        Self::new(api_key, version)
    }

    /// Load configuration from the process environment (and `.env` if present)
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from a specific dotenv file, ignoring the process environment
    pub fn from_env_file(path: &Path) -> Result<Self> {
        let vars = dotenvy::from_path_iter(path)
            .with_context(|| format!("Failed to read env file: {:?}", path))?
            .collect::<std::result::Result<HashMap<String, String>, _>>()
            .with_context(|| format!("Failed to parse env file: {:?}", path))?;

        Self::from_lookup(|key| vars.get(key).cloned())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .with_context(|| format!("{} environment variable not set", API_KEY_VAR))?;

        let version: ApiVersion = lookup(VERSION_VAR)
            .unwrap_or_else(|| ApiVersion::default().as_str().to_string())
            .parse()?;

        let timeout_secs: u64 = lookup(TIMEOUT_VAR)
            .unwrap_or_else(|| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .context("Invalid timeout value")?;

        let mut config = Self::new(api_key, version)?.with_timeout(Duration::from_secs(timeout_secs))?;

        if let Some(base_url) = lookup(BASE_URL_VAR) {
            config = config.with_base_url(base_url)?;
        }

        debug!("Loaded Places configuration for the {} API", config.version);
        Ok(config)
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> PlacesResult<Self> {
        if timeout.is_zero() {
            return Err(configuration_error("Timeout cannot be 0"));
        }
        self.timeout = timeout;
        Ok(self)
    }

    /// Point the client at a different host, e.g. a proxy or a mock server.
    ///
    /// The version, and therefore the request dialect, is unchanged.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> PlacesResult<Self> {
        let base_url = base_url.into();
        if !base_url.starts_with("http") {
            return Err(configuration_error(format!(
                "Invalid base URL format, should start with 'http': {}",
                base_url
            )));
        }
        self.base_url = base_url.trim_end_matches('/').to_string();
        Ok(self)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn version(&self) -> ApiVersion {
        self.version
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("api_key", &"[redacted]")
            .field("version", &self.version)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
