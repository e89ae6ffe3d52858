use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Environment variable holding the mapping-service API key
pub const API_KEY_ENV: &str = "GOOGLE_MAPS_KEY";

/// Used when no key is configured; every upstream call will be rejected.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_KEY_HERE";

pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub api_key: String,
    pub language: String,
    pub base_url: String,
    pub user_agent: String,
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: PLACEHOLDER_API_KEY.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: format!("placegrid/{}", env!("CARGO_PKG_VERSION")),
            request_timeout_secs: 30,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Load the optional config file, then let the environment override the key
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_api_key_override(std::env::var(API_KEY_ENV).ok()))
    }

    pub fn with_api_key_override(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.api_key = key;
        }
        self
    }

    pub fn has_placeholder_key(&self) -> bool {
        self.api_key == PLACEHOLDER_API_KEY
    }
}
