use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

use crate::render::Assets;

pub const DEFAULT_GRAPHQL_URL: &str = "http://localhost:3007/graphql";
pub const DEFAULT_ASSET_BASE_URL: &str = "http://localhost:3007";

/// Runtime configuration, read from the process environment
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// GraphQL endpoint
    pub graphql_url: String,
    /// Base URL static asset paths are resolved against
    pub asset_base_url: String,
    /// File holding the access token
    pub token_path: PathBuf,
    /// File holding locale and theme preferences
    pub preferences_path: PathBuf,
    /// Request timeout; `None` keeps the HTTP client default
    pub http_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            graphql_url: DEFAULT_GRAPHQL_URL.to_string(),
            asset_base_url: DEFAULT_ASSET_BASE_URL.to_string(),
            token_path: PathBuf::from(".carmarket/token"),
            preferences_path: PathBuf::from(".carmarket/preferences.json"),
            http_timeout: None,
        }
    }
}

impl Config {
    /// Load from the environment, after reading a `.env` file if present
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let http_timeout = value("HTTP_TIMEOUT_SECS")
            .map(|secs| {
                secs.trim()
                    .parse::<u64>()
                    .with_context(|| format!("HTTP_TIMEOUT_SECS is not a number: {secs}"))
            })
            .transpose()?
            .map(Duration::from_secs);

        Ok(Self {
            graphql_url: value("GRAPHQL_URL").unwrap_or(defaults.graphql_url),
            asset_base_url: value("ASSET_BASE_URL").unwrap_or(defaults.asset_base_url),
            token_path: value("TOKEN_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.token_path),
            preferences_path: value("PREFERENCES_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.preferences_path),
            http_timeout,
        })
    }

    /// `${assetBaseUrl}/${relativePath}`
    pub fn asset_url(&self, relative: &str) -> String {
        self.assets().url(relative)
    }

    pub fn assets(&self) -> Assets {
        Assets::new(&self.asset_base_url)
    }
}
