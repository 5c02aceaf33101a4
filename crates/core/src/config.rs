//! Runtime configuration read from the environment.

use std::path::PathBuf;
use std::time::Duration;

use log::warn;
use stockmarket_market_data::provider::alpha_vantage::{BASE_URL, DEFAULT_TIMEOUT};
use stockmarket_market_data::AlphaVantageConfig;

use crate::constants::DEFAULT_SEARCH_DEBOUNCE;
use crate::errors::{Error, Result};

pub const ENV_API_KEY: &str = "STOCKMARKET_API_KEY";
pub const ENV_API_BASE_URL: &str = "STOCKMARKET_API_BASE_URL";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "STOCKMARKET_HTTP_TIMEOUT_SECS";
pub const ENV_SEARCH_DEBOUNCE_MS: &str = "STOCKMARKET_SEARCH_DEBOUNCE_MS";
pub const ENV_DATA_DIR: &str = "STOCKMARKET_DATA_DIR";

/// Key accepted by the provider for its sample symbols only.
pub const DEMO_API_KEY: &str = "demo";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_key: String,
    pub api_base_url: String,
    pub http_timeout: Duration,
    pub search_debounce: Duration,
    /// Directory holding the SQLite cache.
    pub data_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: DEMO_API_KEY.to_string(),
            api_base_url: BASE_URL.to_string(),
            http_timeout: DEFAULT_TIMEOUT,
            search_debounce: DEFAULT_SEARCH_DEBOUNCE,
            data_dir: PathBuf::from("."),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = match get(ENV_API_KEY) {
            Some(key) => key,
            None => {
                warn!("{} is not set, using the demo key", ENV_API_KEY);
                defaults.api_key
            }
        };

        Ok(Self {
            api_key,
            api_base_url: get(ENV_API_BASE_URL).unwrap_or(defaults.api_base_url),
            http_timeout: parse_u64(ENV_HTTP_TIMEOUT_SECS, get(ENV_HTTP_TIMEOUT_SECS))?
                .map(Duration::from_secs)
                .unwrap_or(defaults.http_timeout),
            search_debounce: parse_u64(ENV_SEARCH_DEBOUNCE_MS, get(ENV_SEARCH_DEBOUNCE_MS))?
                .map(Duration::from_millis)
                .unwrap_or(defaults.search_debounce),
            data_dir: get(ENV_DATA_DIR)
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
        })
    }

    pub fn provider_config(&self) -> AlphaVantageConfig {
        AlphaVantageConfig::new(self.api_key.clone())
            .with_base_url(self.api_base_url.clone())
            .with_timeout(self.http_timeout)
    }
}

fn parse_u64(key: &str, value: Option<String>) -> Result<Option<u64>> {
    value
        .map(|v| {
            v.trim()
                .parse::<u64>()
                .map_err(|_| Error::InvalidConfigValue(format!("{}={}", key, v)))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_key, "demo");
        assert_eq!(config.search_debounce, Duration::from_millis(500));
    }

    #[test]
    fn reads_all_keys() {
        let config = config_from(&[
            (ENV_API_KEY, "abc123"),
            (ENV_API_BASE_URL, "http://localhost:9000/query"),
            (ENV_HTTP_TIMEOUT_SECS, "5"),
            (ENV_SEARCH_DEBOUNCE_MS, "250"),
            (ENV_DATA_DIR, "/tmp/stockmarket"),
        ])
        .unwrap();

        assert_eq!(config.api_key, "abc123");
        assert_eq!(config.http_timeout, Duration::from_secs(5));
        assert_eq!(config.search_debounce, Duration::from_millis(250));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/stockmarket"));

        let provider = config.provider_config();
        assert_eq!(provider.api_key, "abc123");
        assert_eq!(provider.base_url, "http://localhost:9000/query");
        assert_eq!(provider.timeout, Duration::from_secs(5));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = config_from(&[(ENV_API_KEY, "  "), (ENV_DATA_DIR, "")]).unwrap();
        assert_eq!(config.api_key, DEMO_API_KEY);
        assert_eq!(config.data_dir, PathBuf::from("."));
    }

    #[test]
    fn invalid_number_is_rejected() {
        let err = config_from(&[(ENV_HTTP_TIMEOUT_SECS, "soon")]).unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue(_)));
        assert_eq!(
            err.to_string(),
            "Invalid configuration value: STOCKMARKET_HTTP_TIMEOUT_SECS=soon"
        );
    }
}
