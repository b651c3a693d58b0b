//! Processor and application configuration, loadable from TOML or environment.

use anyhow::Context;
use itop_client::ClientConfig;
use serde::Deserialize;

use crate::fuzzy::DEFAULT_THRESHOLD;

/// Tunables of the query processor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QueryConfig {
    /// Upper bound for any result cap, user-requested or default.
    #[serde(default = "default_max_limit")]
    pub max_limit: u32,
    /// Minimum similarity for a fuzzy name match.
    #[serde(default = "default_fuzzy_threshold")]
    pub fuzzy_threshold: f64,
    /// Candidates fetched for fuzzy name resolution.
    #[serde(default = "default_lookup_limit")]
    pub lookup_limit: u32,
}

fn default_max_limit() -> u32 {
    1000
}

fn default_fuzzy_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_lookup_limit() -> u32 {
    1000
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            max_limit: default_max_limit(),
            fuzzy_threshold: default_fuzzy_threshold(),
            lookup_limit: default_lookup_limit(),
        }
    }
}

/// Top-level configuration for the binary.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// iTop connection settings.
    pub backend: ClientConfig,
    #[serde(default)]
    pub query: QueryConfig,
}

impl AppConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents =
            std::fs::read_to_string(path).with_context(|| format!("reading config file {path}"))?;
        let config: Self =
            toml::from_str(&contents).with_context(|| format!("parsing config file {path}"))?;
        config.backend.validate()?;
        Ok(config)
    }

    /// Backend settings from `ITOP_*` variables, processor defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            backend: ClientConfig::from_env()?,
            query: QueryConfig::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_minimal_config() {
        let toml = r#"
[backend]
base_url = "https://itop.example.com"
user = "api"
password = "secret"
"#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.backend.base_url, "https://itop.example.com");
        assert_eq!(config.backend.version, "1.4"); // default
        assert_eq!(config.query, QueryConfig::default());
        assert_eq!(config.query.max_limit, 1000);
    }

    #[test]
    fn deserialize_query_overrides() {
        let toml = r#"
[backend]
base_url = "https://itop.example.com"
user = "api"
password = "secret"
timeout_secs = 5

[query]
max_limit = 200
fuzzy_threshold = 0.9
"#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.backend.timeout_secs, 5);
        assert_eq!(config.query.max_limit, 200);
        assert_eq!(config.query.fuzzy_threshold, 0.9);
        assert_eq!(config.query.lookup_limit, 1000);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = AppConfig::from_file("/nonexistent/itop.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/itop.toml"));
    }
}
