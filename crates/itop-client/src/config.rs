//! Connection settings for an iTop instance, loadable from TOML or environment.

use serde::Deserialize;

use crate::error::{ClientError, ClientResult};

/// Connection settings consumed only by the transport.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Instance root, e.g. `https://itop.example.com`.
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub password: String,
    /// REST protocol version sent with every call.
    #[serde(default = "default_version")]
    pub version: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_version() -> String {
    "1.4".into()
}

fn default_timeout_secs() -> u64 {
    30
}

impl ClientConfig {
    /// Load from `ITOP_BASE_URL`, `ITOP_USER`, `ITOP_PASSWORD`, `ITOP_VERSION`
    /// and `ITOP_TIMEOUT_SECS`.
    pub fn from_env() -> ClientResult<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Load from any variable lookup (the environment, or a map in tests).
    pub fn from_vars<F>(get: F) -> ClientResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_secs = match get("ITOP_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                ClientError::Config(format!("ITOP_TIMEOUT_SECS is not a number: {raw}"))
            })?,
            None => default_timeout_secs(),
        };
        let config = Self {
            base_url: get("ITOP_BASE_URL").unwrap_or_default(),
            user: get("ITOP_USER").unwrap_or_default(),
            password: get("ITOP_PASSWORD").unwrap_or_default(),
            version: get("ITOP_VERSION").unwrap_or_else(default_version),
            timeout_secs,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document and validate it.
    pub fn from_toml_str(contents: &str) -> ClientResult<Self> {
        let config: Self =
            toml::from_str(contents).map_err(|e| ClientError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Require base URL and credentials.
    pub fn validate(&self) -> ClientResult<()> {
        let missing: Vec<&str> = [
            ("ITOP_BASE_URL", &self.base_url),
            ("ITOP_USER", &self.user),
            ("ITOP_PASSWORD", &self.password),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ClientError::Config(format!(
                "missing required settings: {}",
                missing.join(", ")
            )))
        }
    }

    /// Full REST endpoint URL.
    pub fn endpoint(&self) -> String {
        format!("{}/webservices/rest.php", self.base_url.trim_end_matches('/'))
    }
}
