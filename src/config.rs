use std::fmt;

use thiserror::Error;

/// Errors raised while reading configuration, before any network attempt.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address
    pub bind_addr: String,
    /// Weaviate cluster and credential settings
    pub weaviate: WeaviateConfig,
}

/// Connection settings for the Weaviate cluster holding the movie catalog.
#[derive(Clone)]
pub struct WeaviateConfig {
    /// Cluster base URL, always with a scheme and without a trailing slash
    pub url: String,
    /// Weaviate API key, sent as a bearer token
    pub api_key: String,
    /// Generation provider key, forwarded as `X-Cohere-Api-Key` on every call
    pub cohere_api_key: String,
    /// Request timeout for calls to the cluster
    pub timeout_secs: u64,
}

// Keys stay out of logs.
impl fmt::Debug for WeaviateConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeaviateConfig")
            .field("url", &self.url)
            .field("api_key", &"<redacted>")
            .field("cohere_api_key", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8501";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let url = normalize_cluster_url(&required("WEAVIATE_URL")?);
        let api_key = required("WEAVIATE_API_KEY")?;
        let cohere_api_key = required("COHERE_APIKEY")?;

        let bind_addr = lookup("MOVIE_SEARCH_BIND_ADDR")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let timeout_secs = match lookup("MOVIE_SEARCH_TIMEOUT_SECS") {
            Some(val) => val.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "MOVIE_SEARCH_TIMEOUT_SECS",
                value: val.clone(),
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            bind_addr,
            weaviate: WeaviateConfig {
                url,
                api_key,
                cohere_api_key,
                timeout_secs,
            },
        })
    }
}

/// Weaviate Cloud hands out bare hostnames; accept those as well as full URLs.
fn normalize_cluster_url(raw: &str) -> String {
    let trimmed = raw.trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}
