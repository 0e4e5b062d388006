//! Client configuration.
//!
//! The only setting is the API base URL, read from `MEDIAHUB_API_BASE_URL`
//! once when the client is built.

use figment::providers::Env;
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Immutable configuration for `HttpClient`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    api_base_url: String,
}

impl ClientConfig {
    pub const ENV_PREFIX: &'static str = "MEDIAHUB_";

    pub fn new(api_base_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Load from `MEDIAHUB_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_figment(Figment::from(Env::prefixed(Self::ENV_PREFIX)))
    }

    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let raw: ClientConfig = figment
            .extract()
            .map_err(|e| ConfigError::Extract(e.to_string()))?;
        if raw.api_base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        Ok(Self::new(raw.api_base_url.trim()))
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Join `path` onto the base URL. Absolute `http(s)://` URLs pass through.
    pub fn resolve(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            return self.api_base_url.clone();
        }
        format!("{}/{path}", self.api_base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ClientConfig::new("http://localhost:3000/api/");
        assert_eq!(config.api_base_url(), "http://localhost:3000/api");
    }

    #[test]
    fn resolve_joins_with_single_slash() {
        let config = ClientConfig::new("http://localhost:3000/api/");
        assert_eq!(config.resolve("/v1/home"), "http://localhost:3000/api/v1/home");
        assert_eq!(config.resolve("v1/home"), "http://localhost:3000/api/v1/home");
        assert_eq!(config.resolve(""), "http://localhost:3000/api");
    }

    #[test]
    fn resolve_keeps_absolute_urls() {
        let config = ClientConfig::new("http://localhost:3000");
        assert_eq!(
            config.resolve("https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
    }

    #[test]
    fn from_env_reads_prefixed_variable() {
        Jail::expect_with(|jail| {
            jail.set_env("MEDIAHUB_API_BASE_URL", "http://api.example.com/");
            let config = ClientConfig::from_env().unwrap();
            assert_eq!(config.api_base_url(), "http://api.example.com");
            Ok(())
        });
    }

    #[test]
    fn from_env_fails_without_variable() {
        Jail::expect_with(|_jail| {
            let err = ClientConfig::from_env().unwrap_err();
            assert!(matches!(err, ConfigError::Extract(_)));
            Ok(())
        });
    }

    #[test]
    fn from_figment_rejects_blank_url() {
        let figment = Figment::from(figment::providers::Serialized::defaults(ClientConfig {
            api_base_url: "  ".to_string(),
        }));
        assert_eq!(ClientConfig::from_figment(figment).unwrap_err(), ConfigError::EmptyBaseUrl);
    }
}
