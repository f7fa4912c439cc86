//! Client configuration.
//!
//! A config is handed to `ClientFactory` and copied into every client it
//! creates. There is no process-wide default to mutate; two factories with
//! different base addresses can coexist.

use std::env;

use serde::Deserialize;

use crate::error::ApiError;
use crate::query::QueryEncoding;

pub const DEFAULT_BASE_URL: &str = "https://trendings.herokuapp.com";

/// Environment variable read by `ClientConfig::from_env`.
pub const BASE_URL_ENV: &str = "KTHTTP_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Service root every endpoint path is appended to.
    pub base_url: String,
    /// Form-urlencode query keys and values. Off by default, in which case
    /// values are written verbatim.
    pub encode_query: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            encode_query: false,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    pub fn with_encoded_query(mut self, encode: bool) -> Self {
        self.encode_query = encode;
        self
    }

    /// Parse a TOML document such as `base_url = "http://localhost:3000"`.
    /// Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ApiError> {
        toml::from_str(s).map_err(|e| ApiError::Configuration(e.to_string()))
    }

    /// Defaults, with the base URL overridden by `KTHTTP_BASE_URL` if set.
    pub fn from_env() -> Self {
        match env::var(BASE_URL_ENV) {
            Ok(url) if !url.is_empty() => Self::new(&url),
            _ => Self::default(),
        }
    }

    /// Base URL without trailing slashes, so `base + "/path"` never doubles up.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn query_encoding(&self) -> QueryEncoding {
        if self.encode_query {
            QueryEncoding::Form
        } else {
            QueryEncoding::Raw
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_trending_service() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://trendings.herokuapp.com");
        assert_eq!(config.query_encoding(), QueryEncoding::Raw);
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ClientConfig::new("http://localhost:3000/");
        assert_eq!(config.normalized_base_url(), "http://localhost:3000");
    }

    #[test]
    fn toml_overrides_and_defaults() {
        let config = ClientConfig::from_toml_str(r#"base_url = "http://localhost:3000""#).unwrap();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert!(!config.encode_query);

        let config = ClientConfig::from_toml_str("encode_query = true").unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.query_encoding(), QueryEncoding::Form);
    }

    #[test]
    fn toml_rejects_unknown_keys() {
        let err = ClientConfig::from_toml_str(r#"base = "http://x""#).unwrap_err();
        assert!(matches!(err, ApiError::Configuration(_)));
    }

    #[test]
    fn env_overrides_base_url() {
        env::set_var(BASE_URL_ENV, "http://from-env.test");
        let config = ClientConfig::from_env();
        env::remove_var(BASE_URL_ENV);
        assert_eq!(config.base_url, "http://from-env.test");
        assert_eq!(ClientConfig::from_env(), ClientConfig::default());
    }

    #[test]
    fn toml_rejects_wrong_types() {
        let err = ClientConfig::from_toml_str("encode_query = \"yes\"").unwrap_err();
        assert!(matches!(err, ApiError::Configuration(_)));
    }
}
