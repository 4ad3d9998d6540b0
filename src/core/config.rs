//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

/// Google Cloud Translation v2 REST endpoint
pub const DEFAULT_API_ENDPOINT: &str = "https://translation.googleapis.com/language/translate/v2";

/// Credential the provider client authenticates with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Credentials {
    /// Sent as the `x-goog-api-key` header
    ApiKey(String),
    /// Sent as an `Authorization: Bearer` header
    AccessToken(String),
    /// Application Default Credentials file (`GOOGLE_APPLICATION_CREDENTIALS`),
    /// exchanged for bearer tokens
    ServiceAccountFile(PathBuf),
}

/// Configuration for the relay
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    pub host: String,
    pub port: u16,
    pub api_endpoint: String,
    pub credentials: Option<Credentials>,
    pub timeout_ms: u64,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            credentials: None,
            timeout_ms: 30000,
        }
    }
}

impl RelayConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load and validate configuration from any key/value source
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = lookup("PORT")
            .unwrap_or_else(|| "8000".to_string())
            .parse::<u16>()?;

        let api_endpoint = lookup("TRANSLATE_API_ENDPOINT")
            .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string());

        let timeout_ms = lookup("REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|| "30000".to_string())
            .parse::<u64>()?;

        let config = Self {
            host,
            port,
            api_endpoint,
            credentials: Self::resolve_credentials(&lookup),
            timeout_ms,
        };
        config.validate()?;

        Ok(config)
    }

    /// API key, then access token, then the ADC file; blank values count as unset.
    fn resolve_credentials<F>(lookup: &F) -> Option<Credentials>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        non_blank("GOOGLE_TRANSLATE_API_KEY")
            .or_else(|| non_blank("GOOGLE_API_KEY"))
            .map(Credentials::ApiKey)
            .or_else(|| non_blank("GOOGLE_OAUTH_ACCESS_TOKEN").map(Credentials::AccessToken))
            .or_else(|| {
                non_blank("GOOGLE_APPLICATION_CREDENTIALS")
                    .map(|path| Credentials::ServiceAccountFile(PathBuf::from(path)))
            })
    }

    /// Override credentials with an explicit API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::ApiKey(api_key.into()));
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_endpoint.is_empty() {
            return Err(anyhow::anyhow!("API endpoint is required"));
        }

        if self.timeout_ms == 0 {
            return Err(anyhow::anyhow!("timeout_ms must be greater than 0"));
        }

        if self.credentials.is_none() {
            warn!("No Google credentials configured");
        }

        Ok(())
    }

    /// Socket address string for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tokio_test::{assert_err, assert_ok};

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = RelayConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:8000");
        assert_eq!(config.api_endpoint, DEFAULT_API_ENDPOINT);
        assert_eq!(config.timeout_ms, 30000);
        assert!(config.credentials.is_none());
        assert_ok!(config.validate());
    }

    #[test]
    fn test_api_key_preferred_over_token() {
        let config = RelayConfig::from_lookup(lookup_from(&[
            ("GOOGLE_API_KEY", "abc"),
            ("GOOGLE_OAUTH_ACCESS_TOKEN", "ya29.token"),
        ]))
        .unwrap();

        assert_eq!(config.credentials, Some(Credentials::ApiKey("abc".to_string())));
    }

    #[test]
    fn test_blank_key_falls_back_to_token() {
        let config = RelayConfig::from_lookup(lookup_from(&[
            ("GOOGLE_TRANSLATE_API_KEY", "  "),
            ("GOOGLE_OAUTH_ACCESS_TOKEN", "ya29.token"),
        ]))
        .unwrap();

        assert_eq!(
            config.credentials,
            Some(Credentials::AccessToken("ya29.token".to_string()))
        );
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        assert_err!(RelayConfig::from_lookup(lookup_from(&[("PORT", "eighty")])));
    }

    #[test]
    fn test_application_credentials_file() {
        let config = RelayConfig::from_lookup(lookup_from(&[(
            "GOOGLE_APPLICATION_CREDENTIALS",
            "/etc/relay/service-account.json",
        )]))
        .unwrap();

        assert_eq!(
            config.credentials,
            Some(Credentials::ServiceAccountFile(PathBuf::from(
                "/etc/relay/service-account.json"
            )))
        );
    }

    #[test]
    fn test_zero_timeout_rejected_at_load() {
        assert_err!(RelayConfig::from_lookup(lookup_from(&[("REQUEST_TIMEOUT_MS", "0")])));
        assert_err!(RelayConfig::from_lookup(lookup_from(&[("TRANSLATE_API_ENDPOINT", "")])));
    }

    #[test]
    fn test_config_validation_zero_timeout() {
        let config = RelayConfig {
            timeout_ms: 0,
            ..Default::default()
        };

        assert_err!(config.validate());
    }

    #[test]
    fn test_with_api_key_overrides() {
        let config = RelayConfig::default().with_api_key("cli-key");
        assert_eq!(config.credentials, Some(Credentials::ApiKey("cli-key".to_string())));
    }
}
