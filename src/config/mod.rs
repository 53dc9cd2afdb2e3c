//! Configuration types for the WorkOS client.

use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use std::time::Duration;
use url::Url;

use crate::error::{ConfigurationError, WorkOsResult};

/// Default WorkOS API hostname.
pub const DEFAULT_API_HOSTNAME: &str = "api.workos.com";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header, carrying the client version.
pub const DEFAULT_USER_AGENT: &str = concat!("workos-rust/", env!("CARGO_PKG_VERSION"));

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "WORKOS_API_KEY";

/// Environment variable overriding the API hostname.
pub const API_HOSTNAME_ENV: &str = "WORKOS_API_HOSTNAME";

/// WorkOS client configuration.
#[derive(Clone)]
pub struct WorkOsConfig {
    api_key: Option<SecretString>,
    /// API base URL, e.g. `https://api.workos.com`.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// User-Agent header.
    pub user_agent: String,
}

impl Default for WorkOsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: base_url_for_host(DEFAULT_API_HOSTNAME),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl fmt::Debug for WorkOsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkOsConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl WorkOsConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> WorkOsConfigBuilder {
        WorkOsConfigBuilder::new()
    }

    /// Create a configuration from environment variables.
    ///
    /// Reads `WORKOS_API_KEY` and, when set, `WORKOS_API_HOSTNAME`. A missing
    /// API key is not an error here; authenticated calls fail when they need it.
    pub fn from_env() -> WorkOsResult<Self> {
        let mut builder = Self::builder();
        if let Some(key) = non_empty_env(API_KEY_ENV) {
            builder = builder.api_key(key);
        }
        if let Some(host) = non_empty_env(API_HOSTNAME_ENV) {
            builder = builder.api_hostname(host);
        }
        builder.build()
    }

    /// Returns the API key, or a configuration error when none is set.
    pub fn api_key(&self) -> WorkOsResult<&SecretString> {
        self.api_key
            .as_ref()
            .ok_or_else(|| ConfigurationError::MissingApiKey.into())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> WorkOsResult<()> {
        let url = Url::parse(&self.base_url).map_err(|_| ConfigurationError::InvalidBaseUrl {
            url: self.base_url.clone(),
        })?;

        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(ConfigurationError::InvalidBaseUrl {
                url: self.base_url.clone(),
            }
            .into());
        }

        if let Some(key) = &self.api_key {
            if key.expose_secret().trim().is_empty() {
                return Err(ConfigurationError::InvalidConfig {
                    message: "API key cannot be empty".to_string(),
                }
                .into());
            }
        }

        if self.user_agent.is_empty() {
            return Err(ConfigurationError::InvalidConfig {
                message: "User-Agent cannot be empty".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

fn base_url_for_host(host: &str) -> String {
    format!("https://{}", host.trim_end_matches('/'))
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Builder for WorkOsConfig.
#[derive(Default)]
pub struct WorkOsConfigBuilder {
    api_key: Option<SecretString>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl WorkOsConfigBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::new(key.into()));
        self
    }

    /// Sets the API hostname; requests go to `https://<hostname>`.
    pub fn api_hostname(mut self, hostname: impl AsRef<str>) -> Self {
        self.base_url = Some(base_url_for_host(hostname.as_ref()));
        self
    }

    /// Sets the full base URL, scheme included.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the User-Agent header.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> WorkOsResult<WorkOsConfig> {
        let defaults = WorkOsConfig::default();
        let config = WorkOsConfig {
            api_key: self.api_key,
            base_url: self
                .base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            timeout: self.timeout.unwrap_or(defaults.timeout),
            user_agent: self.user_agent.unwrap_or(defaults.user_agent),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WorkOsError;

    #[test]
    fn test_default_config() {
        let config = WorkOsConfig::default();
        assert_eq!(config.base_url, "https://api.workos.com");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(config.user_agent.starts_with("workos-rust/"));
        assert!(config.api_key().is_err());
    }

    #[test]
    fn test_config_builder() {
        let config = WorkOsConfig::builder()
            .api_key("sk_test_123")
            .api_hostname("api.workos.test")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();

        assert_eq!(config.base_url, "https://api.workos.test");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.api_key().unwrap().expose_secret(), "sk_test_123");
    }

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        let config = WorkOsConfig::builder()
            .base_url("http://127.0.0.1:8080/")
            .build()
            .unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
    }

    #[test]
    fn test_invalid_base_url() {
        let result = WorkOsConfig::builder().base_url("not a url").build();
        assert!(matches!(
            result,
            Err(WorkOsError::Configuration(ConfigurationError::InvalidBaseUrl { .. }))
        ));

        let result = WorkOsConfig::builder().base_url("ftp://api.workos.com").build();
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let result = WorkOsConfig::builder().api_key("  ").build();
        assert!(matches!(
            result,
            Err(WorkOsError::Configuration(ConfigurationError::InvalidConfig { .. }))
        ));
    }

    #[test]
    fn test_missing_api_key() {
        let config = WorkOsConfig::default();
        assert!(matches!(
            config.api_key(),
            Err(WorkOsError::Configuration(ConfigurationError::MissingApiKey))
        ));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = WorkOsConfig::builder().api_key("sk_live_secret").build().unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("sk_live_secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
