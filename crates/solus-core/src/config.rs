//! Loadable configuration for SOLUS IO clients.
//!
//! [`SolusClientConfig`] is the serde-friendly form an embedder keeps in a
//! file or environment. It is validated on construction and converted into a
//! [`ClientConfig`] when the client is built.

use crate::client::{ClientConfig, RetryPolicy};
use crate::Error;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;
use validator::Validate;

/// Configuration for a SOLUS IO client instance.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SolusClientConfig {
    /// Base URL of the API, e.g. `https://solus.example.com/api/v1/`
    #[validate(url)]
    pub base_url: String,

    /// Optional API token used for Bearer authentication
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,

    /// Verify the server certificate
    #[serde(default = "default_tls_verify")]
    pub tls_verify: bool,

    /// Per-attempt timeout, seconds
    #[validate(range(min = 1, max = 300))]
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Maximum number of retries after the first attempt
    #[validate(range(min = 0, max = 10))]
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Delay between retries in milliseconds
    #[validate(range(max = 60000))]
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

const fn default_tls_verify() -> bool {
    true
}

const fn default_request_timeout_secs() -> u64 {
    crate::client::DEFAULT_TIMEOUT
}

const fn default_max_retries() -> u32 {
    crate::client::DEFAULT_MAX_RETRIES
}

const fn default_retry_delay_ms() -> u64 {
    crate::client::DEFAULT_RETRY_DELAY_MS
}

impl SolusClientConfig {
    /// Create a new client configuration for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or validation fails.
    pub fn new(base_url: impl Into<String>) -> Result<Self, Error> {
        let config = Self {
            base_url: base_url.into(),
            api_token: None,
            tls_verify: default_tls_verify(),
            request_timeout_secs: default_request_timeout_secs(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
        };

        config
            .validate()
            .map_err(|e| Error::ConfigError(format!("Invalid configuration: {e}")))?;

        Ok(config)
    }

    /// Set the API token.
    #[must_use]
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Toggle certificate verification.
    #[must_use]
    pub const fn with_tls_verify(mut self, verify: bool) -> Self {
        self.tls_verify = verify;
        self
    }

    /// Per-attempt timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_secs = seconds;
        self
    }

    /// Set maximum retries.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the delay between retries in milliseconds.
    #[must_use]
    pub const fn with_retry_delay_ms(mut self, millis: u64) -> Self {
        self.retry_delay_ms = millis;
        self
    }

    /// Per-attempt timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Parse the base URL, making sure it ends with a slash so relative
    /// resource paths resolve beneath it.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn parse_base_url(&self) -> Result<Url, Error> {
        parse_base_url(&self.base_url)
    }

    /// Convert into the HTTP client settings.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn client_config(&self) -> Result<ClientConfig, Error> {
        self.validate()?;

        let policy = RetryPolicy::new()
            .with_max_retries(self.max_retries)
            .with_initial_delay(Duration::from_millis(self.retry_delay_ms))
            .with_max_delay(Duration::from_millis(self.retry_delay_ms));

        let mut config = ClientConfig::new()
            .with_timeout(self.timeout())
            .with_retry_policy(policy);
        if !self.tls_verify {
            config = config.allow_insecure();
        }
        Ok(config)
    }
}

/// Parse a base URL and append a trailing slash to its path when missing.
///
/// # Errors
///
/// Returns an error if the URL cannot be parsed or cannot be a base.
pub fn parse_base_url(raw: &str) -> Result<Url, Error> {
    let mut url =
        Url::parse(raw).map_err(|e| Error::ConfigError(format!("Invalid base URL: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(Error::ConfigError(format!(
            "Invalid base URL: {raw} cannot be a base"
        )));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

impl Default for SolusClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api/v1/".to_string(),
            api_token: None,
            tls_verify: default_tls_verify(),
            request_timeout_secs: default_request_timeout_secs(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}
