//! Content client configuration.

#![allow(clippy::missing_const_for_fn)]

use crate::config::{Config, SecretString};

/// Default timeout in milliseconds for a directly constructed client.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Header carrying the service client id.
pub const CLIENT_ID_HEADER: &str = "CF-Access-Client-Id";
/// Header carrying the service client secret.
pub const CLIENT_SECRET_HEADER: &str = "CF-Access-Client-Secret";

/// Client configuration for the content API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the API. Required.
    pub base_url: String,
    /// Service client id for the access proxy.
    pub client_id: Option<String>,
    /// Service client secret for the access proxy.
    pub client_secret: Option<SecretString>,
    /// Per-call deadline in milliseconds.
    pub timeout_ms: u64,
}

impl ClientConfig {
    /// Create a configuration for `base_url` with the default timeout and no credentials.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client_id: None,
            client_secret: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Set the service credential pair.
    #[must_use]
    pub fn with_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<SecretString>,
    ) -> Self {
        self.client_id = Some(client_id.into());
        self.client_secret = Some(client_secret.into());
        self
    }

    /// Set timeout in milliseconds.
    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// The credential pair, only when both halves are present and non-empty.
    #[must_use]
    pub fn credentials(&self) -> Option<(&str, &SecretString)> {
        match (&self.client_id, &self.client_secret) {
            (Some(id), Some(secret)) if !id.is_empty() && !secret.is_empty() => {
                Some((id.as_str(), secret))
            }
            _ => None,
        }
    }
}

impl From<&Config> for ClientConfig {
    fn from(config: &Config) -> Self {
        Self {
            base_url: config.content_api_url.clone(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            timeout_ms: config.request_timeout_ms,
        }
    }
}
