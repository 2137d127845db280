//! Configuration management.
//!
//! This module handles:
//! - Environment variable loading
//! - Configuration validation
//! - Default value handling
//! - Secure service-credential storage via [`SecretString`]
//!
//! Configuration is read once at startup. The resulting [`Config`] is
//! immutable and is handed to the clients that need it.
//!
//! # Example
//!
//! ```
//! use newsroom_content::config::{Config, SecretString, DEFAULT_REQUEST_TIMEOUT_MS};
//!
//! // Create a config directly (use Config::from_env() in production)
//! let config = Config {
//!     content_api_url: "https://cms.example.com".to_string(),
//!     client_id: Some("svc-frontend".to_string()),
//!     client_secret: Some(SecretString::new("very-secret")),
//!     request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
//!     identity_base_url: None,
//!     log_level: "info".to_string(),
//! };
//!
//! let debug = format!("{:?}", config);
//! assert!(debug.contains("<REDACTED>"));
//! assert!(!debug.contains("very-secret"));
//! ```

mod secret;
pub(crate) mod validation;

pub use secret::SecretString;
pub use validation::{validate_config, MAX_TIMEOUT_MS, MIN_TIMEOUT_MS};

use crate::error::ConfigError;

/// Environment variable holding the content API base URL.
pub const CONTENT_API_URL_VAR: &str = "CONTENT_CACHE_API_URL";
/// Environment variable holding the service client id.
pub const CLIENT_ID_VAR: &str = "CF_ACCESS_CLIENT_ID";
/// Environment variable holding the service client secret.
pub const CLIENT_SECRET_VAR: &str = "CF_ACCESS_CLIENT_SECRET";
/// Environment variable overriding the request timeout.
pub const TIMEOUT_VAR: &str = "CONTENT_API_TIMEOUT_MS";
/// Environment variable holding the identity service base URL.
pub const IDENTITY_URL_VAR: &str = "IDENTITY_BASE_URL";

/// Environment variable holding the log filter.
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default request timeout for the application-level client.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 15_000;

/// Application configuration.
///
/// Use [`Config::from_env`] to load configuration from environment variables.
/// The service secret uses [`SecretString`] to prevent accidental logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the content API.
    pub content_api_url: String,
    /// Service client id sent to the access proxy.
    pub client_id: Option<String>,
    /// Service client secret (protected from logging via [`SecretString`]).
    pub client_secret: Option<SecretString>,
    /// Request timeout in milliseconds.
    pub request_timeout_ms: u64,
    /// Base URL of the identity service, when it lives on another origin.
    pub identity_base_url: Option<String>,
    /// Log level (error, warn, info, debug, trace).
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `CONTENT_CACHE_API_URL`: content API base URL
    ///
    /// Optional environment variables (with defaults):
    /// - `CF_ACCESS_CLIENT_ID` / `CF_ACCESS_CLIENT_SECRET`: service credentials
    /// - `CONTENT_API_TIMEOUT_MS`: request timeout (default: `15000`)
    /// - `IDENTITY_BASE_URL`: identity service base URL
    /// - `LOG_LEVEL`: logging level (default: `info`)
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - `CONTENT_CACHE_API_URL` is missing or empty
    /// - `CONTENT_API_TIMEOUT_MS` is not a valid positive integer
    /// - Any value fails validation (see [`validate_config`])
    pub fn from_env() -> Result<Self, ConfigError> {
        load_dotenv();

        let content_api_url =
            non_empty_env(CONTENT_API_URL_VAR).ok_or_else(|| ConfigError::MissingRequired {
                var: CONTENT_API_URL_VAR.into(),
            })?;

        let config = Self {
            content_api_url,
            client_id: non_empty_env(CLIENT_ID_VAR),
            client_secret: non_empty_env(CLIENT_SECRET_VAR).map(SecretString::new),
            request_timeout_ms: parse_env_u64(TIMEOUT_VAR, DEFAULT_REQUEST_TIMEOUT_MS)?,
            identity_base_url: non_empty_env(IDENTITY_URL_VAR),
            log_level: log_level_from_env(),
        };

        validate_config(&config)?;
        Ok(config)
    }

    /// True when both halves of the service credential pair are configured.
    #[must_use]
    pub fn has_service_credentials(&self) -> bool {
        self.client_id.is_some() && self.client_secret.is_some()
    }
}

/// Log filter from `LOG_LEVEL`, after loading `.env`.
///
/// Called before the tracing subscriber is built, so a level set only in
/// `.env` still applies to startup logs.
#[must_use]
pub fn log_level_from_env() -> String {
    load_dotenv();
    non_empty_env(LOG_LEVEL_VAR).unwrap_or_else(|| DEFAULT_LOG_LEVEL.into())
}

/// Load a `.env` file if present; a missing or unreadable file is ignored.
fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Parse an environment variable as u64, using a default if not set.
fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    non_empty_env(name).map_or(Ok(default), |val| {
        val.trim().parse().map_err(|_| ConfigError::InvalidValue {
            var: name.into(),
            reason: "must be a positive integer".into(),
        })
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    /// Helper to set up a clean test environment.
    fn setup_test_env() {
        for var in [
            CONTENT_API_URL_VAR,
            CLIENT_ID_VAR,
            CLIENT_SECRET_VAR,
            TIMEOUT_VAR,
            IDENTITY_URL_VAR,
            LOG_LEVEL_VAR,
        ] {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_with_all_vars() {
        setup_test_env();

        env::set_var(CONTENT_API_URL_VAR, "https://cms.example.com");
        env::set_var(CLIENT_ID_VAR, "svc-id");
        env::set_var(CLIENT_SECRET_VAR, "svc-secret");
        env::set_var(TIMEOUT_VAR, "20000");
        env::set_var(IDENTITY_URL_VAR, "https://www.example.com");
        env::set_var(LOG_LEVEL_VAR, "debug");

        let config = Config::from_env().expect("should load config");

        assert_eq!(config.content_api_url, "https://cms.example.com");
        assert_eq!(config.client_id.as_deref(), Some("svc-id"));
        assert_eq!(
            config.client_secret.as_ref().map(SecretString::expose),
            Some("svc-secret")
        );
        assert_eq!(config.request_timeout_ms, 20_000);
        assert_eq!(
            config.identity_base_url.as_deref(),
            Some("https://www.example.com")
        );
        assert_eq!(config.log_level, "debug");
        assert!(config.has_service_credentials());

        setup_test_env();
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        setup_test_env();
        env::set_var(CONTENT_API_URL_VAR, "https://cms.example.com");

        let config = Config::from_env().expect("should load config");

        assert_eq!(config.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert!(config.client_id.is_none());
        assert!(config.client_secret.is_none());
        assert!(!config.has_service_credentials());

        setup_test_env();
    }

    #[test]
    #[serial]
    fn test_log_level_from_env() {
        setup_test_env();
        assert_eq!(log_level_from_env(), DEFAULT_LOG_LEVEL);

        env::set_var(LOG_LEVEL_VAR, "newsroom_content=trace");
        assert_eq!(log_level_from_env(), "newsroom_content=trace");

        env::set_var(LOG_LEVEL_VAR, "  ");
        assert_eq!(log_level_from_env(), DEFAULT_LOG_LEVEL);

        setup_test_env();
    }

    #[test]
    #[serial]
    fn test_config_missing_base_url() {
        setup_test_env();

        let err = Config::from_env().unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingRequired {
                var: CONTENT_API_URL_VAR.into()
            }
        );
    }

    #[test]
    #[serial]
    fn test_config_empty_base_url_is_missing() {
        setup_test_env();
        env::set_var(CONTENT_API_URL_VAR, "   ");

        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::MissingRequired { .. }));

        setup_test_env();
    }

    #[test]
    #[serial]
    fn test_config_invalid_timeout_format() {
        setup_test_env();
        env::set_var(CONTENT_API_URL_VAR, "https://cms.example.com");
        env::set_var(TIMEOUT_VAR, "soon");

        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var, .. } if var == TIMEOUT_VAR));

        setup_test_env();
    }

    #[test]
    #[serial]
    fn test_config_timeout_validation_failure() {
        setup_test_env();
        env::set_var(CONTENT_API_URL_VAR, "https://cms.example.com");
        env::set_var(TIMEOUT_VAR, "10");

        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var, .. } if var == TIMEOUT_VAR));

        setup_test_env();
    }

    #[test]
    #[serial]
    fn test_config_half_credentials_not_paired() {
        setup_test_env();
        env::set_var(CONTENT_API_URL_VAR, "https://cms.example.com");
        env::set_var(CLIENT_ID_VAR, "svc-id");

        let config = Config::from_env().expect("should load config");
        assert!(!config.has_service_credentials());

        setup_test_env();
    }

    #[test]
    fn test_config_debug_redacts_secret() {
        let config = Config {
            content_api_url: "https://cms.example.com".into(),
            client_id: Some("svc-id".into()),
            client_secret: Some(SecretString::new("top-secret-value")),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            identity_base_url: None,
            log_level: "info".into(),
        };
        let debug = format!("{config:?}");
        assert!(debug.contains("<REDACTED>"));
        assert!(!debug.contains("top-secret-value"));
    }
}
