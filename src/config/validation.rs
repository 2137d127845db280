//! Configuration validation.
//!
//! Checks that loaded values are usable before any client is built.

use reqwest::Url;

use super::{Config, CONTENT_API_URL_VAR, IDENTITY_URL_VAR, TIMEOUT_VAR};
use crate::error::ConfigError;

/// Minimum allowed timeout in milliseconds (1 second).
pub const MIN_TIMEOUT_MS: u64 = 1000;

/// Maximum allowed timeout in milliseconds (5 minutes).
pub const MAX_TIMEOUT_MS: u64 = 300_000;

/// Validate configuration values.
///
/// # Errors
///
/// Returns [`ConfigError`] if:
/// - `CONTENT_CACHE_API_URL` is empty or not an absolute URL
/// - `IDENTITY_BASE_URL` is set but not an absolute URL
/// - `CONTENT_API_TIMEOUT_MS` is outside 1000..=300000
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.content_api_url.trim().is_empty() {
        return Err(ConfigError::MissingRequired {
            var: CONTENT_API_URL_VAR.into(),
        });
    }
    check_absolute_url(CONTENT_API_URL_VAR, &config.content_api_url)?;

    if let Some(identity) = &config.identity_base_url {
        check_absolute_url(IDENTITY_URL_VAR, identity)?;
    }

    if config.request_timeout_ms < MIN_TIMEOUT_MS || config.request_timeout_ms > MAX_TIMEOUT_MS {
        return Err(ConfigError::InvalidValue {
            var: TIMEOUT_VAR.into(),
            reason: format!("must be between {MIN_TIMEOUT_MS} and {MAX_TIMEOUT_MS} ms"),
        });
    }

    Ok(())
}

pub(crate) fn check_absolute_url(var: &str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|e| ConfigError::InvalidValue {
        var: var.into(),
        reason: format!("not an absolute URL ({e})"),
    })
}
