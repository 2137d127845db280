//! Error types for the newsroom content client.
//!
//! This module defines a hierarchical error system:
//! - [`AppError`]: Top-level application errors
//! - [`ApiError`]: Classified content API failures
//! - [`IdentityError`]: Identity service failures
//! - [`ConfigError`]: Configuration errors
//!
//! All errors implement `Send + Sync` for async compatibility.

use std::borrow::Cow;

use serde::Serialize;
use thiserror::Error;

/// Status reported for timeouts, mirroring HTTP 408.
pub const TIMEOUT_STATUS: u16 = 408;

/// Error code for timeouts.
pub const TIMEOUT_CODE: &str = "TIMEOUT";
/// Error code for network failures.
pub const NETWORK_ERROR_CODE: &str = "NETWORK_ERROR";
/// Error code for failures of no recognised kind.
pub const UNKNOWN_ERROR_CODE: &str = "UNKNOWN_ERROR";

/// Top-level application error.
///
/// This is the main error type returned by the binary's entry points.
/// It wraps all subsystem errors for unified error handling.
#[derive(Debug, Error)]
pub enum AppError {
    /// Content API error.
    #[error("Content API error: {0}")]
    Api(#[from] ApiError),

    /// Identity service error.
    #[error("Identity service error: {0}")]
    Identity(#[from] IdentityError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Classified content API failure.
///
/// Every failure of [`ContentApi::request`](crate::content::ContentApi::request)
/// surfaces as exactly one of these variants. Callers branch on
/// [`status`](Self::status) or [`code`](Self::code) rather than transport
/// error types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {status_text}")]
    Http {
        /// Numeric HTTP status.
        status: u16,
        /// Canonical reason phrase (may be empty).
        status_text: String,
    },

    /// The request did not complete before the deadline.
    #[error("Request timeout")]
    Timeout {
        /// Deadline that elapsed, in milliseconds.
        timeout_ms: u64,
    },

    /// The request failed in transit or returned an unreadable body.
    #[error("Network error: {cause}")]
    Network {
        /// Underlying cause.
        cause: String,
    },

    /// A failure with no transport cause, from sources other than HTTP.
    #[error("Unknown error occurred")]
    Unknown,
}

/// Coarse grouping of [`ApiError`] for user-facing presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Timeout or network failure; trying again may help.
    Retryable,
    /// The server rejected the request.
    Http,
    /// Anything else.
    Unknown,
}

impl ApiError {
    /// Numeric status: the HTTP status, 408 for timeouts, 0 otherwise.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::Http { status, .. } => *status,
            Self::Timeout { .. } => TIMEOUT_STATUS,
            Self::Network { .. } | Self::Unknown => 0,
        }
    }

    /// Machine-readable code: the stringified HTTP status, or one of
    /// [`TIMEOUT_CODE`], [`NETWORK_ERROR_CODE`], [`UNKNOWN_ERROR_CODE`].
    #[must_use]
    pub fn code(&self) -> Cow<'static, str> {
        match self {
            Self::Http { status, .. } => Cow::Owned(status.to_string()),
            Self::Timeout { .. } => Cow::Borrowed(TIMEOUT_CODE),
            Self::Network { .. } => Cow::Borrowed(NETWORK_ERROR_CODE),
            Self::Unknown => Cow::Borrowed(UNKNOWN_ERROR_CODE),
        }
    }

    /// Underlying cause, present only for network failures.
    #[must_use]
    pub fn details(&self) -> Option<&str> {
        match self {
            Self::Network { cause } => Some(cause),
            _ => None,
        }
    }

    /// Coarse category for choosing user-facing copy.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Timeout { .. } | Self::Network { .. } => ErrorCategory::Retryable,
            Self::Http { .. } => ErrorCategory::Http,
            Self::Unknown => ErrorCategory::Unknown,
        }
    }

    /// Message suitable for showing to a reader of the site.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::Timeout { .. } => "The request took too long. Please try again.",
            Self::Network { .. } => "We couldn't reach the server. Please try again.",
            Self::Http { status: 404, .. } => "We couldn't find what you were looking for.",
            Self::Http {
                status: 401 | 403, ..
            } => "You don't have access to this content.",
            Self::Http { status, .. } if *status >= 500 => {
                "Something went wrong on our end. Please try again later."
            }
            Self::Http { .. } => "The request could not be completed.",
            Self::Unknown => "An unexpected error occurred.",
        }
    }

    /// Flatten into the `{message, status, code, details}` wire shape.
    #[must_use]
    pub fn to_body(&self) -> ApiErrorBody {
        ApiErrorBody {
            message: self.to_string(),
            status: self.status(),
            code: self.code().into_owned(),
            details: self.details().map(ToString::to_string),
        }
    }
}

/// Serializable view of an [`ApiError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    /// Human-readable message.
    pub message: String,
    /// Numeric status.
    pub status: u16,
    /// Machine-readable code.
    pub code: String,
    /// Underlying cause, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Identity service errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// The identity service answered with a non-success status.
    #[error("{endpoint} rejected the request with status {status}")]
    Rejected {
        /// Endpoint path that was called.
        endpoint: String,
        /// Status returned.
        status: u16,
    },

    /// The request failed in transit.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error.
        message: String,
    },
}

/// Configuration errors.
///
/// These errors represent failures in configuration loading and validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Required configuration is missing.
    #[error("Missing required: {var}")]
    MissingRequired {
        /// The missing variable name.
        var: String,
    },

    /// Configuration value is invalid.
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue {
        /// The variable name.
        var: String,
        /// Why the value is invalid.
        reason: String,
    },
}
