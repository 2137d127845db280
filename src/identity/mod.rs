//! Identity service client.
//!
//! Account lookup, email one-time-password login and registration, social
//! login links, and session inspection against the identity service that
//! sits behind the same origin as the site.
//!
//! Session cookies are the caller's concern: supply a [`reqwest::Client`]
//! with a cookie store through [`IdentityClient::with_http_client`] when the
//! session must persist across calls.

mod client;
mod flow;

pub use client::{
    IdentityClient, LOGIN_ENDPOINT, LOGOUT_ENDPOINT, OAUTH_ENDPOINT_PREFIX, REGISTER_ENDPOINT,
    SEND_OTP_ENDPOINT, SESSION_ENDPOINT, USER_INFO_ENDPOINT,
};
pub use flow::{complete_email_login, start_email_login, PendingLogin};

use std::fmt;

use serde::{Deserialize, Serialize};

/// Purpose of a one-time password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OtpAction {
    /// Log in to an existing account.
    #[default]
    Login,
    /// Create a new account.
    Register,
}

impl OtpAction {
    /// Wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
        }
    }
}

impl fmt::Display for OtpAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Social login provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OAuthProvider {
    /// Google.
    Google,
    /// Facebook.
    Facebook,
}

impl OAuthProvider {
    /// Path segment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Facebook => "facebook",
        }
    }
}

impl fmt::Display for OAuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
