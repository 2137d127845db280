//! HTTP calls to the identity service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Serialize;
use serde_json::Value;

use super::{OAuthProvider, OtpAction};
use crate::config::validation::check_absolute_url;
use crate::config::{Config, IDENTITY_URL_VAR};
use crate::error::{ConfigError, IdentityError};
use crate::traits::IdentityProvider;

/// Account lookup endpoint.
pub const USER_INFO_ENDPOINT: &str = "/zephr/media/user/info";
/// One-time password dispatch endpoint.
pub const SEND_OTP_ENDPOINT: &str = "/blaize/two-factor-authentication";
/// Password login endpoint.
pub const LOGIN_ENDPOINT: &str = "/blaize/login";
/// Registration endpoint.
pub const REGISTER_ENDPOINT: &str = "/blaize/register";
/// Prefix of the social login redirect, followed by the provider.
pub const OAUTH_ENDPOINT_PREFIX: &str = "/blaize/oauth/";
/// Current session endpoint.
pub const SESSION_ENDPOINT: &str = "/zephr/media/user/session";
/// Logout endpoint.
pub const LOGOUT_ENDPOINT: &str = "/blaize/logout";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Serialize)]
struct Identifiers<'a> {
    email_address: &'a str,
}

#[derive(Serialize)]
struct Validators<'a> {
    email_otp: &'a str,
}

#[derive(Serialize)]
struct LookupBody<'a> {
    identifiers: Identifiers<'a>,
}

#[derive(Serialize)]
struct OtpRequestBody<'a> {
    action: OtpAction,
    identifiers: Identifiers<'a>,
    method: &'static str,
}

#[derive(Serialize)]
struct CredentialBody<'a> {
    identifiers: Identifiers<'a>,
    validators: Validators<'a>,
}

/// Client for the identity service.
#[derive(Debug, Clone)]
pub struct IdentityClient {
    client: Client,
    base_url: String,
}

impl IdentityClient {
    /// Create a client with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `base_url` is not absolute.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| ConfigError::InvalidValue {
                var: "http client".into(),
                reason: format!("failed to create HTTP client: {e}"),
            })?;
        Self::with_http_client(base_url, client)
    }

    /// Create a client around a caller-configured HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `base_url` is not absolute.
    pub fn with_http_client(base_url: &str, client: Client) -> Result<Self, ConfigError> {
        check_absolute_url(IDENTITY_URL_VAR, base_url)?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from the application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequired`] when no identity URL is configured.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let base_url =
            config
                .identity_base_url
                .as_deref()
                .ok_or_else(|| ConfigError::MissingRequired {
                    var: IDENTITY_URL_VAR.into(),
                })?;
        Self::new(base_url)
    }

    /// Get the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }

    /// Redirect target that starts a social login.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Network`] if the joined URL does not parse.
    pub fn oauth_url(&self, provider: OAuthProvider) -> Result<Url, IdentityError> {
        let raw = self.url(&format!("{OAUTH_ENDPOINT_PREFIX}{provider}"));
        Url::parse(&raw).map_err(|e| IdentityError::Network {
            message: format!("invalid URL {raw}: {e}"),
        })
    }

    async fn post<B: Serialize + Sync>(
        &self,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response, IdentityError> {
        let mut request = self.client.post(self.url(endpoint));
        if let Some(body) = body {
            request = request.json(body);
        }
        request.send().await.map_err(|e| {
            tracing::error!(endpoint, error = %e, "Identity request failed");
            IdentityError::Network {
                message: e.to_string(),
            }
        })
    }

    async fn post_expecting_success<B: Serialize + Sync>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<(), IdentityError> {
        let response = self.post(endpoint, Some(body)).await?;
        check_status(endpoint, &response)
    }

    /// Whether an account exists for `email`.
    ///
    /// Any status other than 200 means no account.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Network`] if the service is unreachable.
    pub async fn check_user_exists(&self, email: &str) -> Result<bool, IdentityError> {
        let body = LookupBody {
            identifiers: Identifiers {
                email_address: email,
            },
        };
        let response = self.post(USER_INFO_ENDPOINT, Some(&body)).await?;
        let exists = response.status() == reqwest::StatusCode::OK;
        tracing::debug!(status = %response.status(), exists, "User lookup completed");
        Ok(exists)
    }

    /// Email a one-time password.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError`] if the request fails or is rejected.
    pub async fn send_otp(&self, email: &str, action: OtpAction) -> Result<(), IdentityError> {
        let body = OtpRequestBody {
            action,
            identifiers: Identifiers {
                email_address: email,
            },
            method: "email",
        };
        self.post_expecting_success(SEND_OTP_ENDPOINT, &body).await
    }

    /// Log in with a one-time password.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Rejected`] if the password is not accepted.
    pub async fn verify_otp(&self, email: &str, otp: &str) -> Result<(), IdentityError> {
        self.post_expecting_success(LOGIN_ENDPOINT, &credential_body(email, otp))
            .await
    }

    /// Create an account with a one-time password.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Rejected`] if registration is refused.
    pub async fn register_with_otp(&self, email: &str, otp: &str) -> Result<(), IdentityError> {
        self.post_expecting_success(REGISTER_ENDPOINT, &credential_body(email, otp))
            .await
    }

    /// The signed-in user's session, or `None` when nobody is signed in.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Network`] if the service is unreachable or
    /// the session body is not JSON.
    pub async fn current_user(&self) -> Result<Option<Value>, IdentityError> {
        let response = self
            .client
            .get(self.url(SESSION_ENDPOINT))
            .send()
            .await
            .map_err(|e| IdentityError::Network {
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            tracing::debug!(status = %response.status(), "No active session");
            return Ok(None);
        }

        response
            .json::<Value>()
            .await
            .map(Some)
            .map_err(|e| IdentityError::Network {
                message: format!("invalid session body: {e}"),
            })
    }

    /// End the current session.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError`] if the request fails or is rejected.
    pub async fn logout(&self) -> Result<(), IdentityError> {
        let response = self.post::<()>(LOGOUT_ENDPOINT, None).await?;
        check_status(LOGOUT_ENDPOINT, &response)
    }
}

fn credential_body<'a>(email: &'a str, otp: &'a str) -> CredentialBody<'a> {
    CredentialBody {
        identifiers: Identifiers {
            email_address: email,
        },
        validators: Validators { email_otp: otp },
    }
}

fn check_status(endpoint: &str, response: &reqwest::Response) -> Result<(), IdentityError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    tracing::warn!(endpoint, status = status.as_u16(), "Identity service rejected request");
    Err(IdentityError::Rejected {
        endpoint: endpoint.to_string(),
        status: status.as_u16(),
    })
}

#[async_trait]
impl IdentityProvider for IdentityClient {
    async fn check_user_exists(&self, email: &str) -> Result<bool, IdentityError> {
        Self::check_user_exists(self, email).await
    }

    async fn send_otp(&self, email: &str, action: OtpAction) -> Result<(), IdentityError> {
        Self::send_otp(self, email, action).await
    }

    async fn verify_otp(&self, email: &str, otp: &str) -> Result<(), IdentityError> {
        Self::verify_otp(self, email, otp).await
    }

    async fn register_with_otp(&self, email: &str, otp: &str) -> Result<(), IdentityError> {
        Self::register_with_otp(self, email, otp).await
    }
}
