//! Content API client.
//!
//! This module provides:
//! - URL and query string construction against the configured base
//! - Service-credential headers for the access proxy
//! - A fixed per-call deadline
//! - Envelope unwrapping and error classification

#![allow(clippy::missing_errors_doc)]

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

use super::config::{ClientConfig, CLIENT_ID_HEADER, CLIENT_SECRET_HEADER};
use super::envelope::unwrap_envelope;
use super::params::QueryParams;
use super::types::{ApiResponse, ArticleBy, CollectionBy, FieldSelection, ListOptions, ResponseMeta};
use crate::config::validation::check_absolute_url;
use crate::config::{Config, CLIENT_ID_VAR, CLIENT_SECRET_VAR, CONTENT_API_URL_VAR};
use crate::error::{ApiError, ConfigError};
use crate::model::{Article, Collection, Section};
use crate::traits::ContentSource;

/// Collections endpoint.
pub const COLLECTIONS_ENDPOINT: &str = "/collections";
/// Single-story endpoint.
pub const STORIES_ENDPOINT: &str = "/stories";
/// Story listing endpoint.
pub const STORY_LIST_ENDPOINT: &str = "/stories/list";
/// Sections endpoint.
pub const SECTIONS_ENDPOINT: &str = "/sections";

/// Client for the headless CMS content API.
///
/// Holds only immutable configuration, so one instance can serve any number
/// of concurrent calls. There is no retry and no caching: each call is one
/// GET.
#[derive(Debug, Clone)]
pub struct ContentApi {
    client: Client,
    base_url: Url,
    config: ClientConfig,
}

/// Why a call failed, before classification.
#[derive(Debug)]
enum Failure {
    Classified(ApiError),
    DeadlineElapsed,
    InvalidUrl(String),
    Transport(reqwest::Error),
    Body(serde_json::Error),
}

impl Failure {
    fn classify(self, timeout_ms: u64) -> ApiError {
        match self {
            Self::Classified(err) => err,
            Self::DeadlineElapsed => ApiError::Timeout { timeout_ms },
            Self::Transport(e) if e.is_timeout() => ApiError::Timeout { timeout_ms },
            Self::Transport(e) => ApiError::Network {
                cause: error_chain(&e),
            },
            Self::InvalidUrl(cause) => ApiError::Network { cause },
            Self::Body(e) => ApiError::Network {
                cause: format!("invalid response body: {e}"),
            },
        }
    }
}

/// Render an error and its sources as `outer: inner: ...`.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

impl ContentApi {
    /// Create a new content client.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequired`] when the base URL is empty and
    /// [`ConfigError::InvalidValue`] when it is not an absolute URL or the
    /// credentials cannot be sent as header values.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        if config.base_url.trim().is_empty() {
            return Err(ConfigError::MissingRequired {
                var: CONTENT_API_URL_VAR.into(),
            });
        }
        let base_url = check_absolute_url(CONTENT_API_URL_VAR, config.base_url.trim())?;

        let client = Client::builder()
            .default_headers(Self::default_headers(&config)?)
            .build()
            .map_err(|e| ConfigError::InvalidValue {
                var: "http client".into(),
                reason: format!("failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url,
            config,
        })
    }

    /// Create a client from the application configuration.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Self::new(ClientConfig::from(config))
    }

    /// Get the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Per-call deadline.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.config.timeout_ms)
    }

    fn default_headers(config: &ClientConfig) -> Result<HeaderMap, ConfigError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some((id, secret)) = config.credentials() {
            let invalid = |var: &str| ConfigError::InvalidValue {
                var: var.into(),
                reason: "not a valid header value".into(),
            };
            let id_value = HeaderValue::from_str(id).map_err(|_| invalid(CLIENT_ID_VAR))?;
            let mut secret_value =
                HeaderValue::from_str(secret.expose()).map_err(|_| invalid(CLIENT_SECRET_VAR))?;
            secret_value.set_sensitive(true);

            headers.insert(header_name(CLIENT_ID_HEADER)?, id_value);
            headers.insert(header_name(CLIENT_SECRET_HEADER)?, secret_value);
        }

        Ok(headers)
    }

    /// Fetch `endpoint` with `params` and normalize the result.
    ///
    /// The shared primitive behind every typed query. Absent and null
    /// parameters are dropped; the body is unwrapped from its envelope and
    /// decoded as `T`; `meta.limit`/`meta.offset` echo `params`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &QueryParams,
    ) -> Result<ApiResponse<T>, ApiError> {
        let start = Instant::now();
        let timeout_ms = self.config.timeout_ms;

        let outcome = match tokio::time::timeout(self.timeout(), self.exchange(endpoint, params)).await
        {
            Ok(result) => result,
            Err(_) => Err(Failure::DeadlineElapsed),
        };
        let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        outcome.map_err(|failure| {
            let err = failure.classify(timeout_ms);
            match &err {
                ApiError::Http { status, .. } => tracing::warn!(
                    endpoint,
                    status,
                    elapsed_ms,
                    "Content API returned an error status"
                ),
                ApiError::Timeout { .. } => tracing::error!(
                    endpoint,
                    elapsed_ms,
                    timeout_ms,
                    "Content API request timed out"
                ),
                ApiError::Network { .. } | ApiError::Unknown => tracing::error!(
                    endpoint,
                    elapsed_ms,
                    error = %err,
                    "Content API request failed"
                ),
            }
            err
        })
    }

    /// One GET, from URL construction to decoded body.
    async fn exchange<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &QueryParams,
    ) -> Result<ApiResponse<T>, Failure> {
        let url = self.build_url(endpoint, params)?;
        let start = Instant::now();

        tracing::debug!(
            url = %url,
            timeout_ms = self.config.timeout_ms,
            "Starting content API request"
        );

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(Failure::Transport)?;

        let status = response.status();
        tracing::debug!(
            url = %url,
            status = %status,
            elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
            "Content API response received"
        );

        if !status.is_success() {
            return Err(Failure::Classified(http_error(status)));
        }

        let bytes = response.bytes().await.map_err(Failure::Transport)?;
        let body: serde_json::Value = serde_json::from_slice(&bytes).map_err(Failure::Body)?;

        let data = unwrap_envelope(body);
        let total = data.as_array().map(Vec::len);
        let data = serde_json::from_value(data).map_err(Failure::Body)?;

        Ok(ApiResponse {
            data,
            meta: ResponseMeta {
                total,
                limit: params.limit().cloned(),
                offset: params.offset().cloned(),
            },
        })
    }

    fn build_url(&self, endpoint: &str, params: &QueryParams) -> Result<Url, Failure> {
        let mut url = self
            .base_url
            .join(endpoint)
            .map_err(|e| Failure::InvalidUrl(format!("invalid endpoint {endpoint:?}: {e}")))?;

        let pairs: Vec<(&str, String)> = params.present().collect();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url)
    }

    /// Get a collection by alias or id.
    pub async fn get_collection(
        &self,
        identifier: &str,
        by: CollectionBy,
        fields: Option<FieldSelection>,
    ) -> Result<ApiResponse<Collection>, ApiError> {
        let params = QueryParams::new()
            .with_opt("fields", fields.filter(|f| !f.is_empty()))
            .with(by.param(), identifier);
        self.request(COLLECTIONS_ENDPOINT, &params).await
    }

    /// Get a story by canonical URL slug or id.
    pub async fn get_article(
        &self,
        identifier: &str,
        by: ArticleBy,
        fields: Option<FieldSelection>,
    ) -> Result<ApiResponse<Article>, ApiError> {
        let params = QueryParams::new()
            .with_opt("fields", fields.filter(|f| !f.is_empty()))
            .with(by.param(), identifier);
        self.request(STORIES_ENDPOINT, &params).await
    }

    /// List stories carrying a tag.
    pub async fn list_articles_by_tag(
        &self,
        tag_slug: &str,
        options: ListOptions,
    ) -> Result<ApiResponse<Vec<Article>>, ApiError> {
        let params = QueryParams::new()
            .with("tag_slug", tag_slug)
            .with_list_options(options);
        self.request(STORY_LIST_ENDPOINT, &params).await
    }

    /// List stories by an author.
    pub async fn list_articles_by_author(
        &self,
        author_slug: &str,
        options: ListOptions,
    ) -> Result<ApiResponse<Vec<Article>>, ApiError> {
        let params = QueryParams::new()
            .with("author_slug", author_slug)
            .with_list_options(options);
        self.request(STORY_LIST_ENDPOINT, &params).await
    }

    /// List all stories.
    pub async fn list_stories(
        &self,
        options: ListOptions,
    ) -> Result<ApiResponse<Vec<Article>>, ApiError> {
        let params = QueryParams::new().with_list_options(options);
        self.request(STORY_LIST_ENDPOINT, &params).await
    }

    /// Get a section by id.
    pub async fn get_section(
        &self,
        section_id: &str,
        fields: Option<FieldSelection>,
    ) -> Result<ApiResponse<Section>, ApiError> {
        let params = QueryParams::new()
            .with("id", section_id)
            .with_opt("fields", fields.filter(|f| !f.is_empty()));
        self.request(SECTIONS_ENDPOINT, &params).await
    }
}

fn header_name(name: &str) -> Result<HeaderName, ConfigError> {
    HeaderName::from_bytes(name.as_bytes()).map_err(|e| ConfigError::InvalidValue {
        var: name.into(),
        reason: e.to_string(),
    })
}

fn http_error(status: StatusCode) -> ApiError {
    ApiError::Http {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or_default().to_string(),
    }
}

#[async_trait]
impl ContentSource for ContentApi {
    async fn get_collection(
        &self,
        identifier: &str,
        by: CollectionBy,
        fields: Option<FieldSelection>,
    ) -> Result<ApiResponse<Collection>, ApiError> {
        Self::get_collection(self, identifier, by, fields).await
    }

    async fn get_article(
        &self,
        identifier: &str,
        by: ArticleBy,
        fields: Option<FieldSelection>,
    ) -> Result<ApiResponse<Article>, ApiError> {
        Self::get_article(self, identifier, by, fields).await
    }

    async fn list_articles_by_tag(
        &self,
        tag_slug: &str,
        options: ListOptions,
    ) -> Result<ApiResponse<Vec<Article>>, ApiError> {
        Self::list_articles_by_tag(self, tag_slug, options).await
    }

    async fn list_articles_by_author(
        &self,
        author_slug: &str,
        options: ListOptions,
    ) -> Result<ApiResponse<Vec<Article>>, ApiError> {
        Self::list_articles_by_author(self, author_slug, options).await
    }

    async fn list_stories(&self, options: ListOptions) -> Result<ApiResponse<Vec<Article>>, ApiError> {
        Self::list_stories(self, options).await
    }

    async fn get_section(
        &self,
        section_id: &str,
        fields: Option<FieldSelection>,
    ) -> Result<ApiResponse<Section>, ApiError> {
        Self::get_section(self, section_id, fields).await
    }
}

/// Blanket implementation for `Arc<ContentApi>`.
#[async_trait]
impl ContentSource for Arc<ContentApi> {
    async fn get_collection(
        &self,
        identifier: &str,
        by: CollectionBy,
        fields: Option<FieldSelection>,
    ) -> Result<ApiResponse<Collection>, ApiError> {
        self.as_ref().get_collection(identifier, by, fields).await
    }

    async fn get_article(
        &self,
        identifier: &str,
        by: ArticleBy,
        fields: Option<FieldSelection>,
    ) -> Result<ApiResponse<Article>, ApiError> {
        self.as_ref().get_article(identifier, by, fields).await
    }

    async fn list_articles_by_tag(
        &self,
        tag_slug: &str,
        options: ListOptions,
    ) -> Result<ApiResponse<Vec<Article>>, ApiError> {
        self.as_ref().list_articles_by_tag(tag_slug, options).await
    }

    async fn list_articles_by_author(
        &self,
        author_slug: &str,
        options: ListOptions,
    ) -> Result<ApiResponse<Vec<Article>>, ApiError> {
        self.as_ref()
            .list_articles_by_author(author_slug, options)
            .await
    }

    async fn list_stories(&self, options: ListOptions) -> Result<ApiResponse<Vec<Article>>, ApiError> {
        self.as_ref().list_stories(options).await
    }

    async fn get_section(
        &self,
        section_id: &str,
        fields: Option<FieldSelection>,
    ) -> Result<ApiResponse<Section>, ApiError> {
        self.as_ref().get_section(section_id, fields).await
    }
}
