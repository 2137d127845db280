//! Trait definitions for mockable dependencies.
//!
//! This module defines traits for:
//! - [`ContentSource`]: the typed content queries
//! - [`IdentityProvider`]: the identity service calls behind email login
//!
//! # Mocking
//!
//! All traits are annotated with `#[cfg_attr(test, mockall::automock)]`
//! which generates mock implementations automatically for testing.

use async_trait::async_trait;

use crate::content::{ApiResponse, ArticleBy, CollectionBy, FieldSelection, ListOptions};
use crate::error::{ApiError, IdentityError};
use crate::identity::OtpAction;
use crate::model::{Article, Collection, Section};

/// Typed content queries.
///
/// Implemented by [`ContentApi`](crate::content::ContentApi); consumers take
/// `&impl ContentSource` so a fake can stand in under test.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Get a collection by alias or id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    async fn get_collection(
        &self,
        identifier: &str,
        by: CollectionBy,
        fields: Option<FieldSelection>,
    ) -> Result<ApiResponse<Collection>, ApiError>;

    /// Get a story by slug or id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    async fn get_article(
        &self,
        identifier: &str,
        by: ArticleBy,
        fields: Option<FieldSelection>,
    ) -> Result<ApiResponse<Article>, ApiError>;

    /// List stories carrying a tag.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    async fn list_articles_by_tag(
        &self,
        tag_slug: &str,
        options: ListOptions,
    ) -> Result<ApiResponse<Vec<Article>>, ApiError>;

    /// List stories by an author.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    async fn list_articles_by_author(
        &self,
        author_slug: &str,
        options: ListOptions,
    ) -> Result<ApiResponse<Vec<Article>>, ApiError>;

    /// List all stories.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    async fn list_stories(&self, options: ListOptions)
        -> Result<ApiResponse<Vec<Article>>, ApiError>;

    /// Get a section by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    async fn get_section(
        &self,
        section_id: &str,
        fields: Option<FieldSelection>,
    ) -> Result<ApiResponse<Section>, ApiError>;
}

/// Identity service calls used by the email one-time-password flow.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Whether an account exists for `email`.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError`] on transport failure.
    async fn check_user_exists(&self, email: &str) -> Result<bool, IdentityError>;

    /// Email a one-time password for `action`.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError`] if the service rejects the request.
    async fn send_otp(&self, email: &str, action: OtpAction) -> Result<(), IdentityError>;

    /// Log in with a one-time password.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError`] if the password is rejected.
    async fn verify_otp(&self, email: &str, otp: &str) -> Result<(), IdentityError>;

    /// Create an account with a one-time password.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError`] if the password is rejected.
    async fn register_with_otp(&self, email: &str, otp: &str) -> Result<(), IdentityError>;
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;

    assert_impl_all!(MockContentSource: Send, Sync);
    assert_impl_all!(MockIdentityProvider: Send, Sync);

    #[tokio::test]
    async fn test_mock_content_source_returns_configured_error() {
        let mut mock = MockContentSource::new();
        mock.expect_get_section()
            .withf(|id, fields| id == "/missing" && fields.is_none())
            .returning(|_, _| {
                Err(ApiError::Http {
                    status: 404,
                    status_text: "Not Found".into(),
                })
            });

        let err = mock.get_section("/missing", None).await.unwrap_err();
        assert_eq!(err.status(), 404);
    }

    #[tokio::test]
    async fn test_mock_identity_provider() {
        let mut mock = MockIdentityProvider::new();
        mock.expect_check_user_exists()
            .returning(|email| Ok(email.ends_with("@example.com")));

        assert!(mock.check_user_exists("a@example.com").await.unwrap_or(false));
        assert!(!mock.check_user_exists("a@other.org").await.unwrap_or(true));
    }
}
