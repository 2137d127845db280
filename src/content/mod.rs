//! Content API client.
//!
//! Typed queries for collections, stories, story lists and sections, all
//! built on one primitive, [`ContentApi::request`], which:
//!
//! - joins the endpoint onto the base URL and appends the present parameters
//! - attaches the service-credential headers when both halves are configured
//! - bounds the whole exchange by a fixed deadline
//! - strips the `{"result": {"content": ...}}` / `{"result": ...}` envelope
//! - reports every failure as one classified [`ApiError`](crate::error::ApiError)
//!
//! # Example
//!
//! ```no_run
//! use newsroom_content::content::{ArticleBy, ClientConfig, ContentApi, ListOptions};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let api = ContentApi::new(
//!     ClientConfig::new("https://cms.example.com").with_credentials("client-id", "client-secret"),
//! )?;
//!
//! let story = api.get_article("my-story-slug", ArticleBy::Slug, None).await?;
//! println!("{}", story.data.headline());
//!
//! let page = api
//!     .list_articles_by_tag("politics", ListOptions::new().with_limit(10).with_offset(20))
//!     .await?;
//! println!("{} stories", page.meta.total.unwrap_or(0));
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod envelope;
mod params;
mod types;

pub use client::{
    ContentApi, COLLECTIONS_ENDPOINT, SECTIONS_ENDPOINT, STORIES_ENDPOINT, STORY_LIST_ENDPOINT,
};
pub use config::{ClientConfig, CLIENT_ID_HEADER, CLIENT_SECRET_HEADER, DEFAULT_TIMEOUT_MS};
pub use envelope::{unwrap_envelope, EnvelopeShape};
pub use params::{ParamValue, QueryParams};
pub use types::{
    ApiResponse, ArticleBy, CollectionBy, FieldSelection, ListOptions, Pagination, ResponseMeta,
    SortDirection, SortParams,
};
