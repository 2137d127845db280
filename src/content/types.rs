//! Request options and the uniform response shape of the content API.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::params::ParamValue;

/// Page window for list endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Maximum number of records.
    pub limit: Option<u32>,
    /// Number of records to skip.
    pub offset: Option<u32>,
}

impl Pagination {
    /// Create a pagination window.
    #[must_use]
    pub const fn new(limit: u32, offset: u32) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
        }
    }
}

/// Sort order for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

impl SortDirection {
    /// Wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort field and direction. Either half may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortParams {
    /// Attribute to sort by.
    pub sort_field: Option<String>,
    /// Direction to sort in.
    pub sort_direction: Option<SortDirection>,
}

impl SortParams {
    /// Sort by `field` in `direction`.
    #[must_use]
    pub fn by(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            sort_field: Some(field.into()),
            sort_direction: Some(direction),
        }
    }
}

/// Comma-delimited list of attributes the CMS should return.
///
/// ```
/// use newsroom_content::content::FieldSelection;
///
/// let fields: FieldSelection = ["_id", "headlines.basic"].into_iter().collect();
/// assert_eq!(fields.as_str(), "_id,headlines.basic");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSelection(String);

impl FieldSelection {
    /// Use an already comma-delimited list verbatim.
    #[must_use]
    pub fn new(fields: impl Into<String>) -> Self {
        Self(fields.into())
    }

    /// The comma-delimited list.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when no attribute is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for FieldSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let joined = iter
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(",");
        Self(joined)
    }
}

impl fmt::Display for FieldSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Options shared by the list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    /// Page window.
    #[serde(flatten)]
    pub pagination: Pagination,
    /// Field selection.
    pub fields: Option<FieldSelection>,
    /// Sort order.
    #[serde(flatten)]
    pub sort: SortParams,
}

impl ListOptions {
    /// Create empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page window.
    #[must_use]
    pub const fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }

    /// Set the limit.
    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.pagination.limit = Some(limit);
        self
    }

    /// Set the offset.
    #[must_use]
    pub const fn with_offset(mut self, offset: u32) -> Self {
        self.pagination.offset = Some(offset);
        self
    }

    /// Set the field selection.
    #[must_use]
    pub fn with_fields(mut self, fields: FieldSelection) -> Self {
        self.fields = Some(fields);
        self
    }

    /// Set the sort order.
    #[must_use]
    pub fn with_sort(mut self, sort: SortParams) -> Self {
        self.sort = sort;
        self
    }
}

/// How [`get_collection`](super::ContentApi::get_collection) identifies a collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollectionBy {
    /// By content alias (`content_alias`).
    #[default]
    Alias,
    /// By CMS id (`id`).
    Id,
}

impl CollectionBy {
    /// Query parameter carrying the identifier.
    #[must_use]
    pub const fn param(self) -> &'static str {
        match self {
            Self::Alias => "content_alias",
            Self::Id => "id",
        }
    }
}

/// How [`get_article`](super::ContentApi::get_article) identifies an article.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ArticleBy {
    /// By canonical URL slug (`canonical_url`).
    #[default]
    Slug,
    /// By CMS id (`id`).
    Id,
}

impl ArticleBy {
    /// Query parameter carrying the identifier.
    #[must_use]
    pub const fn param(self) -> &'static str {
        match self {
            Self::Slug => "canonical_url",
            Self::Id => "id",
        }
    }
}

/// Pagination echo and element count attached to every successful response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseMeta {
    /// Element count, present only when the data is list-shaped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
    /// The `limit` the caller sent, unvalidated and unconverted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<ParamValue>,
    /// The `offset` the caller sent, unvalidated and unconverted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<ParamValue>,
}

/// Uniform success value: unwrapped data plus [`ResponseMeta`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Unwrapped response data.
    pub data: T,
    /// Response metadata.
    pub meta: ResponseMeta,
}

impl<T> ApiResponse<T> {
    /// Transform the data, keeping the metadata.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            data: f(self.data),
            meta: self.meta,
        }
    }
}
