//! Author records and story credits.

use serde::{Deserialize, Serialize};

use super::{null_as_default, Properties};

/// Social profile link on an author page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorSocialLink {
    /// Site name (`twitter`, `linkedin`, ...).
    #[serde(deserialize_with = "null_as_default")]
    pub site: String,
    /// Profile URL, null when unset in the CMS.
    pub url: Option<String>,
    /// Whether the site is deprecated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    /// Deprecation notice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecation_msg: Option<String>,
}

/// Author headshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct AuthorImage {
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
}

/// The author service's own record, as embedded by the CMS.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct AuthorProfile {
    #[serde(rename = "_id")]
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(deserialize_with = "null_as_default")]
    pub byline: String,
    #[serde(rename = "firstName")]
    #[serde(deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    #[serde(deserialize_with = "null_as_default")]
    pub last_name: String,
    pub image: Option<String>,
    pub expertise: Option<String>,
    pub location: Option<String>,
    pub role: Option<String>,
    pub email: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub bio: String,
    #[serde(rename = "longBio")]
    pub long_bio: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub last_updated_date: String,
    pub author_type: Option<String>,
    pub contributor: Option<bool>,
    #[serde(flatten)]
    pub extra: Properties,
}

/// Wrapper around [`AuthorProfile`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorProperties {
    /// Source profile.
    pub original: Option<AuthorProfile>,
}

/// Story author.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    /// Author id.
    #[serde(rename = "_id")]
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Record type.
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub kind: String,
    /// Schema version.
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    /// Display name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Organisation.
    pub org: Option<String>,
    /// Headshot.
    pub image: Option<AuthorImage>,
    /// Short bio.
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// Author page URL.
    pub url: Option<String>,
    /// Slug used by author listings.
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    /// Social links.
    #[serde(deserialize_with = "null_as_default")]
    pub social_links: Vec<AuthorSocialLink>,
    /// Social links under the legacy camel-case key.
    #[serde(rename = "socialLinks")]
    #[serde(deserialize_with = "null_as_default")]
    pub social_links_legacy: Vec<AuthorSocialLink>,
    /// Author service profile.
    #[serde(deserialize_with = "null_as_default")]
    pub additional_properties: AuthorProperties,
}

impl Author {
    /// Social links from whichever key the CMS populated.
    #[must_use]
    pub fn links(&self) -> &[AuthorSocialLink] {
        if self.social_links.is_empty() {
            &self.social_links_legacy
        } else {
            &self.social_links
        }
    }
}

/// Story credits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Credits {
    /// Bylined authors.
    #[serde(deserialize_with = "null_as_default")]
    pub by: Vec<Author>,
}
