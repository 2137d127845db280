//! Stories and collections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    null_as_default, ContentElement, Credits, Image, Owner, Properties, Section, Tag, Taxonomy,
    Websites,
};

/// Publication flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct ArticleProperties {
    #[serde(deserialize_with = "null_as_default")]
    pub has_published_copy: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_published: bool,
    pub publish_date: Option<String>,
    #[serde(flatten)]
    pub extra: Properties,
}

/// A single `basic` text variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicText {
    /// Default text.
    #[serde(deserialize_with = "null_as_default")]
    pub basic: String,
}

/// Headline variants per surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct Headlines {
    #[serde(deserialize_with = "null_as_default")]
    pub basic: String,
    #[serde(deserialize_with = "null_as_default")]
    pub meta_title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mobile: String,
    #[serde(deserialize_with = "null_as_default")]
    pub native: String,
    #[serde(deserialize_with = "null_as_default")]
    pub print: String,
    #[serde(deserialize_with = "null_as_default")]
    pub table: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tablet: String,
    #[serde(deserialize_with = "null_as_default")]
    pub web: String,
}

/// Syndication source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct Distributor {
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subcategory: String,
}

/// Kicker shown above a headline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct Rubric {
    #[serde(deserialize_with = "null_as_default")]
    pub display: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
}

/// Story labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct Label {
    pub rubric: Option<Rubric>,
}

/// Measured story length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct StoryLength {
    pub character_count_actual: Option<u64>,
    pub inch_count_actual: Option<f64>,
    pub line_count_actual: Option<u64>,
    pub word_count_actual: Option<u64>,
}

/// Editorial planning data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct Planning {
    pub scheduling: Option<Properties>,
    pub story_length: Option<StoryLength>,
}

/// Lead image and video.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromoItems {
    /// Square crop.
    #[serde(rename = "1_1", skip_serializing_if = "Option::is_none")]
    pub square: Option<PromoItem>,
    /// Default lead image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic: Option<PromoItem>,
    /// Lead video embed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<ContentElement>,
}

/// Image used as a promo, with its derivation chain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromoItem {
    /// Record type.
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub kind: String,
    /// The image itself.
    #[serde(flatten)]
    pub image: Image,
    /// Derivation references.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_content: Option<Properties>,
}

/// Link to a related document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct RelatedRef {
    #[serde(rename = "_id")]
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub referent: super::Referent,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub kind: String,
}

/// Related documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct RelatedContent {
    #[serde(deserialize_with = "null_as_default")]
    pub basic: Vec<RelatedRef>,
    #[serde(rename = "clonedChildren")]
    #[serde(deserialize_with = "null_as_default")]
    pub cloned_children: Vec<Value>,
    #[serde(rename = "clonedFromParent")]
    #[serde(deserialize_with = "null_as_default")]
    pub cloned_from_parent: Vec<Value>,
}

/// Revision metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct Revision {
    #[serde(deserialize_with = "null_as_default")]
    pub branch: String,
    #[serde(deserialize_with = "null_as_default")]
    pub editions: Vec<String>,
    pub parent_id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub published: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub revision_id: String,
}

/// Originating system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct SourceSystem {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub source_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub system: String,
}

/// Workflow state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Workflow {
    /// Numeric status code.
    #[serde(deserialize_with = "null_as_default")]
    pub status_code: i64,
}

/// A story.
///
/// Every field tolerates absence: a request with a field selection returns
/// only the selected attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Article {
    /// Story id.
    #[serde(rename = "_id")]
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Publication flags.
    #[serde(deserialize_with = "null_as_default")]
    pub additional_properties: ArticleProperties,
    /// Dateline location.
    #[serde(deserialize_with = "null_as_default")]
    pub address: Properties,
    /// Website the canonical URL belongs to.
    #[serde(deserialize_with = "null_as_default")]
    pub canonical_website: String,
    /// Story body.
    #[serde(deserialize_with = "null_as_default")]
    pub content_elements: Vec<ContentElement>,
    /// Copyright line.
    #[serde(deserialize_with = "null_as_default")]
    pub copyright: String,
    /// Creation timestamp.
    #[serde(deserialize_with = "null_as_default")]
    pub created_date: String,
    /// Bylines.
    #[serde(deserialize_with = "null_as_default")]
    pub credits: Credits,
    /// Standfirst.
    #[serde(deserialize_with = "null_as_default")]
    pub description: BasicText,
    /// Date shown to readers.
    #[serde(deserialize_with = "null_as_default")]
    pub display_date: String,
    /// Syndication source.
    pub distributor: Option<Distributor>,
    /// First publication timestamp.
    pub first_publish_date: Option<String>,
    /// Geotag.
    #[serde(deserialize_with = "null_as_default")]
    pub geo: Properties,
    /// Headline variants.
    #[serde(deserialize_with = "null_as_default")]
    pub headlines: Headlines,
    /// Labels.
    pub label: Option<Label>,
    /// Language code.
    #[serde(deserialize_with = "null_as_default")]
    pub language: String,
    /// Last update timestamp.
    #[serde(deserialize_with = "null_as_default")]
    pub last_updated_date: String,
    /// Owning organisation.
    #[serde(deserialize_with = "null_as_default")]
    pub owner: Owner,
    /// Editorial planning.
    pub planning: Option<Planning>,
    /// Lead media.
    #[serde(deserialize_with = "null_as_default")]
    pub promo_items: PromoItems,
    /// Publication timestamp.
    #[serde(deserialize_with = "null_as_default")]
    pub publish_date: String,
    /// Related documents.
    pub related_content: Option<RelatedContent>,
    /// Revision metadata.
    pub revision: Option<Revision>,
    /// Originating system.
    pub source: Option<SourceSystem>,
    /// Subheadline.
    #[serde(deserialize_with = "null_as_default")]
    pub subheadlines: BasicText,
    /// Story subtype.
    #[serde(deserialize_with = "null_as_default")]
    pub subtype: String,
    /// Classification.
    #[serde(deserialize_with = "null_as_default")]
    pub taxonomy: Taxonomy,
    /// Record type.
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub kind: String,
    /// Schema version.
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    /// Placements per website.
    #[serde(deserialize_with = "null_as_default")]
    pub websites: Websites,
    /// Workflow state.
    pub workflow: Option<Workflow>,
    /// Canonical path, also the slug used for lookups.
    #[serde(deserialize_with = "null_as_default")]
    pub canonical_url: String,
    /// Scheduled publishing operations.
    pub publishing: Option<Properties>,
    /// Website id.
    pub website: Option<String>,
    /// URL on `website`.
    pub website_url: Option<String>,
    /// Keys not modelled above.
    #[serde(flatten)]
    pub extra: Properties,
}

impl Article {
    /// Best headline: `basic`, falling back to `web`.
    #[must_use]
    pub fn headline(&self) -> &str {
        if self.headlines.basic.is_empty() {
            &self.headlines.web
        } else {
            &self.headlines.basic
        }
    }

    /// Topic tags.
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.taxonomy.tags
    }

    /// Primary section, if classified.
    #[must_use]
    pub const fn primary_section(&self) -> Option<&Section> {
        self.taxonomy.primary_section.as_ref()
    }

    /// Names of the bylined authors, in byline order.
    #[must_use]
    pub fn author_names(&self) -> Vec<&str> {
        self.credits.by.iter().map(|a| a.name.as_str()).collect()
    }

    /// Publication time, from `publish_date` or else `display_date`.
    ///
    /// Returns `None` when neither parses as RFC 3339.
    #[must_use]
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        [self.publish_date.as_str(), self.display_date.as_str()]
            .into_iter()
            .find_map(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Word count recorded by the planning tool.
    #[must_use]
    pub fn word_count(&self) -> Option<u64> {
        self.planning
            .as_ref()
            .and_then(|p| p.story_length)
            .and_then(|l| l.word_count_actual)
    }
}

/// Curated list of stories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Collection {
    /// Collection id.
    #[serde(rename = "_id")]
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Schema version.
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    /// Creation timestamp.
    #[serde(deserialize_with = "null_as_default")]
    pub created_date: String,
    /// Collection title.
    #[serde(deserialize_with = "null_as_default")]
    pub headlines: BasicText,
    /// Last update timestamp.
    #[serde(deserialize_with = "null_as_default")]
    pub last_updated_date: String,
    /// Record type.
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub kind: String,
    /// Owning website.
    #[serde(deserialize_with = "null_as_default")]
    pub canonical_website: String,
    /// Stories in display order.
    #[serde(deserialize_with = "null_as_default")]
    pub content_elements: Vec<Article>,
    /// Keys not modelled above.
    #[serde(flatten)]
    pub extra: Properties,
}
