//! CMS record schemas.
//!
//! Passive data only: stories, collections, authors, sections, tags, and the
//! story body blocks. Known fields are typed; anything the CMS adds later is
//! kept in open [`Properties`] maps rather than rejected.

mod article;
mod author;
mod blocks;
mod taxonomy;

pub use article::{
    Article, ArticleProperties, BasicText, Collection, Distributor, Headlines, Label, Planning,
    PromoItem, PromoItems, RelatedContent, RelatedRef, Revision, Rubric, SourceSystem,
    StoryLength, Workflow,
};
pub use author::{Author, AuthorImage, AuthorProfile, AuthorProperties, AuthorSocialLink, Credits};
pub use blocks::{
    Address, Citation, ContentElement, CustomEmbedBlock, Embed, EmbedConfig, HeaderBlock, Image,
    ImageProperties, ListBlock, ListItem, ListItemProperties, MediaSource, OEmbedBlock, OEmbedRaw,
    QuoteBlock, QuoteElement, RawHtmlBlock, ReferenceBlock, Referent, TextBlock,
};
pub use taxonomy::{Section, SectionParent, Tag, Taxonomy, Website, Websites};

use serde::{Deserialize, Deserializer, Serialize};

/// Open, string-keyed record for CMS properties without a fixed schema.
pub type Properties = serde_json::Map<String, serde_json::Value>;

/// Field decoder that reads JSON `null` as the type's default.
///
/// `#[serde(default)]` only covers missing keys; the CMS also sends explicit
/// nulls for unset fields.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Owning organisation of a story or media item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Owner {
    /// Organisation id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Whether the content is sponsored.
    #[serde(deserialize_with = "null_as_default")]
    pub sponsored: bool,
}

/// Named party in an image credit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct CreditEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub byline: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub kind: String,
}

/// Agency affiliation in an image credit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct Affiliation {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub kind: String,
}

/// Photographer and agency credits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageCredits {
    /// Agencies.
    #[serde(deserialize_with = "null_as_default")]
    pub affiliation: Vec<Affiliation>,
    /// Photographers.
    #[serde(deserialize_with = "null_as_default")]
    pub by: Vec<CreditEntry>,
}
