//! Story body blocks (`content_elements`).

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{null_as_default, ImageCredits, Owner, Properties};

/// One block of a story body, tagged by its `type` field.
///
/// Block types this crate does not model, blocks without a `type` tag, and
/// blocks that do not match their type's schema all decode as
/// [`ContentElement::Unknown`] instead of failing the whole article.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ContentElement {
    /// Paragraph of HTML-flavoured text.
    #[serde(rename = "text")]
    Text(TextBlock),
    /// Sub-heading.
    #[serde(rename = "header")]
    Header(HeaderBlock),
    /// Inline image.
    #[serde(rename = "image")]
    Image(Image),
    /// Pull quote or block quote.
    #[serde(rename = "quote")]
    Quote(QuoteBlock),
    /// Ordered or unordered list.
    #[serde(rename = "list")]
    List(ListBlock),
    /// Unresolved reference to another document.
    #[serde(rename = "reference")]
    Reference(ReferenceBlock),
    /// Third-party oEmbed (YouTube, Twitter, ...).
    #[serde(rename = "oembed_response")]
    OEmbed(OEmbedBlock),
    /// Site-specific embed (video player, section break, ...).
    #[serde(rename = "custom_embed")]
    CustomEmbed(CustomEmbedBlock),
    /// Raw HTML passed through to the page.
    #[serde(rename = "raw_html")]
    RawHtml(RawHtmlBlock),
    /// Any other block type.
    #[serde(rename = "unknown")]
    Unknown,
}

impl<'de> Deserialize<'de> for ContentElement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(value))
    }
}

impl ContentElement {
    fn from_value(value: Value) -> Self {
        let kind = value.get("type").and_then(Value::as_str).map(str::to_owned);
        let decoded = match kind.as_deref() {
            Some("text") => serde_json::from_value(value).map(Self::Text),
            Some("header") => serde_json::from_value(value).map(Self::Header),
            Some("image") => serde_json::from_value(value).map(Self::Image),
            Some("quote") => serde_json::from_value(value).map(Self::Quote),
            Some("list") => serde_json::from_value(value).map(Self::List),
            Some("reference") => serde_json::from_value(value).map(Self::Reference),
            Some("oembed_response") => serde_json::from_value(value).map(Self::OEmbed),
            Some("custom_embed") => serde_json::from_value(value).map(Self::CustomEmbed),
            Some("raw_html") => serde_json::from_value(value).map(Self::RawHtml),
            _ => return Self::Unknown,
        };
        decoded.unwrap_or_else(|e| {
            tracing::debug!(kind = ?kind, error = %e, "Content element kept as unknown");
            Self::Unknown
        })
    }

    /// The `type` tag of this block.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Header(_) => "header",
            Self::Image(_) => "image",
            Self::Quote(_) => "quote",
            Self::List(_) => "list",
            Self::Reference(_) => "reference",
            Self::OEmbed(_) => "oembed_response",
            Self::CustomEmbed(_) => "custom_embed",
            Self::RawHtml(_) => "raw_html",
            Self::Unknown => "unknown",
        }
    }

    /// The block's `_id`, if it has one.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        let id = match self {
            Self::Text(b) => &b.id,
            Self::Header(b) => &b.id,
            Self::Image(b) => &b.id,
            Self::Quote(b) => &b.id,
            Self::List(b) => &b.id,
            Self::Reference(b) => &b.id,
            Self::OEmbed(b) => &b.id,
            Self::CustomEmbed(b) => &b.id,
            Self::RawHtml(b) => &b.id,
            Self::Unknown => return None,
        };
        Some(id.as_str()).filter(|id| !id.is_empty())
    }

    /// Text content of text and header blocks.
    #[must_use]
    pub fn plain_text(&self) -> Option<&str> {
        match self {
            Self::Text(b) => Some(&b.content),
            Self::Header(b) => Some(&b.content),
            _ => None,
        }
    }
}

/// Paragraph block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextBlock {
    /// Block id.
    #[serde(rename = "_id")]
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Open CMS properties.
    #[serde(deserialize_with = "null_as_default")]
    pub additional_properties: Properties,
    /// HTML content.
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
}

/// Heading block; `level` is 2 through 6.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderBlock {
    /// Block id.
    #[serde(rename = "_id")]
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Open CMS properties.
    #[serde(deserialize_with = "null_as_default")]
    pub additional_properties: Properties,
    /// Heading text.
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
    /// Heading level.
    #[serde(deserialize_with = "null_as_default")]
    pub level: u8,
}

/// Known image properties; anything else lands in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct ImageProperties {
    #[serde(rename = "fullSizeResizeUrl", skip_serializing_if = "Option::is_none")]
    pub full_size_resize_url: Option<String>,
    #[serde(rename = "resizeUrl", skip_serializing_if = "Option::is_none")]
    pub resize_url: Option<String>,
    #[serde(rename = "thumbnailResizeUrl", skip_serializing_if = "Option::is_none")]
    pub thumbnail_resize_url: Option<String>,
    #[serde(rename = "originalName", skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,
    #[serde(rename = "originalUrl", skip_serializing_if = "Option::is_none")]
    pub original_url: Option<String>,
    #[serde(rename = "proxyUrl", skip_serializing_if = "Option::is_none")]
    pub proxy_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restricted: Option<bool>,
    #[serde(rename = "takenOn", skip_serializing_if = "Option::is_none")]
    pub taken_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(flatten)]
    pub extra: Properties,
}

/// Postal location attached to an image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct Address {
    pub locality: Option<String>,
    pub region: Option<String>,
    pub country_name: Option<String>,
}

/// Origin system of a media item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct MediaSource {
    pub additional_properties: Option<Properties>,
    pub edit_url: Option<String>,
    pub system: Option<String>,
}

/// Image, used both as a body block and as a promo item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    /// Image id.
    #[serde(rename = "_id")]
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Image-specific CMS properties.
    #[serde(deserialize_with = "null_as_default")]
    pub additional_properties: ImageProperties,
    /// Where the photo was taken.
    pub address: Option<Address>,
    /// Alt text.
    pub alt_text: Option<String>,
    /// Caption.
    pub caption: Option<String>,
    /// Copyright line.
    pub copyright: Option<String>,
    /// Creation timestamp.
    pub created_date: Option<String>,
    /// Photographer and agency credits.
    pub credits: Option<ImageCredits>,
    /// Pixel height.
    pub height: Option<u32>,
    /// Pixel width.
    pub width: Option<u32>,
    /// Photo, graphic, ...
    pub image_type: Option<String>,
    /// Last update timestamp.
    pub last_updated_date: Option<String>,
    /// Whether the image may be licensed.
    pub licensable: Option<bool>,
    /// Owning organisation.
    pub owner: Option<Owner>,
    /// Slug.
    pub slug: Option<String>,
    /// Origin system.
    pub source: Option<MediaSource>,
    /// Subtitle.
    pub subtitle: Option<String>,
    /// Image URL.
    pub url: Option<String>,
    /// Schema version.
    pub version: Option<String>,
}

/// Citation under a quote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Citation {
    /// Citation text.
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
    /// Citation type.
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub kind: String,
}

/// One paragraph inside a quote.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteElement {
    /// Element id.
    #[serde(rename = "_id")]
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Open CMS properties.
    #[serde(deserialize_with = "null_as_default")]
    pub additional_properties: Properties,
    /// Text content.
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
    /// Element type.
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub kind: String,
}

/// Pull quote (`pullquote`) or block quote (`blockquote`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteBlock {
    /// Block id.
    #[serde(rename = "_id")]
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Open CMS properties.
    #[serde(deserialize_with = "null_as_default")]
    pub additional_properties: Properties,
    /// `pullquote` or `blockquote`.
    #[serde(deserialize_with = "null_as_default")]
    pub subtype: String,
    /// Attribution.
    pub citation: Option<Citation>,
    /// Quoted paragraphs.
    #[serde(deserialize_with = "null_as_default")]
    pub content_elements: Vec<QuoteElement>,
}

/// Properties of a list item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListItemProperties {
    /// Nesting depth.
    #[serde(deserialize_with = "null_as_default")]
    pub indent: u32,
}

/// One list entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct ListItem {
    #[serde(rename = "_id")]
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub additional_properties: ListItemProperties,
    #[serde(deserialize_with = "null_as_default")]
    pub alignment: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub kind: String,
}

/// Ordered or unordered list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListBlock {
    /// Block id.
    #[serde(rename = "_id")]
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Open CMS properties.
    #[serde(deserialize_with = "null_as_default")]
    pub additional_properties: Properties,
    /// `ordered` or `unordered`.
    #[serde(deserialize_with = "null_as_default")]
    pub list_type: String,
    /// Entries.
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<ListItem>,
}

/// Pointer from one document to another.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct Referent {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub provider: String,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referent_properties: Option<Properties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
}

/// Reference block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceBlock {
    /// Block id.
    #[serde(rename = "_id")]
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Open CMS properties.
    #[serde(deserialize_with = "null_as_default")]
    pub additional_properties: Properties,
    /// Target document.
    #[serde(deserialize_with = "null_as_default")]
    pub referent: Referent,
}

/// Raw oEmbed payload from the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct OEmbedRaw {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    pub author_name: Option<String>,
    pub author_url: Option<String>,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub kind: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub provider_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub provider_url: String,
    pub thumbnail_height: Option<u32>,
    pub thumbnail_width: Option<u32>,
    pub thumbnail_url: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub html: String,
}

/// Third-party embed; `subtype` names the provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OEmbedBlock {
    /// Block id.
    #[serde(rename = "_id")]
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Open CMS properties.
    #[serde(deserialize_with = "null_as_default")]
    pub additional_properties: Properties,
    /// `youtube`, `twitter`, `instagram`, `facebook`, `tiktok`.
    #[serde(deserialize_with = "null_as_default")]
    pub subtype: String,
    /// Provider payload.
    #[serde(deserialize_with = "null_as_default")]
    pub raw_oembed: OEmbedRaw,
    /// Source reference.
    #[serde(deserialize_with = "null_as_default")]
    pub referent: Referent,
}

/// Embed configuration; site-specific keys land in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct EmbedConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(rename = "videoCode", skip_serializing_if = "Option::is_none")]
    pub video_code: Option<String>,
    #[serde(flatten)]
    pub extra: Properties,
}

/// Embed target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct Embed {
    #[serde(deserialize_with = "null_as_default")]
    pub config: EmbedConfig,
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

/// Site-specific embed (`videoplayer`, `section_break`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomEmbedBlock {
    /// Block id.
    #[serde(rename = "_id")]
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Open CMS properties.
    #[serde(deserialize_with = "null_as_default")]
    pub additional_properties: Properties,
    /// Embed kind.
    #[serde(deserialize_with = "null_as_default")]
    pub subtype: String,
    /// Embed target.
    #[serde(deserialize_with = "null_as_default")]
    pub embed: Embed,
}

/// Raw HTML block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawHtmlBlock {
    /// Block id.
    #[serde(rename = "_id")]
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Open CMS properties.
    #[serde(deserialize_with = "null_as_default")]
    pub additional_properties: Properties,
    /// HTML markup.
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
}
