//! Sections, tags, and site placement.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{null_as_default, Properties};

/// Parent pointer of a section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionParent {
    /// Parent section id in the default hierarchy.
    #[serde(deserialize_with = "null_as_default")]
    pub default: String,
}

/// Site section (e.g. `/politics`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Section {
    /// Section id, which is also its path.
    #[serde(rename = "_id")]
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Website the section belongs to.
    #[serde(rename = "_website", skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
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
    /// URL path.
    #[serde(deserialize_with = "null_as_default")]
    pub path: String,
    /// Parent section id.
    #[serde(deserialize_with = "null_as_default")]
    pub parent_id: String,
    /// Parent pointer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<SectionParent>,
    /// Section service record (ancestors, ordering, SEO copy, ...).
    #[serde(deserialize_with = "null_as_default")]
    pub additional_properties: Properties,
    /// Website-qualified section id.
    #[serde(rename = "_website_section_id", skip_serializing_if = "Option::is_none")]
    pub website_section_id: Option<String>,
    /// Keys not modelled above.
    #[serde(flatten)]
    pub extra: Properties,
}

impl Section {
    /// The SEO meta description from the section service record, if any.
    #[must_use]
    pub fn meta_description(&self) -> Option<&str> {
        self.additional_properties
            .get("original")
            .and_then(|o| o.get("meta_description"))
            .and_then(serde_json::Value::as_str)
    }
}

/// Topic tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    /// Tag id.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Description.
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// Slug used by tag listings.
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    /// Display text.
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
}

/// Classification of a story.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct Taxonomy {
    pub primary_section: Option<Section>,
    pub primary_site: Option<Section>,
    #[serde(deserialize_with = "null_as_default")]
    pub sections: Vec<Section>,
    #[serde(deserialize_with = "null_as_default")]
    pub sites: Vec<Section>,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<Tag>,
}

/// Placement of a story on one website.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct Website {
    pub website_section: Option<Section>,
    #[serde(deserialize_with = "null_as_default")]
    pub website_url: String,
}

/// Placements keyed by website id.
pub type Websites = BTreeMap<String, Website>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_section_keeps_unknown_keys() {
        let section: Section = serde_json::from_value(json!({
            "_id": "/politics",
            "_website": "daily",
            "type": "section",
            "name": "Politics",
            "path": "/politics",
            "parent_id": "/",
            "parent": {"default": "/"},
            "additional_properties": {
                "original": {"meta_description": "Politics news", "inactive": false}
            },
            "navigation": {"nav_title": "Politics"}
        }))
        .unwrap();

        assert_eq!(section.website.as_deref(), Some("daily"));
        assert_eq!(section.parent.as_ref().unwrap().default, "/");
        assert_eq!(section.meta_description(), Some("Politics news"));
        assert!(section.extra.contains_key("navigation"));
    }

    #[test]
    fn test_partial_section_from_field_selection() {
        let section: Section = serde_json::from_value(json!({"_id": "/sport"})).unwrap();
        assert_eq!(section.id, "/sport");
        assert!(section.name.is_empty());
        assert_eq!(section.meta_description(), None);
    }
}
