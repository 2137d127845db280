//! Test utilities and mock factories.
//!
//! This module provides shared testing infrastructure:
//! - CMS record fixtures as raw JSON
//! - Mock content sources with canned responses
//!
//! Only compiled for tests (`#[cfg(test)]`).

#![allow(clippy::unwrap_used, clippy::expect_used)]

use serde_json::{json, Value};

use crate::content::{ApiResponse, ParamValue, ResponseMeta};
use crate::error::ApiError;
use crate::model::Article;
use crate::traits::MockContentSource;

/// A complete story record as the CMS returns it.
///
/// Headline "Council approves budget", one byline ("Sam Reporter"), tagged
/// `politics` in section `/politics`, three body blocks, 420 words.
#[must_use]
pub fn sample_article_json(id: &str) -> Value {
    json!({
        "_id": id,
        "type": "story",
        "version": "0.10.9",
        "canonical_url": format!("/politics/2024/03/05/{id}/"),
        "canonical_website": "daily",
        "display_date": "2024-03-05T10:00:00Z",
        "publish_date": "2024-03-05T10:05:00Z",
        "headlines": {
            "basic": "Council approves budget",
            "web": "Council approves next year's budget"
        },
        "description": {"basic": "The vote passed 7-2 after a long session."},
        "credits": {
            "by": [{
                "_id": "sam-reporter",
                "type": "author",
                "name": "Sam Reporter",
                "slug": "sam-reporter"
            }]
        },
        "taxonomy": {
            "primary_section": {
                "_id": "/politics",
                "_website": "daily",
                "type": "section",
                "name": "Politics",
                "path": "/politics"
            },
            "tags": [
                {"slug": "politics", "text": "Politics"},
                {"slug": "local-government", "text": "Local government"}
            ]
        },
        "content_elements": [
            {"_id": "p1", "type": "text", "content": "The council met on Tuesday."},
            {"_id": "h1", "type": "header", "content": "What changes", "level": 2},
            {"_id": "p2", "type": "text", "content": "Parks funding rises by <b>4%</b>."}
        ],
        "planning": {
            "story_length": {"word_count_actual": 420, "character_count_actual": 2480}
        },
        "promo_items": {
            "basic": {
                "_id": "img-1",
                "type": "image",
                "url": "https://cdn.example.com/promo.jpg",
                "width": 1200,
                "height": 800,
                "caption": "Council chambers"
            }
        },
        "websites": {
            "daily": {
                "website_url": format!("/politics/2024/03/05/{id}/")
            }
        },
        "owner": {"id": "newsroom", "sponsored": false}
    })
}

/// A collection titled "Top stories" holding one sample story per id.
#[must_use]
pub fn sample_collection_json(ids: &[&str]) -> Value {
    let stories: Vec<Value> = ids.iter().map(|id| sample_article_json(id)).collect();
    json!({
        "_id": "collection-1",
        "type": "collection",
        "version": "0.10.9",
        "canonical_website": "daily",
        "headlines": {"basic": "Top stories"},
        "content_elements": stories
    })
}

/// Decoded sample story.
#[must_use]
pub fn sample_article(id: &str) -> Article {
    serde_json::from_value(sample_article_json(id)).expect("sample article decodes")
}

/// A list response as [`ContentApi::request`](crate::content::ContentApi::request)
/// would build it.
#[must_use]
pub fn list_response(ids: &[&str], limit: Option<u32>, offset: Option<u32>) -> ApiResponse<Vec<Article>> {
    let data: Vec<Article> = ids.iter().map(|id| sample_article(id)).collect();
    ApiResponse {
        meta: ResponseMeta {
            total: Some(data.len()),
            limit: limit.map(ParamValue::from),
            offset: offset.map(ParamValue::from),
        },
        data,
    }
}

/// Mock content source whose story lookup returns `sample_article(id)` for any id.
#[must_use]
pub fn mock_content_with_article() -> MockContentSource {
    let mut mock = MockContentSource::new();
    mock.expect_get_article().returning(|identifier, _by, _fields| {
        Ok(ApiResponse {
            data: sample_article(identifier),
            meta: ResponseMeta::default(),
        })
    });
    mock
}

/// Mock content source whose every list call fails with `error`.
#[must_use]
pub fn mock_content_list_error(error: ApiError) -> MockContentSource {
    let mut mock = MockContentSource::new();
    let by_tag = error.clone();
    mock.expect_list_articles_by_tag()
        .returning(move |_, _| Err(by_tag.clone()));
    let by_author = error.clone();
    mock.expect_list_articles_by_author()
        .returning(move |_, _| Err(by_author.clone()));
    mock.expect_list_stories()
        .returning(move |_| Err(error.clone()));
    mock
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ArticleBy, ListOptions};
    use crate::traits::ContentSource;

    #[test]
    fn test_sample_collection_uses_ids() {
        let json = sample_collection_json(&["x", "y"]);
        assert_eq!(json["content_elements"][1]["_id"], "y");
    }

    #[test]
    fn test_list_response_meta() {
        let response = list_response(&["a", "b"], Some(2), None);
        assert_eq!(response.meta.total, Some(2));
        assert_eq!(response.meta.limit, Some(ParamValue::UInt(2)));
        assert_eq!(response.data[0].id, "a");
    }

    #[tokio::test]
    async fn test_mock_content_with_article() {
        let mock = mock_content_with_article();
        let response = mock.get_article("abc", ArticleBy::Id, None).await.unwrap();
        assert_eq!(response.data.id, "abc");
    }

    #[tokio::test]
    async fn test_mock_content_list_error() {
        let mock = mock_content_list_error(ApiError::Timeout { timeout_ms: 10 });
        let err = mock.list_stories(ListOptions::new()).await.unwrap_err();
        assert_eq!(err.code(), "TIMEOUT");
    }
}
