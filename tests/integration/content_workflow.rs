//! Page assembly workflow: homepage collection, then a story, then its section.

use std::sync::Arc;

use newsroom_content::content::{
    ArticleBy, ClientConfig, CollectionBy, ContentApi, FieldSelection, ListOptions,
};
use newsroom_content::model::ContentElement;
use newsroom_content::traits::ContentSource;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn story(id: &str, headline: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "type": "story",
        "canonical_url": format!("/news/{id}/"),
        "headlines": {"basic": headline},
        "credits": {"by": [{"_id": "jo", "name": "Jo Writer", "slug": "jo-writer"}]},
        "taxonomy": {
            "primary_section": {"_id": "/news", "name": "News"},
            "tags": [{"slug": "city-hall", "text": "City Hall"}]
        },
        "content_elements": [
            {"_id": "p1", "type": "text", "content": "First paragraph."},
            {"_id": "e1", "type": "interstitial_link", "url": "/elsewhere"},
            {"_id": "q1", "type": "quote", "content_elements": [
                {"_id": "q1p", "type": "text", "content": "A quote."}
            ]}
        ]
    })
}

async fn mount_cms(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/collections"))
        .and(query_param("content_alias", "homepage"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": {"content": {
                "_id": "home",
                "headlines": {"basic": "Homepage"},
                "content_elements": [story("n1", "First"), story("n2", "Second")]
            }}
        })))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/stories"))
        .and(query_param("canonical_url", "/news/n2/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"result": story("n2", "Second")})),
        )
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/sections"))
        .and(query_param("id", "/news"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "/news",
            "name": "News",
            "_website": "daily",
            "site_topper": {"site_logo_image": "logo.png"}
        })))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/stories/list"))
        .and(query_param("author_slug", "jo-writer"))
        .and(query_param("fields", "_id,headlines"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": [{"_id": "n1"}, {"_id": "n2"}]
        })))
        .expect(1)
        .mount(server)
        .await;
}

async fn assemble_page(source: &impl ContentSource) -> (String, Vec<String>, String) {
    let home = source
        .get_collection("homepage", CollectionBy::Alias, None)
        .await
        .expect("homepage collection");
    let lead = &home.data.content_elements[1];

    let article = source
        .get_article(&lead.canonical_url, ArticleBy::Slug, None)
        .await
        .expect("lead story");
    let section_id = article
        .data
        .primary_section()
        .map(|s| s.id.clone())
        .expect("story has a section");
    let section = source
        .get_section(&section_id, None)
        .await
        .expect("section");

    let author = article.data.credits.by[0].slug.clone();
    let by_author = source
        .list_articles_by_author(
            &author,
            ListOptions::new().with_fields(["_id", "headlines"].into_iter().collect::<FieldSelection>()),
        )
        .await
        .expect("author stories");

    (
        article.data.headline().to_string(),
        by_author.data.iter().map(|a| a.id.clone()).collect(),
        section.data.name,
    )
}

#[tokio::test]
async fn test_page_assembly_through_shared_client() {
    let server = MockServer::start().await;
    mount_cms(&server).await;

    let api = Arc::new(ContentApi::new(ClientConfig::new(server.uri())).unwrap());
    let (headline, related, section) = assemble_page(&api).await;

    assert_eq!(headline, "Second");
    assert_eq!(related, vec!["n1", "n2"]);
    assert_eq!(section, "News");
}

#[tokio::test]
async fn test_story_body_tolerates_unknown_blocks() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stories"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"result": story("n2", "Second")})),
        )
        .mount(&server)
        .await;

    let api = ContentApi::new(ClientConfig::new(server.uri())).unwrap();
    let article = api
        .get_article("/news/n2/", ArticleBy::Slug, None)
        .await
        .unwrap();

    let kinds: Vec<_> = article
        .data
        .content_elements
        .iter()
        .map(ContentElement::kind)
        .collect();
    assert_eq!(kinds, vec!["text", "unknown", "quote"]);
    assert!(article.meta.total.is_none());
}
