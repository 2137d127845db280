//! Error classification across failure kinds, and recovery on the next call.

use std::time::{Duration, Instant};

use newsroom_content::content::{
    ArticleBy, ClientConfig, ContentApi, ListOptions, ParamValue, QueryParams,
};
use newsroom_content::error::{ApiError, ErrorCategory};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_every_failure_has_status_and_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("id", "forbidden"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("id", "broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("id", "slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("id", "garbled"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let api = ContentApi::new(ClientConfig::new(server.uri()).with_timeout_ms(200)).unwrap();

    let cases = [
        ("forbidden", 403, "403", ErrorCategory::Http),
        ("broken", 500, "500", ErrorCategory::Http),
        ("slow", 408, "TIMEOUT", ErrorCategory::Retryable),
        ("garbled", 0, "NETWORK_ERROR", ErrorCategory::Retryable),
    ];

    for (id, status, code, category) in cases {
        let err = api.get_article(id, ArticleBy::Id, None).await.unwrap_err();
        assert_eq!(err.status(), status, "status for {id}");
        assert_eq!(err.code(), code, "code for {id}");
        assert_eq!(err.category(), category, "category for {id}");

        let body = serde_json::to_value(err.to_body()).unwrap();
        assert_eq!(body["status"], status);
        assert_eq!(body["code"], code);
        assert!(body["message"].is_string());
    }
}

#[tokio::test]
async fn test_timeout_then_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stories/list"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(3)),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/stories/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"_id": "ok"}])))
        .mount(&server)
        .await;

    let api = ContentApi::new(ClientConfig::new(server.uri()).with_timeout_ms(150)).unwrap();

    let start = Instant::now();
    let first = api.list_stories(ListOptions::new()).await;
    assert!(matches!(first, Err(ApiError::Timeout { timeout_ms: 150 })));
    assert!(start.elapsed() < Duration::from_secs(2));

    let second = api.list_stories(ListOptions::new()).await.unwrap();
    assert_eq!(second.data[0].id, "ok");
    assert_eq!(second.meta.total, Some(1));
}

#[tokio::test]
async fn test_base_url_path_is_replaced_by_absolute_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": {"_id": "1"}})))
        .expect(1)
        .mount(&server)
        .await;

    let api = ContentApi::new(ClientConfig::new(format!("{}/api/v1", server.uri()))).unwrap();
    let response = api.get_article("1", ArticleBy::Id, None).await.unwrap();
    assert_eq!(response.data.id, "1");
}

#[tokio::test]
async fn test_request_primitive_with_custom_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/authors"))
        .and(query_param("slug", "jo-writer"))
        .and(query_param("limit", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"result": {"content": [{"name": "Jo Writer"}]}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = ContentApi::new(ClientConfig::new(server.uri())).unwrap();
    let params = QueryParams::new()
        .with("slug", "jo-writer")
        .with("limit", 1u32)
        .with_opt("offset", None::<u32>);
    let response = api.request::<Vec<Value>>("/authors", &params).await.unwrap();

    assert_eq!(response.data[0]["name"], "Jo Writer");
    assert_eq!(response.meta.total, Some(1));
    assert_eq!(response.meta.limit, Some(ParamValue::UInt(1)));
    assert_eq!(response.meta.offset, None);
}
