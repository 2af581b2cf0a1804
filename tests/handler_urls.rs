mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use chrono::DateTime;
use tinylink::api::handlers::list_urls_handler;

#[tokio::test]
async fn test_list_urls_empty() {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/api/urls", get(list_urls_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/urls").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), serde_json::json!([]));
}

#[tokio::test]
async fn test_list_urls_fields() {
    let state = common::create_test_state();
    let record = state.registry.add("https://www.example.com/page").unwrap();
    state.registry.record_click(&record.short_code).unwrap();

    let app = Router::new()
        .route("/api/urls", get(list_urls_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let json = server.get("/api/urls").await.json::<serde_json::Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);

    let item = &items[0];
    assert_eq!(item["id"], record.id.to_string());
    assert_eq!(item["original_url"], "https://www.example.com/page");
    assert_eq!(item["short_code"], record.short_code.as_str());
    assert_eq!(
        item["short_url"],
        format!("{}/{}", common::BASE_URL, record.short_code)
    );
    assert_eq!(item["click_count"], 1);

    let created_at = item["created_at"].as_str().unwrap();
    let parsed = DateTime::parse_from_rfc3339(created_at).unwrap();
    assert_eq!(parsed, record.created_at);
}

#[tokio::test]
async fn test_list_urls_insertion_order() {
    let state = common::create_test_state();
    for url in ["https://one.com", "https://two.com", "https://three.com"] {
        state.registry.add(url).unwrap();
    }

    let app = Router::new()
        .route("/api/urls", get(list_urls_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let json = server.get("/api/urls").await.json::<serde_json::Value>();
    let urls: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["original_url"].as_str().unwrap())
        .collect();

    assert_eq!(urls, ["https://one.com", "https://two.com", "https://three.com"]);
}
