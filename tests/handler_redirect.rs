mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use tinylink::api::handlers::redirect_handler;

fn redirect_server(state: tinylink::AppState) -> TestServer {
    let app = Router::new()
        .route("/{short_code}", get(redirect_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_redirect_success() {
    let state = common::create_test_state();
    let record = state.registry.add("https://example.com/target").unwrap();
    let server = redirect_server(state);

    let response = server.get(&format!("/{}", record.short_code)).await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_records_click() {
    let state = common::create_test_state();
    let record = state.registry.add("https://example.com").unwrap();
    let server = redirect_server(state.clone());

    for _ in 0..3 {
        server.get(&format!("/{}", record.short_code)).await;
    }

    assert_eq!(
        state.registry.resolve(&record.short_code).unwrap().click_count,
        3
    );
}

#[tokio::test]
async fn test_redirect_not_found() {
    let state = common::create_test_state();
    let server = redirect_server(state);

    let response = server.get("/zzzzzz").await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["message"], "Short URL not found");
}

#[tokio::test]
async fn test_redirect_after_reset_is_not_found() {
    let state = common::create_test_state();
    let record = state.registry.add("https://example.com").unwrap();
    let server = redirect_server(state.clone());

    state.registry.reset();

    server
        .get(&format!("/{}", record.short_code))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_code_is_case_sensitive() {
    let state = common::create_test_state_with_codes(&["AbCdEf"]);
    let record = state.registry.add("https://example.com").unwrap();
    assert_eq!(record.short_code, "AbCdEf");
    let server = redirect_server(state.clone());

    let response = server.get("/AbCdEf").await;
    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com");

    server.get("/aBcDeF").await.assert_status_not_found();
    server.get("/abcdef").await.assert_status_not_found();
    assert_eq!(state.registry.resolve("AbCdEf").unwrap().click_count, 1);
}
