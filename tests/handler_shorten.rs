mod common;

use alias_shortener::api::handlers::{shorten_handler, shorten_query_handler};
use axum::{Router, routing::get};
use axum_test::TestServer;
use serde_json::json;

fn shorten_server() -> TestServer {
    let (state, _store) = common::create_test_state();
    let app = Router::new()
        .route(
            "/shortenUrl",
            get(shorten_query_handler).post(shorten_handler),
        )
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_shorten_first_alias_after_floor() {
    let server = shorten_server();

    let response = server
        .post("/shortenUrl")
        .json(&json!({ "url": "https://example.com/a" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["original_url"], "https://example.com/a");
    assert_eq!(json["alias"], "4c93");
    assert_eq!(json["shortened_url"], "http://short.ly/4c93");
}

#[tokio::test]
async fn test_shorten_same_url_twice_gives_distinct_aliases() {
    let server = shorten_server();
    let body = json!({ "url": "https://example.com/a" });

    let first = server.post("/shortenUrl").json(&body).await;
    let second = server.post("/shortenUrl").json(&body).await;

    first.assert_status_ok();
    second.assert_status_ok();

    let first = first.json::<serde_json::Value>();
    let second = second.json::<serde_json::Value>();
    assert_eq!(first["alias"], "4c93");
    assert_eq!(second["alias"], "4c94");
}

#[tokio::test]
async fn test_shorten_via_query_string() {
    let server = shorten_server();

    let response = server
        .get("/shortenUrl")
        .add_query_param("url", "https://example.com/q")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["original_url"], "https://example.com/q");
    assert_eq!(json["alias"], "4c93");
}

#[tokio::test]
async fn test_shorten_missing_url() {
    let server = shorten_server();

    let response = server.post("/shortenUrl").json(&json!({})).await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_blank_url_does_not_consume_counter() {
    let (state, store) = common::create_test_state();
    let app = Router::new()
        .route("/shortenUrl", get(shorten_query_handler).post(shorten_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/shortenUrl")
        .json(&json!({ "url": "   " }))
        .await;

    response.assert_status_bad_request();
    assert!(store.is_empty());

    let response = server
        .post("/shortenUrl")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["alias"], "4c93");
}

#[tokio::test]
async fn test_shorten_malformed_json_is_validation_error() {
    let server = shorten_server();

    let response = server
        .post("/shortenUrl")
        .text("{\"url\": ")
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}
