//! End-to-end tests: the real router served on an ephemeral port.

#![allow(clippy::panic, clippy::indexing_slicing)]

use std::net::SocketAddr;

use knolx_pager::build_app;
use knolx_pager::config::PagerConfig;
use serde_json::{Value, json};

async fn spawn_server(config: PagerConfig) -> SocketAddr {
    let Ok(listener) = tokio::net::TcpListener::bind("127.0.0.1:0").await else {
        panic!("failed to bind test listener");
    };
    let Ok(addr) = listener.local_addr() else {
        panic!("listener has no local address");
    };
    let app = build_app(&config);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    addr
}

async fn get(addr: SocketAddr, path: &str) -> reqwest::Response {
    let Ok(response) = reqwest::get(format!("http://{addr}{path}")).await else {
        panic!("request to {path} failed");
    };
    response
}

async fn body(response: reqwest::Response) -> Value {
    let Ok(body) = response.json::<Value>().await else {
        panic!("response body is not JSON");
    };
    body
}

#[tokio::test]
async fn health_reports_healthy() {
    let addr = spawn_server(PagerConfig::default()).await;
    let response = get(addr, "/health").await;
    assert_eq!(response.status(), 200);
    assert_eq!(body(response).await["status"], "healthy");
}

#[tokio::test]
async fn window_near_start() {
    let addr = spawn_server(PagerConfig::default()).await;
    let response = get(addr, "/api/v1/pagination/window?page=3&total_pages=10").await;
    assert_eq!(response.status(), 200);
    assert_eq!(
        body(response).await,
        json!({
            "page": 3,
            "total_pages": 10,
            "links": [
                {"kind": "inactive", "page": 1},
                {"kind": "inactive", "page": 2},
                {"kind": "active", "page": 3},
                {"kind": "inactive", "page": 4},
                {"kind": "inactive", "page": 5},
                {"kind": "ellipsis"},
                {"kind": "inactive", "page": 10},
            ]
        })
    );
}

#[tokio::test]
async fn window_beyond_last_page_is_empty() {
    let addr = spawn_server(PagerConfig::default()).await;
    let response = get(addr, "/api/v1/pagination/window?page=6&total_pages=3").await;
    assert_eq!(response.status(), 200);
    assert_eq!(body(response).await["links"], json!([]));
}

#[tokio::test]
async fn window_last_page_keeps_duplicate_by_default() {
    let addr = spawn_server(PagerConfig::default()).await;
    let response = get(addr, "/api/v1/pagination/window?page=10&total_pages=10").await;
    let links = body(response).await["links"].clone();
    assert_eq!(links.as_array().map(Vec::len), Some(7));
    assert_eq!(links[6], json!({"kind": "active", "page": 10}));
}

#[tokio::test]
async fn window_last_page_collapses_when_configured() {
    let config = PagerConfig {
        collapse_duplicate_trailing: true,
        ..PagerConfig::default()
    };
    let addr = spawn_server(config).await;
    let response = get(addr, "/api/v1/pagination/window?page=10&total_pages=10").await;
    let links = body(response).await["links"].clone();
    assert_eq!(links.as_array().map(Vec::len), Some(5));
}

#[tokio::test]
async fn window_rejects_negative_page() {
    let addr = spawn_server(PagerConfig::default()).await;
    let response = get(addr, "/api/v1/pagination/window?page=-1&total_pages=10").await;
    assert_eq!(response.status(), 400);
    assert_eq!(body(response).await["error"]["code"], 1001);
}

#[tokio::test]
async fn window_rejects_non_integer_page() {
    let addr = spawn_server(PagerConfig::default()).await;
    let response = get(addr, "/api/v1/pagination/window?page=abc&total_pages=3").await;
    assert_eq!(response.status(), 400);
    assert_eq!(body(response).await["error"]["code"], 1001);
}

#[tokio::test]
async fn window_requires_total_pages() {
    let addr = spawn_server(PagerConfig::default()).await;
    let response = get(addr, "/api/v1/pagination/window?page=2").await;
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn listing_returns_meta_links_and_link_header() {
    let addr = spawn_server(PagerConfig::default()).await;
    let response = get(
        addr,
        "/api/v1/pagination/listing?page=2&per_page=10&total_items=95",
    )
    .await;
    assert_eq!(response.status(), 200);

    let link = response
        .headers()
        .get("link")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .unwrap_or_default();
    assert!(link.contains("rel=\"prev\""));
    assert!(link.contains("rel=\"next\""));

    let body = body(response).await;
    assert_eq!(
        body["pagination"],
        json!({
            "page": 2,
            "per_page": 10,
            "total_items": 95,
            "total_pages": 10,
            "has_prev": true,
            "has_next": true,
        })
    );
    assert_eq!(body["links"][1], json!({"kind": "active", "page": 2}));
    assert_eq!(body["links"][6], json!({"kind": "inactive", "page": 10}));
}

#[tokio::test]
async fn listing_rejects_negative_per_page() {
    let addr = spawn_server(PagerConfig::default()).await;
    let response = get(
        addr,
        "/api/v1/pagination/listing?page=1&per_page=-5&total_items=3",
    )
    .await;
    assert_eq!(response.status(), 400);
    assert!(response.headers().get("link").is_none());
    assert_eq!(body(response).await["error"]["code"], 1001);
}

#[tokio::test]
async fn listing_without_items_has_no_link_header() {
    let addr = spawn_server(PagerConfig::default()).await;
    let response = get(addr, "/api/v1/pagination/listing?total_items=0").await;
    assert_eq!(response.status(), 200);
    assert!(response.headers().get("link").is_none());
    assert_eq!(body(response).await["links"], json!([]));
}

#[tokio::test]
async fn listing_clamps_per_page_to_configured_max() {
    let config = PagerConfig {
        max_per_page: 50,
        ..PagerConfig::default()
    };
    let addr = spawn_server(config).await;
    let response = get(
        addr,
        "/api/v1/pagination/listing?page=1&per_page=500&total_items=120",
    )
    .await;
    let body = body(response).await;
    assert_eq!(body["pagination"]["per_page"], 50);
    assert_eq!(body["pagination"]["total_pages"], 3);
}
