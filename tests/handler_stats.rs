mod common;

use serde_json::{Value, json};

#[tokio::test]
async fn test_stats_unknown_code_is_zero() {
    let ctx = common::TestContext::new();
    let server = ctx.server();

    let response = server.get("/api/links/Nothing/stats").await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body, json!({ "visits": 0 }));
}

#[tokio::test]
async fn test_create_redirect_then_stats() {
    let ctx = common::TestContext::new();
    let server = ctx.server();

    let created = server
        .post("/api/links")
        .json(&json!({ "long_url": "https://example.com/a" }))
        .await;
    assert_eq!(created.status_code(), 201);
    let body: Value = created.json();
    let code = body["short_code"].as_str().unwrap().to_string();
    assert!(code.len() >= 6);

    let redirect = server.get(&format!("/{}", code)).await;
    assert_eq!(redirect.status_code(), 302);
    assert_eq!(redirect.header("location"), "https://example.com/a");

    assert_eq!(ctx.wait_for_visits(&code, 1).await, 1);

    let stats = server.get(&format!("/api/links/{}/stats", code)).await;
    assert_eq!(stats.status_code(), 200);
    let body: Value = stats.json();
    assert_eq!(body, json!({ "visits": 1 }));
}

#[tokio::test]
async fn test_stats_count_is_not_a_visit() {
    let ctx = common::TestContext::new();
    ctx.seed("Quiet01", "https://example.com").await;
    let server = ctx.server();

    for _ in 0..3 {
        let response = server.get("/api/links/Quiet01/stats").await;
        assert_eq!(response.status_code(), 200);
    }

    assert_eq!(ctx.settled_visits("Quiet01").await, 0);
}

#[tokio::test]
async fn test_stats_trailing_segments_are_not_found() {
    let ctx = common::TestContext::new();
    let server = ctx.server();

    let response = server.get("/api/links/abc/stats/extra").await;

    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn test_stats_non_utf8_segment_is_zero() {
    let ctx = common::TestContext::new();
    let server = ctx.server();

    let response = server.get("/api/links/%FF/stats").await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body, json!({ "visits": 0 }));
}
