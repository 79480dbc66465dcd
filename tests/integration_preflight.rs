#![allow(clippy::unwrap_used, clippy::missing_panics_doc, unreachable_pub)]
use reqwest::header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE};
use reqwest::{Method, StatusCode};

mod common;
use common::{MemoryApp, ORIGIN};

#[tokio::test]
async fn test_preflight_returns_no_content_with_cors_headers() {
    let harness = MemoryApp::spawn().await;

    let resp = harness
        .app
        .client
        .request(Method::OPTIONS, &harness.app.url)
        .header("Origin", ORIGIN)
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let headers = resp.headers();
    assert_eq!(headers[ACCESS_CONTROL_ALLOW_ORIGIN], ORIGIN);
    assert_eq!(headers[ACCESS_CONTROL_ALLOW_METHODS], "POST,OPTIONS");
    assert_eq!(
        headers[ACCESS_CONTROL_ALLOW_HEADERS],
        "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token"
    );
    assert!(headers.get(CONTENT_TYPE).is_none());
    assert!(resp.bytes().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_preflight_is_idempotent_and_side_effect_free() {
    let harness = MemoryApp::spawn().await;

    for _ in 0..3 {
        let resp = harness
            .app
            .client
            .request(Method::OPTIONS, &harness.app.url)
            .body(r#"{"name":"Ada","email":"ada@example.com","message":"Hello"}"#)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert_eq!(resp.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], ORIGIN);
    }

    assert!(harness.store.is_empty());
    assert!(harness.notifier.published().is_empty());
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let harness = MemoryApp::spawn().await;

    let resp = harness
        .app
        .client
        .request(Method::OPTIONS, &harness.app.url)
        .header("x-request-id", "req-123")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.headers()["x-request-id"], "req-123");
}
