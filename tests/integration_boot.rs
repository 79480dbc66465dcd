#![allow(clippy::unwrap_used, clippy::panic, clippy::missing_panics_doc, unreachable_pub)]
use folio_contact::AppBuilder;
use folio_contact::adapters::notify::MemoryNotifier;
use folio_contact::adapters::storage::MemoryStore;
use folio_contact::config::Backend;
use folio_contact::error::AppError;
use reqwest::StatusCode;
use std::sync::Arc;

mod common;

#[tokio::test]
async fn test_aws_backend_requires_table_name() {
    let mut config = common::get_test_config();
    config.backend = Backend::Aws;
    config.aws.topic_arn = Some("arn:aws:sns:us-east-1:123456789012:contact".into());

    let err = AppBuilder::new(config).build().await.unwrap_err();

    assert!(matches!(err, AppError::MissingConfig("DYNAMODB_TABLE_NAME")));
}

#[tokio::test]
async fn test_aws_backend_requires_topic_arn() {
    let mut config = common::get_test_config();
    config.backend = Backend::Aws;
    config.aws.table_name = Some("contact-submissions".into());

    let err = AppBuilder::new(config).build().await.unwrap_err();

    assert!(matches!(err, AppError::MissingConfig("SNS_TOPIC_ARN")));
}

#[tokio::test]
async fn test_invalid_origin_is_rejected() {
    let mut config = common::get_test_config();
    config.cors.allowed_origin = "https://folio.example.com\r\nX-Injected: 1".into();

    let err = AppBuilder::new(config).build().await.unwrap_err();

    assert!(matches!(err, AppError::InvalidOrigin(_)));
}

#[tokio::test]
async fn test_memory_backend_boots_without_aws_settings() {
    let config = common::get_test_config();
    assert!(AppBuilder::new(config).build().await.is_ok());
}

#[tokio::test]
async fn test_route_path_is_configurable() {
    let mut config = common::get_test_config();
    config.server.route_path = "api/v2/contact".into();

    let app = common::TestApp::spawn_with_config(
        config,
        Arc::new(MemoryStore::new()),
        Arc::new(MemoryNotifier::new()),
    )
    .await;
    assert!(app.url.ends_with("api/v2/contact"));

    let base = app.url.trim_end_matches("api/v2/contact");
    let resp = app.client.request(reqwest::Method::OPTIONS, format!("{base}/api/v2/contact")).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}
