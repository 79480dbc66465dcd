#![allow(dead_code, clippy::unwrap_used, clippy::missing_panics_doc, unreachable_pub)]
use async_trait::async_trait;
use folio_contact::AppBuilder;
use folio_contact::adapters::notify::{MemoryNotifier, Notifier, NotifyError};
use folio_contact::adapters::storage::{MemoryStore, StoreError, SubmissionStore};
use folio_contact::config::{AwsConfig, Backend, Config, CorsConfig, ServerConfig, TelemetryConfig};
use folio_contact::domain::submission::{Notification, Submission};
use std::net::SocketAddr;
use std::sync::{Arc, Once};

pub const ORIGIN: &str = "https://folio.example.com";

static INIT: Once = Once::new();

pub fn setup_tracing() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "warn".into())
            .add_directive("folio_contact=debug".parse().unwrap())
            .add_directive("hyper=warn".parse().unwrap())
            .add_directive("reqwest=warn".parse().unwrap());

        tracing_subscriber::fmt().with_env_filter(filter).init();
    });
}

pub fn get_test_config() -> Config {
    Config {
        backend: Backend::Memory,
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            trusted_proxies: vec!["127.0.0.1/32".parse().unwrap()],
            ..ServerConfig::default()
        },
        cors: CorsConfig { allowed_origin: ORIGIN.to_string() },
        aws: AwsConfig::default(),
        telemetry: TelemetryConfig::default(),
    }
}

#[derive(Debug)]
pub struct FailingStore;

#[async_trait]
impl SubmissionStore for FailingStore {
    async fn put(&self, _submission: &Submission) -> Result<(), StoreError> {
        Err(StoreError::Backend("ResourceNotFoundException: table missing".into()))
    }
}

#[derive(Debug)]
pub struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn publish(&self, _notification: &Notification) -> Result<(), NotifyError> {
        Err(NotifyError::Publish("AuthorizationError: not allowed to publish".into()))
    }
}

pub struct TestApp {
    pub url: String,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn_with(store: Arc<dyn SubmissionStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self::spawn_with_config(get_test_config(), store, notifier).await
    }

    pub async fn spawn_with_config(
        config: Config,
        store: Arc<dyn SubmissionStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        setup_tracing();
        let route_path = config.server.route_path.clone();

        let app = AppBuilder::new(config).with_store(store).with_notifier(notifier).build().await.unwrap();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await.unwrap();
        });

        Self { url: format!("http://{addr}{route_path}"), client: reqwest::Client::new() }
    }
}

pub struct MemoryApp {
    pub app: TestApp,
    pub store: Arc<MemoryStore>,
    pub notifier: Arc<MemoryNotifier>,
}

impl MemoryApp {
    pub async fn spawn() -> Self {
        let store = Arc::new(MemoryStore::new());
        let notifier = Arc::new(MemoryNotifier::new());
        let app = TestApp::spawn_with(
            Arc::clone(&store) as Arc<dyn SubmissionStore>,
            Arc::clone(&notifier) as Arc<dyn Notifier>,
        )
        .await;
        Self { app, store, notifier }
    }
}
