#![forbid(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::todo)]
#![warn(clippy::panic)]
#![warn(clippy::dbg_macro)]
#![warn(clippy::print_stdout)]
#![warn(clippy::print_stderr)]
#![warn(clippy::clone_on_ref_ptr)]
#![warn(unreachable_pub)]
#![warn(missing_debug_implementations)]
#![warn(unused_qualifications)]
#![deny(unused_must_use)]

pub mod adapters;
pub mod api;
pub mod client;
pub mod config;
pub mod core;
pub mod domain;
pub mod error;
pub mod telemetry;

use crate::adapters::notify::{MemoryNotifier, Notifier, SnsNotifier};
use crate::adapters::storage::{DynamoStore, MemoryStore, SubmissionStore};
use crate::api::AppState;
use crate::api::cors::CorsHeaders;
use crate::config::{AwsConfig, Backend, Config};
use crate::core::submission_service::SubmissionService;
use crate::error::{AppError, Result};
use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use std::sync::Arc;

/// Loads the shared AWS SDK configuration, honoring explicit overrides.
pub async fn initialize_aws_config(config: &AwsConfig) -> aws_config::SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());

    if let Some(region) = &config.region {
        loader = loader.region(Region::new(region.clone()));
    }
    if let Some(endpoint) = &config.endpoint {
        loader = loader.endpoint_url(endpoint);
    }
    if let (Some(access_key), Some(secret_key)) = (&config.access_key, &config.secret_key) {
        loader = loader.credentials_provider(Credentials::new(access_key, secret_key, None, None, "folio-contact"));
    }

    loader.load().await
}

/// Wires the submission service and router together. Store and notifier
/// default to the configured backend unless injected.
#[derive(Debug)]
pub struct AppBuilder {
    config: Config,
    store: Option<Arc<dyn SubmissionStore>>,
    notifier: Option<Arc<dyn Notifier>>,
}

impl AppBuilder {
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config, store: None, notifier: None }
    }

    #[must_use]
    pub fn with_store(mut self, store: Arc<dyn SubmissionStore>) -> Self {
        self.store = Some(store);
        self
    }

    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// # Errors
    /// Returns an error if the allowed origin is not a valid header value, or
    /// the AWS backend is selected without a table name or topic ARN.
    pub async fn build(self) -> Result<axum::Router> {
        let cors = CorsHeaders::new(&self.config.cors.allowed_origin)?;

        let (store, notifier) = match (self.store, self.notifier) {
            (Some(store), Some(notifier)) => (store, notifier),
            (store, notifier) => {
                let (default_store, default_notifier) = default_backend(&self.config).await?;
                (store.unwrap_or(default_store), notifier.unwrap_or(default_notifier))
            }
        };

        let service = SubmissionService::new(store, notifier);
        let state = AppState::new(&self.config.server, service, cors);

        Ok(api::app_router(&self.config.server.route_path, state))
    }
}

async fn default_backend(config: &Config) -> Result<(Arc<dyn SubmissionStore>, Arc<dyn Notifier>)> {
    match config.backend {
        Backend::Memory => {
            tracing::warn!("Using the in-memory backend; submissions are not persisted");
            Ok((Arc::new(MemoryStore::new()), Arc::new(MemoryNotifier::new())))
        }
        Backend::Aws => {
            let table = config.aws.table_name.clone().ok_or(AppError::MissingConfig("DYNAMODB_TABLE_NAME"))?;
            let topic = config.aws.topic_arn.clone().ok_or(AppError::MissingConfig("SNS_TOPIC_ARN"))?;

            let sdk_config = initialize_aws_config(&config.aws).await;
            tracing::info!(table = %table, topic = %topic, "Using DynamoDB and SNS backend");

            Ok((
                Arc::new(DynamoStore::new(aws_sdk_dynamodb::Client::new(&sdk_config), table)),
                Arc::new(SnsNotifier::new(aws_sdk_sns::Client::new(&sdk_config), topic)),
            ))
        }
    }
}

/// True when running under the AWS Lambda runtime.
#[must_use]
pub fn is_lambda_runtime() -> bool {
    std::env::var_os("AWS_LAMBDA_RUNTIME_API").is_some()
}

/// Routes panics through `tracing` so they reach the configured log sink.
pub fn setup_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let location = info.location().map(|l| format!("{}:{}", l.file(), l.line())).unwrap_or_default();
        tracing::error!(panic = %info, location = %location, "Panic occurred");
    }));
}

/// Resolves on Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
