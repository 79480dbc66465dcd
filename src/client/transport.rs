use crate::client::ClientConfig;
use crate::client::form::ContactPayload;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::ACCEPT;
use reqwest::{Client, Url};
use thiserror::Error;

/// Whatever came back from the endpoint, successful or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Bytes,
}

impl TransportResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// No response was obtained at all.
#[derive(Error, Debug)]
#[error("Request could not be completed: {0}")]
pub struct TransportError(pub String);

#[async_trait]
pub trait SubmissionTransport: Send + Sync + std::fmt::Debug {
    /// Sends one JSON POST. Never retried.
    ///
    /// # Errors
    /// Returns `TransportError` when no response is received.
    async fn post(&self, payload: &ContactPayload) -> Result<TransportResponse, TransportError>;
}

#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
    endpoint: Url,
}

impl HttpTransport {
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self { client: Client::new(), endpoint: config.endpoint.clone() }
    }
}

#[async_trait]
impl SubmissionTransport for HttpTransport {
    async fn post(&self, payload: &ContactPayload) -> Result<TransportResponse, TransportError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, endpoint = %self.endpoint, "Contact form request failed");
                TransportError(e.to_string())
            })?;

        let status = response.status().as_u16();
        let body = response.bytes().await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to read response body");
            Bytes::new()
        });

        Ok(TransportResponse { status, body })
    }
}
