use crate::adapters::notify::Notifier;
use crate::adapters::storage::SubmissionStore;
use crate::domain::submission::{ContactRequest, Submission};
use opentelemetry::{KeyValue, global, metrics::Counter};
use std::sync::Arc;
use uuid::Uuid;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Name, email, and message are required.";
pub const ACCEPTED_MESSAGE: &str = "Form submitted successfully!";
pub const FAILED_MESSAGE: &str = "Failed to submit form.";

/// What became of one submission request. Mapped to a status and body at the
/// HTTP boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Record written and notification published.
    Accepted { submission_id: Uuid },
    /// Request failed validation. Nothing was written or published.
    Rejected { message: String },
    /// Parsing, the write, or the publish failed.
    Failed { message: String, error: String },
}

impl SubmissionOutcome {
    #[must_use]
    pub fn failed(error: impl std::fmt::Display) -> Self {
        Self::Failed { message: FAILED_MESSAGE.to_string(), error: error.to_string() }
    }

    const fn label(&self) -> &'static str {
        match self {
            Self::Accepted { .. } => "accepted",
            Self::Rejected { .. } => "rejected",
            Self::Failed { .. } => "failed",
        }
    }
}

#[derive(Clone, Debug)]
struct Metrics {
    submissions: Counter<u64>,
}

impl Metrics {
    fn new() -> Self {
        let meter = global::meter("folio-contact");
        Self {
            submissions: meter
                .u64_counter("contact_submissions_total")
                .with_description("Contact form submissions by outcome")
                .build(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SubmissionService {
    store: Arc<dyn SubmissionStore>,
    notifier: Arc<dyn Notifier>,
    metrics: Metrics,
}

impl SubmissionService {
    #[must_use]
    pub fn new(store: Arc<dyn SubmissionStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self { store, notifier, metrics: Metrics::new() }
    }

    /// Validates, persists and announces one submission.
    ///
    /// Never fails: every error ends up in [`SubmissionOutcome::Failed`]. The
    /// write and the publish are not linked, so a publish failure leaves the
    /// record in place.
    #[tracing::instrument(skip_all, fields(submission_id = tracing::field::Empty))]
    pub async fn submit(&self, body: &[u8], source_address: Option<&str>) -> SubmissionOutcome {
        let outcome = self.process(body, source_address).await;
        self.metrics.submissions.add(1, &[KeyValue::new("outcome", outcome.label())]);
        outcome
    }

    async fn process(&self, body: &[u8], source_address: Option<&str>) -> SubmissionOutcome {
        let request = match serde_json::from_slice::<serde_json::Value>(body) {
            Ok(value) => ContactRequest::from_json(&value),
            Err(e) => {
                tracing::error!(error = %e, "Failed to parse submission body");
                return SubmissionOutcome::failed(e);
            }
        };

        let Some((name, email, message)) = request.required_fields() else {
            tracing::debug!("Submission is missing required fields");
            return SubmissionOutcome::Rejected { message: REQUIRED_FIELDS_MESSAGE.to_string() };
        };

        let submission = Submission::new(name, email, request.phone.as_deref(), message, source_address);
        tracing::Span::current().record("submission_id", tracing::field::display(submission.id()));

        if let Err(e) = self.store.put(&submission).await {
            tracing::error!(error = %e, "Failed to store submission");
            return SubmissionOutcome::failed(e);
        }
        tracing::info!("Submission stored");

        if let Err(e) = self.notifier.publish(&submission.notification()).await {
            tracing::warn!(error = %e, "Submission stored but notification was not sent");
            return SubmissionOutcome::failed(e);
        }
        tracing::info!("Submission notification published");

        SubmissionOutcome::Accepted { submission_id: submission.id() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::notify::{MemoryNotifier, NotifyError};
    use crate::adapters::storage::{MemoryStore, StoreError};
    use crate::domain::submission::{NOT_AVAILABLE, Notification};
    use async_trait::async_trait;

    #[derive(Debug)]
    struct BrokenStore;

    #[async_trait]
    impl SubmissionStore for BrokenStore {
        async fn put(&self, _submission: &Submission) -> Result<(), StoreError> {
            Err(StoreError::Backend("ProvisionedThroughputExceededException".into()))
        }
    }

    #[derive(Debug)]
    struct BrokenNotifier;

    #[async_trait]
    impl Notifier for BrokenNotifier {
        async fn publish(&self, _notification: &Notification) -> Result<(), NotifyError> {
            Err(NotifyError::Publish("AuthorizationError".into()))
        }
    }

    fn service_with(store: Arc<dyn SubmissionStore>, notifier: Arc<dyn Notifier>) -> SubmissionService {
        SubmissionService::new(store, notifier)
    }

    #[tokio::test]
    async fn test_valid_submission_writes_and_publishes_once() {
        let store = Arc::new(MemoryStore::new());
        let notifier = Arc::new(MemoryNotifier::new());
        let service = service_with(store.clone(), notifier.clone());

        let outcome = service
            .submit(br#"{"name":"Ada","email":"ada@example.com","message":"Hello"}"#, Some("198.51.100.4"))
            .await;

        let SubmissionOutcome::Accepted { submission_id } = outcome else {
            panic!("expected accepted outcome, got {outcome:?}");
        };
        assert_eq!(store.len(), 1);
        let stored = store.get(submission_id).expect("record written under the returned id");
        assert_eq!(stored.phone(), NOT_AVAILABLE);
        assert_eq!(stored.source_address(), "198.51.100.4");

        let published = notifier.published();
        assert_eq!(published.len(), 1);
        assert!(published[0].body.contains(&submission_id.to_string()));
    }

    #[tokio::test]
    async fn test_missing_name_is_rejected_without_side_effects() {
        let store = Arc::new(MemoryStore::new());
        let notifier = Arc::new(MemoryNotifier::new());
        let service = service_with(store.clone(), notifier.clone());

        let outcome = service.submit(br#"{"email":"a@b.com","message":"hi"}"#, None).await;

        assert_eq!(outcome, SubmissionOutcome::Rejected { message: REQUIRED_FIELDS_MESSAGE.to_string() });
        assert!(store.is_empty());
        assert!(notifier.published().is_empty());
    }

    #[tokio::test]
    async fn test_empty_required_field_is_rejected() {
        let store = Arc::new(MemoryStore::new());
        let notifier = Arc::new(MemoryNotifier::new());
        let service = service_with(store.clone(), notifier.clone());

        let outcome = service.submit(br#"{"name":"Ada","email":"","message":"hi"}"#, None).await;

        assert!(matches!(outcome, SubmissionOutcome::Rejected { .. }));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_valid_json_of_the_wrong_shape_is_rejected() {
        let store = Arc::new(MemoryStore::new());
        let notifier = Arc::new(MemoryNotifier::new());
        let service = service_with(store.clone(), notifier.clone());

        let bodies: [&[u8]; 4] = [b"[]", br#""hello""#, b"null", br#"{"name":5,"email":"a@b.com","message":"hi"}"#];
        for body in bodies {
            let outcome = service.submit(body, None).await;
            assert_eq!(outcome, SubmissionOutcome::Rejected { message: REQUIRED_FIELDS_MESSAGE.to_string() });
        }
        assert!(store.is_empty());
        assert!(notifier.published().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_keys_use_the_last_value() {
        let store = Arc::new(MemoryStore::new());
        let service = service_with(store.clone(), Arc::new(MemoryNotifier::new()));

        let outcome = service
            .submit(br#"{"name":"A","name":"B","email":"b@example.com","message":"hi"}"#, None)
            .await;

        let SubmissionOutcome::Accepted { submission_id } = outcome else {
            panic!("expected accepted outcome, got {outcome:?}");
        };
        assert_eq!(store.get(submission_id).map(|s| s.name().to_string()), Some("B".to_string()));
    }

    #[tokio::test]
    async fn test_malformed_body_is_an_internal_failure() {
        let store = Arc::new(MemoryStore::new());
        let notifier = Arc::new(MemoryNotifier::new());
        let service = service_with(store.clone(), notifier.clone());

        let outcome = service.submit(b"{not json", None).await;

        let SubmissionOutcome::Failed { message, error } = outcome else {
            panic!("expected failed outcome");
        };
        assert_eq!(message, FAILED_MESSAGE);
        assert!(!error.is_empty());
        assert!(store.is_empty());
        assert!(notifier.published().is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_skips_publish() {
        let notifier = Arc::new(MemoryNotifier::new());
        let service = service_with(Arc::new(BrokenStore), notifier.clone());

        let outcome = service.submit(br#"{"name":"Ada","email":"ada@example.com","message":"Hello"}"#, None).await;

        let SubmissionOutcome::Failed { message, error } = outcome else {
            panic!("expected failed outcome");
        };
        assert_eq!(message, FAILED_MESSAGE);
        assert!(error.contains("ProvisionedThroughputExceededException"));
        assert!(notifier.published().is_empty());
    }

    #[tokio::test]
    async fn test_publish_failure_keeps_the_record() {
        let store = Arc::new(MemoryStore::new());
        let service = service_with(store.clone(), Arc::new(BrokenNotifier));

        let outcome = service.submit(br#"{"name":"Ada","email":"ada@example.com","message":"Hello"}"#, None).await;

        let SubmissionOutcome::Failed { error, .. } = outcome else {
            panic!("expected failed outcome");
        };
        assert!(error.contains("AuthorizationError"));
        assert_eq!(store.len(), 1);
    }
}
