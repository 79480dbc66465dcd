use crate::adapters::notify::{Notifier, NotifyError};
use crate::domain::submission::Notification;
use async_trait::async_trait;
use aws_sdk_sns::Client;
use aws_sdk_sns::error::DisplayErrorContext;

/// SNS only accepts subjects shorter than 100 characters.
const MAX_SUBJECT_CHARS: usize = 99;

#[derive(Clone, Debug)]
pub struct SnsNotifier {
    client: Client,
    topic_arn: String,
}

impl SnsNotifier {
    #[must_use]
    pub const fn new(client: Client, topic_arn: String) -> Self {
        Self { client, topic_arn }
    }
}

fn clamp_subject(subject: &str) -> String {
    subject.chars().filter(|c| !c.is_control()).take(MAX_SUBJECT_CHARS).collect()
}

#[async_trait]
impl Notifier for SnsNotifier {
    async fn publish(&self, notification: &Notification) -> Result<(), NotifyError> {
        let output = self
            .client
            .publish()
            .topic_arn(&self.topic_arn)
            .subject(clamp_subject(&notification.subject))
            .message(&notification.body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %DisplayErrorContext(&e), topic = %self.topic_arn, "SNS publish failed");
                NotifyError::Publish(DisplayErrorContext(&e).to_string())
            })?;

        tracing::debug!(message_id = ?output.message_id(), topic = %self.topic_arn, "Notification published to SNS");
        Ok(())
    }
}
