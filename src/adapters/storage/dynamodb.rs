use crate::adapters::storage::{StoreError, SubmissionStore};
use crate::domain::submission::Submission;
use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;

#[derive(Clone, Debug)]
pub struct DynamoStore {
    client: Client,
    table: String,
}

impl DynamoStore {
    #[must_use]
    pub const fn new(client: Client, table: String) -> Self {
        Self { client, table }
    }
}

#[async_trait]
impl SubmissionStore for DynamoStore {
    async fn put(&self, submission: &Submission) -> Result<(), StoreError> {
        let id = submission.id();

        self.client
            .put_item()
            .table_name(&self.table)
            .item("submissionId", AttributeValue::S(id.to_string()))
            .item("timestamp", AttributeValue::S(submission.timestamp().to_string()))
            .item("name", AttributeValue::S(submission.name().to_string()))
            .item("email", AttributeValue::S(submission.email().to_string()))
            .item("phone", AttributeValue::S(submission.phone().to_string()))
            .item("message", AttributeValue::S(submission.message().to_string()))
            .item("ipAddress", AttributeValue::S(submission.source_address().to_string()))
            .condition_expression("attribute_not_exists(submissionId)")
            .send()
            .await
            .map_err(|e| {
                if e.as_service_error().is_some_and(|se| se.is_conditional_check_failed_exception()) {
                    return StoreError::Duplicate(id);
                }
                tracing::error!(error = %DisplayErrorContext(&e), table = %self.table, "DynamoDB put failed");
                StoreError::Backend(DisplayErrorContext(&e).to_string())
            })?;

        tracing::debug!(submission_id = %id, table = %self.table, "Submission written to DynamoDB");
        Ok(())
    }
}
