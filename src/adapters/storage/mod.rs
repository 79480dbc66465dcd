use crate::domain::submission::Submission;
use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

pub mod dynamodb;
pub mod memory;

pub use dynamodb::DynamoStore;
pub use memory::MemoryStore;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Submission {0} already exists")]
    Duplicate(Uuid),
    #[error("Store write failed: {0}")]
    Backend(String),
}

#[async_trait]
pub trait SubmissionStore: Send + Sync + std::fmt::Debug + 'static {
    /// Writes the record as a single put. Never merges into or overwrites an
    /// existing record with the same id.
    ///
    /// # Errors
    /// Returns `StoreError::Duplicate` if the id is already taken, or
    /// `StoreError::Backend` if the write itself fails.
    async fn put(&self, submission: &Submission) -> Result<(), StoreError>;
}
