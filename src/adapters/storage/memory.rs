use crate::adapters::storage::{StoreError, SubmissionStore};
use crate::domain::submission::Submission;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use uuid::Uuid;

/// Process-local store used for local runs and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<Uuid, Submission>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<Submission> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner).get(&id).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl SubmissionStore for MemoryStore {
    async fn put(&self, submission: &Submission) -> Result<(), StoreError> {
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        if records.contains_key(&submission.id()) {
            return Err(StoreError::Duplicate(submission.id()));
        }
        records.insert(submission.id(), submission.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::submission::NOT_AVAILABLE;
    use time::OffsetDateTime;

    #[tokio::test]
    async fn test_put_then_get_reads_back_sentinels() {
        let store = MemoryStore::new();
        let submission = Submission::new("Ada", "ada@example.com", None, "Hello", None);

        store.put(&submission).await.unwrap();

        let stored = store.get(submission.id()).unwrap();
        assert_eq!(stored, submission);
        assert_eq!(stored.phone(), NOT_AVAILABLE);
    }

    #[tokio::test]
    async fn test_put_never_overwrites() {
        let store = MemoryStore::new();
        let id = Uuid::new_v4();
        let now = OffsetDateTime::now_utc();
        let first = Submission::with_identity(id, now, "Ada", "ada@example.com", None, "first", None);
        let second = Submission::with_identity(id, now, "Eve", "eve@example.com", None, "second", None);

        store.put(&first).await.unwrap();
        let err = store.put(&second).await.unwrap_err();

        assert!(matches!(err, StoreError::Duplicate(dup) if dup == id));
        assert_eq!(store.get(id).unwrap().message(), "first");
        assert_eq!(store.len(), 1);
    }
}
