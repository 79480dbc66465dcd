use crate::adapters::notify::{Notifier, NotifyError};
use crate::domain::submission::Notification;
use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};

/// Keeps every published notification in memory and logs it.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    published: Mutex<Vec<Notification>>,
}

impl MemoryNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn published(&self) -> Vec<Notification> {
        self.published.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

#[async_trait]
impl Notifier for MemoryNotifier {
    async fn publish(&self, notification: &Notification) -> Result<(), NotifyError> {
        tracing::info!(subject = %notification.subject, body = %notification.body, "Notification published");
        self.published.lock().unwrap_or_else(PoisonError::into_inner).push(notification.clone());
        Ok(())
    }
}
