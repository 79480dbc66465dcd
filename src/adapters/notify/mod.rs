use crate::domain::submission::Notification;
use async_trait::async_trait;
use thiserror::Error;

pub mod memory;
pub mod sns;

pub use memory::MemoryNotifier;
pub use sns::SnsNotifier;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Notification publish failed: {0}")]
    Publish(String),
}

#[async_trait]
pub trait Notifier: Send + Sync + std::fmt::Debug + 'static {
    /// Publishes one alert to the configured channel.
    ///
    /// # Errors
    /// Returns `NotifyError::Publish` if the channel rejects or drops the message.
    async fn publish(&self, notification: &Notification) -> Result<(), NotifyError>;
}
