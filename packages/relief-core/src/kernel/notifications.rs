//! In-process broadcast hub for transient user-facing notifications.
//!
//! The store publishes one [`Notification`] after every mutation and on every
//! connectivity transition. Whatever renders the UI subscribes and shows them
//! as toasts.
//!
//! # Guarantees
//!
//! - **At-most-once delivery**: slow receivers may miss notifications
//! - **In-memory only**: nothing is persisted
//! - **No replay**: notifications sent before `subscribe()` are not received

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Default channel capacity.
const DEFAULT_CAPACITY: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    #[default]
    Default,
    Destructive,
}

/// A transient message: title, description and severity variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: NotificationVariant::Destructive,
            ..Self::new(title, description)
        }
    }
}

/// Cloneable notification channel.
#[derive(Clone)]
pub struct Notifier {
    sender: broadcast::Sender<Notification>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a notifier buffering up to `capacity` notifications per receiver.
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publish to all subscribers. Returns how many received it; no-op
    /// without subscribers.
    pub fn notify(&self, notification: Notification) -> usize {
        tracing::debug!(title = %notification.title, "notification");
        self.sender.send(notification).unwrap_or(0)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("subscriber_count", &self.subscriber_count())
            .finish()
    }
}

/// Everything currently buffered on `receiver`, without waiting.
pub fn drain(receiver: &mut broadcast::Receiver<Notification>) -> Vec<Notification> {
    let mut out = Vec::new();
    loop {
        match receiver.try_recv() {
            Ok(n) => out.push(n),
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "notification receiver lagged");
            }
            Err(_) => break,
        }
    }
    out
}
