//! Notification bus.
//!
//! Notifications flow through an explicit bus handed to whichever component
//! needs to raise them. The bus is constructed once per application session
//! and dropped on shutdown; there is no process-global dispatcher to reach
//! for.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

/// Notification categories, matching the dashboard's toast types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// A strategy order was executed.
    OrderExecuted,
    /// An order was cancelled.
    OrderCancelled,
    /// A price/P&L/volume alert fired.
    AlertTriggered,
    /// A position changed.
    PositionUpdate,
    /// Everything else.
    System,
}

/// One notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// Unique id.
    pub id: String,
    /// Category.
    pub kind: NotificationKind,
    /// Short title.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Creation time.
    pub timestamp: DateTime<Utc>,
    /// Whether the user has seen it.
    pub read: bool,
}

impl Notification {
    /// Create an unread notification stamped now.
    #[must_use]
    pub fn new(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            title: title.into(),
            message: message.into(),
            timestamp: Utc::now(),
            read: false,
        }
    }
}

/// Broadcast bus for notifications.
///
/// Cloning shares the underlying channel. Publishing with no subscribers is
/// fine; the notification is simply dropped.
#[derive(Debug, Clone)]
pub struct NotificationBus {
    sender: broadcast::Sender<Notification>,
}

impl NotificationBus {
    /// Create a bus with the given buffer capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish a notification to all subscribers.
    pub fn publish(&self, notification: Notification) {
        tracing::debug!(
            kind = ?notification.kind,
            title = %notification.title,
            "notification published"
        );
        // An Err here only means nobody is listening right now.
        let _ = self.sender.send(notification);
    }

    /// Subscribe to the notification stream.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }
}

impl Default for NotificationBus {
    fn default() -> Self {
        Self::new(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscriber_receives_published_notification() {
        let bus = NotificationBus::default();
        let mut rx = bus.subscribe();

        bus.publish(Notification::new(
            NotificationKind::OrderExecuted,
            "Strategy Executed",
            "Long Straddle opened",
        ));

        let received = rx.recv().await.unwrap();
        assert_eq!(received.kind, NotificationKind::OrderExecuted);
        assert_eq!(received.title, "Strategy Executed");
        assert!(!received.read);
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_does_not_panic() {
        let bus = NotificationBus::default();
        bus.publish(Notification::new(NotificationKind::System, "t", "m"));
    }

    #[tokio::test]
    async fn test_clones_share_the_channel() {
        let bus = NotificationBus::default();
        let clone = bus.clone();
        let mut rx = bus.subscribe();

        clone.publish(Notification::new(NotificationKind::System, "via clone", "m"));

        assert_eq!(rx.recv().await.unwrap().title, "via clone");
    }
}
