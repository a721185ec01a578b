//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::channel::NotificationChannel;

/// One delivery record of a status event to one recipient.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: Uuid,
    /// The recipient user.
    pub user_id: Uuid,
    /// The complaint this notification is about.
    pub complaint_id: Uuid,
    /// Notification title.
    pub title: String,
    /// Notification body text.
    pub message: String,
    /// Delivery channel tag.
    pub channel: NotificationChannel,
    /// Set only after a channel adapter confirms delivery. A null value
    /// means "recorded, not confirmed delivered outside the system".
    pub sent_at: Option<DateTime<Utc>>,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Whether an external channel has confirmed delivery.
    pub fn is_delivered(&self) -> bool {
        self.sent_at.is_some()
    }
}

/// Data required to record a new notification.
///
/// The identifier and `created_at` are assigned by the store; `sent_at`
/// starts out null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewNotification {
    /// The recipient user.
    pub user_id: Uuid,
    /// The complaint this notification is about.
    pub complaint_id: Uuid,
    /// Notification title.
    pub title: String,
    /// Notification body text.
    pub message: String,
    /// Delivery channel tag.
    pub channel: NotificationChannel,
}
