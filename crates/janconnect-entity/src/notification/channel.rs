//! Notification delivery channel enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Delivery channel recorded on a notification row.
///
/// A row starts as `InApp`. When the email channel confirms delivery for
/// the owner, the same row is upgraded to `Email` with `sent_at` set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notification_channel", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationChannel {
    /// In-app notification record.
    InApp,
    /// Delivered by outbound email.
    Email,
}

impl NotificationChannel {
    /// Return the channel in its wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InApp => "IN_APP",
            Self::Email => "EMAIL",
        }
    }
}

impl fmt::Display for NotificationChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
