//! Notification domain entities.

pub mod channel;
pub mod model;

pub use channel::NotificationChannel;
pub use model::{NewNotification, Notification};
