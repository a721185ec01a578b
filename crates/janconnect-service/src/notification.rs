//! Notification feed — the read surface consumed by the portal UI.

use std::sync::Arc;

use janconnect_core::AppResult;
use janconnect_core::config::NotificationsConfig;
use janconnect_database::repositories::NotificationRepository;
use janconnect_entity::notification::Notification;

use crate::context::RequestContext;

/// Serves a recipient's notification feed, newest first.
#[derive(Debug, Clone)]
pub struct NotificationFeedService {
    /// Notification repository.
    notifications: Arc<NotificationRepository>,
    /// Dispatch settings (feed page size).
    config: NotificationsConfig,
}

impl NotificationFeedService {
    /// Creates a new feed service.
    pub fn new(notifications: Arc<NotificationRepository>, config: NotificationsConfig) -> Self {
        Self {
            notifications,
            config,
        }
    }

    /// List the current user's notifications, most recent first.
    pub async fn list(&self, ctx: &RequestContext) -> AppResult<Vec<Notification>> {
        self.notifications
            .find_by_recipient(ctx.user_id.into_uuid(), self.config.feed_limit)
            .await
    }
}
