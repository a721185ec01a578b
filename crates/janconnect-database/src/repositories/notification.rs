//! Notification repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use janconnect_core::error::{AppError, ErrorKind};
use janconnect_core::result::AppResult;
use janconnect_entity::notification::{NewNotification, Notification, NotificationChannel};
use janconnect_notify::store::NotificationStore;

/// Repository for notification rows.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a notification row.
    pub async fn create(&self, new: &NewNotification) -> AppResult<Notification> {
        sqlx::query_as::<_, Notification>(
            "INSERT INTO notifications (user_id, complaint_id, title, message, channel) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(new.user_id)
        .bind(new.complaint_id)
        .bind(&new.title)
        .bind(&new.message)
        .bind(new.channel)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create notification", e))
    }

    /// List a recipient's notifications, most recent first.
    pub async fn find_by_recipient(
        &self,
        user_id: Uuid,
        limit: i64,
    ) -> AppResult<Vec<Notification>> {
        sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications WHERE user_id = $1 ORDER BY created_at DESC LIMIT $2",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list notifications", e))
    }

    /// Record confirmed email delivery on an existing row: set `sent_at`
    /// and flip the channel tag to EMAIL.
    pub async fn mark_email_sent(&self, id: Uuid, sent_at: DateTime<Utc>) -> AppResult<()> {
        let result = sqlx::query("UPDATE notifications SET sent_at = $2, channel = $3 WHERE id = $1")
            .bind(id)
            .bind(sent_at)
            .bind(NotificationChannel::Email)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to mark notification sent", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Notification {id} not found")));
        }
        Ok(())
    }
}

#[async_trait]
impl NotificationStore for NotificationRepository {
    async fn insert(&self, notification: NewNotification) -> AppResult<Notification> {
        self.create(&notification).await
    }

    async fn mark_email_sent(&self, id: Uuid, sent_at: DateTime<Utc>) -> AppResult<()> {
        self.mark_email_sent(id, sent_at).await
    }
}
