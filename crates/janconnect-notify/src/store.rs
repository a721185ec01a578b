//! Persistence capability traits consumed by the dispatcher.
//!
//! Concrete implementations live in `janconnect-database`; tests supply
//! in-memory versions. The dispatcher only needs these few operations,
//! with read-your-writes consistency for a just-inserted notification row.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use janconnect_core::AppResult;
use janconnect_entity::complaint::Complaint;
use janconnect_entity::notification::{NewNotification, Notification};
use janconnect_entity::user::Profile;

/// Read access to complaint records.
#[async_trait]
pub trait ComplaintStore: Send + Sync {
    /// Find a complaint by its internal identifier.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Complaint>>;
}

/// Write access to notification rows.
#[async_trait]
pub trait NotificationStore: Send + Sync {
    /// Insert a notification row and return it.
    async fn insert(&self, notification: NewNotification) -> AppResult<Notification>;

    /// Mark a row as delivered by email: set `sent_at` and flip the
    /// channel tag to EMAIL.
    async fn mark_email_sent(&self, id: Uuid, sent_at: DateTime<Utc>) -> AppResult<()>;
}

/// Read access to account profiles and role membership.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Find the profile for a user.
    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Option<Profile>>;

    /// List every account currently holding the administrator role.
    /// Fetched fresh per dispatch — role membership must be current at
    /// send time.
    async fn list_admin_ids(&self) -> AppResult<Vec<Uuid>>;
}
