//! User profile entity model.
//!
//! Authentication itself is an external capability; the portal only sees
//! an opaque user identity plus the profile row it maintains.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Profile data for a portal account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Profile {
    /// The account this profile belongs to.
    pub user_id: Uuid,
    /// Email address, if the citizen provided one.
    pub email: Option<String>,
    /// Display name.
    pub full_name: Option<String>,
    /// Whether the account holds the administrator role.
    pub is_admin: bool,
    /// When the profile was created.
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// The email address usable for outbound delivery, if any.
    pub fn deliverable_email(&self) -> Option<&str> {
        self.email.as_deref().filter(|e| !e.is_empty())
    }
}
