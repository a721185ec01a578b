//! Request context carrying the authenticated identity.
//!
//! Authentication is an external capability; it yields an opaque user
//! identity and an administrator flag, which is all the services need.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use janconnect_core::types::UserId;

/// Context for the current authenticated request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: UserId,
    /// Whether the account holds the administrator role.
    pub is_admin: bool,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: UserId, is_admin: bool) -> Self {
        Self {
            user_id,
            is_admin,
            request_time: Utc::now(),
        }
    }
}
