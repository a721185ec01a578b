//! Audience resolution — who receives a notification for a given event.

use std::sync::Arc;

use uuid::Uuid;

use janconnect_core::AppResult;
use janconnect_entity::complaint::Complaint;

use crate::store::ProfileStore;

/// The computed set of identities to notify for one status change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Audience {
    /// The owning citizen. Always notified.
    pub owner: Uuid,
    /// Current administrators, de-duplicated and with the owner removed.
    /// An owner who is also an admin receives a single owner-variant
    /// notification.
    pub admins: Vec<Uuid>,
}

impl Audience {
    /// Owner-only audience, used when admin lookup degrades.
    pub fn owner_only(owner: Uuid) -> Self {
        Self {
            owner,
            admins: Vec::new(),
        }
    }
}

/// Resolves notification recipients for a complaint event.
#[derive(Clone)]
pub struct AudienceResolver {
    /// Profile store for role membership lookups.
    profiles: Arc<dyn ProfileStore>,
}

impl AudienceResolver {
    /// Create a new audience resolver.
    pub fn new(profiles: Arc<dyn ProfileStore>) -> Self {
        Self { profiles }
    }

    /// Resolve the audience for a complaint.
    ///
    /// Admin membership is fetched fresh on every call — it can change
    /// between events and must be current at send time. An empty admin
    /// set is normal, not an error.
    pub async fn resolve(&self, complaint: &Complaint) -> AppResult<Audience> {
        let owner = complaint.user_id;

        let mut admins = self.profiles.list_admin_ids().await?;
        admins.sort();
        admins.dedup();
        admins.retain(|id| *id != owner);

        Ok(Audience { owner, admins })
    }
}

impl std::fmt::Debug for AudienceResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudienceResolver").finish_non_exhaustive()
    }
}
