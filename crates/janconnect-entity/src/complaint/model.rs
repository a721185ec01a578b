//! Complaint entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::category::ComplaintCategory;
use super::priority::ComplaintPriority;
use super::status::ComplaintStatus;

/// A citizen-filed grievance.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Complaint {
    /// Unique internal identifier.
    pub id: Uuid,
    /// Human-facing reference code, `JC-<year>-<sequence>`. Assigned once
    /// at creation, immutable, never reused.
    pub reference: String,
    /// The submitting citizen.
    pub user_id: Uuid,
    /// Short summary of the grievance.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Grievance category.
    pub category: ComplaintCategory,
    /// Priority level.
    pub priority: ComplaintPriority,
    /// Current lifecycle status.
    pub status: ComplaintStatus,
    /// Free-text location, as entered or reverse-geocoded.
    pub location: Option<String>,
    /// Submission language tag.
    pub language: Option<String>,
    /// Attachment storage references.
    pub attachments: Option<Vec<String>>,
    /// When the complaint was filed.
    pub created_at: DateTime<Utc>,
    /// When the complaint was last updated. Always >= `created_at`.
    pub updated_at: DateTime<Utc>,
}

impl Complaint {
    /// Check if the complaint has reached a terminal state.
    pub fn is_closed(&self) -> bool {
        self.status.is_terminal()
    }
}

/// Data required to file a new complaint.
///
/// The reference code, status (`Submitted`), and timestamps are assigned
/// by the store at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewComplaint {
    /// The submitting citizen.
    pub user_id: Uuid,
    /// Short summary.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Grievance category.
    pub category: ComplaintCategory,
    /// Priority level.
    pub priority: ComplaintPriority,
    /// Free-text location (optional).
    pub location: Option<String>,
    /// Submission language tag (optional).
    pub language: Option<String>,
    /// Attachment storage references (optional).
    pub attachments: Option<Vec<String>>,
}
