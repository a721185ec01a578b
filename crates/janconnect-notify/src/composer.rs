//! Status notification message composition.
//!
//! Pure and deterministic: a total mapping from `(status, role)` to a
//! title/body pair. Totality is enforced by exhaustive matching over both
//! enums, so a missing variant is a compile error rather than a silent
//! runtime fallback.

use serde::{Deserialize, Serialize};

use janconnect_entity::complaint::ComplaintStatus;

/// Which message variant a recipient receives. Derived at dispatch time,
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecipientRole {
    /// The citizen who filed the complaint.
    Owner,
    /// An account holding the administrator role.
    Admin,
}

/// A composed notification message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Notification title, `"Complaint <STATUS words>: <complaint title>"`.
    pub title: String,
    /// Role-appropriate body text.
    pub body: String,
}

/// Compose the notification message for a status change.
pub fn compose(status: ComplaintStatus, role: RecipientRole, complaint_title: &str) -> Message {
    Message {
        title: format!("Complaint {}: {}", status.words(), complaint_title),
        body: body_for(status, role).to_string(),
    }
}

fn body_for(status: ComplaintStatus, role: RecipientRole) -> &'static str {
    match (status, role) {
        (ComplaintStatus::Submitted, RecipientRole::Owner) => {
            "Your complaint has been submitted successfully."
        }
        (ComplaintStatus::AiProcessed, RecipientRole::Owner) => {
            "Your complaint has been classified and routed to the relevant department."
        }
        (ComplaintStatus::Assigned, RecipientRole::Owner) => {
            "Your complaint has been assigned to a department officer."
        }
        (ComplaintStatus::InProgress, RecipientRole::Owner) => {
            "Good news! Work has started on resolving your complaint."
        }
        (ComplaintStatus::Resolved, RecipientRole::Owner) => {
            "Your complaint has been resolved. Thank you for your patience."
        }
        (ComplaintStatus::Rejected, RecipientRole::Owner) => {
            "Your complaint could not be processed. Please contact support for more information."
        }
        (ComplaintStatus::Submitted, RecipientRole::Admin) => {
            "A new complaint has been filed and is awaiting triage."
        }
        (ComplaintStatus::AiProcessed, RecipientRole::Admin) => {
            "Automated classification has completed. The complaint is ready for assignment."
        }
        (ComplaintStatus::Assigned, RecipientRole::Admin) => {
            "The complaint has been assigned and requires department follow-up."
        }
        (ComplaintStatus::InProgress, RecipientRole::Admin) => {
            "Resolution work on the complaint is underway."
        }
        (ComplaintStatus::Resolved, RecipientRole::Admin) => {
            "The complaint has been marked as resolved."
        }
        (ComplaintStatus::Rejected, RecipientRole::Admin) => {
            "The complaint has been rejected and closed."
        }
    }
}
