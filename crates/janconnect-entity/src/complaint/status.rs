//! Complaint lifecycle status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle states of a complaint.
///
/// The happy path is linear: `Submitted → AiProcessed → Assigned →
/// InProgress → Resolved`. `Rejected` is reachable from any non-terminal
/// state. `Resolved` and `Rejected` are terminal; a complaint is never
/// deleted, only transitioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "complaint_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplaintStatus {
    /// Just filed by a citizen.
    Submitted,
    /// Automated classification has run.
    AiProcessed,
    /// Assigned to a department.
    Assigned,
    /// Work has started.
    InProgress,
    /// Resolved to the citizen's satisfaction.
    Resolved,
    /// Could not be processed.
    Rejected,
}

impl ComplaintStatus {
    /// Every status, in lifecycle order. Used by completeness tests.
    pub const ALL: [ComplaintStatus; 6] = [
        Self::Submitted,
        Self::AiProcessed,
        Self::Assigned,
        Self::InProgress,
        Self::Resolved,
        Self::Rejected,
    ];

    /// Check if the status is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Resolved | Self::Rejected)
    }

    /// The next state on the happy path, if any.
    pub fn successor(&self) -> Option<ComplaintStatus> {
        match self {
            Self::Submitted => Some(Self::AiProcessed),
            Self::AiProcessed => Some(Self::Assigned),
            Self::Assigned => Some(Self::InProgress),
            Self::InProgress => Some(Self::Resolved),
            Self::Resolved | Self::Rejected => None,
        }
    }

    /// Whether a transition to `next` is permitted.
    ///
    /// Permitted transitions are the single happy-path step plus rejection
    /// from any non-terminal state.
    pub fn can_transition_to(&self, next: ComplaintStatus) -> bool {
        if self.is_terminal() {
            return false;
        }
        if next == Self::Rejected {
            return true;
        }
        self.successor() == Some(next)
    }

    /// Return the status in its wire form, e.g. `"AI_PROCESSED"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Submitted => "SUBMITTED",
            Self::AiProcessed => "AI_PROCESSED",
            Self::Assigned => "ASSIGNED",
            Self::InProgress => "IN_PROGRESS",
            Self::Resolved => "RESOLVED",
            Self::Rejected => "REJECTED",
        }
    }

    /// Human-readable form with underscores replaced, e.g. `"AI PROCESSED"`.
    /// Used in notification titles.
    pub fn words(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ComplaintStatus {
    type Err = janconnect_core::AppError;

    /// Parse a wire-form status string.
    ///
    /// Anything outside the enumerated set is a data integrity violation
    /// and fails loudly rather than defaulting.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SUBMITTED" => Ok(Self::Submitted),
            "AI_PROCESSED" => Ok(Self::AiProcessed),
            "ASSIGNED" => Ok(Self::Assigned),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "RESOLVED" => Ok(Self::Resolved),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(janconnect_core::AppError::validation(format!(
                "Unknown complaint status: '{s}'"
            ))),
        }
    }
}
