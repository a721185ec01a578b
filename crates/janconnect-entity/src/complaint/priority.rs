//! Complaint priority enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority level of a complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "complaint_priority", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplaintPriority {
    /// Routine issue.
    Low,
    /// Default priority.
    Medium,
    /// Needs prompt attention.
    High,
    /// Public-safety impact.
    Critical,
}

impl ComplaintPriority {
    /// Return the numeric priority (higher = more urgent).
    pub fn numeric_priority(&self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Critical => 4,
        }
    }

    /// Return the priority in its wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

impl Default for ComplaintPriority {
    fn default() -> Self {
        Self::Medium
    }
}

impl fmt::Display for ComplaintPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_by_numeric_priority() {
        assert!(
            ComplaintPriority::Critical.numeric_priority()
                > ComplaintPriority::High.numeric_priority()
        );
        assert_eq!(ComplaintPriority::default(), ComplaintPriority::Medium);
    }
}
