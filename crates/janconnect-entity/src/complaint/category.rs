//! Complaint category enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Grievance category chosen by the citizen at submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "complaint_category", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplaintCategory {
    RoadTransport,
    WaterSupply,
    Electricity,
    Sanitation,
    PublicHealth,
    Education,
    Housing,
    LawOrder,
    Environment,
    Other,
}

impl ComplaintCategory {
    /// Return the category in its wire form, e.g. `"ROAD_TRANSPORT"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RoadTransport => "ROAD_TRANSPORT",
            Self::WaterSupply => "WATER_SUPPLY",
            Self::Electricity => "ELECTRICITY",
            Self::Sanitation => "SANITATION",
            Self::PublicHealth => "PUBLIC_HEALTH",
            Self::Education => "EDUCATION",
            Self::Housing => "HOUSING",
            Self::LawOrder => "LAW_ORDER",
            Self::Environment => "ENVIRONMENT",
            Self::Other => "OTHER",
        }
    }

    /// Display label shown to citizens.
    pub fn label(&self) -> &'static str {
        match self {
            Self::RoadTransport => "Road & Transport",
            Self::WaterSupply => "Water Supply",
            Self::Electricity => "Electricity",
            Self::Sanitation => "Sanitation",
            Self::PublicHealth => "Public Health",
            Self::Education => "Education",
            Self::Housing => "Housing",
            Self::LawOrder => "Law & Order",
            Self::Environment => "Environment",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ComplaintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ComplaintCategory {
    type Err = janconnect_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ROAD_TRANSPORT" => Ok(Self::RoadTransport),
            "WATER_SUPPLY" => Ok(Self::WaterSupply),
            "ELECTRICITY" => Ok(Self::Electricity),
            "SANITATION" => Ok(Self::Sanitation),
            "PUBLIC_HEALTH" => Ok(Self::PublicHealth),
            "EDUCATION" => Ok(Self::Education),
            "HOUSING" => Ok(Self::Housing),
            "LAW_ORDER" => Ok(Self::LawOrder),
            "ENVIRONMENT" => Ok(Self::Environment),
            "OTHER" => Ok(Self::Other),
            _ => Err(janconnect_core::AppError::validation(format!(
                "Unknown complaint category: '{s}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(
            "LAW_ORDER".parse::<ComplaintCategory>().unwrap(),
            ComplaintCategory::LawOrder
        );
        assert!("POTHOLES".parse::<ComplaintCategory>().is_err());
    }

    #[test]
    fn test_label() {
        assert_eq!(ComplaintCategory::RoadTransport.label(), "Road & Transport");
    }
}
