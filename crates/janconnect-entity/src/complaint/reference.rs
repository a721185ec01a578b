//! Human-facing complaint reference codes.
//!
//! A reference code has the form `JC-<4-digit year>-<5-digit sequence>`,
//! e.g. `JC-2024-00847`. It is assigned exactly once at creation from a
//! database sequence and never changes or gets reused.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use janconnect_core::AppError;

/// A parsed complaint reference code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReferenceCode {
    /// Year of submission.
    pub year: i32,
    /// Per-year sequence number.
    pub sequence: i64,
}

impl ReferenceCode {
    /// Build a reference code for the given year and sequence number.
    pub fn new(year: i32, sequence: i64) -> Self {
        Self { year, sequence }
    }
}

impl fmt::Display for ReferenceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JC-{:04}-{:05}", self.year, self.sequence)
    }
}

impl FromStr for ReferenceCode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::validation(format!("Invalid reference code: '{s}'"));

        let rest = s.strip_prefix("JC-").ok_or_else(invalid)?;
        let (year, sequence) = rest.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || sequence.len() < 5 {
            return Err(invalid());
        }
        Ok(Self {
            year: year.parse().map_err(|_| invalid())?,
            sequence: sequence.parse().map_err(|_| invalid())?,
        })
    }
}

impl TryFrom<String> for ReferenceCode {
    type Error = AppError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ReferenceCode> for String {
    fn from(code: ReferenceCode) -> String {
        code.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        assert_eq!(ReferenceCode::new(2024, 847).to_string(), "JC-2024-00847");
        assert_eq!(
            ReferenceCode::new(2026, 123456).to_string(),
            "JC-2026-123456"
        );
    }

    #[test]
    fn test_parse_round_trip() {
        let code: ReferenceCode = "JC-2024-00847".parse().unwrap();
        assert_eq!(code, ReferenceCode::new(2024, 847));
        assert_eq!(code.to_string(), "JC-2024-00847");
    }

    #[test]
    fn test_rejects_malformed_codes() {
        assert!("JC-24-00847".parse::<ReferenceCode>().is_err());
        assert!("JC-2024-1".parse::<ReferenceCode>().is_err());
        assert!("XX-2024-00847".parse::<ReferenceCode>().is_err());
        assert!("JC-2024".parse::<ReferenceCode>().is_err());
    }
}
