//! Rating keys: coverage types, add-ons and discounts

use crate::error::ParseKeyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coverage type selected on the policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageType {
    Liability,
    FullCoverage,
    CollisionOnly,
}

impl CoverageType {
    pub const ALL: [CoverageType; 3] = [
        CoverageType::Liability,
        CoverageType::FullCoverage,
        CoverageType::CollisionOnly,
    ];

    /// Key used in rate files and request files
    pub fn as_str(&self) -> &'static str {
        match self {
            CoverageType::Liability => "liability",
            CoverageType::FullCoverage => "full_coverage",
            CoverageType::CollisionOnly => "collision_only",
        }
    }
}

impl FromStr for CoverageType {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "liability" => Ok(CoverageType::Liability),
            "full_coverage" => Ok(CoverageType::FullCoverage),
            "collision_only" => Ok(CoverageType::CollisionOnly),
            other => Err(ParseKeyError::new("coverage type", other)),
        }
    }
}

impl fmt::Display for CoverageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional policy feature carrying its own cost weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOn {
    RoadsideAssistance,
    RentalReimbursement,
    GlassCoverage,
    GapCoverage,
}

impl AddOn {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddOn::RoadsideAssistance => "roadside_assistance",
            AddOn::RentalReimbursement => "rental_reimbursement",
            AddOn::GlassCoverage => "glass_coverage",
            AddOn::GapCoverage => "gap_coverage",
        }
    }
}

impl FromStr for AddOn {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "roadside_assistance" => Ok(AddOn::RoadsideAssistance),
            "rental_reimbursement" => Ok(AddOn::RentalReimbursement),
            "glass_coverage" => Ok(AddOn::GlassCoverage),
            "gap_coverage" => Ok(AddOn::GapCoverage),
            other => Err(ParseKeyError::new("add-on", other)),
        }
    }
}

impl fmt::Display for AddOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discount the applicant is eligible for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Discount {
    MultiPolicy,
    SafeDriver,
    LowMileage,
    AntiTheft,
}

impl Discount {
    pub fn as_str(&self) -> &'static str {
        match self {
            Discount::MultiPolicy => "multi_policy",
            Discount::SafeDriver => "safe_driver",
            Discount::LowMileage => "low_mileage",
            Discount::AntiTheft => "anti_theft",
        }
    }
}

impl FromStr for Discount {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "multi_policy" => Ok(Discount::MultiPolicy),
            "safe_driver" => Ok(Discount::SafeDriver),
            "low_mileage" => Ok(Discount::LowMileage),
            "anti_theft" => Ok(Discount::AntiTheft),
            other => Err(ParseKeyError::new("discount", other)),
        }
    }
}

impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coverage_keys() {
        for coverage in CoverageType::ALL {
            assert_eq!(coverage.as_str().parse::<CoverageType>(), Ok(coverage));
        }
        assert!("comprehensive".parse::<CoverageType>().is_err());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(" gap_coverage ".parse::<AddOn>(), Ok(AddOn::GapCoverage));
        assert_eq!("anti_theft\n".parse::<Discount>(), Ok(Discount::AntiTheft));
    }

    #[test]
    fn test_unknown_key_error() {
        let err = "towing".parse::<AddOn>().unwrap_err();
        assert_eq!(err.to_string(), "unknown add-on: 'towing'");
    }

    #[test]
    fn test_serde_names_match_keys() {
        let json = serde_json::to_string(&Discount::MultiPolicy).unwrap();
        assert_eq!(json, "\"multi_policy\"");
        let coverage: CoverageType = serde_json::from_str("\"collision_only\"").unwrap();
        assert_eq!(coverage, CoverageType::CollisionOnly);
    }
}
