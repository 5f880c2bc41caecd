//! Quote input structures
//!
//! Integer fields left out of a request deserialize to [`UNSET`] so the
//! defaults audit can flag them. `years_clean` is the exception and starts
//! at [`DEFAULT_YEARS_CLEAN`].

use crate::tables::{AddOn, CoverageType, Discount};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Sentinel for an integer input that was never provided
pub const UNSET: i32 = -1;

/// Clean years assumed when a request leaves them out
pub const DEFAULT_YEARS_CLEAN: i32 = 1;

fn unset() -> i32 {
    UNSET
}

fn default_years_clean() -> i32 {
    DEFAULT_YEARS_CLEAN
}

/// Driving history and demographics of the primary driver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverProfile {
    /// Major at-fault accidents
    #[serde(default = "unset")]
    pub at_fault_major: i32,

    /// Minor at-fault accidents
    #[serde(default = "unset")]
    pub at_fault_minor: i32,

    /// No-fault accidents
    #[serde(default = "unset")]
    pub no_fault: i32,

    #[serde(default = "unset")]
    pub hit_and_run: i32,

    /// Driving-under-influence incidents
    #[serde(default = "unset")]
    pub duis: i32,

    #[serde(default = "unset")]
    pub age: i32,

    /// Consecutive years without an incident
    #[serde(default = "default_years_clean")]
    pub years_clean: i32,

    /// Traffic violations on record
    #[serde(default = "unset")]
    pub violations: i32,
}

impl Default for DriverProfile {
    fn default() -> Self {
        Self {
            at_fault_major: UNSET,
            at_fault_minor: UNSET,
            no_fault: UNSET,
            hit_and_run: UNSET,
            duis: UNSET,
            age: UNSET,
            years_clean: DEFAULT_YEARS_CLEAN,
            violations: UNSET,
        }
    }
}

/// Vehicle attributes, mostly scores on a 0-5 convention
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleProfile {
    /// Score based on the brand's repairability
    #[serde(default = "unset")]
    pub brand_type_score: i32,

    #[serde(default = "unset")]
    pub repair_complexity_score: i32,

    /// Parts availability and cost
    #[serde(default = "unset")]
    pub parts_score: i32,

    /// Age of the vehicle in years
    #[serde(default = "unset")]
    pub vehicle_age: i32,

    /// Theft rate for the model
    #[serde(default = "unset")]
    pub theft_rate_score: i32,

    #[serde(default = "unset")]
    pub anti_theft_feature_score: i32,

    #[serde(default = "unset")]
    pub crash_test_rating: i32,

    #[serde(default = "unset")]
    pub active_safety_features: i32,

    #[serde(default = "unset")]
    pub passive_safety_features: i32,
}

impl Default for VehicleProfile {
    fn default() -> Self {
        Self {
            brand_type_score: UNSET,
            repair_complexity_score: UNSET,
            parts_score: UNSET,
            vehicle_age: UNSET,
            theft_rate_score: UNSET,
            anti_theft_feature_score: UNSET,
            crash_test_rating: UNSET,
            active_safety_features: UNSET,
            passive_safety_features: UNSET,
        }
    }
}

/// Garaging location risk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationProfile {
    /// Crime severity in the area
    #[serde(default = "unset")]
    pub crime_level_factor: i32,

    /// Mitigation applied for anti-theft measures at the location
    #[serde(default = "unset")]
    pub anti_theft_adjustment: i32,
}

impl Default for LocationProfile {
    fn default() -> Self {
        Self {
            crime_level_factor: UNSET,
            anti_theft_adjustment: UNSET,
        }
    }
}

/// Coverage selection and add-ons
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyProfile {
    #[serde(default)]
    pub coverage_type: Option<CoverageType>,

    #[serde(default)]
    pub add_ons: BTreeSet<AddOn>,
}

impl PolicyProfile {
    pub fn new(coverage_type: CoverageType, add_ons: &[AddOn]) -> Self {
        Self {
            coverage_type: Some(coverage_type),
            add_ons: add_ons.iter().copied().collect(),
        }
    }
}

/// Discounts the applicant is eligible for
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountSelection {
    #[serde(default)]
    pub discounts: BTreeSet<Discount>,
}

impl DiscountSelection {
    pub fn new(discounts: &[Discount]) -> Self {
        Self {
            discounts: discounts.iter().copied().collect(),
        }
    }

    /// Build the selection from eligibility flags
    pub fn from_flags(
        multi_policy: bool,
        safe_driver: bool,
        low_mileage: bool,
        anti_theft: bool,
    ) -> Self {
        let flags = [
            (multi_policy, Discount::MultiPolicy),
            (safe_driver, Discount::SafeDriver),
            (low_mileage, Discount::LowMileage),
            (anti_theft, Discount::AntiTheft),
        ];

        Self {
            discounts: flags
                .iter()
                .filter(|(eligible, _)| *eligible)
                .map(|(_, discount)| *discount)
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.discounts.is_empty()
    }
}

/// Everything needed to price one quote
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    #[serde(default)]
    pub driver: DriverProfile,
    #[serde(default)]
    pub vehicle: VehicleProfile,
    #[serde(default)]
    pub location: LocationProfile,
    #[serde(default)]
    pub policy: PolicyProfile,
    #[serde(default)]
    pub discounts: DiscountSelection,
}

impl QuoteRequest {
    /// Reference applicant used for the CLI's default run
    ///
    /// 23-year-old driver, one major and one minor at-fault accident, a
    /// 15-year-old car, full coverage with roadside and rental add-ons.
    pub fn reference() -> Self {
        Self {
            driver: DriverProfile {
                at_fault_major: 1,
                at_fault_minor: 1,
                no_fault: 2,
                hit_and_run: 0,
                duis: 0,
                age: 23,
                years_clean: 5,
                violations: 1,
            },
            vehicle: VehicleProfile {
                brand_type_score: 3,
                repair_complexity_score: 2,
                parts_score: 4,
                vehicle_age: 15,
                theft_rate_score: 5,
                anti_theft_feature_score: 2,
                crash_test_rating: 4,
                active_safety_features: 2,
                passive_safety_features: 3,
            },
            location: LocationProfile {
                crime_level_factor: 4,
                anti_theft_adjustment: 2,
            },
            policy: PolicyProfile::new(
                CoverageType::FullCoverage,
                &[AddOn::RoadsideAssistance, AddOn::RentalReimbursement],
            ),
            discounts: DiscountSelection::from_flags(true, true, false, true),
        }
    }
}
