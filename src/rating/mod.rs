//! Rating formulas: leaf scores, risk multipliers and table adjustments

mod scores;
mod risk;
mod adjustments;

pub use scores::{
    accident_points, crime_score, repair_score, safety_score, theft_score, violation_points,
};
pub use risk::{age_adjustment, driver_risk, location_risk, vehicle_risk};
pub use adjustments::{discount_fraction, policy_adjustment, Resolution};
