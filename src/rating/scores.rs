//! Leaf risk scores computed from raw profile values
//!
//! No clamping: out-of-range inputs give out-of-range but well-defined scores.

/// Points from accident history
///
/// Formula: 3·major + 1.5·minor + 0.5·no_fault + 4·hit_and_run + 5·duis
pub fn accident_points(
    at_fault_major: f64,
    at_fault_minor: f64,
    no_fault: f64,
    hit_and_run: f64,
    duis: f64,
) -> f64 {
    (at_fault_major * 3.0)
        + (at_fault_minor * 1.5)
        + (no_fault * 0.5)
        + (hit_and_run * 4.0)
        + (duis * 5.0)
}

/// Points from traffic violations. Carries a 0.005 floor even with none.
pub fn violation_points(violations: f64) -> f64 {
    violations * 0.01 + 0.005
}

/// Crime score of the location; negative when mitigation exceeds crime level
pub fn crime_score(crime_level_factor: f64, anti_theft_adjustment: f64) -> f64 {
    crime_level_factor - anti_theft_adjustment
}

/// Repair cost/complexity score (lower is better)
pub fn repair_score(
    brand_type_score: f64,
    repair_complexity_score: f64,
    parts_score: f64,
    vehicle_age: f64,
) -> f64 {
    brand_type_score + repair_complexity_score + parts_score + (vehicle_age / 2.0)
}

/// Theft score of the vehicle
///
/// Takes the location risk multiplier, so it must be computed after
/// [`super::location_risk`].
pub fn theft_score(theft_rate_score: f64, location_risk: f64, anti_theft_feature_score: f64) -> f64 {
    theft_rate_score + location_risk - anti_theft_feature_score
}

/// Safety score (higher is better)
pub fn safety_score(
    crash_test_rating: f64,
    active_safety_features: f64,
    passive_safety_features: f64,
) -> f64 {
    crash_test_rating + active_safety_features * 2.0 + passive_safety_features
}
