//! Risk multipliers for driver, vehicle and location, each anchored at 1.0

/// Age band loading applied to the driver risk
pub fn age_adjustment(age: f64) -> f64 {
    if age < 25.0 {
        0.15
    } else if age < 65.0 {
        0.0
    } else {
        0.10
    }
}

/// Driver risk multiplier
///
/// Formula: 1 + 0.02·accident + 0.015·violation − 0.01·(−0.01·years_clean) + age_adj
///
/// The years-clean term is negated and then subtracted, so each clean year
/// adds 0.0001 to the multiplier.
pub fn driver_risk(accident_points: f64, violation_points: f64, years_clean: f64, age: f64) -> f64 {
    let years_clean_points = -(years_clean * 0.01);
    1.0 + (0.02 * accident_points) + (0.015 * violation_points) - (0.01 * years_clean_points)
        + age_adjustment(age)
}

/// Vehicle risk multiplier
///
/// Formula: 1 + (repair + theft − safety) / 100
pub fn vehicle_risk(repair_score: f64, theft_score: f64, safety_score: f64) -> f64 {
    1.0 + (repair_score + theft_score - safety_score) / 100.0
}

/// Location risk multiplier; drops below 1.0 for a negative crime score
///
/// Formula: 1 + 0.02·accident + 0.025·crime
pub fn location_risk(accident_points: f64, crime_score: f64) -> f64 {
    1.0 + (0.02 * accident_points) + (0.025 * crime_score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_neutral_anchors() {
        assert_eq!(driver_risk(0.0, 0.0, 0.0, 40.0), 1.0);
        assert_eq!(vehicle_risk(0.0, 0.0, 0.0), 1.0);
        assert_eq!(location_risk(0.0, 0.0), 1.0);
    }

    #[test]
    fn test_age_band_boundaries() {
        let at = |age: f64| driver_risk(0.0, 0.0, 0.0, age);
        assert_abs_diff_eq!(at(24.0), 1.15, epsilon = 1e-12);
        assert_eq!(at(25.0), 1.0);
        assert_eq!(at(64.0), 1.0);
        assert_abs_diff_eq!(at(65.0), 1.10, epsilon = 1e-12);
    }

    #[test]
    fn test_years_clean_adds_risk() {
        let clean = driver_risk(0.0, 0.0, 5.0, 40.0);
        assert_abs_diff_eq!(clean, 1.0005, epsilon = 1e-12);
        assert!(clean > driver_risk(0.0, 0.0, 0.0, 40.0));
    }

    #[test]
    fn test_reference_driver_risk() {
        // accident 5.5, violation 0.015, 5 clean years, age 23
        let risk = driver_risk(5.5, 0.015, 5.0, 23.0);
        assert_abs_diff_eq!(risk, 1.0 + 0.11 + 0.000225 + 0.0005 + 0.15, epsilon = 1e-12);
    }

    #[test]
    fn test_vehicle_risk_reference() {
        assert_abs_diff_eq!(vehicle_risk(16.5, 4.16, 11.0), 1.0966, epsilon = 1e-12);
    }

    #[test]
    fn test_location_risk_below_neutral() {
        assert_abs_diff_eq!(location_risk(5.5, 2.0), 1.16, epsilon = 1e-12);
        assert!(location_risk(0.0, -4.0) < 1.0);
        assert_abs_diff_eq!(location_risk(0.0, -4.0), 0.9, epsilon = 1e-12);
    }
}
