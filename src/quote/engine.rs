//! Quote composer: runs the rating pipeline for one request

use super::result::{QuoteResult, QuoteScores, RiskFactors};
use crate::error::RatingIssue;
use crate::inputs::{audit_request, QuoteRequest};
use crate::rating;
use crate::tables::{RatingTables, POLICY_WEIGHT_SENTINEL};

/// Starting premium before any risk or policy adjustment
pub const BASE_RATE: f64 = 320.0;

/// Configuration for a quote engine
#[derive(Debug, Clone)]
pub struct QuoteConfig {
    /// Run the defaults audit on every request before pricing
    pub audit_inputs: bool,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self { audit_inputs: true }
    }
}

/// Prices quote requests against a set of rate tables
#[derive(Debug, Clone)]
pub struct QuoteEngine {
    tables: RatingTables,
    config: QuoteConfig,
}

impl QuoteEngine {
    /// Create a new quote engine with given tables and config
    pub fn new(tables: RatingTables, config: QuoteConfig) -> Self {
        Self { tables, config }
    }

    /// Engine over the standard tables with default config
    pub fn standard() -> Self {
        Self::new(RatingTables::standard(), QuoteConfig::default())
    }

    /// Price a request
    ///
    /// Whole-table failures do not abort: the policy adjustment falls back to
    /// the -1 sentinel and the issue is recorded on the result.
    pub fn calculate_quote(&self, request: &QuoteRequest) -> QuoteResult {
        compose_quote(&self.tables, &self.config, request)
    }

    /// Price a request, rejecting it on any whole-table failure
    pub fn calculate_quote_strict(&self, request: &QuoteRequest) -> Result<QuoteResult, RatingIssue> {
        let result = self.calculate_quote(request);
        match result.fatal_issue() {
            Some(issue) => Err(issue.clone()),
            None => Ok(result),
        }
    }
}

impl Default for QuoteEngine {
    fn default() -> Self {
        Self::standard()
    }
}

/// Price a request against the standard tables with default config
pub fn calculate_quote(request: &QuoteRequest) -> QuoteResult {
    compose_quote(RatingTables::standard_ref(), &QuoteConfig::default(), request)
}

fn compose_quote(tables: &RatingTables, config: &QuoteConfig, request: &QuoteRequest) -> QuoteResult {
    if config.audit_inputs {
        audit_request(request);
    }

    let driver = &request.driver;
    let vehicle = &request.vehicle;
    let location = &request.location;
    let policy = &request.policy;

    let base_rate = BASE_RATE;

    let accident_points = rating::accident_points(
        f64::from(driver.at_fault_major),
        f64::from(driver.at_fault_minor),
        f64::from(driver.no_fault),
        f64::from(driver.hit_and_run),
        f64::from(driver.duis),
    );
    let violation_points = rating::violation_points(f64::from(driver.violations));

    let driver_risk = rating::driver_risk(
        accident_points,
        violation_points,
        f64::from(driver.years_clean),
        f64::from(driver.age),
    );

    let crime_score = rating::crime_score(
        f64::from(location.crime_level_factor),
        f64::from(location.anti_theft_adjustment),
    );
    let location_risk = rating::location_risk(accident_points, crime_score);

    let repair_score = rating::repair_score(
        f64::from(vehicle.brand_type_score),
        f64::from(vehicle.repair_complexity_score),
        f64::from(vehicle.parts_score),
        f64::from(vehicle.vehicle_age),
    );
    // Theft score depends on the location risk computed above
    let theft_score = rating::theft_score(
        f64::from(vehicle.theft_rate_score),
        location_risk,
        f64::from(vehicle.anti_theft_feature_score),
    );
    let safety_score = rating::safety_score(
        f64::from(vehicle.crash_test_rating),
        f64::from(vehicle.active_safety_features),
        f64::from(vehicle.passive_safety_features),
    );
    let vehicle_risk = rating::vehicle_risk(repair_score, theft_score, safety_score);

    let mut issues = Vec::new();

    let (policy_adjustment, discount_fraction) = match policy.coverage_type {
        Some(coverage) => {
            let policy_adjustment =
                match rating::policy_adjustment(tables, coverage, &policy.add_ons) {
                    Ok(resolved) => {
                        issues.extend(resolved.skipped);
                        resolved.value
                    }
                    Err(issue) => {
                        issues.push(issue);
                        POLICY_WEIGHT_SENTINEL
                    }
                };

            let discounts = rating::discount_fraction(tables, coverage, &request.discounts.discounts);
            issues.extend(discounts.skipped);

            (policy_adjustment, discounts.value)
        }
        None => {
            log::error!("No coverage type selected; policy adjustment degraded");
            issues.push(RatingIssue::InvalidPolicyType { coverage: None });
            (POLICY_WEIGHT_SENTINEL, 0.0)
        }
    };

    log::info!(
        "bp: {}, dr: {}, vr: {}, lr: {}, pa: {}, dd: {}",
        base_rate,
        driver_risk,
        vehicle_risk,
        location_risk,
        policy_adjustment,
        discount_fraction
    );

    let gross_quote = base_rate * driver_risk * vehicle_risk * location_risk * policy_adjustment;
    let discount_amount = gross_quote * discount_fraction;
    let net_quote = gross_quote - discount_amount;

    log::info!("Quote: {}, Discounted: {}", net_quote, discount_amount);

    QuoteResult {
        base_rate,
        gross_quote,
        discount_amount,
        net_quote,
        factors: RiskFactors {
            driver_risk,
            vehicle_risk,
            location_risk,
            policy_adjustment,
            discount_fraction,
        },
        scores: QuoteScores {
            accident_points,
            violation_points,
            crime_score,
            repair_score,
            theft_score,
            safety_score,
        },
        issues,
    }
}
