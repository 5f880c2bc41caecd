//! Quote output structures

use crate::error::RatingIssue;
use serde::Serialize;

/// Multipliers and adjustments that make up the gross quote
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskFactors {
    pub driver_risk: f64,
    pub vehicle_risk: f64,
    pub location_risk: f64,
    pub policy_adjustment: f64,
    pub discount_fraction: f64,
}

/// Intermediate scores behind the risk factors
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuoteScores {
    pub accident_points: f64,
    pub violation_points: f64,
    pub crime_score: f64,
    pub repair_score: f64,
    pub theft_score: f64,
    pub safety_score: f64,
}

/// Priced quote with its full breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteResult {
    pub base_rate: f64,

    /// Price before discounts
    pub gross_quote: f64,

    /// Amount taken off the gross quote
    pub discount_amount: f64,

    /// Price the applicant pays
    pub net_quote: f64,

    pub factors: RiskFactors,
    pub scores: QuoteScores,

    /// Rating issues raised while pricing, in the order they occurred
    pub issues: Vec<RatingIssue>,
}

impl QuoteResult {
    /// True when a whole-table failure left a sentinel in the factors
    pub fn is_degraded(&self) -> bool {
        self.issues.iter().any(RatingIssue::is_fatal)
    }

    /// First whole-table failure, if any
    pub fn fatal_issue(&self) -> Option<&RatingIssue> {
        self.issues.iter().find(|issue| issue.is_fatal())
    }
}
