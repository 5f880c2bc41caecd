//! Defaults audit: reports input fields still holding an "unset" value
//!
//! Advisory only. Findings are logged at warn level and returned; nothing
//! here changes the inputs or stops a quote.

use super::profiles::{
    DiscountSelection, DriverProfile, LocationProfile, PolicyProfile, QuoteRequest, VehicleProfile,
    UNSET,
};
use serde::Serialize;

/// Why a field was flagged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultKind {
    /// Integer still at -1
    Sentinel,
    /// List or set with no entries
    Empty,
    /// Optional value never provided
    Missing,
}

/// One flagged field, e.g. `driver_inputs.age`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefaultFinding {
    pub path: String,
    pub kind: DefaultKind,
}

impl DefaultFinding {
    fn log(&self) {
        match self.kind {
            DefaultKind::Sentinel => log::warn!("{} is using default value {}", self.path, UNSET),
            DefaultKind::Empty => log::warn!("{} list is empty or not set", self.path),
            DefaultKind::Missing => log::warn!("{} is None", self.path),
        }
    }
}

/// Collects findings under a path prefix
struct Auditor<'a> {
    prefix: &'a str,
    findings: Vec<DefaultFinding>,
}

impl<'a> Auditor<'a> {
    fn new(prefix: &'a str) -> Self {
        Self {
            prefix,
            findings: Vec::new(),
        }
    }

    fn push(&mut self, field: &str, kind: DefaultKind) {
        let path = if self.prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", self.prefix, field)
        };
        let finding = DefaultFinding { path, kind };
        finding.log();
        self.findings.push(finding);
    }

    fn int(&mut self, field: &str, value: i32) -> &mut Self {
        if value == UNSET {
            self.push(field, DefaultKind::Sentinel);
        }
        self
    }

    fn list(&mut self, field: &str, len: usize) -> &mut Self {
        if len == 0 {
            self.push(field, DefaultKind::Empty);
        }
        self
    }

    fn option<T>(&mut self, field: &str, value: &Option<T>) -> &mut Self {
        if value.is_none() {
            self.push(field, DefaultKind::Missing);
        }
        self
    }

    fn finish(self) -> Vec<DefaultFinding> {
        self.findings
    }
}

/// Profiles that can enumerate their own fields for the defaults audit
pub trait AuditDefaults {
    fn audit_defaults(&self, prefix: &str) -> Vec<DefaultFinding>;
}

impl AuditDefaults for DriverProfile {
    fn audit_defaults(&self, prefix: &str) -> Vec<DefaultFinding> {
        let mut audit = Auditor::new(prefix);
        audit
            .int("at_fault_major", self.at_fault_major)
            .int("at_fault_minor", self.at_fault_minor)
            .int("no_fault", self.no_fault)
            .int("hit_and_run", self.hit_and_run)
            .int("duis", self.duis)
            .int("age", self.age)
            .int("years_clean", self.years_clean)
            .int("violations", self.violations);
        audit.finish()
    }
}

impl AuditDefaults for VehicleProfile {
    fn audit_defaults(&self, prefix: &str) -> Vec<DefaultFinding> {
        let mut audit = Auditor::new(prefix);
        audit
            .int("brand_type_score", self.brand_type_score)
            .int("repair_complexity_score", self.repair_complexity_score)
            .int("parts_score", self.parts_score)
            .int("vehicle_age", self.vehicle_age)
            .int("theft_rate_score", self.theft_rate_score)
            .int("anti_theft_feature_score", self.anti_theft_feature_score)
            .int("crash_test_rating", self.crash_test_rating)
            .int("active_safety_features", self.active_safety_features)
            .int("passive_safety_features", self.passive_safety_features);
        audit.finish()
    }
}

impl AuditDefaults for LocationProfile {
    fn audit_defaults(&self, prefix: &str) -> Vec<DefaultFinding> {
        let mut audit = Auditor::new(prefix);
        audit
            .int("crime_level_factor", self.crime_level_factor)
            .int("anti_theft_adjustment", self.anti_theft_adjustment);
        audit.finish()
    }
}

impl AuditDefaults for PolicyProfile {
    fn audit_defaults(&self, prefix: &str) -> Vec<DefaultFinding> {
        let mut audit = Auditor::new(prefix);
        audit
            .option("coverage_type", &self.coverage_type)
            .list("add_ons", self.add_ons.len());
        audit.finish()
    }
}

impl AuditDefaults for DiscountSelection {
    fn audit_defaults(&self, prefix: &str) -> Vec<DefaultFinding> {
        let mut audit = Auditor::new(prefix);
        audit.list("discounts", self.discounts.len());
        audit.finish()
    }
}

/// Audit the driver, vehicle, location and policy profiles of a request
///
/// The discount selection is left out: an empty selection is an ordinary
/// applicant with no discounts.
pub fn audit_request(request: &QuoteRequest) -> Vec<DefaultFinding> {
    let mut findings = request.driver.audit_defaults("driver_inputs");
    findings.extend(request.vehicle.audit_defaults("vehicle_inputs"));
    findings.extend(request.location.audit_defaults("location_inputs"));
    findings.extend(request.policy.audit_defaults("policy_inputs"));
    findings
}
