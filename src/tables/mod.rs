//! Rate tables for coverage weights, add-on weights and discount fractions

mod keys;
pub mod loader;

pub use keys::{AddOn, CoverageType, Discount};
pub use loader::LoadedRates;

use crate::error::LoadError;
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

/// Stored policy weight meaning "no usable weight for this coverage"
pub const POLICY_WEIGHT_SENTINEL: f64 = -1.0;

/// Base weight and add-on weights for one coverage type
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyWeights {
    pub weight: f64,
    pub add_ons: HashMap<AddOn, f64>,
}

impl PolicyWeights {
    pub fn new(weight: f64, add_ons: &[(AddOn, f64)]) -> Self {
        Self {
            weight,
            add_ons: add_ons.iter().copied().collect(),
        }
    }

    /// Weight for an add-on, if this coverage offers it
    pub fn add_on_weight(&self, add_on: AddOn) -> Option<f64> {
        self.add_ons.get(&add_on).copied()
    }
}

/// Policy and discount lookup tables, read-only once built
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingTables {
    policies: HashMap<CoverageType, PolicyWeights>,
    discounts: HashMap<CoverageType, HashMap<Discount, f64>>,
}

impl RatingTables {
    /// Tables with no coverage entries at all
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard compiled-in rate tables
    pub fn standard() -> Self {
        use AddOn::*;
        use Discount::*;

        let mut tables = Self::empty();

        tables.insert_policy(
            CoverageType::Liability,
            PolicyWeights::new(
                1.0,
                &[
                    (RoadsideAssistance, 0.15),
                    (RentalReimbursement, 0.1),
                    (GlassCoverage, 0.05),
                ],
            ),
        );
        tables.insert_policy(
            CoverageType::FullCoverage,
            PolicyWeights::new(
                1.5,
                &[
                    (RoadsideAssistance, 0.15),
                    (RentalReimbursement, 0.1),
                    (GapCoverage, 0.05),
                    (GlassCoverage, 0.05),
                ],
            ),
        );
        tables.insert_policy(
            CoverageType::CollisionOnly,
            PolicyWeights::new(1.2, &[(RentalReimbursement, 0.1), (GlassCoverage, 0.05)]),
        );

        tables.insert_discounts(
            CoverageType::Liability,
            &[(MultiPolicy, 0.1), (LowMileage, 0.05)],
        );
        tables.insert_discounts(
            CoverageType::FullCoverage,
            &[(MultiPolicy, 0.1), (SafeDriver, 0.12), (AntiTheft, 0.03)],
        );
        tables.insert_discounts(
            CoverageType::CollisionOnly,
            &[(SafeDriver, 0.12), (LowMileage, 0.05)],
        );

        tables
    }

    /// Shared instance of [`RatingTables::standard`], built on first use
    pub fn standard_ref() -> &'static RatingTables {
        static STANDARD: OnceLock<RatingTables> = OnceLock::new();
        STANDARD.get_or_init(RatingTables::standard)
    }

    /// Load tables from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self, LoadError> {
        let loaded = LoadedRates::load_from(path)?;
        Ok(Self::from_loaded(&loaded))
    }

    /// Build tables from already-parsed rate rows
    pub fn from_loaded(loaded: &LoadedRates) -> Self {
        let mut tables = Self::empty();

        for &(coverage, weight) in &loaded.policy_weights {
            tables.insert_policy(coverage, PolicyWeights::new(weight, &[]));
        }
        for &(coverage, add_on, weight) in &loaded.add_on_weights {
            if let Some(policy) = tables.policies.get_mut(&coverage) {
                policy.add_ons.insert(add_on, weight);
            }
        }
        for &(coverage, discount, fraction) in &loaded.discount_fractions {
            tables
                .discounts
                .entry(coverage)
                .or_default()
                .insert(discount, fraction);
        }

        tables
    }

    /// Insert or replace the weights for a coverage type
    pub fn insert_policy(&mut self, coverage: CoverageType, weights: PolicyWeights) {
        self.policies.insert(coverage, weights);
    }

    /// Insert or replace the discount sub-table for a coverage type
    pub fn insert_discounts(&mut self, coverage: CoverageType, fractions: &[(Discount, f64)]) {
        self.discounts
            .insert(coverage, fractions.iter().copied().collect());
    }

    pub fn remove_coverage(&mut self, coverage: CoverageType) {
        self.policies.remove(&coverage);
        self.discounts.remove(&coverage);
    }

    pub fn policy(&self, coverage: CoverageType) -> Option<&PolicyWeights> {
        self.policies.get(&coverage)
    }

    pub fn discounts(&self, coverage: CoverageType) -> Option<&HashMap<Discount, f64>> {
        self.discounts.get(&coverage)
    }

    /// Coverage types missing from either table
    pub fn missing_coverages(&self) -> Vec<CoverageType> {
        CoverageType::ALL
            .iter()
            .copied()
            .filter(|c| !self.policies.contains_key(c) || !self.discounts.contains_key(c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_tables_cover_every_type() {
        let tables = RatingTables::standard();
        assert!(tables.missing_coverages().is_empty());
    }

    #[test]
    fn test_standard_policy_weights() {
        let tables = RatingTables::standard();

        let full = tables.policy(CoverageType::FullCoverage).unwrap();
        assert_eq!(full.weight, 1.5);
        assert_eq!(full.add_on_weight(AddOn::RoadsideAssistance), Some(0.15));
        assert_eq!(full.add_on_weight(AddOn::GapCoverage), Some(0.05));

        let collision = tables.policy(CoverageType::CollisionOnly).unwrap();
        assert_eq!(collision.weight, 1.2);
        assert_eq!(collision.add_on_weight(AddOn::RoadsideAssistance), None);

        let liability = tables.policy(CoverageType::Liability).unwrap();
        assert_eq!(liability.add_on_weight(AddOn::GapCoverage), None);
    }

    #[test]
    fn test_standard_discounts() {
        let tables = RatingTables::standard();

        let liability = tables.discounts(CoverageType::Liability).unwrap();
        assert_eq!(liability.get(&Discount::MultiPolicy), Some(&0.1));
        assert_eq!(liability.get(&Discount::SafeDriver), None);

        let collision = tables.discounts(CoverageType::CollisionOnly).unwrap();
        assert_eq!(collision.get(&Discount::SafeDriver), Some(&0.12));
        assert_eq!(collision.get(&Discount::LowMileage), Some(&0.05));
    }

    #[test]
    fn test_standard_ref_matches_standard() {
        assert_eq!(RatingTables::standard_ref(), &RatingTables::standard());
    }

    #[test]
    fn test_remove_coverage() {
        let mut tables = RatingTables::standard();
        tables.remove_coverage(CoverageType::Liability);
        assert!(tables.policy(CoverageType::Liability).is_none());
        assert_eq!(tables.missing_coverages(), vec![CoverageType::Liability]);
    }
}
