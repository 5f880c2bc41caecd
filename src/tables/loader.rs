//! CSV-based rate table loader
//!
//! Loads coverage weights, add-on weights and discount fractions from CSV
//! files in data/rates/

use super::{AddOn, CoverageType, Discount};
use crate::error::LoadError;
use csv::Reader;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct PolicyWeightRow {
    coverage_type: String,
    weight: f64,
}

#[derive(Debug, Deserialize)]
struct AddOnWeightRow {
    coverage_type: String,
    add_on: String,
    weight: f64,
}

#[derive(Debug, Deserialize)]
struct DiscountRow {
    coverage_type: String,
    discount: String,
    fraction: f64,
}

/// Load base weights per coverage type
/// Columns: coverage_type,weight
pub fn load_policy_weights<R: Read>(reader: R) -> Result<Vec<(CoverageType, f64)>, LoadError> {
    let mut reader = Reader::from_reader(reader);
    let mut weights = Vec::new();

    for result in reader.deserialize() {
        let row: PolicyWeightRow = result?;
        weights.push((row.coverage_type.parse()?, row.weight));
    }

    Ok(weights)
}

/// Load add-on weights
/// Columns: coverage_type,add_on,weight
pub fn load_add_on_weights<R: Read>(
    reader: R,
) -> Result<Vec<(CoverageType, AddOn, f64)>, LoadError> {
    let mut reader = Reader::from_reader(reader);
    let mut weights = Vec::new();

    for result in reader.deserialize() {
        let row: AddOnWeightRow = result?;
        weights.push((row.coverage_type.parse()?, row.add_on.parse()?, row.weight));
    }

    Ok(weights)
}

/// Load discount fractions
/// Columns: coverage_type,discount,fraction
pub fn load_discount_fractions<R: Read>(
    reader: R,
) -> Result<Vec<(CoverageType, Discount, f64)>, LoadError> {
    let mut reader = Reader::from_reader(reader);
    let mut fractions = Vec::new();

    for result in reader.deserialize() {
        let row: DiscountRow = result?;
        fractions.push((row.coverage_type.parse()?, row.discount.parse()?, row.fraction));
    }

    Ok(fractions)
}

/// All rate rows loaded from a rates directory
#[derive(Debug, Clone, Default)]
pub struct LoadedRates {
    pub policy_weights: Vec<(CoverageType, f64)>,
    pub add_on_weights: Vec<(CoverageType, AddOn, f64)>,
    pub discount_fractions: Vec<(CoverageType, Discount, f64)>,
}

impl LoadedRates {
    /// Load all rates from a specific path
    pub fn load_from(path: &Path) -> Result<Self, LoadError> {
        Self::from_readers(
            File::open(path.join("policy_weights.csv"))?,
            File::open(path.join("add_on_weights.csv"))?,
            File::open(path.join("discount_weights.csv"))?,
        )
    }

    /// Load from any three readers (string buffers, embedded files)
    pub fn from_readers<P: Read, A: Read, D: Read>(
        policy_weights: P,
        add_on_weights: A,
        discount_fractions: D,
    ) -> Result<Self, LoadError> {
        let loaded = Self {
            policy_weights: load_policy_weights(policy_weights)?,
            add_on_weights: load_add_on_weights(add_on_weights)?,
            discount_fractions: load_discount_fractions(discount_fractions)?,
        };
        loaded.validate()?;
        Ok(loaded)
    }

    /// One policy row per coverage; add-on and discount rows must belong to
    /// a coverage with a base weight and appear once per key
    fn validate(&self) -> Result<(), LoadError> {
        let has_policy =
            |coverage: &CoverageType| self.policy_weights.iter().any(|(c, _)| c == coverage);

        let mut seen = HashSet::new();
        for (idx, (coverage, _)) in self.policy_weights.iter().enumerate() {
            if !seen.insert(*coverage) {
                return Err(row_error(
                    idx,
                    format!("duplicate policy weight for coverage '{}'", coverage),
                ));
            }
        }

        let mut seen = HashSet::new();
        for (idx, (coverage, add_on, _)) in self.add_on_weights.iter().enumerate() {
            if !has_policy(coverage) {
                return Err(row_error(
                    idx,
                    format!(
                        "add-on '{}' references coverage '{}' with no policy weight",
                        add_on, coverage
                    ),
                ));
            }
            if !seen.insert((*coverage, *add_on)) {
                return Err(row_error(
                    idx,
                    format!("duplicate add-on '{}' for coverage '{}'", add_on, coverage),
                ));
            }
        }

        let mut seen = HashSet::new();
        for (idx, (coverage, discount, _)) in self.discount_fractions.iter().enumerate() {
            if !has_policy(coverage) {
                return Err(row_error(
                    idx,
                    format!(
                        "discount '{}' references coverage '{}' with no policy weight",
                        discount, coverage
                    ),
                ));
            }
            if !seen.insert((*coverage, *discount)) {
                return Err(row_error(
                    idx,
                    format!("duplicate discount '{}' for coverage '{}'", discount, coverage),
                ));
            }
        }

        Ok(())
    }
}

fn row_error(idx: usize, message: String) -> LoadError {
    LoadError::Row {
        row: idx + 1,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::RatingTables;
    use std::path::PathBuf;

    const POLICY_CSV: &str = "coverage_type,weight\nliability,1.0\nfull_coverage,-1\n";
    const ADD_ON_CSV: &str = "coverage_type,add_on,weight\nliability,glass_coverage,0.05\n";
    const DISCOUNT_CSV: &str = "coverage_type,discount,fraction\nliability,multi_policy,0.1\n";

    fn shipped_rates() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("data/rates")
    }

    #[test]
    fn test_load_from_readers() {
        let loaded = LoadedRates::from_readers(
            POLICY_CSV.as_bytes(),
            ADD_ON_CSV.as_bytes(),
            DISCOUNT_CSV.as_bytes(),
        )
        .expect("Failed to load rates");

        assert_eq!(loaded.policy_weights.len(), 2);
        assert_eq!(loaded.policy_weights[1], (CoverageType::FullCoverage, -1.0));

        let tables = RatingTables::from_loaded(&loaded);
        let liability = tables.policy(CoverageType::Liability).unwrap();
        assert_eq!(liability.add_on_weight(AddOn::GlassCoverage), Some(0.05));
        assert!(tables.discounts(CoverageType::FullCoverage).is_none());
        assert!(tables.policy(CoverageType::CollisionOnly).is_none());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let bad = "coverage_type,weight\ncomprehensive,2.0\n";
        let result = LoadedRates::from_readers(
            bad.as_bytes(),
            ADD_ON_CSV.as_bytes(),
            DISCOUNT_CSV.as_bytes(),
        );
        assert!(matches!(result, Err(LoadError::Key(_))));
    }

    #[test]
    fn test_orphan_add_on_rejected() {
        let add_ons = "coverage_type,add_on,weight\ncollision_only,glass_coverage,0.05\n";
        let result = LoadedRates::from_readers(
            POLICY_CSV.as_bytes(),
            add_ons.as_bytes(),
            DISCOUNT_CSV.as_bytes(),
        );
        assert!(matches!(result, Err(LoadError::Row { row: 1, .. })));
    }

    #[test]
    fn test_duplicate_policy_weight_rejected() {
        let policies = "coverage_type,weight\nliability,1.0\nliability,1.1\n";
        let result = LoadedRates::from_readers(
            policies.as_bytes(),
            ADD_ON_CSV.as_bytes(),
            DISCOUNT_CSV.as_bytes(),
        );
        match result {
            Err(LoadError::Row { row, message }) => {
                assert_eq!(row, 2);
                assert!(message.contains("duplicate policy weight"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_add_on_and_discount_rejected() {
        let add_ons = "coverage_type,add_on,weight\nliability,glass_coverage,0.05\nliability,glass_coverage,0.06\n";
        let result = LoadedRates::from_readers(
            POLICY_CSV.as_bytes(),
            add_ons.as_bytes(),
            DISCOUNT_CSV.as_bytes(),
        );
        assert!(matches!(result, Err(LoadError::Row { row: 2, .. })));

        let discounts = "coverage_type,discount,fraction\nliability,multi_policy,0.1\nliability,multi_policy,0.2\n";
        let result = LoadedRates::from_readers(
            POLICY_CSV.as_bytes(),
            ADD_ON_CSV.as_bytes(),
            discounts.as_bytes(),
        );
        assert!(matches!(result, Err(LoadError::Row { row: 2, .. })));
    }

    #[test]
    fn test_orphan_discount_rejected() {
        let discounts = "coverage_type,discount,fraction\nliability,multi_policy,0.1\ncollision_only,safe_driver,0.12\n";
        let result = LoadedRates::from_readers(
            POLICY_CSV.as_bytes(),
            ADD_ON_CSV.as_bytes(),
            discounts.as_bytes(),
        );
        match result {
            Err(LoadError::Row { row, message }) => {
                assert_eq!(row, 2);
                assert!(message.contains("collision_only"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_shipped_rates_match_standard_tables() {
        let tables = RatingTables::from_csv_path(&shipped_rates())
            .expect("Failed to load shipped rate tables");
        assert_eq!(tables, RatingTables::standard());
    }
}
