//! Table-driven policy and discount adjustments

use crate::error::RatingIssue;
use crate::tables::{AddOn, CoverageType, Discount, RatingTables, POLICY_WEIGHT_SENTINEL};
use serde::Serialize;

/// A resolved adjustment plus the per-entry issues skipped along the way
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    pub value: f64,
    pub skipped: Vec<RatingIssue>,
}

impl Resolution {
    fn new(value: f64) -> Self {
        Self {
            value,
            skipped: Vec::new(),
        }
    }
}

/// Coverage base weight plus the weights of every recognised add-on
///
/// Unknown add-ons are logged and skipped. A coverage missing from the table
/// or stored with the sentinel weight is returned as an error.
pub fn policy_adjustment<'a, I>(
    tables: &RatingTables,
    coverage: CoverageType,
    add_ons: I,
) -> Result<Resolution, RatingIssue>
where
    I: IntoIterator<Item = &'a AddOn>,
{
    let Some(policy) = tables.policy(coverage) else {
        log::error!("Invalid policy type '{}' for policy adjustment", coverage);
        return Err(RatingIssue::InvalidPolicyType {
            coverage: Some(coverage),
        });
    };

    if policy.weight == POLICY_WEIGHT_SENTINEL {
        log::warn!("Could not extract policy weight for '{}'", coverage);
        return Err(RatingIssue::InvalidPolicyWeight { coverage });
    }

    let mut resolution = Resolution::new(policy.weight);
    for &add_on in add_ons {
        match policy.add_on_weight(add_on) {
            Some(weight) => resolution.value += weight,
            None => {
                let issue = RatingIssue::UnknownAddOn { coverage, add_on };
                log::warn!("{}", issue);
                resolution.skipped.push(issue);
            }
        }
    }

    Ok(resolution)
}

/// Sum of discount fractions the coverage offers for the selected keys
///
/// Never fails: a coverage with no discount table yields 0.0 with a
/// `NoDiscountTable` issue, unknown keys are skipped.
pub fn discount_fraction<'a, I>(tables: &RatingTables, coverage: CoverageType, discounts: I) -> Resolution
where
    I: IntoIterator<Item = &'a Discount>,
{
    let Some(offered) = tables.discounts(coverage) else {
        let issue = RatingIssue::NoDiscountTable { coverage };
        log::warn!("{}", issue);
        return Resolution {
            value: 0.0,
            skipped: vec![issue],
        };
    };

    let mut resolution = Resolution::new(0.0);
    for &discount in discounts {
        match offered.get(&discount) {
            Some(fraction) => resolution.value += fraction,
            None => {
                let issue = RatingIssue::UnknownDiscount { coverage, discount };
                log::warn!("{}", issue);
                resolution.skipped.push(issue);
            }
        }
    }

    resolution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::PolicyWeights;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_full_coverage_with_add_ons() {
        let tables = RatingTables::standard();
        let resolved = policy_adjustment(
            &tables,
            CoverageType::FullCoverage,
            &[AddOn::RoadsideAssistance, AddOn::RentalReimbursement],
        )
        .unwrap();

        assert_abs_diff_eq!(resolved.value, 1.75, epsilon = 1e-12);
        assert!(resolved.skipped.is_empty());
    }

    #[test]
    fn test_base_weight_without_add_ons() {
        let tables = RatingTables::standard();
        let resolved = policy_adjustment(&tables, CoverageType::CollisionOnly, &[]).unwrap();
        assert_eq!(resolved.value, 1.2);
    }

    #[test]
    fn test_unknown_add_on_skipped() {
        let tables = RatingTables::standard();
        let resolved = policy_adjustment(
            &tables,
            CoverageType::CollisionOnly,
            &[AddOn::RoadsideAssistance, AddOn::GlassCoverage, AddOn::GapCoverage],
        )
        .unwrap();

        assert_abs_diff_eq!(resolved.value, 1.25, epsilon = 1e-12);
        assert_eq!(
            resolved.skipped,
            vec![
                RatingIssue::UnknownAddOn {
                    coverage: CoverageType::CollisionOnly,
                    add_on: AddOn::RoadsideAssistance,
                },
                RatingIssue::UnknownAddOn {
                    coverage: CoverageType::CollisionOnly,
                    add_on: AddOn::GapCoverage,
                },
            ]
        );
    }

    #[test]
    fn test_missing_coverage_is_invalid_type() {
        let mut tables = RatingTables::standard();
        tables.remove_coverage(CoverageType::Liability);

        let result = policy_adjustment(&tables, CoverageType::Liability, &[]);
        assert_eq!(
            result,
            Err(RatingIssue::InvalidPolicyType {
                coverage: Some(CoverageType::Liability)
            })
        );
    }

    #[test]
    fn test_sentinel_weight_is_invalid_weight() {
        let mut tables = RatingTables::standard();
        tables.insert_policy(
            CoverageType::FullCoverage,
            PolicyWeights::new(POLICY_WEIGHT_SENTINEL, &[(AddOn::GlassCoverage, 0.05)]),
        );

        let result = policy_adjustment(&tables, CoverageType::FullCoverage, &[AddOn::GlassCoverage]);
        assert_eq!(
            result,
            Err(RatingIssue::InvalidPolicyWeight {
                coverage: CoverageType::FullCoverage
            })
        );
    }

    #[test]
    fn test_full_coverage_discounts() {
        let tables = RatingTables::standard();
        let resolved = discount_fraction(
            &tables,
            CoverageType::FullCoverage,
            &[Discount::MultiPolicy, Discount::SafeDriver, Discount::AntiTheft],
        );

        assert_abs_diff_eq!(resolved.value, 0.25, epsilon = 1e-12);
        assert!(resolved.skipped.is_empty());
    }

    #[test]
    fn test_discount_not_offered_for_liability() {
        let tables = RatingTables::standard();
        let resolved = discount_fraction(&tables, CoverageType::Liability, &[Discount::SafeDriver]);

        assert_eq!(resolved.value, 0.0);
        assert_eq!(
            resolved.skipped,
            vec![RatingIssue::UnknownDiscount {
                coverage: CoverageType::Liability,
                discount: Discount::SafeDriver,
            }]
        );
    }

    #[test]
    fn test_unknown_discount_does_not_stop_sum() {
        let tables = RatingTables::standard();
        let resolved = discount_fraction(
            &tables,
            CoverageType::Liability,
            &[Discount::SafeDriver, Discount::LowMileage, Discount::MultiPolicy],
        );

        assert_abs_diff_eq!(resolved.value, 0.15, epsilon = 1e-12);
        assert_eq!(resolved.skipped.len(), 1);
    }

    #[test]
    fn test_missing_discount_table_yields_zero() {
        let mut tables = RatingTables::standard();
        tables.remove_coverage(CoverageType::CollisionOnly);

        let resolved = discount_fraction(&tables, CoverageType::CollisionOnly, &[Discount::SafeDriver]);
        assert_eq!(resolved.value, 0.0);
        assert_eq!(
            resolved.skipped,
            vec![RatingIssue::NoDiscountTable {
                coverage: CoverageType::CollisionOnly
            }]
        );
    }
}
