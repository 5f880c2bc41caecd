//! Error and issue types for rating and loading

use crate::tables::{AddOn, CoverageType, Discount};
use serde::Serialize;
use thiserror::Error;

/// Conditions raised while resolving policy and discount adjustments
///
/// Per-entry issues (`UnknownAddOn`, `UnknownDiscount`) are recovered by
/// skipping the entry, and a coverage with no discount table prices with no
/// discount (`NoDiscountTable`). Whole-table policy issues (`InvalidPolicyType`,
/// `InvalidPolicyWeight`) degrade the quote unless the caller asks for
/// strict rating.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RatingIssue {
    #[error("invalid policy type '{}'", coverage_label(.coverage))]
    InvalidPolicyType { coverage: Option<CoverageType> },

    #[error("could not extract policy weight for '{coverage}'")]
    InvalidPolicyWeight { coverage: CoverageType },

    #[error("add-on '{add_on}' not offered for policy type '{coverage}'")]
    UnknownAddOn { coverage: CoverageType, add_on: AddOn },

    #[error("discount '{discount}' not found for policy type '{coverage}'")]
    UnknownDiscount { coverage: CoverageType, discount: Discount },

    #[error("no discount table for policy type '{coverage}'")]
    NoDiscountTable { coverage: CoverageType },
}

impl RatingIssue {
    /// Whole-table failures; these are the ones strict rating rejects
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            RatingIssue::InvalidPolicyType { .. } | RatingIssue::InvalidPolicyWeight { .. }
        )
    }
}

fn coverage_label(coverage: &Option<CoverageType>) -> &'static str {
    coverage.map(|c| c.as_str()).unwrap_or("<unset>")
}

/// Unrecognised key string for one of the rating enums
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: '{value}'")]
pub struct ParseKeyError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseKeyError {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Failures while loading rate tables or quote requests from disk
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Key(#[from] ParseKeyError),

    #[error("row {row}: {message}")]
    Row { row: usize, message: String },
}
