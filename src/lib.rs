//! Auto Quote - Deterministic auto insurance quote engine
//!
//! This library provides:
//! - Driver, vehicle and location risk scoring
//! - Table-driven policy add-on and discount adjustments
//! - Quote composition with a full factor breakdown
//! - Input defaults auditing and CSV/JSON request loading
//! - Parallel batch quoting

pub mod error;
pub mod tables;
pub mod inputs;
pub mod rating;
pub mod quote;
pub mod batch;

// Re-export commonly used types
pub use error::{LoadError, RatingIssue};
pub use tables::{AddOn, CoverageType, Discount, RatingTables};
pub use inputs::{
    DiscountSelection, DriverProfile, LocationProfile, PolicyProfile, QuoteRequest, VehicleProfile,
};
pub use quote::{calculate_quote, QuoteConfig, QuoteEngine, QuoteResult};
pub use batch::{BatchRunner, BatchSummary};
