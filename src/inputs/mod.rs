//! Quote request structures, defaults audit and request loading

mod profiles;
pub mod audit;
pub mod loader;

pub use profiles::{
    DiscountSelection, DriverProfile, LocationProfile, PolicyProfile, QuoteRequest, VehicleProfile,
    DEFAULT_YEARS_CLEAN, UNSET,
};
pub use audit::{audit_request, AuditDefaults, DefaultFinding, DefaultKind};
pub use loader::{load_request_json, load_requests, load_requests_from_reader, BatchRequest};
