//! Load quote requests from JSON documents and flat CSV files

use super::profiles::{
    DiscountSelection, DriverProfile, LocationProfile, PolicyProfile, QuoteRequest, VehicleProfile,
    DEFAULT_YEARS_CLEAN, UNSET,
};
use crate::error::LoadError;
use crate::tables::{AddOn, Discount};
use csv::Reader;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

/// A request read from a batch file, tagged with its row id
#[derive(Debug, Clone, PartialEq)]
pub struct BatchRequest {
    pub id: String,
    pub request: QuoteRequest,
}

/// Raw CSV row; blank integer cells take the same defaults as a JSON request
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    id: String,
    at_fault_major: Option<i32>,
    at_fault_minor: Option<i32>,
    no_fault: Option<i32>,
    hit_and_run: Option<i32>,
    duis: Option<i32>,
    age: Option<i32>,
    years_clean: Option<i32>,
    violations: Option<i32>,
    brand_type_score: Option<i32>,
    repair_complexity_score: Option<i32>,
    parts_score: Option<i32>,
    vehicle_age: Option<i32>,
    theft_rate_score: Option<i32>,
    anti_theft_feature_score: Option<i32>,
    crash_test_rating: Option<i32>,
    active_safety_features: Option<i32>,
    passive_safety_features: Option<i32>,
    crime_level_factor: Option<i32>,
    anti_theft_adjustment: Option<i32>,
    coverage_type: Option<String>,
    #[serde(default)]
    add_ons: String,
    #[serde(default)]
    discounts: String,
}

/// Split a `;`-separated key list, ignoring blanks
fn parse_keys<T: FromStr>(cell: &str) -> Result<Vec<T>, T::Err> {
    cell.split(';')
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::parse)
        .collect()
}

impl CsvRow {
    fn into_request(self) -> Result<BatchRequest, LoadError> {
        let coverage_type = match self.coverage_type.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(key) => Some(key.parse()?),
        };
        let add_ons: Vec<AddOn> = parse_keys(&self.add_ons)?;
        let discounts: Vec<Discount> = parse_keys(&self.discounts)?;

        let value = |cell: Option<i32>| cell.unwrap_or(UNSET);

        let request = QuoteRequest {
            driver: DriverProfile {
                at_fault_major: value(self.at_fault_major),
                at_fault_minor: value(self.at_fault_minor),
                no_fault: value(self.no_fault),
                hit_and_run: value(self.hit_and_run),
                duis: value(self.duis),
                age: value(self.age),
                years_clean: self.years_clean.unwrap_or(DEFAULT_YEARS_CLEAN),
                violations: value(self.violations),
            },
            vehicle: VehicleProfile {
                brand_type_score: value(self.brand_type_score),
                repair_complexity_score: value(self.repair_complexity_score),
                parts_score: value(self.parts_score),
                vehicle_age: value(self.vehicle_age),
                theft_rate_score: value(self.theft_rate_score),
                anti_theft_feature_score: value(self.anti_theft_feature_score),
                crash_test_rating: value(self.crash_test_rating),
                active_safety_features: value(self.active_safety_features),
                passive_safety_features: value(self.passive_safety_features),
            },
            location: LocationProfile {
                crime_level_factor: value(self.crime_level_factor),
                anti_theft_adjustment: value(self.anti_theft_adjustment),
            },
            policy: PolicyProfile {
                coverage_type,
                add_ons: add_ons.into_iter().collect(),
            },
            discounts: DiscountSelection::new(&discounts),
        };

        Ok(BatchRequest {
            id: self.id,
            request,
        })
    }
}

/// Load all requests from a CSV file
pub fn load_requests<P: AsRef<Path>>(path: P) -> Result<Vec<BatchRequest>, LoadError> {
    load_requests_from_reader(File::open(path)?)
}

/// Load requests from any reader (e.g., string buffer, stdin)
pub fn load_requests_from_reader<R: Read>(reader: R) -> Result<Vec<BatchRequest>, LoadError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut requests = Vec::new();

    for (idx, result) in csv_reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        let request = row.into_request().map_err(|e| LoadError::Row {
            row: idx + 1,
            message: e.to_string(),
        })?;
        requests.push(request);
    }

    Ok(requests)
}

/// Load a single request from a JSON file
pub fn load_request_json<P: AsRef<Path>>(path: P) -> Result<QuoteRequest, LoadError> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}
