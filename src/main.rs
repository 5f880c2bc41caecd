//! Auto Quote CLI
//!
//! Prices a single quote request and prints the result as JSON

use anyhow::{Context, Result};
use auto_quote::inputs::load_request_json;
use auto_quote::{QuoteConfig, QuoteEngine, QuoteRequest, RatingTables};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "auto_quote", version, about = "Price an auto insurance quote")]
struct Args {
    /// JSON quote request; the reference applicant is used when omitted
    #[arg(short, long)]
    request: Option<PathBuf>,

    /// Directory with policy_weights.csv, add_on_weights.csv and discount_weights.csv
    #[arg(long)]
    rates: Option<PathBuf>,

    /// Fail instead of returning a degraded quote on an invalid policy type or weight
    #[arg(long)]
    strict: bool,

    /// Skip the unset-field audit
    #[arg(long)]
    no_audit: bool,

    /// Pretty-print the JSON result
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let tables = match &args.rates {
        Some(dir) => RatingTables::from_csv_path(dir)
            .with_context(|| format!("loading rate tables from {}", dir.display()))?,
        None => RatingTables::standard(),
    };
    for coverage in tables.missing_coverages() {
        log::warn!("Rate tables have no complete entry for '{}'", coverage);
    }

    let request = match &args.request {
        Some(path) => load_request_json(path)
            .with_context(|| format!("reading quote request {}", path.display()))?,
        None => {
            log::info!("No request given; quoting the reference applicant");
            QuoteRequest::reference()
        }
    };

    let engine = QuoteEngine::new(
        tables,
        QuoteConfig {
            audit_inputs: !args.no_audit,
        },
    );

    let result = if args.strict {
        engine
            .calculate_quote_strict(&request)
            .context("strict rating rejected the request")?
    } else {
        engine.calculate_quote(&request)
    };

    let json = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{}", json);

    Ok(())
}
