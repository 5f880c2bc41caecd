//! Price every request in a CSV file
//!
//! Outputs one row per request with the quote and its factors

use anyhow::{Context, Result};
use auto_quote::batch::{BatchQuote, BatchRunner, BatchSummary};
use auto_quote::inputs::load_requests;
use auto_quote::{QuoteConfig, QuoteEngine, RatingTables};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "quote_block", about = "Price a CSV file of quote requests")]
struct Args {
    /// Request CSV
    #[arg(short, long, default_value = "data/requests/sample_requests.csv")]
    input: PathBuf,

    /// Output CSV
    #[arg(short, long, default_value = "quote_block_output.csv")]
    output: PathBuf,

    /// Rate table directory; compiled-in tables when omitted
    #[arg(long)]
    rates: Option<PathBuf>,

    /// Price rows one at a time so log lines stay in row order
    #[arg(long)]
    sequential: bool,

    #[arg(long)]
    no_audit: bool,
}

/// Flattened output row
#[derive(Debug, Serialize)]
struct OutputRow<'a> {
    id: &'a str,
    gross_quote: f64,
    discount_amount: f64,
    net_quote: f64,
    driver_risk: f64,
    vehicle_risk: f64,
    location_risk: f64,
    policy_adjustment: f64,
    discount_fraction: f64,
    repair_score: f64,
    theft_score: f64,
    safety_score: f64,
    degraded: bool,
    issues: String,
}

impl<'a> From<&'a BatchQuote> for OutputRow<'a> {
    fn from(quote: &'a BatchQuote) -> Self {
        let result = &quote.result;
        Self {
            id: &quote.id,
            gross_quote: result.gross_quote,
            discount_amount: result.discount_amount,
            net_quote: result.net_quote,
            driver_risk: result.factors.driver_risk,
            vehicle_risk: result.factors.vehicle_risk,
            location_risk: result.factors.location_risk,
            policy_adjustment: result.factors.policy_adjustment,
            discount_fraction: result.factors.discount_fraction,
            repair_score: result.scores.repair_score,
            theft_score: result.scores.theft_score,
            safety_score: result.scores.safety_score,
            degraded: result.is_degraded(),
            issues: result
                .issues
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    println!("Loading requests from {}...", args.input.display());

    let requests = load_requests(&args.input)
        .with_context(|| format!("loading requests from {}", args.input.display()))?;
    println!("Loaded {} requests in {:?}", requests.len(), start.elapsed());

    let tables = match &args.rates {
        Some(dir) => RatingTables::from_csv_path(dir)
            .with_context(|| format!("loading rate tables from {}", dir.display()))?,
        None => RatingTables::standard(),
    };
    let runner = BatchRunner::new(QuoteEngine::new(
        tables,
        QuoteConfig {
            audit_inputs: !args.no_audit,
        },
    ));

    let quote_start = Instant::now();
    let quotes = if args.sequential {
        runner.run_sequential(&requests)
    } else {
        runner.run(&requests)
    };
    println!("Quotes complete in {:?}", quote_start.elapsed());

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    for quote in &quotes {
        writer.serialize(OutputRow::from(quote))?;
    }
    writer.flush()?;
    println!("Output written to {}", args.output.display());

    let summary = BatchSummary::from_quotes(&quotes);
    println!("\nBlock Summary:");
    println!("  Quotes:         {}", summary.quotes);
    println!("  Degraded:       {}", summary.degraded);
    println!("  Rating issues:  {}", summary.issues);
    println!("  Total gross:    {:.2}", summary.total_gross);
    println!("  Total discount: {:.2}", summary.total_discount);
    println!("  Total net:      {:.2}", summary.total_net);

    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
