//! Batch runner for quoting many requests at once
//!
//! Holds one engine and prices requests in parallel. Rate tables are shared
//! read-only across worker threads.

use crate::inputs::BatchRequest;
use crate::quote::{QuoteEngine, QuoteResult};
use rayon::prelude::*;
use serde::Serialize;

/// One priced row of a batch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchQuote {
    pub id: String,
    pub result: QuoteResult,
}

/// Totals across a batch
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchSummary {
    pub quotes: usize,
    pub degraded: usize,
    pub issues: usize,
    pub total_gross: f64,
    pub total_discount: f64,
    pub total_net: f64,
}

impl BatchSummary {
    pub fn from_quotes(quotes: &[BatchQuote]) -> Self {
        quotes.iter().fold(Self::default(), |mut summary, quote| {
            let result = &quote.result;
            summary.quotes += 1;
            summary.issues += result.issues.len();
            if result.is_degraded() {
                summary.degraded += 1;
            }
            summary.total_gross += result.gross_quote;
            summary.total_discount += result.discount_amount;
            summary.total_net += result.net_quote;
            summary
        })
    }
}

/// Pre-built engine for pricing batches of requests
#[derive(Debug, Clone, Default)]
pub struct BatchRunner {
    engine: QuoteEngine,
}

impl BatchRunner {
    /// Create runner over an existing engine
    pub fn new(engine: QuoteEngine) -> Self {
        Self { engine }
    }

    /// Price every request in parallel; output order matches input order
    pub fn run(&self, requests: &[BatchRequest]) -> Vec<BatchQuote> {
        requests
            .par_iter()
            .map(|row| BatchQuote {
                id: row.id.clone(),
                result: self.engine.calculate_quote(&row.request),
            })
            .collect()
    }

    /// Price sequentially; used when logs should stay in row order
    pub fn run_sequential(&self, requests: &[BatchRequest]) -> Vec<BatchQuote> {
        requests
            .iter()
            .map(|row| BatchQuote {
                id: row.id.clone(),
                result: self.engine.calculate_quote(&row.request),
            })
            .collect()
    }
}
