//! Quote composition and results

mod engine;
mod result;

pub use engine::{calculate_quote, QuoteConfig, QuoteEngine, BASE_RATE};
pub use result::{QuoteResult, QuoteScores, RiskFactors};
