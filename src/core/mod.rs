pub mod advanced;
pub mod basic;
pub mod engine;
pub mod market;

pub use crate::domain::model::{
    AdvancedInputs, AdvancedPricingResult, BasicPricingResult, PricingInputs, PricingQuote,
};
pub use crate::domain::ports::{QuoteSource, ReportSink};
pub use crate::utils::error::Result;
