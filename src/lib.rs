pub mod config;
pub mod core;
pub mod domain;
pub mod report;
pub mod utils;

#[cfg(test)]
mod property_tests;

pub use config::cli::LocalReportSink;
pub use config::toml_config::TomlConfig;
#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use core::advanced::compute_advanced_pricing;
pub use core::basic::compute_basic_pricing;
pub use core::engine::{compute_quote, PricingEngine};
pub use domain::model::{
    AdvancedInputs, AdvancedPricingResult, BasicPricingResult, ExperienceLevel, Location,
    PricingInputs, PricingQuote,
};
pub use report::{ReportFormat, ReportWriter};
pub use utils::error::{PricingError, Result};
