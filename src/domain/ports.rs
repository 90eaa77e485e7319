use crate::domain::model::{AdvancedInputs, PricingInputs};
use crate::utils::error::Result;

/// Where report bytes end up.
pub trait ReportSink {
    fn write_report(&self, file_name: &str, data: &[u8]) -> Result<String>;
}

/// Supplies the inputs for one quote.
pub trait QuoteSource {
    fn quote_name(&self) -> Option<&str> {
        None
    }
    fn basic_inputs(&self) -> Result<PricingInputs>;
    fn advanced_inputs(&self) -> Result<AdvancedInputs>;
}
