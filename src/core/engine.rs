use crate::core::advanced::compute_advanced_pricing;
use crate::core::basic::compute_basic_pricing;
use crate::core::{AdvancedInputs, PricingInputs, PricingQuote, QuoteSource, ReportSink};
use crate::report::ReportWriter;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Computes both engines for one set of inputs. Basic always runs first
/// because the advanced engine consumes its project total and maintenance fee.
pub fn compute_quote(
    name: Option<String>,
    inputs: PricingInputs,
    advanced_inputs: AdvancedInputs,
) -> PricingQuote {
    let basic = compute_basic_pricing(&inputs);
    let advanced = compute_advanced_pricing(&basic, &advanced_inputs);

    PricingQuote {
        name,
        generated_at: chrono::Utc::now(),
        inputs,
        advanced_inputs,
        basic,
        advanced,
    }
}

pub struct PricingEngine<S: QuoteSource> {
    source: S,
}

impl<S: QuoteSource> PricingEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Pulls inputs from the source, checks them, and prices them.
    pub fn quote(&self) -> Result<PricingQuote> {
        let inputs = self.source.basic_inputs()?;
        inputs.validate()?;
        let advanced_inputs = self.source.advanced_inputs()?;
        advanced_inputs.validate()?;

        tracing::debug!("Basic inputs: {:?}", inputs);
        tracing::debug!("Advanced inputs: {:?}", advanced_inputs);

        let quote = compute_quote(
            self.source.quote_name().map(str::to_string),
            inputs,
            advanced_inputs,
        );

        tracing::info!(
            "Priced {} / {}: ${:.2}/h, project ${:.2}, enhanced ${:.2}",
            quote.inputs.experience_level,
            quote.inputs.location,
            quote.basic.adjusted_hourly_rate,
            quote.basic.project_total,
            quote.advanced.enhanced_project_cost
        );

        Ok(quote)
    }

    /// Prices the inputs and exports every configured report format.
    /// Returns the quote and the paths written.
    pub fn run<K: ReportSink>(&self, writer: &ReportWriter<K>) -> Result<(PricingQuote, Vec<String>)> {
        let quote = self.quote()?;
        let written = writer.write_all(&quote)?;
        for path in &written {
            tracing::info!("Report saved to: {}", path);
        }
        Ok((quote, written))
    }
}
