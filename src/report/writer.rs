use crate::domain::model::PricingQuote;
use crate::domain::ports::ReportSink;
use crate::report::fields::ReportFields;
use crate::report::html::HtmlRenderer;
use crate::utils::error::{PricingError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_FILE_STEM: &str = "automation_pricing_report";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Html,
    Json,
    Csv,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Html => "html",
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ReportFormat {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" | "htm" => Ok(ReportFormat::Html),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            _ => Err(PricingError::UnknownVariant {
                kind: "report format".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    quote: &'a PricingQuote,
    fields: BTreeMap<String, String>,
}

/// Renders quotes into the configured formats and hands them to a sink.
pub struct ReportWriter<K: ReportSink> {
    sink: K,
    formats: Vec<ReportFormat>,
    file_stem: String,
}

impl<K: ReportSink> ReportWriter<K> {
    pub fn new(sink: K, formats: Vec<ReportFormat>) -> Self {
        Self {
            sink,
            formats,
            file_stem: DEFAULT_FILE_STEM.to_string(),
        }
    }

    pub fn with_file_stem(mut self, file_stem: impl Into<String>) -> Self {
        self.file_stem = file_stem.into();
        self
    }

    pub fn file_name(&self, format: ReportFormat) -> String {
        format!("{}.{}", self.file_stem, format.extension())
    }

    pub fn render(&self, quote: &PricingQuote, format: ReportFormat) -> Result<Vec<u8>> {
        match format {
            ReportFormat::Html => Ok(HtmlRenderer::new()?.render(quote)?.into_bytes()),
            ReportFormat::Json => {
                let report = JsonReport {
                    quote,
                    fields: ReportFields::from_quote(quote).to_map(),
                };
                Ok(serde_json::to_vec_pretty(&report)?)
            }
            ReportFormat::Csv => render_csv(&ReportFields::from_quote(quote)),
        }
    }

    /// Writes one file per format, returning where each landed.
    pub fn write_all(&self, quote: &PricingQuote) -> Result<Vec<String>> {
        let mut written = Vec::with_capacity(self.formats.len());
        for format in &self.formats {
            let data = self.render(quote, *format)?;
            let file_name = self.file_name(*format);
            tracing::debug!("Writing {} report ({} bytes) to {}", format, data.len(), file_name);
            written.push(self.sink.write_report(&file_name, &data)?);
        }
        Ok(written)
    }
}

fn render_csv(fields: &ReportFields) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["field", "value"])?;
    for (key, value) in fields.iter() {
        writer.write_record([key, value])?;
    }
    writer
        .into_inner()
        .map_err(|e| PricingError::IoError(e.into_error()))
}
