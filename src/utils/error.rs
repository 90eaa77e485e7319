use thiserror::Error;

#[derive(Error, Debug)]
pub enum PricingError {
    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown {kind}: '{value}'")]
    UnknownVariant { kind: String, value: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("TOML parsing error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Template error: {0}")]
    TemplateError(#[from] tera::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Report,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PricingError {
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidInput {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } | Self::UnknownVariant { .. } => ErrorCategory::Input,
            Self::ConfigError { .. } | Self::ConfigParseError(_) => ErrorCategory::Configuration,
            Self::TemplateError(_) | Self::CsvError(_) | Self::SerializationError(_) => {
                ErrorCategory::Report
            }
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Report => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::InvalidInput { field, reason, .. } => {
                format!("Adjust '{}' so that it satisfies: {}, or drop --strict to clamp it", field, reason)
            }
            Self::UnknownVariant { kind, .. } => match kind.as_str() {
                "experience level" => {
                    "Use one of: beginner, intermediate, advanced, expert".to_string()
                }
                "market" => "Use one of: north-america, europe, asia, australia-nz, south-america, africa, global".to_string(),
                "report format" => "Use one of: html, json, csv".to_string(),
                "input policy" => "Use one of: clamp, strict".to_string(),
                "service type" => format!(
                    "Use one of: {}",
                    crate::domain::model::SERVICE_TYPES.join(", ")
                ),
                _ => format!("Check the spelling of the {}", kind),
            },
            Self::ConfigError { .. } | Self::ConfigParseError(_) => {
                "Check the scenario file against the documented [scenario], [basic], [advanced] and [report] tables".to_string()
            }
            Self::TemplateError(_) => "The report template failed to render; try the json or csv format".to_string(),
            Self::CsvError(_) | Self::SerializationError(_) => {
                "Retry the export or choose a different report format".to_string()
            }
            Self::IoError(_) => {
                "Make sure the output directory is writable and the file paths exist".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidInput { field, value, reason } => {
                format!("The value {} for '{}' is not allowed: {}", value, field, reason)
            }
            Self::UnknownVariant { kind, value } => {
                format!("'{}' is not a recognised {}", value, kind)
            }
            Self::ConfigError { message } => format!("Scenario configuration problem: {}", message),
            Self::ConfigParseError(e) => format!("The scenario file is not valid TOML: {}", e),
            Self::TemplateError(e) => format!("Could not render the HTML report: {}", e),
            Self::CsvError(e) => format!("Could not write the CSV report: {}", e),
            Self::IoError(e) => format!("File system error: {}", e),
            Self::SerializationError(e) => format!("Could not serialise the quote: {}", e),
        }
    }

    /// Process exit code for the binaries.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, PricingError>;
