pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::{AdvancedInputs, PricingInputs, QuoteSource};
#[cfg(feature = "cli")]
use crate::domain::model::{ExperienceLevel, Location};
#[cfg(feature = "cli")]
use crate::report::ReportFormat;
#[cfg(feature = "cli")]
use crate::utils::error::{PricingError, Result};
#[cfg(feature = "cli")]
use crate::utils::validation::{
    enforce_range, validate_file_stem, validate_path, InputPolicy, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;

/// Command-line inputs. Defaults match the calculator form's initial state.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "automation-pricing")]
#[command(about = "Pricing calculator for automation, VA and integration services")]
pub struct CliConfig {
    /// Beginner, intermediate, advanced or expert
    #[arg(long, default_value = "intermediate")]
    pub experience: ExperienceLevel,

    /// Primary market, e.g. north-america, europe, australia-nz
    #[arg(long, default_value = "north-america")]
    pub market: Location,

    /// Project complexity from 1 (simple) to 10 (many integrations)
    #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
    pub complexity: i64,

    /// Estimated hours for the project (1-500)
    #[arg(long, default_value_t = 20.0, allow_negative_numbers = true)]
    pub hours: f64,

    /// Types of automation services offered, comma separated
    #[arg(long, value_delimiter = ',', default_value = "Email Automation")]
    pub services: Vec<String>,

    /// Tools and technologies used, comma separated
    #[arg(long, value_delimiter = ',', default_value = "Zapier")]
    pub tools: Vec<String>,

    /// Include ongoing maintenance
    #[arg(long)]
    pub maintenance: bool,

    /// Monthly maintenance hours (1-100), used with --maintenance
    #[arg(long, default_value_t = 5.0, allow_negative_numbers = true)]
    pub maintenance_hours: f64,

    /// Expected revenue impact for the client
    #[arg(long, default_value_t = 10_000.0, allow_negative_numbers = true)]
    pub revenue_impact: f64,

    /// Monthly hours saved by the automation
    #[arg(long, default_value_t = 20.0, allow_negative_numbers = true)]
    pub time_savings: f64,

    /// Hourly value of the client's time
    #[arg(long, default_value_t = 50.0, allow_negative_numbers = true)]
    pub client_hourly_value: f64,

    /// Number of systems to connect (1-20)
    #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
    pub integrations: i64,

    /// Requires custom coding
    #[arg(long)]
    pub custom_coding: bool,

    /// Includes client training
    #[arg(long)]
    pub training: bool,

    /// Expected monthly active users (1-10000)
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    pub users: i64,

    /// Title used in exported reports
    #[arg(long)]
    pub name: Option<String>,

    /// Directory to export reports into; nothing is written without it
    #[arg(long)]
    pub output_path: Option<String>,

    #[arg(long, value_delimiter = ',', default_value = "html")]
    pub formats: Vec<ReportFormat>,

    /// File name (without extension) for exported reports
    #[arg(long)]
    pub file_stem: Option<String>,

    /// Reject out-of-range values instead of clamping them
    #[arg(long)]
    pub strict: bool,

    /// Print the sample market rates table and exit
    #[arg(long)]
    pub market_insights: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn input_policy(&self) -> InputPolicy {
        if self.strict {
            InputPolicy::Strict
        } else {
            InputPolicy::Clamp
        }
    }
}

#[cfg(feature = "cli")]
impl QuoteSource for CliConfig {
    fn quote_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn basic_inputs(&self) -> Result<PricingInputs> {
        let policy = self.input_policy();
        let (c_min, c_max) = PricingInputs::COMPLEXITY_RANGE;
        let complexity = enforce_range(
            policy,
            "complexity",
            self.complexity,
            i64::from(c_min),
            i64::from(c_max),
        )?;

        PricingInputs {
            experience_level: self.experience,
            location: self.market,
            // enforce_range keeps this within 1..=10
            complexity: complexity as u8,
            hours_required: self.hours,
            tools_used: self.tools.clone(),
            has_maintenance: self.maintenance,
            maintenance_hours: self.maintenance_hours,
            service_types: self.services.clone(),
        }
        .enforce(policy)
    }

    fn advanced_inputs(&self) -> Result<AdvancedInputs> {
        let policy = self.input_policy();
        let (i_min, i_max) = AdvancedInputs::INTEGRATION_RANGE;
        let (u_min, u_max) = AdvancedInputs::USERS_RANGE;
        let integrations = enforce_range(
            policy,
            "integrations",
            self.integrations,
            i64::from(i_min),
            i64::from(i_max),
        )?;
        let users = enforce_range(policy, "users", self.users, i64::from(u_min), i64::from(u_max))?;

        AdvancedInputs {
            revenue_impact: self.revenue_impact,
            monthly_time_savings_hours: self.time_savings,
            client_hourly_value: self.client_hourly_value,
            integration_count: integrations as u32,
            custom_coding: self.custom_coding,
            training_required: self.training,
            monthly_active_users: users as u32,
        }
        .enforce(policy)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(output_path) = &self.output_path {
            validate_path("output_path", output_path)?;
            if self.formats.is_empty() {
                return Err(PricingError::config("at least one report format is required"));
            }
        }
        if let Some(stem) = &self.file_stem {
            validate_file_stem("file_stem", stem)?;
        }
        Ok(())
    }
}
