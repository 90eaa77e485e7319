use crate::core::{AdvancedInputs, PricingInputs, QuoteSource};
use crate::domain::model::{ExperienceLevel, Location};
use crate::report::{ReportFormat, DEFAULT_FILE_STEM};
use crate::utils::error::{PricingError, Result};
use crate::utils::validation::{
    enforce_range, validate_file_stem, validate_path, InputPolicy, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A pricing scenario stored as TOML. Every table is optional and falls
/// back to the calculator's defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TomlConfig {
    pub scenario: ScenarioConfig,
    pub basic: BasicConfig,
    pub advanced: AdvancedConfig,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioConfig {
    pub name: Option<String>,
    pub description: Option<String>,
    pub input_policy: InputPolicy,
}

/// Integers are read wide so that negative or oversized values reach the
/// input policy instead of failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BasicConfig {
    pub experience: ExperienceLevel,
    pub market: Location,
    pub complexity: i64,
    pub hours: f64,
    pub tools: Vec<String>,
    pub maintenance: bool,
    pub maintenance_hours: f64,
    pub services: Vec<String>,
}

impl Default for BasicConfig {
    fn default() -> Self {
        let defaults = PricingInputs::default();
        Self {
            experience: defaults.experience_level,
            market: defaults.location,
            complexity: i64::from(defaults.complexity),
            hours: defaults.hours_required,
            tools: defaults.tools_used,
            maintenance: defaults.has_maintenance,
            maintenance_hours: defaults.maintenance_hours,
            services: defaults.service_types,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdvancedConfig {
    pub revenue_impact: f64,
    pub time_savings: f64,
    pub client_hourly_value: f64,
    pub integrations: i64,
    pub custom_coding: bool,
    pub training: bool,
    pub users: i64,
}

impl Default for AdvancedConfig {
    fn default() -> Self {
        let defaults = AdvancedInputs::default();
        Self {
            revenue_impact: defaults.revenue_impact,
            time_savings: defaults.monthly_time_savings_hours,
            client_hourly_value: defaults.client_hourly_value,
            integrations: i64::from(defaults.integration_count),
            custom_coding: defaults.custom_coding,
            training: defaults.training_required,
            users: i64::from(defaults.monthly_active_users),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    pub output_path: String,
    #[serde(default = "default_formats")]
    pub formats: Vec<ReportFormat>,
    pub file_stem: Option<String>,
}

fn default_formats() -> Vec<ReportFormat> {
    vec![ReportFormat::Html]
}

impl ReportConfig {
    pub fn file_stem(&self) -> &str {
        self.file_stem.as_deref().unwrap_or(DEFAULT_FILE_STEM)
    }
}

impl TomlConfig {
    /// Loads a scenario from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are
    /// left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| PricingError::config(format!("invalid substitution pattern: {}", e)))?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn input_policy(&self) -> InputPolicy {
        self.scenario.input_policy
    }

    pub fn name(&self) -> Option<&str> {
        self.scenario.name.as_deref()
    }

    /// Output directory, if the scenario asks for an export.
    pub fn output_path(&self) -> Option<&str> {
        self.report.as_ref().map(|r| r.output_path.as_str())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(report) = &self.report {
            validate_path("report.output_path", &report.output_path)?;
            if report.formats.is_empty() {
                return Err(PricingError::config(
                    "report.formats must list at least one of html, json, csv",
                ));
            }
            if let Some(stem) = &report.file_stem {
                validate_file_stem("report.file_stem", stem)?;
            }
        }

        // Strict scenarios fail at load time rather than at pricing time.
        if self.input_policy() == InputPolicy::Strict {
            self.basic_inputs()?;
            self.advanced_inputs()?;
        }

        Ok(())
    }
}

impl QuoteSource for TomlConfig {
    fn quote_name(&self) -> Option<&str> {
        self.name()
    }

    fn basic_inputs(&self) -> Result<PricingInputs> {
        let policy = self.input_policy();
        let (c_min, c_max) = PricingInputs::COMPLEXITY_RANGE;
        let complexity = enforce_range(
            policy,
            "basic.complexity",
            self.basic.complexity,
            i64::from(c_min),
            i64::from(c_max),
        )?;

        PricingInputs {
            experience_level: self.basic.experience,
            location: self.basic.market,
            // enforce_range keeps this within 1..=10
            complexity: complexity as u8,
            hours_required: self.basic.hours,
            tools_used: self.basic.tools.clone(),
            has_maintenance: self.basic.maintenance,
            maintenance_hours: self.basic.maintenance_hours,
            service_types: self.basic.services.clone(),
        }
        .enforce(policy)
    }

    fn advanced_inputs(&self) -> Result<AdvancedInputs> {
        let policy = self.input_policy();
        let (i_min, i_max) = AdvancedInputs::INTEGRATION_RANGE;
        let (u_min, u_max) = AdvancedInputs::USERS_RANGE;

        let integrations = enforce_range(
            policy,
            "advanced.integrations",
            self.advanced.integrations,
            i64::from(i_min),
            i64::from(i_max),
        )?;
        let users = enforce_range(
            policy,
            "advanced.users",
            self.advanced.users,
            i64::from(u_min),
            i64::from(u_max),
        )?;

        AdvancedInputs {
            revenue_impact: self.advanced.revenue_impact,
            monthly_time_savings_hours: self.advanced.time_savings,
            client_hourly_value: self.advanced.client_hourly_value,
            integration_count: integrations as u32,
            custom_coding: self.advanced.custom_coding,
            training_required: self.advanced.training,
            monthly_active_users: users as u32,
        }
        .enforce(policy)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_scenario() {
        let toml_content = r#"
[scenario]
name = "Acme onboarding"
input_policy = "strict"

[basic]
experience = "Expert"
market = "Europe"
complexity = 10
hours = 40
tools = ["Zapier", "n8n", "Python"]
services = ["workflow automation", "Document Automation"]
maintenance = true
maintenance_hours = 8

[advanced]
revenue_impact = 50000
time_savings = 10
client_hourly_value = 80
integrations = 4
custom_coding = true
training = false
users = 250

[report]
output_path = "./quotes"
formats = ["html", "csv"]
file_stem = "acme"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.name(), Some("Acme onboarding"));
        assert_eq!(config.input_policy(), InputPolicy::Strict);
        assert_eq!(config.output_path(), Some("./quotes"));

        let basic = config.basic_inputs().unwrap();
        assert_eq!(basic.experience_level, ExperienceLevel::Expert);
        assert_eq!(basic.location, Location::Europe);
        assert_eq!(basic.hours_required, 40.0);
        assert!(basic.has_maintenance);
        assert_eq!(
            basic.service_types,
            vec!["Workflow Automation".to_string(), "Document Automation".to_string()]
        );

        let advanced = config.advanced_inputs().unwrap();
        assert_eq!(advanced.integration_count, 4);
        assert_eq!(advanced.monthly_active_users, 250);

        let report = config.report.as_ref().unwrap();
        assert_eq!(report.formats, vec![ReportFormat::Html, ReportFormat::Csv]);
        assert_eq!(report.file_stem(), "acme");
    }

    #[test]
    fn test_empty_scenario_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.basic_inputs().unwrap(), PricingInputs::default());
        assert_eq!(config.advanced_inputs().unwrap(), AdvancedInputs::default());
        assert!(config.output_path().is_none());
    }

    #[test]
    fn test_clamp_policy_pulls_values_into_range() {
        let toml_content = r#"
[basic]
complexity = -3
hours = 1000

[advanced]
integrations = 99
users = 0
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());

        let basic = config.basic_inputs().unwrap();
        assert_eq!(basic.complexity, 1);
        assert_eq!(basic.hours_required, 500.0);

        let advanced = config.advanced_inputs().unwrap();
        assert_eq!(advanced.integration_count, 20);
        assert_eq!(advanced.monthly_active_users, 1);
    }

    #[test]
    fn test_strict_policy_fails_validation() {
        let toml_content = r#"
[scenario]
input_policy = "strict"

[advanced]
users = 20000
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("advanced.users"));

        let unknown_service = TomlConfig::from_toml_str(
            "[scenario]\ninput_policy = \"strict\"\n\n[basic]\nservices = [\"Blockchain\"]\n",
        )
        .unwrap();
        assert!(unknown_service.validate().is_err());
    }

    #[test]
    fn test_unknown_keys_and_variants_are_rejected() {
        assert!(TomlConfig::from_toml_str("[basic]\ncomplexitty = 3\n").is_err());
        assert!(TomlConfig::from_toml_str("[basic]\nmarket = \"Mars\"\n").is_err());
        assert!(TomlConfig::from_toml_str("[report]\noutput_path = \"x\"\nformats = [\"pdf\"]\n").is_err());
    }

    #[test]
    fn test_report_without_formats_defaults_to_html() {
        let config = TomlConfig::from_toml_str("[report]\noutput_path = \"./out\"\n").unwrap();
        let report = config.report.as_ref().unwrap();
        assert_eq!(report.formats, vec![ReportFormat::Html]);
        assert_eq!(report.file_stem(), DEFAULT_FILE_STEM);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PRICING_TEST_SCENARIO_NAME", "From Env");

        let toml_content = r#"
[scenario]
name = "${PRICING_TEST_SCENARIO_NAME}"
description = "${PRICING_TEST_UNSET_VARIABLE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.name(), Some("From Env"));
        assert_eq!(
            config.scenario.description.as_deref(),
            Some("${PRICING_TEST_UNSET_VARIABLE}")
        );

        std::env::remove_var("PRICING_TEST_SCENARIO_NAME");
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[scenario]\nname = \"file-test\"\n\n[basic]\nexperience = \"beginner\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.name(), Some("file-test"));
        assert_eq!(
            config.basic_inputs().unwrap().experience_level,
            ExperienceLevel::Beginner
        );
    }
}
