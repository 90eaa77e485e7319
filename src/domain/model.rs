use crate::utils::error::PricingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tools listed in the calculator's tool picker.
pub const KNOWN_TOOLS: &[&str] = &[
    "Zapier",
    "Make (Integromat)",
    "IFTTT",
    "n8n",
    "Microsoft Power Automate",
    "UiPath",
    "Python",
    "JavaScript",
    "ChatGPT/Claude AI",
    "Custom Development",
];

/// Automation service types the calculator knows about.
pub const SERVICE_TYPES: &[&str] = &[
    "Email Automation",
    "Social Media Automation",
    "Data Processing",
    "Workflow Automation",
    "ChatBot Creation",
    "Document Automation",
    "Lead Generation Automation",
    "Customer Service Automation",
];

/// Catalog spelling of `name`, matched case- and punctuation-insensitively.
pub fn canonical_service_type(name: &str) -> Option<&'static str> {
    let key = normalize_key(name);
    SERVICE_TYPES
        .iter()
        .copied()
        .find(|service| normalize_key(service) == key)
}

/// Lowercases and strips everything but ASCII alphanumerics, so that
/// "North America", "north-america" and "NORTH_AMERICA" compare equal.
fn normalize_key(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ExperienceLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 4] = [
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Advanced,
        ExperienceLevel::Expert,
    ];

    /// Base hourly rate in USD before any modifiers.
    pub fn base_hourly_rate(self) -> f64 {
        match self {
            ExperienceLevel::Beginner => 25.0,
            ExperienceLevel::Intermediate => 50.0,
            ExperienceLevel::Advanced => 85.0,
            ExperienceLevel::Expert => 150.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Advanced => "Advanced",
            ExperienceLevel::Expert => "Expert",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExperienceLevel {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        ExperienceLevel::ALL
            .into_iter()
            .find(|level| normalize_key(level.label()) == key)
            .ok_or_else(|| PricingError::UnknownVariant {
                kind: "experience level".to_string(),
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for ExperienceLevel {
    type Error = PricingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ExperienceLevel> for String {
    fn from(level: ExperienceLevel) -> Self {
        level.label().to_string()
    }
}

/// The freelancer's primary market.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Location {
    #[default]
    NorthAmerica,
    Europe,
    Asia,
    AustraliaNZ,
    SouthAmerica,
    Africa,
    Global,
}

impl Location {
    pub const ALL: [Location; 7] = [
        Location::NorthAmerica,
        Location::Europe,
        Location::Asia,
        Location::AustraliaNZ,
        Location::SouthAmerica,
        Location::Africa,
        Location::Global,
    ];

    /// Rate multiplier for the market, always within [0.6, 1.0].
    pub fn rate_modifier(self) -> f64 {
        match self {
            Location::NorthAmerica => 1.0,
            Location::Europe => 0.9,
            Location::AustraliaNZ => 0.95,
            Location::Asia => 0.7,
            Location::SouthAmerica => 0.65,
            Location::Africa => 0.6,
            Location::Global => 0.85,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Location::NorthAmerica => "North America",
            Location::Europe => "Europe",
            Location::Asia => "Asia",
            Location::AustraliaNZ => "Australia/NZ",
            Location::SouthAmerica => "South America",
            Location::Africa => "Africa",
            Location::Global => "Global",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Location {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        Location::ALL
            .into_iter()
            .find(|location| normalize_key(location.label()) == key)
            .ok_or_else(|| PricingError::UnknownVariant {
                kind: "market".to_string(),
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for Location {
    type Error = PricingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Location> for String {
    fn from(location: Location) -> Self {
        location.label().to_string()
    }
}

/// Inputs of the basic pricing engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingInputs {
    pub experience_level: ExperienceLevel,
    pub location: Location,
    pub complexity: u8,
    pub hours_required: f64,
    pub tools_used: Vec<String>,
    pub has_maintenance: bool,
    pub maintenance_hours: f64,
    /// Entries of `SERVICE_TYPES`. Informational; they do not change the price.
    #[serde(default)]
    pub service_types: Vec<String>,
}

impl PricingInputs {
    pub const COMPLEXITY_RANGE: (u8, u8) = (1, 10);
    pub const HOURS_RANGE: (f64, f64) = (1.0, 500.0);
    pub const MAINTENANCE_HOURS_RANGE: (f64, f64) = (1.0, 100.0);

    /// Maintenance hours as reported: zero when maintenance is off.
    pub fn effective_maintenance_hours(&self) -> f64 {
        if self.has_maintenance {
            self.maintenance_hours
        } else {
            0.0
        }
    }
}

impl Default for PricingInputs {
    fn default() -> Self {
        Self {
            experience_level: ExperienceLevel::Intermediate,
            location: Location::NorthAmerica,
            complexity: 5,
            hours_required: 20.0,
            tools_used: vec!["Zapier".to_string()],
            has_maintenance: false,
            maintenance_hours: 5.0,
            service_types: vec!["Email Automation".to_string()],
        }
    }
}

/// Inputs of the advanced pricing engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvancedInputs {
    pub revenue_impact: f64,
    pub monthly_time_savings_hours: f64,
    pub client_hourly_value: f64,
    pub integration_count: u32,
    pub custom_coding: bool,
    pub training_required: bool,
    pub monthly_active_users: u32,
}

impl AdvancedInputs {
    pub const INTEGRATION_RANGE: (u32, u32) = (1, 20);
    pub const USERS_RANGE: (u32, u32) = (1, 10_000);
}

impl Default for AdvancedInputs {
    fn default() -> Self {
        Self {
            revenue_impact: 10_000.0,
            monthly_time_savings_hours: 20.0,
            client_hourly_value: 50.0,
            integration_count: 2,
            custom_coding: false,
            training_required: false,
            monthly_active_users: 10,
        }
    }
}

/// An inclusive pair of prices, kept as a range rather than a point estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub low: f64,
    pub high: f64,
}

impl PriceRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PackageTiers {
    pub basic: f64,
    pub standard: f64,
    /// Includes priority support.
    pub premium: f64,
}

/// Project price plus a share of the savings or revenue the client can
/// demonstrate after delivery.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiBasedPrice {
    pub base_price: f64,
    pub savings_share: PriceRange,
}

impl RoiBasedPrice {
    /// Price range once `demonstrated_savings` is known.
    pub fn for_savings(&self, demonstrated_savings: f64) -> PriceRange {
        PriceRange::new(
            self.base_price + demonstrated_savings * self.savings_share.low,
            self.base_price + demonstrated_savings * self.savings_share.high,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicPricingResult {
    pub base_hourly_rate: f64,
    pub tools_premium: f64,
    pub adjusted_hourly_rate: f64,
    pub project_total: f64,
    pub monthly_maintenance_fee: f64,
    pub packages: PackageTiers,
    pub value_based: PriceRange,
    pub roi_based: RoiBasedPrice,
}

impl BasicPricingResult {
    /// Tool premium as a whole percentage, e.g. `10` for a 1.10 multiplier.
    pub fn tools_premium_percent(&self) -> f64 {
        (self.tools_premium - 1.0) * 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuePricePoints {
    pub conservative: f64,
    pub moderate: f64,
    pub aggressive: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvancedPricingResult {
    pub annual_time_savings_value: f64,
    pub total_value: f64,
    pub base_project_cost: f64,
    pub integration_cost: f64,
    pub custom_code_cost: f64,
    pub training_cost: f64,
    pub user_scale_cost: f64,
    pub enhanced_project_cost: f64,
    pub value_prices: ValuePricePoints,
    pub monthly_subscription: f64,
}

/// Union of both engines' inputs and outputs for one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingQuote {
    pub name: Option<String>,
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub inputs: PricingInputs,
    pub advanced_inputs: AdvancedInputs,
    pub basic: BasicPricingResult,
    pub advanced: AdvancedPricingResult,
}
