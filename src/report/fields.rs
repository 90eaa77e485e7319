use crate::domain::model::PricingQuote;
use crate::report::format::{format_money, format_quantity, yes_no};
use std::collections::BTreeMap;

/// Flat report keys, in the order exports list them.
pub const REPORT_KEYS: [&str; 23] = [
    "experience",
    "market",
    "hours",
    "complexity",
    "ongoing",
    "maintenance_hours",
    "tools",
    "hourly_rate",
    "project_total",
    "maintenance_fee",
    "revenue_impact",
    "time_savings_value",
    "total_value",
    "base_cost",
    "integrations",
    "custom_code",
    "training",
    "users",
    "enhanced_cost",
    "conservative",
    "moderate",
    "aggressive",
    "subscription",
];

/// String-formatted view of a quote for templating and flat exports.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportFields {
    entries: Vec<(&'static str, String)>,
}

impl ReportFields {
    pub fn from_quote(quote: &PricingQuote) -> Self {
        let inputs = &quote.inputs;
        let advanced_inputs = &quote.advanced_inputs;
        let basic = &quote.basic;
        let advanced = &quote.advanced;

        let entries = vec![
            ("experience", inputs.experience_level.label().to_string()),
            ("market", inputs.location.label().to_string()),
            ("hours", format_quantity(inputs.hours_required)),
            ("complexity", inputs.complexity.to_string()),
            ("ongoing", yes_no(inputs.has_maintenance).to_string()),
            (
                "maintenance_hours",
                format_quantity(inputs.effective_maintenance_hours()),
            ),
            ("tools", inputs.tools_used.join(", ")),
            ("hourly_rate", format_money(basic.adjusted_hourly_rate, false)),
            ("project_total", format_money(basic.project_total, false)),
            ("maintenance_fee", format_money(basic.monthly_maintenance_fee, false)),
            ("revenue_impact", format_money(advanced_inputs.revenue_impact, true)),
            (
                "time_savings_value",
                format_money(advanced.annual_time_savings_value, true),
            ),
            ("total_value", format_money(advanced.total_value, true)),
            ("base_cost", format_money(advanced.base_project_cost, true)),
            ("integrations", advanced_inputs.integration_count.to_string()),
            ("custom_code", yes_no(advanced_inputs.custom_coding).to_string()),
            ("training", yes_no(advanced_inputs.training_required).to_string()),
            ("users", advanced_inputs.monthly_active_users.to_string()),
            ("enhanced_cost", format_money(advanced.enhanced_project_cost, true)),
            ("conservative", format_money(advanced.value_prices.conservative, true)),
            ("moderate", format_money(advanced.value_prices.moderate, true)),
            ("aggressive", format_money(advanced.value_prices.aggressive, true)),
            ("subscription", format_money(advanced.monthly_subscription, true)),
        ];
        debug_assert_eq!(entries.len(), REPORT_KEYS.len());

        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::compute_quote;
    use crate::domain::model::{AdvancedInputs, PricingInputs};

    fn reference_fields() -> ReportFields {
        let advanced = AdvancedInputs {
            custom_coding: true,
            training_required: true,
            ..AdvancedInputs::default()
        };
        let quote = compute_quote(None, PricingInputs::default(), advanced);
        ReportFields::from_quote(&quote)
    }

    #[test]
    fn test_keys_follow_report_order() {
        let fields = reference_fields();
        let keys: Vec<&str> = fields.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, REPORT_KEYS.to_vec());
    }

    #[test]
    fn test_reference_values() {
        let fields = reference_fields();

        assert_eq!(fields.get("experience"), Some("Intermediate"));
        assert_eq!(fields.get("market"), Some("North America"));
        assert_eq!(fields.get("hours"), Some("20"));
        assert_eq!(fields.get("ongoing"), Some("No"));
        assert_eq!(fields.get("maintenance_hours"), Some("0"));
        assert_eq!(fields.get("tools"), Some("Zapier"));
        assert_eq!(fields.get("hourly_rate"), Some("50.00"));
        assert_eq!(fields.get("project_total"), Some("1000.00"));
        assert_eq!(fields.get("maintenance_fee"), Some("0.00"));
        assert_eq!(fields.get("revenue_impact"), Some("10,000.00"));
        assert_eq!(fields.get("time_savings_value"), Some("12,000.00"));
        assert_eq!(fields.get("total_value"), Some("22,000.00"));
        assert_eq!(fields.get("base_cost"), Some("1,000.00"));
        assert_eq!(fields.get("integrations"), Some("2"));
        assert_eq!(fields.get("custom_code"), Some("Yes"));
        assert_eq!(fields.get("training"), Some("Yes"));
        assert_eq!(fields.get("users"), Some("10"));
        assert_eq!(fields.get("enhanced_cost"), Some("4,000.00"));
        assert_eq!(fields.get("conservative"), Some("5,100.00"));
        assert_eq!(fields.get("moderate"), Some("6,200.00"));
        assert_eq!(fields.get("aggressive"), Some("8,400.00"));
        assert_eq!(fields.get("subscription"), Some("400.00"));
    }

    #[test]
    fn test_map_contains_every_key() {
        let map = reference_fields().to_map();
        for key in REPORT_KEYS {
            assert!(map.contains_key(key), "missing {}", key);
        }
        assert!(reference_fields().get("nonexistent").is_none());
    }
}
