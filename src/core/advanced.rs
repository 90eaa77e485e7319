use crate::domain::model::{
    AdvancedInputs, AdvancedPricingResult, BasicPricingResult, ValuePricePoints,
};

const MONTHS_PER_YEAR: f64 = 12.0;
const COST_PER_INTEGRATION: f64 = 200.0;
const CUSTOM_CODE_COST: f64 = 2000.0;
const TRAINING_COST: f64 = 500.0;
const COST_PER_USER: f64 = 10.0;

const CONSERVATIVE_VALUE_SHARE: f64 = 0.05;
const MODERATE_VALUE_SHARE: f64 = 0.10;
const AGGRESSIVE_VALUE_SHARE: f64 = 0.20;

const SUBSCRIPTION_PROJECT_SHARE: f64 = 0.1;
const SUBSCRIPTION_MAINTENANCE_MARKUP: f64 = 1.2;

/// Builds on the unrounded basic result; nothing here rounds.
pub fn compute_advanced_pricing(
    basic: &BasicPricingResult,
    inputs: &AdvancedInputs,
) -> AdvancedPricingResult {
    debug_assert!(inputs.revenue_impact >= 0.0);
    debug_assert!(inputs.monthly_time_savings_hours >= 0.0);
    debug_assert!(inputs.client_hourly_value >= 0.0);

    let annual_time_savings_value =
        inputs.monthly_time_savings_hours * MONTHS_PER_YEAR * inputs.client_hourly_value;
    let total_value = inputs.revenue_impact + annual_time_savings_value;

    let base_project_cost = basic.project_total;
    let integration_cost = COST_PER_INTEGRATION * f64::from(inputs.integration_count);
    let custom_code_cost = if inputs.custom_coding {
        CUSTOM_CODE_COST
    } else {
        0.0
    };
    let training_cost = if inputs.training_required {
        TRAINING_COST
    } else {
        0.0
    };
    let user_scale_cost = COST_PER_USER * f64::from(inputs.monthly_active_users);

    let enhanced_project_cost =
        base_project_cost + integration_cost + custom_code_cost + training_cost + user_scale_cost;

    let value_prices = ValuePricePoints {
        conservative: enhanced_project_cost + total_value * CONSERVATIVE_VALUE_SHARE,
        moderate: enhanced_project_cost + total_value * MODERATE_VALUE_SHARE,
        aggressive: enhanced_project_cost + total_value * AGGRESSIVE_VALUE_SHARE,
    };

    let monthly_subscription = enhanced_project_cost * SUBSCRIPTION_PROJECT_SHARE
        + basic.monthly_maintenance_fee * SUBSCRIPTION_MAINTENANCE_MARKUP;

    tracing::debug!(
        total_value,
        enhanced_project_cost,
        monthly_subscription,
        "computed advanced pricing"
    );

    AdvancedPricingResult {
        annual_time_savings_value,
        total_value,
        base_project_cost,
        integration_cost,
        custom_code_cost,
        training_cost,
        user_scale_cost,
        enhanced_project_cost,
        value_prices,
        monthly_subscription,
    }
}
