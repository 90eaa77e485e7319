use crate::core::market::rate_for;
use crate::domain::model::PricingQuote;
use crate::report::format::format_money;
use std::fmt;

fn money(value: f64) -> String {
    format!("${}", format_money(value, true))
}

/// Plain-text rendering of a quote for the terminal.
pub struct QuoteSummary<'a>(pub &'a PricingQuote);

impl fmt::Display for QuoteSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quote = self.0;
        let inputs = &quote.inputs;
        let basic = &quote.basic;
        let advanced = &quote.advanced;

        if let Some(name) = &quote.name {
            writeln!(f, "📋 {}", name)?;
        }
        writeln!(
            f,
            "{} · {} · complexity {} · {} h · tools: {}",
            inputs.experience_level,
            inputs.location,
            inputs.complexity,
            inputs.hours_required,
            if inputs.tools_used.is_empty() {
                "none".to_string()
            } else {
                inputs.tools_used.join(", ")
            }
        )?;
        if !inputs.service_types.is_empty() {
            writeln!(f, "Services: {}", inputs.service_types.join(", "))?;
            for service in &inputs.service_types {
                if let Some(rate) = rate_for(service) {
                    writeln!(
                        f,
                        "  Market range for {}: ${:.0}-${:.0}/h",
                        service, rate.entry_level, rate.expert_level
                    )?;
                }
            }
        }
        writeln!(f)?;

        writeln!(f, "💵 Recommended Pricing")?;
        let premium = basic.tools_premium_percent();
        if premium > 0.0 {
            writeln!(
                f,
                "  Hourly Rate:          {} (+{:.0}% tool premium)",
                money(basic.adjusted_hourly_rate),
                premium
            )?;
        } else {
            writeln!(f, "  Hourly Rate:          {}", money(basic.adjusted_hourly_rate))?;
        }
        writeln!(f, "  Project Total:        {}", money(basic.project_total))?;
        if inputs.has_maintenance {
            writeln!(
                f,
                "  Monthly Maintenance:  {}",
                money(basic.monthly_maintenance_fee)
            )?;
        } else {
            writeln!(f, "  No ongoing maintenance")?;
        }
        writeln!(f)?;

        writeln!(f, "📦 Package Pricing")?;
        writeln!(f, "  Basic:                {}", money(basic.packages.basic))?;
        writeln!(f, "  Standard:             {}", money(basic.packages.standard))?;
        writeln!(
            f,
            "  Premium:              {} (includes priority support)",
            money(basic.packages.premium)
        )?;
        writeln!(f)?;

        writeln!(f, "📈 Value-Based Pricing Option")?;
        writeln!(
            f,
            "  Value-Based Price:    {} - {}",
            money(basic.value_based.low),
            money(basic.value_based.high)
        )?;
        writeln!(
            f,
            "  ROI-Based Price:      {} + {:.0}-{:.0}% of demonstrated savings or revenue",
            money(basic.roi_based.base_price),
            basic.roi_based.savings_share.low * 100.0,
            basic.roi_based.savings_share.high * 100.0
        )?;
        if advanced.total_value > 0.0 {
            let at_value = basic.roi_based.for_savings(advanced.total_value);
            writeln!(
                f,
                "  At Projected Value:   {} - {}",
                money(at_value.low),
                money(at_value.high)
            )?;
        }
        writeln!(f)?;

        writeln!(f, "🔍 Project Value Analysis")?;
        writeln!(
            f,
            "  Annual Time Savings:  {}",
            money(advanced.annual_time_savings_value)
        )?;
        writeln!(
            f,
            "  Revenue Impact:       {}",
            money(quote.advanced_inputs.revenue_impact)
        )?;
        writeln!(f, "  Total Value:          {}", money(advanced.total_value))?;
        writeln!(f)?;

        writeln!(f, "🧮 Enhanced Project Cost")?;
        writeln!(f, "  Base Development:     {}", money(advanced.base_project_cost))?;
        writeln!(f, "  Integrations:         {}", money(advanced.integration_cost))?;
        writeln!(f, "  Custom Coding:        {}", money(advanced.custom_code_cost))?;
        writeln!(f, "  Training:             {}", money(advanced.training_cost))?;
        writeln!(f, "  User Scale:           {}", money(advanced.user_scale_cost))?;
        writeln!(
            f,
            "  Total Enhanced Cost:  {}",
            money(advanced.enhanced_project_cost)
        )?;
        writeln!(f)?;

        writeln!(f, "🎯 Value-Based Price Points")?;
        writeln!(
            f,
            "  Conservative (5%):    {}",
            money(advanced.value_prices.conservative)
        )?;
        writeln!(f, "  Moderate (10%):       {}", money(advanced.value_prices.moderate))?;
        writeln!(
            f,
            "  Aggressive (20%):     {}",
            money(advanced.value_prices.aggressive)
        )?;
        writeln!(f)?;

        writeln!(
            f,
            "🔁 Monthly Subscription: {}/month",
            money(advanced.monthly_subscription)
        )
    }
}

pub fn render_summary(quote: &PricingQuote) -> String {
    QuoteSummary(quote).to_string()
}
