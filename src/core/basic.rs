use crate::domain::model::{
    BasicPricingResult, PackageTiers, PriceRange, PricingInputs, RoiBasedPrice,
};

const COMPLEXITY_BASE: f64 = 0.8;
const COMPLEXITY_STEP: f64 = 0.04;
const TOOL_SURCHARGE: f64 = 0.05;

const BASIC_PACKAGE_FACTOR: f64 = 0.8;
const STANDARD_PACKAGE_FACTOR: f64 = 1.0;
const PREMIUM_PACKAGE_FACTOR: f64 = 1.2;

const VALUE_BASED_LOW_FACTOR: f64 = 1.5;
const VALUE_BASED_HIGH_FACTOR: f64 = 3.0;
const ROI_SAVINGS_SHARE: (f64, f64) = (0.05, 0.10);

/// Multiplier in [0.84, 1.2] for complexity 1..=10.
pub fn complexity_modifier(complexity: u8) -> f64 {
    COMPLEXITY_BASE + COMPLEXITY_STEP * f64::from(complexity)
}

/// 5% surcharge per tool beyond the first.
pub fn tools_premium(tool_count: usize) -> f64 {
    if tool_count <= 1 {
        1.0
    } else {
        1.0 + TOOL_SURCHARGE * (tool_count - 1) as f64
    }
}

pub fn compute_basic_pricing(inputs: &PricingInputs) -> BasicPricingResult {
    debug_assert!(
        (PricingInputs::COMPLEXITY_RANGE.0..=PricingInputs::COMPLEXITY_RANGE.1)
            .contains(&inputs.complexity),
        "complexity out of range: {}",
        inputs.complexity
    );
    debug_assert!(
        inputs.hours_required.is_finite() && inputs.hours_required > 0.0,
        "hours_required must be positive: {}",
        inputs.hours_required
    );

    let base_hourly_rate = inputs.experience_level.base_hourly_rate()
        * inputs.location.rate_modifier()
        * complexity_modifier(inputs.complexity);

    let tools_premium = tools_premium(inputs.tools_used.len());
    let adjusted_hourly_rate = base_hourly_rate * tools_premium;
    let project_total = adjusted_hourly_rate * inputs.hours_required;

    let monthly_maintenance_fee = if inputs.has_maintenance {
        adjusted_hourly_rate * inputs.maintenance_hours
    } else {
        0.0
    };

    tracing::debug!(
        base_hourly_rate,
        tools_premium,
        adjusted_hourly_rate,
        project_total,
        "computed basic pricing"
    );

    BasicPricingResult {
        base_hourly_rate,
        tools_premium,
        adjusted_hourly_rate,
        project_total,
        monthly_maintenance_fee,
        packages: PackageTiers {
            basic: project_total * BASIC_PACKAGE_FACTOR,
            standard: project_total * STANDARD_PACKAGE_FACTOR,
            premium: project_total * PREMIUM_PACKAGE_FACTOR,
        },
        value_based: PriceRange::new(
            project_total * VALUE_BASED_LOW_FACTOR,
            project_total * VALUE_BASED_HIGH_FACTOR,
        ),
        roi_based: RoiBasedPrice {
            base_price: project_total,
            savings_share: PriceRange::new(ROI_SAVINGS_SHARE.0, ROI_SAVINGS_SHARE.1),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ExperienceLevel, Location};

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    fn reference_inputs() -> PricingInputs {
        PricingInputs {
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

    #[test]
    fn test_reference_quote() {
        let result = compute_basic_pricing(&reference_inputs());

        assert_close(result.base_hourly_rate, 50.0);
        assert_close(result.tools_premium, 1.0);
        assert_close(result.adjusted_hourly_rate, 50.0);
        assert_close(result.project_total, 1000.0);
        assert_close(result.monthly_maintenance_fee, 0.0);
        assert_close(result.packages.basic, 800.0);
        assert_close(result.packages.standard, 1000.0);
        assert_close(result.packages.premium, 1200.0);
        assert_close(result.value_based.low, 1500.0);
        assert_close(result.value_based.high, 3000.0);
        assert_close(result.roi_based.base_price, 1000.0);
        assert_eq!(result.roi_based.savings_share, PriceRange::new(0.05, 0.10));
    }

    #[test]
    fn test_complexity_modifier_bounds() {
        assert_close(complexity_modifier(1), 0.84);
        assert_close(complexity_modifier(5), 1.0);
        assert_close(complexity_modifier(10), 1.2);
    }

    #[test]
    fn test_tools_premium() {
        assert_close(tools_premium(0), 1.0);
        assert_close(tools_premium(1), 1.0);
        assert_close(tools_premium(2), 1.05);
        assert_close(tools_premium(3), 1.10);
        assert_close(tools_premium(10), 1.45);
    }

    #[test]
    fn test_expert_europe_with_maintenance() {
        let inputs = PricingInputs {
            experience_level: ExperienceLevel::Expert,
            location: Location::Europe,
            complexity: 10,
            hours_required: 40.0,
            tools_used: vec!["Zapier".to_string(), "n8n".to_string(), "Python".to_string()],
            has_maintenance: true,
            maintenance_hours: 8.0,
            service_types: Vec::new(),
        };
        let result = compute_basic_pricing(&inputs);

        // 150 * 0.9 * 1.2 = 162, * 1.10 tools premium = 178.2
        assert_close(result.base_hourly_rate, 162.0);
        assert_close(result.adjusted_hourly_rate, 178.2);
        assert_close(result.project_total, 7128.0);
        assert_close(result.monthly_maintenance_fee, 1425.6);
        assert_close(result.tools_premium_percent(), 10.0);
    }

    #[test]
    fn test_maintenance_hours_ignored_when_disabled() {
        let mut inputs = reference_inputs();
        inputs.maintenance_hours = 100.0;
        let result = compute_basic_pricing(&inputs);
        assert_eq!(result.monthly_maintenance_fee, 0.0);
    }

    #[test]
    fn test_every_market_has_positive_rate() {
        for level in ExperienceLevel::ALL {
            for location in Location::ALL {
                let inputs = PricingInputs {
                    experience_level: level,
                    location,
                    complexity: 1,
                    ..reference_inputs()
                };
                assert!(compute_basic_pricing(&inputs).base_hourly_rate > 0.0);
            }
        }
    }
}
