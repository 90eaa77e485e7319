//! Property-based tests for the pricing formulas

#[cfg(test)]
mod tests {
    use crate::core::advanced::compute_advanced_pricing;
    use crate::core::basic::{compute_basic_pricing, tools_premium};
    use crate::domain::model::{
        AdvancedInputs, ExperienceLevel, Location, PricingInputs, SERVICE_TYPES,
    };
    use proptest::prelude::*;

    fn experience_strategy() -> impl Strategy<Value = ExperienceLevel> {
        prop::sample::select(ExperienceLevel::ALL.to_vec())
    }

    fn location_strategy() -> impl Strategy<Value = Location> {
        prop::sample::select(Location::ALL.to_vec())
    }

    prop_compose! {
        fn basic_inputs_strategy()(
            experience_level in experience_strategy(),
            location in location_strategy(),
            complexity in 1u8..=10,
            hours_required in 1.0f64..=500.0,
            tools_used in prop::collection::vec("[A-Za-z]{3,12}", 0..8),
            has_maintenance in any::<bool>(),
            maintenance_hours in 1.0f64..=100.0,
            service_types in prop::sample::subsequence(SERVICE_TYPES.to_vec(), 0..=3),
        ) -> PricingInputs {
            PricingInputs {
                experience_level,
                location,
                complexity,
                hours_required,
                tools_used,
                has_maintenance,
                maintenance_hours,
                service_types: service_types.into_iter().map(str::to_string).collect(),
            }
        }
    }

    prop_compose! {
        fn advanced_inputs_strategy()(
            revenue_impact in 0.0f64..=100_000.0,
            monthly_time_savings_hours in 0.0f64..=200.0,
            client_hourly_value in 0.0f64..=1000.0,
            integration_count in 1u32..=20,
            custom_coding in any::<bool>(),
            training_required in any::<bool>(),
            monthly_active_users in 1u32..=10_000,
        ) -> AdvancedInputs {
            AdvancedInputs {
                revenue_impact,
                monthly_time_savings_hours,
                client_hourly_value,
                integration_count,
                custom_coding,
                training_required,
                monthly_active_users,
            }
        }
    }

    proptest! {
        #[test]
        fn test_base_rate_positive_and_monotonic_in_complexity(
            inputs in basic_inputs_strategy(),
            bump in 0u8..=9,
        ) {
            let result = compute_basic_pricing(&inputs);
            prop_assert!(result.base_hourly_rate > 0.0);

            let higher = PricingInputs {
                complexity: (inputs.complexity + bump).min(10),
                ..inputs.clone()
            };
            let higher_result = compute_basic_pricing(&higher);
            prop_assert!(higher_result.base_hourly_rate >= result.base_hourly_rate);
        }

        #[test]
        fn test_tools_premium_flat_then_strictly_increasing(count in 0usize..50) {
            if count <= 1 {
                prop_assert_eq!(tools_premium(count), 1.0);
            } else {
                prop_assert!(tools_premium(count) > tools_premium(count - 1));
            }
        }

        #[test]
        fn test_project_total_is_rate_times_hours(inputs in basic_inputs_strategy()) {
            let result = compute_basic_pricing(&inputs);
            let expected = result.adjusted_hourly_rate * inputs.hours_required;
            prop_assert!((result.project_total - expected).abs() <= 1e-9 * expected.max(1.0));
        }

        #[test]
        fn test_no_maintenance_means_no_fee(inputs in basic_inputs_strategy()) {
            let inputs = PricingInputs { has_maintenance: false, ..inputs };
            prop_assert_eq!(compute_basic_pricing(&inputs).monthly_maintenance_fee, 0.0);
        }

        #[test]
        fn test_package_tiers_strictly_ordered(inputs in basic_inputs_strategy()) {
            let result = compute_basic_pricing(&inputs);
            prop_assert!(result.project_total > 0.0);
            prop_assert!(result.packages.basic < result.packages.standard);
            prop_assert!(result.packages.standard < result.packages.premium);
            prop_assert!(result.value_based.low < result.value_based.high);
        }

        #[test]
        fn test_enhanced_cost_never_below_project_total(
            inputs in basic_inputs_strategy(),
            advanced in advanced_inputs_strategy(),
        ) {
            let basic = compute_basic_pricing(&inputs);
            let result = compute_advanced_pricing(&basic, &advanced);
            prop_assert!(result.enhanced_project_cost >= basic.project_total);
        }

        #[test]
        fn test_value_price_points_ordered_when_value_positive(
            inputs in basic_inputs_strategy(),
            advanced in advanced_inputs_strategy(),
        ) {
            let basic = compute_basic_pricing(&inputs);
            let result = compute_advanced_pricing(&basic, &advanced);
            if result.total_value > 0.01 {
                prop_assert!(result.value_prices.aggressive > result.value_prices.moderate);
                prop_assert!(result.value_prices.moderate > result.value_prices.conservative);
            }
        }
    }
}
