use crate::domain::model::{canonical_service_type, AdvancedInputs, PricingInputs, KNOWN_TOOLS};
use crate::utils::error::{PricingError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// What the input boundary does with out-of-range values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputPolicy {
    /// Pull the value back into range and log a warning.
    #[default]
    Clamp,
    /// Reject with `PricingError::InvalidInput`.
    Strict,
}

impl FromStr for InputPolicy {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clamp" => Ok(InputPolicy::Clamp),
            "strict" => Ok(InputPolicy::Strict),
            _ => Err(PricingError::UnknownVariant {
                kind: "input policy".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(PricingError::invalid_input(
            field_name,
            value,
            "Value must be a finite number",
        ));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(PricingError::invalid_input(
            field_name,
            value,
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

pub fn validate_non_negative(field_name: &str, value: f64) -> Result<()> {
    validate_finite(field_name, value)?;
    if value < 0.0 {
        return Err(PricingError::invalid_input(
            field_name,
            value,
            "Value must not be negative",
        ));
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(PricingError::invalid_input(field_name, path, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(PricingError::invalid_input(
            field_name,
            path,
            "Path contains null bytes",
        ));
    }

    Ok(())
}

/// A bare file name without extension: no separators, no leading dot.
pub fn validate_file_stem(field_name: &str, stem: &str) -> Result<()> {
    if stem.trim().is_empty() {
        return Err(PricingError::invalid_input(
            field_name,
            stem,
            "File name cannot be empty",
        ));
    }
    if stem.contains(['/', '\\', '\0']) || stem.starts_with('.') {
        return Err(PricingError::invalid_input(
            field_name,
            stem,
            "File name must not contain path separators or start with '.'",
        ));
    }
    Ok(())
}

/// True for NaN and anything else that does not compare with itself.
fn is_unordered<T: PartialOrd>(value: T) -> bool {
    value.partial_cmp(&value).is_none()
}

/// Clamps `value` into `[min, max]`, logging when it had to move.
pub fn clamp_range<T: PartialOrd + Display + Copy>(field_name: &str, value: T, min: T, max: T) -> T {
    let clamped = if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    };
    if clamped != value {
        tracing::warn!("Clamped {} from {} to {}", field_name, value, clamped);
    }
    clamped
}

/// Applies `policy` to a ranged value. Non-finite numbers are rejected under
/// either policy.
pub fn enforce_range<T: PartialOrd + Display + Copy>(
    policy: InputPolicy,
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<T> {
    if is_unordered(value) {
        return Err(PricingError::invalid_input(
            field_name,
            value,
            "Value must be a finite number",
        ));
    }
    match policy {
        InputPolicy::Clamp => Ok(clamp_range(field_name, value, min, max)),
        InputPolicy::Strict => {
            validate_range(field_name, value, min, max)?;
            Ok(value)
        }
    }
}

/// Maps service types onto their catalog spelling. Unknown entries are
/// dropped with a warning under `Clamp` and rejected under `Strict`.
pub fn enforce_service_types(policy: InputPolicy, service_types: &[String]) -> Result<Vec<String>> {
    let mut known = Vec::with_capacity(service_types.len());
    for name in normalize_names(service_types) {
        match (canonical_service_type(&name), policy) {
            (Some(service), _) => {
                if !known.contains(&service) {
                    known.push(service);
                }
            }
            (None, InputPolicy::Clamp) => {
                tracing::warn!("Ignoring unknown service type '{}'", name);
            }
            (None, InputPolicy::Strict) => {
                return Err(PricingError::UnknownVariant {
                    kind: "service type".to_string(),
                    value: name,
                });
            }
        }
    }
    Ok(known.into_iter().map(str::to_string).collect())
}

/// Trims names, drops empties and duplicates, keeps first-seen order.
pub fn normalize_names(tools: &[String]) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(tools.len());
    for tool in tools {
        let tool = tool.trim();
        if tool.is_empty() {
            continue;
        }
        if !normalized.iter().any(|t| t.eq_ignore_ascii_case(tool)) {
            normalized.push(tool.to_string());
        }
    }
    normalized
}

impl PricingInputs {
    /// Returns a copy with every field brought into its domain per `policy`.
    pub fn enforce(&self, policy: InputPolicy) -> Result<Self> {
        let (c_min, c_max) = Self::COMPLEXITY_RANGE;
        let (h_min, h_max) = Self::HOURS_RANGE;
        let (m_min, m_max) = Self::MAINTENANCE_HOURS_RANGE;

        validate_finite("hours_required", self.hours_required)?;
        let maintenance_hours = if self.has_maintenance {
            validate_finite("maintenance_hours", self.maintenance_hours)?;
            enforce_range(policy, "maintenance_hours", self.maintenance_hours, m_min, m_max)?
        } else {
            self.maintenance_hours
        };

        let tools_used = normalize_names(&self.tools_used);
        if tools_used.is_empty() {
            tracing::warn!("No tools selected; pricing without a tool premium");
        }
        for tool in &tools_used {
            if !KNOWN_TOOLS.contains(&tool.as_str()) {
                tracing::debug!("Tool '{}' is not in the known tool list", tool);
            }
        }

        Ok(Self {
            experience_level: self.experience_level,
            location: self.location,
            complexity: enforce_range(policy, "complexity", self.complexity, c_min, c_max)?,
            hours_required: enforce_range(policy, "hours_required", self.hours_required, h_min, h_max)?,
            tools_used,
            has_maintenance: self.has_maintenance,
            maintenance_hours,
            service_types: enforce_service_types(policy, &self.service_types)?,
        })
    }
}

impl Validate for PricingInputs {
    fn validate(&self) -> Result<()> {
        let (c_min, c_max) = Self::COMPLEXITY_RANGE;
        let (h_min, h_max) = Self::HOURS_RANGE;
        let (m_min, m_max) = Self::MAINTENANCE_HOURS_RANGE;

        validate_range("complexity", self.complexity, c_min, c_max)?;
        validate_finite("hours_required", self.hours_required)?;
        validate_range("hours_required", self.hours_required, h_min, h_max)?;
        if self.has_maintenance {
            validate_finite("maintenance_hours", self.maintenance_hours)?;
            validate_range("maintenance_hours", self.maintenance_hours, m_min, m_max)?;
        }
        for name in &self.service_types {
            if canonical_service_type(name).is_none() {
                return Err(PricingError::UnknownVariant {
                    kind: "service type".to_string(),
                    value: name.clone(),
                });
            }
        }
        Ok(())
    }
}

impl AdvancedInputs {
    /// Returns a copy with every field brought into its domain per `policy`.
    pub fn enforce(&self, policy: InputPolicy) -> Result<Self> {
        let (i_min, i_max) = Self::INTEGRATION_RANGE;
        let (u_min, u_max) = Self::USERS_RANGE;

        let non_negative = |field: &str, value: f64| -> Result<f64> {
            validate_finite(field, value)?;
            match policy {
                InputPolicy::Clamp => Ok(clamp_range(field, value, 0.0, f64::MAX)),
                InputPolicy::Strict => {
                    validate_non_negative(field, value)?;
                    Ok(value)
                }
            }
        };

        Ok(Self {
            revenue_impact: non_negative("revenue_impact", self.revenue_impact)?,
            monthly_time_savings_hours: non_negative(
                "monthly_time_savings_hours",
                self.monthly_time_savings_hours,
            )?,
            client_hourly_value: non_negative("client_hourly_value", self.client_hourly_value)?,
            integration_count: enforce_range(
                policy,
                "integration_count",
                self.integration_count,
                i_min,
                i_max,
            )?,
            custom_coding: self.custom_coding,
            training_required: self.training_required,
            monthly_active_users: enforce_range(
                policy,
                "monthly_active_users",
                self.monthly_active_users,
                u_min,
                u_max,
            )?,
        })
    }
}

impl Validate for AdvancedInputs {
    fn validate(&self) -> Result<()> {
        let (i_min, i_max) = Self::INTEGRATION_RANGE;
        let (u_min, u_max) = Self::USERS_RANGE;

        validate_non_negative("revenue_impact", self.revenue_impact)?;
        validate_non_negative("monthly_time_savings_hours", self.monthly_time_savings_hours)?;
        validate_non_negative("client_hourly_value", self.client_hourly_value)?;
        validate_range("integration_count", self.integration_count, i_min, i_max)?;
        validate_range("monthly_active_users", self.monthly_active_users, u_min, u_max)?;
        Ok(())
    }
}
