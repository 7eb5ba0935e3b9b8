//! Tolerant coercion of raw form text into [`EstimatorInput`] fields.
//!
//! The estimator form never shows validation errors. Whatever the visitor
//! types is coerced: unparsable or negative numbers become 0, unknown tiers
//! become [`SolutionTier::Basic`].

use tracing::warn;

use crate::types::{
    EstimatorInput, InputField, MAX_COST_PER_INCIDENT, MAX_COUNT, SolutionTier,
};

/// Parse a non-negative integer count.
///
/// Decimal input keeps its integer part, values beyond `u64::MAX` saturate.
pub fn coerce_count(raw: &str) -> u64 {
    let text = strip_number_noise(raw);
    if text.is_empty() {
        return 0;
    }
    if let Ok(value) = text.parse::<u64>() {
        return value;
    }
    match text.parse::<f64>() {
        // `as` saturates on overflow
        Ok(value) if value.is_finite() && value >= 0.0 => value.trunc() as u64,
        _ => {
            warn!(raw, "coerced count input to 0");
            0
        }
    }
}

/// Parse a non-negative currency amount.
pub fn coerce_amount(raw: &str) -> f64 {
    let text = strip_number_noise(raw);
    if text.is_empty() {
        return 0.0;
    }
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => {
            warn!(raw, "coerced amount input to 0");
            0.0
        }
    }
}

/// Parse a solution tier label, falling back to the default tier.
pub fn coerce_tier(raw: &str) -> SolutionTier {
    raw.parse().unwrap_or_else(|_| {
        warn!(raw, "unknown solution tier, using default");
        SolutionTier::default()
    })
}

/// Drop whitespace, a leading currency sign and digit-group separators.
fn strip_number_noise(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed);
    trimmed
        .chars()
        .filter(|c| !matches!(c, ',' | '_' | ' '))
        .collect()
}

impl EstimatorInput {
    /// Clamp values into the range the cost model handles.
    ///
    /// Counts are capped at [`MAX_COUNT`]; the incident cost must be finite,
    /// non-negative and at most [`MAX_COST_PER_INCIDENT`].
    pub fn sanitized(self) -> Self {
        let cost_per_incident = if self.cost_per_incident.is_finite() && self.cost_per_incident > 0.0
        {
            self.cost_per_incident.min(MAX_COST_PER_INCIDENT)
        } else {
            0.0
        };
        Self {
            employee_count: self.employee_count.min(MAX_COUNT),
            annual_incident_count: self.annual_incident_count.min(MAX_COUNT),
            cost_per_incident,
            monthly_processing_volume: self.monthly_processing_volume.min(MAX_COUNT),
            ..self
        }
    }

    /// Apply one raw form edit and return the committed snapshot.
    pub fn with_field(self, field: InputField, raw: &str) -> Self {
        let mut next = self;
        match field {
            InputField::EmployeeCount => next.employee_count = coerce_count(raw),
            InputField::AnnualIncidentCount => next.annual_incident_count = coerce_count(raw),
            InputField::CostPerIncident => next.cost_per_incident = coerce_amount(raw),
            InputField::CurrentSolutionTier => next.current_solution_tier = coerce_tier(raw),
            InputField::MonthlyProcessingVolume => {
                next.monthly_processing_volume = coerce_count(raw)
            }
        }
        next
    }

    /// Current value of `field` as form text.
    pub fn field_text(&self, field: InputField) -> String {
        match field {
            InputField::EmployeeCount => self.employee_count.to_string(),
            InputField::AnnualIncidentCount => self.annual_incident_count.to_string(),
            InputField::CostPerIncident => self.cost_per_incident.to_string(),
            InputField::CurrentSolutionTier => self.current_solution_tier.as_label().to_string(),
            InputField::MonthlyProcessingVolume => self.monthly_processing_volume.to_string(),
        }
    }
}
