//! Input and result records for the ROI estimator.
//!
//! Both records are plain data:
//!
//! - **Serializable** - snake_case JSON/TOML via serde
//! - **Copy-friendly** - the form can snapshot the input on every edit
//! - **Default-able** - `EstimatorInput::default()` is the page's initial state

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of employees shown in the estimator form.
pub const DEFAULT_EMPLOYEE_COUNT: u64 = 100;
/// Default number of security incidents per year.
pub const DEFAULT_ANNUAL_INCIDENT_COUNT: u64 = 2;
/// Default cost of a single incident, in whole currency units.
pub const DEFAULT_COST_PER_INCIDENT: f64 = 50_000.0;
/// Default monthly processing volume.
pub const DEFAULT_MONTHLY_PROCESSING_VOLUME: u64 = 1_000;

/// Largest count (employees, incidents, volume) the estimator accepts.
pub const MAX_COUNT: u64 = 1_000_000_000;
/// Largest cost per incident the estimator accepts.
pub const MAX_COST_PER_INCIDENT: f64 = 1e12;

/// What the visitor uses for security today.
///
/// Drives the per-employee baseline rate (see [`crate::BaselineRates`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolutionTier {
    /// Entry-level commercial tooling
    #[default]
    Basic,
    /// A competing commercial product
    Competitor,
    /// A tool built and run in-house
    Inhouse,
    /// Nothing in place
    None,
}

impl SolutionTier {
    /// All tiers in form order.
    pub const ALL: [SolutionTier; 4] = [
        SolutionTier::Basic,
        SolutionTier::Competitor,
        SolutionTier::Inhouse,
        SolutionTier::None,
    ];

    /// Lowercase label used in forms, CLI flags and serialized data.
    pub fn as_label(&self) -> &'static str {
        match self {
            SolutionTier::Basic => "basic",
            SolutionTier::Competitor => "competitor",
            SolutionTier::Inhouse => "inhouse",
            SolutionTier::None => "none",
        }
    }

    /// Human-readable option text for the estimator form.
    pub fn display_name(&self) -> &'static str {
        match self {
            SolutionTier::Basic => "Basic security tools",
            SolutionTier::Competitor => "Competitor platform",
            SolutionTier::Inhouse => "In-house solution",
            SolutionTier::None => "No current solution",
        }
    }
}

impl fmt::Display for SolutionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

/// Returned when a label names no [`SolutionTier`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown solution tier '{0}' (expected basic, competitor, inhouse or none)")]
pub struct UnknownTier(pub String);

impl FromStr for SolutionTier {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(SolutionTier::Basic),
            "competitor" => Ok(SolutionTier::Competitor),
            "inhouse" | "in-house" => Ok(SolutionTier::Inhouse),
            "none" => Ok(SolutionTier::None),
            _ => Err(UnknownTier(s.to_string())),
        }
    }
}

/// Form state of the estimator.
///
/// Counts are unsigned so negative values cannot be represented. Before
/// computing, [`EstimatorInput::sanitized`] caps counts at [`MAX_COUNT`] and
/// the incident cost at [`MAX_COST_PER_INCIDENT`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorInput {
    /// Number of employees covered
    pub employee_count: u64,
    /// Security incidents per year
    pub annual_incident_count: u64,
    /// Average cost of one incident (currency units)
    pub cost_per_incident: f64,
    /// Current security solution
    pub current_solution_tier: SolutionTier,
    /// Items processed per month; selects the subscription tier
    pub monthly_processing_volume: u64,
}

impl Default for EstimatorInput {
    fn default() -> Self {
        Self {
            employee_count: DEFAULT_EMPLOYEE_COUNT,
            annual_incident_count: DEFAULT_ANNUAL_INCIDENT_COUNT,
            cost_per_incident: DEFAULT_COST_PER_INCIDENT,
            current_solution_tier: SolutionTier::default(),
            monthly_processing_volume: DEFAULT_MONTHLY_PROCESSING_VOLUME,
        }
    }
}

/// One editable field of [`EstimatorInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    /// `employee_count`
    EmployeeCount,
    /// `annual_incident_count`
    AnnualIncidentCount,
    /// `cost_per_incident`
    CostPerIncident,
    /// `current_solution_tier`
    CurrentSolutionTier,
    /// `monthly_processing_volume`
    MonthlyProcessingVolume,
}

impl InputField {
    /// Every field in form order.
    pub const ALL: [InputField; 5] = [
        InputField::EmployeeCount,
        InputField::AnnualIncidentCount,
        InputField::CostPerIncident,
        InputField::CurrentSolutionTier,
        InputField::MonthlyProcessingVolume,
    ];

    /// Stable id used for form element ids and labels.
    pub fn id(&self) -> &'static str {
        match self {
            InputField::EmployeeCount => "employee-count",
            InputField::AnnualIncidentCount => "annual-incident-count",
            InputField::CostPerIncident => "cost-per-incident",
            InputField::CurrentSolutionTier => "current-solution-tier",
            InputField::MonthlyProcessingVolume => "monthly-processing-volume",
        }
    }
}

/// Everything the estimator derives from one input snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EstimatorResult {
    /// Per-employee baseline rate times headcount
    pub baseline_monthly_cost: f64,
    /// Flat price of the subscription tier selected by volume
    pub subscription_monthly_cost: f64,
    /// Incidents per year times cost per incident
    pub annual_incident_cost: f64,
    /// Baseline yearly spend plus unmitigated incident cost
    pub current_annual_cost: f64,
    /// Subscription price for twelve months
    pub projected_subscription_annual_cost: f64,
    /// Subscription plus the retained share of incident cost
    pub projected_annual_cost: f64,
    /// `current_annual_cost - projected_annual_cost`, may be negative
    pub annual_savings: f64,
    /// Savings over subscription cost in percent; `None` when the
    /// subscription is free
    pub return_on_investment_pct: Option<f64>,
    /// Months until savings cover the subscription, never negative
    pub payback_months: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_input_matches_form_defaults() {
        let input = EstimatorInput::default();
        assert_eq!(input.employee_count, 100);
        assert_eq!(input.annual_incident_count, 2);
        assert_eq!(input.cost_per_incident, 50_000.0);
        assert_eq!(input.current_solution_tier, SolutionTier::Basic);
        assert_eq!(input.monthly_processing_volume, 1_000);
    }

    #[test]
    fn tier_labels_parse_back() {
        for tier in SolutionTier::ALL {
            assert_eq!(tier.as_label().parse::<SolutionTier>(), Ok(tier));
        }
        assert_eq!("In-House".parse::<SolutionTier>(), Ok(SolutionTier::Inhouse));
        assert!("premium".parse::<SolutionTier>().is_err());
    }

    #[test]
    fn unknown_tier_names_the_accepted_labels() {
        let err = "premium".parse::<SolutionTier>().unwrap_err();
        assert_eq!(err, UnknownTier("premium".to_string()));
        assert_eq!(
            err.to_string(),
            "unknown solution tier 'premium' (expected basic, competitor, inhouse or none)"
        );
        let boxed: Box<dyn std::error::Error> = Box::new(err);
        assert!(boxed.source().is_none());
    }

    #[test]
    fn tier_serializes_lowercase() {
        let json = serde_json::to_string(&SolutionTier::Competitor).unwrap();
        assert_eq!(json, "\"competitor\"");
    }

    #[test]
    fn partial_input_json_uses_defaults() {
        let input: EstimatorInput =
            serde_json::from_str(r#"{"employee_count": 250, "current_solution_tier": "none"}"#)
                .unwrap();
        assert_eq!(input.employee_count, 250);
        assert_eq!(input.current_solution_tier, SolutionTier::None);
        assert_eq!(input.annual_incident_count, 2);
        assert_eq!(input.monthly_processing_volume, 1_000);
    }
}
