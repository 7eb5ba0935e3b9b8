//! The cost model.
//!
//! ```text
//! baseline_monthly      = rate(tier) * employees
//! subscription_monthly  = band_price(volume)
//! incident_annual       = incidents * cost_per_incident
//! current_annual        = baseline_monthly * 12 + incident_annual
//! subscription_annual   = subscription_monthly * 12
//! projected_annual      = subscription_annual + incident_annual * retained
//! savings               = current_annual - projected_annual
//! roi_pct               = savings / subscription_annual * 100   (None if /0)
//! payback_months        = subscription_annual / (savings / 12)  (>= 0)
//! ```

use tracing::debug;

use crate::policy::EstimatorPolicy;
use crate::types::{EstimatorInput, EstimatorResult};

const MONTHS_PER_YEAR: f64 = 12.0;

/// Stateless calculator bound to one [`EstimatorPolicy`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CostEstimator {
    policy: EstimatorPolicy,
}

impl CostEstimator {
    /// Create an estimator with a custom policy.
    ///
    /// The policy is used as given; call [`EstimatorPolicy::validate`] first
    /// if it came from outside.
    pub fn new(policy: EstimatorPolicy) -> Self {
        Self { policy }
    }

    /// The policy this estimator applies.
    pub fn policy(&self) -> &EstimatorPolicy {
        &self.policy
    }

    /// Derive every figure from one input snapshot.
    pub fn compute(&self, input: &EstimatorInput) -> EstimatorResult {
        let input = input.sanitized();

        let baseline_monthly_cost = saturate(
            self.policy.baseline_rate(input.current_solution_tier) * input.employee_count as f64,
        );
        let subscription_monthly_cost = saturate(
            self.policy
                .subscription_monthly_cost(input.monthly_processing_volume),
        );
        let annual_incident_cost =
            saturate(input.annual_incident_count as f64 * input.cost_per_incident);

        let current_annual_cost =
            saturate(baseline_monthly_cost * MONTHS_PER_YEAR + annual_incident_cost);
        let projected_subscription_annual_cost =
            saturate(subscription_monthly_cost * MONTHS_PER_YEAR);
        let projected_annual_cost = saturate(
            projected_subscription_annual_cost
                + annual_incident_cost * self.policy.incident_cost_retained,
        );
        let annual_savings = saturate(current_annual_cost - projected_annual_cost);

        let return_on_investment_pct =
            return_on_investment_pct(annual_savings, projected_subscription_annual_cost);
        let payback_months = payback_months(annual_savings, projected_subscription_annual_cost);

        debug!(
            tier = %input.current_solution_tier,
            current_annual_cost,
            projected_annual_cost,
            annual_savings,
            payback_months,
            "computed ROI estimate"
        );

        EstimatorResult {
            baseline_monthly_cost,
            subscription_monthly_cost,
            annual_incident_cost,
            current_annual_cost,
            projected_subscription_annual_cost,
            projected_annual_cost,
            annual_savings,
            return_on_investment_pct,
            payback_months,
        }
    }
}

/// Keep a currency figure finite: overflow clamps to the largest `f64`.
fn saturate(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-f64::MAX, f64::MAX)
    }
}

fn return_on_investment_pct(savings: f64, subscription_annual: f64) -> Option<f64> {
    if subscription_annual == 0.0 {
        return None;
    }
    let pct = savings / subscription_annual * 100.0;
    pct.is_finite().then_some(pct)
}

/// Never negative: zero or negative savings never pay back, reported as 0.
fn payback_months(savings: f64, subscription_annual: f64) -> f64 {
    let months = subscription_annual / (savings / MONTHS_PER_YEAR);
    if months.is_finite() && months > 0.0 {
        months
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{BaselineRates, SubscriptionTier};
    use crate::types::{MAX_COST_PER_INCIDENT, MAX_COUNT};
    use crate::types::SolutionTier;
    use pretty_assertions::assert_eq;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn default_scenario_figures() {
        let result = CostEstimator::default().compute(&EstimatorInput::default());

        assert_eq!(result.baseline_monthly_cost, 500.0);
        assert_eq!(result.subscription_monthly_cost, 49.0);
        assert_eq!(result.annual_incident_cost, 100_000.0);
        assert_eq!(result.current_annual_cost, 106_000.0);
        assert_eq!(result.projected_subscription_annual_cost, 588.0);
        assert_eq!(result.projected_annual_cost, 40_588.0);
        assert_eq!(result.annual_savings, 65_412.0);

        let roi = result.return_on_investment_pct.expect("roi defined");
        assert!(approx(roi, 65_412.0 / 588.0 * 100.0));
        assert!((roi - 11_124.49).abs() < 0.01);
        assert!((result.payback_months - 0.10787).abs() < 1e-4);
    }

    #[test]
    fn no_solution_and_no_incidents_never_pays_back() {
        let input = EstimatorInput {
            current_solution_tier: SolutionTier::None,
            annual_incident_count: 0,
            ..Default::default()
        };
        let result = CostEstimator::default().compute(&input);

        assert_eq!(result.current_annual_cost, 0.0);
        assert!(result.annual_savings <= 0.0);
        assert_eq!(result.payback_months, 0.0);
        let roi = result.return_on_investment_pct.expect("roi defined");
        assert!(roi < 0.0);
    }

    #[test]
    fn zero_employees_and_incidents_cost_nothing_today() {
        for tier in SolutionTier::ALL {
            let input = EstimatorInput {
                employee_count: 0,
                annual_incident_count: 0,
                current_solution_tier: tier,
                ..Default::default()
            };
            assert_eq!(CostEstimator::default().compute(&input).current_annual_cost, 0.0);
        }
    }

    #[test]
    fn volume_boundary_selects_band() {
        let at_cap = EstimatorInput {
            monthly_processing_volume: 10_000,
            ..Default::default()
        };
        let over_cap = EstimatorInput {
            monthly_processing_volume: 10_001,
            ..Default::default()
        };
        let estimator = CostEstimator::default();
        assert_eq!(estimator.compute(&at_cap).subscription_monthly_cost, 199.0);
        assert_eq!(estimator.compute(&over_cap).subscription_monthly_cost, 499.0);
    }

    #[test]
    fn free_subscription_leaves_roi_undefined() {
        let policy = EstimatorPolicy {
            subscription_tiers: vec![SubscriptionTier {
                max_volume: None,
                monthly_price: 0.0,
            }],
            ..Default::default()
        };
        let result = CostEstimator::new(policy).compute(&EstimatorInput::default());

        assert_eq!(result.projected_subscription_annual_cost, 0.0);
        assert_eq!(result.return_on_investment_pct, None);
        assert_eq!(result.payback_months, 0.0);
    }

    #[test]
    fn negative_incident_cost_is_clamped() {
        let input = EstimatorInput {
            cost_per_incident: -10_000.0,
            ..Default::default()
        };
        let result = CostEstimator::default().compute(&input);
        assert_eq!(result.annual_incident_cost, 0.0);
        assert_eq!(result.current_annual_cost, 6_000.0);
    }

    #[test]
    fn retained_share_comes_from_policy() {
        let policy = EstimatorPolicy {
            incident_cost_retained: 1.0,
            ..Default::default()
        };
        let result = CostEstimator::new(policy).compute(&EstimatorInput::default());
        assert_eq!(result.projected_annual_cost, 100_588.0);
        assert_eq!(result.annual_savings, 5_412.0);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let estimator = CostEstimator::default();
        let input = EstimatorInput {
            employee_count: 1_234,
            annual_incident_count: 7,
            cost_per_incident: 12_345.67,
            current_solution_tier: SolutionTier::Inhouse,
            monthly_processing_volume: 54_321,
        };
        let first = estimator.compute(&input);
        for _ in 0..10 {
            assert_eq!(estimator.compute(&input), first);
        }
    }

    fn currency_fields(result: &EstimatorResult) -> [f64; 8] {
        [
            result.baseline_monthly_cost,
            result.subscription_monthly_cost,
            result.annual_incident_cost,
            result.current_annual_cost,
            result.projected_subscription_annual_cost,
            result.projected_annual_cost,
            result.annual_savings,
            result.payback_months,
        ]
    }

    #[test]
    fn oversized_input_keeps_figures_finite() {
        let input = EstimatorInput {
            employee_count: u64::MAX,
            annual_incident_count: u64::MAX,
            cost_per_incident: 1e300,
            current_solution_tier: SolutionTier::Competitor,
            monthly_processing_volume: u64::MAX,
        };
        let result = CostEstimator::default().compute(&input);

        for value in currency_fields(&result) {
            assert!(value.is_finite(), "non-finite figure in {result:?}");
        }
        assert_eq!(
            result.annual_incident_cost,
            MAX_COUNT as f64 * MAX_COST_PER_INCIDENT
        );
        assert!(result.annual_savings > 0.0);
        assert!(result.return_on_investment_pct.is_some());
    }

    #[test]
    fn extreme_policy_rates_saturate() {
        let policy = EstimatorPolicy {
            baseline_rates: BaselineRates {
                competitor: f64::MAX,
                ..Default::default()
            },
            ..Default::default()
        };
        let input = EstimatorInput {
            current_solution_tier: SolutionTier::Competitor,
            ..Default::default()
        };
        let result = CostEstimator::new(policy).compute(&input);

        for value in currency_fields(&result) {
            assert!(value.is_finite(), "non-finite figure in {result:?}");
        }
        assert_eq!(result.current_annual_cost, f64::MAX);
    }
}
