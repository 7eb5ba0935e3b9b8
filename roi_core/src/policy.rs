//! Policy constants for the cost model.
//!
//! The figures below are business assumptions, not computed values. They are
//! gathered into [`EstimatorPolicy`] so they can be tuned from a TOML file
//! without touching the computation:
//!
//! ```toml
//! incident_cost_retained = 0.5
//!
//! [baseline_rates]
//! competitor = 18.0
//!
//! [[subscription_tiers]]
//! max_volume = 5000
//! monthly_price = 99.0
//!
//! [[subscription_tiers]]
//! monthly_price = 299.0
//! ```
//!
//! Keys left out of the file keep their default values.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PolicyError, Result};
use crate::types::SolutionTier;

/// Monthly cost per employee with basic security tooling.
pub const BASIC_RATE_PER_EMPLOYEE: f64 = 5.0;
/// Monthly cost per employee with a competitor platform.
pub const COMPETITOR_RATE_PER_EMPLOYEE: f64 = 15.0;
/// Monthly cost per employee for an in-house solution.
pub const INHOUSE_RATE_PER_EMPLOYEE: f64 = 25.0;
/// Monthly cost per employee when nothing is in place.
pub const NONE_RATE_PER_EMPLOYEE: f64 = 0.0;

/// Highest monthly volume covered by the starter subscription.
pub const STARTER_MAX_VOLUME: u64 = 1_000;
/// Highest monthly volume covered by the growth subscription.
pub const GROWTH_MAX_VOLUME: u64 = 10_000;
/// Flat monthly price of the starter subscription.
pub const STARTER_MONTHLY_PRICE: f64 = 49.0;
/// Flat monthly price of the growth subscription.
pub const GROWTH_MONTHLY_PRICE: f64 = 199.0;
/// Flat monthly price of the scale subscription (no volume cap).
pub const SCALE_MONTHLY_PRICE: f64 = 499.0;

/// Share of incident cost that remains after adopting the product.
///
/// Encodes the 60% incident-reduction assumption.
pub const INCIDENT_COST_RETAINED: f64 = 0.4;

/// Per-employee monthly rates keyed by [`SolutionTier`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaselineRates {
    /// Rate for [`SolutionTier::Basic`]
    pub basic: f64,
    /// Rate for [`SolutionTier::Competitor`]
    pub competitor: f64,
    /// Rate for [`SolutionTier::Inhouse`]
    pub inhouse: f64,
    /// Rate for [`SolutionTier::None`]
    pub none: f64,
}

impl Default for BaselineRates {
    fn default() -> Self {
        Self {
            basic: BASIC_RATE_PER_EMPLOYEE,
            competitor: COMPETITOR_RATE_PER_EMPLOYEE,
            inhouse: INHOUSE_RATE_PER_EMPLOYEE,
            none: NONE_RATE_PER_EMPLOYEE,
        }
    }
}

impl BaselineRates {
    /// Rate for the given tier.
    pub fn rate_for(&self, tier: SolutionTier) -> f64 {
        match tier {
            SolutionTier::Basic => self.basic,
            SolutionTier::Competitor => self.competitor,
            SolutionTier::Inhouse => self.inhouse,
            SolutionTier::None => self.none,
        }
    }

    fn iter(&self) -> impl Iterator<Item = (SolutionTier, f64)> + '_ {
        SolutionTier::ALL.into_iter().map(|tier| (tier, self.rate_for(tier)))
    }
}

/// A flat-priced subscription band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionTier {
    /// Inclusive upper bound on monthly volume; `None` means unbounded
    #[serde(default)]
    pub max_volume: Option<u64>,
    /// Flat monthly price for any volume in this band
    pub monthly_price: f64,
}

/// Built-in subscription bands: <=1000, <=10000, unbounded.
pub fn default_subscription_tiers() -> Vec<SubscriptionTier> {
    vec![
        SubscriptionTier {
            max_volume: Some(STARTER_MAX_VOLUME),
            monthly_price: STARTER_MONTHLY_PRICE,
        },
        SubscriptionTier {
            max_volume: Some(GROWTH_MAX_VOLUME),
            monthly_price: GROWTH_MONTHLY_PRICE,
        },
        SubscriptionTier {
            max_volume: None,
            monthly_price: SCALE_MONTHLY_PRICE,
        },
    ]
}

/// Every tunable assumption of the cost model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorPolicy {
    /// Baseline per-employee rates
    pub baseline_rates: BaselineRates,
    /// Ordered subscription bands, last one open-ended
    pub subscription_tiers: Vec<SubscriptionTier>,
    /// Fraction of incident cost left after adoption, in `[0, 1]`
    pub incident_cost_retained: f64,
}

impl Default for EstimatorPolicy {
    fn default() -> Self {
        Self {
            baseline_rates: BaselineRates::default(),
            subscription_tiers: default_subscription_tiers(),
            incident_cost_retained: INCIDENT_COST_RETAINED,
        }
    }
}

impl EstimatorPolicy {
    /// Parse and validate a policy from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let policy: EstimatorPolicy = toml::from_str(content)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Load a policy file from disk.
    ///
    /// Unlike form input, a bad policy file is an error and never falls back
    /// to defaults.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| PolicyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let policy = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), tiers = policy.subscription_tiers.len(), "loaded estimator policy");
        Ok(policy)
    }

    /// Check that every value is usable by the cost model.
    pub fn validate(&self) -> Result<()> {
        for (tier, rate) in self.baseline_rates.iter() {
            if !rate.is_finite() || rate < 0.0 {
                return Err(PolicyError::Invalid(format!(
                    "baseline rate for '{}' must be a non-negative number, got {}",
                    tier, rate
                )));
            }
        }

        if !(0.0..=1.0).contains(&self.incident_cost_retained) {
            return Err(PolicyError::Invalid(format!(
                "incident_cost_retained must be within [0, 1], got {}",
                self.incident_cost_retained
            )));
        }

        let Some(last) = self.subscription_tiers.last() else {
            return Err(PolicyError::Invalid(
                "at least one subscription tier is required".into(),
            ));
        };
        if last.max_volume.is_some() {
            return Err(PolicyError::Invalid(
                "the last subscription tier must be open-ended (omit max_volume)".into(),
            ));
        }

        let mut previous: Option<u64> = None;
        for (idx, tier) in self.subscription_tiers.iter().enumerate() {
            if !tier.monthly_price.is_finite() || tier.monthly_price < 0.0 {
                return Err(PolicyError::Invalid(format!(
                    "subscription tier {} has invalid monthly_price {}",
                    idx, tier.monthly_price
                )));
            }
            let is_last = idx + 1 == self.subscription_tiers.len();
            match (tier.max_volume, is_last) {
                (None, false) => {
                    return Err(PolicyError::Invalid(format!(
                        "subscription tier {} is open-ended but is not the last tier",
                        idx
                    )));
                }
                (Some(max), _) => {
                    if previous.is_some_and(|prev| max <= prev) {
                        return Err(PolicyError::Invalid(format!(
                            "subscription tier breakpoints must be strictly ascending (tier {} has max_volume {})",
                            idx, max
                        )));
                    }
                    previous = Some(max);
                }
                (None, true) => {}
            }
        }

        Ok(())
    }

    /// Per-employee monthly rate for the given solution tier.
    pub fn baseline_rate(&self, tier: SolutionTier) -> f64 {
        self.baseline_rates.rate_for(tier)
    }

    /// Flat monthly subscription price for a processing volume.
    ///
    /// Picks the first band whose inclusive cap covers `volume`; anything
    /// beyond the caps lands in the last band.
    pub fn subscription_monthly_cost(&self, volume: u64) -> f64 {
        self.subscription_tiers
            .iter()
            .find(|tier| tier.max_volume.is_none_or(|max| volume <= max))
            .or_else(|| self.subscription_tiers.last())
            .map(|tier| tier.monthly_price)
            .unwrap_or(0.0)
    }
}
