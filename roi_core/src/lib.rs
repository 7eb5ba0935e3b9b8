//! # roi-core
//!
//! Cost model behind the Bastion pricing page ROI estimator.
//!
//! The estimator is a pure function: an [`EstimatorInput`] plus an
//! [`EstimatorPolicy`] always produce the same [`EstimatorResult`]. There is
//! no hidden state, no clock and no I/O on the computation path, so the
//! presentation layer can call it after every committed form edit.
//!
//! ```rust
//! use roi_core::{estimate, EstimatorInput};
//!
//! let result = estimate(&EstimatorInput::default());
//! assert_eq!(result.current_annual_cost, 106_000.0);
//! assert_eq!(result.projected_annual_cost, 40_588.0);
//! ```
//!
//! ## Modules
//!
//! - [`types`] - input/result records and the solution tier enum
//! - [`policy`] - named policy constants and the tunable [`EstimatorPolicy`]
//! - [`estimator`] - [`CostEstimator`], the computation itself
//! - [`input`] - tolerant coercion of raw form text
//! - [`error`] - [`PolicyError`]
//!
//! Developed by The Bastion Team (c)2025

#![warn(missing_docs)]

pub mod error;
pub mod estimator;
pub mod input;
pub mod policy;
pub mod types;

pub use error::{PolicyError, Result};
pub use estimator::CostEstimator;
pub use policy::{BaselineRates, EstimatorPolicy, SubscriptionTier};
pub use types::{EstimatorInput, EstimatorResult, InputField, SolutionTier};

/// Compute the estimate for `input` using the built-in policy.
///
/// Shorthand for `CostEstimator::default().compute(input)`.
pub fn estimate(input: &EstimatorInput) -> EstimatorResult {
    CostEstimator::default().compute(input)
}
