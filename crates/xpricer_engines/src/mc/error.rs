//! Error types for the Monte Carlo engine.

use thiserror::Error;
use xpricer_core::PricingError;

use super::config::{MAX_PATHS, MAX_STEPS};

/// Errors raised while configuring or running a Monte Carlo simulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// Path count outside the valid range [1, 10_000_000].
    #[error("invalid path count {0}: must be in range [1, {MAX_PATHS}]")]
    InvalidPathCount(usize),

    /// Time step is zero, negative, or non-finite.
    #[error("invalid time step {0}: must be positive and finite")]
    InvalidTimeStep(f64),

    /// A required builder field was not supplied, or holds a value the
    /// builder cannot accept.
    #[error("invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },

    /// The derived step count floor(maturity / dt) fell outside
    /// [1, 10_000]. A count of zero means the time step exceeds the
    /// maturity.
    #[error(
        "derived step count {steps} outside [1, {MAX_STEPS}] for maturity {maturity}: \
         adjust the time step"
    )]
    StepCountOutOfRange {
        /// The derived step count.
        steps: usize,
        /// Maturity the step count was derived for, in years.
        maturity: f64,
    },

    /// The process dynamics fail their domain preconditions.
    #[error("invalid dynamics: {0}")]
    InvalidDynamics(String),
}

impl From<SimulationError> for PricingError {
    fn from(err: SimulationError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
