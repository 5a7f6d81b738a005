//! Error types for the lattice engine.

use thiserror::Error;
use xpricer_core::PricingError;

/// Errors raised while constructing or evaluating a binomial lattice.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LatticeError {
    /// Step count must be at least 1.
    #[error("invalid step count {0}: must be at least 1")]
    InvalidStepCount(usize),

    /// The up and down factors coincide, so the risk-neutral probability
    /// is undefined. Happens when `volatility * sqrt(dt)` underflows.
    #[error("degenerate lattice: up factor {up} equals down factor {down}")]
    DegenerateTree {
        /// Up factor `exp(volatility * sqrt(dt))`.
        up: f64,
        /// Down factor `1 / up`.
        down: f64,
    },

    /// The risk-neutral probability left [0, 1]; the parameters admit
    /// arbitrage at this step size. A finer step usually resolves it.
    #[error("risk-neutral probability {probability} outside [0, 1]: refine the step count")]
    ProbabilityOutOfRange {
        /// The computed probability.
        probability: f64,
    },
}

impl From<LatticeError> for PricingError {
    fn from(err: LatticeError) -> Self {
        match err {
            LatticeError::InvalidStepCount(_) => PricingError::InvalidInput(err.to_string()),
            LatticeError::DegenerateTree { .. } | LatticeError::ProbabilityOutOfRange { .. } => {
                PricingError::NumericalInstability(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LatticeError::InvalidStepCount(0);
        assert!(err.to_string().contains("invalid step count 0"));

        let err = LatticeError::ProbabilityOutOfRange { probability: 1.2 };
        assert!(err.to_string().contains("outside [0, 1]"));
    }

    #[test]
    fn test_conversion_to_pricing_error() {
        let err: PricingError = LatticeError::InvalidStepCount(0).into();
        assert!(matches!(err, PricingError::InvalidInput(_)));

        let err: PricingError = LatticeError::ProbabilityOutOfRange { probability: 1.2 }.into();
        assert!(matches!(err, PricingError::NumericalInstability(_)));
    }
}
