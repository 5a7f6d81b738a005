//! Error types for structured error handling.
//!
//! This module provides:
//! - `ParamError`: rejected market/contract parameters
//! - `PricingError`: umbrella error for pricing operations

use std::fmt;
use thiserror::Error;

/// Rejected market/contract parameter.
///
/// Every variant carries the offending value so callers can report the
/// exact input that failed validation.
///
/// # Examples
/// ```
/// use xpricer_core::types::ParamError;
///
/// let err = ParamError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParamError {
    /// Spot price must be strictly positive and finite.
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The rejected spot value.
        spot: f64,
    },

    /// Strike must be strictly positive and finite.
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The rejected strike value.
        strike: f64,
    },

    /// Time to maturity must be strictly positive and finite (years).
    #[error("Invalid maturity: tau = {maturity}")]
    InvalidMaturity {
        /// The rejected maturity value.
        maturity: f64,
    },

    /// Volatility must be strictly positive and finite (annualised).
    #[error("Invalid volatility: sigma = {volatility}")]
    InvalidVolatility {
        /// The rejected volatility value.
        volatility: f64,
    },

    /// Risk-free rate may be negative but must be finite.
    #[error("Non-finite rate: r = {rate}")]
    NonFiniteRate {
        /// The rejected rate value.
        rate: f64,
    },
}

/// Categorised pricing errors.
///
/// Umbrella type that layer-specific errors convert into, so callers that
/// mix methods can handle one error type.
///
/// # Variants
/// - `InvalidInput`: rejected market data or parameters
/// - `NumericalInstability`: computation produced a degenerate quantity
/// - `ModelFailure`: model assumptions violated
///
/// # Examples
/// ```
/// use xpricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters
    InvalidInput(String),

    /// Numerical instability during computation
    NumericalInstability(String),

    /// Model failed to produce valid result
    ModelFailure(String),
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            PricingError::NumericalInstability(msg) => {
                write!(f, "Numerical instability: {}", msg)
            }
            PricingError::ModelFailure(msg) => write!(f, "Model failure: {}", msg),
        }
    }
}

impl std::error::Error for PricingError {}

impl From<ParamError> for PricingError {
    fn from(err: ParamError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
