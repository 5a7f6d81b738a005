//! Market and contract parameters.
//!
//! This module provides [`MarketParams`], the validated value object that
//! every pricing method consumes.

use super::error::ParamError;

/// Market and contract parameters for a European option.
///
/// An immutable value object carrying the five scalars shared by all
/// pricing methods: spot price, strike, time to maturity, volatility and
/// risk-free rate. Validation happens once, at construction; pricers
/// accept `&MarketParams` and never re-check domains.
///
/// # Invariants
/// - `spot`, `strike`, `maturity`, `volatility` are strictly positive
///   and finite
/// - `rate` is finite (negative rates are allowed)
///
/// # Examples
/// ```
/// use xpricer_core::MarketParams;
///
/// let params = MarketParams::new(100.0, 100.0, 30.0 / 365.0, 0.212, 0.015).unwrap();
/// assert_eq!(params.spot(), 100.0);
///
/// // Zero volatility is rejected
/// assert!(MarketParams::new(100.0, 100.0, 1.0, 0.0, 0.015).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketParams {
    spot: f64,
    strike: f64,
    maturity: f64,
    volatility: f64,
    rate: f64,
}

impl MarketParams {
    /// Creates validated market parameters.
    ///
    /// # Arguments
    /// * `spot` - Current spot price S (must be positive)
    /// * `strike` - Strike price K (must be positive)
    /// * `maturity` - Time to maturity in years (must be positive)
    /// * `volatility` - Annualised volatility (must be positive)
    /// * `rate` - Annualised risk-free rate (any finite value)
    ///
    /// # Errors
    /// Returns the matching [`ParamError`] variant for the first
    /// parameter that fails validation.
    pub fn new(
        spot: f64,
        strike: f64,
        maturity: f64,
        volatility: f64,
        rate: f64,
    ) -> Result<Self, ParamError> {
        if !(spot > 0.0 && spot.is_finite()) {
            return Err(ParamError::InvalidSpot { spot });
        }
        if !(strike > 0.0 && strike.is_finite()) {
            return Err(ParamError::InvalidStrike { strike });
        }
        if !(maturity > 0.0 && maturity.is_finite()) {
            return Err(ParamError::InvalidMaturity { maturity });
        }
        if !(volatility > 0.0 && volatility.is_finite()) {
            return Err(ParamError::InvalidVolatility { volatility });
        }
        if !rate.is_finite() {
            return Err(ParamError::NonFiniteRate { rate });
        }

        Ok(Self {
            spot,
            strike,
            maturity,
            volatility,
            rate,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the time to maturity in years.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Returns the annualised volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the annualised risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the discount factor e^(-r*tau) to maturity.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }
}
