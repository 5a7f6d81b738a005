//! Closed-form Black-Scholes pricing for European call options.
//!
//! ## Mathematical Formulas
//!
//! **Call price**: C = S * N(d1) - K * e^(-r * tau) * N(d2)
//!
//! Where:
//! - d1 = (ln(S/K) + (r + sigma^2/2) * tau) / (sigma * sqrt(tau))
//! - d2 = d1 - sigma * sqrt(tau)
//!
//! The domain preconditions (S, K, sigma, tau > 0) are enforced by
//! [`MarketParams`] at construction, so pricing itself cannot fail.

use xpricer_core::MarketParams;

use super::distributions::norm_cdf;

/// Closed-form Black-Scholes pricer for a European call.
///
/// Deterministic and side-effect free; this is the reference the Monte
/// Carlo and lattice engines are cross-checked against.
///
/// # Examples
/// ```
/// use xpricer_core::MarketParams;
/// use xpricer_models::BlackScholes;
///
/// let params = MarketParams::new(100.0, 100.0, 30.0 / 365.0, 0.212, 0.015).unwrap();
/// let price = BlackScholes::new(params).price_call();
/// assert!((price - 2.4850).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BlackScholes {
    params: MarketParams,
}

impl BlackScholes {
    /// Creates a pricer over validated market parameters.
    #[inline]
    pub fn new(params: MarketParams) -> Self {
        Self { params }
    }

    /// Returns the market parameters.
    #[inline]
    pub fn params(&self) -> &MarketParams {
        &self.params
    }

    /// Computes the d1 term.
    ///
    /// d1 = (ln(S/K) + (r + sigma^2/2) * tau) / (sigma * sqrt(tau))
    #[inline]
    pub fn d1(&self) -> f64 {
        let p = &self.params;
        let vol_sqrt_tau = p.volatility() * p.maturity().sqrt();
        let log_moneyness = (p.spot() / p.strike()).ln();
        let drift = (p.rate() + 0.5 * p.volatility() * p.volatility()) * p.maturity();
        (log_moneyness + drift) / vol_sqrt_tau
    }

    /// Computes the d2 term.
    ///
    /// d2 = d1 - sigma * sqrt(tau)
    #[inline]
    pub fn d2(&self) -> f64 {
        self.d1() - self.params.volatility() * self.params.maturity().sqrt()
    }

    /// Computes the European call price.
    ///
    /// C = S * N(d1) - K * e^(-r * tau) * N(d2). Always non-negative.
    pub fn price_call(&self) -> f64 {
        let p = &self.params;
        let d1 = self.d1();
        let d2 = self.d2();
        p.spot() * norm_cdf(d1) - p.strike() * p.discount_factor() * norm_cdf(d2)
    }
}
