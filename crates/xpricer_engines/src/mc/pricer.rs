//! Monte Carlo estimation of the European call price.
//!
//! The estimator is the discounted mean of terminal payoffs:
//!
//! ```text
//! C_hat = exp(-r * tau) * mean(max(S_T - K, 0))
//! ```
//!
//! The standard error uses the unbiased (n - 1) sample variance of the
//! discounted payoffs, so the reported uncertainty shrinks as
//! 1 / sqrt(n_paths).

use xpricer_core::MarketParams;

use super::config::SimulationConfig;
use super::error::SimulationError;
use super::paths::{GbmDynamics, PathSet, PathSimulator};

/// A Monte Carlo price estimate with its sampling uncertainty.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct McEstimate {
    /// Discounted mean payoff.
    pub price: f64,
    /// Standard error of the estimate. Zero when fewer than two paths
    /// were simulated.
    pub std_error: f64,
}

impl McEstimate {
    /// Returns the 95% confidence interval `(lower, upper)` around the
    /// estimate, using the normal quantile 1.96.
    #[inline]
    pub fn confidence_95(&self) -> (f64, f64) {
        let half_width = 1.96 * self.std_error;
        (self.price - half_width, self.price + half_width)
    }

    /// Returns the 99% confidence interval `(lower, upper)` around the
    /// estimate, using the normal quantile 2.576.
    #[inline]
    pub fn confidence_99(&self) -> (f64, f64) {
        let half_width = 2.576 * self.std_error;
        (self.price - half_width, self.price + half_width)
    }
}

/// Reduces a simulated path set to a discounted call price estimate.
///
/// Each terminal payoff `max(S_T - K, 0)` is discounted by
/// `exp(-rate * maturity)` before averaging, so both the price and its
/// standard error are in present-value terms. The discount uses the
/// requested maturity even when step truncation left the simulated
/// horizon slightly short of it.
pub fn discounted_call_price(
    paths: &PathSet,
    strike: f64,
    rate: f64,
    maturity: f64,
) -> McEstimate {
    let discount = (-rate * maturity).exp();
    let n = paths.n_paths() as f64;

    let mut sum = 0.0;
    let mut sum_sq = 0.0;
    for terminal in paths.terminal_prices() {
        let payoff = (terminal - strike).max(0.0) * discount;
        sum += payoff;
        sum_sq += payoff * payoff;
    }

    let price = sum / n;
    let std_error = if paths.n_paths() > 1 {
        // Guard against a tiny negative from cancellation when all
        // payoffs are equal.
        let variance = ((sum_sq - n * price * price) / (n - 1.0)).max(0.0);
        (variance / n).sqrt()
    } else {
        0.0
    };

    McEstimate { price, std_error }
}

/// Monte Carlo pricer for European call options.
///
/// Combines risk-neutral GBM simulation with the discounted-payoff
/// estimator. Holds the simulator (and therefore the RNG state), so
/// repeated calls with the same seed configuration start from a fresh
/// simulator per pricer, not per call.
///
/// # Examples
///
/// ```rust
/// use xpricer_core::MarketParams;
/// use xpricer_engines::mc::{MonteCarloPricer, SimulationConfig};
///
/// let params = MarketParams::new(100.0, 100.0, 1.0, 0.2, 0.05).unwrap();
/// let config = SimulationConfig::builder()
///     .n_paths(10_000)
///     .dt(0.01)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let mut pricer = MonteCarloPricer::new(config);
/// let estimate = pricer.price_call(&params).unwrap();
/// assert!(estimate.price > 0.0);
/// assert!(estimate.std_error > 0.0);
/// ```
pub struct MonteCarloPricer {
    simulator: PathSimulator,
}

impl MonteCarloPricer {
    /// Creates a pricer for the given simulation configuration.
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            simulator: PathSimulator::new(config),
        }
    }

    /// Returns the simulation configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        self.simulator.config()
    }

    /// Prices a European call by risk-neutral simulation.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::StepCountOutOfRange`] when the
    /// configured time step derives a step count outside [1, 10_000]
    /// for this maturity.
    pub fn price_call(&mut self, params: &MarketParams) -> Result<McEstimate, SimulationError> {
        let dynamics = GbmDynamics::risk_neutral(params);
        let paths = self.simulator.simulate(&dynamics)?;
        Ok(discounted_call_price(
            &paths,
            params.strike(),
            params.rate(),
            params.maturity(),
        ))
    }
}
