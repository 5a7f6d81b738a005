//! Cox-Ross-Rubinstein binomial pricer.
//!
//! # Discretisation
//!
//! With `dt = tau / n_steps`:
//!
//! ```text
//! u = exp(sigma * sqrt(dt))       up factor
//! d = 1 / u                       down factor
//! p = (exp(r * dt) - d) / (u - d) risk-neutral up probability
//! ```
//!
//! Terminal payoffs `max(S * u^j * d^(n-j) - K, 0)` are rolled back one
//! layer at a time, each node the discounted expectation of its two
//! children.

use xpricer_core::MarketParams;

use super::error::LatticeError;

/// Cox-Ross-Rubinstein binomial lattice pricer for European calls.
///
/// The step count is fixed at construction and validated there, so
/// pricing can only fail on parameter combinations that make the tree
/// itself ill-posed.
///
/// # Examples
///
/// ```rust
/// use xpricer_core::MarketParams;
/// use xpricer_engines::lattice::CrrPricer;
///
/// let params = MarketParams::new(100.0, 100.0, 1.0, 0.2, 0.05).unwrap();
/// let pricer = CrrPricer::new(1000).unwrap();
/// let price = pricer.price_call(&params).unwrap();
/// // Converges on the Black-Scholes value 10.4506
/// assert!((price - 10.4506).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CrrPricer {
    n_steps: usize,
}

impl CrrPricer {
    /// Creates a pricer with the given number of lattice steps.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::InvalidStepCount`] if `n_steps` is zero.
    pub fn new(n_steps: usize) -> Result<Self, LatticeError> {
        if n_steps == 0 {
            return Err(LatticeError::InvalidStepCount(n_steps));
        }
        Ok(Self { n_steps })
    }

    /// Returns the number of lattice steps.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Prices a European call by backward induction.
    ///
    /// Uses two alternating value buffers, so each layer is computed
    /// entirely from the previous one and the induction never reads a
    /// node it has already overwritten.
    ///
    /// # Errors
    ///
    /// - [`LatticeError::DegenerateTree`] if the up and down factors
    ///   coincide (volatility too small for this step size).
    /// - [`LatticeError::ProbabilityOutOfRange`] if the risk-neutral
    ///   probability leaves [0, 1].
    pub fn price_call(&self, params: &MarketParams) -> Result<f64, LatticeError> {
        let dt = params.maturity() / self.n_steps as f64;
        let up = (params.volatility() * dt.sqrt()).exp();
        let down = 1.0 / up;

        if (up - down).abs() < f64::EPSILON {
            return Err(LatticeError::DegenerateTree { up, down });
        }

        let growth = (params.rate() * dt).exp();
        let probability = (growth - down) / (up - down);
        if !(0.0..=1.0).contains(&probability) {
            return Err(LatticeError::ProbabilityOutOfRange { probability });
        }

        let discount = (-params.rate() * dt).exp();
        let n = self.n_steps;

        // Terminal layer: node j saw j up moves and n - j down moves.
        let mut current: Vec<f64> = (0..=n)
            .map(|j| {
                let terminal =
                    params.spot() * up.powi(j as i32) * down.powi((n - j) as i32);
                (terminal - params.strike()).max(0.0)
            })
            .collect();
        let mut scratch = vec![0.0; n + 1];

        for layer in (0..n).rev() {
            for j in 0..=layer {
                scratch[j] =
                    discount * (probability * current[j + 1] + (1.0 - probability) * current[j]);
            }
            std::mem::swap(&mut current, &mut scratch);
        }

        Ok(current[0])
    }
}
