//! Geometric Brownian Motion path generation.
//!
//! Paths are evolved with the exact log-space update
//!
//! ```text
//! S(t + dt) = S(t) * exp((mu - sigma^2/2) * dt + sigma * sqrt(dt) * Z)
//! ```
//!
//! which samples the lognormal transition density exactly, so the step
//! size affects only the path resolution, not the distribution of each
//! individual step.
//!
//! # Memory Layout
//!
//! Paths are stored row-major in a single flat buffer:
//! `data[path_idx * (n_steps + 1) + step_idx]`, with `step_idx = 0`
//! holding the initial spot price.

use xpricer_core::MarketParams;

use super::config::{SimulationConfig, MAX_STEPS};
use super::error::SimulationError;
use crate::rng::SimRng;

/// Parameters of a Geometric Brownian Motion process.
///
/// # Model
///
/// ```text
/// dS = mu * S * dt + sigma * S * dW
/// ```
///
/// Under the risk-neutral measure the drift `mu` equals the risk-free
/// rate; [`GbmDynamics::risk_neutral`] builds that case directly from
/// market parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmDynamics {
    /// Initial spot price.
    pub spot: f64,
    /// Drift, annualised.
    pub drift: f64,
    /// Volatility, annualised. Zero is permitted and yields
    /// deterministic paths.
    pub volatility: f64,
    /// Simulation horizon in years.
    pub maturity: f64,
}

impl GbmDynamics {
    /// Creates new GBM dynamics.
    #[inline]
    pub fn new(spot: f64, drift: f64, volatility: f64, maturity: f64) -> Self {
        Self {
            spot,
            drift,
            volatility,
            maturity,
        }
    }

    /// Builds risk-neutral dynamics from validated market parameters:
    /// the drift is the risk-free rate.
    #[inline]
    pub fn risk_neutral(params: &MarketParams) -> Self {
        Self {
            spot: params.spot(),
            drift: params.rate(),
            volatility: params.volatility(),
            maturity: params.maturity(),
        }
    }

    /// Returns `true` if all fields satisfy their domain preconditions
    /// (finite throughout; spot and maturity positive, volatility
    /// non-negative).
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.spot > 0.0
            && self.spot.is_finite()
            && self.drift.is_finite()
            && self.volatility >= 0.0
            && self.volatility.is_finite()
            && self.maturity > 0.0
            && self.maturity.is_finite()
    }
}

/// A batch of simulated price paths.
///
/// Produced by [`PathSimulator::simulate`]; the flat storage keeps the
/// hot estimation loop cache-friendly.
#[derive(Clone, Debug)]
pub struct PathSet {
    /// Row-major path data, `n_paths * (n_steps + 1)` values.
    data: Vec<f64>,
    n_paths: usize,
    n_steps: usize,
    dt: f64,
}

impl PathSet {
    /// Returns the number of paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the number of time steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the time step the paths were simulated with, in years.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Returns the simulated horizon `n_steps * dt` in years.
    ///
    /// This can fall short of the requested maturity when the maturity
    /// is not an integer multiple of the time step; see
    /// [`PathSimulator::simulate`].
    #[inline]
    pub fn horizon(&self) -> f64 {
        self.n_steps as f64 * self.dt
    }

    /// Returns path `i` as a slice of `n_steps + 1` prices, the initial
    /// spot first.
    ///
    /// # Panics
    ///
    /// Panics if `i >= n_paths`.
    #[inline]
    pub fn path(&self, i: usize) -> &[f64] {
        let stride = self.n_steps + 1;
        &self.data[i * stride..(i + 1) * stride]
    }

    /// Iterates over the terminal price of every path.
    #[inline]
    pub fn terminal_prices(&self) -> impl Iterator<Item = f64> + '_ {
        let stride = self.n_steps + 1;
        self.data.iter().skip(self.n_steps).step_by(stride).copied()
    }

    /// Returns the flat row-major buffer.
    #[inline]
    pub fn as_flat(&self) -> &[f64] {
        &self.data
    }
}

/// Generates [`PathSet`]s under Geometric Brownian Motion.
///
/// Owns the RNG, so successive calls to [`simulate`](Self::simulate)
/// continue the same random sequence.
///
/// # Examples
///
/// ```rust
/// use xpricer_engines::mc::{GbmDynamics, PathSimulator, SimulationConfig};
///
/// let config = SimulationConfig::builder()
///     .n_paths(100)
///     .dt(0.01)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let mut simulator = PathSimulator::new(config);
/// let dynamics = GbmDynamics::new(100.0, 0.05, 0.2, 1.0);
/// let paths = simulator.simulate(&dynamics).unwrap();
///
/// assert_eq!(paths.n_paths(), 100);
/// assert_eq!(paths.n_steps(), 100);
/// ```
pub struct PathSimulator {
    config: SimulationConfig,
    rng: SimRng,
}

impl PathSimulator {
    /// Creates a simulator for the given configuration.
    ///
    /// A configured seed makes every run reproducible; without one the
    /// RNG is seeded from operating-system entropy.
    pub fn new(config: SimulationConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => SimRng::from_seed(seed),
            None => SimRng::from_entropy(),
        };
        Self { config, rng }
    }

    /// Returns the simulator configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Simulates a batch of GBM paths.
    ///
    /// The step count is `floor(maturity / dt)`: when the maturity is
    /// not an integer multiple of the time step, the final partial
    /// interval is dropped and the simulated horizon is `n_steps * dt`.
    /// Each retained step spans exactly `dt`.
    ///
    /// # Errors
    ///
    /// - [`SimulationError::InvalidDynamics`] if the dynamics fail their
    ///   domain preconditions.
    /// - [`SimulationError::StepCountOutOfRange`] if the derived step
    ///   count is zero (time step exceeds maturity) or above
    ///   [`MAX_STEPS`].
    pub fn simulate(&mut self, dynamics: &GbmDynamics) -> Result<PathSet, SimulationError> {
        if !dynamics.is_valid() {
            return Err(SimulationError::InvalidDynamics(format!(
                "spot {}, drift {}, volatility {}, maturity {}",
                dynamics.spot, dynamics.drift, dynamics.volatility, dynamics.maturity
            )));
        }

        let dt = self.config.dt();
        let n_steps = (dynamics.maturity / dt).floor() as usize;
        if n_steps == 0 || n_steps > MAX_STEPS {
            return Err(SimulationError::StepCountOutOfRange {
                steps: n_steps,
                maturity: dynamics.maturity,
            });
        }

        let n_paths = self.config.n_paths();
        let stride = n_steps + 1;
        let mut data = vec![0.0; n_paths * stride];

        // Hoisted out of the loop: both are constant across steps.
        let drift_dt = (dynamics.drift - 0.5 * dynamics.volatility * dynamics.volatility) * dt;
        let vol_sqrt_dt = dynamics.volatility * dt.sqrt();

        for path_idx in 0..n_paths {
            let offset = path_idx * stride;
            data[offset] = dynamics.spot;

            for step in 0..n_steps {
                let z = self.rng.gen_normal();
                let increment = drift_dt + vol_sqrt_dt * z;
                data[offset + step + 1] = data[offset + step] * increment.exp();
            }
        }

        Ok(PathSet {
            data,
            n_paths,
            n_steps,
            dt,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn config(n_paths: usize, dt: f64, seed: u64) -> SimulationConfig {
        SimulationConfig::builder()
            .n_paths(n_paths)
            .dt(dt)
            .seed(seed)
            .build()
            .unwrap()
    }

    #[test]
    fn test_paths_start_at_spot_exactly() {
        let mut simulator = PathSimulator::new(config(50, 0.01, 42));
        let paths = simulator
            .simulate(&GbmDynamics::new(123.45, 0.05, 0.2, 0.5))
            .unwrap();
        for i in 0..paths.n_paths() {
            assert_eq!(paths.path(i)[0], 123.45);
        }
    }

    #[test]
    fn test_paths_stay_positive() {
        // High volatility stresses the exponential update; prices must
        // remain strictly positive regardless.
        let mut simulator = PathSimulator::new(config(200, 0.01, 7));
        let paths = simulator
            .simulate(&GbmDynamics::new(100.0, 0.05, 1.5, 2.0))
            .unwrap();
        for &price in paths.as_flat() {
            assert!(price > 0.0 && price.is_finite());
        }
    }

    #[test]
    fn test_step_count_truncation() {
        // floor(1.0 / 0.3) = 3: the final partial interval is dropped.
        let mut simulator = PathSimulator::new(config(10, 0.3, 42));
        let paths = simulator
            .simulate(&GbmDynamics::new(100.0, 0.05, 0.2, 1.0))
            .unwrap();
        assert_eq!(paths.n_steps(), 3);
        assert_relative_eq!(paths.horizon(), 0.9, epsilon = 1e-12);
        assert_eq!(paths.path(0).len(), 4);
    }

    #[test]
    fn test_dt_exceeding_maturity_rejected() {
        let mut simulator = PathSimulator::new(config(10, 0.5, 42));
        let result = simulator.simulate(&GbmDynamics::new(100.0, 0.05, 0.2, 0.25));
        assert!(matches!(
            result,
            Err(SimulationError::StepCountOutOfRange { steps: 0, .. })
        ));
    }

    #[test]
    fn test_excessive_step_count_rejected() {
        let mut simulator = PathSimulator::new(config(10, 1e-6, 42));
        let result = simulator.simulate(&GbmDynamics::new(100.0, 0.05, 0.2, 1.0));
        assert!(matches!(
            result,
            Err(SimulationError::StepCountOutOfRange { .. })
        ));
    }

    #[test]
    fn test_invalid_dynamics_rejected() {
        let mut simulator = PathSimulator::new(config(10, 0.01, 42));
        for dynamics in [
            GbmDynamics::new(-100.0, 0.05, 0.2, 1.0),
            GbmDynamics::new(100.0, f64::NAN, 0.2, 1.0),
            GbmDynamics::new(100.0, 0.05, -0.2, 1.0),
            GbmDynamics::new(100.0, 0.05, 0.2, 0.0),
        ] {
            let result = simulator.simulate(&dynamics);
            assert!(matches!(result, Err(SimulationError::InvalidDynamics(_))));
        }
    }

    #[test]
    fn test_seeded_runs_are_identical() {
        let dynamics = GbmDynamics::new(100.0, 0.05, 0.2, 1.0);
        let mut a = PathSimulator::new(config(100, 0.01, 42));
        let mut b = PathSimulator::new(config(100, 0.01, 42));
        assert_eq!(
            a.simulate(&dynamics).unwrap().as_flat(),
            b.simulate(&dynamics).unwrap().as_flat()
        );
    }

    #[test]
    fn test_successive_batches_differ() {
        // The RNG state advances between calls.
        let dynamics = GbmDynamics::new(100.0, 0.05, 0.2, 1.0);
        let mut simulator = PathSimulator::new(config(100, 0.01, 42));
        let first = simulator.simulate(&dynamics).unwrap();
        let second = simulator.simulate(&dynamics).unwrap();
        assert_ne!(first.as_flat(), second.as_flat());
    }

    #[test]
    fn test_zero_volatility_paths_are_deterministic() {
        // sigma = 0: every step multiplies by exp(r * dt) exactly.
        let mut simulator = PathSimulator::new(config(5, 0.25, 42));
        let paths = simulator
            .simulate(&GbmDynamics::new(100.0, 0.05, 0.0, 1.0))
            .unwrap();
        assert_eq!(paths.n_steps(), 4);
        for i in 0..paths.n_paths() {
            let terminal = paths.path(i)[4];
            assert_relative_eq!(terminal, 100.0 * (0.05_f64).exp(), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_terminal_mean_matches_lognormal_expectation() {
        // E[S_T] = S * exp(r * T) over the simulated horizon; with 50k
        // paths the tolerance sits at 4 standard errors of the sample
        // mean.
        let mut simulator = PathSimulator::new(config(50_000, 0.25, 314));
        let dynamics = GbmDynamics::new(100.0, 0.05, 0.2, 1.0);
        let paths = simulator.simulate(&dynamics).unwrap();

        let n = paths.n_paths() as f64;
        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        for terminal in paths.terminal_prices() {
            sum += terminal;
            sum_sq += terminal * terminal;
        }
        let mean = sum / n;
        let variance = (sum_sq - n * mean * mean) / (n - 1.0);
        let std_error = (variance / n).sqrt();

        let expected = 100.0 * (0.05_f64 * paths.horizon()).exp();
        assert!(
            (mean - expected).abs() < 4.0 * std_error,
            "terminal mean {} vs expected {} (se {})",
            mean,
            expected,
            std_error
        );
    }

    #[test]
    fn test_terminal_prices_iterator_matches_paths() {
        let mut simulator = PathSimulator::new(config(20, 0.1, 42));
        let paths = simulator
            .simulate(&GbmDynamics::new(100.0, 0.05, 0.2, 1.0))
            .unwrap();
        let terminals: Vec<f64> = paths.terminal_prices().collect();
        assert_eq!(terminals.len(), paths.n_paths());
        for (i, &terminal) in terminals.iter().enumerate() {
            assert_eq!(terminal, paths.path(i)[paths.n_steps()]);
        }
    }

    proptest! {
        #[test]
        fn prop_paths_positive_and_finite(
            spot in 1.0..1000.0_f64,
            drift in -0.1..0.2_f64,
            volatility in 0.0..1.0_f64,
            maturity in 0.1..3.0_f64,
            seed in 0..u64::MAX,
        ) {
            let mut simulator = PathSimulator::new(config(20, 0.05, seed));
            let dynamics = GbmDynamics::new(spot, drift, volatility, maturity);
            let paths = simulator.simulate(&dynamics).unwrap();
            for &price in paths.as_flat() {
                prop_assert!(price > 0.0 && price.is_finite());
            }
        }
    }
}
