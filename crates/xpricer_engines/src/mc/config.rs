//! Monte Carlo simulation configuration.

use super::error::SimulationError;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of time steps allowed per path.
pub const MAX_STEPS: usize = 10_000;

/// Monte Carlo simulation configuration.
///
/// Immutable once built; the step count is not part of the configuration
/// because it is derived from the maturity and the time step at
/// simulation time. Use [`SimulationConfigBuilder`] to construct
/// instances.
///
/// # Examples
///
/// ```rust
/// use xpricer_engines::mc::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .n_paths(10_000)
///     .dt(1.0 / 365.0)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 10_000);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig {
    /// Number of simulation paths.
    n_paths: usize,
    /// Time step in years.
    dt: f64,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the time step in years.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError`] if:
    /// - `n_paths` is 0 or greater than [`MAX_PATHS`]
    /// - `dt` is not positive and finite
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(SimulationError::InvalidPathCount(self.n_paths));
        }
        if !(self.dt > 0.0 && self.dt.is_finite()) {
            return Err(SimulationError::InvalidTimeStep(self.dt));
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
///
/// Validation happens at build time; a successfully built configuration
/// cannot later fail its own range checks.
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    n_paths: Option<usize>,
    dt: Option<f64>,
    seed: Option<u64>,
}

impl SimulationConfigBuilder {
    /// Sets the number of simulation paths, in [1, 10_000_000].
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the time step in years. Must be positive and finite.
    #[inline]
    pub fn dt(mut self, dt: f64) -> Self {
        self.dt = Some(dt);
        self
    }

    /// Sets the seed for reproducibility.
    ///
    /// Without a seed the simulator draws its seed from operating-system
    /// entropy and runs are not reproducible.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError`] if `n_paths` or `dt` was not set, or
    /// if either is outside its valid range.
    pub fn build(self) -> Result<SimulationConfig, SimulationError> {
        let n_paths = self.n_paths.ok_or(SimulationError::InvalidParameter {
            name: "n_paths",
            value: "must be specified".to_string(),
        })?;

        let dt = self.dt.ok_or(SimulationError::InvalidParameter {
            name: "dt",
            value: "must be specified".to_string(),
        })?;

        let config = SimulationConfig {
            n_paths,
            dt,
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_valid() {
        let config = SimulationConfig::builder()
            .n_paths(10_000)
            .dt(1.0 / 365.0)
            .build()
            .unwrap();

        assert_eq!(config.n_paths(), 10_000);
        assert_eq!(config.dt(), 1.0 / 365.0);
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn test_builder_with_seed() {
        let config = SimulationConfig::builder()
            .n_paths(1000)
            .dt(0.01)
            .seed(42)
            .build()
            .unwrap();

        assert_eq!(config.seed(), Some(42));
    }

    #[test]
    fn test_zero_paths_rejected() {
        let result = SimulationConfig::builder().n_paths(0).dt(0.01).build();
        assert!(matches!(result, Err(SimulationError::InvalidPathCount(0))));
    }

    #[test]
    fn test_too_many_paths_rejected() {
        let result = SimulationConfig::builder()
            .n_paths(MAX_PATHS + 1)
            .dt(0.01)
            .build();
        assert!(matches!(result, Err(SimulationError::InvalidPathCount(_))));
    }

    #[test]
    fn test_max_paths_accepted() {
        let config = SimulationConfig::builder()
            .n_paths(MAX_PATHS)
            .dt(0.01)
            .build()
            .unwrap();
        assert_eq!(config.n_paths(), MAX_PATHS);
    }

    #[test]
    fn test_nonpositive_dt_rejected() {
        for dt in [0.0, -0.01, f64::NAN, f64::INFINITY] {
            let result = SimulationConfig::builder().n_paths(1000).dt(dt).build();
            assert!(
                matches!(result, Err(SimulationError::InvalidTimeStep(_))),
                "dt = {} should be rejected",
                dt
            );
        }
    }

    #[test]
    fn test_missing_paths() {
        let result = SimulationConfig::builder().dt(0.01).build();
        assert!(matches!(
            result,
            Err(SimulationError::InvalidParameter {
                name: "n_paths",
                ..
            })
        ));
    }

    #[test]
    fn test_missing_dt() {
        let result = SimulationConfig::builder().n_paths(1000).build();
        assert!(matches!(
            result,
            Err(SimulationError::InvalidParameter { name: "dt", .. })
        ));
    }
}
