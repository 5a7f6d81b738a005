//! Monte Carlo pricing engine.
//!
//! Simulates Geometric Brownian Motion paths with the exact log-space
//! update and estimates the European call price as the discounted mean of
//! terminal payoffs, together with its standard error.
//!
//! # Pipeline
//!
//! 1. [`SimulationConfig`] — validated path count, time step and optional
//!    seed.
//! 2. [`PathSimulator`] — generates a [`PathSet`] under some
//!    [`GbmDynamics`].
//! 3. [`discounted_call_price`] — reduces terminal prices to an
//!    [`McEstimate`].
//!
//! [`MonteCarloPricer`] wires the three stages together for the common
//! case of risk-neutral pricing from [`MarketParams`].
//!
//! [`MarketParams`]: xpricer_core::MarketParams

pub mod config;
pub mod error;
pub mod paths;
pub mod pricer;

pub use config::{SimulationConfig, SimulationConfigBuilder, MAX_PATHS, MAX_STEPS};
pub use error::SimulationError;
pub use paths::{GbmDynamics, PathSet, PathSimulator};
pub use pricer::{discounted_call_price, McEstimate, MonteCarloPricer};
