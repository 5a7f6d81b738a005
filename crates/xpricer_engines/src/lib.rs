//! # xpricer Engines (L3: Numerical Pricing Kernels)
//!
//! Numerical engines that price European call options without relying on a
//! closed-form solution:
//!
//! - [`mc`] — Monte Carlo simulation of Geometric Brownian Motion paths and
//!   the discounted-payoff estimator with its standard error.
//! - [`lattice`] — Cox-Ross-Rubinstein binomial lattice with backward
//!   induction.
//! - [`rng`] — seeded pseudo-random number generation shared by the
//!   stochastic engines.
//!
//! Both engines take the same validated
//! [`MarketParams`](xpricer_core::MarketParams) as the closed-form pricer in
//! `xpricer_models`, so the three methods can be cross-checked on identical
//! inputs. All computation is single-threaded and deterministic for a fixed
//! seed.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod lattice;
pub mod mc;
pub mod rng;

pub use lattice::{CrrPricer, LatticeError};
pub use mc::{McEstimate, MonteCarloPricer, SimulationConfig, SimulationError};
pub use rng::SimRng;
