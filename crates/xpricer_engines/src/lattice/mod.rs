//! Binomial lattice pricing engine.
//!
//! Implements the Cox-Ross-Rubinstein (CRR) discretisation: the spot
//! evolves over a recombining binomial tree whose up and down factors are
//! reciprocal, and the option value is obtained by discounted backward
//! induction from the terminal payoffs. For European calls the lattice
//! price converges to the closed-form Black-Scholes value as the step
//! count grows, with error of order 1 / n_steps.

pub mod crr;
pub mod error;

pub use crr::CrrPricer;
pub use error::LatticeError;
