//! Random number generation for the simulation engines.

pub mod prng;

pub use prng::SimRng;
