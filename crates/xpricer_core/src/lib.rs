//! # xpricer Core (L1: Value Types)
//!
//! Validated market/contract parameters and the error taxonomy shared by
//! every pricing method.
//!
//! This crate provides:
//! - [`types::MarketParams`]: the immutable five-parameter contract
//!   description (spot, strike, maturity, volatility, rate)
//! - [`types::ParamError`] / [`types::PricingError`]: structured errors
//!
//! ## Design Principles
//!
//! - **Fail fast at construction**: every pricer receives a
//!   `MarketParams` that has already been validated, so the numeric
//!   kernels never hit `ln`/division domain errors.
//! - **No ambient state**: parameters are explicit value objects passed
//!   per call; nothing is shared or reassigned between pricing calls.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod types;

pub use types::{MarketParams, ParamError, PricingError};
