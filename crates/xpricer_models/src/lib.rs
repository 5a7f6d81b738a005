//! # xpricer Models (L2: Closed-Form Analytics)
//!
//! Analytic pricing formulas used both as a pricer in their own right and
//! as the reference the stochastic and discrete engines are cross-checked
//! against.
//!
//! This crate provides:
//! - Standard-normal distribution functions ([`analytic::distributions`])
//! - The closed-form Black-Scholes European call pricer
//!   ([`analytic::BlackScholes`])
//!
//! Put pricing is deliberately absent: this repository prices European
//! calls only, and put-call parity checks are out of scope.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod analytic;

pub use analytic::BlackScholes;
