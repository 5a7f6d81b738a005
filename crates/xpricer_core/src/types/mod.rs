//! Value types and errors.

mod error;
mod params;

pub use error::{ParamError, PricingError};
pub use params::MarketParams;
