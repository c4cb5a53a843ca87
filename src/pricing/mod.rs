//! Quote pricing
//!
//! This module holds the pricing core and the input layer that feeds it:
//! - params: the strongly-typed parameter set and its coercion rules
//! - engine: the pure cost computation producing a `CostBreakdown`
//! - input: raw form-like values resolved into `PricingParams`

pub mod engine;
pub mod input;
pub mod params;

pub use engine::{compute, CostBreakdown};
pub use input::{QuoteDefaults, QuoteInput, RawValue};
pub use params::{PricingParams, DEFAULT_CURRENCY, DEFAULT_PART_NAME};
