//! Percentage-weighted selection of one outcome out of many.
//!
//! Each outcome declares its own chance out of [`MAX_CHANCE`]. Whatever is
//! left over belongs to the default outcome of the [`weight_set::WeightSet`].
pub mod error;
pub mod sampler;
pub mod uniform_source;
pub mod validator;
pub mod weight_set;
pub mod weighted_item;

/// Total chance available to a set, in percent.
pub const MAX_CHANCE: f64 = 100.0;

/// Overflow below this many percentage points is float rounding, not an error.
pub const WEIGHT_TOLERANCE: f64 = 1e-9;
