//! Transformation module.
//!
//! - Numeric: fixed-point rewrite of a numeric column
//! - Pipeline: load, parse, rewrite and emit in one call

pub mod numeric;
pub mod pipeline;

pub use numeric::{convert_scientific_to_numeric, format_fixed_point};
pub use pipeline::*;
