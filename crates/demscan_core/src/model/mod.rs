//! Curve and result types shared across the analysis modules.

mod curve;
mod results;

pub use curve::*;
pub use results::*;
