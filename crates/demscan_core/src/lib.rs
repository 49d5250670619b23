//! DEM shoulder-asymmetry analysis for EBTEL-2fluid output
//!
//! This crate provides the numerical core for diagnosing asymmetric coronal
//! heating signatures in differential emission measure (DEM) curves produced
//! by the EBTEL-2fluid simulation. It supports:
//! - Characteristic temperature bounds around the DEM peak at a configurable
//!   log-magnitude offset, with non-finite samples near the domain edges
//!   skipped explicitly
//! - Linear-fit shoulder slopes and the integral hot-shoulder-strength ratio
//! - Heating-run parameterization: event schedules, uniform and power-law
//!   amplitude distributions preserving the time-averaged heating rate
//! - Wait-time sweep evaluation with per-point error reporting
//!
//! # Example
//!
//! ```ignore
//! use demscan_core::model::Curve;
//! use demscan_core::shoulder::{find_temp_bounds, hot_shoulder_strength};
//!
//! let curve = Curve::new(
//!     vec![4.5, 5.0, 5.5, 6.0, 6.5, 7.0],
//!     vec![22.0, 24.0, 27.0, 26.0, 23.0, 21.0],
//! )?;
//! let bounds = find_temp_bounds(&curve, 2.0)?;
//! let strength = hot_shoulder_strength(&curve, 2.0)?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod error;
pub mod heating;
pub mod shoulder;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use model::{Curve, ShoulderSlopes, TempBounds};
pub use shoulder::{find_temp_bounds, hot_shoulder_strength, shoulder_slopes};
