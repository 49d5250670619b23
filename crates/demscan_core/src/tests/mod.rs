//! Integration tests for the demscan analysis core
//!
//! Tests are organized by topic:
//! - `bounds` - Peak location and threshold bound search
//! - `shoulder_metrics` - Slopes and hot-shoulder-strength ratio
//! - `heating` - Event schedules and amplitude distributions
//! - `sweep` - Wait-time sweep evaluation and planning

mod heating;
mod sweep;

use crate::model::Curve;

/// Convenience constructor used across the test modules.
pub(crate) fn curve(log_temp: &[f64], log_dem: &[f64]) -> Curve {
    Curve::new(log_temp.to_vec(), log_dem.to_vec()).unwrap()
}
