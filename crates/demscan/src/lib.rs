//! Sweep orchestration for the demscan analysis core.
//!
//! The binary walks an EBTEL-2fluid output tree, loads the per-wait-time
//! DEM tables, runs the shoulder analyzer over the sweep, and reports the
//! asymmetry metrics as a text table or JSON. Per-curve analysis failures
//! are logged and skipped; a table that fails to load aborts the run.

pub mod loader;
pub mod logging;
pub mod paths;
pub mod report;

pub use logging::init_logging;
