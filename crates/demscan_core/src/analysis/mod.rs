//! Wait-time sweep analysis.
//!
//! A sweep runs the shoulder analyzer once per wait-time point over curves
//! the caller has already loaded. Each point keeps its own `Result`, so a
//! curve that fails analysis (too short, monotonic, all-infinite shoulder)
//! never hides the points that succeeded — the caller decides whether to
//! skip, log, or abort.
//!
//! ```ignore
//! use demscan_core::analysis::{AnalysisMetric, SweepConfig, sweep_evaluate};
//!
//! let config = SweepConfig::default();
//! let results = sweep_evaluate(&curves, &config);
//! for (t_wait, err) in results.failures() {
//!     eprintln!("skipping t_wait={t_wait}: {err}");
//! }
//! let series = results.metric_series(AnalysisMetric::HotShoulderStrength);
//! ```

mod config;
mod evaluator;
mod metrics;

pub use config::*;
pub use evaluator::*;
pub use metrics::*;
