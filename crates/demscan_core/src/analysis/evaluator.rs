//! Sweep evaluator - runs the shoulder analyzer across wait-time points.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::ShoulderError;
use crate::model::Curve;

use super::{AnalysisMetric, DemPointData, SweepConfig};

/// One evaluated sweep point.
///
/// Failures stay attached to their wait time so the caller can skip, log,
/// or abort per curve; a failed point never substitutes a fallback value.
#[derive(Debug, Clone)]
pub struct SweepPoint {
    pub t_wait: f64,
    pub data: Result<DemPointData, ShoulderError>,
}

/// Results of a sweep evaluation, in wait-time order.
#[derive(Debug, Clone)]
pub struct SweepResults {
    /// Shoulder threshold offset the sweep ran with.
    pub delta: f64,
    pub points: Vec<SweepPoint>,
}

impl SweepResults {
    /// `(wait time, value)` series for one metric, skipping failed points.
    #[must_use]
    pub fn metric_series(&self, metric: AnalysisMetric) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .filter_map(|p| {
                p.data
                    .as_ref()
                    .ok()
                    .map(|d| (p.t_wait, d.compute_metric(metric)))
            })
            .collect()
    }

    /// Wait times whose curves failed analysis, with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (f64, &ShoulderError)> {
        self.points
            .iter()
            .filter_map(|p| p.data.as_ref().err().map(|e| (p.t_wait, e)))
    }

    /// Number of points that analyzed successfully.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.points.iter().filter(|p| p.data.is_ok()).count()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.points.iter().all(|p| p.data.is_ok())
    }
}

/// Evaluate the shoulder analyzer over `(wait time, curve)` pairs.
///
/// Points are independent pure computations; with the `parallel` feature
/// they fan out across the rayon pool, and the result order matches the
/// input order either way.
pub fn sweep_evaluate(curves: &[(f64, Curve)], config: &SweepConfig) -> SweepResults {
    let delta = config.delta;

    #[cfg(feature = "parallel")]
    let points: Vec<SweepPoint> = curves
        .par_iter()
        .map(|(t_wait, curve)| SweepPoint {
            t_wait: *t_wait,
            data: DemPointData::from_curve(curve, delta),
        })
        .collect();

    #[cfg(not(feature = "parallel"))]
    let points: Vec<SweepPoint> = curves
        .iter()
        .map(|(t_wait, curve)| SweepPoint {
            t_wait: *t_wait,
            data: DemPointData::from_curve(curve, delta),
        })
        .collect();

    SweepResults { delta, points }
}
