//! Configuration types for wait-time sweeps.

use serde::{Deserialize, Serialize};

use crate::heating::HeatingConfig;

use super::AnalysisMetric;

/// Inclusive range of heating wait times, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaitTimeRange {
    pub start: f64,
    pub stop: f64,
    pub step: f64,
}

impl WaitTimeRange {
    #[must_use]
    pub fn new(start: f64, stop: f64, step: f64) -> Self {
        Self { start, stop, step }
    }

    /// The sweep values, stop-inclusive.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        if self.step <= 0.0 || self.stop < self.start {
            return vec![self.start];
        }
        let count = ((self.stop - self.start) / self.step).floor() as usize + 1;
        (0..count)
            .map(|i| self.start + i as f64 * self.step)
            .collect()
    }
}

/// Configuration for a shoulder sweep across wait times.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    pub wait_times: WaitTimeRange,
    /// Orders of magnitude below the DEM peak delimiting a shoulder.
    pub delta: f64,
    /// Metrics reported at each sweep point.
    pub metrics: Vec<AnalysisMetric>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            wait_times: WaitTimeRange::new(250.0, 5000.0, 250.0),
            delta: 2.0,
            metrics: vec![
                AnalysisMetric::HotShoulderStrength,
                AnalysisMetric::SlopeHot,
                AnalysisMetric::SlopeCool,
                AnalysisMetric::SlopeRatio,
                AnalysisMetric::PeakTemp,
            ],
        }
    }
}

/// One simulation run within a sweep: a wait time paired with a run index.
///
/// Several runs per wait time keep the total event count comparable when
/// events per run shrink with growing wait time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunId {
    pub t_wait: f64,
    pub run: usize,
}

/// In-memory enumeration of every run in a sweep, in sweep order.
///
/// The original workflow fed this listing to a cluster job array; here it
/// stays a plain value the caller can iterate or render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepPlan {
    entries: Vec<RunId>,
}

impl SweepPlan {
    /// Enumerate runs for each wait time. With `target_events` set, each
    /// wait time gets enough runs to accumulate that many heating events;
    /// otherwise one run per wait time.
    #[must_use]
    pub fn build(
        heating: &HeatingConfig,
        wait_times: &WaitTimeRange,
        target_events: Option<usize>,
    ) -> Self {
        let mut entries = Vec::new();
        for t_wait in wait_times.values() {
            let runs = match target_events {
                Some(target) => heating.runs_for_event_count(t_wait, target),
                None => 1,
            };
            for run in 0..runs {
                entries.push(RunId { t_wait, run });
            }
        }
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[RunId] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
