//! Shoulder metrics computed at each sweep point.

use serde::{Deserialize, Serialize};

use crate::error::ShoulderError;
use crate::model::{Curve, ShoulderSlopes, TempBounds};
use crate::shoulder::{find_temp_bounds, hot_shoulder_strength, shoulder_slopes};

/// Metrics that can be reported for a sweep point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisMetric {
    /// Fraction of shoulder emission hotward of the peak
    HotShoulderStrength,
    /// Linear-fit slope of the hot shoulder
    SlopeHot,
    /// Linear-fit slope of the cool shoulder
    SlopeCool,
    /// |cool| / |hot| slope magnitude ratio
    SlopeRatio,
    /// Log temperature of the DEM peak
    PeakTemp,
}

impl AnalysisMetric {
    /// Display label for the metric
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::HotShoulderStrength => "Hot Shoulder Strength",
            Self::SlopeHot => "Hot Slope",
            Self::SlopeCool => "Cool Slope",
            Self::SlopeRatio => "Cool/Hot Slope Ratio",
            Self::PeakTemp => "Peak log T",
        }
    }

    /// Short label suitable for table headers
    #[must_use]
    pub fn short_label(&self) -> &'static str {
        match self {
            Self::HotShoulderStrength => "hs_int",
            Self::SlopeHot => "a_hot",
            Self::SlopeCool => "a_cool",
            Self::SlopeRatio => "a_cool/a_hot",
            Self::PeakTemp => "logT_max",
        }
    }
}

/// Raw analysis results for a single curve.
///
/// Stores enough to derive any `AnalysisMetric` without re-running the
/// bound search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DemPointData {
    pub bounds: TempBounds,
    /// Log temperature at the DEM peak.
    pub peak_temp: f64,
    pub slopes: ShoulderSlopes,
    pub hot_shoulder_strength: f64,
}

impl DemPointData {
    /// Run the full shoulder analysis on one curve.
    pub fn from_curve(curve: &Curve, delta: f64) -> Result<Self, ShoulderError> {
        let bounds = find_temp_bounds(curve, delta)?;
        let slopes = shoulder_slopes(curve, delta)?;
        let strength = hot_shoulder_strength(curve, delta)?;
        Ok(Self {
            bounds,
            peak_temp: curve.log_temp()[bounds.peak],
            slopes,
            hot_shoulder_strength: strength,
        })
    }

    /// Extract a specific metric from the stored results.
    #[must_use]
    pub fn compute_metric(&self, metric: AnalysisMetric) -> f64 {
        match metric {
            AnalysisMetric::HotShoulderStrength => self.hot_shoulder_strength,
            AnalysisMetric::SlopeHot => self.slopes.hot,
            AnalysisMetric::SlopeCool => self.slopes.cool,
            AnalysisMetric::SlopeRatio => self.slopes.asymmetry_ratio(),
            AnalysisMetric::PeakTemp => self.peak_temp,
        }
    }
}
