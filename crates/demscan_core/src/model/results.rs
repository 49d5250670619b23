use serde::{Deserialize, Serialize};

/// Sample indices delimiting the shoulders of a DEM curve.
///
/// `cool < peak < hot` always holds for a bound set produced by the
/// analyzer; `peak` is the position of the maximum DEM value and the outer
/// indices mark where the curve has dropped a fixed number of orders of
/// magnitude below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TempBounds {
    pub cool: usize,
    pub peak: usize,
    pub hot: usize,
}

/// Linear-fit slopes of the two shoulders, in Δlog DEM / Δlog T.
///
/// `hot` is negative and `cool` positive for a single-peaked curve; their
/// magnitudes compare how steeply the emission falls off on each side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShoulderSlopes {
    pub hot: f64,
    pub cool: f64,
}

impl ShoulderSlopes {
    /// |cool| / |hot| magnitude ratio, the third asymmetry diagnostic
    /// plotted against wait time.
    #[must_use]
    pub fn asymmetry_ratio(&self) -> f64 {
        (self.cool / self.hot).abs()
    }
}
