//! Shoulder bound search and asymmetry metrics.
//!
//! The analyzer locates the DEM peak, finds a temperature bound on each side
//! at a fixed log-magnitude offset (`delta`) below the peak, and quantifies
//! the hot/cool asymmetry two ways: linear-fit slopes between the peak and
//! each bound, and the fraction of the trapezoid-integrated shoulder
//! emission lying hotward of the peak.

use crate::error::{DegenerateCurveError, OutOfRangeError, ShoulderError, Side};
use crate::model::{Curve, ShoulderSlopes, TempBounds};

/// A bound search needs the peak plus one sample on each side.
const MIN_CURVE_LEN: usize = 3;

/// Locate the shoulder bounds of a DEM curve.
///
/// The peak is the first sample holding the maximum DEM value and the
/// threshold sits `delta` orders of magnitude below it. The hot bound is one
/// sample past the outermost value still above the threshold, clamped to the
/// end of the curve; the cool bound is one sample before the innermost value
/// above the threshold, clamping to the first sample when the whole cool
/// side already sits below the threshold. A bound landing on an infinite DEM
/// value walks inward until it reaches a finite sample; simulation output
/// can carry +/-inf log values near the domain edges.
pub fn find_temp_bounds(curve: &Curve, delta: f64) -> Result<TempBounds, OutOfRangeError> {
    if curve.len() < MIN_CURVE_LEN {
        return Err(OutOfRangeError::CurveTooShort { len: curve.len() });
    }

    let dem = curve.log_dem();
    let peak = argmax(dem);
    if peak == 0 {
        return Err(OutOfRangeError::MissingShoulder {
            side: Side::Cool,
            peak,
        });
    }
    if peak == dem.len() - 1 {
        return Err(OutOfRangeError::MissingShoulder {
            side: Side::Hot,
            peak,
        });
    }

    let threshold = dem[peak] - delta;

    let outermost_hot = (peak..dem.len())
        .rev()
        .find(|&i| dem[i] > threshold)
        .unwrap_or(peak);
    let hot = (outermost_hot + 1).min(dem.len() - 1);
    let hot = walk_to_finite(dem, hot, peak, Side::Hot)?;

    let cool = match (0..peak).find(|&i| dem[i] > threshold) {
        Some(innermost) => innermost.saturating_sub(1),
        None => 0,
    };
    let cool = walk_to_finite(dem, cool, peak, Side::Cool)?;

    Ok(TempBounds { cool, peak, hot })
}

/// Linear-fit slopes between the peak and each shoulder bound.
pub fn shoulder_slopes(curve: &Curve, delta: f64) -> Result<ShoulderSlopes, ShoulderError> {
    let bounds = find_temp_bounds(curve, delta)?;
    let temp = curve.log_temp();
    let dem = curve.log_dem();

    if bounds.hot == bounds.peak {
        return Err(DegenerateCurveError::PeakAtBound {
            side: Side::Hot,
            index: bounds.hot,
        }
        .into());
    }
    if bounds.cool == bounds.peak {
        return Err(DegenerateCurveError::PeakAtBound {
            side: Side::Cool,
            index: bounds.cool,
        }
        .into());
    }

    let hot = (dem[bounds.hot] - dem[bounds.peak]) / (temp[bounds.hot] - temp[bounds.peak]);
    let cool = (dem[bounds.peak] - dem[bounds.cool]) / (temp[bounds.peak] - temp[bounds.cool]);
    Ok(ShoulderSlopes { hot, cool })
}

/// Fraction of the shoulder-integrated emission lying hotward of the peak.
///
/// Integrates the DEM curve over the temperature axis with the trapezoidal
/// rule, over `[peak, hot]` and `[cool, hot]`, and returns their ratio — a
/// value in [0, 1] for a single-peaked, positive curve.
pub fn hot_shoulder_strength(curve: &Curve, delta: f64) -> Result<f64, ShoulderError> {
    let bounds = find_temp_bounds(curve, delta)?;
    let temp = curve.log_temp();
    let dem = curve.log_dem();

    let hot = trapezoid(
        &temp[bounds.peak..=bounds.hot],
        &dem[bounds.peak..=bounds.hot],
    );
    let total = trapezoid(
        &temp[bounds.cool..=bounds.hot],
        &dem[bounds.cool..=bounds.hot],
    );
    if total == 0.0 {
        return Err(DegenerateCurveError::ZeroTotalIntegral.into());
    }
    Ok(hot / total)
}

/// First index of the maximum value; ties resolve to the earliest sample.
fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate() {
        if v > values[best] {
            best = i;
        }
    }
    best
}

/// Walk a candidate bound inward past infinite DEM samples.
///
/// Reaching the peak means the whole shoulder between the candidate and the
/// peak is non-finite; that fails rather than accepting the peak as its own
/// bound.
fn walk_to_finite(
    dem: &[f64],
    start: usize,
    peak: usize,
    side: Side,
) -> Result<usize, OutOfRangeError> {
    let mut index = start;
    while dem[index].is_infinite() {
        index = match side {
            Side::Cool => index + 1,
            Side::Hot => index - 1,
        };
        if index == peak {
            return Err(OutOfRangeError::NonFiniteShoulder { side, from: start });
        }
    }
    Ok(index)
}

/// Trapezoidal rule with segment widths taken from the sample spacing; the
/// temperature grid is not assumed uniform.
fn trapezoid(x: &[f64], y: &[f64]) -> f64 {
    x.windows(2)
        .zip(y.windows(2))
        .map(|(xs, ys)| (xs[1] - xs[0]) * (ys[0] + ys[1]) / 2.0)
        .sum()
}
