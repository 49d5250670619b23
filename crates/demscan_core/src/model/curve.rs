use crate::error::CurveError;

/// A DEM curve: paired log-temperature / log-DEM samples, strictly ordered
/// by increasing temperature.
///
/// Both axes are base-10 logarithms of the physical quantities (temperature
/// in K, DEM in cm^-5 K^-1). The arrays are validated on construction and
/// immutable afterwards; analysis operations index both by the same sample
/// position.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    log_temp: Vec<f64>,
    log_dem: Vec<f64>,
}

impl Curve {
    /// Build a curve from paired arrays.
    ///
    /// Fails if the arrays differ in length or the temperature axis is not
    /// strictly increasing. Length itself is unconstrained here; operations
    /// that need a minimum sample count enforce it at call time.
    pub fn new(log_temp: Vec<f64>, log_dem: Vec<f64>) -> Result<Self, CurveError> {
        if log_temp.len() != log_dem.len() {
            return Err(CurveError::LengthMismatch {
                temp: log_temp.len(),
                dem: log_dem.len(),
            });
        }
        if let Some(i) = log_temp.windows(2).position(|w| w[1] <= w[0]) {
            return Err(CurveError::NonMonotonicTemp { index: i + 1 });
        }
        Ok(Self { log_temp, log_dem })
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.log_dem.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.log_dem.is_empty()
    }

    /// The log-temperature axis.
    #[must_use]
    pub fn log_temp(&self) -> &[f64] {
        &self.log_temp
    }

    /// The log-DEM values, indexed identically to the temperature axis.
    #[must_use]
    pub fn log_dem(&self) -> &[f64] {
        &self.log_dem
    }
}
