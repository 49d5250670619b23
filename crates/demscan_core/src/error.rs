use std::fmt;

/// Which side of the DEM peak a bound search was working on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Cool,
    Hot,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Cool => write!(f, "cool"),
            Side::Hot => write!(f, "hot"),
        }
    }
}

/// Errors from constructing a curve out of mismatched or unordered arrays
#[derive(Debug, Clone)]
pub enum CurveError {
    LengthMismatch { temp: usize, dem: usize },
    NonMonotonicTemp { index: usize },
}

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveError::LengthMismatch { temp, dem } => {
                write!(f, "temperature has {temp} samples but DEM has {dem}")
            }
            CurveError::NonMonotonicTemp { index } => {
                write!(f, "temperature axis not strictly increasing at sample {index}")
            }
        }
    }
}

impl std::error::Error for CurveError {}

/// Errors from the threshold bound search running out of curve
#[derive(Debug, Clone)]
pub enum OutOfRangeError {
    /// The curve cannot hold a peak plus one sample per shoulder
    CurveTooShort { len: usize },
    /// The peak sits at an edge of the curve, leaving no samples on one side
    MissingShoulder { side: Side, peak: usize },
    /// Every sample between the candidate bound and the peak is infinite
    NonFiniteShoulder { side: Side, from: usize },
}

impl fmt::Display for OutOfRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutOfRangeError::CurveTooShort { len } => {
                write!(f, "curve has {len} samples, need at least 3")
            }
            OutOfRangeError::MissingShoulder { side, peak } => {
                write!(f, "no {side} shoulder: DEM peak sits at sample {peak}")
            }
            OutOfRangeError::NonFiniteShoulder { side, from } => {
                write!(
                    f,
                    "{side} shoulder has no finite DEM value between sample {from} and the peak"
                )
            }
        }
    }
}

impl std::error::Error for OutOfRangeError {}

/// Errors from curves on which a slope or ratio is undefined
#[derive(Debug, Clone)]
pub enum DegenerateCurveError {
    /// A shoulder bound landed on the peak itself
    PeakAtBound { side: Side, index: usize },
    /// The shoulder integral vanishes, so the strength ratio is undefined
    ZeroTotalIntegral,
}

impl fmt::Display for DegenerateCurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegenerateCurveError::PeakAtBound { side, index } => {
                write!(f, "{side} bound at sample {index} coincides with the DEM peak")
            }
            DegenerateCurveError::ZeroTotalIntegral => {
                write!(f, "total shoulder integral is zero")
            }
        }
    }
}

impl std::error::Error for DegenerateCurveError {}

/// Errors from invalid amplitude-distribution parameters
#[derive(Debug, Clone)]
pub enum DistributionError {
    InvalidBounds { amp0: f64, amp1: f64 },
    /// `alpha == -1` makes the inverse-CDF exponent blow up
    SingularIndex { alpha: f64 },
}

impl fmt::Display for DistributionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistributionError::InvalidBounds { amp0, amp1 } => {
                write!(f, "invalid amplitude bounds (amp0={amp0}, amp1={amp1})")
            }
            DistributionError::SingularIndex { alpha } => {
                write!(f, "power-law index {alpha} is singular")
            }
        }
    }
}

impl std::error::Error for DistributionError {}

/// Any failure of a shoulder analysis operation
#[derive(Debug, Clone)]
pub enum ShoulderError {
    OutOfRange(OutOfRangeError),
    Degenerate(DegenerateCurveError),
}

impl fmt::Display for ShoulderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShoulderError::OutOfRange(e) => write!(f, "{e}"),
            ShoulderError::Degenerate(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ShoulderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShoulderError::OutOfRange(e) => Some(e),
            ShoulderError::Degenerate(e) => Some(e),
        }
    }
}

impl From<OutOfRangeError> for ShoulderError {
    fn from(e: OutOfRangeError) -> Self {
        ShoulderError::OutOfRange(e)
    }
}

impl From<DegenerateCurveError> for ShoulderError {
    fn from(e: DegenerateCurveError) -> Self {
        ShoulderError::Degenerate(e)
    }
}
