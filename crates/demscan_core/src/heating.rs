//! Heating-run parameterization for wait-time sweeps.
//!
//! EBTEL-2fluid runs are driven by trains of impulsive heating events; a
//! sweep varies the wait time between successive events while preserving the
//! time-averaged heating rate, so that runs across the sweep stay
//! energetically comparable. This module computes the per-run quantities the
//! simulation inputs are built from: event schedules, the uniform event
//! amplitude, and power-law amplitude distributions with bounds adjusted per
//! wait time.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand_distr::Distribution;
use serde::{Deserialize, Serialize};

use crate::error::DistributionError;

/// Which plasma species receives the impulsive heating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Electron,
    Ion,
}

impl Species {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Electron => "electron",
            Species::Ion => "ion",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Species {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "electron" => Ok(Species::Electron),
            "ion" => Ok(Species::Ion),
            other => Err(format!("unknown species '{other}', expected electron or ion")),
        }
    }
}

/// Temporal profile of a single heating pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PulseShape {
    Triangle,
    Square,
    Gaussian,
}

impl FromStr for PulseShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "triangle" => Ok(PulseShape::Triangle),
            "square" => Ok(PulseShape::Square),
            "gaussian" => Ok(PulseShape::Gaussian),
            other => Err(format!(
                "unknown pulse shape '{other}', expected triangle, square, or gaussian"
            )),
        }
    }
}

/// How event amplitudes are distributed within a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AmpDistribution {
    /// Every event carries the single amplitude preserving the mean rate.
    Uniform,
    /// Power-law distributed event energies with index `alpha` (negative)
    /// and dynamic range `delta_q` = upper bound / lower bound.
    PowerLaw { alpha: f64, delta_q: f64 },
}

/// Parameters of a heating run family.
///
/// One `HeatingConfig` plus a wait time fully determines a run's event
/// schedule and amplitudes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatingConfig {
    /// Total simulated time (s).
    pub total_time: f64,
    /// Half-width of a heating pulse (s).
    pub t_pulse_half: f64,
    /// Loop half-length (Mm).
    pub loop_length: f64,
    /// Cross-sectional loop area (cm^2).
    pub cross_sectional_area: f64,
    /// Time-averaged volumetric heating rate to preserve (erg cm^-3 s^-1).
    pub mean_heating_rate: f64,
    pub species: Species,
    pub pulse_shape: PulseShape,
    pub amplitude: AmpDistribution,
}

impl HeatingConfig {
    /// Number of heating events fitting in the run at a given wait time.
    #[must_use]
    pub fn num_events(&self, t_wait: f64) -> usize {
        (self.total_time / (2.0 * self.t_pulse_half + t_wait)).ceil() as usize
    }

    /// Start/end times of each event's pulse.
    #[must_use]
    pub fn event_times(&self, t_wait: f64) -> Vec<(f64, f64)> {
        let period = 2.0 * self.t_pulse_half + t_wait;
        (0..self.num_events(t_wait))
            .map(|i| {
                let start = i as f64 * period;
                (start, start + 2.0 * self.t_pulse_half)
            })
            .collect()
    }

    /// Uniform event amplitude preserving the time-averaged heating rate.
    #[must_use]
    pub fn uniform_amplitude(&self, t_wait: f64) -> f64 {
        2.0 * self.mean_heating_rate * self.total_time
            / (self.num_events(t_wait) as f64 * 2.0 * self.t_pulse_half)
    }

    /// Power-law energy bounds `(amp0, amp1)` preserving the time-averaged
    /// heating rate at the given wait time. `None` for uniform heating.
    ///
    /// The prefactor depends on where `alpha` sits relative to the
    /// mean-integral singularities: the `alpha == -2` case takes its own
    /// closed form.
    #[must_use]
    pub fn amplitude_bounds(&self, t_wait: f64) -> Option<(f64, f64)> {
        let AmpDistribution::PowerLaw { alpha, delta_q } = self.amplitude else {
            return None;
        };
        let coeff = if alpha < -2.0 {
            (alpha + 2.0) / (alpha + 1.0) * (delta_q.powf(alpha + 1.0) - 1.0)
                / (delta_q.powf(alpha + 2.0) - 1.0)
        } else if alpha == -2.0 {
            let numer = delta_q.powf(alpha + 1.0) * (1.0 + delta_q.ln() * (alpha + 2.0)) - 1.0;
            let denom = delta_q.powf(alpha + 2.0) * (1.0 + delta_q.ln() * (alpha + 1.0)) - 1.0;
            numer / denom
        } else {
            3.0 / (delta_q - 1.0)
        };
        let amp0 = coeff
            * self.mean_heating_rate
            * 1.0e8
            * self.loop_length
            * self.cross_sectional_area
            * (t_wait + 2.0 * self.t_pulse_half);
        Some((amp0, delta_q * amp0))
    }

    /// Sampler over the power-law energy distribution at a wait time, or
    /// `None` for uniform heating.
    pub fn amplitude_sampler(&self, t_wait: f64) -> Result<Option<PowerLaw>, DistributionError> {
        match (self.amplitude, self.amplitude_bounds(t_wait)) {
            (AmpDistribution::PowerLaw { alpha, .. }, Some((amp0, amp1))) => {
                Ok(Some(PowerLaw::new(amp0, amp1, alpha)?))
            }
            _ => Ok(None),
        }
    }

    /// Per-event peak heating rates for one run.
    ///
    /// Power-law heating draws event energies and converts them to rates via
    /// the pulse-shape factor; uniform heating repeats the closed-form
    /// amplitude.
    pub fn sample_amplitudes<R: Rng + ?Sized>(
        &self,
        t_wait: f64,
        rng: &mut R,
    ) -> Result<Vec<f64>, DistributionError> {
        let n = self.num_events(t_wait);
        match self.amplitude_sampler(t_wait)? {
            Some(dist) => {
                let coeff = self.energy_to_rate();
                Ok((0..n).map(|_| coeff * dist.sample(rng)).collect())
            }
            None => Ok(vec![self.uniform_amplitude(t_wait); n]),
        }
    }

    /// Runs needed to accumulate at least `target_events` heating events at
    /// the given wait time. Longer waits fit fewer events per run, so
    /// Monte-Carlo sweeps repeat runs to keep event statistics comparable.
    #[must_use]
    pub fn runs_for_event_count(&self, t_wait: f64, target_events: usize) -> usize {
        (target_events as f64 / self.num_events(t_wait) as f64).ceil() as usize
    }

    /// Conversion factor from event energy (erg) to peak heating rate
    /// (erg cm^-3 s^-1) for this pulse shape.
    fn energy_to_rate(&self) -> f64 {
        let volume = 1.0e8 * self.loop_length * self.cross_sectional_area;
        match self.pulse_shape {
            PulseShape::Triangle => 2.0 / (2.0 * self.t_pulse_half * volume),
            PulseShape::Square => 1.0 / (2.0 * self.t_pulse_half * volume),
            PulseShape::Gaussian => 1.0 / (self.t_pulse_half * volume * (2.0 * PI).sqrt()),
        }
    }
}

/// Truncated power law over `[amp0, amp1]` with index `alpha`, sampled by
/// inverse transform of a uniform draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLaw {
    amp0: f64,
    amp1: f64,
    alpha: f64,
}

impl PowerLaw {
    pub fn new(amp0: f64, amp1: f64, alpha: f64) -> Result<Self, DistributionError> {
        if !(amp0 > 0.0 && amp1 > amp0) {
            return Err(DistributionError::InvalidBounds { amp0, amp1 });
        }
        if alpha == -1.0 {
            return Err(DistributionError::SingularIndex { alpha });
        }
        Ok(Self { amp0, amp1, alpha })
    }

    #[must_use]
    pub fn bounds(&self) -> (f64, f64) {
        (self.amp0, self.amp1)
    }
}

impl Distribution<f64> for PowerLaw {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let x: f64 = rng.random();
        let a1 = self.alpha + 1.0;
        ((self.amp1.powf(a1) - self.amp0.powf(a1)) * x + self.amp0.powf(a1)).powf(1.0 / a1)
    }
}
