//! Tests for heating-run parameterization
//!
//! These tests verify that:
//! - Event schedules tile the run with the pulse-plus-wait period
//! - The uniform amplitude preserves the time-averaged heating rate
//! - Power-law bounds scale with the wait time and keep the dynamic range
//! - Sampled amplitudes stay within bounds and are seed-deterministic

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::Distribution;

use crate::error::DistributionError;
use crate::heating::{AmpDistribution, HeatingConfig, PowerLaw, PulseShape, Species};

fn test_config(amplitude: AmpDistribution) -> HeatingConfig {
    HeatingConfig {
        total_time: 80_000.0,
        t_pulse_half: 250.0,
        loop_length: 40.0,
        cross_sectional_area: 1.0,
        mean_heating_rate: 8.3e-3,
        species: Species::Electron,
        pulse_shape: PulseShape::Triangle,
        amplitude,
    }
}

#[test]
fn test_event_schedule_tiles_the_run() {
    let config = test_config(AmpDistribution::Uniform);
    let t_wait = 250.0;

    // Period 750 s over 80,000 s: ceil gives 107 events.
    assert_eq!(config.num_events(t_wait), 107);

    let times = config.event_times(t_wait);
    assert_eq!(times.len(), 107);
    for (i, &(start, end)) in times.iter().enumerate() {
        assert!((start - i as f64 * 750.0).abs() < 1e-9);
        assert!((end - start - 500.0).abs() < 1e-9);
    }
}

#[test]
fn test_uniform_amplitude_preserves_mean_rate() {
    let config = test_config(AmpDistribution::Uniform);
    let t_wait = 1000.0;

    let n = config.num_events(t_wait) as f64;
    let amp = config.uniform_amplitude(t_wait);

    // Triangular pulses deposit amp * t_pulse per event; the total must
    // equal the mean rate integrated over the run.
    let deposited = n * amp * (2.0 * config.t_pulse_half) / 2.0;
    let target = config.mean_heating_rate * config.total_time;
    assert!((deposited - target).abs() / target < 1e-12);
}

#[test]
fn test_power_law_bounds_keep_dynamic_range() {
    let config = test_config(AmpDistribution::PowerLaw {
        alpha: -2.5,
        delta_q: 100.0,
    });

    let (amp0, amp1) = config.amplitude_bounds(250.0).unwrap();
    assert!(amp0 > 0.0);
    assert!((amp1 / amp0 - 100.0).abs() < 1e-9);

    // Longer waits mean fewer, bigger events: bounds scale with the full
    // event period.
    let (amp0_long, _) = config.amplitude_bounds(1250.0).unwrap();
    assert!((amp0_long / amp0 - 1750.0 / 750.0).abs() < 1e-9);
}

#[test]
fn test_power_law_bounds_special_index() {
    let config = test_config(AmpDistribution::PowerLaw {
        alpha: -2.0,
        delta_q: 100.0,
    });

    let (amp0, amp1) = config.amplitude_bounds(500.0).unwrap();
    assert!(amp0.is_finite() && amp0 > 0.0);
    assert!(amp1 > amp0);
}

#[test]
fn test_uniform_config_has_no_bounds() {
    let config = test_config(AmpDistribution::Uniform);
    assert!(config.amplitude_bounds(250.0).is_none());
    assert!(config.amplitude_sampler(250.0).unwrap().is_none());
}

#[test]
fn test_power_law_samples_stay_in_bounds() {
    let dist = PowerLaw::new(10.0, 1000.0, -2.5).unwrap();
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..1000 {
        let v = dist.sample(&mut rng);
        assert!(v >= 10.0 - 1e-9 && v <= 1000.0 + 1e-9);
    }
}

#[test]
fn test_power_law_sampling_is_seeded() {
    let dist = PowerLaw::new(10.0, 1000.0, -2.5).unwrap();

    let a: Vec<f64> = {
        let mut rng = StdRng::seed_from_u64(7);
        (0..16).map(|_| dist.sample(&mut rng)).collect()
    };
    let b: Vec<f64> = {
        let mut rng = StdRng::seed_from_u64(7);
        (0..16).map(|_| dist.sample(&mut rng)).collect()
    };
    assert_eq!(a, b);
}

#[test]
fn test_power_law_rejects_bad_parameters() {
    assert!(matches!(
        PowerLaw::new(-1.0, 10.0, -2.5),
        Err(DistributionError::InvalidBounds { .. })
    ));
    assert!(matches!(
        PowerLaw::new(10.0, 5.0, -2.5),
        Err(DistributionError::InvalidBounds { .. })
    ));
    assert!(matches!(
        PowerLaw::new(10.0, 100.0, -1.0),
        Err(DistributionError::SingularIndex { .. })
    ));
}

#[test]
fn test_sampled_run_amplitudes() {
    let config = test_config(AmpDistribution::PowerLaw {
        alpha: -2.5,
        delta_q: 100.0,
    });
    let t_wait = 500.0;

    let mut rng = StdRng::seed_from_u64(11);
    let amps = config.sample_amplitudes(t_wait, &mut rng).unwrap();
    assert_eq!(amps.len(), config.num_events(t_wait));
    for &a in &amps {
        assert!(a > 0.0);
    }

    // Uniform heating repeats the closed-form amplitude instead.
    let uniform = test_config(AmpDistribution::Uniform);
    let amps = uniform.sample_amplitudes(t_wait, &mut rng).unwrap();
    let expected = uniform.uniform_amplitude(t_wait);
    assert!(amps.iter().all(|&a| (a - expected).abs() < 1e-12));
}

#[test]
fn test_runs_for_event_count() {
    let config = test_config(AmpDistribution::Uniform);
    // 107 events per run at t_wait = 250; 10,000 events need 94 runs.
    assert_eq!(config.runs_for_event_count(250.0, 10_000), 94);
    assert_eq!(config.runs_for_event_count(250.0, 107), 1);
    assert_eq!(config.runs_for_event_count(250.0, 108), 2);
}
