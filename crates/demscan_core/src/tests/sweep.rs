//! Tests for wait-time sweep evaluation and planning
//!
//! These tests verify that:
//! - Wait-time ranges enumerate stop-inclusive values
//! - Sweep evaluation preserves order and isolates per-point failures
//! - Metric series derive from stored point data
//! - Sweep plans enumerate runs per wait time

use crate::analysis::{
    AnalysisMetric, SweepConfig, SweepPlan, WaitTimeRange, sweep_evaluate,
};
use crate::heating::{AmpDistribution, HeatingConfig, PulseShape, Species};
use crate::model::Curve;

use super::curve;

/// A single-peaked curve whose peak temperature rises with the wait time.
fn synthetic_curve(t_wait: f64) -> Curve {
    let peak_temp = 5.8 + t_wait / 10_000.0;
    let log_temp: Vec<f64> = (0..21).map(|i| 4.5 + 0.15 * i as f64).collect();
    let log_dem: Vec<f64> = log_temp
        .iter()
        .map(|&t| 27.0 - 4.0 * (t - peak_temp).powi(2))
        .collect();
    Curve::new(log_temp, log_dem).unwrap()
}

#[test]
fn test_wait_time_range_values() {
    let range = WaitTimeRange::new(250.0, 5000.0, 250.0);
    let values = range.values();
    assert_eq!(values.len(), 20);
    assert!((values[0] - 250.0).abs() < 1e-9);
    assert!((values[19] - 5000.0).abs() < 1e-9);

    // A degenerate range still yields its start point.
    assert_eq!(WaitTimeRange::new(500.0, 500.0, 250.0).values(), vec![500.0]);
}

#[test]
fn test_sweep_evaluation_preserves_order() {
    let config = SweepConfig::default();
    let curves: Vec<(f64, Curve)> = config
        .wait_times
        .values()
        .into_iter()
        .map(|t| (t, synthetic_curve(t)))
        .collect();

    let results = sweep_evaluate(&curves, &config);
    assert!(results.is_complete());
    assert_eq!(results.completed_count(), 20);
    for (point, (t_wait, _)) in results.points.iter().zip(&curves) {
        assert_eq!(point.t_wait, *t_wait);
    }

    // The synthetic family shifts its peak hotward with the wait time.
    let peaks = results.metric_series(AnalysisMetric::PeakTemp);
    assert_eq!(peaks.len(), 20);
    for pair in peaks.windows(2) {
        assert!(pair[1].1 >= pair[0].1);
    }
}

#[test]
fn test_sweep_isolates_per_point_failures() {
    let config = SweepConfig::default();
    // A monotonically rising curve has no hot shoulder and must fail.
    let bad = curve(&[5.0, 5.5, 6.0, 6.5], &[21.0, 23.0, 25.0, 27.0]);
    let curves = vec![
        (250.0, synthetic_curve(250.0)),
        (500.0, bad),
        (750.0, synthetic_curve(750.0)),
    ];

    let results = sweep_evaluate(&curves, &config);
    assert!(!results.is_complete());
    assert_eq!(results.completed_count(), 2);

    let failed: Vec<f64> = results.failures().map(|(t, _)| t).collect();
    assert_eq!(failed, vec![500.0]);

    // Good points are unaffected by the failed neighbor.
    let series = results.metric_series(AnalysisMetric::HotShoulderStrength);
    assert_eq!(series.len(), 2);
    for (_, strength) in series {
        assert!(strength > 0.0 && strength < 1.0);
    }
}

#[test]
fn test_point_data_metric_mapping() {
    let config = SweepConfig::default();
    let c = synthetic_curve(1000.0);
    let results = sweep_evaluate(&[(1000.0, c)], &config);
    let data = results.points[0].data.as_ref().unwrap();

    assert_eq!(
        data.compute_metric(AnalysisMetric::HotShoulderStrength),
        data.hot_shoulder_strength
    );
    assert_eq!(data.compute_metric(AnalysisMetric::SlopeHot), data.slopes.hot);
    assert_eq!(
        data.compute_metric(AnalysisMetric::SlopeCool),
        data.slopes.cool
    );
    assert_eq!(
        data.compute_metric(AnalysisMetric::SlopeRatio),
        data.slopes.asymmetry_ratio()
    );
    assert_eq!(data.compute_metric(AnalysisMetric::PeakTemp), data.peak_temp);
}

#[test]
fn test_sweep_plan_enumerates_runs() {
    let heating = HeatingConfig {
        total_time: 80_000.0,
        t_pulse_half: 250.0,
        loop_length: 40.0,
        cross_sectional_area: 1.0,
        mean_heating_rate: 8.3e-3,
        species: Species::Electron,
        pulse_shape: PulseShape::Triangle,
        amplitude: AmpDistribution::Uniform,
    };
    let range = WaitTimeRange::new(250.0, 750.0, 250.0);

    // Without a target event count: one run per wait time.
    let plan = SweepPlan::build(&heating, &range, None);
    assert_eq!(plan.len(), 3);
    assert!(plan.entries().iter().all(|e| e.run == 0));

    // With a target: enough runs per wait time to reach the event count.
    let plan = SweepPlan::build(&heating, &range, Some(1000));
    let expected: usize = range
        .values()
        .into_iter()
        .map(|t| heating.runs_for_event_count(t, 1000))
        .sum();
    assert_eq!(plan.len(), expected);

    // Entries stay grouped by wait time with run indices counting up.
    let first_group: Vec<_> = plan
        .entries()
        .iter()
        .take_while(|e| e.t_wait == 250.0)
        .collect();
    assert_eq!(first_group.len(), heating.runs_for_event_count(250.0, 1000));
    for (i, entry) in first_group.iter().enumerate() {
        assert_eq!(entry.run, i);
    }
}
