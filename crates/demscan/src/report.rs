//! Rendering of sweep results and run plans.

use demscan_core::analysis::{AnalysisMetric, DemPointData, SweepPlan, SweepResults, WaitTimeRange};
use demscan_core::heating::HeatingConfig;
use serde::Serialize;

/// Render sweep results as an aligned text table, one row per wait time.
///
/// Failed points keep their row with dashes so gaps in the sweep stay
/// visible; the errors themselves go to the log.
#[must_use]
pub fn render_table(results: &SweepResults, metrics: &[AnalysisMetric]) -> String {
    let mut out = String::new();

    out.push_str(&format!("{:>8}", "t_wait"));
    for metric in metrics {
        out.push_str(&format!("  {:>14}", metric.short_label()));
    }
    out.push('\n');

    for point in &results.points {
        out.push_str(&format!("{:>8}", point.t_wait));
        match &point.data {
            Ok(data) => {
                for metric in metrics {
                    out.push_str(&format!("  {:>14.6}", data.compute_metric(*metric)));
                }
            }
            Err(_) => {
                for _ in metrics {
                    out.push_str(&format!("  {:>14}", "-"));
                }
            }
        }
        out.push('\n');
    }

    out
}

/// One sweep point in the JSON report.
#[derive(Debug, Serialize)]
struct PointRecord {
    t_wait: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<DemPointData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct JsonReport {
    delta: f64,
    points: Vec<PointRecord>,
}

/// Serialize sweep results as pretty JSON.
pub fn to_json(results: &SweepResults) -> serde_json::Result<String> {
    let points = results
        .points
        .iter()
        .map(|p| match &p.data {
            Ok(data) => PointRecord {
                t_wait: p.t_wait,
                data: Some(*data),
                error: None,
            },
            Err(e) => PointRecord {
                t_wait: p.t_wait,
                data: None,
                error: Some(e.to_string()),
            },
        })
        .collect();

    serde_json::to_string_pretty(&JsonReport {
        delta: results.delta,
        points,
    })
}

/// Render the run plan for a sweep: events, runs, and amplitude settings
/// per wait time, plus the flattened run count.
#[must_use]
pub fn render_plan(
    heating: &HeatingConfig,
    wait_times: &WaitTimeRange,
    target_events: Option<usize>,
) -> String {
    let plan = SweepPlan::build(heating, wait_times, target_events);
    let mut out = String::new();

    out.push_str(&format!(
        "{:>8}  {:>7}  {:>5}  {:>13}  {:>13}\n",
        "t_wait", "events", "runs", "amp0", "amp1"
    ));

    for t_wait in wait_times.values() {
        let events = heating.num_events(t_wait);
        let runs = match target_events {
            Some(target) => heating.runs_for_event_count(t_wait, target),
            None => 1,
        };
        let line = match heating.amplitude_bounds(t_wait) {
            Some((amp0, amp1)) => format!(
                "{:>8}  {:>7}  {:>5}  {:>13.6e}  {:>13.6e}\n",
                t_wait, events, runs, amp0, amp1
            ),
            None => format!(
                "{:>8}  {:>7}  {:>5}  {:>13.6e}  {:>13}\n",
                t_wait,
                events,
                runs,
                heating.uniform_amplitude(t_wait),
                "-"
            ),
        };
        out.push_str(&line);
    }

    out.push_str(&format!("\ntotal runs: {}\n", plan.len()));
    out
}
