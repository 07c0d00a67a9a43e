//! Sonar sweep for `submarine sweep`.

use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use crate::core::depth::{TrendStep, trend_steps, window_sums};
use crate::io::input::load_records;
use crate::report::Report;

/// Result of one sweep over a measurement list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SweepReport {
    pub window: usize,
    pub measurements: usize,
    pub increases: usize,
    #[serde(skip)]
    pub steps: Vec<TrendStep>,
}

/// Compare window sums of `measurements` and count strict increases.
pub fn run_sweep(measurements: &[i64], window: usize) -> Result<SweepReport> {
    let sums = window_sums(measurements, window)?;
    let steps = trend_steps(&sums);
    let increases = steps.last().map_or(0, |step| step.increases);
    debug!(window, measurements = measurements.len(), increases, "sweep finished");
    Ok(SweepReport {
        window,
        measurements: measurements.len(),
        increases,
        steps,
    })
}

/// Load measurements from `path` and sweep them.
pub fn sweep_from_path(path: &Path, window: usize) -> Result<SweepReport> {
    let measurements: Vec<i64> = load_records(path)?;
    run_sweep(&measurements, window)
}

impl Report for SweepReport {
    fn progress_lines(&self) -> Vec<String> {
        self.steps.iter().map(progress_line).collect()
    }

    fn summary(&self) -> String {
        format!("Counter: {}", self.increases)
    }
}

fn progress_line(step: &TrendStep) -> String {
    let label = step.trend.map_or("no previous", |trend| trend.label());
    format!("{} ({}) {}", step.value, label, step.increases)
}
