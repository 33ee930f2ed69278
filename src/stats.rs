//! Repeated-run aggregation over benchmark cell timings.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::log;
use crate::process::run_command;

// =============================================================================
// Descriptive statistics
// =============================================================================

/// Summary over the successful repetitions of one benchmark cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingSummary {
    pub mean_s: f64,
    pub std_s: f64,
    pub min_s: f64,
    pub max_s: f64,
}

/// Reduce successful elapsed times to their summary, or `None` when no run
/// succeeded. `None` is the only "all runs failed" representation — a failed
/// cell never reports a numeric timing.
///
/// Standard deviation is the unbiased sample estimator (n−1), defined as 0
/// with a single sample.
pub fn summarize(times: &[f64]) -> Option<TimingSummary> {
    if times.is_empty() {
        return None;
    }
    let n = times.len() as f64;
    let mean = times.iter().sum::<f64>() / n;
    let std = if times.len() < 2 {
        0.0
    } else {
        (times.iter().map(|t| (t - mean).powi(2)).sum::<f64>() / (n - 1.0)).sqrt()
    };
    let min = times.iter().copied().fold(f64::INFINITY, f64::min);
    let max = times.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some(TimingSummary {
        mean_s: mean,
        std_s: std,
        min_s: min,
        max_s: max,
    })
}

// =============================================================================
// Repeated execution
// =============================================================================

/// Timings of the successful runs of one cell, plus attempt bookkeeping.
#[derive(Debug, Clone)]
pub struct RunSeries {
    /// Elapsed seconds of successful runs, in invocation order.
    pub times: Vec<f64>,
    pub attempted: usize,
    /// Most recent failure message, if any run failed.
    pub last_error: Option<String>,
}

impl RunSeries {
    pub fn successes(&self) -> usize {
        self.times.len()
    }

    pub fn summary(&self) -> Option<TimingSummary> {
        summarize(&self.times)
    }
}

/// Invoke `cmd` `runs` times sequentially, keeping the elapsed times of
/// successful invocations.
///
/// A failing or timed-out repetition is logged and skipped; it never aborts
/// the series, let alone the enclosing sweep.
pub fn run_repeated(cmd: &[String], cwd: &Path, timeout: Duration, runs: usize) -> RunSeries {
    let mut series = RunSeries {
        times: Vec::new(),
        attempted: runs,
        last_error: None,
    };
    for run in 1..=runs {
        let outcome = run_command(cmd, cwd, timeout);
        if outcome.success {
            log::info(&format!("  run {run}: {:.3}s", outcome.elapsed_secs()));
            series.times.push(outcome.elapsed_secs());
        } else {
            log::error(&format!("  run {run}: FAILED - {}", outcome.stderr.trim()));
            series.last_error = Some(outcome.stderr.trim().to_string());
        }
    }
    series
}
