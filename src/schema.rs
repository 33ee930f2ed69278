//! Shared benchmark result types.
//!
//! Reports are written as JSON matching these types, with stable field names
//! so external tooling (and `bench-compare`) can diff runs.

use serde::{Deserialize, Serialize};

use crate::stats::TimingSummary;

/// Top-level benchmark report written to a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// Schema version for forward compatibility.
    pub schema_version: u32,
    /// Metadata about this run.
    pub metadata: RunMetadata,
    /// One element per benchmark cell, in sweep order.
    pub records: Vec<BenchmarkRecord>,
}

/// Metadata captured at the start of a benchmark run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMetadata {
    /// ISO 8601 timestamp of the run start.
    pub timestamp: String,
    /// Build directory the toolchain executables were run from.
    pub build_dir: String,
    /// Repetitions requested per benchmark cell.
    pub runs_per_cell: usize,
    /// Harness crate version.
    pub harness_version: String,
}

/// One measured benchmark cell.
///
/// The graph identity is either the literal file path or the deterministic
/// name derived from generation parameters, so every record is reproducible
/// on its own, with no external join.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// Algorithm family, e.g. `bfs` or `tc`.
    pub algorithm: String,
    /// Implementation variant: `sequential`, `threaded`, or `accelerator`.
    pub variant: String,
    /// Graph identity: file path or `generated_scale{s}_degree{d}_{kind}`.
    pub graph: String,
    /// Thread count for per-thread-count threaded cells; absent otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub threads: Option<usize>,
    pub runs_attempted: usize,
    /// Elapsed seconds of successful repetitions, in invocation order.
    pub times_s: Vec<f64>,
    /// Absent when every repetition failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub summary: Option<TimingSummary>,
    /// Failure note, present only when the whole cell failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub note: Option<String>,
}
