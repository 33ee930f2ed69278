//! The combinatorial benchmark sweep: algorithm × variant × graph source.
//!
//! Cells are walked in a fixed order (algorithm, then variant, then source,
//! then thread count) and executed strictly sequentially, so record order is
//! reproducible across runs given identical inputs. A failing cell is
//! recorded and the walk continues; only configuration errors abort.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::GenSpec;
use crate::error::{HarnessError, Result};
use crate::log;
use crate::paths::PathResolver;
use crate::process::{run_command, DEFAULT_TIMEOUT};
use crate::provision::GENERATOR_EXECUTABLE;
use crate::schema::BenchmarkRecord;
use crate::stats::{run_repeated, RunSeries};

/// Thread counts exercised for per-thread-count threaded cells.
pub const THREAD_SWEEP: [usize; 4] = [2, 4, 8, 16];

// =============================================================================
// Matrix axes
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Bfs,
    TriangleCounting,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Bfs, Algorithm::TriangleCounting];

    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::TriangleCounting => "tc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Sequential,
    Threaded,
    Accelerator,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Sequential, Variant::Threaded, Variant::Accelerator];

    pub fn label(&self) -> &'static str {
        match self {
            Variant::Sequential => "sequential",
            Variant::Threaded => "threaded",
            Variant::Accelerator => "accelerator",
        }
    }
}

// =============================================================================
// Executable resolution
// =============================================================================

/// Executable measuring one (algorithm, variant) pairing.
///
/// An unrecognized pairing is a configuration error, never a silently
/// skipped cell.
pub fn benchmark_executable(algorithm: &str, variant: Variant) -> Result<&'static str> {
    let name = match (algorithm, variant) {
        ("bfs", Variant::Sequential) => "bfs",
        ("bfs", Variant::Threaded) => "bfs_threaded",
        ("bfs", Variant::Accelerator) => "bfs_accel",
        ("tc", Variant::Sequential) => "tc",
        ("tc", Variant::Threaded) => "tc_threaded",
        ("tc", Variant::Accelerator) => "tc_accel",
        _ => {
            return Err(HarnessError::UnknownBenchmark {
                algorithm: algorithm.to_string(),
                variant: variant.label().to_string(),
            })
        }
    };
    Ok(name)
}

/// Dedicated benchmark binary for threaded runs on generated graphs; it
/// sweeps thread counts internally per invocation.
pub fn threaded_benchmark_executable(algorithm: &str) -> Result<&'static str> {
    match algorithm {
        "bfs" => Ok("bfs_threaded_benchmark"),
        "tc" => Ok("tc_threaded_benchmark"),
        _ => Err(HarnessError::UnknownBenchmark {
            algorithm: algorithm.to_string(),
            variant: Variant::Threaded.label().to_string(),
        }),
    }
}

const REQUIRED_EXECUTABLES: [&str; 9] = [
    GENERATOR_EXECUTABLE,
    "bfs",
    "bfs_threaded",
    "bfs_threaded_benchmark",
    "bfs_accel",
    "tc",
    "tc_threaded",
    "tc_threaded_benchmark",
    "tc_accel",
];

/// Verify the build directory and every executable the sweep needs, before
/// any measurement begins.
pub fn preflight(build_dir: &Path) -> Result<()> {
    if !build_dir.is_dir() {
        return Err(HarnessError::MissingBuildDir(build_dir.to_path_buf()));
    }
    for exe in REQUIRED_EXECUTABLES {
        let path = build_dir.join(exe);
        if !path.is_file() {
            return Err(HarnessError::MissingExecutable(path));
        }
    }
    Ok(())
}

// =============================================================================
// Graph sources
// =============================================================================

/// One graph a benchmark cell runs against.
#[derive(Debug, Clone)]
pub enum GraphSource {
    File(PathBuf),
    Generated {
        spec: GenSpec,
        /// On-disk artifact from provisioning; `None` means the executables
        /// build the graph themselves from the generation parameters.
        artifact: Option<PathBuf>,
    },
}

impl GraphSource {
    /// Identity string carried on every record derived from this source.
    pub fn identity(&self) -> String {
        match self {
            GraphSource::File(path) => path.display().to_string(),
            GraphSource::Generated { spec, .. } => spec.graph_name(),
        }
    }
}

// =============================================================================
// Orchestrator
// =============================================================================

pub struct SweepOrchestrator {
    build_dir: PathBuf,
    resolver: PathResolver,
    runs: usize,
    timeout: Duration,
}

impl SweepOrchestrator {
    pub fn new(project_root: &Path, build_dir: &Path, runs: usize) -> Self {
        Self {
            build_dir: build_dir.to_path_buf(),
            resolver: PathResolver::new(project_root, build_dir),
            runs,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Walk the full matrix, returning one record per cell in walk order.
    pub fn run(&self, sources: &[GraphSource]) -> Result<Vec<BenchmarkRecord>> {
        let mut records = Vec::new();
        for algorithm in Algorithm::ALL {
            log::info(&format!("=== {} benchmarks ===", algorithm.label()));
            for variant in Variant::ALL {
                for source in sources {
                    match variant {
                        Variant::Threaded => {
                            self.run_threaded(algorithm, source, &mut records)?;
                        }
                        _ => {
                            self.run_single(algorithm, variant, source, &mut records)?;
                        }
                    }
                }
            }
        }
        Ok(records)
    }

    /// One cell: sequential or accelerator variant, no thread dimension.
    fn run_single(
        &self,
        algorithm: Algorithm,
        variant: Variant,
        source: &GraphSource,
        records: &mut Vec<BenchmarkRecord>,
    ) -> Result<()> {
        let exe = benchmark_executable(algorithm.label(), variant)?;
        let mut cmd = vec![self.build_dir.join(exe).display().to_string()];
        self.push_source_args(source, &mut cmd);

        log::info(&format!("running: {}", cmd.join(" ")));
        let series = run_repeated(&cmd, &self.build_dir, self.timeout, self.runs);
        records.push(self.record(algorithm, variant, source, None, series, None));
        Ok(())
    }

    /// Threaded cells: one record per thread count in [`THREAD_SWEEP`],
    /// whatever the source. File sources go through the generic executable's
    /// `--num-threads` flag; generated sources invoke the dedicated benchmark
    /// binary once per sweep position, which runs the requested repetitions
    /// itself and prints the per-thread breakdown.
    fn run_threaded(
        &self,
        algorithm: Algorithm,
        source: &GraphSource,
        records: &mut Vec<BenchmarkRecord>,
    ) -> Result<()> {
        match source {
            GraphSource::File(path) => {
                let exe = benchmark_executable(algorithm.label(), Variant::Threaded)?;
                let load_path = self.resolver.resolve(path).display().to_string();
                for threads in THREAD_SWEEP {
                    let cmd = vec![
                        self.build_dir.join(exe).display().to_string(),
                        "--load-file".to_string(),
                        load_path.clone(),
                        "--num-threads".to_string(),
                        threads.to_string(),
                    ];
                    log::info(&format!("running: {}", cmd.join(" ")));
                    let series = run_repeated(&cmd, &self.build_dir, self.timeout, self.runs);
                    records.push(self.record(
                        algorithm,
                        Variant::Threaded,
                        source,
                        Some(threads),
                        series,
                        None,
                    ));
                }
            }
            GraphSource::Generated { spec, .. } => {
                let exe = threaded_benchmark_executable(algorithm.label())?;
                let cmd = vec![
                    self.build_dir.join(exe).display().to_string(),
                    "generated".to_string(),
                    spec.scale.to_string(),
                    spec.degree.to_string(),
                    spec.generator.clone(),
                    "--runs".to_string(),
                    self.runs.to_string(),
                ];
                for threads in THREAD_SWEEP {
                    log::info(&format!("running threaded benchmark: {}", cmd.join(" ")));

                    let outcome = run_command(&cmd, &self.build_dir, self.timeout);
                    // The repetitions happen inside the benchmark binary, so
                    // the attempt count is the requested repetition count
                    // even though the harness invokes it once per cell.
                    let series = if outcome.success {
                        log::info(&format!("  completed in {:.3}s", outcome.elapsed_secs()));
                        if !outcome.stdout.is_empty() {
                            // Keep the per-thread breakdown for manual inspection.
                            println!("{}", outcome.stdout.trim_end());
                        }
                        RunSeries {
                            times: vec![outcome.elapsed_secs()],
                            attempted: self.runs,
                            last_error: None,
                        }
                    } else {
                        log::error(&format!("  FAILED - {}", outcome.stderr.trim()));
                        RunSeries {
                            times: Vec::new(),
                            attempted: self.runs,
                            last_error: Some(outcome.stderr.trim().to_string()),
                        }
                    };
                    let note = "thread counts swept internally by the benchmark \
                                executable; overall wall time recorded"
                        .to_string();
                    records.push(self.record(
                        algorithm,
                        Variant::Threaded,
                        source,
                        Some(threads),
                        series,
                        Some(note),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Arguments selecting the graph for the generic algorithm executables.
    fn push_source_args(&self, source: &GraphSource, cmd: &mut Vec<String>) {
        match source {
            GraphSource::File(path) => {
                cmd.push("--load-file".to_string());
                cmd.push(self.resolver.resolve(path).display().to_string());
            }
            GraphSource::Generated {
                artifact: Some(path),
                ..
            } => {
                cmd.push("--load-file".to_string());
                cmd.push(self.resolver.resolve(path).display().to_string());
            }
            GraphSource::Generated {
                spec,
                artifact: None,
            } => {
                cmd.extend(spec.generation_args());
            }
        }
    }

    fn record(
        &self,
        algorithm: Algorithm,
        variant: Variant,
        source: &GraphSource,
        threads: Option<usize>,
        series: RunSeries,
        note: Option<String>,
    ) -> BenchmarkRecord {
        let summary = series.summary();
        let error = if summary.is_none() {
            Some(
                series
                    .last_error
                    .clone()
                    .unwrap_or_else(|| "all runs failed".to_string()),
            )
        } else {
            None
        };
        BenchmarkRecord {
            algorithm: algorithm.label().to_string(),
            variant: variant.label().to_string(),
            graph: source.identity(),
            threads,
            runs_attempted: series.attempted,
            times_s: series.times,
            summary,
            error,
            note,
        }
    }
}
