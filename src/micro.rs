//! Micro-benchmarks of the toolchain's primitive operations: generation,
//! loading, saving, conversion, iteration, and memory footprint.
//!
//! Each benchmark gets its own text log under the results directory, and
//! `write_summary` stitches them into a single `summary.txt` at the end.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::log;
use crate::process::{run_command, DEFAULT_TIMEOUT};
use crate::stats::summarize;

pub struct MicroBenchmarkRunner {
    build_dir: PathBuf,
    results_dir: PathBuf,
    runs: usize,
}

impl MicroBenchmarkRunner {
    pub fn new(build_dir: &Path, results_dir: &Path, runs: usize) -> io::Result<Self> {
        fs::create_dir_all(results_dir)?;
        Ok(Self {
            build_dir: build_dir.to_path_buf(),
            results_dir: results_dir.to_path_buf(),
            runs,
        })
    }

    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    /// Run `cmd` the configured number of times, writing per-run lines and
    /// the aggregate to `<name>.txt`. All-failed benchmarks are recorded
    /// with an explicit FAILED marker, never a numeric average.
    pub fn run_benchmark(&self, name: &str, cmd: &[String]) -> io::Result<()> {
        log::info(&format!("benchmark: {name}"));

        let mut body = String::new();
        let _ = writeln!(body, "Benchmark: {name}");
        let _ = writeln!(body, "Command: {}", cmd.join(" "));
        let _ = writeln!(body, "Runs: {}", self.runs);
        let _ = writeln!(body, "Results:");

        let mut times = Vec::new();
        for run in 1..=self.runs {
            let outcome = run_command(cmd, &self.build_dir, DEFAULT_TIMEOUT);
            if outcome.success {
                let _ = writeln!(body, "  run {run}: {:.3}s", outcome.elapsed_secs());
                log::success(&format!("  run {run}: {:.3}s", outcome.elapsed_secs()));
                times.push(outcome.elapsed_secs());
            } else {
                let _ = writeln!(body, "  run {run}: FAILED");
                log::error(&format!("  run {run}: FAILED"));
                if !outcome.stderr.is_empty() {
                    eprintln!("{}", outcome.stderr.trim_end());
                }
            }
        }

        match summarize(&times) {
            Some(summary) => {
                let _ = writeln!(body, "Average time: {:.3}s", summary.mean_s);
                let _ = writeln!(body, "Success rate: {}/{}", times.len(), self.runs);
                log::success(&format!(
                    "average {:.3}s ({}/{} successful)",
                    summary.mean_s,
                    times.len(),
                    self.runs
                ));
            }
            None => {
                let _ = writeln!(body, "Average time: FAILED");
                log::error("all runs failed");
            }
        }

        fs::write(self.results_dir.join(format!("{name}.txt")), body)
    }

    /// Run `cmd` once under GNU time for a peak-memory report, saving the
    /// full output to `<name>_memory.txt`. Falls back to a plain run with a
    /// warning when `/usr/bin/time` is unavailable.
    pub fn run_memory_benchmark(&self, name: &str, cmd: &[String]) -> io::Result<()> {
        log::info(&format!("memory benchmark: {name}"));

        let mut wrapped: Vec<String> = if Path::new("/usr/bin/time").exists() {
            vec!["/usr/bin/time".to_string(), "-v".to_string()]
        } else {
            log::warning("GNU time not found; recording wall time only");
            Vec::new()
        };
        wrapped.extend(cmd.iter().cloned());

        let outcome = run_command(&wrapped, &self.build_dir, DEFAULT_TIMEOUT);

        let mut body = String::new();
        let _ = writeln!(body, "Memory Benchmark: {name}");
        let _ = writeln!(body, "Command: {}", cmd.join(" "));
        let _ = writeln!(body, "Results:");
        body.push_str(&outcome.stdout);
        body.push_str(&outcome.stderr);

        if !outcome.success {
            log::error(&format!("memory benchmark failed: {}", outcome.stderr.trim()));
        }

        fs::write(self.results_dir.join(format!("{name}_memory.txt")), body)
    }

    /// Concatenate every per-benchmark log into `summary.txt`, in file-name
    /// order for determinism.
    pub fn write_summary(&self) -> io::Result<PathBuf> {
        let mut names: Vec<String> = Vec::new();
        for entry in fs::read_dir(&self.results_dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.ends_with(".txt") && name != "summary.txt" {
                names.push(name);
            }
        }
        names.sort();

        let mut out = String::from("=== Micro Benchmark Summary ===\n");
        let _ = writeln!(out, "Build directory: {}", self.build_dir.display());
        let _ = writeln!(out, "Runs per benchmark: {}", self.runs);
        out.push('\n');

        for name in names {
            let stem = name.trim_end_matches(".txt");
            let _ = writeln!(out, "=== {stem} ===");
            out.push_str(&fs::read_to_string(self.results_dir.join(&name))?);
            out.push('\n');
        }

        let path = self.results_dir.join("summary.txt");
        fs::write(&path, out)?;
        log::success(&format!("summary available at {}", path.display()));
        Ok(path)
    }
}
