//! Report emission: the JSON artifact plus the grouped terminal summary.

use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::schema::{BenchmarkRecord, BenchmarkReport, RunMetadata};

/// Accumulates benchmark records and writes them out at the end of a run.
pub struct ReportEmitter {
    metadata: RunMetadata,
    records: Vec<BenchmarkRecord>,
}

impl ReportEmitter {
    /// Captures run metadata (timestamp, harness version) at construction.
    pub fn new(build_dir: &Path, runs_per_cell: usize) -> Self {
        Self {
            metadata: RunMetadata {
                timestamp: iso8601_now(),
                build_dir: build_dir.display().to_string(),
                runs_per_cell,
                harness_version: env!("CARGO_PKG_VERSION").to_string(),
            },
            records: Vec::new(),
        }
    }

    pub fn record(&mut self, record: BenchmarkRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    /// Write all records to `path` as pretty-printed JSON, creating parent
    /// directories as needed.
    pub fn save(&self, path: &Path) -> io::Result<PathBuf> {
        let report = BenchmarkReport {
            schema_version: 1,
            metadata: self.metadata.clone(),
            records: self.records.clone(),
        };
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, json)?;

        eprintln!("Results saved to {}", path.display());
        Ok(path.to_path_buf())
    }

    /// The grouped-by-algorithm human-readable listing: per record, the
    /// graph identity, variant, thread count when present, and
    /// `mean ± stdev` or an explicit FAILED marker.
    pub fn render_summary(&self) -> String {
        let mut out = String::from("=== Benchmark Summary ===\n");

        // Group by algorithm, preserving first-seen order.
        let mut groups: Vec<(&str, Vec<&BenchmarkRecord>)> = Vec::new();
        for record in &self.records {
            match groups.iter().position(|(alg, _)| *alg == record.algorithm) {
                Some(i) => groups[i].1.push(record),
                None => groups.push((&record.algorithm, vec![record])),
            }
        }

        for (algorithm, members) in groups {
            out.push_str(&format!("\n{}:\n", algorithm.to_uppercase()));
            for record in members {
                let threads = record
                    .threads
                    .map(|t| format!(" ({t} threads)"))
                    .unwrap_or_default();
                match &record.summary {
                    Some(s) => out.push_str(&format!(
                        "  {} [{}]{}: {:.3}s ± {:.3}s\n",
                        record.graph, record.variant, threads, s.mean_s, s.std_s
                    )),
                    None => out.push_str(&format!(
                        "  {} [{}]{}: FAILED\n",
                        record.graph, record.variant, threads
                    )),
                }
            }
        }
        out
    }

    pub fn print_summary(&self) {
        print!("{}", self.render_summary());
    }
}

// ---------------------------------------------------------------------------
// Timestamp helpers
// ---------------------------------------------------------------------------

fn iso8601_now() -> String {
    let now = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default();
    let secs = now.as_secs();

    let days = secs / 86400;
    let time_of_day = secs % 86400;
    let hours = time_of_day / 3600;
    let minutes = (time_of_day % 3600) / 60;
    let seconds = time_of_day % 60;

    let (year, month, day) = days_to_ymd(days);

    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
        year, month, day, hours, minutes, seconds
    )
}

fn days_to_ymd(mut days: u64) -> (u64, u64, u64) {
    // Algorithm from Howard Hinnant's date library
    days += 719468;
    let era = days / 146097;
    let doe = days - era * 146097;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = if m <= 2 { y + 1 } else { y };
    (y, m, d)
}
