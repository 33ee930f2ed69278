//! Benchmark comparison tool.
//!
//! Compares two JSON report files and prints a table showing mean-time
//! deltas per benchmark cell.
//!
//! Usage: `bench-compare <baseline.json> <candidate.json>`

use std::collections::HashMap;

use edgekit_benchmarks::schema::{BenchmarkRecord, BenchmarkReport};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <baseline.json> <candidate.json>", args[0]);
        std::process::exit(1);
    }

    let baseline = load_report(&args[1]);
    let candidate = load_report(&args[2]);

    // Build lookup by cell key
    let base_map: HashMap<String, &BenchmarkRecord> = baseline
        .records
        .iter()
        .map(|r| (cell_key(r), r))
        .collect();

    let cand_map: HashMap<String, &BenchmarkRecord> = candidate
        .records
        .iter()
        .map(|r| (cell_key(r), r))
        .collect();

    eprintln!("Baseline: {} ({})", args[1], baseline.metadata.timestamp);
    eprintln!("Candidate: {} ({})", args[2], candidate.metadata.timestamp);
    eprintln!();

    println!(
        "{:<60} | {:>12} | {:>12} | {:>12}",
        "Benchmark cell", "Base mean", "New mean", "Delta"
    );
    println!("{}", "-".repeat(104));

    let mut matched = 0u32;
    let mut only_base = 0u32;
    let mut only_cand = 0u32;

    for cand in &candidate.records {
        if let Some(base) = base_map.get(&cell_key(cand)) {
            matched += 1;
            print_comparison(&cell_key(cand), base, cand);
        } else {
            only_cand += 1;
        }
    }

    for base in &baseline.records {
        if !cand_map.contains_key(&cell_key(base)) {
            only_base += 1;
        }
    }

    println!("{}", "-".repeat(104));
    println!(
        "Compared: {} | Baseline only: {} | Candidate only: {}",
        matched, only_base, only_cand
    );
}

/// Stable identity of one cell across runs.
fn cell_key(record: &BenchmarkRecord) -> String {
    match record.threads {
        Some(threads) => format!(
            "{}/{}/{}/{}t",
            record.algorithm, record.variant, record.graph, threads
        ),
        None => format!("{}/{}/{}", record.algorithm, record.variant, record.graph),
    }
}

fn load_report(path: &str) -> BenchmarkReport {
    let contents = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        std::process::exit(1);
    });
    serde_json::from_str(&contents).unwrap_or_else(|e| {
        eprintln!("Error parsing {}: {}", path, e);
        std::process::exit(1);
    })
}

fn print_comparison(key: &str, base: &BenchmarkRecord, cand: &BenchmarkRecord) {
    match (&base.summary, &cand.summary) {
        (Some(base_summary), Some(cand_summary)) => {
            let base_mean = base_summary.mean_s;
            let cand_mean = cand_summary.mean_s;
            let delta_pct = if base_mean > 0.0 {
                ((cand_mean - base_mean) / base_mean) * 100.0
            } else {
                0.0
            };

            let hint = if delta_pct < -1.0 {
                "faster"
            } else if delta_pct > 1.0 {
                "slower"
            } else {
                "~same"
            };

            println!(
                "{:<60} | {:>12} | {:>12} | {:>+.1}% ({})",
                key,
                format_secs(base_mean),
                format_secs(cand_mean),
                delta_pct,
                hint,
            );
        }
        (base_summary, cand_summary) => {
            // One or both sides never produced a successful run.
            let render = |s: &Option<edgekit_benchmarks::stats::TimingSummary>| match s {
                Some(s) => format_secs(s.mean_s),
                None => "FAILED".to_string(),
            };
            println!(
                "{:<60} | {:>12} | {:>12} | {:>12}",
                key,
                render(base_summary),
                render(cand_summary),
                "n/a"
            );
        }
    }
}

fn format_secs(secs: f64) -> String {
    if secs < 0.001 {
        format!("{:.0} us", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2} ms", secs * 1_000.0)
    } else {
        format!("{:.3} s", secs)
    }
}
