//! Report emission: JSON round-trip through the schema and the grouped
//! terminal summary.

use std::path::Path;

use edgekit_benchmarks::report::ReportEmitter;
use edgekit_benchmarks::schema::{BenchmarkRecord, BenchmarkReport};
use edgekit_benchmarks::stats::summarize;

fn passing_record(algorithm: &str, graph: &str, threads: Option<usize>) -> BenchmarkRecord {
    let times = vec![0.101, 0.099, 0.1];
    BenchmarkRecord {
        algorithm: algorithm.to_string(),
        variant: "sequential".to_string(),
        graph: graph.to_string(),
        threads,
        runs_attempted: 3,
        summary: summarize(&times),
        times_s: times,
        error: None,
        note: None,
    }
}

fn failed_record(algorithm: &str, graph: &str) -> BenchmarkRecord {
    BenchmarkRecord {
        algorithm: algorithm.to_string(),
        variant: "accelerator".to_string(),
        graph: graph.to_string(),
        threads: None,
        runs_attempted: 3,
        times_s: Vec::new(),
        summary: None,
        error: Some("all runs failed".to_string()),
        note: None,
    }
}

#[test]
fn saved_report_round_trips_through_the_schema() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("results").join("report.json");

    let mut emitter = ReportEmitter::new(Path::new("/proj/build"), 3);
    emitter.record(passing_record("bfs", "graphs/mini.el", None));
    emitter.record(failed_record("bfs", "generated_scale8_degree4_erdos_renyi"));
    emitter.save(&path).expect("save");

    let contents = std::fs::read_to_string(&path).expect("read report");
    let report: BenchmarkReport = serde_json::from_str(&contents).expect("parse report");

    assert_eq!(report.schema_version, 1);
    assert_eq!(report.metadata.runs_per_cell, 3);
    assert_eq!(report.records.len(), 2);

    let ok = &report.records[0];
    assert!(ok.summary.is_some());
    assert!(ok.error.is_none());
    assert_eq!(ok.times_s.len(), 3);

    let failed = &report.records[1];
    assert!(failed.summary.is_none());
    assert_eq!(failed.error.as_deref(), Some("all runs failed"));

    // The sentinel never serializes as a number.
    assert!(!contents.contains("\"summary\": null"));
}

#[test]
fn summary_groups_by_algorithm_and_marks_failures() {
    let mut emitter = ReportEmitter::new(Path::new("/proj/build"), 3);
    emitter.record(passing_record("bfs", "graphs/mini.el", None));
    emitter.record(passing_record("tc", "graphs/mini.el", Some(4)));
    emitter.record(failed_record("bfs", "generated_scale8_degree4_erdos_renyi"));

    let summary = emitter.render_summary();

    let bfs_at = summary.find("BFS:").expect("bfs group");
    let tc_at = summary.find("TC:").expect("tc group");
    assert!(bfs_at < tc_at);

    // Both bfs records sit inside the bfs group even though a tc record was
    // emitted between them.
    let failed_at = summary.find("FAILED").expect("failed marker");
    assert!(failed_at < tc_at);

    assert!(summary.contains("± "));
    assert!(summary.contains("(4 threads)"));
}
