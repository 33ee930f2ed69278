//! Exhaustive save/load round-trip validation.
//!
//! For every combination of graph direction, vertex weighting, edge
//! weighting, and on-disk format, the external `test_load_save` executable
//! generates a graph, saves it, reloads it, and compares. Unlike the
//! benchmark sweep, this suite is fail-fast: a round-trip defect is a
//! correctness regression, not a flaky measurement, so the first failing
//! case aborts the whole run.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::{Direction, Weighting};
use crate::error::{HarnessError, Result};
use crate::log;
use crate::process::run_command;

pub const ROUNDTRIP_EXECUTABLE: &str = "test_load_save";

const CASE_TIMEOUT: Duration = Duration::from_secs(300);

// =============================================================================
// Case matrix
// =============================================================================

/// Serialized formats exercised by the suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    TextEdgeList,
    BinaryCompact,
    GenericBinary,
}

impl Format {
    pub const ALL: [Format; 3] = [
        Format::TextEdgeList,
        Format::BinaryCompact,
        Format::GenericBinary,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Format::TextEdgeList => "text-edge-list",
            Format::BinaryCompact => "binary-compact",
            Format::GenericBinary => "generic-binary",
        }
    }

    /// Save-file name for a case. Text edge lists encode the weighting pair
    /// in their extension; the binary formats have fixed extensions.
    fn file_name(&self, vertex: Weighting, edge: Weighting) -> &'static str {
        match self {
            Format::TextEdgeList => match (vertex, edge) {
                (Weighting::Unweighted, Weighting::Unweighted) => "roundtrip.el",
                (Weighting::Weighted, Weighting::Unweighted) => "roundtrip.vel",
                (Weighting::Unweighted, Weighting::Weighted) => "roundtrip.wel",
                (Weighting::Weighted, Weighting::Weighted) => "roundtrip.vwel",
            },
            Format::BinaryCompact => "roundtrip.cg",
            Format::GenericBinary => "roundtrip.gb",
        }
    }
}

/// One cell of the validation matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTripCase {
    pub direction: Direction,
    pub vertex_weighting: Weighting,
    pub edge_weighting: Weighting,
    pub format: Format,
}

impl fmt::Display for RoundTripCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "graph={} vertex={} edge={} format={}",
            self.direction.short(),
            self.vertex_weighting.short(),
            self.edge_weighting.short(),
            self.format.label()
        )
    }
}

/// The full 24-case matrix (2 directions × 4 weighting pairs × 3 formats) in
/// a fixed enumeration order: direction, then weighting pair, then format.
pub fn case_matrix() -> Vec<RoundTripCase> {
    const WEIGHTINGS: [(Weighting, Weighting); 4] = [
        (Weighting::Unweighted, Weighting::Unweighted),
        (Weighting::Weighted, Weighting::Unweighted),
        (Weighting::Unweighted, Weighting::Weighted),
        (Weighting::Weighted, Weighting::Weighted),
    ];

    let mut cases = Vec::with_capacity(24);
    for direction in [Direction::Undirected, Direction::Directed] {
        for (vertex, edge) in WEIGHTINGS {
            for format in Format::ALL {
                cases.push(RoundTripCase {
                    direction,
                    vertex_weighting: vertex,
                    edge_weighting: edge,
                    format,
                });
            }
        }
    }
    cases
}

// =============================================================================
// Validator
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuiteState {
    Idle,
    Running(usize),
    Aborted,
    Completed,
}

#[derive(Debug, Clone)]
pub struct ValidationSummary {
    pub attempted: usize,
    pub passed: usize,
    pub state: SuiteState,
    pub failed_case: Option<RoundTripCase>,
}

pub struct RoundTripValidator {
    build_dir: PathBuf,
    scale: u32,
    degree: u32,
    state: SuiteState,
}

impl RoundTripValidator {
    pub fn new(build_dir: &Path) -> Self {
        Self {
            build_dir: build_dir.to_path_buf(),
            scale: 8,
            degree: 8,
            state: SuiteState::Idle,
        }
    }

    /// Override the generated test graph's size.
    pub fn with_graph(mut self, scale: u32, degree: u32) -> Self {
        self.scale = scale;
        self.degree = degree;
        self
    }

    pub fn state(&self) -> SuiteState {
        self.state
    }

    /// Run every case in matrix order, saving into `work_dir`, stopping at
    /// the first failure.
    ///
    /// A failing case prints the executable's captured stdout/stderr and
    /// yields an `Aborted` summary where `passed == attempted - 1`. Running
    /// the full matrix clean yields `Completed` with `passed == attempted`.
    pub fn run(&mut self, work_dir: &Path) -> Result<ValidationSummary> {
        let exe = self.build_dir.join(ROUNDTRIP_EXECUTABLE);
        if !exe.is_file() {
            return Err(HarnessError::MissingExecutable(exe));
        }

        let mut attempted = 0;
        let mut passed = 0;
        for (index, case) in case_matrix().into_iter().enumerate() {
            self.state = SuiteState::Running(index);
            log::info(&format!("case {index}: {case}"));
            attempted += 1;

            let save_path = work_dir.join(
                case.format
                    .file_name(case.vertex_weighting, case.edge_weighting),
            );
            let cmd = vec![
                exe.display().to_string(),
                "--graph-type".to_string(),
                case.direction.short().to_string(),
                "--vertex-type".to_string(),
                case.vertex_weighting.short().to_string(),
                "--edge-type".to_string(),
                case.edge_weighting.short().to_string(),
                "--scale".to_string(),
                self.scale.to_string(),
                "--degree".to_string(),
                self.degree.to_string(),
                "--gen-type".to_string(),
                "er".to_string(),
                "--save-file".to_string(),
                save_path.display().to_string(),
            ];

            let outcome = run_command(&cmd, &self.build_dir, CASE_TIMEOUT);
            if outcome.success {
                passed += 1;
                log::success("  passed");
            } else {
                if !outcome.stdout.is_empty() {
                    println!("{}", outcome.stdout.trim_end());
                }
                if !outcome.stderr.is_empty() {
                    eprintln!("{}", outcome.stderr.trim_end());
                }
                log::error(&format!("  failed with exit code {}", outcome.exit_code));
                self.state = SuiteState::Aborted;
                return Ok(ValidationSummary {
                    attempted,
                    passed,
                    state: SuiteState::Aborted,
                    failed_case: Some(case),
                });
            }
        }

        self.state = SuiteState::Completed;
        Ok(ValidationSummary {
            attempted,
            passed,
            state: SuiteState::Completed,
            failed_case: None,
        })
    }
}
