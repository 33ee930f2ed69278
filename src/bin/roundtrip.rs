//! Round-trip validation driver.
//!
//! Runs the save/load round-trip suite over the full direction × weighting ×
//! format matrix and exits non-zero on the first failing case.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use edgekit_benchmarks::error::HarnessError;
use edgekit_benchmarks::log;
use edgekit_benchmarks::roundtrip::{RoundTripValidator, SuiteState};

#[derive(Parser)]
#[command(
    name = "validate-roundtrip",
    about = "Validate EdgeKit save/load round trips across all graph properties and formats"
)]
struct Args {
    /// Build directory holding the toolchain executables.
    #[arg(long, default_value = "build")]
    build_dir: PathBuf,

    /// Scale of the generated test graph (2^scale vertices).
    #[arg(long, default_value_t = 8)]
    scale: u32,

    /// Degree of the generated test graph.
    #[arg(long, default_value_t = 8)]
    degree: u32,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let build_dir = match args.build_dir.canonicalize() {
        Ok(dir) => dir,
        Err(_) => {
            log::error(&HarnessError::MissingBuildDir(args.build_dir).to_string());
            return ExitCode::FAILURE;
        }
    };

    let work_dir = match tempfile::Builder::new().prefix("roundtrip-").tempdir() {
        Ok(dir) => dir,
        Err(e) => {
            log::error(&format!("cannot create scratch directory: {e}"));
            return ExitCode::FAILURE;
        }
    };

    let mut validator = RoundTripValidator::new(&build_dir).with_graph(args.scale, args.degree);
    let summary = match validator.run(work_dir.path()) {
        Ok(summary) => summary,
        Err(e) => {
            log::error(&e.to_string());
            return ExitCode::FAILURE;
        }
    };

    // Scratch cleanup failures are warnings, never run failures.
    if let Err(e) = work_dir.close() {
        log::warning(&format!("could not remove scratch directory: {e}"));
    }

    println!("==========================================");
    println!("Round-trip results:");
    println!("Attempted: {}", summary.attempted);
    println!("Passed:    {}", summary.passed);
    println!("Failed:    {}", summary.attempted - summary.passed);
    println!("==========================================");

    match summary.state {
        SuiteState::Completed => {
            log::success("all round-trip cases passed");
            ExitCode::SUCCESS
        }
        _ => {
            let case = summary
                .failed_case
                .map(|c| c.to_string())
                .unwrap_or_else(|| "unknown case".to_string());
            log::error(&HarnessError::RoundTripFailed(case).to_string());
            ExitCode::FAILURE
        }
    }
}
