//! Harness error taxonomy.
//!
//! Only configuration problems discovered before measurement starts (and
//! round-trip correctness violations) surface as errors. A failing or
//! timed-out benchmark process is ordinary data, folded into that cell's
//! [`crate::process::ProcessOutcome`] and aggregate record instead.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("build directory not found: {0}")]
    MissingBuildDir(PathBuf),

    #[error("required executable not found: {0}")]
    MissingExecutable(PathBuf),

    #[error("no benchmark executable known for algorithm `{algorithm}` variant `{variant}`")]
    UnknownBenchmark { algorithm: String, variant: String },

    #[error("invalid test specification `{input}`: {reason}")]
    InvalidSpec { input: String, reason: String },

    #[error("round-trip case failed: {0}")]
    RoundTripFailed(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HarnessError>;
