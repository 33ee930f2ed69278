//! Benchmark-and-validation harness for the EdgeKit graph toolchain.
//!
//! The toolchain itself — graph generators, BFS and triangle-counting
//! implementations in sequential/threaded/accelerator flavors, and the
//! file-format codecs — is a set of compiled executables. This crate only
//! drives them: it expands a declarative test matrix into concrete benchmark
//! cells, runs each cell as a child process under a deadline, aggregates
//! repeated timings, and writes a JSON report plus a terminal summary.
//!
//! A second, independent flow ([`roundtrip`]) exhaustively validates
//! save/load correctness across every combination of graph direction,
//! weighting, and on-disk format, failing fast on the first regression.

pub mod config;
pub mod error;
pub mod log;
pub mod micro;
pub mod paths;
pub mod process;
pub mod provision;
pub mod report;
pub mod roundtrip;
pub mod schema;
pub mod stats;
pub mod sweep;
