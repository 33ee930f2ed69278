//! Micro-benchmark driver for the toolchain's primitive operations.
//!
//! Runs the stock suite — generation across a scale/degree grid, loading and
//! saving in each format, iteration patterns, and a peak-memory check — and
//! leaves per-benchmark logs plus a combined summary in the results
//! directory. Scratch graphs live in a temp directory that is removed at the
//! end (warn-only on failure).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use edgekit_benchmarks::error::HarnessError;
use edgekit_benchmarks::log;
use edgekit_benchmarks::micro::MicroBenchmarkRunner;

#[derive(Parser)]
#[command(
    name = "bench-micro",
    about = "Run EdgeKit micro benchmarks (generation, load, save, iteration, memory)"
)]
struct Args {
    /// Build directory holding the toolchain executables.
    #[arg(long, default_value = "build")]
    build_dir: PathBuf,

    /// Directory for per-benchmark logs and the summary.
    #[arg(long, default_value = "micro_benchmark_results")]
    results_dir: PathBuf,

    /// Repetitions per benchmark.
    #[arg(long, default_value_t = 5)]
    num_runs: usize,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error(&format!("micro benchmarks failed: {e}"));
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), HarnessError> {
    let build_dir = args
        .build_dir
        .canonicalize()
        .map_err(|_| HarnessError::MissingBuildDir(args.build_dir.clone()))?;
    let runner = MicroBenchmarkRunner::new(&build_dir, &args.results_dir, args.num_runs)?;

    let scratch = tempfile::Builder::new().prefix("micro-bench-").tempdir()?;
    let scratch_path = |name: &str| scratch.path().join(name).display().to_string();
    let exe = |name: &str| build_dir.join(name).display().to_string();

    log::info("=== graph generation benchmarks ===");
    let grid: [(&str, u32, u32); 13] = [
        ("gen_small_sparse", 8, 2),
        ("gen_small_medium", 8, 4),
        ("gen_small_dense", 8, 8),
        ("gen_medium_sparse", 12, 2),
        ("gen_medium_medium", 12, 4),
        ("gen_medium_dense", 12, 8),
        ("gen_large_sparse", 16, 2),
        ("gen_large_medium", 16, 4),
        ("gen_large_dense", 16, 8),
        ("gen_high_degree_32", 16, 32),
        ("gen_high_degree_64", 16, 64),
        ("gen_high_degree_128", 16, 128),
        ("gen_high_degree_256", 16, 256),
    ];
    for (name, scale, degree) in grid {
        let save = scratch_path(&format!("{name}.el"));
        runner.run_benchmark(name, &generate_cmd(&exe("generate_and_print"), scale, degree, &save))?;
    }

    log::info("=== graph loading benchmarks ===");
    runner.run_benchmark(
        "load_small_el",
        &load_cmd(&exe("print"), &scratch_path("gen_small_sparse.el")),
    )?;
    runner.run_benchmark(
        "load_medium_el",
        &load_cmd(&exe("print"), &scratch_path("gen_medium_sparse.el")),
    )?;
    runner.run_benchmark(
        "load_large_el",
        &load_cmd(&exe("print"), &scratch_path("gen_large_sparse.el")),
    )?;

    runner.run_benchmark(
        "convert_to_wel",
        &convert_cmd(
            &exe("convert"),
            &scratch_path("gen_medium_sparse.el"),
            &scratch_path("medium.wel"),
        ),
    )?;
    runner.run_benchmark("load_wel", &load_cmd(&exe("print"), &scratch_path("medium.wel")))?;

    runner.run_benchmark(
        "convert_to_cg",
        &convert_cmd(
            &exe("convert"),
            &scratch_path("gen_medium_sparse.el"),
            &scratch_path("medium.cg"),
        ),
    )?;
    runner.run_benchmark("load_cg", &load_cmd(&exe("print"), &scratch_path("medium.cg")))?;

    log::info("=== graph saving benchmarks ===");
    for (name, target) in [
        ("save_el", "save.el"),
        ("save_wel", "save.wel"),
        ("save_cg", "save.cg"),
    ] {
        runner.run_benchmark(
            name,
            &convert_cmd(
                &exe("convert"),
                &scratch_path("gen_medium_sparse.el"),
                &scratch_path(target),
            ),
        )?;
    }

    log::info("=== graph iteration benchmarks ===");
    let iteration_graph = scratch_path("iteration.el");
    runner.run_benchmark(
        "gen_iteration_graph",
        &generate_cmd(&exe("generate_and_print"), 10, 4, &iteration_graph),
    )?;
    for direction in ["forward", "backward", "random"] {
        let mut cmd = load_cmd(&exe("iteration"), &iteration_graph);
        cmd.push("--direction".to_string());
        cmd.push(direction.to_string());
        runner.run_benchmark(&format!("iteration_{direction}"), &cmd)?;
    }

    log::info("=== memory usage benchmarks ===");
    runner.run_memory_benchmark(
        "memory_large_graph",
        &load_cmd(&exe("print"), &scratch_path("gen_large_sparse.el")),
    )?;

    runner.write_summary()?;

    if let Err(e) = scratch.close() {
        log::warning(&format!("could not remove scratch directory: {e}"));
    }
    Ok(())
}

fn generate_cmd(exe: &str, scale: u32, degree: u32, save: &str) -> Vec<String> {
    vec![
        exe.to_string(),
        "--scale".to_string(),
        scale.to_string(),
        "--degree".to_string(),
        degree.to_string(),
        "--gen-type".to_string(),
        "erdos_renyi".to_string(),
        "--save-file".to_string(),
        save.to_string(),
    ]
}

fn load_cmd(exe: &str, load: &str) -> Vec<String> {
    vec![exe.to_string(), "--load-file".to_string(), load.to_string()]
}

fn convert_cmd(exe: &str, load: &str, save: &str) -> Vec<String> {
    vec![
        exe.to_string(),
        "--load-file".to_string(),
        load.to_string(),
        "--save-file".to_string(),
        save.to_string(),
    ]
}
