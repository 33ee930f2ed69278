//! Algorithm benchmark sweep driver.
//!
//! Expands the test matrix (built-in or `--spec` overrides) into graph
//! sources, provisions generated graphs, runs the full algorithm × variant
//! sweep, and writes the JSON report plus a terminal summary.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use edgekit_benchmarks::config::{self, TestSpec};
use edgekit_benchmarks::error::{HarnessError, Result};
use edgekit_benchmarks::log;
use edgekit_benchmarks::provision::GraphProvisioner;
use edgekit_benchmarks::report::ReportEmitter;
use edgekit_benchmarks::sweep::{self, GraphSource, SweepOrchestrator};

#[derive(Parser)]
#[command(
    name = "bench-algorithms",
    about = "Run the EdgeKit algorithm benchmark sweep"
)]
struct Args {
    /// Build directory holding the toolchain executables.
    #[arg(long, default_value = "build")]
    build_dir: PathBuf,

    /// Project root; graph files under it are handed to executables as
    /// paths relative to the build directory.
    #[arg(long, default_value = ".")]
    project_root: PathBuf,

    /// Repetitions per benchmark cell.
    #[arg(long, default_value_t = 3)]
    runs: usize,

    /// Report output path.
    #[arg(long, default_value = "algorithm_benchmark_results.json")]
    output: PathBuf,

    /// Test specification overriding the built-in matrix: either a graph
    /// file path or `scale,degree,generator,edge,vertex,direction`.
    /// Repeatable.
    #[arg(long = "spec", value_name = "SPEC")]
    specs: Vec<String>,

    /// Also benchmark the user-registered extra graph files.
    #[arg(long)]
    use_user_graphs: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(code) => code,
        Err(e) => {
            log::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let build_dir = args
        .build_dir
        .canonicalize()
        .map_err(|_| HarnessError::MissingBuildDir(args.build_dir.clone()))?;
    let project_root = args.project_root.canonicalize()?;
    sweep::preflight(&build_dir)?;
    log::info(&format!("using build directory: {}", build_dir.display()));

    // Malformed spec strings are dropped with a warning, not a fatal error.
    let mut specs: Vec<TestSpec> = if args.specs.is_empty() {
        config::default_specs(&project_root)
    } else {
        let mut parsed = Vec::new();
        for raw in &args.specs {
            match raw.parse::<TestSpec>() {
                Ok(spec) => parsed.push(spec),
                Err(e) => log::warning(&format!("skipping test specification: {e}")),
            }
        }
        parsed
    };
    if args.use_user_graphs {
        specs.extend(config::user_graph_specs(&project_root));
    }

    let (files, generated) = config::partition(&specs);
    if files.is_empty() && generated.is_empty() {
        log::error("no valid graph files or generation specs to benchmark");
        return Ok(ExitCode::FAILURE);
    }

    for path in &files {
        log::info(&format!("graph file: {}", path.display()));
    }
    for spec in &generated {
        log::info(&format!(
            "generation spec: {} (2^{} = {} vertices, {} edges)",
            spec.graph_name(),
            spec.scale,
            spec.vertices(),
            spec.edges()
        ));
    }

    let provisioner = GraphProvisioner::new(&project_root, &build_dir);
    let mut sources: Vec<GraphSource> = files.into_iter().map(GraphSource::File).collect();
    for spec in generated {
        let artifact = provisioner.provision(&spec);
        sources.push(GraphSource::Generated { spec, artifact });
    }

    let orchestrator = SweepOrchestrator::new(&project_root, &build_dir, args.runs);
    let records = orchestrator.run(&sources)?;

    let mut emitter = ReportEmitter::new(&build_dir, args.runs);
    for record in records {
        emitter.record(record);
    }
    emitter.save(&args.output)?;
    emitter.print_summary();

    Ok(ExitCode::SUCCESS)
}
