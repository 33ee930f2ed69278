//! On-disk provisioning of generated graph artifacts.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::GenSpec;
use crate::log;
use crate::paths::PathResolver;
use crate::process::run_command;

pub const GENERATOR_EXECUTABLE: &str = "generate_and_print";

/// Generation gets a generous fixed deadline; large scales are slow.
const GENERATION_TIMEOUT: Duration = Duration::from_secs(600);

/// Materializes generated graphs through the external generator so later
/// benchmark cells can load them from disk.
pub struct GraphProvisioner {
    build_dir: PathBuf,
    graphs_dir: PathBuf,
    resolver: PathResolver,
}

impl GraphProvisioner {
    pub fn new(project_root: &Path, build_dir: &Path) -> Self {
        Self {
            build_dir: build_dir.to_path_buf(),
            graphs_dir: project_root.join("graphs"),
            resolver: PathResolver::new(project_root, build_dir),
        }
    }

    /// Generate the artifact for `spec`, returning its absolute path.
    ///
    /// Artifact names are derived from the generation parameters, so a rerun
    /// with the same spec overwrites the previous file instead of piling up.
    /// Returns `None` on failure, with the generator's stderr surfaced to
    /// the error log. The vertex/edge counts printed here are informational
    /// only.
    pub fn provision(&self, spec: &GenSpec) -> Option<PathBuf> {
        if let Err(e) = std::fs::create_dir_all(&self.graphs_dir) {
            log::error(&format!(
                "cannot create graphs directory {}: {e}",
                self.graphs_dir.display()
            ));
            return None;
        }

        let artifact = self.graphs_dir.join(spec.artifact_filename());
        let save_path = self.resolver.resolve(&artifact);

        let mut cmd = vec![self
            .build_dir
            .join(GENERATOR_EXECUTABLE)
            .display()
            .to_string()];
        cmd.extend(spec.generation_args());
        cmd.push("--save-file".to_string());
        cmd.push(save_path.display().to_string());

        log::info(&format!(
            "generating {}: 2^{} = {} vertices, {} edges",
            spec.graph_name(),
            spec.scale,
            spec.vertices(),
            spec.edges()
        ));

        let outcome = run_command(&cmd, &self.build_dir, GENERATION_TIMEOUT);
        if outcome.success {
            log::success(&format!("  wrote {}", artifact.display()));
            Some(artifact)
        } else {
            log::error(&format!("  generation failed: {}", outcome.stderr.trim()));
            None
        }
    }
}
