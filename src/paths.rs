//! Path translation between the harness and the toolchain executables.
//!
//! Executables run inside the build directory and expect load/save paths
//! relative to it; the harness tracks graph files by absolute path. The
//! resolver maps one to the other deterministically, with no filesystem
//! access.

use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone)]
pub struct PathResolver {
    project_root: PathBuf,
    working_dir: PathBuf,
}

impl PathResolver {
    pub fn new(project_root: &Path, working_dir: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            working_dir: working_dir.to_path_buf(),
        }
    }

    /// The path string an executable running in the working directory should
    /// be handed for `file`.
    ///
    /// Absolute paths under the project root become paths relative to the
    /// working directory; absolute paths outside the root pass through
    /// unchanged. Already-relative paths are returned as-is, making the
    /// operation idempotent.
    pub fn resolve(&self, file: &Path) -> PathBuf {
        if !file.is_absolute() {
            return file.to_path_buf();
        }
        if !file.starts_with(&self.project_root) {
            return file.to_path_buf();
        }
        relative_to(file, &self.working_dir)
    }
}

/// Relative path from `base` to `target` via their longest common prefix.
fn relative_to(target: &Path, base: &Path) -> PathBuf {
    let target: Vec<Component> = target.components().collect();
    let base: Vec<Component> = base.components().collect();
    let common = target
        .iter()
        .zip(base.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut rel = PathBuf::new();
    for _ in common..base.len() {
        rel.push("..");
    }
    for comp in &target[common..] {
        rel.push(comp.as_os_str());
    }
    if rel.as_os_str().is_empty() {
        rel.push(".");
    }
    rel
}
