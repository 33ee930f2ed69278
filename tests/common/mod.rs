//! Shared test utilities: fake toolchain executables as shell scripts.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Write an executable `/bin/sh` script named `name` into `dir`.
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("failed to write script");
    let mut perms = fs::metadata(&path).expect("script metadata").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("failed to chmod script");
    path
}

/// A fake build directory where every toolchain executable succeeds
/// immediately.
pub fn fake_build_dir(dir: &Path) {
    for exe in [
        "generate_and_print",
        "bfs",
        "bfs_threaded",
        "bfs_threaded_benchmark",
        "bfs_accel",
        "tc",
        "tc_threaded",
        "tc_threaded_benchmark",
        "tc_accel",
    ] {
        write_script(dir, exe, "exit 0");
    }
}
