//! Bounded execution of external toolchain processes.
//!
//! Everything the harness measures bottoms out here: one child process, run
//! to completion or to a deadline, with stdout/stderr captured. The contract
//! is deliberately non-throwing — a non-zero exit, a missing executable, and
//! a timeout all come back as the same [`ProcessOutcome`] shape with
//! `success = false`, so callers can treat "run and measure" as a single
//! infallible operation.

use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Default per-invocation deadline for benchmark cells.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// How often the wait loop polls a still-running child.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Result of one external invocation. Never mutated after creation.
#[derive(Debug, Clone)]
pub struct ProcessOutcome {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub elapsed: Duration,
    /// The exact command line that was executed, space-joined.
    pub command: String,
}

impl ProcessOutcome {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Run `cmd` (program followed by its arguments) in `cwd`, waiting at most
/// `timeout` for it to exit.
///
/// A timeout kills the child and reports `elapsed` equal to the bound
/// itself, with a distinguishing message in `stderr`. Launch failures are
/// folded into the same shape with the OS error text.
pub fn run_command(cmd: &[String], cwd: &Path, timeout: Duration) -> ProcessOutcome {
    let rendered = cmd.join(" ");
    let (program, args) = match cmd.split_first() {
        Some(split) => split,
        None => return launch_failure(rendered, "empty command line".to_string()),
    };

    let start = Instant::now();
    let mut child = match Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(e) => return launch_failure(rendered, e.to_string()),
    };

    // Drain both pipes on their own threads so a chatty child cannot fill a
    // pipe buffer and deadlock against the poll loop below.
    let stdout_pipe = child.stdout.take();
    let stderr_pipe = child.stderr.take();
    let stdout_reader = thread::spawn(move || drain(stdout_pipe));
    let stderr_reader = thread::spawn(move || drain(stderr_pipe));

    let deadline = start + timeout;
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break Some(status),
            Ok(None) => {
                if Instant::now() >= deadline {
                    let _ = child.kill();
                    let _ = child.wait();
                    break None;
                }
                thread::sleep(POLL_INTERVAL);
            }
            Err(_) => {
                let _ = child.kill();
                let _ = child.wait();
                break None;
            }
        }
    };

    let stdout = stdout_reader.join().unwrap_or_default();
    let stderr = stderr_reader.join().unwrap_or_default();

    match status {
        Some(status) => ProcessOutcome {
            success: status.success(),
            stdout,
            stderr,
            exit_code: status.code().unwrap_or(-1),
            elapsed: start.elapsed(),
            command: rendered,
        },
        None => ProcessOutcome {
            success: false,
            stdout,
            stderr: format!("timeout expired after {:.0}s", timeout.as_secs_f64()),
            exit_code: -1,
            elapsed: timeout,
            command: rendered,
        },
    }
}

fn launch_failure(command: String, message: String) -> ProcessOutcome {
    ProcessOutcome {
        success: false,
        stdout: String::new(),
        stderr: message,
        exit_code: -1,
        elapsed: Duration::ZERO,
        command,
    }
}

fn drain<R: Read>(pipe: Option<R>) -> String {
    let mut buf = Vec::new();
    if let Some(mut pipe) = pipe {
        let _ = pipe.read_to_end(&mut buf);
    }
    String::from_utf8_lossy(&buf).into_owned()
}
