//! ANSI-colored status lines for terminal output.
//!
//! Presentation only: a constant color table and thin tag formatters. All
//! status lines go to stderr so stdout stays clean for report data.

pub const RED: &str = "\x1b[0;31m";
pub const GREEN: &str = "\x1b[0;32m";
pub const YELLOW: &str = "\x1b[1;33m";
pub const BLUE: &str = "\x1b[0;34m";
pub const RESET: &str = "\x1b[0m";

/// Render a tagged status line, e.g. `[INFO] message` with a colored tag.
pub fn paint(color: &str, tag: &str, message: &str) -> String {
    format!("{color}[{tag}]{RESET} {message}")
}

pub fn info(message: &str) {
    eprintln!("{}", paint(BLUE, "INFO", message));
}

pub fn success(message: &str) {
    eprintln!("{}", paint(GREEN, "SUCCESS", message));
}

pub fn warning(message: &str) {
    eprintln!("{}", paint(YELLOW, "WARNING", message));
}

pub fn error(message: &str) {
    eprintln!("{}", paint(RED, "ERROR", message));
}
