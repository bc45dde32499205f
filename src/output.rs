//! Terminal output formatting for the gendata CLI.
//!
//! Cargo-style status lines with right-aligned coloured verbs. All status
//! output goes to stderr; stdout is reserved for machine-readable output
//! (`list --json`, shell completions).

use std::io::{self, IsTerminal, Write};
use std::path::Path;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Terminal-aware status printer.
///
/// Colour is enabled when stderr is a terminal. A quiet printer drops
/// per-resource `status` lines but still reports warnings, errors and the
/// final summary.
#[derive(Debug, Clone)]
pub struct Printer {
    color: bool,
    quiet: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
            quiet: false,
        }
    }

    /// Suppress per-resource status lines.
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Force colour on or off, e.g. for captured output.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Progress line, e.g. "   Embedding data/tiles.mcz -> tiles_mcz".
    pub fn status(&self, verb: &str, message: &str) {
        if !self.quiet {
            self.print_line(GREEN, verb, message);
        }
    }

    /// Completion line; printed even when quiet.
    pub fn success(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    pub fn info(&self, verb: &str, message: &str) {
        if !self.quiet {
            self.print_line(CYAN, verb, message);
        }
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.print_line(YELLOW, verb, message);
    }

    pub fn error(&self, verb: &str, message: &str) {
        self.print_line(RED, verb, message);
    }

    /// Format a string as dim/grey.
    pub fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    /// Format a diagnostic severity label with colour.
    pub fn severity(&self, label: &str, is_error: bool) -> String {
        let color = if is_error { RED } else { YELLOW };
        if self.color {
            format!("{BOLD}{color}{label}{RESET}")
        } else {
            label.to_string()
        }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn print_line(&self, color: &str, verb: &str, message: &str) {
        let mut stderr = io::stderr().lock();
        if self.color {
            let _ = writeln!(stderr, "{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}");
        } else {
            let _ = writeln!(stderr, "{verb:>VERB_WIDTH$} {message}");
        }
    }
}

/// Pluralize a count: `plural(1, "resource", "resources")` → "1 resource".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// Return a relative display path when possible, absolute otherwise.
pub fn display_path(path: &Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            let s = relative.display().to_string();
            if s.is_empty() {
                return ".".to_string();
            }
            return s;
        }
    }
    path.display().to_string()
}
