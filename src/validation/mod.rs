//! Validation system for gendata resources.
//!
//! Runs every check against the collected resources and reports errors
//! and warnings without writing any output. Used by `gendata validate`.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::format::FormatRegistry;
use crate::output::{display_path, Printer};
use crate::types::ResourceFile;

/// Run all validation checks against the resources.
pub fn validate_resources(
    resources: &[ResourceFile],
    formats: &FormatRegistry,
) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_identifiers(resources));
    result.merge(checks::check_collisions(resources));
    result.merge(checks::check_payloads(resources, formats));

    result
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        for line in format_diagnostic(d, printer) {
            eprintln!("{}", line);
        }
    }

    let errors = result.error_count();
    let warnings = result.warning_count();

    if errors > 0 {
        printer.error("Failed", &format!("{} error(s), {} warning(s)", errors, warnings));
    } else if warnings > 0 {
        printer.warning("Finished", &format!("{} warning(s)", warnings));
    } else {
        printer.success("Finished", "no problems found");
    }
}

/// Lines for one diagnostic: headline, location, help.
fn format_diagnostic(d: &Diagnostic, printer: &Printer) -> Vec<String> {
    let label = printer.severity(&d.severity.to_string(), d.severity == Severity::Error);
    let mut lines = vec![format!("{}[{}]: {}", label, d.code, d.message)];

    if let Some(path) = &d.path {
        lines.push(format!("  {} {}", printer.dim("-->"), display_path(path)));
    }
    if let Some(help) = &d.help {
        lines.push(format!("  {} {}", printer.dim("help:"), help));
    }

    lines
}
