//! List command implementation.
//!
//! Collects resources and prints what would be embedded, without writing
//! any output files.

use std::io::Write;

use clap::Args;

use crate::error::Result;
use crate::format::FormatRegistry;
use crate::output::{display_path, plural, Printer};
use crate::pipeline::{Generator, ResourceSummary};

use super::ProjectArgs;

/// List the resources that would be embedded
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Print a JSON array to stdout instead of a table
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let generator = Generator::new(args.project.discover()?.into_config()?)?;
    let registry = generator.load()?;
    let resources = generator.summarize(&registry)?;

    for rule in format_rules(&generator.config().formats) {
        printer.info("Format", &rule);
    }

    let mut stdout = std::io::stdout().lock();
    if args.json {
        writeln!(stdout, "{}", to_json(&resources)?)?;
    } else {
        for line in table(&resources) {
            writeln!(stdout, "{}", line)?;
        }
    }

    printer.success(
        "Found",
        &format!(
            "{} in {}",
            plural(resources.len(), "resource", "resources"),
            display_path(&generator.config().source)
        ),
    );

    Ok(())
}

fn to_json(resources: &[ResourceSummary]) -> Result<String> {
    Ok(serde_json::to_string_pretty(resources)?)
}

/// Active container rules, e.g. "*.mcz: strip 12-byte header".
fn format_rules(formats: &FormatRegistry) -> Vec<String> {
    formats
        .iter()
        .map(|(extension, transform)| format!("*.{}: {}", extension, transform))
        .collect()
}

/// One line per resource: symbol, element count, path.
fn table(resources: &[ResourceSummary]) -> Vec<String> {
    let width = resources
        .iter()
        .map(|r| r.symbol.len())
        .max()
        .unwrap_or(0);

    resources
        .iter()
        .map(|r| {
            format!(
                "{:<width$}  {:>8}  {}",
                r.symbol,
                r.len,
                display_path(&r.path),
                width = width
            )
        })
        .collect()
}
