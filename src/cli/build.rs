//! Build command implementation.
//!
//! Runs the full pipeline and writes the definitions and declarations files.

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::pipeline::{Generator, ResourceSummary};

use super::ProjectArgs;

/// Generate the definitions and declarations files
#[derive(Args, Debug, Clone, Default)]
pub struct BuildArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let discovery = args.project.discover()?;
    if let Some(path) = &discovery.manifest_path {
        printer.info("Manifest", &display_path(path));
    }

    let generator = Generator::new(discovery.into_config()?)?;
    printer.status("Scanning", &display_path(&generator.config().source));

    let report = generator.run()?;

    for resource in &report.resources {
        printer.status("Embedding", &describe(resource, printer));
    }
    printer.status("Writing", &display_path(&report.definitions));
    printer.status("Writing", &display_path(&report.declarations));

    let total = report.resources.len();
    printer.success(
        "Finished",
        &format!("embedded {}", plural(total, "resource", "resources")),
    );

    Ok(())
}

/// "data/tiles.mcz -> tiles_mcz (500 bytes, 12 stripped)"
fn describe(resource: &ResourceSummary, printer: &Printer) -> String {
    let size = if resource.len == resource.raw_len {
        plural(resource.len, "byte", "bytes")
    } else {
        format!(
            "{}, {} stripped",
            plural(resource.len, "byte", "bytes"),
            resource.raw_len - resource.len
        )
    };

    format!(
        "{} {} {} ({})",
        display_path(&resource.path),
        printer.dim("->"),
        resource.symbol,
        size
    )
}
