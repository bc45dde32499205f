//! Validate command implementation.

use clap::Args;

use crate::error::{GenError, Result};
use crate::output::{display_path, plural, Printer};
use crate::pipeline::Generator;
use crate::validation::{print_diagnostics, validate_resources, ValidationResult};

use super::ProjectArgs;

/// Check resources for naming and format problems without writing
#[derive(Args, Debug, Clone, Default)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let result = check(&args, printer)?;
    print_diagnostics(&result, printer);

    if result.has_errors() {
        return Err(GenError::Validation {
            message: plural(result.error_count(), "error", "errors"),
            help: Some("Fix the problems above, then run gendata build".to_string()),
        });
    }

    Ok(())
}

/// Collect and check resources. Only I/O problems are returned as errors.
fn check(args: &ValidateArgs, printer: &Printer) -> Result<ValidationResult> {
    let generator = Generator::new(args.project.discover()?.into_config()?)?;
    let config = generator.config();

    let resources = generator.read_all()?;
    printer.status(
        "Checking",
        &format!(
            "{} in {}",
            plural(resources.len(), "resource", "resources"),
            display_path(&config.source)
        ),
    );

    Ok(validate_resources(&resources, &config.formats))
}
