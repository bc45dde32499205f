use clap::Parser;
use gendata::cli::{build::BuildArgs, Cli, Commands, ProjectArgs};
use gendata::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new().with_quiet(cli.quiet);

    let command = cli.command.unwrap_or_else(|| {
        Commands::Build(BuildArgs {
            project: ProjectArgs::at("."),
        })
    });

    match command {
        Commands::Build(args) => gendata::cli::build::run(args, &printer)?,
        Commands::List(args) => gendata::cli::list::run(args, &printer)?,
        Commands::Validate(args) => gendata::cli::validate::run(args, &printer)?,
        Commands::Init(args) => gendata::cli::init::run(args, &printer)?,
        Commands::Completions(args) => gendata::cli::completions::run(args)?,
    }

    Ok(())
}
