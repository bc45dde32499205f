pub mod build;
pub mod completions;
pub mod init;
pub mod list;
pub mod validate;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::discovery::{discover, DiscoveryResult, Order};
use crate::error::Result;

/// gendata - embed binary resources as C/C++ byte arrays
#[derive(Parser, Debug)]
#[command(name = "gendata")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Only print warnings, errors and the final summary
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Defaults to `build` with default options
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the definitions and declarations files
    Build(build::BuildArgs),

    /// List the resources that would be embedded
    List(list::ListArgs),

    /// Check resources for naming and format problems without writing
    Validate(validate::ValidateArgs),

    /// Create a gendata.yaml manifest
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Options shared by commands that read a project.
///
/// Relative paths resolve against `--root`.
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Project root directory
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Manifest file (default: gendata.yaml in the root, if present)
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Resource directory
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Definitions output file
    #[arg(long)]
    pub definitions: Option<PathBuf>,

    /// Declarations output file
    #[arg(long)]
    pub declarations: Option<PathBuf>,

    /// Bytes per line of hex literals
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Emit in directory-listing order instead of sorted by name
    #[arg(long)]
    pub listing_order: bool,
}

impl ProjectArgs {
    /// Look up the manifest and apply command-line overrides to it.
    pub fn discover(&self) -> Result<DiscoveryResult> {
        let mut discovery = discover(&self.root, self.manifest.as_deref())?;
        let manifest = &mut discovery.manifest;

        if let Some(source) = &self.source {
            manifest.source = source.clone();
        }
        if let Some(definitions) = &self.definitions {
            manifest.definitions = definitions.clone();
        }
        if let Some(declarations) = &self.declarations {
            manifest.declarations = declarations.clone();
        }
        if let Some(chunk_size) = self.chunk_size {
            manifest.chunk_size = chunk_size;
        }
        if self.listing_order {
            manifest.order = Order::Listing;
        }

        Ok(discovery)
    }

    /// Project options for a root directory with no overrides.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }
}
