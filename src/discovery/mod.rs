//! Project discovery for gendata.
//!
//! This module locates the `gendata.yaml` manifest for a project root and
//! collects the resource files the manifest points at.
//!
//! # Example
//!
//! ```ignore
//! use gendata::discovery::discover;
//!
//! let result = discover("./my-game", None)?;
//! let config = result.into_config()?;
//! ```

mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::config::GenConfig;
use crate::error::Result;

pub use manifest::{FormatRule, Manifest, Order};
pub use scanner::{scan_resources, ScanOptions};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "gendata.yaml";

/// Result of looking up a project's manifest.
#[derive(Debug)]
pub struct DiscoveryResult {
    /// The project root directory; relative manifest paths resolve against it.
    pub root: PathBuf,

    /// The loaded manifest (default if none was found).
    pub manifest: Manifest,

    /// Where the manifest was read from, if anywhere.
    pub manifest_path: Option<PathBuf>,
}

impl DiscoveryResult {
    /// Whether a manifest file was found.
    pub fn has_manifest(&self) -> bool {
        self.manifest_path.is_some()
    }

    /// Resolve the manifest into an explicit configuration.
    pub fn into_config(self) -> Result<GenConfig> {
        GenConfig::from_manifest(&self.root, &self.manifest)
    }
}

/// Look up the manifest for a project root.
///
/// An explicit `manifest` path must exist. Otherwise `gendata.yaml` in
/// `root` is used if present, and the default manifest if not.
pub fn discover(root: impl AsRef<Path>, manifest: Option<&Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();

    let manifest_path = match manifest {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let candidate = root.join(MANIFEST_FILENAME);
            candidate.is_file().then_some(candidate)
        }
    };

    let manifest = match &manifest_path {
        Some(path) => Manifest::load(path)?,
        None => Manifest::default(),
    };

    Ok(DiscoveryResult {
        root,
        manifest,
        manifest_path,
    })
}
