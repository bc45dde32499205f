//! Resolved generator configuration.
//!
//! `GenConfig` carries every input the pipeline needs as explicit values.
//! Nothing in the library reads the working directory; relative manifest
//! paths are resolved against a project root once, here.

use std::path::{Path, PathBuf};

use crate::discovery::{Manifest, ScanOptions};
use crate::error::{GenError, Result};
use crate::format::{FormatRegistry, Transform};
use crate::render::{DEFAULT_CHUNK_SIZE, DEFAULT_ELEMENT_TYPE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenConfig {
    /// Directory holding the resource files.
    pub source: PathBuf,
    /// Generated definitions file.
    pub definitions: PathBuf,
    /// Generated declarations file.
    pub declarations: PathBuf,
    /// Bytes per line of hex literals.
    pub chunk_size: usize,
    /// Array element type.
    pub element_type: String,
    pub scan: ScanOptions,
    pub formats: FormatRegistry,
}

impl GenConfig {
    /// Configuration with default formatting and collection rules.
    pub fn new(
        source: impl Into<PathBuf>,
        definitions: impl Into<PathBuf>,
        declarations: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source: source.into(),
            definitions: definitions.into(),
            declarations: declarations.into(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            element_type: DEFAULT_ELEMENT_TYPE.to_string(),
            scan: ScanOptions::default(),
            formats: FormatRegistry::builtin(),
        }
    }

    /// Resolve a manifest against a project root.
    pub fn from_manifest(root: &Path, manifest: &Manifest) -> Result<Self> {
        let mut formats = FormatRegistry::builtin();
        for (extension, rule) in &manifest.formats {
            formats.insert(
                extension.clone(),
                Transform::StripHeader {
                    len: rule.strip_header,
                },
            );
        }

        let config = Self {
            source: root.join(&manifest.source),
            definitions: root.join(&manifest.definitions),
            declarations: root.join(&manifest.declarations),
            chunk_size: manifest.chunk_size,
            element_type: manifest.element_type.clone(),
            scan: ScanOptions::from_manifest(manifest),
            formats,
        };
        config.validate()?;

        Ok(config)
    }

    /// Check values that cannot be expressed in the types.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(GenError::Config {
                message: "chunk size must be at least 1".to_string(),
                help: Some("Set chunk_size in gendata.yaml or pass --chunk-size".to_string()),
            });
        }

        if self.element_type.trim().is_empty() {
            return Err(GenError::Config {
                message: "element type must not be empty".to_string(),
                help: Some("Use a byte type such as uint8_t".to_string()),
            });
        }

        if self.definitions == self.declarations {
            return Err(GenError::Config {
                message: format!(
                    "definitions and declarations both point at {}",
                    self.definitions.display()
                ),
                help: Some("Give the two outputs different paths".to_string()),
            });
        }

        Ok(())
    }
}
