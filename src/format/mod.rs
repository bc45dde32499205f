//! Format-specific byte normalization.
//!
//! Some container formats carry metadata that consumers of the embedded
//! array do not want. The [`FormatRegistry`] maps a file extension to the
//! [`Transform`] applied to the raw bytes before encoding. Extensions with
//! no entry pass through unchanged.
//!
//! # Example
//!
//! ```
//! use gendata::format::{FormatRegistry, Transform};
//!
//! let mut formats = FormatRegistry::builtin();
//! formats.insert("pak", Transform::StripHeader { len: 4 });
//! assert!(formats.get("mcz").is_some());
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use crate::error::{GenError, Result};
use crate::types::ResourceFile;

/// Extension of the map container format.
pub const MCZ_EXTENSION: &str = "mcz";

/// Size of the fixed header at the start of every `.mcz` file.
pub const MCZ_HEADER_LEN: usize = 12;

/// A byte-range transform applied to a resource before encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Drop a fixed-size header. The header is never parsed.
    StripHeader { len: usize },
}

impl Transform {
    /// Apply the transform to `bytes` read from `path`.
    pub fn apply<'a>(&self, path: &Path, bytes: &'a [u8]) -> Result<&'a [u8]> {
        match *self {
            Transform::StripHeader { len } => {
                bytes
                    .get(len..)
                    .ok_or_else(|| GenError::TruncatedContainer {
                        path: path.to_path_buf(),
                        len: bytes.len(),
                        header: len,
                    })
            }
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::StripHeader { len } => write!(f, "strip {}-byte header", len),
        }
    }
}

/// Mapping from file extension to byte transform.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatRegistry {
    rules: BTreeMap<String, Transform>,
}

impl FormatRegistry {
    /// An empty registry; every resource passes through unchanged.
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry with the built-in container formats.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.insert(
            MCZ_EXTENSION,
            Transform::StripHeader {
                len: MCZ_HEADER_LEN,
            },
        );
        registry
    }

    /// Register (or replace) the transform for an extension.
    ///
    /// Extensions are matched case-sensitively and without the leading dot.
    pub fn insert(&mut self, extension: impl Into<String>, transform: Transform) -> &mut Self {
        let extension = extension.into();
        let extension = extension.trim_start_matches('.').to_string();
        self.rules.insert(extension, transform);
        self
    }

    /// Remove the transform for an extension, returning it if present.
    pub fn remove(&mut self, extension: &str) -> Option<Transform> {
        self.rules.remove(extension.trim_start_matches('.'))
    }

    /// Look up the transform for an extension.
    pub fn get(&self, extension: &str) -> Option<Transform> {
        self.rules.get(extension).copied()
    }

    /// Iterate over registered extensions and their transforms.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Transform)> {
        self.rules.iter().map(|(ext, t)| (ext.as_str(), *t))
    }

    /// Return the bytes to encode for a resource.
    pub fn normalize<'a>(&self, resource: &'a ResourceFile) -> Result<&'a [u8]> {
        match resource.format.as_deref().and_then(|ext| self.get(ext)) {
            Some(transform) => transform.apply(&resource.path, &resource.bytes),
            None => Ok(resource.bytes.as_slice()),
        }
    }
}
