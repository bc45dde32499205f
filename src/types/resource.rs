//! Resource files collected from the source directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GenError, Result};

use super::symbol::SymbolName;

/// An opaque binary asset to be embedded.
///
/// Read once at collection time and immutable afterwards. The bytes are
/// the raw file contents; container headers are removed later by the
/// format registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceFile {
    /// Where the resource was found.
    pub path: PathBuf,
    /// Symbol derived from the base name.
    pub symbol: SymbolName,
    /// File extension without the dot, if any.
    pub format: Option<String>,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

impl ResourceFile {
    /// Build a resource from an in-memory byte buffer.
    pub fn new(path: impl Into<PathBuf>, bytes: Vec<u8>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let format = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned());

        Self {
            symbol: SymbolName::from_file_name(&file_name),
            format,
            bytes,
            path,
        }
    }

    /// Read a resource from disk.
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|e| GenError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read resource: {}", e),
        })?;

        Ok(Self::new(path, bytes))
    }

    /// Raw length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
