//! File system scanner for collecting resource files.
//!
//! Lists the source directory (flat by default) and keeps every regular
//! file that is not hidden, not a generator script, not under the archive
//! marker, and not matched by an exclude pattern.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::{GenError, Result};

use super::manifest::{Manifest, Order};

/// Collection rules for [`scan_resources`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    pub order: Order,
    pub recursive: bool,
    /// Directory name to skip entirely; empty disables.
    pub archive_marker: String,
    /// Extensions (without dot) of generator scripts to skip.
    pub script_extensions: Vec<String>,
    /// Collect dot-files and descend into dot-directories.
    pub hidden: bool,
    /// Glob-like patterns matched against the path relative to the source.
    pub excludes: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::from_manifest(&Manifest::default())
    }
}

impl ScanOptions {
    pub fn from_manifest(manifest: &Manifest) -> Self {
        Self {
            order: manifest.order,
            recursive: manifest.recursive,
            archive_marker: manifest.archive_marker.clone(),
            script_extensions: manifest.script_extensions.clone(),
            hidden: manifest.hidden,
            excludes: manifest.excludes.clone(),
        }
    }

    /// Check if a generator script extension applies to the path.
    pub fn is_script(&self, path: &Path) -> bool {
        path.extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| self.script_extensions.iter().any(|s| s == ext))
    }

    /// Check if any component of a relative path is the archive marker.
    pub fn is_archived(&self, relative: &Path) -> bool {
        !self.archive_marker.is_empty()
            && relative
                .components()
                .any(|c| c.as_os_str() == OsStr::new(&self.archive_marker))
    }

    /// Check if a relative path matches one of the exclude patterns.
    pub fn is_excluded(&self, relative: &Path) -> bool {
        let path_str = relative.to_string_lossy().replace('\\', "/");

        self.excludes
            .iter()
            .any(|pattern| matches_pattern(&path_str, pattern))
    }

    fn skips(&self, relative: &Path) -> bool {
        self.is_script(relative) || self.is_archived(relative) || self.is_excluded(relative)
    }
}

/// Collect resource files from `source`.
///
/// Fails if the directory is missing or cannot be listed. An empty
/// directory yields an empty list.
pub fn scan_resources(source: &Path, options: &ScanOptions) -> Result<Vec<PathBuf>> {
    let metadata = std::fs::metadata(source).map_err(|e| GenError::Io {
        path: source.to_path_buf(),
        message: format!("Failed to read source directory: {}", e),
    })?;
    if !metadata.is_dir() {
        return Err(GenError::Io {
            path: source.to_path_buf(),
            message: "Source is not a directory".to_string(),
        });
    }

    let mut walker = WalkDir::new(source).min_depth(1).follow_links(true);
    if !options.recursive {
        walker = walker.max_depth(1);
    }
    if options.order == Order::Sorted {
        walker = walker.sort_by_file_name();
    }

    let mut files = Vec::new();
    let entries = walker
        .into_iter()
        .filter_entry(|entry| !is_archive_dir(entry, options) && !is_hidden(entry, options));

    for entry in entries {
        let entry = entry.map_err(|e| GenError::Io {
            path: e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| source.to_path_buf()),
            message: format!("Failed to list directory: {}", e),
        })?;

        // Directories are walked (when recursive), never embedded
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(source).unwrap_or(path);
        if options.skips(relative) {
            continue;
        }

        files.push(path.to_path_buf());
    }

    Ok(files)
}

fn is_archive_dir(entry: &DirEntry, options: &ScanOptions) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && !options.archive_marker.is_empty()
        && entry.file_name() == OsStr::new(&options.archive_marker)
}

fn is_hidden(entry: &DirEntry, options: &ScanOptions) -> bool {
    !options.hidden && entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

/// Simple glob pattern matching.
fn matches_pattern(path: &str, pattern: &str) -> bool {
    if let Some(suffix) = pattern.strip_prefix("**/") {
        // **/dir/* matches anything inside dir anywhere in the path
        if let Some(dir) = suffix.strip_suffix("/*") {
            return path.starts_with(&format!("{}/", dir))
                || path.contains(&format!("/{}/", dir));
        }
        return path.ends_with(suffix);
    }

    if let Some(suffix) = pattern.strip_prefix('*') {
        if !pattern.contains('/') {
            return path.ends_with(suffix);
        }
    }

    if let Some(prefix) = pattern.strip_suffix("/*") {
        return path.starts_with(&format!("{}/", prefix));
    }

    // Exact file name or relative path
    path == pattern || path.rsplit('/').next() == Some(pattern)
}
