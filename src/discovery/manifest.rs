//! Project manifest (gendata.yaml) parsing.
//!
//! The manifest defines where resources are read from, where the two
//! generated files go, and how the output is formatted. Every field is
//! optional; an empty manifest reproduces the default layout
//! (`data/` -> `src/data.cpp` + `src/data.h`).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GenError, Result};
use crate::format::MCZ_HEADER_LEN;
use crate::render::{DEFAULT_CHUNK_SIZE, DEFAULT_ELEMENT_TYPE};

/// Order in which collected resources are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    /// Sorted by file name, reproducible across platforms.
    #[default]
    Sorted,
    /// Whatever order the directory listing returns.
    Listing,
}

/// A container format rule as written in the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatRule {
    /// Number of leading bytes to drop before encoding.
    pub strip_header: usize,
}

/// Project manifest loaded from gendata.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Directory holding the resource files.
    #[serde(default = "default_source")]
    pub source: PathBuf,

    /// Generated definitions file (array bodies).
    #[serde(default = "default_definitions")]
    pub definitions: PathBuf,

    /// Generated declarations file (extern signatures).
    #[serde(default = "default_declarations")]
    pub declarations: PathBuf,

    /// Bytes per line of hex literals.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// C/C++ type of each array element.
    #[serde(default = "default_element_type")]
    pub element_type: String,

    /// Emission order.
    #[serde(default)]
    pub order: Order,

    /// Descend into subdirectories of the source directory.
    #[serde(default)]
    pub recursive: bool,

    /// Directory name whose contents are archived and never embedded.
    /// An empty string disables the rule.
    #[serde(default = "default_archive_marker")]
    pub archive_marker: String,

    /// Extensions of generator scripts living next to the resources.
    #[serde(default = "default_script_extensions")]
    pub script_extensions: Vec<String>,

    /// Embed dot-files such as `.gitkeep` instead of skipping them.
    #[serde(default)]
    pub hidden: bool,

    /// Additional patterns to exclude from collection.
    #[serde(default)]
    pub excludes: Vec<String>,

    /// Container formats by extension, added to or overriding the builtins.
    #[serde(default)]
    pub formats: BTreeMap<String, FormatRule>,
}

fn default_source() -> PathBuf {
    PathBuf::from("data")
}

fn default_definitions() -> PathBuf {
    PathBuf::from("src/data.cpp")
}

fn default_declarations() -> PathBuf {
    PathBuf::from("src/data.h")
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

fn default_element_type() -> String {
    DEFAULT_ELEMENT_TYPE.to_string()
}

fn default_archive_marker() -> String {
    "old".to_string()
}

fn default_script_extensions() -> Vec<String> {
    vec!["py".to_string()]
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            source: default_source(),
            definitions: default_definitions(),
            declarations: default_declarations(),
            chunk_size: default_chunk_size(),
            element_type: default_element_type(),
            order: Order::default(),
            recursive: false,
            archive_marker: default_archive_marker(),
            script_extensions: default_script_extensions(),
            hidden: false,
            excludes: vec![],
            formats: BTreeMap::new(),
        }
    }
}

impl Manifest {
    /// Load manifest from a gendata.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| GenError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| GenError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check gendata.yaml syntax".to_string()),
        })
    }

    /// Serialize the manifest back to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| GenError::Parse {
            message: format!("Failed to serialize manifest: {}", e),
            help: None,
        })
    }

    /// Default manifest with the builtin `.mcz` rule spelled out.
    pub fn template() -> Self {
        let mut manifest = Self::default();
        manifest.formats.insert(
            "mcz".to_string(),
            FormatRule {
                strip_header: MCZ_HEADER_LEN,
            },
        );
        manifest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_manifest() {
        let yaml = "source: assets";
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(manifest.source, PathBuf::from("assets"));
        assert_eq!(manifest.definitions, PathBuf::from("src/data.cpp"));
        assert_eq!(manifest.chunk_size, 32);
    }

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r#"
source: res/
definitions: gen/assets.cpp
declarations: gen/assets.h
chunk_size: 16
element_type: const uint8_t
order: listing
recursive: true
archive_marker: attic
hidden: true
script_extensions:
  - py
  - sh
excludes:
  - "*.bak"
  - "**/temp/*"
formats:
  mcz:
    strip_header: 12
  pak:
    strip_header: 8
"#;
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(manifest.source, PathBuf::from("res/"));
        assert_eq!(manifest.definitions, PathBuf::from("gen/assets.cpp"));
        assert_eq!(manifest.declarations, PathBuf::from("gen/assets.h"));
        assert_eq!(manifest.chunk_size, 16);
        assert_eq!(manifest.element_type, "const uint8_t");
        assert_eq!(manifest.order, Order::Listing);
        assert!(manifest.recursive);
        assert_eq!(manifest.archive_marker, "attic");
        assert_eq!(manifest.script_extensions, vec!["py", "sh"]);
        assert_eq!(manifest.excludes, vec!["*.bak", "**/temp/*"]);
        assert_eq!(manifest.formats["pak"], FormatRule { strip_header: 8 });
    }

    #[test]
    fn test_default_manifest() {
        let manifest = Manifest::default();

        assert_eq!(manifest.source, PathBuf::from("data"));
        assert_eq!(manifest.declarations, PathBuf::from("src/data.h"));
        assert_eq!(manifest.element_type, "uint8_t");
        assert_eq!(manifest.order, Order::Sorted);
        assert!(!manifest.recursive);
        assert_eq!(manifest.archive_marker, "old");
        assert_eq!(manifest.script_extensions, vec!["py"]);
        assert!(manifest.formats.is_empty());
    }

    #[test]
    fn test_hidden_defaults_off() {
        assert!(!Manifest::parse("source: assets").unwrap().hidden);
        assert!(Manifest::parse("hidden: true").unwrap().hidden);
    }

    #[test]
    fn test_parse_empty_manifest() {
        let manifest = Manifest::parse("").unwrap();
        assert_eq!(manifest, Manifest::default());
    }

    #[test]
    fn test_parse_invalid_manifest() {
        let result = Manifest::parse("chunk_size: lots");
        assert!(matches!(result, Err(GenError::Parse { .. })));
    }

    #[test]
    fn test_template_round_trips() {
        let yaml = Manifest::template().to_yaml().unwrap();
        let parsed = Manifest::parse(&yaml).unwrap();

        assert_eq!(parsed, Manifest::template());
        assert!(yaml.contains("strip_header: 12"));
    }
}
