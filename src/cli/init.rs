//! Init command implementation.
//!
//! Writes a `gendata.yaml` manifest spelling out the default layout.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{scan_resources, Manifest, ScanOptions, MANIFEST_FILENAME};
use crate::error::{GenError, Result};
use crate::output::{display_path, plural, Printer};

/// Create a gendata.yaml manifest
#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing gendata.yaml
    #[arg(long)]
    pub force: bool,
}

const HEADER: &str = "# gendata project manifest\n\
# Resources in `source` are embedded into `definitions` (arrays) and\n\
# `declarations` (extern signatures). Paths are relative to this file.\n";

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(GenError::Config {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let manifest = Manifest::template();
    let yaml = format!("{}{}", HEADER, manifest.to_yaml()?);

    fs::write(&manifest_path, &yaml).map_err(|e| GenError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    let source = args.path.join(&manifest.source);
    match inspect_source(&source, &manifest) {
        SourceStatus::Found(count) => printer.info(
            "Discovered",
            &format!(
                "{} in {}",
                plural(count, "resource", "resources"),
                display_path(&source)
            ),
        ),
        SourceStatus::Missing => printer.warning(
            "Missing",
            &format!("{} does not exist yet", display_path(&source)),
        ),
        SourceStatus::Unreadable(reason) => printer.warning("Unreadable", &reason),
    }

    printer.success("Created", &display_path(&manifest_path));

    Ok(())
}

/// What the manifest's source directory currently holds.
#[derive(Debug, PartialEq, Eq)]
enum SourceStatus {
    Found(usize),
    Missing,
    Unreadable(String),
}

fn inspect_source(source: &Path, manifest: &Manifest) -> SourceStatus {
    if !source.exists() {
        return SourceStatus::Missing;
    }

    match scan_resources(source, &ScanOptions::from_manifest(manifest)) {
        Ok(files) => SourceStatus::Found(files.len()),
        Err(e) => SourceStatus::Unreadable(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn quiet() -> Printer {
        Printer::new().with_quiet(true)
    }

    #[test]
    fn test_init_creates_manifest() {
        let dir = tempdir().unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };
        run(args, &quiet()).unwrap();

        let manifest_path = dir.path().join(MANIFEST_FILENAME);
        let content = fs::read_to_string(&manifest_path).unwrap();
        assert!(content.starts_with("# gendata project manifest"));

        let manifest = Manifest::load(&manifest_path).unwrap();
        assert_eq!(manifest, Manifest::template());
    }

    #[test]
    fn test_init_errors_if_manifest_exists() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "source: res").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };

        let result = run(args, &quiet());
        assert!(matches!(result, Err(GenError::Config { .. })));
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "source: res").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: true,
        };
        run(args, &quiet()).unwrap();

        let manifest = Manifest::load(&dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert_eq!(manifest.source, PathBuf::from("data"));
    }

    #[test]
    fn test_inspect_source() {
        let dir = tempdir().unwrap();
        let manifest = Manifest::template();
        let source = dir.path().join("data");

        assert_eq!(inspect_source(&source, &manifest), SourceStatus::Missing);

        fs::write(&source, "not a directory").unwrap();
        match inspect_source(&source, &manifest) {
            SourceStatus::Unreadable(reason) => assert!(reason.contains("not a directory")),
            other => panic!("expected unreadable source, got {:?}", other),
        }

        fs::remove_file(&source).unwrap();
        fs::create_dir_all(&source).unwrap();
        fs::write(source.join("tiles.mcz"), [0u8; 12]).unwrap();
        fs::write(source.join("gendata.py"), "").unwrap();
        assert_eq!(inspect_source(&source, &manifest), SourceStatus::Found(1));
    }
}
