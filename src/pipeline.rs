//! The embedding pipeline.
//!
//! Collect -> name -> normalize -> encode -> emit, once per run. Each stage
//! is exposed separately so the `list` and `validate` commands can stop
//! before anything is written.

use std::path::PathBuf;

use serde::Serialize;

use crate::config::GenConfig;
use crate::discovery::scan_resources;
use crate::error::Result;
use crate::registry::{RegistryBuilder, ResourceRegistry};
use crate::render::{encode_body, Emitter, GeneratedSources};
use crate::types::{EncodedArray, ResourceFile};

/// What happened to one resource during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceSummary {
    pub path: PathBuf,
    pub symbol: String,
    /// Size on disk.
    pub raw_len: usize,
    /// Element count of the emitted array.
    pub len: usize,
}

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct Report {
    pub resources: Vec<ResourceSummary>,
    pub definitions: PathBuf,
    pub declarations: PathBuf,
}

/// Runs the pipeline for one configuration.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GenConfig,
    emitter: Emitter,
}

impl Generator {
    pub fn new(config: GenConfig) -> Result<Self> {
        config.validate()?;
        let emitter = Emitter::new(config.element_type.clone());

        Ok(Self { config, emitter })
    }

    pub fn config(&self) -> &GenConfig {
        &self.config
    }

    /// Paths of every resource to embed, in emission order.
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        scan_resources(&self.config.source, &self.config.scan)
    }

    /// Read every resource from disk without checking symbols.
    pub fn read_all(&self) -> Result<Vec<ResourceFile>> {
        self.collect()?
            .iter()
            .map(|path| ResourceFile::read(path))
            .collect()
    }

    /// Read every resource and check that symbols are valid and unique.
    pub fn load(&self) -> Result<ResourceRegistry> {
        let mut builder = RegistryBuilder::new();
        builder.add_all(self.read_all()?);
        builder.build()
    }

    /// Normalize and encode one resource.
    pub fn encode(&self, resource: &ResourceFile) -> Result<EncodedArray> {
        let payload = self.config.formats.normalize(resource)?;

        Ok(EncodedArray {
            symbol: resource.symbol.clone(),
            body: encode_body(payload, self.config.chunk_size),
            len: payload.len(),
        })
    }

    /// Summaries without encoding, for listing.
    pub fn summarize(&self, registry: &ResourceRegistry) -> Result<Vec<ResourceSummary>> {
        registry
            .iter()
            .map(|resource| {
                let payload = self.config.formats.normalize(resource)?;
                Ok(summary(resource, payload.len()))
            })
            .collect()
    }

    /// Produce both outputs in memory.
    pub fn generate(&self) -> Result<(GeneratedSources, Vec<ResourceSummary>)> {
        let registry = self.load()?;

        let mut arrays = Vec::with_capacity(registry.len());
        let mut summaries = Vec::with_capacity(registry.len());
        for resource in &registry {
            let array = self.encode(resource)?;
            summaries.push(summary(resource, array.len));
            arrays.push(array);
        }

        Ok((self.emitter.render(&arrays), summaries))
    }

    /// Generate and write both outputs.
    pub fn run(&self) -> Result<Report> {
        let (sources, resources) = self.generate()?;
        sources.write(&self.config.definitions, &self.config.declarations)?;

        Ok(Report {
            resources,
            definitions: self.config.definitions.clone(),
            declarations: self.config.declarations.clone(),
        })
    }
}

fn summary(resource: &ResourceFile, len: usize) -> ResourceSummary {
    ResourceSummary {
        path: resource.path.clone(),
        symbol: resource.symbol.to_string(),
        raw_len: resource.len(),
        len,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenError;
    use std::fs;
    use std::path::Path;
    use tempfile::{tempdir, TempDir};

    fn project(files: &[(&str, &[u8])]) -> (TempDir, GenConfig) {
        let dir = tempdir().unwrap();
        let data = dir.path().join("data");
        fs::create_dir_all(&data).unwrap();
        for (name, bytes) in files {
            let path = data.join(name);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(path, bytes).unwrap();
        }

        let config = GenConfig::new(
            data,
            dir.path().join("src/data.cpp"),
            dir.path().join("src/data.h"),
        );
        (dir, config)
    }

    #[test]
    fn test_generate_orders_and_normalizes() {
        let mut mcz = vec![0xaa; 12];
        mcz.extend_from_slice(&[1, 2]);
        let (_dir, config) = project(&[("tiles.mcz", mcz.as_slice()), ("font.rle", &[9])]);

        let (_, summaries) = Generator::new(config).unwrap().generate().unwrap();

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].symbol, "font");
        assert_eq!(summaries[1].symbol, "tiles_mcz");
        assert_eq!(summaries[1].raw_len, 14);
        assert_eq!(summaries[1].len, 2);
    }

    #[test]
    fn test_run_writes_outputs() {
        let (dir, config) = project(&[("a.bin", &[0x10, 0x20])]);

        let report = Generator::new(config).unwrap().run().unwrap();

        let defs = fs::read_to_string(dir.path().join("src/data.cpp")).unwrap();
        let decls = fs::read_to_string(dir.path().join("src/data.h")).unwrap();
        assert_eq!(defs, "#include <cstdint>\nuint8_t a_bin[]={\n    0x10,0x20\n};\n\n");
        assert!(decls.ends_with("extern uint8_t a_bin[2];"));
        assert_eq!(report.resources.len(), 1);
    }

    #[test]
    fn test_missing_source_writes_nothing() {
        let dir = tempdir().unwrap();
        let config = GenConfig::new(
            dir.path().join("data"),
            dir.path().join("data.cpp"),
            dir.path().join("data.h"),
        );

        let result = Generator::new(config).unwrap().run();

        assert!(matches!(result, Err(GenError::Io { .. })));
        assert!(!dir.path().join("data.cpp").exists());
        assert!(!dir.path().join("data.h").exists());
    }

    #[test]
    fn test_truncated_container_aborts() {
        let (dir, config) = project(&[("bad.mcz", &[0; 5])]);

        let result = Generator::new(config).unwrap().run();

        match result {
            Err(GenError::TruncatedContainer { path, len, .. }) => {
                assert!(path.ends_with(Path::new("data/bad.mcz")));
                assert_eq!(len, 5);
            }
            other => panic!("expected truncated container, got {:?}", other),
        }
        assert!(!dir.path().join("src/data.cpp").exists());
    }

    #[test]
    fn test_collision_aborts() {
        let (_dir, config) = project(&[("tiles", &[1]), ("tiles.rle", &[2])]);

        let result = Generator::new(config).unwrap().generate();

        assert!(matches!(result, Err(GenError::SymbolCollision { .. })));
    }

    #[test]
    fn test_summarize_matches_generate() {
        let (_dir, config) = project(&[("a.mcz", &[0; 20]), ("b.bin", &[1, 2, 3])]);
        let generator = Generator::new(config).unwrap();

        let registry = generator.load().unwrap();
        let listed = generator.summarize(&registry).unwrap();
        let (_, generated) = generator.generate().unwrap();

        assert_eq!(listed, generated);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = GenConfig::new("data", "a.cpp", "a.h");
        config.chunk_size = 0;

        assert!(Generator::new(config).is_err());
    }
}
