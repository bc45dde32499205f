//! Definitions and declarations output.
//!
//! Both files are rendered completely in memory and then written with
//! truncation, so a run never merges with previous output.

use std::fs;
use std::path::Path;

use crate::error::{GenError, Result};
use crate::types::{DeclarationEntry, EncodedArray};

/// Element type used when none is configured.
pub const DEFAULT_ELEMENT_TYPE: &str = "uint8_t";

/// First line of the definitions output.
pub const DEFINITIONS_PREAMBLE: &str = "#include <cstdint>\n";

/// Leading lines of the declarations output.
pub const DECLARATIONS_PREAMBLE: [&str; 4] = ["#include <stdint.h>", "", "#pragma once", ""];

/// The pair of generated source files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSources {
    pub definitions: String,
    pub declarations: String,
}

impl GeneratedSources {
    /// Write both outputs, replacing any previous contents.
    ///
    /// Missing parent directories are created. A failure on the second
    /// file leaves the first one written.
    pub fn write(&self, definitions: &Path, declarations: &Path) -> Result<()> {
        write_output(definitions, &self.definitions)?;
        write_output(declarations, &self.declarations)?;
        Ok(())
    }
}

/// Renders encoded arrays into C/C++ source text.
#[derive(Debug, Clone)]
pub struct Emitter {
    element_type: String,
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new(DEFAULT_ELEMENT_TYPE)
    }
}

impl Emitter {
    pub fn new(element_type: impl Into<String>) -> Self {
        Self {
            element_type: element_type.into(),
        }
    }

    pub fn element_type(&self) -> &str {
        &self.element_type
    }

    /// Array definition, e.g. `uint8_t tiles_mcz[]={ ... };` plus a blank line.
    pub fn definition(&self, array: &EncodedArray) -> String {
        format!(
            "{} {}[]={{\n{}}};\n\n",
            self.element_type, array.symbol, array.body
        )
    }

    /// Extern declaration, e.g. `extern uint8_t tiles_mcz[512];`.
    pub fn declaration(&self, entry: &DeclarationEntry) -> String {
        format!("extern {} {}[{}];", self.element_type, entry.symbol, entry.len)
    }

    /// Render both outputs in the order the arrays are given.
    pub fn render(&self, arrays: &[EncodedArray]) -> GeneratedSources {
        let mut definitions = String::from(DEFINITIONS_PREAMBLE);
        let mut declarations: Vec<String> =
            DECLARATIONS_PREAMBLE.iter().map(|s| s.to_string()).collect();

        for array in arrays {
            definitions.push_str(&self.definition(array));
            declarations.push(self.declaration(&array.declaration()));
        }

        GeneratedSources {
            definitions,
            declarations: declarations.join("\n"),
        }
    }
}

fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| GenError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })?;
        }
    }

    fs::write(path, contents).map_err(|e| GenError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write output: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::encode_body;
    use crate::types::SymbolName;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn array(name: &str, bytes: &[u8], chunk: usize) -> EncodedArray {
        EncodedArray {
            symbol: SymbolName::from_file_name(name),
            body: encode_body(bytes, chunk),
            len: bytes.len(),
        }
    }

    #[test]
    fn test_render_empty() {
        let sources = Emitter::default().render(&[]);

        assert_eq!(sources.definitions, "#include <cstdint>\n");
        assert_eq!(sources.declarations, "#include <stdint.h>\n\n#pragma once\n");
    }

    #[test]
    fn test_render_arrays() {
        let arrays = vec![
            array("tiles.mcz", &[1, 2, 3, 4, 5], 4),
            array("font.rle", &[0xff], 4),
        ];

        let sources = Emitter::default().render(&arrays);

        assert_eq!(
            sources.definitions,
            "#include <cstdint>\n\
             uint8_t tiles_mcz[]={\n    0x01,0x02,0x03,0x04,\n    0x05\n};\n\n\
             uint8_t font[]={\n    0xff\n};\n\n"
        );
        assert_eq!(
            sources.declarations,
            "#include <stdint.h>\n\n#pragma once\n\n\
             extern uint8_t tiles_mcz[5];\n\
             extern uint8_t font[1];"
        );
    }

    #[test]
    fn test_zero_length_array() {
        let arrays = vec![array("empty.bin", &[], 32)];

        let sources = Emitter::default().render(&arrays);

        assert!(sources.definitions.ends_with("uint8_t empty_bin[]={\n};\n\n"));
        assert!(sources.declarations.ends_with("extern uint8_t empty_bin[0];"));
    }

    #[test]
    fn test_custom_element_type() {
        let emitter = Emitter::new("const unsigned char");
        let sources = emitter.render(&[array("a.bin", &[7], 32)]);

        assert!(sources.definitions.contains("const unsigned char a_bin[]={"));
        assert!(sources
            .declarations
            .ends_with("extern const unsigned char a_bin[1];"));
    }

    #[test]
    fn test_write_creates_parents_and_truncates() {
        let dir = tempdir().unwrap();
        let defs = dir.path().join("gen/src/data.cpp");
        let decls = dir.path().join("gen/src/data.h");

        fs::create_dir_all(defs.parent().unwrap()).unwrap();
        fs::write(&defs, "stale content that is much longer than the new output").unwrap();

        let sources = Emitter::default().render(&[]);
        sources.write(&defs, &decls).unwrap();

        assert_eq!(fs::read_to_string(&defs).unwrap(), sources.definitions);
        assert_eq!(fs::read_to_string(&decls).unwrap(), sources.declarations);
    }

    #[test]
    fn test_write_to_directory_fails() {
        let dir = tempdir().unwrap();
        let sources = Emitter::default().render(&[]);

        let result = sources.write(dir.path(), &dir.path().join("data.h"));

        assert!(matches!(result, Err(GenError::Io { .. })));
    }
}
