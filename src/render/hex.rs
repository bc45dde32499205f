//! Hex literal encoding for array bodies.
//!
//! Bytes are grouped into lines of `chunk_size` literals. A full line ends
//! with a trailing comma; a short final line does not:
//!
//! ```text
//!     0x00,0x01,0x02,0x03,
//!     0x04,0x05
//! ```

use std::fmt::Write;

use crate::error::{GenError, Result};

/// Default number of bytes per line.
pub const DEFAULT_CHUNK_SIZE: usize = 32;

/// Indentation in front of every literal line.
pub const INDENT: &str = "    ";

/// Encode `bytes` as newline-terminated lines of `0x..` literals.
///
/// Returns an empty string for empty input. `chunk_size` must be non-zero.
pub fn encode_body(bytes: &[u8], chunk_size: usize) -> String {
    assert!(chunk_size > 0, "chunk size must be non-zero");

    // "0xNN," per byte plus indent and newline per line
    let lines = bytes.len().div_ceil(chunk_size);
    let mut out = String::with_capacity(bytes.len() * 5 + lines * (INDENT.len() + 1));

    for chunk in bytes.chunks(chunk_size) {
        out.push_str(INDENT);
        for (i, byte) in chunk.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            let _ = write!(out, "0x{:02x}", byte);
        }
        if chunk.len() == chunk_size {
            out.push(',');
        }
        out.push('\n');
    }

    out
}

/// Decode a body produced by [`encode_body`] back into bytes.
pub fn decode_body(body: &str) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();

    for (line_no, line) in body.lines().enumerate() {
        for literal in line.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let digits = literal.strip_prefix("0x").ok_or_else(|| GenError::Parse {
                message: format!("line {}: expected 0x prefix in '{}'", line_no + 1, literal),
                help: None,
            })?;
            let byte = u8::from_str_radix(digits, 16).map_err(|e| GenError::Parse {
                message: format!("line {}: invalid hex literal '{}': {}", line_no + 1, literal, e),
                help: None,
            })?;
            bytes.push(byte);
        }
    }

    Ok(bytes)
}
