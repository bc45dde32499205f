//! Encoded arrays and their declarations.

use serde::Serialize;

use super::symbol::SymbolName;

/// The textual form of one resource in the definitions output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedArray {
    pub symbol: SymbolName,
    /// Hex literal lines, each terminated by `\n`. Empty for zero bytes.
    pub body: String,
    /// Number of elements in the array (normalized byte length).
    pub len: usize,
}

impl EncodedArray {
    pub fn declaration(&self) -> DeclarationEntry {
        DeclarationEntry {
            symbol: self.symbol.to_string(),
            len: self.len,
        }
    }
}

/// One `extern` declaration in the declarations output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeclarationEntry {
    pub symbol: String,
    pub len: usize,
}
