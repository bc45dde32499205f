//! Symbol naming for embedded resources.
//!
//! A resource's symbol is derived from its base name: a trailing `.rle`
//! is dropped and every remaining `.` becomes `_`, so `tiles.mcz` is
//! exposed as `tiles_mcz` and `font.rle` as `font`.

use std::fmt;

/// Suffix removed from base names before the dot replacement.
pub const RLE_SUFFIX: &str = ".rle";

/// Derive the raw symbol text for a resource base name.
///
/// This is a pure string transform; the result is not guaranteed to be a
/// valid identifier (see [`is_identifier`]).
pub fn symbol_for(file_name: &str) -> String {
    let stem = file_name.strip_suffix(RLE_SUFFIX).unwrap_or(file_name);
    stem.replace('.', "_")
}

/// Check whether `name` is a valid C identifier (`[A-Za-z_][A-Za-z0-9_]*`).
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// The source-level identifier under which a resource is exposed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolName(String);

impl SymbolName {
    /// Derive the symbol for a resource base name.
    pub fn from_file_name(file_name: &str) -> Self {
        Self(symbol_for(file_name))
    }

    /// Whether the symbol can be emitted as an identifier.
    pub fn is_valid(&self) -> bool {
        is_identifier(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SymbolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SymbolName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
