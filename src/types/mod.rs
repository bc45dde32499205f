//! Core data types for gendata.

mod array;
mod resource;
mod symbol;

pub use array::{DeclarationEntry, EncodedArray};
pub use resource::ResourceFile;
pub use symbol::{is_identifier, symbol_for, SymbolName, RLE_SUFFIX};
