//! Rendering module for gendata.
//!
//! This module turns normalized resource bytes into hex literal bodies and
//! writes the definitions and declarations outputs.

mod emit;
mod hex;

pub use emit::{
    Emitter, GeneratedSources, DECLARATIONS_PREAMBLE, DEFAULT_ELEMENT_TYPE, DEFINITIONS_PREAMBLE,
};
pub use hex::{decode_body, encode_body, DEFAULT_CHUNK_SIZE, INDENT};
