//! gendata - binary resource embedding compiler
//!
//! A library for turning a directory of opaque binary resources into a
//! pair of generated C/C++ sources: a definitions file holding one byte
//! array per resource and a declarations file exposing each array as an
//! `extern` symbol.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod format;
pub mod output;
pub mod pipeline;
pub mod registry;
pub mod render;
pub mod types;
pub mod validation;

pub use config::GenConfig;
pub use discovery::{discover, scan_resources, DiscoveryResult, Manifest, Order, ScanOptions};
pub use error::{GenError, Result};
pub use format::{FormatRegistry, Transform};
pub use pipeline::{Generator, Report, ResourceSummary};
pub use registry::{RegistryBuilder, ResourceRegistry};
pub use render::{decode_body, encode_body, Emitter, GeneratedSources};
pub use types::{DeclarationEntry, EncodedArray, ResourceFile, SymbolName};
pub use validation::{validate_resources, Diagnostic, Severity, ValidationResult};
