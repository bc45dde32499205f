use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for gendata operations
#[derive(Error, Diagnostic, Debug)]
pub enum GenError {
    #[error("IO error: {0}")]
    #[diagnostic(code(gendata::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(gendata::io))]
    Io { path: PathBuf, message: String },

    #[error("Parse error: {message}")]
    #[diagnostic(code(gendata::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(gendata::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation failed: {message}")]
    #[diagnostic(code(gendata::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("JSON error: {0}")]
    #[diagnostic(code(gendata::json))]
    Json(#[from] serde_json::Error),

    #[error("Symbol '{symbol}' is produced by both {first} and {second}")]
    #[diagnostic(
        code(gendata::symbol::collision),
        help("Rename one of the files so their base names map to different symbols")
    )]
    SymbolCollision {
        symbol: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("{path} does not map to a valid identifier (got '{symbol}')")]
    #[diagnostic(
        code(gendata::symbol::invalid),
        help("Resource names may only contain letters, digits, '_' and '.', and must not start with a digit")
    )]
    InvalidSymbol { path: PathBuf, symbol: String },

    #[error("{path} is {len} byte(s) long, shorter than its {header}-byte container header")]
    #[diagnostic(
        code(gendata::format::truncated),
        help("The file is likely corrupt or not a container of this type")
    )]
    TruncatedContainer {
        path: PathBuf,
        len: usize,
        header: usize,
    },
}

pub type Result<T> = std::result::Result<T, GenError>;
