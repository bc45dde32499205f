//! Validation checks over collected resources.
//!
//! Each check takes the resources in emission order and returns a
//! `ValidationResult`. Unlike the registry builder, checks report every
//! problem instead of stopping at the first.

use std::collections::HashMap;
use std::path::Path;

use crate::format::FormatRegistry;
use crate::types::ResourceFile;

use super::warning::{Diagnostic, ValidationResult};

/// Check that every symbol is a valid identifier.
pub fn check_identifiers(resources: &[ResourceFile]) -> ValidationResult {
    let mut result = ValidationResult::new();

    for resource in resources.iter().filter(|r| !r.symbol.is_valid()) {
        result.push(
            Diagnostic::error(
                "gendata::validate::invalid-symbol",
                format!(
                    "{} maps to '{}', which is not a valid identifier",
                    resource.path.display(),
                    resource.symbol
                ),
            )
            .with_path(&resource.path)
            .with_help("Use only letters, digits, '_' and '.' in resource names"),
        );
    }

    result
}

/// Check that no two resources share a symbol.
pub fn check_collisions(resources: &[ResourceFile]) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut seen: HashMap<&str, &Path> = HashMap::new();

    for resource in resources {
        let symbol = resource.symbol.as_str();
        match seen.get(symbol) {
            Some(first) => result.push(
                Diagnostic::error(
                    "gendata::validate::collision",
                    format!(
                        "Symbol '{}' is produced by both {} and {}",
                        symbol,
                        first.display(),
                        resource.path.display()
                    ),
                )
                .with_path(&resource.path)
                .with_help("Rename one of the files"),
            ),
            None => {
                seen.insert(symbol, &resource.path);
            }
        }
    }

    result
}

/// Check that container files are long enough, and warn about empty arrays.
pub fn check_payloads(resources: &[ResourceFile], formats: &FormatRegistry) -> ValidationResult {
    let mut result = ValidationResult::new();

    for resource in resources {
        match formats.normalize(resource) {
            Ok(payload) if payload.is_empty() => result.push(
                Diagnostic::warning(
                    "gendata::validate::empty-array",
                    format!("'{}' will be emitted as a zero-length array", resource.symbol),
                )
                .with_path(&resource.path)
                .with_help("Some C++ compilers reject zero-length array initializers"),
            ),
            Ok(_) => {}
            Err(e) => result.push(
                Diagnostic::error("gendata::validate::truncated", e.to_string())
                    .with_path(&resource.path),
            ),
        }
    }

    result
}
