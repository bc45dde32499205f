//! Resource registry for gendata.
//!
//! The registry holds every collected resource in emission order and
//! guarantees that each one maps to a distinct, valid symbol.
//!
//! # Example
//!
//! ```ignore
//! use gendata::registry::RegistryBuilder;
//!
//! let mut builder = RegistryBuilder::new();
//! builder.add(ResourceFile::read(path)?);
//!
//! let registry = builder.build()?;
//! for resource in registry.iter() { ... }
//! ```

use std::collections::HashMap;

use crate::error::{GenError, Result};
use crate::types::ResourceFile;

/// Ordered, collision-free set of resources.
///
/// The registry is immutable after construction - use `RegistryBuilder`
/// to create a new registry.
#[derive(Debug, Default)]
pub struct ResourceRegistry {
    resources: Vec<ResourceFile>,
}

impl ResourceRegistry {
    /// Iterate resources in emission order.
    pub fn iter(&self) -> impl Iterator<Item = &ResourceFile> {
        self.resources.iter()
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl<'a> IntoIterator for &'a ResourceRegistry {
    type Item = &'a ResourceFile;
    type IntoIter = std::slice::Iter<'a, ResourceFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.resources.iter()
    }
}

/// Builder for constructing a `ResourceRegistry`.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    resources: Vec<ResourceFile>,
}

impl RegistryBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource. Order of addition is emission order.
    pub fn add(&mut self, resource: ResourceFile) -> &mut Self {
        self.resources.push(resource);
        self
    }

    /// Add multiple resources.
    pub fn add_all(&mut self, resources: impl IntoIterator<Item = ResourceFile>) -> &mut Self {
        self.resources.extend(resources);
        self
    }

    /// Build the registry.
    ///
    /// Fails on the first resource whose symbol is not a valid identifier,
    /// or on the second resource claiming an already used symbol.
    pub fn build(self) -> Result<ResourceRegistry> {
        let mut symbols: HashMap<String, usize> = HashMap::with_capacity(self.resources.len());

        for (index, resource) in self.resources.iter().enumerate() {
            if !resource.symbol.is_valid() {
                return Err(GenError::InvalidSymbol {
                    path: resource.path.clone(),
                    symbol: resource.symbol.to_string(),
                });
            }

            if let Some(&first) = symbols.get(resource.symbol.as_str()) {
                return Err(GenError::SymbolCollision {
                    symbol: resource.symbol.to_string(),
                    first: self.resources[first].path.clone(),
                    second: resource.path.clone(),
                });
            }
            symbols.insert(resource.symbol.to_string(), index);
        }

        Ok(ResourceRegistry {
            resources: self.resources,
        })
    }
}
