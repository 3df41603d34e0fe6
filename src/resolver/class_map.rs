//! Exact-match strategy over a name → identifier class map.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use crate::error::{ResolverError, Result};
use crate::factory::FactoryRegistry;

use super::{BuildParams, Loader};

/// Loader resolving names through an exact name → identifier mapping.
///
/// The most specific registration strategy: a name resolves here only when
/// it was registered verbatim. Instantiation is delegated to the shared
/// factory registry.
pub struct ClassMapLoader<T> {
    class_map: RwLock<HashMap<String, String>>,
    factories: Arc<FactoryRegistry<T>>,
}

impl<T> ClassMapLoader<T> {
    /// Create an empty class-map loader backed by `factories`
    pub fn new(factories: Arc<FactoryRegistry<T>>) -> Self {
        Self {
            class_map: RwLock::new(HashMap::new()),
            factories,
        }
    }

    /// Map `name` to `identifier`, replacing any previous mapping
    pub fn add_class(&self, name: impl Into<String>, identifier: impl Into<String>) {
        let name = name.into();
        let identifier = identifier.into();
        info!(name = %name, identifier = %identifier, "Registered class mapping");
        self.class_map.write().insert(name, identifier);
    }

    /// Replace the entire mapping
    pub fn set_class_map(&self, class_map: HashMap<String, String>) {
        info!(entries = class_map.len(), "Replaced class map");
        *self.class_map.write() = class_map;
    }

    /// Snapshot of the current mapping.
    ///
    /// Returns a copy; mutating it does not touch the loader's state.
    pub fn class_map(&self) -> HashMap<String, String> {
        self.class_map.read().clone()
    }

    /// Number of registered mappings
    pub fn len(&self) -> usize {
        self.class_map.read().len()
    }

    /// Whether no mappings are registered
    pub fn is_empty(&self) -> bool {
        self.class_map.read().is_empty()
    }
}

impl<T> Loader<T> for ClassMapLoader<T> {
    fn supports(&self, name: &str) -> bool {
        self.class_map.read().contains_key(name)
    }

    fn build(&self, name: &str, params: &BuildParams) -> Result<T> {
        let identifier = self
            .class_map
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| ResolverError::UnsupportedName(name.to_string()))?;

        self.factories.instantiate(name, &identifier, params)
    }
}
