//! # Factory Registry
//!
//! Identifier-keyed constructor closures with thread-safe registration.
//!
//! ## Overview
//!
//! The FactoryRegistry is the instantiation mechanism behind every loader:
//! loaders resolve a name to an implementation identifier, then delegate
//! construction here. Registering a closure per identifier keeps the
//! "construct by name" contract without any runtime reflection.
//!
//! ## Usage
//!
//! ```rust
//! use impl_resolver::{BuildParams, FactoryRegistry};
//!
//! let registry: FactoryRegistry<String> = FactoryRegistry::new();
//! registry.register("Greeter", |_params: &BuildParams| Ok("hello".to_string()));
//!
//! let greeting = registry.instantiate("greet", "Greeter", &BuildParams::new())?;
//! assert_eq!(greeting, "hello");
//! # Ok::<(), impl_resolver::ResolverError>(())
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::error::{construction_failed, BoxError, ResolverError, Result};
use crate::resolver::BuildParams;

/// Constructor closure producing one implementation instance per call
pub type Factory<T> =
    Arc<dyn Fn(&BuildParams) -> std::result::Result<T, BoxError> + Send + Sync>;

/// Registry mapping implementation identifiers to constructor closures
pub struct FactoryRegistry<T> {
    factories: RwLock<HashMap<String, Factory<T>>>,
}

impl<T> FactoryRegistry<T> {
    /// Create an empty factory registry
    pub fn new() -> Self {
        Self {
            factories: RwLock::new(HashMap::new()),
        }
    }

    /// Register a factory for `identifier`, replacing any previous one
    pub fn register<F>(&self, identifier: impl Into<String>, factory: F)
    where
        F: Fn(&BuildParams) -> std::result::Result<T, BoxError> + Send + Sync + 'static,
    {
        let identifier = identifier.into();
        info!(identifier = %identifier, "Registered implementation factory");
        self.factories
            .write()
            .insert(identifier, Arc::new(factory));
    }

    /// Whether a factory is registered for `identifier`
    pub fn contains(&self, identifier: &str) -> bool {
        self.factories.read().contains_key(identifier)
    }

    /// Identifiers with a registered factory
    pub fn identifiers(&self) -> Vec<String> {
        self.factories.read().keys().cloned().collect()
    }

    /// Number of registered factories
    pub fn len(&self) -> usize {
        self.factories.read().len()
    }

    /// Whether no factories are registered
    pub fn is_empty(&self) -> bool {
        self.factories.read().is_empty()
    }

    /// Instantiate `identifier` with `params`.
    ///
    /// `name` is the caller-facing name the identifier was resolved from and
    /// only feeds diagnostics. The factory runs outside the registry lock.
    pub fn instantiate(&self, name: &str, identifier: &str, params: &BuildParams) -> Result<T> {
        let factory = self.factories.read().get(identifier).cloned();

        let Some(factory) = factory else {
            return Err(ResolverError::UnknownImplementation {
                name: name.to_string(),
                identifier: identifier.to_string(),
            });
        };

        debug!(name = %name, identifier = %identifier, "Instantiating implementation");
        factory(params).map_err(|e| construction_failed(identifier, e.to_string()))
    }
}

impl<T> Default for FactoryRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
