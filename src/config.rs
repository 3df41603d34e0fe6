//! Declarative registration seed for the configuration phase.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::resolver::ImplementationResolver;

/// Registrations loadable from declarative configuration.
///
/// Carries only the data halves of registration: the exact name →
/// identifier mapping and the convention prefixes (registered without a
/// normalizer). Factories and normalizers are code and are registered
/// programmatically.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Exact name → identifier mappings
    #[serde(default)]
    pub class_map: HashMap<String, String>,

    /// Convention prefixes, in registration order
    #[serde(default)]
    pub prefixes: Vec<String>,
}

impl ResolverConfig {
    /// Apply every registration in this config to `resolver`
    pub fn apply_to<T: 'static>(&self, resolver: &ImplementationResolver<T>) {
        for (name, identifier) in &self.class_map {
            resolver.add_class(name.clone(), identifier.clone());
        }
        resolver.add_prefixes(self.prefixes.iter().cloned(), None);

        info!(
            class_map_entries = self.class_map.len(),
            prefixes = self.prefixes.len(),
            "Applied resolver configuration"
        );
    }

    /// Build a fresh resolver seeded from this config
    pub fn build_resolver<T: 'static>(&self) -> ImplementationResolver<T> {
        let resolver = ImplementationResolver::new();
        self.apply_to(&resolver);
        resolver
    }
}
