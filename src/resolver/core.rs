//! Composite resolver dispatching across the registered strategies.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::error::{BoxError, ResolverError, Result};
use crate::factory::FactoryRegistry;

use super::{BuildParams, ClassMapLoader, Loader, Normalizer, PrefixLoader};

/// Point-in-time counts of resolver contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverStats {
    pub class_map_entries: usize,
    pub prefix_count: usize,
    pub registered_factories: usize,
    pub cached_names: usize,
}

/// Composite loader delegating to the class-map and prefix strategies.
///
/// Strategies are consulted in a fixed order: exact class-map match first,
/// prefix match second, so a specific registration always overrides a
/// convention-derived one. The strategy that first resolves a name is
/// memoized per name and reused for every later lookup of that name.
///
/// The cache is never invalidated. A name cached to a strategy keeps
/// routing there even if registrations change afterwards, trading staleness
/// under registry mutation for O(1) dispatch on the hot lookup path. The
/// intended usage is a configuration phase that performs registrations,
/// followed by a serving phase that only resolves.
pub struct ImplementationResolver<T> {
    class_map_loader: Arc<ClassMapLoader<T>>,
    prefix_loader: Arc<PrefixLoader<T>>,
    factories: Arc<FactoryRegistry<T>>,
    /// Fixed at construction; `loader_cache` stores indexes into this list.
    loaders: Vec<Arc<dyn Loader<T>>>,
    loader_cache: RwLock<HashMap<String, usize>>,
}

impl<T: 'static> ImplementationResolver<T> {
    /// Create a resolver with fresh loaders sharing one factory registry
    pub fn new() -> Self {
        let factories = Arc::new(FactoryRegistry::new());
        let class_map_loader = Arc::new(ClassMapLoader::new(Arc::clone(&factories)));
        let prefix_loader = Arc::new(PrefixLoader::new(Arc::clone(&factories)));
        Self::with_loaders(class_map_loader, prefix_loader, factories)
    }

    /// Assemble a resolver from externally owned parts.
    ///
    /// The loader list and its order are fixed here for the lifetime of the
    /// resolver; only the loaders' contents mutate afterwards.
    pub fn with_loaders(
        class_map_loader: Arc<ClassMapLoader<T>>,
        prefix_loader: Arc<PrefixLoader<T>>,
        factories: Arc<FactoryRegistry<T>>,
    ) -> Self {
        let loaders: Vec<Arc<dyn Loader<T>>> = vec![
            Arc::clone(&class_map_loader) as Arc<dyn Loader<T>>,
            Arc::clone(&prefix_loader) as Arc<dyn Loader<T>>,
        ];

        Self {
            class_map_loader,
            prefix_loader,
            factories,
            loaders,
            loader_cache: RwLock::new(HashMap::new()),
        }
    }

    /// Map `name` to `identifier` in the class-map strategy
    pub fn add_class(&self, name: impl Into<String>, identifier: impl Into<String>) {
        self.class_map_loader.add_class(name, identifier);
    }

    /// Replace the class-map strategy's entire mapping
    pub fn set_class_map(&self, class_map: HashMap<String, String>) {
        self.class_map_loader.set_class_map(class_map);
    }

    /// Snapshot of the class-map strategy's current mapping
    pub fn class_map(&self) -> HashMap<String, String> {
        self.class_map_loader.class_map()
    }

    /// Register one prefix in the convention strategy
    pub fn add_prefix(&self, prefix: impl Into<String>, normalizer: Option<Normalizer>) {
        self.prefix_loader.add_prefix(prefix, normalizer);
    }

    /// Register several prefixes sharing one normalizer
    pub fn add_prefixes<I, S>(&self, prefixes: I, normalizer: Option<Normalizer>)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prefix_loader.add_prefixes(prefixes, normalizer);
    }

    /// Register a constructor for `identifier` in the shared factory registry
    pub fn register_factory<F>(&self, identifier: impl Into<String>, factory: F)
    where
        F: Fn(&BuildParams) -> std::result::Result<T, BoxError> + Send + Sync + 'static,
    {
        self.factories.register(identifier, factory);
    }

    /// Shared factory registry backing both strategies
    pub fn factories(&self) -> &Arc<FactoryRegistry<T>> {
        &self.factories
    }

    /// Current resolver counts
    pub fn stats(&self) -> ResolverStats {
        ResolverStats {
            class_map_entries: self.class_map_loader.len(),
            prefix_count: self.prefix_loader.len(),
            registered_factories: self.factories.len(),
            cached_names: self.loader_cache.read().len(),
        }
    }

    /// Find the loader owning `name`.
    ///
    /// A cached index is trusted without re-checking the underlying loader.
    /// On a miss, loaders are scanned in registration order and the first
    /// match is cached; nothing is cached when no loader matches.
    fn loader_for(&self, name: &str) -> Option<&Arc<dyn Loader<T>>> {
        if let Some(&idx) = self.loader_cache.read().get(name) {
            debug!(name = %name, loader = idx, "Loader cache hit");
            return Some(&self.loaders[idx]);
        }

        for (idx, loader) in self.loaders.iter().enumerate() {
            if loader.supports(name) {
                self.loader_cache.write().insert(name.to_string(), idx);
                debug!(name = %name, loader = idx, "Cached loader for name");
                return Some(loader);
            }
        }

        None
    }
}

impl<T: 'static> Default for ImplementationResolver<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Loader<T> for ImplementationResolver<T> {
    fn supports(&self, name: &str) -> bool {
        self.loader_for(name).is_some()
    }

    fn build(&self, name: &str, params: &BuildParams) -> Result<T> {
        let Some(loader) = self.loader_for(name) else {
            debug!(name = %name, "No loader supports name");
            return Err(ResolverError::UnsupportedName(name.to_string()));
        };

        loader.build(name, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labeled_resolver() -> ImplementationResolver<&'static str> {
        let resolver = ImplementationResolver::new();
        resolver.register_factory("Exact", |_params| Ok("exact"));
        resolver.register_factory("derived", |_params| Ok("derived"));
        resolver
    }

    #[test]
    fn test_exact_match_checked_before_prefix() {
        let resolver = labeled_resolver();
        resolver.add_prefix("job_", None);
        resolver.add_class("job_derived", "Exact");

        let built = resolver.build("job_derived", &BuildParams::new()).unwrap();
        assert_eq!(built, "exact");
    }

    #[test]
    fn test_supports_is_idempotent() {
        let resolver = labeled_resolver();
        resolver.add_class("job", "Exact");

        assert!(resolver.supports("job"));
        assert!(resolver.supports("job"));
        assert!(!resolver.supports("other"));
        assert!(!resolver.supports("other"));
    }

    #[test]
    fn test_supports_miss_caches_nothing() {
        let resolver = labeled_resolver();

        assert!(!resolver.supports("job"));
        assert_eq!(resolver.stats().cached_names, 0);

        // The name becomes resolvable once registered; an unmatched probe
        // must not have pinned it to "unsupported".
        resolver.add_class("job", "Exact");
        assert!(resolver.supports("job"));
        assert_eq!(resolver.stats().cached_names, 1);
    }

    #[test]
    fn test_cached_name_survives_registry_mutation() {
        let resolver = labeled_resolver();
        resolver.add_prefix("job_", None);

        // First resolution routes through the prefix loader and is cached.
        assert_eq!(
            resolver.build("job_derived", &BuildParams::new()).unwrap(),
            "derived"
        );

        // An exact mapping added afterwards is never consulted for this
        // name; the cache still routes to the prefix loader.
        resolver.add_class("job_derived", "Exact");
        assert_eq!(
            resolver.build("job_derived", &BuildParams::new()).unwrap(),
            "derived"
        );
    }

    #[test]
    fn test_unsupported_name_carries_the_name() {
        let resolver = labeled_resolver();

        let err = resolver.build("missing", &BuildParams::new()).unwrap_err();
        assert!(matches!(err, ResolverError::UnsupportedName(name) if name == "missing"));
    }

    #[test]
    fn test_stats_reflect_registrations() {
        let resolver = labeled_resolver();
        resolver.add_class("job", "Exact");
        resolver.add_prefixes(["job_", "task_"], None);
        assert!(resolver.supports("job"));

        let stats = resolver.stats();
        assert_eq!(
            stats,
            ResolverStats {
                class_map_entries: 1,
                prefix_count: 2,
                registered_factories: 2,
                cached_names: 1,
            }
        );
    }
}
