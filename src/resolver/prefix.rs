//! Convention strategy matching registered name prefixes.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::error::{ResolverError, Result};
use crate::factory::FactoryRegistry;

use super::{BuildParams, Loader};

/// Transform applied to the unmatched remainder of a name to derive an
/// implementation identifier. Absent means the remainder is used verbatim.
pub type Normalizer = Arc<dyn Fn(&str) -> String + Send + Sync>;

struct PrefixEntry {
    prefix: String,
    normalizer: Option<Normalizer>,
}

/// Loader resolving any name that starts with a registered prefix.
///
/// Entries are scanned in registration order and the first matching prefix
/// wins, even when a later registration would match more of the name.
pub struct PrefixLoader<T> {
    prefixes: RwLock<Vec<PrefixEntry>>,
    factories: Arc<FactoryRegistry<T>>,
}

impl<T> PrefixLoader<T> {
    /// Create an empty prefix loader backed by `factories`
    pub fn new(factories: Arc<FactoryRegistry<T>>) -> Self {
        Self {
            prefixes: RwLock::new(Vec::new()),
            factories,
        }
    }

    /// Append one prefix entry
    pub fn add_prefix(&self, prefix: impl Into<String>, normalizer: Option<Normalizer>) {
        let prefix = prefix.into();
        info!(prefix = %prefix, "Registered name prefix");
        self.prefixes.write().push(PrefixEntry { prefix, normalizer });
    }

    /// Append several prefixes sharing one normalizer
    pub fn add_prefixes<I, S>(&self, prefixes: I, normalizer: Option<Normalizer>)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for prefix in prefixes {
            self.add_prefix(prefix, normalizer.clone());
        }
    }

    /// Snapshot of registered prefixes in registration order
    pub fn prefixes(&self) -> Vec<String> {
        self.prefixes
            .read()
            .iter()
            .map(|entry| entry.prefix.clone())
            .collect()
    }

    /// Number of registered prefixes
    pub fn len(&self) -> usize {
        self.prefixes.read().len()
    }

    /// Whether no prefixes are registered
    pub fn is_empty(&self) -> bool {
        self.prefixes.read().is_empty()
    }

    /// Derive the identifier for `name` from the first matching prefix.
    ///
    /// The normalizer runs outside the prefix-list lock.
    fn resolve_identifier(&self, name: &str) -> Option<String> {
        let (prefix_len, normalizer) = {
            let prefixes = self.prefixes.read();
            let entry = prefixes.iter().find(|e| name.starts_with(&e.prefix))?;
            (entry.prefix.len(), entry.normalizer.clone())
        };

        let remainder = &name[prefix_len..];
        Some(match normalizer {
            Some(normalize) => normalize(remainder),
            None => remainder.to_string(),
        })
    }
}

impl<T> Loader<T> for PrefixLoader<T> {
    fn supports(&self, name: &str) -> bool {
        self.prefixes
            .read()
            .iter()
            .any(|entry| name.starts_with(&entry.prefix))
    }

    fn build(&self, name: &str, params: &BuildParams) -> Result<T> {
        let identifier = self
            .resolve_identifier(name)
            .ok_or_else(|| ResolverError::UnsupportedName(name.to_string()))?;

        debug!(name = %name, identifier = %identifier, "Derived identifier from prefix");
        self.factories.instantiate(name, &identifier, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loader_with_factories() -> PrefixLoader<String> {
        let factories = Arc::new(FactoryRegistry::new());
        factories.register("TABLE", |_params| Ok("table renderer".to_string()));
        factories.register("table", |_params| Ok("raw table".to_string()));
        factories.register("_table", |_params| Ok("underscore table".to_string()));
        PrefixLoader::new(factories)
    }

    fn uppercase() -> Normalizer {
        Arc::new(|remainder: &str| remainder.to_uppercase())
    }

    #[test]
    fn test_supports_matches_literal_prefix_only() {
        let loader = loader_with_factories();
        loader.add_prefix("render_", None);

        assert!(loader.supports("render_table"));
        assert!(loader.supports("render_"));
        assert!(!loader.supports("rende"));
        assert!(!loader.supports("table_render_x"));
    }

    #[test]
    fn test_build_applies_normalizer_to_remainder() {
        let loader = loader_with_factories();
        loader.add_prefix("render_", Some(uppercase()));

        let built = loader.build("render_table", &BuildParams::new()).unwrap();
        assert_eq!(built, "table renderer");
    }

    #[test]
    fn test_build_defaults_to_identity_remainder() {
        let loader = loader_with_factories();
        loader.add_prefix("render_", None);

        let built = loader.build("render_table", &BuildParams::new()).unwrap();
        assert_eq!(built, "raw table");
    }

    #[test]
    fn test_first_registered_prefix_wins() {
        let loader = loader_with_factories();
        loader.add_prefix("render", None);
        loader.add_prefix("render_", Some(uppercase()));

        // "render" was registered first, so the remainder keeps its
        // leading underscore and the uppercase normalizer never runs.
        let built = loader.build("render_table", &BuildParams::new()).unwrap();
        assert_eq!(built, "underscore table");
    }

    #[test]
    fn test_add_prefixes_shares_one_normalizer() {
        let loader = loader_with_factories();
        loader.add_prefixes(["render_", "draw_"], Some(uppercase()));

        assert_eq!(loader.prefixes(), vec!["render_", "draw_"]);
        assert_eq!(
            loader.build("draw_table", &BuildParams::new()).unwrap(),
            "table renderer"
        );
    }

    #[test]
    fn test_build_without_match_fails() {
        let loader = loader_with_factories();
        loader.add_prefix("render_", None);

        let err = loader.build("export_table", &BuildParams::new()).unwrap_err();
        assert!(matches!(err, ResolverError::UnsupportedName(name) if name == "export_table"));
    }
}
