//! Capability contract shared by every resolution strategy.

use crate::error::Result;

/// Named construction arguments, passed through to factories unmodified.
pub type BuildParams = serde_json::Map<String, serde_json::Value>;

/// Capability implemented by every resolution strategy.
///
/// A loader answers two questions: whether it can resolve a given name, and
/// how to construct the implementation registered under that name. The
/// composite resolver dispatches purely through this trait, so additional
/// strategies can be wired in without touching the dispatch logic.
pub trait Loader<T>: Send + Sync {
    /// Whether this loader can resolve `name`.
    fn supports(&self, name: &str) -> bool;

    /// Construct the implementation registered for `name`.
    ///
    /// `params` is an open mapping of named construction arguments handed
    /// to the factory without inspection or validation.
    fn build(&self, name: &str, params: &BuildParams) -> Result<T>;
}
