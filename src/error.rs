//! Structured error types for implementation resolution.

use thiserror::Error;

/// Errors raised while resolving names or constructing implementations
#[derive(Error, Debug)]
pub enum ResolverError {
    /// No registered loader supports the requested name.
    #[error("no loader found for \"{0}\"")]
    UnsupportedName(String),

    /// The identifier a loader resolved has no registered factory.
    #[error("no factory registered for implementation \"{identifier}\" (requested as \"{name}\")")]
    UnknownImplementation { name: String, identifier: String },

    /// A factory ran and failed to produce an instance.
    #[error("construction of \"{identifier}\" failed: {reason}")]
    ConstructionFailed { identifier: String, reason: String },
}

/// Result type alias for resolver operations
pub type Result<T> = std::result::Result<T, ResolverError>;

/// Boxed error type returned by factory closures
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Helper function to create construction failures
pub fn construction_failed(
    identifier: impl Into<String>,
    reason: impl Into<String>,
) -> ResolverError {
    ResolverError::ConstructionFailed {
        identifier: identifier.into(),
        reason: reason.into(),
    }
}
