#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Impl Resolver
//!
//! Dynamic implementation resolver: given a logical name, locate and
//! instantiate the concrete implementation registered for that name.
//!
//! ## Overview
//!
//! Applications register implementations either under an exact short name
//! (class map) or by naming convention (prefix plus an optional normalizer
//! for the remainder of the name). Callers resolve by name alone and never
//! see concrete types. The composite resolver consults the exact-match
//! strategy before the convention strategy, so a specific registration
//! always overrides a derived one, and memoizes which strategy owned each
//! name to keep repeated lookups O(1).
//!
//! Instantiation is factory-based: every implementation identifier maps to
//! a registered constructor closure receiving an open mapping of named
//! parameters. There is no reflection and no dynamic loading.
//!
//! ## Module Organization
//!
//! - [`resolver`] - Resolution strategies and the composite dispatcher
//! - [`factory`] - Identifier-keyed constructor closures
//! - [`config`] - Declarative registration seed
//! - [`error`] - Structured error handling
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use impl_resolver::{BuildParams, ImplementationResolver, Loader, Normalizer};
//!
//! let resolver: ImplementationResolver<String> = ImplementationResolver::new();
//!
//! // Constructors, keyed by implementation identifier.
//! resolver.register_factory("PdfRenderer", |_params: &BuildParams| {
//!     Ok("pdf output".to_string())
//! });
//! resolver.register_factory("TABLE", |params: &BuildParams| {
//!     let columns = params.get("columns").and_then(|v| v.as_u64()).unwrap_or(1);
//!     Ok(format!("table with {columns} columns"))
//! });
//!
//! // Registrations: one exact, one by convention.
//! resolver.add_class("pdf", "PdfRenderer");
//! let upper: Normalizer = Arc::new(|remainder: &str| remainder.to_uppercase());
//! resolver.add_prefix("render_", Some(upper));
//!
//! let mut params = BuildParams::new();
//! params.insert("columns".to_string(), serde_json::json!(4));
//!
//! assert_eq!(resolver.build("pdf", &BuildParams::new())?, "pdf output");
//! assert_eq!(resolver.build("render_table", &params)?, "table with 4 columns");
//! assert!(!resolver.supports("unknown"));
//! # Ok::<(), impl_resolver::ResolverError>(())
//! ```
//!
//! ## Concurrency
//!
//! Every structure is guarded by a read-mostly lock, so concurrent lookups
//! and registrations are safe. The intended usage is still a registration
//! phase at startup followed by a lookup-only serving phase: the strategy
//! cache is never invalidated, so a name resolved once keeps routing to the
//! strategy that first claimed it even if registrations change later.

pub mod config;
pub mod error;
pub mod factory;
pub mod resolver;

pub use config::ResolverConfig;
pub use error::{construction_failed, BoxError, ResolverError, Result};
pub use factory::{Factory, FactoryRegistry};
pub use resolver::{
    BuildParams, ClassMapLoader, ImplementationResolver, Loader, Normalizer, PrefixLoader,
    ResolverStats,
};
