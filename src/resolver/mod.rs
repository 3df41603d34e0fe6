//! # Implementation Resolution
//!
//! Strategy composition for resolving logical names to implementations.
//!
//! ## Overview
//!
//! The resolver module composes two registration strategies behind one
//! lookup capability. Callers request an implementation by short name; the
//! resolver decides which strategy owns that name and delegates
//! construction to it.
//!
//! ## Available Loaders
//!
//! - **ClassMapLoader**: exact name → identifier mapping
//! - **PrefixLoader**: convention matching on registered name prefixes
//! - **ImplementationResolver**: composite dispatching across both, with a
//!   memoized strategy-selection cache
//!
//! ## Architecture
//!
//! ```text
//! ImplementationResolver
//! ├── ClassMapLoader        (exact match, consulted first)
//! ├── PrefixLoader          (convention match, consulted second)
//! └── loader cache          (name → strategy index, never invalidated)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use impl_resolver::{BuildParams, ImplementationResolver, Loader};
//!
//! let resolver: ImplementationResolver<String> = ImplementationResolver::new();
//! resolver.register_factory("PdfRenderer", |_params: &BuildParams| {
//!     Ok("rendering pdf".to_string())
//! });
//! resolver.add_class("pdf", "PdfRenderer");
//!
//! assert!(resolver.supports("pdf"));
//! let rendered = resolver.build("pdf", &BuildParams::new())?;
//! assert_eq!(rendered, "rendering pdf");
//! # Ok::<(), impl_resolver::ResolverError>(())
//! ```

pub mod class_map;
pub mod core;
pub mod loader;
pub mod prefix;

// Re-export main types for easy access
pub use class_map::ClassMapLoader;
pub use core::{ImplementationResolver, ResolverStats};
pub use loader::{BuildParams, Loader};
pub use prefix::{Normalizer, PrefixLoader};
