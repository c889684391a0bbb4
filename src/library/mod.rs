//! # Library Introspection Module
//!
//! Loads the wrapped client library's sources and extracts a normalized record
//! per service method.
//!
//! ## Overview
//!
//! The pipeline front end has two stages:
//!
//! 1. **Loader** ([`load_package`]) - reads every `.rs` file under the client
//!    crate's `src/` tree in sorted order and parses each with `syn`,
//!    producing a [`SourcePackage`].
//! 2. **Extractor** ([`extract_methods`]) - walks every parsed item, keeps
//!    public inherent methods on `*Service` types, and builds one
//!    [`MethodRecord`] per method with canonicalized argument/return type
//!    text.
//!
//! Type resolution is textual: the closed recognized type set downstream makes
//! a canonicalized name match sufficient, so no full type-check is performed.

mod extract;
mod load;
mod types;

pub use extract::{extract_methods, SERVICE_SUFFIX};
pub use load::{load_package, LoadError, SourcePackage};
pub use types::{Argument, MethodRecord};
