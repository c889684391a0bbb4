//! # forgecli
//!
//! **forgecli** generates clap subcommand source for the `gitforge` client
//! library by statically inspecting its sources.
//!
//! ## Overview
//!
//! The wrapped library groups its remote operations into service types
//! (`IssuesService`, `ReposService`, …). For every public method on such a
//! type the generator recognizes one argument shape - a single
//! `ListOptions` pagination parameter - and synthesizes a paginated-listing
//! subcommand for it: flag declarations, typed flag read-back, and a fetch
//! loop that accumulates pages. Every other method gets a not-implemented
//! placeholder subcommand so the CLI surface stays complete.
//!
//! ## Architecture
//!
//! The pipeline runs strictly forward, single-threaded:
//!
//! ```text
//! import path → library::load → library::extract → classify
//!                                                     ↓
//!              generator::project ← generator::templates ← flags
//! ```
//!
//! - **[`library`]** - source loading (`syn`) and method extraction
//! - **[`classify`]** - argument-shape partition (listing vs. placeholder)
//! - **[`flags`]** - type→flag mapping and accessor rendering
//! - **[`generator`]** - Askama template rendering, file emission and the
//!   `rustfmt` pass
//! - **[`pagination`]** - the fetch loop generated listing commands delegate
//!   to at runtime
//! - **[`timeparse`]** - the injected time-parsing function named by the
//!   mapper's timestamp rule
//! - **[`cli`]** - the `forgecli-gen` command-line interface
//!
//! ## Usage
//!
//! ```bash
//! forgecli-gen generate --source ../gitforge --output src/commands
//! ```
//!
//! Generated files land one per service (`issues_service.rs`, …) plus a
//! `mod.rs` registry exposing an explicit `commands()` list and a `run`
//! dispatcher - no load-time side effects. Regeneration overwrites.
//!
//! ## Scope
//!
//! The generator models argument and return *type shape* only; it does not
//! validate the wrapped API's semantics. Positional arguments a real
//! operation needs (owner, repository, …) are not derived and must be wired
//! by hand when putting a generated command to use.

pub mod classify;
pub mod cli;
pub mod flags;
pub mod generator;
pub mod library;
pub mod naming;
pub mod pagination;
pub mod timeparse;

pub use classify::{classify, classify_methods, group_by_service, MethodShape, ServiceGroup};
pub use flags::{accessor_for, declaration_for, flag_for, ArgumentType, FlagKind, FlagSpec};
pub use library::{extract_methods, load_package, LoadError, MethodRecord, SourcePackage};
