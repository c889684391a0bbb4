//! # Generator Module
//!
//! Renders and emits the per-service command source.
//!
//! ## Architecture
//!
//! ```text
//! Client sources → Loader → Extractor → Classifier → Flag Mapper
//!                                                        ↓
//!                          Emitter ← Template Rendering (Askama)
//! ```
//!
//! Three Askama render targets under `templates/` produce the output:
//!
//! - `service.rs.txt` - the grouping container for one service: a
//!   `command()` builder listing the per-method subcommands and a `run()`
//!   dispatcher.
//! - `list_command.rs.txt` - a paginated-listing subcommand: `all`, `page`
//!   and `page-size` flags, with the fetch loop delegated to
//!   [`crate::pagination::collect`].
//! - `not_implemented.rs.txt` - the placeholder subcommand for every other
//!   method shape.
//!
//! Per-method blocks are rendered individually and spliced into the grouping
//! template in classifier order, so each target stays a pure function from
//! structured input to source text. One file per service is written to the
//! output directory together with a `mod.rs` registry; a single `rustfmt`
//! pass then runs over everything emitted.

mod project;
mod templates;

pub use project::*;
pub use templates::*;
