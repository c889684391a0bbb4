//! # CLI Module
//!
//! Command-line interface of the `forgecli-gen` binary.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Run the full pipeline and format the output:
//!
//! ```bash
//! forgecli-gen generate --source ../gitforge --output src/commands
//! ```
//!
//! ### `inspect`
//!
//! Print the discovered services and method shapes without writing files:
//!
//! ```bash
//! forgecli-gen inspect --source ../gitforge --json
//! ```

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{run_cli, Cli, Commands};
