mod format;
mod generate;

pub use format::{format_output, FormatError};
pub use generate::{generate_commands, GeneratorConfig};
