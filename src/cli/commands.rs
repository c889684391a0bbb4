use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::classify::{classify, MethodShape};
use crate::generator::{format_output, generate_commands, GeneratorConfig};
use crate::library::{extract_methods, load_package};

/// Command-line interface for the forgecli generator.
#[derive(Parser)]
#[command(name = "forgecli-gen")]
#[command(about = "forgecli command generator", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate clap subcommand source from the client library
    Generate {
        /// Path to the client library crate (or its source directory)
        #[arg(short, long)]
        source: PathBuf,

        /// Crate name of the client library, used to shorten its type paths
        #[arg(short, long, default_value = "gitforge")]
        library: String,

        /// Output directory for the generated command modules
        #[arg(short, long, default_value = "src/commands")]
        output: PathBuf,
    },
    /// Inspect discovered services and method shapes without generating
    Inspect {
        /// Path to the client library crate (or its source directory)
        #[arg(short, long)]
        source: PathBuf,

        /// Crate name of the client library, used to shorten its type paths
        #[arg(short, long, default_value = "gitforge")]
        library: String,

        /// Emit the discovered records as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

/// Execute the CLI command provided by the user.
///
/// # Errors
///
/// Returns an error if the client library cannot be loaded, generation
/// fails, or the formatting pass exits non-zero.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Generate {
            source,
            library,
            output,
        } => {
            let config = GeneratorConfig {
                source: source.clone(),
                library: library.clone(),
                output: output.clone(),
            };
            let dir = generate_commands(&config)?;
            // formatting runs strictly after all files are written
            format_output(&dir)?;
            println!("✅ Generated commands in {dir:?}");
            Ok(())
        }
        Commands::Inspect {
            source,
            library,
            json,
        } => {
            let package = load_package(source, library)?;
            let records = extract_methods(&package);
            if *json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                for record in &records {
                    let shape = match classify(record) {
                        MethodShape::PaginatedList => "list",
                        MethodShape::NotImplemented => "stub",
                    };
                    println!(
                        "{shape:<5} {}::{} ({} args)",
                        record.service,
                        record.name,
                        record.args.len()
                    );
                }
            }
            Ok(())
        }
    }
}
