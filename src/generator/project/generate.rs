use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use tracing::info;

use crate::classify::{classify_methods, group_by_service};
use crate::generator::templates::{service_template_data, write_mod_rs, write_service, ModuleEntry};
use crate::library::{extract_methods, load_package};
use crate::naming;

/// Inputs of one generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Path to the client library crate (or its source directory)
    pub source: PathBuf,
    /// Crate name of the client library
    pub library: String,
    /// Output directory for the generated command modules
    pub output: PathBuf,
}

/// Run the full pipeline: load, extract, classify, render, emit.
///
/// One file per service plus a `mod.rs` registry are written to the output
/// directory, overwriting previous runs. The formatting pass is the caller's
/// responsibility and must run after this returns. Loader and emitter
/// failures abort the run; units already written stay on disk.
pub fn generate_commands(config: &GeneratorConfig) -> anyhow::Result<PathBuf> {
    let package = load_package(&config.source, &config.library)?;
    let records = extract_methods(&package);
    info!(
        files = package.files.len(),
        methods = records.len(),
        "extracted service methods"
    );

    let groups = group_by_service(classify_methods(records));
    fs::create_dir_all(&config.output)
        .with_context(|| format!("failed to create output dir {:?}", config.output))?;

    let mut modules = Vec::with_capacity(groups.len());
    for group in &groups {
        let data = service_template_data(group, &config.library)?;
        write_service(&config.output, &data)?;
        modules.push(ModuleEntry {
            ident: naming::snake_ident(&group.service),
            command: data.command,
        });
    }
    write_mod_rs(&config.output, &config.library, &modules)?;

    info!(services = groups.len(), output = ?config.output, "generation complete");
    Ok(config.output.clone())
}
