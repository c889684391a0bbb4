use std::path::Path;
use std::process::Command;

use thiserror::Error;
use walkdir::WalkDir;

/// Failure of the external formatting pass.
///
/// Surfaced after all files are already written; the run fails as a whole.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("failed to run {bin}: {source}")]
    Spawn {
        bin: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{bin} exited with {status}")]
    Failed {
        bin: String,
        status: std::process::ExitStatus,
    },
}

/// Run one `rustfmt` invocation over every generated file in `dir`.
///
/// Must run strictly after all files are written; it operates on the
/// directory as a whole. The invocation is synchronous and has no timeout.
pub fn format_output(dir: &Path) -> Result<(), FormatError> {
    // Allow tests to override the formatter binary without mutating PATH
    let bin = std::env::var("FORGECLI_RUSTFMT_BIN").unwrap_or_else(|_| "rustfmt".to_string());

    let files: Vec<_> = WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| {
            entry.file_type().is_file()
                && entry.path().extension().is_some_and(|ext| ext == "rs")
        })
        .map(walkdir::DirEntry::into_path)
        .collect();
    if files.is_empty() {
        return Ok(());
    }

    let mut cmd = Command::new(&bin);
    cmd.arg("--edition").arg("2021").args(&files);
    let status = cmd.status().map_err(|source| FormatError::Spawn {
        bin: bin.clone(),
        source,
    })?;
    if !status.success() {
        return Err(FormatError::Failed { bin, status });
    }
    Ok(())
}
