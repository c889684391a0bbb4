use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

/// Failure to produce a parsed model of the client library.
///
/// Fatal to the whole generation run; there is no partial load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: syn::Error,
    },
    #[error("no Rust sources found under {}", .0.display())]
    NoSources(PathBuf),
}

/// Parsed in-memory model of the client library package.
///
/// Files are kept in sorted path order so every downstream traversal is
/// stable across runs on unchanged input.
#[derive(Debug)]
pub struct SourcePackage {
    /// Crate name of the library, used to shorten its own type paths
    pub crate_name: String,
    /// Parsed files, sorted by path
    pub files: Vec<(PathBuf, syn::File)>,
}

impl SourcePackage {
    /// Build a package from a single in-memory source string.
    ///
    /// Used by the test suite and by callers that already hold the source
    /// text; `load_package` is the filesystem entry point.
    pub fn from_source(crate_name: &str, source: &str) -> Result<Self, LoadError> {
        let path = PathBuf::from("<memory>");
        let file = syn::parse_file(source).map_err(|source| LoadError::Parse {
            path: path.clone(),
            source,
        })?;
        Ok(Self {
            crate_name: crate_name.to_string(),
            files: vec![(path, file)],
        })
    }
}

/// Load and parse every `.rs` file of the client library.
///
/// `source` may point at the crate root (a `src/` subdirectory is used when
/// present) or directly at a source directory. Each invocation is a fresh
/// load; nothing is cached across runs.
pub fn load_package(source: &Path, crate_name: &str) -> Result<SourcePackage, LoadError> {
    let root = if source.join("src").is_dir() {
        source.join("src")
    } else {
        source.to_path_buf()
    };

    let mut files = Vec::new();
    for entry in WalkDir::new(&root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().is_none_or(|ext| ext != "rs") {
            continue;
        }
        let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let parsed = syn::parse_file(&content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), items = parsed.items.len(), "parsed source file");
        files.push((path.to_path_buf(), parsed));
    }

    if files.is_empty() {
        return Err(LoadError::NoSources(root));
    }
    files.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(SourcePackage {
        crate_name: crate_name.to_string(),
        files,
    })
}
