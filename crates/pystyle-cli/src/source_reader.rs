//! File discovery and reading.

use pystyle::AnalyzerConfig;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that stop a run before any file is analyzed.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The file or directory could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Offending path.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },

    /// The file is not valid UTF-8.
    #[error("{path} is not valid UTF-8 (line {line})")]
    Encoding {
        /// Offending path.
        path: PathBuf,
        /// Line holding the first invalid byte.
        line: usize,
    },

    /// A line ends in a bare `\r`.
    #[error("{path}: line {line} ends with a bare carriage return")]
    Malformed {
        /// Offending path.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
    },

    /// Directory listing failed.
    #[error(transparent)]
    Walk(#[from] ignore::Error),
}

/// Returns the files to analyze for `path`.
///
/// A file is returned as-is. For a directory, the regular `.py` files
/// directly inside it are returned, sorted, minus excluded ones.
///
/// # Errors
///
/// Returns [`ReadError`] if `path` does not exist or cannot be listed.
pub fn discover(path: &Path, analyzer: &AnalyzerConfig) -> Result<Vec<PathBuf>, ReadError> {
    let metadata = std::fs::metadata(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut builder = ignore::WalkBuilder::new(path);
    builder.standard_filters(false).max_depth(Some(1));

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        let candidate = entry.path();

        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        if candidate.extension().and_then(|e| e.to_str()) != Some("py") {
            continue;
        }
        if analyzer.is_excluded(candidate) {
            tracing::debug!("Excluded: {}", candidate.display());
            continue;
        }
        files.push(candidate.to_path_buf());
    }

    files.sort();
    Ok(files)
}

/// Reads a source file as UTF-8 text.
///
/// Lines may end in `\n` or `\r\n`; a `\r` anywhere else is rejected.
///
/// # Errors
///
/// Returns [`ReadError`] if the file cannot be read, is not UTF-8, or has
/// a malformed line terminator.
pub fn read(path: &Path) -> Result<String, ReadError> {
    let bytes = std::fs::read(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let text = String::from_utf8(bytes).map_err(|e| {
        let valid = &e.as_bytes()[..e.utf8_error().valid_up_to()];
        ReadError::Encoding {
            path: path.to_path_buf(),
            line: line_of(valid),
        }
    })?;

    if let Some(line) = bare_carriage_return(&text) {
        return Err(ReadError::Malformed {
            path: path.to_path_buf(),
            line,
        });
    }

    Ok(text)
}

fn line_of(prefix: &[u8]) -> usize {
    prefix.iter().filter(|b| **b == b'\n').count() + 1
}

/// Returns the 1-based line of the first `\r` not followed by `\n`.
fn bare_carriage_return(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    bytes
        .iter()
        .enumerate()
        .find(|(i, b)| **b == b'\r' && bytes.get(i + 1) != Some(&b'\n'))
        .map(|(i, _)| line_of(&bytes[..i]))
}
