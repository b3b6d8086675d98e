use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Input file could not be opened
    #[error("cannot open {}: {source}", path.display())]
    Input {
        path: PathBuf,
        source: std::io::Error,
    },

    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Record list could not be read or written
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A filter expression did not parse
    #[error("Filter error: {0}")]
    Filter(#[from] datkit_filter::FilterError),
}

impl CliError {
    pub(crate) fn input(path: &Path, source: std::io::Error) -> Self {
        Self::Input {
            path: path.to_path_buf(),
            source,
        }
    }
}
