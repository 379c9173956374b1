//! Error type shared by the reorder pass and the file driver.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FixError>;

#[derive(Debug, Error)]
pub enum FixError {
    /// The template never declares its parameter list (`@(...)`).
    #[error("twirl view \"{file}\" has no view parameters")]
    MissingParameters { file: String },

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid template pattern {pattern}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("failed to traverse directory: {0}")]
    Walk(#[from] glob::GlobError),
}

impl FixError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FixError::Io {
            path: path.into(),
            source,
        }
    }
}
