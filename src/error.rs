use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the library side of spellbench.
#[derive(Debug, Error)]
pub enum Error {
    /// A word list or sample text could not be opened or read.
    #[error("Failed to read {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid text length range {start}..={end} (step {step})")]
    InvalidRange {
        start: usize,
        end: usize,
        step: usize,
    },

    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Maze(#[from] crate::maze::MazeError),
}

impl Error {
    pub(crate) fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::FileAccess {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
