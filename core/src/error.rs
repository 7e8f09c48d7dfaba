use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a grouping run. All variants are terminal.
#[derive(Error, Debug)]
pub enum GroupError {
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("unsupported language: {0:?} (expected \"english\" or \"spanish\")")]
    UnsupportedLanguage(String),

    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to render results: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GroupError>;
