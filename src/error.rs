use std::path::PathBuf;
use thiserror::Error;

use crate::path_de::PathError;

/// Failures while getting a schema tree into memory. The mapping core
/// itself never fails; see [`crate::mapper`].
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: PathError,
    },

    #[error("{}: JSON pointer {pointer:?} selects nothing", .path.display())]
    Pointer { path: PathBuf, pointer: String },

    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error(transparent)]
    Glob(#[from] glob::GlobError),

    #[error("glob pattern matched no files: {0}")]
    NoMatch(String),

    #[error("kind name must look like raw=Display, got {0:?}")]
    KindName(String),
}
