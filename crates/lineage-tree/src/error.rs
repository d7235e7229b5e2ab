use std::path::PathBuf;

use thiserror::Error;

/// Errors from serializing or persisting a family tree.
///
/// Tree construction itself never fails; bad cells and rows are dropped.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to serialize family tree: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, BuildError>;
