use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Artifact not found: {0}")]
    ArtifactMissing(PathBuf),

    #[error("Artifact corrupt: {path}: {detail}")]
    Corrupt { path: PathBuf, detail: String },

    #[error("Row mismatch between artifacts: catalog has {catalog} rows, index has {index}")]
    RowMismatch { catalog: usize, index: usize },

    #[error("Malformed input row at line {line}: {detail}")]
    Malformed { line: usize, detail: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
