use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Recommender not initialized: catalog or index is empty")]
    Uninitialized,

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error(transparent)]
    Index(#[from] savora_core::Error),

    #[error(transparent)]
    Store(#[from] savora_store::Error),
}
