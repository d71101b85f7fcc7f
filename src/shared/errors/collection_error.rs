use thiserror::Error;

#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("Invalid duration {0:?}: expected \"<N>h <M>min\", \"<N>h\", or \"<M>min\"")]
    InvalidDuration(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
