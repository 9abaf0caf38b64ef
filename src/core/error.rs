use thiserror::Error;

use crate::embedding::EmbeddingError;

#[derive(Error, Debug)]
pub enum YunoError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("user_stage must be 'Secondary' or 'Post-Secondary', got '{0}'")]
    InvalidStage(String),

    #[error("Catalog store not initialized")]
    ServiceUnavailable,

    #[error("Duplicate item id in collection '{collection}': {id}")]
    DuplicateId { collection: String, id: String },

    #[error("Unknown collection: {0}")]
    UnknownCollection(String),

    #[error("Vector dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid username or password")]
    Unauthorized,

    #[error("Credential hashing error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("Embedding generation error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("User store error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, YunoError>;
