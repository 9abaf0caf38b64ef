pub mod api;
pub mod auth;
pub mod bootstrap;
pub mod catalog;
pub mod core;
pub mod embedding;
pub mod recommend;
pub mod store;
pub mod utils;

pub use utils::safe_truncate;

pub use api::{router, AppState};
pub use bootstrap::bootstrap_store;
pub use crate::core::config::YunoConfig;
pub use crate::core::error::{Result, YunoError};
pub use embedding::{Embedder, EmbeddingGenerator};
pub use recommend::Recommender;
pub use store::ItemStore;

pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

pub const DEFAULT_EMBEDDING_MODEL: &str = "nomic-embed-text";

pub const DEFAULT_CACHE_SIZE: usize = 1000;

pub const DEFAULT_CACHE_TTL: u64 = 300;

pub const DEFAULT_HTTP_PORT: u16 = 8000;
