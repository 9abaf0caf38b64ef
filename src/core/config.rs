use serde::{Deserialize, Serialize};

use crate::store::DistanceMetric;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YunoConfig {
    pub host: String,
    pub port: u16,

    pub embedding_provider: String,
    pub embedding_model: String,
    pub embedding_url: String,
    pub embedding_api_key: Option<String>,
    pub embedding_base_url: Option<String>,
    pub embedding_timeout: u64,

    pub embedding_fallback_enabled: bool,
    pub embedding_fallback_url: String,
    pub embedding_fallback_model: String,

    pub cache_size: usize,
    pub cache_ttl: u64,

    pub distance_metric: DistanceMetric,

    pub user_db_path: String,

    pub bootstrap_samples: usize,
    pub catalog_seed: u64,
}

impl YunoConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self {
            host: host.to_string(),
            port,

            embedding_provider: "ollama".to_string(),
            embedding_model: "nomic-embed-text".to_string(),
            embedding_url: "http://localhost:11434".to_string(),
            embedding_api_key: None,
            embedding_base_url: None,
            embedding_timeout: 30,

            embedding_fallback_enabled: true,
            embedding_fallback_url: "http://localhost:11434".to_string(),
            embedding_fallback_model: "nomic-embed-text".to_string(),

            cache_size: 1000,
            cache_ttl: 300,

            distance_metric: DistanceMetric::Cosine,

            user_db_path: "users.db".to_string(),

            bootstrap_samples: 100,
            catalog_seed: 42,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn from_env() -> Self {
        let mut config = Self::new(
            &std::env::var("YUNO_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            std::env::var("YUNO_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
        );

        if let Ok(provider) = std::env::var("YUNO_EMBEDDING_PROVIDER") {
            config.embedding_provider = provider;
        }
        if let Ok(model) = std::env::var("YUNO_EMBEDDING_MODEL") {
            config.embedding_model = model;
        }
        if let Ok(url) = std::env::var("YUNO_EMBEDDING_URL") {
            config.embedding_url = url;
        }
        if let Ok(key) = std::env::var("YUNO_EMBEDDING_API_KEY") {
            config.embedding_api_key = Some(key);
        }
        if let Ok(url) = std::env::var("YUNO_EMBEDDING_BASE_URL") {
            config.embedding_base_url = Some(url);
        }
        if let Ok(metric) = std::env::var("YUNO_DISTANCE_METRIC") {
            if let Ok(parsed) = metric.parse() {
                config.distance_metric = parsed;
            }
        }
        if let Ok(path) = std::env::var("YUNO_USER_DB") {
            config.user_db_path = path;
        }
        if let Ok(n) = std::env::var("YUNO_BOOTSTRAP_SAMPLES") {
            if let Ok(parsed) = n.parse() {
                config.bootstrap_samples = parsed;
            }
        }
        if let Ok(seed) = std::env::var("YUNO_CATALOG_SEED") {
            if let Ok(parsed) = seed.parse() {
                config.catalog_seed = parsed;
            }
        }

        config
    }
}

impl Default for YunoConfig {
    fn default() -> Self {
        Self::new("0.0.0.0", 8000)
    }
}
