use std::sync::Arc;

use crate::auth::AuthService;
use crate::embedding::Embedder;
use crate::recommend::Recommender;
use crate::store::ItemStore;

/// Explicitly constructed request-handler context. Everything is behind an
/// `Arc` so the state clones cheaply per request; there is no ambient
/// global state anywhere in the service.
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<Recommender>,
    pub store: Arc<ItemStore>,
    pub auth: Arc<AuthService>,
    pub embedding_model: String,
}

impl AppState {
    pub fn new(embedder: Arc<dyn Embedder>, store: Arc<ItemStore>, auth: Arc<AuthService>) -> Self {
        let embedding_model = embedder.model_name().to_string();
        Self {
            recommender: Arc::new(Recommender::new(embedder, Arc::clone(&store))),
            store,
            auth,
            embedding_model,
        }
    }
}
