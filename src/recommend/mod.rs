pub mod models;
pub mod scoring;
pub mod service;

pub use models::{
    QueryInfo, RecommendRequest, RecommendResponse, RecommendationItem, DEFAULT_LIMIT, MAX_LIMIT,
};
pub use scoring::similarity_score;
pub use service::Recommender;
