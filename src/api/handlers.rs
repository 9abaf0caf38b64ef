use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::error::{ApiError, ApiResult};
use super::state::AppState;
use crate::core::error::YunoError;
use crate::recommend::{RecommendRequest, RecommendResponse};
use crate::store::{CollectionKind, Metadata};

pub async fn root() -> Json<Value> {
    Json(json!({
        "name": "YUNO Recommendation API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "endpoints": {
            "/recommend": "POST - Get personalized recommendations",
            "/health": "GET - Health check",
            "/stats": "GET - Catalog statistics"
        }
    }))
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub embedding_model: String,
    pub collections_loaded: bool,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let ready = state.store.ready();
    Json(HealthResponse {
        status: if ready { "healthy" } else { "degraded" },
        embedding_model: state.embedding_model.clone(),
        collections_loaded: ready,
    })
}

#[derive(Serialize)]
pub struct StatsResponse {
    pub upskilling_count: usize,
    pub holistic_count: usize,
    pub total_items: usize,
}

pub async fn stats(State(state): State<AppState>) -> ApiResult<StatsResponse> {
    if !state.store.ready() {
        return Err(ApiError(YunoError::ServiceUnavailable));
    }

    let upskilling_count = state.store.count(CollectionKind::Upskilling);
    let holistic_count = state.store.count(CollectionKind::Holistic);
    Ok(Json(StatsResponse {
        upskilling_count,
        holistic_count,
        total_items: upskilling_count + holistic_count,
    }))
}

pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> ApiResult<RecommendResponse> {
    let response = state.recommender.recommend(&request).await?;
    Ok(Json(response))
}

#[derive(Deserialize)]
pub struct SampleParams {
    #[serde(default = "default_sample_size")]
    pub n: usize,
}

fn default_sample_size() -> usize {
    5
}

#[derive(Serialize)]
pub struct SampleItem {
    pub id: String,
    pub metadata: Metadata,
}

#[derive(Serialize)]
pub struct SampleResponse {
    pub collection: String,
    pub sample_count: usize,
    pub items: Vec<SampleItem>,
}

pub async fn sample(
    State(state): State<AppState>,
    Path(collection_name): Path<String>,
    Query(params): Query<SampleParams>,
) -> ApiResult<SampleResponse> {
    let kind: CollectionKind = collection_name
        .parse()
        .map_err(|_| YunoError::UnknownCollection(collection_name.clone()))?;

    if !state.store.ready() {
        return Err(ApiError(YunoError::ServiceUnavailable));
    }

    let items: Vec<SampleItem> = state
        .store
        .sample(kind, params.n)
        .into_iter()
        .map(|(id, metadata)| SampleItem { id, metadata })
        .collect();

    Ok(Json(SampleResponse {
        collection: collection_name,
        sample_count: items.len(),
        items,
    }))
}
