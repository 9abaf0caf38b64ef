use std::sync::Arc;

use tracing::{info, warn};

use super::models::{QueryInfo, RecommendRequest, RecommendResponse, RecommendationItem};
use super::scoring::similarity_score;
use crate::core::error::{Result, YunoError};
use crate::embedding::Embedder;
use crate::store::{AudiencePredicate, CollectionKind, ItemStore};

/// Composes embedder, audience filter and per-collection retrieval into one
/// response. The query is embedded once and matched against both catalogs
/// independently; there is no cross-collection re-ranking.
pub struct Recommender {
    embedder: Arc<dyn Embedder>,
    store: Arc<ItemStore>,
}

impl Recommender {
    pub fn new(embedder: Arc<dyn Embedder>, store: Arc<ItemStore>) -> Self {
        Self { embedder, store }
    }

    pub async fn recommend(&self, request: &RecommendRequest) -> Result<RecommendResponse> {
        if !self.store.ready() {
            return Err(YunoError::ServiceUnavailable);
        }

        let stage = request.validate()?;
        let query_vector = self.embedder.embed(&request.user_query).await?;
        let predicate = AudiencePredicate::for_stage(stage);

        let upskilling =
            self.ranked(CollectionKind::Upskilling, &query_vector, &predicate, request.limit);
        let holistic =
            self.ranked(CollectionKind::Holistic, &query_vector, &predicate, request.limit);

        info!(
            "Recommendation for stage {}: {} upskilling, {} holistic",
            stage,
            upskilling.len(),
            holistic.len()
        );

        Ok(RecommendResponse {
            query_info: QueryInfo {
                original_query: request.user_query.clone(),
                user_stage: stage.to_string(),
                limit: request.limit,
                upskilling_found: upskilling.len(),
                holistic_found: holistic.len(),
            },
            upskilling_recommendations: upskilling,
            holistic_recommendations: holistic,
        })
    }

    /// Retrieval failure in one collection degrades to an empty list for
    /// that collection; the other collection is unaffected.
    fn ranked(
        &self,
        kind: CollectionKind,
        query_vector: &[f32],
        predicate: &AudiencePredicate,
        k: usize,
    ) -> Vec<RecommendationItem> {
        match self.store.query(kind, query_vector, predicate, k) {
            Ok(hits) => hits
                .into_iter()
                .map(|hit| RecommendationItem {
                    id: hit.id,
                    score: similarity_score(hit.distance),
                    metadata: hit.metadata,
                })
                .collect(),
            Err(e) => {
                warn!("Retrieval failed for collection '{}': {}", kind, e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::testing::TokenHashEmbedder;
    use crate::store::{CatalogItem, DistanceMetric, Metadata};
    use serde_json::json;

    const DIM: usize = 64;

    fn item(embedder: &TokenHashEmbedder, id: &str, text: &str, audience: &str) -> CatalogItem {
        let mut metadata = Metadata::new();
        metadata.insert("target_audience".to_string(), json!(audience));
        if id.starts_with("COURSE") {
            metadata.insert("category".to_string(), json!("Arts"));
        } else {
            metadata.insert("type".to_string(), json!("Workshop"));
        }
        CatalogItem {
            id: id.to_string(),
            embedding_text: text.to_string(),
            vector: embedder.vector_for(text),
            metadata,
        }
    }

    fn seeded_recommender() -> Recommender {
        let embedder = TokenHashEmbedder::new(DIM);
        let store = ItemStore::new(DistanceMetric::Cosine);

        store
            .load(
                CollectionKind::Upskilling,
                vec![
                    item(
                        &embedder,
                        "COURSE_0001",
                        "Watercolor Painting Class. Arts. artistic painting for creative students",
                        "Both",
                    ),
                    item(
                        &embedder,
                        "COURSE_0002",
                        "Cloud Computing with AWS. Tech. infrastructure and devops",
                        "Both",
                    ),
                    item(
                        &embedder,
                        "COURSE_0003",
                        "Digital Illustration Mastery. Arts. painting and drawing digitally",
                        "Post-Secondary",
                    ),
                ],
            )
            .unwrap();

        store
            .load(
                CollectionKind::Holistic,
                vec![
                    item(
                        &embedder,
                        "EVENT_0001",
                        "Art Jamming Session. Workshop. artistic painting in a relaxed studio",
                        "Both",
                    ),
                    item(
                        &embedder,
                        "EVENT_0002",
                        "HIIT Bootcamp. Sports. high intensity workout",
                        "Secondary",
                    ),
                ],
            )
            .unwrap();

        store.mark_ready();
        Recommender::new(Arc::new(embedder), Arc::new(store))
    }

    fn request(query: &str, stage: &str, limit: usize) -> RecommendRequest {
        RecommendRequest {
            user_query: query.to_string(),
            user_stage: stage.to_string(),
            limit,
        }
    }

    #[tokio::test]
    async fn test_artistic_query_surfaces_arts_items() {
        let recommender = seeded_recommender();
        let response = recommender
            .recommend(&request("I am artistic and love painting", "Post-Secondary", 3))
            .await
            .unwrap();

        let course_ids: Vec<&str> = response
            .upskilling_recommendations
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert!(course_ids.contains(&"COURSE_0001"));

        let event_ids: Vec<&str> = response
            .holistic_recommendations
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert!(event_ids.contains(&"EVENT_0001"));

        let painting_course = response
            .upskilling_recommendations
            .iter()
            .find(|r| r.id == "COURSE_0001")
            .unwrap();
        assert!(painting_course.score > 0.0);
    }

    #[tokio::test]
    async fn test_results_respect_limit_per_collection() {
        let recommender = seeded_recommender();
        let response = recommender
            .recommend(&request("painting", "Post-Secondary", 1))
            .await
            .unwrap();

        assert!(response.upskilling_recommendations.len() <= 1);
        assert!(response.holistic_recommendations.len() <= 1);
    }

    #[tokio::test]
    async fn test_scores_bounded_and_rounded() {
        let recommender = seeded_recommender();
        let response = recommender
            .recommend(&request("artistic painting workshop", "Post-Secondary", 20))
            .await
            .unwrap();

        for item in response
            .upskilling_recommendations
            .iter()
            .chain(&response.holistic_recommendations)
        {
            assert!((0.0..=1.0).contains(&item.score));
            let rounded = (item.score * 10_000.0).round() / 10_000.0;
            assert_eq!(item.score, rounded);
        }
    }

    #[tokio::test]
    async fn test_secondary_never_sees_post_secondary_only_items() {
        let recommender = seeded_recommender();
        // COURSE_0003 is the strongest "painting drawing" match but gated to
        // Post-Secondary.
        let response = recommender
            .recommend(&request("painting and drawing digitally", "Secondary", 20))
            .await
            .unwrap();

        for item in &response.upskilling_recommendations {
            assert_ne!(item.id, "COURSE_0003");
            let audience = item.metadata["target_audience"].as_str().unwrap();
            assert_ne!(audience, "Post-Secondary");
        }
    }

    #[tokio::test]
    async fn test_repeated_query_is_deterministic() {
        let recommender = seeded_recommender();
        let req = request("creative painting", "Post-Secondary", 5);

        let first = recommender.recommend(&req).await.unwrap();
        let second = recommender.recommend(&req).await.unwrap();

        let ids =
            |r: &RecommendResponse| -> Vec<(String, f64)> {
                r.upskilling_recommendations
                    .iter()
                    .chain(&r.holistic_recommendations)
                    .map(|i| (i.id.clone(), i.score))
                    .collect()
            };
        assert_eq!(ids(&first), ids(&second));
    }

    #[tokio::test]
    async fn test_empty_collection_yields_empty_list_not_error() {
        let embedder = TokenHashEmbedder::new(DIM);
        let store = ItemStore::new(DistanceMetric::Cosine);
        store
            .load(
                CollectionKind::Upskilling,
                vec![item(&embedder, "COURSE_0001", "painting", "Both")],
            )
            .unwrap();
        // Holistic has only Post-Secondary content.
        store
            .load(
                CollectionKind::Holistic,
                vec![item(&embedder, "EVENT_0001", "painting", "Post-Secondary")],
            )
            .unwrap();
        store.mark_ready();

        let recommender = Recommender::new(Arc::new(embedder), Arc::new(store));
        let response = recommender
            .recommend(&request("painting", "Secondary", 3))
            .await
            .unwrap();

        assert_eq!(response.upskilling_recommendations.len(), 1);
        assert!(response.holistic_recommendations.is_empty());
        assert_eq!(response.query_info.holistic_found, 0);
    }

    #[tokio::test]
    async fn test_not_ready_store_is_service_unavailable() {
        let embedder = TokenHashEmbedder::new(DIM);
        let store = ItemStore::new(DistanceMetric::Cosine);
        let recommender = Recommender::new(Arc::new(embedder), Arc::new(store));

        let result = recommender
            .recommend(&request("painting", "Secondary", 3))
            .await;
        assert!(matches!(result, Err(YunoError::ServiceUnavailable)));
    }

    #[tokio::test]
    async fn test_invalid_stage_fails_before_retrieval() {
        let recommender = seeded_recommender();
        let result = recommender
            .recommend(&request("painting", "Tertiary", 3))
            .await;
        assert!(matches!(result, Err(YunoError::InvalidStage(_))));
    }

    #[tokio::test]
    async fn test_one_broken_collection_degrades_not_fails() {
        let embedder = TokenHashEmbedder::new(DIM);
        let store = ItemStore::new(DistanceMetric::Cosine);
        store
            .load(
                CollectionKind::Upskilling,
                vec![item(&embedder, "COURSE_0001", "painting class", "Both")],
            )
            .unwrap();
        // Holistic was loaded with vectors of a different dimension, so its
        // queries fail while upskilling still answers.
        let mut metadata = Metadata::new();
        metadata.insert("target_audience".to_string(), json!("Both"));
        store
            .load(
                CollectionKind::Holistic,
                vec![CatalogItem {
                    id: "EVENT_0001".to_string(),
                    embedding_text: "painting".to_string(),
                    vector: vec![1.0, 0.0],
                    metadata,
                }],
            )
            .unwrap();
        store.mark_ready();

        let recommender = Recommender::new(Arc::new(embedder), Arc::new(store));
        let response = recommender
            .recommend(&request("painting", "Secondary", 3))
            .await
            .unwrap();

        assert_eq!(response.upskilling_recommendations.len(), 1);
        assert!(response.holistic_recommendations.is_empty());
    }
}
