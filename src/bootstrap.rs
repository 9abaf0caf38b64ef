use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::info;

use crate::catalog::{CatalogGenerator, CatalogRecord};
use crate::core::config::YunoConfig;
use crate::core::error::{Result, YunoError};
use crate::embedding::Embedder;
use crate::store::{CatalogItem, CollectionKind, ItemStore};

/// In-flight embedding requests during bootstrap.
const EMBED_CONCURRENCY: usize = 8;

/// One-time startup population: for each collection that is still empty,
/// generate the synthetic catalog, embed every record and bulk-load it.
/// Runs to completion before the service accepts queries; the store is
/// marked ready only after both collections are populated. Idempotent -
/// collections that already hold items are left untouched.
pub async fn bootstrap_store(
    store: &ItemStore,
    embedder: &dyn Embedder,
    config: &YunoConfig,
) -> Result<()> {
    let mut generator = CatalogGenerator::new(config.catalog_seed);

    if store.count(CollectionKind::Upskilling) == 0 {
        info!("Upskilling collection empty, generating synthetic courses...");
        let records = generator.generate_courses(config.bootstrap_samples);
        let items = embed_records(embedder, records).await?;
        let added = store.populate_if_empty(CollectionKind::Upskilling, items)?;
        info!("Added {} courses", added);
    }

    if store.count(CollectionKind::Holistic) == 0 {
        info!("Holistic collection empty, generating synthetic events...");
        let records = generator.generate_events(config.bootstrap_samples);
        let items = embed_records(embedder, records).await?;
        let added = store.populate_if_empty(CollectionKind::Holistic, items)?;
        info!("Added {} events", added);
    }

    info!(
        "Catalog ready: {} upskilling, {} holistic",
        store.count(CollectionKind::Upskilling),
        store.count(CollectionKind::Holistic)
    );
    store.mark_ready();

    Ok(())
}

/// Embedding failure aborts the whole bootstrap rather than loading a
/// partial catalog; callers report the error and refuse to serve.
/// `buffered` keeps the output in record order, so insertion order (and
/// with it tie-breaking) stays deterministic.
async fn embed_records(
    embedder: &dyn Embedder,
    records: Vec<CatalogRecord>,
) -> Result<Vec<CatalogItem>> {
    stream::iter(records)
        .map(|record| async move {
            let vector = embedder.embed(&record.embedding_text).await?;
            Ok::<CatalogItem, YunoError>(CatalogItem {
                id: record.id,
                embedding_text: record.embedding_text,
                vector,
                metadata: record.metadata,
            })
        })
        .buffered(EMBED_CONCURRENCY)
        .try_collect()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::EmbeddingError;
    use crate::store::DistanceMetric;
    use async_trait::async_trait;

    struct FixedDimEmbedder;

    #[async_trait]
    impl Embedder for FixedDimEmbedder {
        async fn embed(&self, text: &str) -> std::result::Result<Vec<f32>, EmbeddingError> {
            if text.trim().is_empty() {
                return Err(EmbeddingError::EmptyText);
            }
            let len = text.len() as f32;
            Ok(vec![len % 7.0 + 1.0, len % 3.0 + 1.0, 1.0])
        }

        fn model_name(&self) -> &str {
            "fixed-dim"
        }
    }

    fn small_config() -> YunoConfig {
        let mut config = YunoConfig::default();
        config.bootstrap_samples = 10;
        config
    }

    #[tokio::test]
    async fn test_bootstrap_populates_both_collections_and_marks_ready() {
        let store = ItemStore::new(DistanceMetric::Cosine);
        let config = small_config();

        bootstrap_store(&store, &FixedDimEmbedder, &config)
            .await
            .unwrap();

        assert_eq!(store.count(CollectionKind::Upskilling), 10);
        assert_eq!(store.count(CollectionKind::Holistic), 10);
        assert!(store.ready());
    }

    #[tokio::test]
    async fn test_bootstrap_twice_never_duplicates() {
        let store = ItemStore::new(DistanceMetric::Cosine);
        let config = small_config();

        bootstrap_store(&store, &FixedDimEmbedder, &config)
            .await
            .unwrap();
        bootstrap_store(&store, &FixedDimEmbedder, &config)
            .await
            .unwrap();

        assert_eq!(store.count(CollectionKind::Upskilling), 10);
        assert_eq!(store.count(CollectionKind::Holistic), 10);
    }
}
