pub mod collection;
pub mod distance;
pub mod filter;
pub mod item;

use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::info;

pub use collection::{SearchHit, VectorCollection};
pub use distance::{cosine_similarity, DistanceMetric};
pub use filter::{AudiencePredicate, Stage};
pub use item::{CatalogItem, Metadata, TargetAudience};

use crate::core::error::Result;

/// The two independent catalogs. No cross-references between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    Upskilling,
    Holistic,
}

/// Owner of both catalog collections. Written once during bootstrap, then
/// read-only; the readiness flag gates query serving until bootstrap is
/// confirmed complete.
pub struct ItemStore {
    upskilling: RwLock<VectorCollection>,
    holistic: RwLock<VectorCollection>,
    ready: AtomicBool,
}

impl ItemStore {
    pub fn new(metric: DistanceMetric) -> Self {
        Self {
            upskilling: RwLock::new(VectorCollection::new("upskilling", metric)),
            holistic: RwLock::new(VectorCollection::new("holistic", metric)),
            ready: AtomicBool::new(false),
        }
    }

    fn collection(&self, kind: CollectionKind) -> &RwLock<VectorCollection> {
        match kind {
            CollectionKind::Upskilling => &self.upskilling,
            CollectionKind::Holistic => &self.holistic,
        }
    }

    pub fn load(&self, kind: CollectionKind, items: Vec<CatalogItem>) -> Result<()> {
        self.collection(kind).write().load(items)
    }

    /// One-time bootstrap insert: loads the batch only when the collection
    /// is currently empty. Returns the number of items added (0 when the
    /// collection was already populated, making repeated calls no-ops).
    pub fn populate_if_empty(&self, kind: CollectionKind, items: Vec<CatalogItem>) -> Result<usize> {
        let mut collection = self.collection(kind).write();
        if collection.count() > 0 {
            info!(
                "Collection '{}' already has {} items, skipping populate",
                kind,
                collection.count()
            );
            return Ok(0);
        }
        let added = items.len();
        collection.load(items)?;
        Ok(added)
    }

    pub fn count(&self, kind: CollectionKind) -> usize {
        self.collection(kind).read().count()
    }

    pub fn query(
        &self,
        kind: CollectionKind,
        query_vector: &[f32],
        predicate: &AudiencePredicate,
        k: usize,
    ) -> Result<Vec<SearchHit>> {
        self.collection(kind).read().query(query_vector, predicate, k)
    }

    pub fn sample(&self, kind: CollectionKind, n: usize) -> Vec<(String, Metadata)> {
        self.collection(kind).read().sample(n)
    }

    pub fn ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::SeqCst);
    }
}
