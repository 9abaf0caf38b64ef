use tracing::info;

use super::distance::DistanceMetric;
use super::filter::AudiencePredicate;
use super::item::{CatalogItem, Metadata};
use crate::core::error::{Result, YunoError};

/// One nearest-neighbor match, ordered by ascending distance.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub id: String,
    pub distance: f64,
    pub metadata: Metadata,
}

/// A named set of catalog items with exact nearest-neighbor lookup over a
/// filtered subset. Populated once via `load`, read-only afterwards. The
/// query contract (vector, predicate, k) does not assume a linear scan, so
/// an approximate index can replace the internals at larger scale.
pub struct VectorCollection {
    name: String,
    metric: DistanceMetric,
    items: Vec<CatalogItem>,
    dimension: Option<usize>,
}

impl VectorCollection {
    pub fn new(name: impl Into<String>, metric: DistanceMetric) -> Self {
        Self {
            name: name.into(),
            metric,
            items: Vec::new(),
            dimension: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Bulk-insert items. The whole batch is validated first (unique ids,
    /// consistent vector dimension); a failing load leaves the collection
    /// unchanged.
    pub fn load(&mut self, items: Vec<CatalogItem>) -> Result<()> {
        let mut dimension = self.dimension;
        let mut seen: std::collections::HashSet<&str> =
            self.items.iter().map(|item| item.id.as_str()).collect();

        for item in &items {
            if item.id.is_empty() {
                return Err(YunoError::Validation(format!(
                    "empty item id in collection '{}'",
                    self.name
                )));
            }
            if !seen.insert(item.id.as_str()) {
                return Err(YunoError::DuplicateId {
                    collection: self.name.clone(),
                    id: item.id.clone(),
                });
            }
            match dimension {
                None => dimension = Some(item.vector.len()),
                Some(dim) if dim != item.vector.len() => {
                    return Err(YunoError::DimensionMismatch {
                        expected: dim,
                        got: item.vector.len(),
                    });
                }
                Some(_) => {}
            }
        }

        let added = items.len();
        self.items.extend(items);
        self.dimension = dimension;

        info!("Loaded {} items into collection '{}'", added, self.name);
        Ok(())
    }

    /// Top-k nearest neighbors among items satisfying the predicate,
    /// ascending by distance. Ties keep insertion order (stable sort).
    /// An empty filtered subset is a valid empty result, not an error.
    pub fn query(
        &self,
        query_vector: &[f32],
        predicate: &AudiencePredicate,
        k: usize,
    ) -> Result<Vec<SearchHit>> {
        if let Some(dim) = self.dimension {
            if query_vector.len() != dim {
                return Err(YunoError::DimensionMismatch {
                    expected: dim,
                    got: query_vector.len(),
                });
            }
        }

        let mut hits: Vec<SearchHit> = self
            .items
            .iter()
            .filter(|item| predicate.matches(&item.metadata))
            .map(|item| SearchHit {
                id: item.id.clone(),
                distance: self.metric.distance(query_vector, &item.vector),
                metadata: item.metadata.clone(),
            })
            .collect();

        hits.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        hits.truncate(k);

        Ok(hits)
    }

    /// First `n` items (id + metadata), for the debugging peek endpoint.
    pub fn sample(&self, n: usize) -> Vec<(String, Metadata)> {
        self.items
            .iter()
            .take(n)
            .map(|item| (item.id.clone(), item.metadata.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::filter::Stage;
    use serde_json::json;

    fn item(id: &str, vector: Vec<f32>, audience: &str) -> CatalogItem {
        let mut metadata = Metadata::new();
        metadata.insert("target_audience".to_string(), json!(audience));
        CatalogItem {
            id: id.to_string(),
            embedding_text: format!("text for {id}"),
            vector,
            metadata,
        }
    }

    fn loaded_collection() -> VectorCollection {
        let mut collection = VectorCollection::new("upskilling", DistanceMetric::Cosine);
        collection
            .load(vec![
                item("COURSE_0001", vec![1.0, 0.0, 0.0], "Both"),
                item("COURSE_0002", vec![0.9, 0.1, 0.0], "Secondary"),
                item("COURSE_0003", vec![0.0, 1.0, 0.0], "Post-Secondary"),
            ])
            .unwrap();
        collection
    }

    #[test]
    fn test_query_orders_by_ascending_distance() {
        let collection = loaded_collection();
        let predicate = AudiencePredicate::for_stage(Stage::Secondary);

        let hits = collection.query(&[1.0, 0.0, 0.0], &predicate, 10).unwrap();

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, "COURSE_0001");
        assert_eq!(hits[1].id, "COURSE_0002");
        assert!(hits[0].distance <= hits[1].distance);
    }

    #[test]
    fn test_query_respects_k() {
        let collection = loaded_collection();
        let predicate = AudiencePredicate::for_stage(Stage::Secondary);

        let hits = collection.query(&[1.0, 0.0, 0.0], &predicate, 1).unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_query_filters_out_ineligible_audience() {
        let collection = loaded_collection();
        let predicate = AudiencePredicate::for_stage(Stage::Secondary);

        // COURSE_0003 is the exact vector match but Post-Secondary only.
        let hits = collection.query(&[0.0, 1.0, 0.0], &predicate, 10).unwrap();
        assert!(hits.iter().all(|h| h.id != "COURSE_0003"));
    }

    #[test]
    fn test_query_empty_filtered_subset_is_ok() {
        let mut collection = VectorCollection::new("holistic", DistanceMetric::Cosine);
        collection
            .load(vec![item("EVENT_0001", vec![1.0, 0.0], "Post-Secondary")])
            .unwrap();

        let predicate = AudiencePredicate::for_stage(Stage::Secondary);
        let hits = collection.query(&[1.0, 0.0], &predicate, 5).unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn test_tie_break_keeps_insertion_order() {
        let mut collection = VectorCollection::new("upskilling", DistanceMetric::Cosine);
        collection
            .load(vec![
                item("COURSE_0001", vec![1.0, 0.0], "Both"),
                item("COURSE_0002", vec![2.0, 0.0], "Both"),
            ])
            .unwrap();

        // Cosine is scale-invariant: both items are at distance 0.
        let predicate = AudiencePredicate::for_stage(Stage::Secondary);
        let hits = collection.query(&[1.0, 0.0], &predicate, 2).unwrap();
        assert_eq!(hits[0].id, "COURSE_0001");
        assert_eq!(hits[1].id, "COURSE_0002");
    }

    #[test]
    fn test_load_rejects_duplicate_id() {
        let mut collection = loaded_collection();
        let before = collection.count();

        let result = collection.load(vec![item("COURSE_0001", vec![0.5, 0.5, 0.0], "Both")]);
        assert!(matches!(result, Err(YunoError::DuplicateId { .. })));
        assert_eq!(collection.count(), before);
    }

    #[test]
    fn test_load_rejects_mixed_dimensions() {
        let mut collection = VectorCollection::new("upskilling", DistanceMetric::Cosine);
        let result = collection.load(vec![
            item("COURSE_0001", vec![1.0, 0.0], "Both"),
            item("COURSE_0002", vec![1.0, 0.0, 0.0], "Both"),
        ]);
        assert!(matches!(result, Err(YunoError::DimensionMismatch { .. })));
        assert_eq!(collection.count(), 0);
    }

    #[test]
    fn test_query_rejects_mismatched_query_dimension() {
        let collection = loaded_collection();
        let predicate = AudiencePredicate::for_stage(Stage::Secondary);
        let result = collection.query(&[1.0, 0.0], &predicate, 3);
        assert!(matches!(result, Err(YunoError::DimensionMismatch { .. })));
    }

    #[test]
    fn test_sample_returns_first_n() {
        let collection = loaded_collection();
        let sample = collection.sample(2);
        assert_eq!(sample.len(), 2);
        assert_eq!(sample[0].0, "COURSE_0001");
    }
}
