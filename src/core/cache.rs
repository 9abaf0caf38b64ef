use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

// Query texts repeat heavily (students retry the same phrasing), so the
// embedder sits behind a small TTL cache. Eviction is oldest-first once the
// capacity bound is hit.
pub struct EmbeddingCache {
    cache: RwLock<HashMap<String, CacheEntry>>,
    max_size: usize,
    ttl: Duration,
    stats: RwLock<CacheStats>,
}

struct CacheEntry {
    vector: Vec<f32>,
    created_at: Instant,
}

#[derive(Debug, Default, Clone)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl EmbeddingCache {
    pub fn new(max_size: usize, ttl_secs: u64) -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
            max_size,
            ttl: Duration::from_secs(ttl_secs),
            stats: RwLock::new(CacheStats::default()),
        }
    }

    pub fn get(&self, text: &str) -> Option<Vec<f32>> {
        let cache = self.cache.read().unwrap();

        if let Some(entry) = cache.get(text) {
            if entry.created_at.elapsed() < self.ttl {
                let mut stats = self.stats.write().unwrap();
                stats.hits += 1;
                return Some(entry.vector.clone());
            }
        }

        let mut stats = self.stats.write().unwrap();
        stats.misses += 1;
        None
    }

    pub fn set(&self, text: &str, vector: Vec<f32>) {
        let mut cache = self.cache.write().unwrap();

        if cache.len() >= self.max_size {
            if let Some(oldest_key) = cache
                .iter()
                .min_by_key(|(_, v)| v.created_at)
                .map(|(k, _)| k.clone())
            {
                cache.remove(&oldest_key);
            }
        }

        cache.insert(
            text.to_string(),
            CacheEntry {
                vector,
                created_at: Instant::now(),
            },
        );

        let mut stats = self.stats.write().unwrap();
        stats.size = cache.len();
    }

    pub fn stats(&self) -> CacheStats {
        self.stats.read().unwrap().clone()
    }

    pub fn clear(&self) {
        self.cache.write().unwrap().clear();
        let mut stats = self.stats.write().unwrap();
        stats.size = 0;
    }

    pub fn len(&self) -> usize {
        self.cache.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let cache = EmbeddingCache::new(10, 60);
        cache.set("hello", vec![1.0, 2.0]);
        assert_eq!(cache.get("hello"), Some(vec![1.0, 2.0]));
        assert_eq!(cache.get("missing"), None);
    }

    #[test]
    fn test_capacity_eviction() {
        let cache = EmbeddingCache::new(2, 60);
        cache.set("a", vec![1.0]);
        cache.set("b", vec![2.0]);
        cache.set("c", vec![3.0]);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("c"), Some(vec![3.0]));
    }

    #[test]
    fn test_stats_track_hits_and_misses() {
        let cache = EmbeddingCache::new(10, 60);
        cache.set("a", vec![1.0]);
        cache.get("a");
        cache.get("b");

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert!((stats.hit_rate() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ttl_expiry() {
        let cache = EmbeddingCache::new(10, 0);
        cache.set("a", vec![1.0]);
        assert_eq!(cache.get("a"), None);
    }
}
