use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Distance metric used by a collection. Pinned by configuration so score
/// calibration is explicit rather than an accident of the backing index.
/// Both metrics keep typical distances near [0,1]: cosine distance is
/// `1 - cos` and euclidean is computed on unit-normalized vectors.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display, Default,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    #[default]
    Cosine,
    Euclidean,
}

impl DistanceMetric {
    pub fn distance(&self, a: &[f32], b: &[f32]) -> f64 {
        match self {
            DistanceMetric::Cosine => 1.0 - cosine_similarity(a, b),
            DistanceMetric::Euclidean => normalized_euclidean(a, b),
        }
    }
}

pub fn cosine_similarity(vec1: &[f32], vec2: &[f32]) -> f64 {
    if vec1.len() != vec2.len() || vec1.is_empty() {
        return 0.0;
    }

    let dot_product: f32 = vec1.iter().zip(vec2.iter()).map(|(a, b)| a * b).sum();
    let mag1: f32 = vec1.iter().map(|a| a * a).sum::<f32>().sqrt();
    let mag2: f32 = vec2.iter().map(|b| b * b).sum::<f32>().sqrt();

    if mag1 == 0.0 || mag2 == 0.0 {
        return 0.0;
    }

    (dot_product / (mag1 * mag2)) as f64
}

fn normalized_euclidean(vec1: &[f32], vec2: &[f32]) -> f64 {
    if vec1.len() != vec2.len() || vec1.is_empty() {
        return f64::MAX;
    }

    let mag1: f64 = vec1.iter().map(|a| (*a as f64).powi(2)).sum::<f64>().sqrt();
    let mag2: f64 = vec2.iter().map(|b| (*b as f64).powi(2)).sum::<f64>().sqrt();

    if mag1 == 0.0 || mag2 == 0.0 {
        return f64::MAX;
    }

    vec1.iter()
        .zip(vec2.iter())
        .map(|(a, b)| {
            let d = *a as f64 / mag1 - *b as f64 / mag2;
            d * d
        })
        .sum::<f64>()
        .sqrt()
}
