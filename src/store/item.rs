use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumString};

/// Flat attribute map attached to every catalog item. Values are scalars
/// (strings at the moment); `serde_json::Map` keeps key order stable.
pub type Metadata = serde_json::Map<String, Value>;

/// Eligibility tag partitioning items by education stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display)]
pub enum TargetAudience {
    Secondary,
    #[serde(rename = "Post-Secondary")]
    #[strum(serialize = "Post-Secondary")]
    PostSecondary,
    Both,
}

/// One record in a catalog collection. Immutable after load; the vector is
/// derived from `embedding_text` by the embedder during bootstrap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub embedding_text: String,
    pub vector: Vec<f32>,
    pub metadata: Metadata,
}

impl CatalogItem {
    pub fn target_audience(&self) -> Option<TargetAudience> {
        self.metadata
            .get("target_audience")
            .and_then(|v| v.as_str())
            .and_then(|s| s.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_target_audience_parses_from_metadata() {
        let mut metadata = Metadata::new();
        metadata.insert("target_audience".to_string(), json!("Post-Secondary"));

        let item = CatalogItem {
            id: "COURSE_0001".to_string(),
            embedding_text: "Watercolor Painting".to_string(),
            vector: vec![0.1, 0.2],
            metadata,
        };

        assert_eq!(item.target_audience(), Some(TargetAudience::PostSecondary));
    }

    #[test]
    fn test_missing_audience_is_none() {
        let item = CatalogItem {
            id: "COURSE_0002".to_string(),
            embedding_text: "Pottery".to_string(),
            vector: vec![0.1],
            metadata: Metadata::new(),
        };

        assert_eq!(item.target_audience(), None);
    }

    #[test]
    fn test_audience_round_trips_through_display() {
        for audience in [
            TargetAudience::Secondary,
            TargetAudience::PostSecondary,
            TargetAudience::Both,
        ] {
            let parsed: TargetAudience = audience.to_string().parse().unwrap();
            assert_eq!(parsed, audience);
        }
    }
}
