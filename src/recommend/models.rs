use serde::{Deserialize, Serialize};

use crate::core::error::{Result, YunoError};
use crate::store::{Metadata, Stage};

pub const DEFAULT_LIMIT: usize = 3;
pub const MAX_LIMIT: usize = 20;

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

/// Recommendation request as it arrives on the wire. `user_stage` stays a
/// raw string here so validation can reject it with a precise error instead
/// of a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub user_query: String,
    pub user_stage: String,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl RecommendRequest {
    /// Fail-fast request validation, before any embedding or query work.
    pub fn validate(&self) -> Result<Stage> {
        if self.user_query.trim().is_empty() {
            return Err(YunoError::Validation(
                "user_query must not be empty".to_string(),
            ));
        }
        if self.limit < 1 || self.limit > MAX_LIMIT {
            return Err(YunoError::Validation(format!(
                "limit must be between 1 and {MAX_LIMIT}"
            )));
        }
        self.user_stage
            .parse()
            .map_err(|_| YunoError::InvalidStage(self.user_stage.clone()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationItem {
    pub id: String,
    pub score: f64,
    pub metadata: Metadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryInfo {
    pub original_query: String,
    pub user_stage: String,
    pub limit: usize,
    pub upskilling_found: usize,
    pub holistic_found: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub upskilling_recommendations: Vec<RecommendationItem>,
    pub holistic_recommendations: Vec<RecommendationItem>,
    pub query_info: QueryInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(query: &str, stage: &str, limit: usize) -> RecommendRequest {
        RecommendRequest {
            user_query: query.to_string(),
            user_stage: stage.to_string(),
            limit,
        }
    }

    #[test]
    fn test_valid_request_yields_stage() {
        let stage = request("painting", "Post-Secondary", 3).validate().unwrap();
        assert_eq!(stage, Stage::PostSecondary);
    }

    #[test]
    fn test_empty_query_rejected() {
        let result = request("  ", "Secondary", 3).validate();
        assert!(matches!(result, Err(YunoError::Validation(_))));
    }

    #[test]
    fn test_invalid_stage_rejected() {
        let result = request("painting", "Kindergarten", 3).validate();
        assert!(matches!(result, Err(YunoError::InvalidStage(_))));
    }

    #[test]
    fn test_limit_boundaries() {
        assert!(request("q", "Secondary", 1).validate().is_ok());
        assert!(request("q", "Secondary", 20).validate().is_ok());
        assert!(matches!(
            request("q", "Secondary", 0).validate(),
            Err(YunoError::Validation(_))
        ));
        assert!(matches!(
            request("q", "Secondary", 21).validate(),
            Err(YunoError::Validation(_))
        ));
    }

    #[test]
    fn test_limit_defaults_to_three() {
        let parsed: RecommendRequest = serde_json::from_str(
            r#"{"user_query": "painting", "user_stage": "Secondary"}"#,
        )
        .unwrap();
        assert_eq!(parsed.limit, DEFAULT_LIMIT);
    }
}
