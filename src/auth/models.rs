use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub education_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Five-factor personality scores, serialized with the trait names the
/// assessment frontend uses as keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OceanScores {
    pub openness: i64,
    pub conscientiousness: i64,
    pub extraversion: i64,
    pub agreeableness: i64,
    pub neuroticism: i64,
}

impl Default for OceanScores {
    fn default() -> Self {
        Self {
            openness: 50,
            conscientiousness: 50,
            extraversion: 50,
            agreeableness: 50,
            neuroticism: 50,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: i64,
    pub username: String,
    pub education_level: String,
    pub riasec_code: String,
    pub ocean_scores: OceanScores,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub user_id: i64,
    pub event_id: String,
    /// 'course' or 'event'
    pub event_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRecord {
    pub booking_id: i64,
    pub user_id: i64,
    pub event_id: String,
    pub event_type: String,
    pub status: String,
    pub booking_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ocean_default_is_all_fifty() {
        let scores = OceanScores::default();
        assert_eq!(scores.openness, 50);
        assert_eq!(scores.neuroticism, 50);
    }

    #[test]
    fn test_ocean_serializes_with_trait_names() {
        let json = serde_json::to_value(OceanScores::default()).unwrap();
        assert_eq!(json["Openness"], 50);
        assert_eq!(json["Conscientiousness"], 50);
    }
}
