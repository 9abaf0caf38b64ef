use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::item::{Metadata, TargetAudience};

/// Education stage supplied by the caller. Validated at the request
/// boundary; everything past the orchestrator assumes a valid stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display)]
pub enum Stage {
    Secondary,
    #[serde(rename = "Post-Secondary")]
    #[strum(serialize = "Post-Secondary")]
    PostSecondary,
}

/// Typed metadata predicate restricting retrieval to items a stage may see.
/// Storage-agnostic: a linear scan or any vector index can apply it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudiencePredicate {
    accepted: [TargetAudience; 2],
}

impl AudiencePredicate {
    /// Secondary students see Secondary or Both content; Post-Secondary
    /// students see Post-Secondary or Both content.
    pub fn for_stage(stage: Stage) -> Self {
        let accepted = match stage {
            Stage::Secondary => [TargetAudience::Secondary, TargetAudience::Both],
            Stage::PostSecondary => [TargetAudience::PostSecondary, TargetAudience::Both],
        };
        Self { accepted }
    }

    pub fn matches(&self, metadata: &Metadata) -> bool {
        metadata
            .get("target_audience")
            .and_then(|v| v.as_str())
            .and_then(|s| s.parse::<TargetAudience>().ok())
            .map(|audience| self.accepted.contains(&audience))
            .unwrap_or(false)
    }
}
