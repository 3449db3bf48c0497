use super::advice::AdviceRecord;
use super::domain::{ResolvedCategory, ScoreMap, ScoreShare};
use serde::Serialize;

/// Everything a presentation layer needs to show one assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentReport {
    pub scores: ScoreMap,
    pub shares: Vec<ScoreShare>,
    pub imbalance: ResolvedCategory,
    pub advice: AdviceRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symptoms: Option<Vec<String>>,
}

impl AssessmentReport {
    pub fn is_dual(&self) -> bool {
        matches!(self.imbalance, ResolvedCategory::Dual { .. })
    }
}
