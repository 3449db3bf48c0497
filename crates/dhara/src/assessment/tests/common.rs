use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::assessment::domain::{AnswerSelection, Dosha, ScoreMap};
use crate::assessment::engine::AssessmentEngine;
use crate::assessment::questions::QuestionBank;
use crate::assessment::router::assessment_router;
use crate::assessment::symptoms::SymptomLexicon;

pub(super) fn bank() -> QuestionBank {
    QuestionBank::standard()
}

pub(super) fn lexicon() -> SymptomLexicon {
    SymptomLexicon::standard()
}

pub(super) fn engine() -> Arc<AssessmentEngine> {
    Arc::new(AssessmentEngine::standard())
}

pub(super) fn router() -> axum::Router {
    assessment_router(engine())
}

pub(super) fn selections(pairs: &[(usize, usize)]) -> Vec<AnswerSelection> {
    pairs
        .iter()
        .map(|&(question, option)| AnswerSelection::new(question, option))
        .collect()
}

pub(super) fn scores(vata: u32, pitta: u32, kapha: u32) -> ScoreMap {
    ScoreMap::from([
        (Dosha::Vata, vata),
        (Dosha::Pitta, pitta),
        (Dosha::Kapha, kapha),
    ])
}

/// Answers picking every option that leans fully toward Vata.
pub(super) fn all_vata_answers() -> Vec<AnswerSelection> {
    selections(&[(0, 0), (1, 1), (2, 0), (3, 0)])
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
