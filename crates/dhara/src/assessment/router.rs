use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{AnswerSelection, ResolvedCategory};
use super::engine::AssessmentEngine;
use super::tips::QuickTopic;

/// Upper bound on samples returned by a single HTTP request.
pub const MAX_SAMPLES_PER_REQUEST: usize = 10_000;

#[derive(Debug, Deserialize)]
pub(crate) struct AssessmentRequest {
    pub(crate) answers: Vec<AnswerSelection>,
    /// Reject out-of-range answers instead of skipping them.
    #[serde(default)]
    pub(crate) strict: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SymptomRequest {
    pub(crate) text: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SampleRequest {
    pub(crate) count: usize,
    #[serde(default)]
    pub(crate) seed: Option<u64>,
}

/// Router builder exposing the questionnaire, scoring and training-data endpoints.
pub fn assessment_router(engine: Arc<AssessmentEngine>) -> Router {
    Router::new()
        .route("/api/v1/questions", get(questions_handler))
        .route("/api/v1/assessments", post(assessment_handler))
        .route("/api/v1/symptoms", post(symptom_handler))
        .route("/api/v1/advice/:category", get(advice_handler))
        .route("/api/v1/tips/:topic", get(tip_handler))
        .route("/api/v1/samples", post(samples_handler))
        .with_state(engine)
}

pub(crate) async fn questions_handler(State(engine): State<Arc<AssessmentEngine>>) -> Response {
    (StatusCode::OK, axum::Json(engine.questions())).into_response()
}

pub(crate) async fn assessment_handler(
    State(engine): State<Arc<AssessmentEngine>>,
    axum::Json(request): axum::Json<AssessmentRequest>,
) -> Response {
    if request.strict {
        for selection in &request.answers {
            if let Err(error) = engine.questions().validate(*selection) {
                let payload = json!({ "error": error.to_string() });
                return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
            }
        }
    }

    let report = engine.assess_answers(&request.answers);
    (StatusCode::OK, axum::Json(report)).into_response()
}

pub(crate) async fn symptom_handler(
    State(engine): State<Arc<AssessmentEngine>>,
    axum::Json(request): axum::Json<SymptomRequest>,
) -> Response {
    match engine.assess_text(&request.text) {
        Some(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        None => {
            let payload = json!({
                "detected": false,
                "message": "Could you describe your symptoms or choose an option?",
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn advice_handler(
    State(engine): State<Arc<AssessmentEngine>>,
    Path(category): Path<String>,
) -> Response {
    let resolved = category
        .parse::<ResolvedCategory>()
        .unwrap_or(ResolvedCategory::Unknown);
    let payload = json!({
        "category": resolved.to_string(),
        "advice": engine.advice_for(resolved),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn tip_handler(Path(topic): Path<String>) -> Response {
    match topic.parse::<QuickTopic>() {
        Ok(topic) => {
            let payload = json!({ "topic": topic.key(), "reply": topic.reply() });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn samples_handler(
    State(engine): State<Arc<AssessmentEngine>>,
    axum::Json(request): axum::Json<SampleRequest>,
) -> Response {
    if request.count == 0 {
        let payload = json!({ "error": "count must be at least 1" });
        return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
    }

    let count = request.count.min(MAX_SAMPLES_PER_REQUEST);
    let samples = engine.generate_samples(count, request.seed);
    let payload = json!({
        "count": samples.len(),
        "seed": request.seed,
        "samples": samples,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}
