use dhara::assessment::AnswerSelection;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub(crate) enum AnswerParseError {
    #[error("answer '{0}' is not a number")]
    NotANumber(String),
    #[error("answers are numbered from 1 (question {question} got 0)")]
    ZeroOption { question: usize },
    #[error("no answers given")]
    Empty,
}

/// Parse a 1-based, comma-separated answer list such as `1,3,2,4`.
///
/// The n-th entry answers the n-th question. Range checks are left to the bank.
pub(crate) fn parse_answers(raw: &str) -> Result<Vec<AnswerSelection>, AnswerParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AnswerParseError::Empty);
    }

    trimmed
        .split(',')
        .enumerate()
        .map(|(question, part)| {
            let value = part.trim();
            let choice = value
                .parse::<usize>()
                .map_err(|_| AnswerParseError::NotANumber(value.to_string()))?;
            let option = choice
                .checked_sub(1)
                .ok_or(AnswerParseError::ZeroOption {
                    question: question + 1,
                })?;
            Ok(AnswerSelection::new(question, option))
        })
        .collect()
}
