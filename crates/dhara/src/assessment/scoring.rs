use super::domain::{AnswerSelection, ScoreMap};
use super::questions::QuestionBank;
use super::symptoms::SymptomLexicon;
use tracing::debug;

/// Sum the weights of every selected option.
///
/// Selections pointing outside the bank are skipped rather than rejected; callers
/// wanting hard validation use [`QuestionBank::validate`] first.
pub fn accumulate(bank: &QuestionBank, selections: &[AnswerSelection]) -> ScoreMap {
    let mut scores = ScoreMap::new();

    for selection in selections {
        let Some(option) = bank.option(*selection) else {
            debug!(
                question = selection.question,
                option = selection.option,
                "skipping out-of-range answer selection"
            );
            continue;
        };

        for (dosha, points) in &option.weights {
            scores.add(*dosha, *points);
        }
    }

    scores
}

/// Score free-text terms: one point per keyword contained in each lower-cased term.
///
/// A single term may feed several categories, and the same category more than once.
pub fn score_terms<S: AsRef<str>>(lexicon: &SymptomLexicon, terms: &[S]) -> ScoreMap {
    let mut scores = ScoreMap::new();

    for term in terms {
        for hit in lexicon.hits(term.as_ref()) {
            scores.add(hit.dosha, 1);
        }
    }

    scores
}
