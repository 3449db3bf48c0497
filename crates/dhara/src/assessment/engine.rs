use super::advice::{AdviceBook, AdviceRecord};
use super::domain::{AnswerSelection, ResolvedCategory, ScoreMap};
use super::questions::QuestionBank;
use super::report::AssessmentReport;
use super::resolver::resolve;
use super::scoring::accumulate;
use super::symptoms::SymptomLexicon;
use super::training::{generate_samples, label_histogram, TrainingSample};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tracing::{debug, info};

/// Read-only tables shared by every assessment, built once at start-up.
#[derive(Debug, Clone)]
pub struct AssessmentEngine {
    bank: Arc<QuestionBank>,
    advice: Arc<AdviceBook>,
    lexicon: Arc<SymptomLexicon>,
}

impl AssessmentEngine {
    pub fn new(bank: QuestionBank, advice: AdviceBook, lexicon: SymptomLexicon) -> Self {
        Self {
            bank: Arc::new(bank),
            advice: Arc::new(advice),
            lexicon: Arc::new(lexicon),
        }
    }

    pub fn standard() -> Self {
        Self::new(
            QuestionBank::standard(),
            AdviceBook::standard(),
            SymptomLexicon::standard(),
        )
    }

    pub fn questions(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn advice_book(&self) -> &AdviceBook {
        &self.advice
    }

    pub fn lexicon(&self) -> &SymptomLexicon {
        &self.lexicon
    }

    pub fn advice_for(&self, category: ResolvedCategory) -> &AdviceRecord {
        self.advice.lookup(category)
    }

    /// Score questionnaire answers and attach the matching advice.
    pub fn assess_answers(&self, selections: &[AnswerSelection]) -> AssessmentReport {
        let scores = accumulate(&self.bank, selections);
        self.report(scores, None)
    }

    /// Score free text, or `None` when no symptom could be detected.
    pub fn assess_text(&self, text: &str) -> Option<AssessmentReport> {
        let detection = self.lexicon.detect(text)?;
        let terms = detection.terms();
        Some(self.report(detection.scores, Some(terms)))
    }

    fn report(&self, scores: ScoreMap, symptoms: Option<Vec<String>>) -> AssessmentReport {
        let imbalance = resolve(&scores);
        debug!(%imbalance, total = scores.total(), "assessment resolved");

        AssessmentReport {
            shares: scores.shares(),
            advice: self.advice.lookup(imbalance).clone(),
            scores,
            imbalance,
            symptoms,
        }
    }

    /// Generate a labelled batch; a fixed seed makes the batch reproducible.
    pub fn generate_samples(&self, count: usize, seed: Option<u64>) -> Vec<TrainingSample> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let samples = generate_samples(&self.bank, count, &mut rng);
        info!(
            count = samples.len(),
            ?seed,
            labels = ?label_histogram(&samples),
            "generated synthetic training batch"
        );
        samples
    }
}

impl Default for AssessmentEngine {
    fn default() -> Self {
        Self::standard()
    }
}
