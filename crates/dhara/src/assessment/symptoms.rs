use super::domain::{Dosha, ScoreMap};
use serde::Serialize;

/// A keyword found inside a symptom term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeywordHit {
    pub dosha: Dosha,
    pub keyword: &'static str,
}

/// A symptom term and every keyword it contains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymptomMatch {
    pub term: String,
    pub hits: Vec<KeywordHit>,
}

/// Terms pulled out of free text together with the scores they contribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymptomDetection {
    pub matches: Vec<SymptomMatch>,
    pub scores: ScoreMap,
}

impl SymptomDetection {
    pub fn terms(&self) -> Vec<String> {
        self.matches.iter().map(|found| found.term.clone()).collect()
    }
}

/// Keyword sets per category, matched by lower-case substring.
#[derive(Debug, Clone)]
pub struct SymptomLexicon {
    keywords: Vec<(Dosha, Vec<&'static str>)>,
}

impl SymptomLexicon {
    pub fn standard() -> Self {
        Self {
            keywords: vec![
                (
                    Dosha::Vata,
                    vec![
                        "dry",
                        "cold",
                        "light",
                        "anxiety",
                        "insomnia",
                        "bloating",
                        "gas",
                        "constipation",
                        "pain",
                        "tremors",
                    ],
                ),
                (
                    Dosha::Pitta,
                    vec![
                        "hot",
                        "sharp",
                        "acid",
                        "anger",
                        "inflammation",
                        "rashes",
                        "heartburn",
                        "fever",
                        "burning",
                    ],
                ),
                (
                    Dosha::Kapha,
                    vec![
                        "heavy",
                        "oily",
                        "slow",
                        "lethargy",
                        "congestion",
                        "mucus",
                        "weight gain",
                        "swelling",
                        "depression",
                    ],
                ),
            ],
        }
    }

    pub fn keywords_for(&self, dosha: Dosha) -> &[&'static str] {
        self.keywords
            .iter()
            .find(|(candidate, _)| *candidate == dosha)
            .map(|(_, words)| words.as_slice())
            .unwrap_or(&[])
    }

    /// Flat keyword list in category order, then declaration order.
    pub fn all_keywords(&self) -> impl Iterator<Item = KeywordHit> + '_ {
        self.keywords.iter().flat_map(|(dosha, words)| {
            words.iter().map(move |keyword| KeywordHit {
                dosha: *dosha,
                keyword: *keyword,
            })
        })
    }

    /// Every keyword contained in `term`. Matching is case-insensitive.
    pub fn hits(&self, term: &str) -> Vec<KeywordHit> {
        let lowered = term.to_lowercase();
        self.all_keywords()
            .filter(|hit| lowered.contains(hit.keyword))
            .collect()
    }

    /// Extract symptom terms and their category contributions in one pass.
    ///
    /// Comma-separated input is taken as an explicit list: every trimmed part is kept,
    /// matched or not. Otherwise each keyword contained in the text becomes a term.
    /// Returns `None` when there is no comma and no keyword matched.
    pub fn detect(&self, text: &str) -> Option<SymptomDetection> {
        let lowered = text.to_lowercase();

        let matches: Vec<SymptomMatch> = if lowered.contains(',') {
            lowered
                .split(',')
                .map(|part| {
                    let term = part.trim().to_string();
                    let hits = self.hits(&term);
                    SymptomMatch { term, hits }
                })
                .collect()
        } else {
            self.all_keywords()
                .filter(|hit| lowered.contains(hit.keyword))
                .map(|hit| SymptomMatch {
                    term: hit.keyword.to_string(),
                    hits: self.hits(hit.keyword),
                })
                .collect()
        };

        if matches.is_empty() {
            return None;
        }

        let mut scores = ScoreMap::new();
        for hit in matches.iter().flat_map(|found| found.hits.iter()) {
            scores.add(hit.dosha, 1);
        }

        Some(SymptomDetection { matches, scores })
    }

    /// Symptom terms found in `text`, or `None` when nothing was detected.
    pub fn extract_symptoms(&self, text: &str) -> Option<Vec<String>> {
        self.detect(text).map(|detection| detection.terms())
    }
}

impl Default for SymptomLexicon {
    fn default() -> Self {
        Self::standard()
    }
}
