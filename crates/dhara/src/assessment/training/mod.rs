//! Synthetic labelled data drawn from the rule-based scorer.
//!
//! Random answer combinations are pushed through [`accumulate`] and [`resolve`] and the
//! resolved category becomes the ground-truth label. The samples are handed unchanged
//! to an external trainer; [`export`] only covers the files that trainer reads.

pub mod export;

use super::domain::{AnswerSelection, Dosha, ResolvedCategory};
use super::questions::QuestionBank;
use super::resolver::resolve;
use super::scoring::accumulate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Fixed 7-way label enumeration. Both orderings of a pair share one class, and the
/// "Unknown" and "None" outcomes share the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelClass {
    Vata,
    Pitta,
    Kapha,
    VataPitta,
    PittaKapha,
    VataKapha,
    Unknown,
}

impl LabelClass {
    pub const ALL: [Self; 7] = [
        Self::Vata,
        Self::Pitta,
        Self::Kapha,
        Self::VataPitta,
        Self::PittaKapha,
        Self::VataKapha,
        Self::Unknown,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub const fn index(self) -> usize {
        match self {
            Self::Vata => 0,
            Self::Pitta => 1,
            Self::Kapha => 2,
            Self::VataPitta => 3,
            Self::PittaKapha => 4,
            Self::VataKapha => 5,
            Self::Unknown => 6,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Category name written next to the index in label listings.
    pub const fn canonical_name(self) -> &'static str {
        match self {
            Self::Vata => "Vata",
            Self::Pitta => "Pitta",
            Self::Kapha => "Kapha",
            Self::VataPitta => "Vata-Pitta",
            Self::PittaKapha => "Pitta-Kapha",
            Self::VataKapha => "Vata-Kapha",
            Self::Unknown => "Unknown",
        }
    }

    /// `None` for categories outside the enumeration, such as a pair of one dosha.
    pub fn from_category(category: ResolvedCategory) -> Option<Self> {
        use Dosha::{Kapha, Pitta, Vata};

        match category.canonical() {
            ResolvedCategory::Single(Vata) => Some(Self::Vata),
            ResolvedCategory::Single(Pitta) => Some(Self::Pitta),
            ResolvedCategory::Single(Kapha) => Some(Self::Kapha),
            ResolvedCategory::Dual {
                primary: Vata,
                secondary: Pitta,
            } => Some(Self::VataPitta),
            ResolvedCategory::Dual {
                primary: Pitta,
                secondary: Kapha,
            } => Some(Self::PittaKapha),
            ResolvedCategory::Dual {
                primary: Vata,
                secondary: Kapha,
            } => Some(Self::VataKapha),
            ResolvedCategory::Unknown | ResolvedCategory::Unscored => Some(Self::Unknown),
            ResolvedCategory::Dual { .. } => None,
        }
    }

    /// Label for a category, defaulting to [`LabelClass::Unknown`] so a batch never aborts.
    pub fn for_category_or_unknown(category: ResolvedCategory) -> Self {
        Self::from_category(category).unwrap_or_else(|| {
            debug!(%category, "category missing from label enumeration; using Unknown");
            Self::Unknown
        })
    }
}

/// One feature vector (chosen option index per question) and its label index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSample {
    pub features: Vec<f32>,
    pub label: usize,
}

impl TrainingSample {
    pub fn label_class(&self) -> Option<LabelClass> {
        LabelClass::from_index(self.label)
    }
}

/// Draw `count` random answer sets and label each with the rule-based outcome.
///
/// Each question's option index is drawn uniformly and independently from that
/// question's own range, taken from the bank.
pub fn generate_samples<R: Rng>(
    bank: &QuestionBank,
    count: usize,
    rng: &mut R,
) -> Vec<TrainingSample> {
    let option_counts = bank.option_counts();
    let mut samples = Vec::with_capacity(count);

    for _ in 0..count {
        let selections: Vec<AnswerSelection> = option_counts
            .iter()
            .enumerate()
            .map(|(question, &options)| {
                let option = if options == 0 {
                    0
                } else {
                    rng.gen_range(0..options)
                };
                AnswerSelection::new(question, option)
            })
            .collect();

        let category = resolve(&accumulate(bank, &selections));
        let label = LabelClass::for_category_or_unknown(category);

        samples.push(TrainingSample {
            features: selections
                .iter()
                .map(|selection| selection.option as f32)
                .collect(),
            label: label.index(),
        });
    }

    samples
}

/// Number of samples per label index. Labels outside the enumeration are not counted.
pub fn label_histogram(samples: &[TrainingSample]) -> [usize; LabelClass::COUNT] {
    let mut counts = [0; LabelClass::COUNT];
    for sample in samples {
        match counts.get_mut(sample.label) {
            Some(count) => *count += 1,
            None => debug!(label = sample.label, "sample label outside enumeration; not counted"),
        }
    }
    counts
}
