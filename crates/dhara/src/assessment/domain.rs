use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The three constitutional categories a score accumulates toward.
///
/// Declaration order is the canonical order: ties in the resolver and pair
/// normalization both fall back to it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Dosha {
    Vata,
    Pitta,
    Kapha,
}

impl Dosha {
    pub const fn ordered() -> [Self; 3] {
        [Self::Vata, Self::Pitta, Self::Kapha]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Vata => "Vata",
            Self::Pitta => "Pitta",
            Self::Kapha => "Kapha",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "vata" => Some(Self::Vata),
            "pitta" => Some(Self::Pitta),
            "kapha" => Some(Self::Kapha),
            _ => None,
        }
    }
}

impl fmt::Display for Dosha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One answer picked from the question bank, addressed by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnswerSelection {
    pub question: usize,
    pub option: usize,
}

impl AnswerSelection {
    pub const fn new(question: usize, option: usize) -> Self {
        Self { question, option }
    }
}

/// Selection rejected by strict validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("question {question} does not exist (bank has {available} questions)")]
    UnknownQuestion { question: usize, available: usize },
    #[error("option {option} is out of range for question {question} ({available} options)")]
    UnknownOption {
        question: usize,
        option: usize,
        available: usize,
    },
}

/// Accumulated integer weight per category.
///
/// Values only ever grow, so they are unsigned. A map built with [`ScoreMap::new`]
/// carries all three categories at zero; [`ScoreMap::empty`] carries none and exists
/// so the resolver's "no categories at all" outcome stays representable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreMap {
    scores: BTreeMap<Dosha, u32>,
}

impl ScoreMap {
    pub fn new() -> Self {
        Self {
            scores: Dosha::ordered().into_iter().map(|dosha| (dosha, 0)).collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            scores: BTreeMap::new(),
        }
    }

    pub fn add(&mut self, dosha: Dosha, points: u32) {
        *self.scores.entry(dosha).or_insert(0) += points;
    }

    pub fn get(&self, dosha: Dosha) -> u32 {
        self.scores.get(&dosha).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn total(&self) -> u32 {
        self.scores.values().sum()
    }

    /// Entries in canonical category order.
    pub fn iter(&self) -> impl Iterator<Item = (Dosha, u32)> + '_ {
        self.scores.iter().map(|(dosha, score)| (*dosha, *score))
    }

    /// Percentage and 20-cell bar fill per category; empty when nothing was scored.
    pub fn shares(&self) -> Vec<ScoreShare> {
        let total = self.total();
        if total == 0 {
            return Vec::new();
        }

        self.iter()
            .map(|(dosha, score)| ScoreShare {
                dosha,
                score,
                percent: score * 100 / total,
                bar_cells: BAR_WIDTH * score / total,
            })
            .collect()
    }
}

impl Default for ScoreMap {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> From<[(Dosha, u32); N]> for ScoreMap {
    fn from(entries: [(Dosha, u32); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl FromIterator<(Dosha, u32)> for ScoreMap {
    fn from_iter<I: IntoIterator<Item = (Dosha, u32)>>(iter: I) -> Self {
        let mut map = Self::empty();
        for (dosha, points) in iter {
            map.add(dosha, points);
        }
        map
    }
}

pub const BAR_WIDTH: u32 = 20;

/// One row of the balance chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreShare {
    pub dosha: Dosha,
    pub score: u32,
    pub percent: u32,
    pub bar_cells: u32,
}

/// Final single-or-paired classification derived from a score map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolvedCategory {
    Single(Dosha),
    /// Two close categories, highest score first.
    Dual { primary: Dosha, secondary: Dosha },
    /// Every category scored zero.
    Unknown,
    /// The score map had no categories at all. Renders as "None".
    Unscored,
}

impl ResolvedCategory {
    /// Pair with its members in canonical order; other variants unchanged.
    pub fn canonical(self) -> Self {
        match self {
            Self::Dual { primary, secondary } if secondary < primary => Self::Dual {
                primary: secondary,
                secondary: primary,
            },
            other => other,
        }
    }
}

impl fmt::Display for ResolvedCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(dosha) => f.write_str(dosha.label()),
            Self::Dual { primary, secondary } => write!(f, "{primary}-{secondary}"),
            Self::Unknown => f.write_str("Unknown"),
            Self::Unscored => f.write_str("None"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized category '{0}'")]
pub struct ParseCategoryError(pub String);

impl FromStr for ResolvedCategory {
    type Err = ParseCategoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("unknown") {
            return Ok(Self::Unknown);
        }
        if trimmed.eq_ignore_ascii_case("none") {
            return Ok(Self::Unscored);
        }

        let mut parts = trimmed.split('-');
        let first = parts.next().and_then(Dosha::from_label);
        let second = parts.next().map(Dosha::from_label);
        match (first, second, parts.next()) {
            (Some(dosha), None, None) => Ok(Self::Single(dosha)),
            (Some(primary), Some(Some(secondary)), None) if primary != secondary => {
                Ok(Self::Dual { primary, secondary })
            }
            _ => Err(ParseCategoryError(value.to_string())),
        }
    }
}

impl Serialize for ResolvedCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ResolvedCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
