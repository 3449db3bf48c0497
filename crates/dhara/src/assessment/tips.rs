use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Canned wellness replies offered next to the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickTopic {
    Stress,
    Diet,
    Sleep,
    Energy,
    Seasonal,
}

/// What a numbered menu entry leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    StartQuiz,
    Tip(QuickTopic),
}

impl QuickTopic {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Stress,
            Self::Diet,
            Self::Sleep,
            Self::Energy,
            Self::Seasonal,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Stress => "stress",
            Self::Diet => "diet",
            Self::Sleep => "sleep",
            Self::Energy => "energy",
            Self::Seasonal => "seasonal",
        }
    }

    pub const fn reply(self) -> &'static str {
        match self {
            Self::Stress => {
                "Stress may indicate Vata imbalance. Try warm tea, deep breathing & early sleep."
            }
            Self::Diet => "Eat warm, freshly cooked meals. Avoid processed & cold foods.",
            Self::Sleep => {
                "Sleep tip: Oil massage feet, avoid screens before bed, drink warm milk."
            }
            Self::Energy => "Boost energy with ginger tea, morning sunlight & light exercise.",
            Self::Seasonal => {
                "Seasonal tip: Eat according to weather. Prefer cooling foods in summer & warm foods in winter."
            }
        }
    }

    /// Map the numbered quick menu ("1" starts the quiz, "2".."6" are tips).
    pub fn from_menu_choice(choice: &str) -> Option<MenuChoice> {
        match choice.trim() {
            "1" => Some(MenuChoice::StartQuiz),
            "2" => Some(MenuChoice::Tip(Self::Stress)),
            "3" => Some(MenuChoice::Tip(Self::Diet)),
            "4" => Some(MenuChoice::Tip(Self::Sleep)),
            "5" => Some(MenuChoice::Tip(Self::Energy)),
            "6" => Some(MenuChoice::Tip(Self::Seasonal)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tip topic '{0}'")]
pub struct UnknownTopic(pub String);

impl FromStr for QuickTopic {
    type Err = UnknownTopic;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let lowered = value.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|topic| topic.key() == lowered)
            .ok_or_else(|| UnknownTopic(value.to_string()))
    }
}
