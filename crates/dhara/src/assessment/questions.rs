use super::domain::{AnswerSelection, Dosha, SelectionError};
use serde::Serialize;
use std::collections::BTreeMap;

/// A selectable answer and the points it contributes per category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub label: &'static str,
    pub weights: BTreeMap<Dosha, u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub prompt: &'static str,
    pub options: Vec<AnswerOption>,
}

/// Immutable, ordered questionnaire shared by every assessment.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Number of options per question, in question order.
    pub fn option_counts(&self) -> Vec<usize> {
        self.questions
            .iter()
            .map(|question| question.options.len())
            .collect()
    }

    pub fn option(&self, selection: AnswerSelection) -> Option<&AnswerOption> {
        self.questions
            .get(selection.question)
            .and_then(|question| question.options.get(selection.option))
    }

    pub fn validate(&self, selection: AnswerSelection) -> Result<&AnswerOption, SelectionError> {
        let question =
            self.questions
                .get(selection.question)
                .ok_or(SelectionError::UnknownQuestion {
                    question: selection.question,
                    available: self.questions.len(),
                })?;

        question
            .options
            .get(selection.option)
            .ok_or(SelectionError::UnknownOption {
                question: selection.question,
                option: selection.option,
                available: question.options.len(),
            })
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::standard()
    }
}

fn option(label: &'static str, dosha: Dosha, points: u32) -> AnswerOption {
    AnswerOption {
        label,
        weights: BTreeMap::from([(dosha, points)]),
    }
}

fn standard_questions() -> Vec<Question> {
    use Dosha::{Kapha, Pitta, Vata};

    vec![
        Question {
            prompt: "How would you describe your emotional state currently?",
            options: vec![
                option("Anxiety, Fear", Vata, 2),
                option("Irritability, Anger", Pitta, 2),
                option("Sadness, Attachment", Kapha, 2),
                option("Restlessness", Vata, 1),
                option("Frustration", Pitta, 1),
                option("Laziness", Kapha, 1),
            ],
        },
        Question {
            prompt: "How is your energy level?",
            options: vec![
                option("Very Low", Kapha, 2),
                option("Unstable", Vata, 2),
                option("Intense / Overactive", Pitta, 2),
                option("Sluggish", Kapha, 1),
            ],
        },
        Question {
            prompt: "What is your dominant thought pattern?",
            options: vec![
                option("Overthinking", Vata, 2),
                option("Perfectionism", Pitta, 2),
                option("Rumination", Kapha, 2),
                option("Racing thoughts", Vata, 1),
                option("Critical thinking", Pitta, 1),
            ],
        },
        Question {
            prompt: "How is your sleep quality?",
            options: vec![
                option("Light / Broken sleep", Vata, 2),
                option("Waking at 2–3 AM", Pitta, 2),
                option("Oversleeping", Kapha, 2),
                option("Trouble falling asleep", Vata, 1),
            ],
        },
    ]
}
