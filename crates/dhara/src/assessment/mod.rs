//! Questionnaire scoring and dominant-dosha classification.
//!
//! Data flows from the [`QuestionBank`] through [`accumulate`] into a [`ScoreMap`],
//! which [`resolve`] turns into a [`ResolvedCategory`]. From there the interactive path
//! looks up an [`AdviceRecord`] and the training path assigns a [`LabelClass`].

pub mod advice;
pub mod domain;
pub mod engine;
pub mod questions;
pub mod report;
pub mod resolver;
pub mod router;
pub mod scoring;
pub mod symptoms;
pub mod tips;
pub mod training;

#[cfg(test)]
mod tests;

pub use advice::{AdviceBook, AdviceRecord};
pub use domain::{
    AnswerSelection, Dosha, ParseCategoryError, ResolvedCategory, ScoreMap, ScoreShare,
    SelectionError,
};
pub use engine::AssessmentEngine;
pub use questions::{AnswerOption, Question, QuestionBank};
pub use report::AssessmentReport;
pub use resolver::resolve;
pub use router::assessment_router;
pub use scoring::{accumulate, score_terms};
pub use symptoms::{KeywordHit, SymptomDetection, SymptomLexicon, SymptomMatch};
pub use tips::{MenuChoice, QuickTopic};
pub use training::export::{DatasetError, DatasetManifest};
pub use training::{generate_samples, LabelClass, TrainingSample};
