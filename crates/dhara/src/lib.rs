//! Dosha questionnaire scoring engine.
//!
//! The [`assessment`] module holds the question bank, score accumulation, the
//! dominant-category resolver, advice lookup, free-text symptom extraction and the
//! synthetic training data generator. [`config`], [`error`] and [`telemetry`] carry the
//! process-level plumbing shared by the CLI and HTTP surfaces.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
