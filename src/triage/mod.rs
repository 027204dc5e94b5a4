//! Symptom triage: keyword screening of free-text symptom descriptions.
//!
//! Matching is deliberately plain case-insensitive substring search over
//! static tables, evaluated top-to-bottom. It is a documented decision
//! policy, not a classifier.

pub mod analyzer;
pub mod questions;
pub mod tables;

pub use analyzer::{analyze, TriageSignal};
pub use questions::{build_question_plan, ANSWER_KEYS};
