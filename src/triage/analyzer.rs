//! The symptom analyzer: free text in, triage signal out.
//!
//! Total over any input: there is no error path. Classification walks
//! the static tables in severity order; the first tier that matches wins.

use serde::{Deserialize, Serialize};

use crate::models::enums::UrgencyLevel;

use super::questions::{
    BREATHING_QUESTION_SET, FEVER_QUESTION_SET, GENERIC_QUESTION_SET, PAIN_QUESTION_SET,
};
use super::tables::{
    DEFAULT_SPECIALTY, EMERGENCY_PHRASES, HIGH_URGENCY_PHRASES, RED_FLAG_EMERGENCY,
    RED_FLAG_SUDDEN_SEVERE, SYMPTOM_SPECIALTIES,
};

/// Structured result of screening one symptom description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageSignal {
    /// Every symptom keyword found, in table-declaration order.
    pub symptoms: Vec<String>,
    pub urgency: UrgencyLevel,
    /// Specialty of the first matching keyword, or the default.
    pub specialty: String,
    /// Exactly one of the fixed follow-up sets.
    pub questions_to_ask: Vec<String>,
    /// Informational only; never feeds back into `urgency`.
    pub red_flags: Vec<String>,
}

/// Screen a symptom description. Case-insensitive substring matching
/// against the static tables; deterministic for any input.
pub fn analyze(text: &str) -> TriageSignal {
    let lower = text.to_lowercase();

    let urgency = classify_urgency(&lower);

    let mut symptoms = Vec::new();
    let mut specialty: Option<&str> = None;
    for (keyword, candidate) in SYMPTOM_SPECIALTIES {
        if lower.contains(keyword) {
            symptoms.push(keyword.to_string());
            if specialty.is_none() {
                specialty = Some(candidate);
            }
        }
    }

    let questions_to_ask = select_question_set(&lower)
        .iter()
        .map(|q| q.to_string())
        .collect();

    let mut red_flags = Vec::new();
    if urgency == UrgencyLevel::Emergency {
        red_flags.push(RED_FLAG_EMERGENCY.to_string());
    }
    if lower.contains("sudden") && lower.contains("severe") {
        red_flags.push(RED_FLAG_SUDDEN_SEVERE.to_string());
    }

    if urgency.needs_notice() {
        tracing::warn!(
            urgency = urgency.as_str(),
            symptoms = ?symptoms,
            "urgent triage classification"
        );
    }

    TriageSignal {
        symptoms,
        urgency,
        specialty: specialty.unwrap_or(DEFAULT_SPECIALTY).to_string(),
        questions_to_ask,
        red_flags,
    }
}

/// Tiered urgency walk. Emergency phrases first, then high-urgency, then
/// the bare severity adjectives, then low.
fn classify_urgency(lower: &str) -> UrgencyLevel {
    if EMERGENCY_PHRASES.iter().any(|p| lower.contains(p)) {
        return UrgencyLevel::Emergency;
    }
    if HIGH_URGENCY_PHRASES.iter().any(|p| lower.contains(p)) {
        return UrgencyLevel::High;
    }
    if lower.contains("severe") || lower.contains("intense") {
        return UrgencyLevel::Medium;
    }
    UrgencyLevel::Low
}

/// Exactly one fixed follow-up set is chosen; no mixing.
fn select_question_set(lower: &str) -> &'static [&'static str] {
    if lower.contains("pain") {
        PAIN_QUESTION_SET
    } else if lower.contains("fever") {
        FEVER_QUESTION_SET
    } else if lower.contains("breath") {
        BREATHING_QUESTION_SET
    } else {
        GENERIC_QUESTION_SET
    }
}
