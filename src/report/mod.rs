//! Consultation report: a shareable snapshot of a finished session.
//!
//! Consumes the session at its terminal phase; rendered as Markdown for
//! the chat surface and as an A4 PDF for download.

pub mod pdf;

use chrono::Local;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::messages::ScriptMessages;
use crate::engine::summary::{label_for, NOT_SPECIFIED};
use crate::models::Session;
use crate::triage::ANSWER_KEYS;

pub use pdf::generate_report_pdf;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("PDF generation failed: {0}")]
    Pdf(String),
}

/// One labelled line of the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportField {
    pub label: String,
    pub value: String,
}

/// Snapshot of a consultation, ready for rendering or export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsultationReport {
    pub title: String,
    pub session_id: String,
    pub generated_at: String,
    pub urgency: String,
    pub specialty: String,
    /// Main symptom, demographics, then the answer slots in order.
    pub fields: Vec<ReportField>,
    pub detected_symptoms: Vec<String>,
    pub disclaimer: String,
}

impl ConsultationReport {
    /// Build a report from a session snapshot. Intended for sessions at
    /// the terminal phase; earlier snapshots simply show more
    /// "Not specified" entries.
    pub fn from_session(session: &Session) -> Self {
        let mut fields = Vec::new();

        let mut push = |label: &str, value: Option<String>| {
            fields.push(ReportField {
                label: label.to_string(),
                value: value.unwrap_or_else(|| NOT_SPECIFIED.to_string()),
            });
        };

        push("Main symptom", session.main_symptom.clone());
        push("Age", session.age.map(|a| a.to_string()));
        push(
            "Gender",
            session.gender.as_ref().map(|g| g.as_str().to_string()),
        );
        for key in ANSWER_KEYS {
            push(&label_for(key), session.answer(key).map(str::to_string));
        }

        Self {
            title: "Consultation Summary".to_string(),
            session_id: session.id.to_string(),
            generated_at: Local::now().naive_local().format("%Y-%m-%d %H:%M").to_string(),
            urgency: session.urgency_level.as_str().to_string(),
            specialty: session
                .specialty_recommendation
                .clone()
                .unwrap_or_else(|| NOT_SPECIFIED.to_string()),
            fields,
            detected_symptoms: session.detected_symptoms.clone(),
            disclaimer: ScriptMessages::summary_disclaimer(),
        }
    }

    /// Markdown rendering for the chat surface and plain-text export.
    pub fn render_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("## {}\n\n", self.title));
        out.push_str(&format!("Generated: {}\n\n", self.generated_at));
        out.push_str(&format!("**Urgency assessment:** {}\n", self.urgency));
        out.push_str(&format!("**Suggested specialty:** {}\n", self.specialty));
        if !self.detected_symptoms.is_empty() {
            out.push_str(&format!(
                "**Detected symptom tags:** {}\n",
                self.detected_symptoms.join(", ")
            ));
        }
        out.push('\n');
        for field in &self.fields {
            out.push_str(&format!("- **{}:** {}\n", field.label, field.value));
        }
        out.push('\n');
        out.push_str(&format!("*{}*\n", self.disclaimer));
        out
    }
}
