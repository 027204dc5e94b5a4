use std::collections::HashMap;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{Gender, MessageKind, MessageRole, Phase, UrgencyLevel};

/// A single chat message. Immutable once appended to the session timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub session_id: Uuid,
    pub role: MessageRole,
    pub kind: MessageKind,
    pub content: String,
    pub timestamp: NaiveDateTime,
}

/// One triage conversation. Created on the first inbound message and
/// mutated only by the conversation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub started_at: NaiveDateTime,
    pub phase: Phase,
    /// Append-only; insertion order is the timeline.
    pub messages: Vec<Message>,
    /// Slot key → answer text.
    pub collected_answers: HashMap<String, String>,
    pub main_symptom: Option<String>,
    pub detected_symptoms: Vec<String>,
    pub urgency_level: UrgencyLevel,
    pub specialty_recommendation: Option<String>,
    /// Generated once from the first symptom description, then fixed.
    pub dynamic_questions: Vec<String>,
    /// Cursor into `dynamic_questions`; never exceeds its length.
    pub current_question_index: usize,
    pub has_consented: bool,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
}

impl Session {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            started_at: Local::now().naive_local(),
            phase: Phase::Welcome,
            messages: Vec::new(),
            collected_answers: HashMap::new(),
            main_symptom: None,
            detected_symptoms: Vec::new(),
            urgency_level: UrgencyLevel::Low,
            specialty_recommendation: None,
            dynamic_questions: Vec::new(),
            current_question_index: 0,
            has_consented: false,
            age: None,
            gender: None,
        }
    }

    /// Append a user message and return a clone of it.
    pub fn push_user(&mut self, content: &str) -> Message {
        self.push(MessageRole::User, MessageKind::Text, content)
    }

    /// Append an assistant message and return a clone of it.
    pub fn push_assistant(&mut self, kind: MessageKind, content: &str) -> Message {
        self.push(MessageRole::Assistant, kind, content)
    }

    fn push(&mut self, role: MessageRole, kind: MessageKind, content: &str) -> Message {
        let msg = Message {
            id: Uuid::new_v4(),
            session_id: self.id,
            role,
            kind,
            content: content.to_string(),
            timestamp: Local::now().naive_local(),
        };
        self.messages.push(msg.clone());
        msg
    }

    /// Raise the urgency level. Monotonic: a lower incoming level is ignored
    /// so the session never downgrades within a conversation.
    pub fn raise_urgency(&mut self, level: UrgencyLevel) {
        if level.rank() > self.urgency_level.rank() {
            tracing::debug!(
                from = self.urgency_level.as_str(),
                to = level.as_str(),
                "session urgency raised"
            );
            self.urgency_level = level;
        }
    }

    /// Answer text for a slot key, if collected.
    pub fn answer(&self, key: &str) -> Option<&str> {
        self.collected_answers.get(key).map(String::as_str)
    }
}
