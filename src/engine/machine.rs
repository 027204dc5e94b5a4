//! The conversation state machine.
//!
//! One engine instance serves many sessions; live state sits in memory
//! behind an RwLock and is mirrored through the injected `SessionStore`
//! after every turn. All transitions are synchronous with respect to one
//! inbound message; collaborator failures are caught, surfaced as
//! transient warnings, and never roll back in-memory state.

use std::collections::HashMap;
use std::sync::{LazyLock, RwLock};

use regex::Regex;
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::models::enums::{Gender, Phase, UrgencyLevel};
use crate::models::{Message, PatientProfile, Session};
use crate::reply::{ReplyIntent, ReplyStrategy, ScriptedReplyStrategy};
use crate::store::SessionStore;
use crate::triage::{analyze, build_question_plan, ANSWER_KEYS};

use super::identity::IdentityProvider;
use super::summary::render_summary;
use super::EngineError;

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("Invalid digit pattern"));

/// What one inbound message produced.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    pub session_id: Uuid,
    pub phase: Phase,
    pub urgency: UrgencyLevel,
    /// Assistant messages emitted this turn, in emission order.
    pub messages: Vec<Message>,
    /// Transient, user-visible notices (persistence hiccups etc.).
    pub warnings: Vec<String>,
}

pub struct TriageEngine<S: SessionStore, R: ReplyStrategy, I: IdentityProvider> {
    sessions: RwLock<HashMap<Uuid, Session>>,
    store: S,
    reply: R,
    identity: I,
    config: EngineConfig,
}

impl<S: SessionStore, R: ReplyStrategy, I: IdentityProvider> TriageEngine<S, R, I> {
    pub fn new(store: S, reply: R, identity: I, config: EngineConfig) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            store,
            reply,
            identity,
            config,
        }
    }

    /// Snapshot of a live or persisted session.
    pub fn session(&self, id: Uuid) -> Option<Session> {
        if let Ok(sessions) = self.sessions.read() {
            if let Some(session) = sessions.get(&id) {
                return Some(session.clone());
            }
        }
        self.store.get(id).ok().flatten()
    }

    /// Process one inbound user message and return the assistant messages
    /// to render. Creates the session on first contact.
    pub fn handle_message(
        &self,
        session_id: Uuid,
        text: &str,
    ) -> Result<TurnOutcome, EngineError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(EngineError::EmptyMessage);
        }
        if text.chars().count() > self.config.max_message_chars {
            return Err(EngineError::MessageTooLong {
                limit: self.config.max_message_chars,
            });
        }

        let mut warnings = Vec::new();
        let mut sessions = self.sessions.write().map_err(|_| EngineError::LockFailed)?;
        let session = match sessions.entry(session_id) {
            std::collections::hash_map::Entry::Occupied(entry) => entry.into_mut(),
            std::collections::hash_map::Entry::Vacant(entry) => {
                let rehydrated = match self.store.get(session_id) {
                    Ok(found) => found,
                    Err(e) => {
                        tracing::warn!(error = %e, "session rehydration failed, starting fresh");
                        warnings.push(
                            "A previous conversation could not be restored; starting over."
                                .to_string(),
                        );
                        None
                    }
                };
                entry.insert(
                    rehydrated.unwrap_or_else(|| new_session(session_id, self.identity.profile())),
                )
            }
        };

        session.push_user(text);
        let emitted_from = session.messages.len();

        let intents = dispatch(session, text);

        for intent in intents {
            let content = match self.reply.render(session, &intent) {
                Ok(content) => content,
                Err(e) => {
                    tracing::warn!(error = %e, "reply rendering failed, using scripted text");
                    warnings.push("Reply generation fell back to standard wording.".to_string());
                    ScriptedReplyStrategy::text_for(&intent)
                }
            };
            session.push_assistant(intent.kind(), &content);
        }

        if let Err(e) = self.store.put(session) {
            tracing::warn!(error = %e, "session persistence failed, continuing in memory");
            warnings.push(
                "Your progress could not be saved just now; the conversation continues."
                    .to_string(),
            );
        }

        Ok(TurnOutcome {
            session_id,
            phase: session.phase.clone(),
            urgency: session.urgency_level.clone(),
            messages: session.messages[emitted_from..].to_vec(),
            warnings,
        })
    }
}

fn new_session(id: Uuid, profile: Option<PatientProfile>) -> Session {
    let mut session = Session::new(id);
    if let Some(profile) = profile {
        session.age = profile.age;
        session.gender = profile.gender;
        if !profile.conditions.is_empty() {
            // A later explicit answer overwrites this as a user correction.
            session
                .collected_answers
                .insert("chronic-conditions".into(), profile.conditions.join(", "));
        }
    }
    session
}

/// Advance the session for one user message and return the communication
/// goals for this turn, in emission order.
fn dispatch(session: &mut Session, text: &str) -> Vec<ReplyIntent> {
    let previous = session.phase.clone();
    let intents = match previous {
        Phase::Welcome => on_welcome(session),
        Phase::Consent => on_consent(session, text),
        Phase::SymptomGathering => on_symptom_gathering(session, text),
        Phase::AgeGender => on_age_gender(session, text),
        Phase::DynamicQuestions => on_dynamic_questions(session, text),
        Phase::Summary => Vec::new(),
    };
    if session.phase != previous {
        tracing::debug!(
            from = previous.as_str(),
            to = session.phase.as_str(),
            "phase transition"
        );
    }
    intents
}

fn on_welcome(session: &mut Session) -> Vec<ReplyIntent> {
    session.phase = Phase::Consent;
    vec![ReplyIntent::EmergencyNotice, ReplyIntent::ConsentRequest]
}

fn on_consent(session: &mut Session, text: &str) -> Vec<ReplyIntent> {
    let lower = text.to_lowercase();
    if lower.contains("agree") || lower.contains("yes") {
        session.has_consented = true;
        session.phase = Phase::SymptomGathering;
        vec![ReplyIntent::ConsentAck]
    } else {
        vec![ReplyIntent::ConsentReprompt]
    }
}

fn on_symptom_gathering(session: &mut Session, text: &str) -> Vec<ReplyIntent> {
    session.main_symptom = Some(text.to_string());

    let signal = analyze(text);
    session.detected_symptoms = signal.symptoms;
    session.raise_urgency(signal.urgency);
    if session.specialty_recommendation.is_none() {
        session.specialty_recommendation = Some(signal.specialty);
    }
    // Computed once; never regenerated even if this phase is re-entered.
    if session.dynamic_questions.is_empty() {
        session.dynamic_questions = build_question_plan(text);
    }

    let mut intents = Vec::new();
    if session.urgency_level.needs_notice() {
        intents.push(ReplyIntent::UrgentNotice(session.urgency_level.clone()));
    }

    if session.age.is_some() && session.gender.is_some() {
        // Identity collaborator covered demographics; skip collection.
        advance_to_questions(session, &mut intents);
    } else if session.age.is_some() {
        session.phase = Phase::AgeGender;
        intents.push(ReplyIntent::GenderRequest);
    } else {
        session.phase = Phase::AgeGender;
        intents.push(ReplyIntent::AgeRequest);
    }
    intents
}

fn on_age_gender(session: &mut Session, text: &str) -> Vec<ReplyIntent> {
    let mut intents = Vec::new();

    if session.age.is_none() {
        match extract_age(text) {
            Some(age) => {
                session.age = Some(age);
                if session.gender.is_some() {
                    advance_to_questions(session, &mut intents);
                } else {
                    intents.push(ReplyIntent::GenderRequest);
                }
            }
            // Age stays unset and the phase is held, with no re-prompt.
            None => {}
        }
    } else {
        if session.gender.is_none() {
            session.gender = Some(classify_gender(text));
        }
        advance_to_questions(session, &mut intents);
    }

    intents
}

fn on_dynamic_questions(session: &mut Session, text: &str) -> Vec<ReplyIntent> {
    let idx = session.current_question_index;
    // Answers are recorded by cursor position against the fixed slot list;
    // positions past the last slot are dropped while the cursor advances.
    if let Some(key) = ANSWER_KEYS.get(idx) {
        session.collected_answers.insert(key.to_string(), text.to_string());
    }
    session.current_question_index += 1;

    if session.current_question_index >= session.dynamic_questions.len() {
        session.phase = Phase::Summary;
        vec![ReplyIntent::Summary(render_summary(session))]
    } else {
        next_question(session).into_iter().collect()
    }
}

fn advance_to_questions(session: &mut Session, intents: &mut Vec<ReplyIntent>) {
    session.phase = Phase::DynamicQuestions;
    intents.extend(next_question(session));
}

fn next_question(session: &Session) -> Option<ReplyIntent> {
    session
        .dynamic_questions
        .get(session.current_question_index)
        .map(|q| ReplyIntent::Question(q.clone()))
}

/// Age is the first run of digits found anywhere in the message.
fn extract_age(text: &str) -> Option<u32> {
    DIGIT_RUN
        .find(text)
        .and_then(|m| m.as_str().parse::<u32>().ok())
}

/// Three-way substring check. "female" is tested before "male" because the
/// latter is a substring of the former.
fn classify_gender(text: &str) -> Gender {
    let lower = text.to_lowercase();
    if lower.contains("female") {
        Gender::Female
    } else if lower.contains("male") {
        Gender::Male
    } else {
        Gender::Other
    }
}
