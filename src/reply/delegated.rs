use crate::models::enums::MessageRole;
use crate::models::Session;

use super::scripted::ScriptedReplyStrategy;
use super::{ReplyError, ReplyIntent, ReplyModel, ReplyStrategy};

/// How many trailing messages of the timeline go into the model prompt.
const HISTORY_WINDOW: usize = 8;

const SYSTEM_PROMPT: &str = "You are a calm, friendly intake assistant for a \
symptom triage service. You never diagnose, never prescribe, and never \
contradict the safety notices already shown. Rephrase the requested message \
naturally in one or two sentences, keeping its meaning intact. Reply with \
the message text only.";

/// Conversational turns are generated by a local language model; safety
/// notices, consent legal text, and the summary stay scripted. Any model
/// failure falls back to the scripted wording so a turn always completes.
pub struct DelegatedReplyStrategy<M: ReplyModel> {
    model_client: M,
    model: String,
}

impl<M: ReplyModel> DelegatedReplyStrategy<M> {
    pub fn new(model_client: M, model: String) -> Self {
        Self { model_client, model }
    }

    /// Only conversational intents are delegated. The fixed-content
    /// intents keep their deterministic wording in both reply modes.
    fn is_delegated(intent: &ReplyIntent) -> bool {
        matches!(
            intent,
            ReplyIntent::ConsentAck
                | ReplyIntent::AgeRequest
                | ReplyIntent::GenderRequest
                | ReplyIntent::Question(_)
        )
    }

    fn build_prompt(session: &Session, intent: &ReplyIntent) -> String {
        let mut prompt = String::new();

        prompt.push_str(&format!(
            "Conversation phase: {}. Urgency: {}.\n",
            session.phase.as_str(),
            session.urgency_level.as_str()
        ));
        if !session.detected_symptoms.is_empty() {
            prompt.push_str(&format!(
                "Detected symptoms: {}.\n",
                session.detected_symptoms.join(", ")
            ));
        }

        prompt.push_str("Recent conversation:\n");
        let start = session.messages.len().saturating_sub(HISTORY_WINDOW);
        for msg in &session.messages[start..] {
            let speaker = match msg.role {
                MessageRole::User => "Patient",
                MessageRole::Assistant => "Assistant",
            };
            prompt.push_str(&format!("{}: {}\n", speaker, msg.content));
        }

        prompt.push_str(&format!(
            "\nMessage to convey to the patient: \"{}\"\n",
            ScriptedReplyStrategy::text_for(intent)
        ));
        prompt
    }
}

impl<M: ReplyModel> ReplyStrategy for DelegatedReplyStrategy<M> {
    fn render(&self, session: &Session, intent: &ReplyIntent) -> Result<String, ReplyError> {
        if !Self::is_delegated(intent) {
            return Ok(ScriptedReplyStrategy::text_for(intent));
        }

        let prompt = Self::build_prompt(session, intent);
        match self.model_client.generate(&self.model, &prompt, SYSTEM_PROMPT) {
            Ok(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
            Ok(_) => {
                tracing::warn!("model returned empty reply, using scripted text");
                Ok(ScriptedReplyStrategy::text_for(intent))
            }
            Err(e) => {
                tracing::warn!(error = %e, "model reply failed, using scripted text");
                Ok(ScriptedReplyStrategy::text_for(intent))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::engine::messages::ScriptMessages;
    use crate::models::enums::UrgencyLevel;

    struct FixedModel(&'static str);

    impl ReplyModel for FixedModel {
        fn generate(&self, _: &str, _: &str, _: &str) -> Result<String, ReplyError> {
            Ok(self.0.to_string())
        }

        fn is_model_available(&self, _: &str) -> Result<bool, ReplyError> {
            Ok(true)
        }
    }

    struct FailingModel;

    impl ReplyModel for FailingModel {
        fn generate(&self, _: &str, _: &str, _: &str) -> Result<String, ReplyError> {
            Err(ReplyError::Connection("refused".into()))
        }

        fn is_model_available(&self, _: &str) -> Result<bool, ReplyError> {
            Ok(false)
        }
    }

    #[test]
    fn conversational_intents_use_the_model() {
        let strategy = DelegatedReplyStrategy::new(FixedModel("Sure, how old are you?"), "m".into());
        let session = Session::new(Uuid::new_v4());
        let text = strategy.render(&session, &ReplyIntent::AgeRequest).unwrap();
        assert_eq!(text, "Sure, how old are you?");
    }

    #[test]
    fn safety_intents_stay_scripted_even_with_a_model() {
        let strategy = DelegatedReplyStrategy::new(FixedModel("improvised"), "m".into());
        let session = Session::new(Uuid::new_v4());

        let notice = strategy
            .render(&session, &ReplyIntent::UrgentNotice(UrgencyLevel::Emergency))
            .unwrap();
        assert_eq!(notice, ScriptMessages::urgent_notice(&UrgencyLevel::Emergency));

        let summary = strategy
            .render(&session, &ReplyIntent::Summary("## S".into()))
            .unwrap();
        assert_eq!(summary, "## S");
    }

    #[test]
    fn model_failure_falls_back_to_scripted_text() {
        let strategy = DelegatedReplyStrategy::new(FailingModel, "m".into());
        let session = Session::new(Uuid::new_v4());
        let text = strategy
            .render(&session, &ReplyIntent::Question("How long?".into()))
            .unwrap();
        assert_eq!(text, "How long?");
    }

    #[test]
    fn empty_model_reply_falls_back_to_scripted_text() {
        let strategy = DelegatedReplyStrategy::new(FixedModel("   "), "m".into());
        let session = Session::new(Uuid::new_v4());
        let text = strategy.render(&session, &ReplyIntent::AgeRequest).unwrap();
        assert_eq!(text, ScriptMessages::age_request());
    }

    #[test]
    fn prompt_includes_recent_history_and_context() {
        let mut session = Session::new(Uuid::new_v4());
        session.detected_symptoms = vec!["headache".into()];
        session.push_user("my head hurts");

        let prompt = DelegatedReplyStrategy::<FixedModel>::build_prompt(
            &session,
            &ReplyIntent::AgeRequest,
        );
        assert!(prompt.contains("Detected symptoms: headache"));
        assert!(prompt.contains("Patient: my head hurts"));
        assert!(prompt.contains(&ScriptMessages::age_request()));
    }
}
