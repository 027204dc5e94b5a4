use crate::engine::messages::ScriptMessages;
use crate::models::Session;

use super::{ReplyError, ReplyIntent, ReplyStrategy};

/// Fixed phase strings. Infallible; the canonical wording every other
/// strategy falls back to.
pub struct ScriptedReplyStrategy;

impl ScriptedReplyStrategy {
    /// The fixed text for an intent, independent of session state except
    /// the urgency carried inside the intent itself.
    pub fn text_for(intent: &ReplyIntent) -> String {
        match intent {
            ReplyIntent::EmergencyNotice => ScriptMessages::emergency_notice(),
            ReplyIntent::ConsentRequest => ScriptMessages::consent_request(),
            ReplyIntent::ConsentReprompt => ScriptMessages::consent_reprompt(),
            ReplyIntent::ConsentAck => ScriptMessages::consent_ack(),
            ReplyIntent::UrgentNotice(urgency) => ScriptMessages::urgent_notice(urgency),
            ReplyIntent::AgeRequest => ScriptMessages::age_request(),
            ReplyIntent::GenderRequest => ScriptMessages::gender_request(),
            ReplyIntent::Question(text) => text.clone(),
            ReplyIntent::Summary(markdown) => markdown.clone(),
        }
    }
}

impl ReplyStrategy for ScriptedReplyStrategy {
    fn render(&self, _session: &Session, intent: &ReplyIntent) -> Result<String, ReplyError> {
        Ok(Self::text_for(intent))
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::models::enums::UrgencyLevel;

    #[test]
    fn questions_and_summaries_pass_through_verbatim() {
        let session = Session::new(Uuid::new_v4());
        let question = ReplyIntent::Question("How long have you felt this?".into());
        assert_eq!(
            ScriptedReplyStrategy.render(&session, &question).unwrap(),
            "How long have you felt this?"
        );

        let summary = ReplyIntent::Summary("## Consultation Summary".into());
        assert_eq!(
            ScriptedReplyStrategy.render(&session, &summary).unwrap(),
            "## Consultation Summary"
        );
    }

    #[test]
    fn scripted_intents_use_the_fixed_strings() {
        let session = Session::new(Uuid::new_v4());
        assert_eq!(
            ScriptedReplyStrategy
                .render(&session, &ReplyIntent::ConsentRequest)
                .unwrap(),
            ScriptMessages::consent_request()
        );
        assert_eq!(
            ScriptedReplyStrategy
                .render(&session, &ReplyIntent::UrgentNotice(UrgencyLevel::Emergency))
                .unwrap(),
            ScriptMessages::urgent_notice(&UrgencyLevel::Emergency)
        );
    }
}
