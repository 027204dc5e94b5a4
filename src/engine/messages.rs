use crate::models::enums::UrgencyLevel;

/// Fixed phase strings for the scripted conversation.
/// Calm, non-diagnostic framing; the emergency notice is the one place
/// direct urgency wording is allowed.
pub struct ScriptMessages;

impl ScriptMessages {
    /// Shown once at the start of every conversation, before consent.
    pub fn emergency_notice() -> String {
        "Before we begin: if you are experiencing a medical emergency such as \
         chest pain, difficulty breathing, or severe bleeding, please stop and \
         call your local emergency number now. This assistant cannot diagnose \
         conditions or replace professional care."
            .to_string()
    }

    pub fn consent_request() -> String {
        "I can ask you a few questions about how you are feeling and prepare a \
         summary you can share with a doctor. Your answers are not medical \
         advice. Do you agree to continue? (Reply \"yes\" or \"I agree\".)"
            .to_string()
    }

    pub fn consent_reprompt() -> String {
        "To continue, I need your consent. Please reply \"yes\" or \"I agree\" \
         if you would like to proceed."
            .to_string()
    }

    pub fn consent_ack() -> String {
        "Thank you. To start, please describe your main symptom or concern in \
         your own words."
            .to_string()
    }

    /// Urgent notice for high/emergency classifications. Callers only pass
    /// levels where `needs_notice()` holds; lower tiers fall back to the
    /// high-urgency wording.
    pub fn urgent_notice(urgency: &UrgencyLevel) -> String {
        match urgency {
            UrgencyLevel::Emergency => {
                "Your description mentions warning signs that can indicate a \
                 medical emergency. Please contact your local emergency number \
                 or go to the nearest emergency department now. You can keep \
                 answering questions here, but do not delay seeking care."
                    .to_string()
            }
            _ => {
                "Your description suggests symptoms that should be assessed by \
                 a clinician soon, ideally today. You can keep answering \
                 questions here to prepare for that visit."
                    .to_string()
            }
        }
    }

    pub fn age_request() -> String {
        "May I ask your age? It helps put your answers in context.".to_string()
    }

    pub fn gender_request() -> String {
        "What is your gender? (male / female / other)".to_string()
    }

    /// Closing disclaimer appended to every consultation summary.
    pub fn summary_disclaimer() -> String {
        "This summary is based only on the information you provided. It is not \
         a diagnosis and does not replace professional medical advice. Please \
         share it with a qualified clinician."
            .to_string()
    }
}
