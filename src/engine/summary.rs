use crate::models::Session;
use crate::triage::ANSWER_KEYS;

use super::messages::ScriptMessages;

/// Substituted for any field the conversation did not collect.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Human-readable label for a slot key ("other-symptoms" → "Other symptoms").
pub fn label_for(key: &str) -> String {
    let spaced = key.replace('-', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => spaced,
    }
}

/// Render the terminal consultation summary as Markdown. Every slot key
/// appears, with `Not specified` for anything unanswered.
pub fn render_summary(session: &Session) -> String {
    let mut out = String::new();

    out.push_str("## Consultation Summary\n\n");

    push_field(
        &mut out,
        "Main symptom",
        session.main_symptom.as_deref(),
    );
    push_field(
        &mut out,
        "Age",
        session.age.map(|a| a.to_string()).as_deref(),
    );
    push_field(
        &mut out,
        "Gender",
        session.gender.as_ref().map(|g| g.as_str()),
    );
    push_field(
        &mut out,
        "Urgency assessment",
        Some(session.urgency_level.as_str()),
    );
    push_field(
        &mut out,
        "Suggested specialty",
        session.specialty_recommendation.as_deref(),
    );

    if !session.detected_symptoms.is_empty() {
        push_field(
            &mut out,
            "Detected symptom tags",
            Some(&session.detected_symptoms.join(", ")),
        );
    }

    out.push_str("\n### Your answers\n\n");
    for key in ANSWER_KEYS {
        let value = session.answer(key).unwrap_or(NOT_SPECIFIED);
        out.push_str(&format!("- **{}:** {}\n", label_for(key), value));
    }

    out.push('\n');
    out.push_str(&format!("*{}*\n", ScriptMessages::summary_disclaimer()));

    out
}

fn push_field(out: &mut String, label: &str, value: Option<&str>) {
    out.push_str(&format!(
        "**{}:** {}\n",
        label,
        value.unwrap_or(NOT_SPECIFIED)
    ));
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::models::enums::{Gender, UrgencyLevel};

    #[test]
    fn label_humanizes_keys() {
        assert_eq!(label_for("duration"), "Duration");
        assert_eq!(label_for("other-symptoms"), "Other symptoms");
        assert_eq!(label_for("chronic-conditions"), "Chronic conditions");
    }

    #[test]
    fn summary_contains_every_slot_label() {
        let session = Session::new(Uuid::new_v4());
        let summary = render_summary(&session);
        for key in ANSWER_KEYS {
            assert!(
                summary.contains(&format!("**{}:**", label_for(key))),
                "missing label for {key}"
            );
        }
    }

    #[test]
    fn unset_fields_render_not_specified() {
        let session = Session::new(Uuid::new_v4());
        let summary = render_summary(&session);
        // Nothing collected: every slot plus the header fields fall back.
        assert!(summary.matches(NOT_SPECIFIED).count() >= ANSWER_KEYS.len());
    }

    #[test]
    fn collected_fields_render_their_values() {
        let mut session = Session::new(Uuid::new_v4());
        session.main_symptom = Some("bad headache".into());
        session.age = Some(41);
        session.gender = Some(Gender::Female);
        session.urgency_level = UrgencyLevel::Low;
        session.specialty_recommendation = Some("Neurology".into());
        session
            .collected_answers
            .insert("duration".into(), "3 days".into());

        let summary = render_summary(&session);
        assert!(summary.contains("**Main symptom:** bad headache"));
        assert!(summary.contains("**Age:** 41"));
        assert!(summary.contains("**Gender:** female"));
        assert!(summary.contains("**Suggested specialty:** Neurology"));
        assert!(summary.contains("**Duration:** 3 days"));
    }

    #[test]
    fn summary_always_carries_the_disclaimer() {
        let session = Session::new(Uuid::new_v4());
        let summary = render_summary(&session);
        assert!(summary.contains("not a diagnosis"));
    }
}
