//! Follow-up question tables and the per-session question plan.

/// Questions asked for every symptom description, in slot order.
pub static BASE_QUESTIONS: &[&str] = &[
    "How long have you been experiencing these symptoms?",
    "Where exactly do you feel the discomfort?",
    "How would you describe the sensation?",
    "On a scale of 1 to 10, how severe is it right now?",
    "Does anything make it better or worse?",
    "Have you noticed any other symptoms alongside this?",
];

/// Closing questions asked at the end of every consultation.
pub static STANDARD_QUESTIONS: &[&str] = &[
    "Have you had any recent injuries or accidents?",
    "Do you have any chronic medical conditions?",
    "Are you currently taking any medications?",
    "Do you have any known allergies?",
    "Is there anything else you are concerned about?",
];

pub const CONTEXTUAL_PAIN: &str = "Does the pain radiate or spread to other areas?";
pub const CONTEXTUAL_HEADACHE: &str = "Do you experience sensitivity to light or sound?";
pub const CONTEXTUAL_DIGESTIVE: &str =
    "Have you noticed any changes in appetite or digestion?";

/// At most this many contextual questions are inserted between the base
/// and standard blocks.
pub const MAX_CONTEXTUAL: usize = 2;

/// Ordered slot keys answers are recorded under, by question cursor
/// position. Contextual questions shift later answers across these slots;
/// answers past the last key are dropped while the cursor still advances.
pub static ANSWER_KEYS: &[&str] = &[
    "duration",
    "location",
    "description",
    "severity",
    "triggers",
    "other-symptoms",
    "injury-history",
    "chronic-conditions",
    "medications",
    "allergies",
    "concerns",
];

/// Analyzer follow-up sets. Exactly one set is chosen per description.
pub static PAIN_QUESTION_SET: &[&str] = &[
    "When did the pain start?",
    "Is the pain constant or does it come and go?",
    "Does the pain radiate or spread to other areas?",
];

pub static FEVER_QUESTION_SET: &[&str] = &[
    "Have you measured your temperature?",
    "Are you experiencing chills or sweating?",
    "Have you been around anyone who was ill?",
];

pub static BREATHING_QUESTION_SET: &[&str] = &[
    "Does the breathing difficulty occur at rest or with activity?",
    "Do you have any wheezing or chest tightness?",
    "Have you ever been diagnosed with asthma or another lung condition?",
];

pub static GENERIC_QUESTION_SET: &[&str] = &[
    "When did you first notice this?",
    "Has it been getting better, worse, or staying the same?",
    "Have you tried anything to relieve it?",
];

/// Build the fixed question plan for a session from the original symptom
/// text: base block, then up to two contextual questions, then the
/// standard closing block. Computed once per session and never
/// regenerated.
pub fn build_question_plan(symptom_text: &str) -> Vec<String> {
    let lower = symptom_text.to_lowercase();

    let mut contextual: Vec<&str> = Vec::new();
    if lower.contains("pain") {
        contextual.push(CONTEXTUAL_PAIN);
    }
    if lower.contains("headache") {
        contextual.push(CONTEXTUAL_HEADACHE);
    }
    if lower.contains("stomach") || lower.contains("abdominal") {
        contextual.push(CONTEXTUAL_DIGESTIVE);
    }
    contextual.truncate(MAX_CONTEXTUAL);

    BASE_QUESTIONS
        .iter()
        .chain(contextual.iter())
        .chain(STANDARD_QUESTIONS.iter())
        .map(|q| q.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_without_context_keywords_is_base_plus_standard() {
        let plan = build_question_plan("I feel tired all the time");
        assert_eq!(plan.len(), BASE_QUESTIONS.len() + STANDARD_QUESTIONS.len());
        assert_eq!(plan[0], BASE_QUESTIONS[0]);
        assert_eq!(plan[plan.len() - 1], *STANDARD_QUESTIONS.last().unwrap());
    }

    #[test]
    fn headache_adds_light_sensitivity_question() {
        let plan = build_question_plan("I've had a bad headache for 3 days");
        assert_eq!(plan.len(), 12);
        assert!(plan.iter().any(|q| q == CONTEXTUAL_HEADACHE));
        // Contextual block sits between base and standard.
        assert_eq!(plan[BASE_QUESTIONS.len()], CONTEXTUAL_HEADACHE);
    }

    #[test]
    fn contextual_questions_cap_at_two() {
        let plan = build_question_plan("headache and stomach pain");
        assert_eq!(
            plan.len(),
            BASE_QUESTIONS.len() + MAX_CONTEXTUAL + STANDARD_QUESTIONS.len()
        );
        // Priority order: pain, then headache; digestive is cut.
        assert_eq!(plan[BASE_QUESTIONS.len()], CONTEXTUAL_PAIN);
        assert_eq!(plan[BASE_QUESTIONS.len() + 1], CONTEXTUAL_HEADACHE);
        assert!(!plan.iter().any(|q| q == CONTEXTUAL_DIGESTIVE));
    }

    #[test]
    fn order_is_base_then_contextual_then_standard() {
        let plan = build_question_plan("abdominal cramps");
        assert!(plan[..BASE_QUESTIONS.len()]
            .iter()
            .map(String::as_str)
            .eq(BASE_QUESTIONS.iter().copied()));
        assert_eq!(plan[BASE_QUESTIONS.len()], CONTEXTUAL_DIGESTIVE);
        assert!(plan[BASE_QUESTIONS.len() + 1..]
            .iter()
            .map(String::as_str)
            .eq(STANDARD_QUESTIONS.iter().copied()));
    }

    #[test]
    fn answer_keys_cover_base_and_standard_blocks() {
        assert_eq!(
            ANSWER_KEYS.len(),
            BASE_QUESTIONS.len() + STANDARD_QUESTIONS.len()
        );
    }
}
