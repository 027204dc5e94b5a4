//! Static keyword tables for the triage screen.
//!
//! Emergency and high-urgency rules are hard-coded; first match wins.
//! Declaration order of the specialty table is load-bearing: the first
//! matching keyword decides the recommendation.

/// Phrases that classify the description as an emergency.
pub static EMERGENCY_PHRASES: &[&str] = &[
    "chest pain",
    "chest tightness",
    "pressure in my chest",
    "difficulty breathing",
    "can't breathe",
    "cannot breathe",
    "struggling to breathe",
    "loss of consciousness",
    "lost consciousness",
    "passed out",
    "unconscious",
    "unresponsive",
    "severe bleeding",
    "bleeding heavily",
    "won't stop bleeding",
    "stroke",
    "face drooping",
    "slurred speech",
    "one side of my body",
    "seizure",
    "convulsion",
    "anaphylaxis",
    "throat is closing",
    "throat closing",
    "tongue swelling",
    "suicidal",
    "want to die",
    "kill myself",
    "end my life",
    "overdose",
    "coughing up blood",
    "vomiting blood",
];

/// Phrases that classify the description as high urgency (same-day care).
pub static HIGH_URGENCY_PHRASES: &[&str] = &[
    "severe pain",
    "excruciating",
    "unbearable pain",
    "high fever",
    "fever of 40",
    "fever of 104",
    "worst headache",
    "persistent vomiting",
    "vomiting for days",
    "can't keep anything down",
    "sudden vision loss",
    "can't see",
    "sudden hearing loss",
    "spreading redness",
    "red streaks",
    "wound is oozing",
    "pus",
    "stiff neck and fever",
];

/// Ordered symptom-keyword → specialty table. Every keyword present in the
/// input is collected as a tag; the first match decides the specialty.
pub static SYMPTOM_SPECIALTIES: &[(&str, &str)] = &[
    ("chest", "Cardiology"),
    ("heart", "Cardiology"),
    ("palpitation", "Cardiology"),
    ("swollen ankle", "Cardiology"),
    ("headache", "Neurology"),
    ("migraine", "Neurology"),
    ("dizzy", "Neurology"),
    ("dizziness", "Neurology"),
    ("numbness", "Neurology"),
    ("tingling", "Neurology"),
    ("memory", "Neurology"),
    ("tremor", "Neurology"),
    ("skin", "Dermatology"),
    ("rash", "Dermatology"),
    ("itch", "Dermatology"),
    ("acne", "Dermatology"),
    ("mole", "Dermatology"),
    ("eczema", "Dermatology"),
    ("stomach", "Gastroenterology"),
    ("abdominal", "Gastroenterology"),
    ("nausea", "Gastroenterology"),
    ("vomit", "Gastroenterology"),
    ("diarrhea", "Gastroenterology"),
    ("constipation", "Gastroenterology"),
    ("heartburn", "Gastroenterology"),
    ("bloating", "Gastroenterology"),
    ("cough", "Pulmonology"),
    ("breath", "Pulmonology"),
    ("wheez", "Pulmonology"),
    ("asthma", "Pulmonology"),
    ("joint", "Orthopedics"),
    ("back pain", "Orthopedics"),
    ("knee", "Orthopedics"),
    ("shoulder", "Orthopedics"),
    ("sprain", "Orthopedics"),
    ("fracture", "Orthopedics"),
    ("earache", "Otolaryngology"),
    ("sore throat", "Otolaryngology"),
    ("sinus", "Otolaryngology"),
    ("eye", "Ophthalmology"),
    ("vision", "Ophthalmology"),
    ("urine", "Urology"),
    ("urination", "Urology"),
    ("kidney", "Urology"),
    ("period", "Gynecology"),
    ("menstrual", "Gynecology"),
    ("pregnan", "Obstetrics"),
    ("anxiety", "Psychiatry"),
    ("depress", "Psychiatry"),
    ("insomnia", "Psychiatry"),
    ("fever", "General Practice"),
    ("fatigue", "General Practice"),
    ("tired", "General Practice"),
    ("cold", "General Practice"),
    ("flu", "General Practice"),
];

/// Fallback when no symptom keyword matches.
pub const DEFAULT_SPECIALTY: &str = "General Practice";

/// Red flag attached on any emergency phrase match. Informational only;
/// urgency is decided by the phrase lists above.
pub const RED_FLAG_EMERGENCY: &str =
    "Warning signs of a medical emergency are present in the description.";

/// Red flag attached when "sudden" and "severe" co-occur.
pub const RED_FLAG_SUDDEN_SEVERE: &str = "Sudden onset of severe symptoms.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specialty_table_has_required_anchors() {
        let find = |kw: &str| {
            SYMPTOM_SPECIALTIES
                .iter()
                .find(|(k, _)| *k == kw)
                .map(|(_, s)| *s)
        };
        assert_eq!(find("chest"), Some("Cardiology"));
        assert_eq!(find("headache"), Some("Neurology"));
        assert_eq!(find("skin"), Some("Dermatology"));
    }

    #[test]
    fn specialty_table_is_large_enough() {
        assert!(SYMPTOM_SPECIALTIES.len() >= 30);
    }

    #[test]
    fn keyword_tables_are_lowercase() {
        // Matching lower-cases the input only, so the tables themselves
        // must already be lowercase.
        for phrase in EMERGENCY_PHRASES.iter().chain(HIGH_URGENCY_PHRASES) {
            assert_eq!(*phrase, phrase.to_lowercase().as_str());
        }
        for (keyword, _) in SYMPTOM_SPECIALTIES {
            assert_eq!(*keyword, keyword.to_lowercase().as_str());
        }
    }
}
