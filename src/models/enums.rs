use crate::store::StoreError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = StoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(StoreError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(Phase {
    Welcome => "welcome",
    Consent => "consent",
    SymptomGathering => "symptom_gathering",
    AgeGender => "age_gender",
    DynamicQuestions => "dynamic_questions",
    Summary => "summary",
});

str_enum!(UrgencyLevel {
    Low => "low",
    Medium => "medium",
    High => "high",
    Emergency => "emergency",
});

impl UrgencyLevel {
    /// Ordering rank; higher means more urgent. Used to keep the session
    /// level monotonic.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
            Self::Emergency => 3,
        }
    }

    /// High and Emergency trigger the urgent notice in the conversation.
    pub fn needs_notice(&self) -> bool {
        self.rank() >= Self::High.rank()
    }
}

str_enum!(MessageRole {
    User => "user",
    Assistant => "assistant",
});

/// Rendering hint only. The engine never branches on this, only on Phase.
str_enum!(MessageKind {
    Text => "text",
    AgeCollection => "age_collection",
    GenderCollection => "gender_collection",
    EmergencyNotice => "emergency_notice",
    Consent => "consent",
    Summary => "summary",
});

str_enum!(Gender {
    Male => "male",
    Female => "female",
    Other => "other",
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn phase_round_trip() {
        for (variant, s) in [
            (Phase::Welcome, "welcome"),
            (Phase::Consent, "consent"),
            (Phase::SymptomGathering, "symptom_gathering"),
            (Phase::AgeGender, "age_gender"),
            (Phase::DynamicQuestions, "dynamic_questions"),
            (Phase::Summary, "summary"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(Phase::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn urgency_round_trip() {
        for (variant, s) in [
            (UrgencyLevel::Low, "low"),
            (UrgencyLevel::Medium, "medium"),
            (UrgencyLevel::High, "high"),
            (UrgencyLevel::Emergency, "emergency"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(UrgencyLevel::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn urgency_rank_is_strictly_increasing() {
        assert!(UrgencyLevel::Low.rank() < UrgencyLevel::Medium.rank());
        assert!(UrgencyLevel::Medium.rank() < UrgencyLevel::High.rank());
        assert!(UrgencyLevel::High.rank() < UrgencyLevel::Emergency.rank());
    }

    #[test]
    fn only_high_and_emergency_need_notice() {
        assert!(!UrgencyLevel::Low.needs_notice());
        assert!(!UrgencyLevel::Medium.needs_notice());
        assert!(UrgencyLevel::High.needs_notice());
        assert!(UrgencyLevel::Emergency.needs_notice());
    }

    #[test]
    fn gender_round_trip() {
        for (variant, s) in [
            (Gender::Male, "male"),
            (Gender::Female, "female"),
            (Gender::Other, "other"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(Gender::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn invalid_enum_returns_error() {
        assert!(Phase::from_str("invalid").is_err());
        assert!(UrgencyLevel::from_str("critical").is_err());
        assert!(MessageKind::from_str("").is_err());
    }
}
