use serde::{Deserialize, Serialize};

use super::enums::Gender;

/// Known profile fields supplied by the identity collaborator for a
/// registered user. Present fields are prefilled into a new session so the
/// matching collection steps are skipped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientProfile {
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    /// Known chronic conditions, joined into the chronic-conditions slot.
    pub conditions: Vec<String>,
}

impl PatientProfile {
    /// Both demographic fields known, so the age/gender phase can be skipped
    /// entirely.
    pub fn covers_demographics(&self) -> bool {
        self.age.is_some() && self.gender.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_profile_covers_nothing() {
        assert!(!PatientProfile::default().covers_demographics());
    }

    #[test]
    fn partial_profile_does_not_cover_demographics() {
        let profile = PatientProfile {
            age: Some(34),
            ..Default::default()
        };
        assert!(!profile.covers_demographics());
    }

    #[test]
    fn full_profile_covers_demographics() {
        let profile = PatientProfile {
            age: Some(34),
            gender: Some(Gender::Female),
            conditions: vec!["asthma".into()],
        };
        assert!(profile.covers_demographics());
    }
}
