use crate::models::PatientProfile;

/// Identity collaborator: supplies known profile fields for registered
/// users so the matching collection steps can be skipped.
pub trait IdentityProvider {
    /// `None` for anonymous visitors.
    fn profile(&self) -> Option<PatientProfile>;
}

/// Anonymous visitor; nothing is prefilled.
pub struct AnonymousIdentity;

impl IdentityProvider for AnonymousIdentity {
    fn profile(&self) -> Option<PatientProfile> {
        None
    }
}

/// Fixed profile, for registered users and tests.
pub struct StaticIdentity(pub PatientProfile);

impl IdentityProvider for StaticIdentity {
    fn profile(&self) -> Option<PatientProfile> {
        Some(self.0.clone())
    }
}
