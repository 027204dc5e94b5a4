//! The conversation state machine and its collaborator seams.

pub mod identity;
pub mod machine;
pub mod messages;
pub mod summary;

use thiserror::Error;

pub use identity::{AnonymousIdentity, IdentityProvider, StaticIdentity};
pub use machine::{TriageEngine, TurnOutcome};

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("message is empty")]
    EmptyMessage,

    #[error("message exceeds {limit} characters")]
    MessageTooLong { limit: usize },

    #[error("session state lock poisoned")]
    LockFailed,
}
