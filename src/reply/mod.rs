//! Assistant reply generation.
//!
//! The engine decides WHAT must be communicated each turn (`ReplyIntent`)
//! and a `ReplyStrategy` decides HOW it is worded: fixed phase strings, or
//! a local language model with scripted fallback. The state machine
//! depends only on the trait.

pub mod delegated;
pub mod ollama;
pub mod scripted;

use thiserror::Error;

use crate::models::enums::{MessageKind, UrgencyLevel};
use crate::models::Session;

pub use delegated::DelegatedReplyStrategy;
pub use ollama::OllamaClient;
pub use scripted::ScriptedReplyStrategy;

#[derive(Error, Debug)]
pub enum ReplyError {
    #[error("Ollama connection failed: {0}")]
    Connection(String),

    #[error("model endpoint returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("response parsing error: {0}")]
    ResponseParsing(String),

    #[error("no model available")]
    NoModelAvailable,
}

/// A communication goal produced by one state-machine transition.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplyIntent {
    /// Opening emergency disclaimer (welcome phase).
    EmergencyNotice,
    ConsentRequest,
    ConsentReprompt,
    /// Consent accepted; invite the symptom description.
    ConsentAck,
    /// High/emergency classification notice.
    UrgentNotice(UrgencyLevel),
    AgeRequest,
    GenderRequest,
    /// Ask one dynamic follow-up question verbatim.
    Question(String),
    /// Terminal consultation summary, already rendered as Markdown.
    Summary(String),
}

impl ReplyIntent {
    /// Rendering hint attached to the emitted message.
    pub fn kind(&self) -> MessageKind {
        match self {
            Self::EmergencyNotice | Self::UrgentNotice(_) => MessageKind::EmergencyNotice,
            Self::ConsentRequest | Self::ConsentReprompt => MessageKind::Consent,
            Self::AgeRequest => MessageKind::AgeCollection,
            Self::GenderRequest => MessageKind::GenderCollection,
            Self::Summary(_) => MessageKind::Summary,
            Self::ConsentAck | Self::Question(_) => MessageKind::Text,
        }
    }
}

/// Renders a communication goal to assistant text.
pub trait ReplyStrategy {
    fn render(&self, session: &Session, intent: &ReplyIntent) -> Result<String, ReplyError>;
}

/// Local language model seam (Ollama in production, stubs in tests).
pub trait ReplyModel {
    fn generate(&self, model: &str, prompt: &str, system: &str) -> Result<String, ReplyError>;

    fn is_model_available(&self, model: &str) -> Result<bool, ReplyError>;
}
