use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application-level constants
pub const APP_NAME: &str = "Triara";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> &'static str {
    "triara=info"
}

/// Get the application data directory
/// ~/Triara/ on all platforms (user-visible, per design requirement)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("Triara")
}

/// Get the default sessions database path
pub fn sessions_db_path() -> PathBuf {
    app_data_dir().join("sessions.db")
}

/// How assistant replies are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyMode {
    /// Fixed phase strings only.
    Scripted,
    /// Conversational turns go through the local language model,
    /// with scripted fallback.
    Delegated,
}

/// Tunables for the conversation engine and its collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Inbound messages longer than this are rejected before any
    /// state mutation.
    pub max_message_chars: usize,
    pub reply_mode: ReplyMode,
    /// Base URL of the local Ollama instance (delegated mode only).
    pub ollama_url: String,
    /// Model name override; `None` lets the client pick.
    pub model: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_message_chars: 2_000,
            reply_mode: ReplyMode::Scripted,
            ollama_url: "http://localhost:11434".to_string(),
            model: None,
        }
    }
}
