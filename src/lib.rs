pub mod config;
pub mod models;
pub mod triage; // symptom analyzer + static keyword tables
pub mod engine; // conversation state machine
pub mod reply; // scripted / delegated assistant replies
pub mod store; // session persistence backends
pub mod report; // consultation summary export

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber for embedding applications.
///
/// Honors `RUST_LOG` when set, otherwise falls back to the app default.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("Triara core v{}", config::APP_VERSION);
}
