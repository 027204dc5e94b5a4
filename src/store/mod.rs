//! Session persistence backends.
//!
//! The engine keeps live sessions in memory and mirrors them through a
//! `SessionStore` after every turn; the backend is swappable without
//! touching transition logic.

pub mod memory;
pub mod sqlite;

use thiserror::Error;
use uuid::Uuid;

use crate::models::Session;

pub use memory::MemorySessionStore;
pub use sqlite::SqliteSessionStore;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Migration failed at version {version}: {reason}")]
    MigrationFailed { version: i64, reason: String },

    #[error("Store lock poisoned")]
    LockFailed,
}

/// Narrow persistence capability: snapshot in, snapshot out.
pub trait SessionStore {
    fn get(&self, id: Uuid) -> Result<Option<Session>, StoreError>;

    /// Persist the current snapshot. Messages are append-only: a backend
    /// must never rewrite or drop messages it already holds.
    fn put(&self, session: &Session) -> Result<(), StoreError>;
}
