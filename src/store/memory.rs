use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

use crate::models::Session;

use super::{SessionStore, StoreError};

/// In-memory session store backed by RwLock. The default backend for the
/// unauthenticated variant and for tests.
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<Uuid, Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.read().map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, id: Uuid) -> Result<Option<Session>, StoreError> {
        let sessions = self.sessions.read().map_err(|_| StoreError::LockFailed)?;
        Ok(sessions.get(&id).cloned())
    }

    fn put(&self, session: &Session) -> Result<(), StoreError> {
        let mut sessions = self.sessions.write().map_err(|_| StoreError::LockFailed)?;
        sessions.insert(session.id, session.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::Phase;

    #[test]
    fn get_missing_returns_none() {
        let store = MemorySessionStore::new();
        assert!(store.get(Uuid::new_v4()).unwrap().is_none());
    }

    #[test]
    fn put_then_get_round_trips() {
        let store = MemorySessionStore::new();
        let mut session = Session::new(Uuid::new_v4());
        session.phase = Phase::Consent;
        session.push_user("hello");

        store.put(&session).unwrap();

        let loaded = store.get(session.id).unwrap().unwrap();
        assert_eq!(loaded.phase, Phase::Consent);
        assert_eq!(loaded.messages.len(), 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn put_overwrites_with_newer_snapshot() {
        let store = MemorySessionStore::new();
        let mut session = Session::new(Uuid::new_v4());
        store.put(&session).unwrap();

        session.push_user("second");
        store.put(&session).unwrap();

        let loaded = store.get(session.id).unwrap().unwrap();
        assert_eq!(loaded.messages.len(), 1);
        assert_eq!(store.len(), 1);
    }
}
