//! Session storage seam and its in-memory implementation.

use async_trait::async_trait;
use dashmap::DashMap;
use wpbot_core::Result;

use crate::session::Session;

/// Get/put/delete sessions by user id. The machine is the only writer.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, user_id: i64) -> Result<Option<Session>>;
    /// Inserts or replaces the user's session.
    async fn put(&self, session: Session) -> Result<()>;
    async fn delete(&self, user_id: i64) -> Result<()>;
}

/// Process-local store. Sessions are lost on restart.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: DashMap<i64, Session>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, user_id: i64) -> Result<Option<Session>> {
        Ok(self.sessions.get(&user_id).map(|entry| entry.value().clone()))
    }

    async fn put(&self, session: Session) -> Result<()> {
        self.sessions.insert(session.user_id, session);
        Ok(())
    }

    async fn delete(&self, user_id: i64) -> Result<()> {
        self.sessions.remove(&user_id);
        Ok(())
    }
}
