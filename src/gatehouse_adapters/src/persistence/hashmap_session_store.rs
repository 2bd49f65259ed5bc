use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use gatehouse_core::{SessionId, SessionRecord, SessionStore, SessionStoreError};

/// In-memory session store for tests and local runs.
#[derive(Default, Clone)]
pub struct HashMapSessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, SessionRecord>>>,
}

impl HashMapSessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl SessionStore for HashMapSessionStore {
    async fn create(&self, record: SessionRecord) -> Result<SessionId, SessionStoreError> {
        let session_id = SessionId::new();
        self.sessions.write().await.insert(session_id, record);
        Ok(session_id)
    }

    async fn get(
        &self,
        session_id: &SessionId,
    ) -> Result<Option<SessionRecord>, SessionStoreError> {
        Ok(self.sessions.read().await.get(session_id).cloned())
    }

    async fn destroy(&self, session_id: &SessionId) -> Result<(), SessionStoreError> {
        self.sessions.write().await.remove(session_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatehouse_core::UserId;

    #[tokio::test]
    async fn created_record_is_readable_by_its_id() {
        let store = HashMapSessionStore::new();
        let session_id = store
            .create(SessionRecord::authenticated(UserId::new(1)))
            .await
            .unwrap();

        let record = store.get(&session_id).await.unwrap().unwrap();
        assert_eq!(record.user_id(), Some(UserId::new(1)));
    }

    #[tokio::test]
    async fn destroy_removes_the_record() {
        let store = HashMapSessionStore::new();
        let session_id = store
            .create(SessionRecord::authenticated(UserId::new(1)))
            .await
            .unwrap();

        store.destroy(&session_id).await.unwrap();
        assert!(store.get(&session_id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn destroy_is_idempotent_for_unknown_ids() {
        let store = HashMapSessionStore::new();
        assert!(store.destroy(&SessionId::new()).await.is_ok());
    }
}
