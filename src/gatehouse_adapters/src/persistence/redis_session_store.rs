use std::sync::Arc;

use redis::{Commands, Connection};
use tokio::sync::Mutex;

use gatehouse_core::{SessionId, SessionRecord, SessionStore, SessionStoreError};

/// Session store backed by Redis. Records are stored as JSON under a
/// prefixed key and expire after the configured TTL.
#[derive(Clone)]
pub struct RedisSessionStore {
    conn: Arc<Mutex<Connection>>,
    session_ttl: u64,
}

impl RedisSessionStore {
    pub fn new(conn: Arc<Mutex<Connection>>, session_ttl: u64) -> Self {
        Self { conn, session_ttl }
    }
}

#[async_trait::async_trait]
impl SessionStore for RedisSessionStore {
    #[tracing::instrument(name = "Creating session in Redis", skip_all)]
    async fn create(&self, record: SessionRecord) -> Result<SessionId, SessionStoreError> {
        let session_id = SessionId::new();
        let payload = serde_json::to_string(&record)
            .map_err(|e| SessionStoreError::SerializationError(e.to_string()))?;

        let mut conn = self.conn.lock().await;
        let _: () = conn
            .set_ex(get_key(&session_id), payload, self.session_ttl)
            .map_err(|e| SessionStoreError::DatabaseError(e.to_string()))?;

        Ok(session_id)
    }

    #[tracing::instrument(name = "Reading session from Redis", skip_all)]
    async fn get(
        &self,
        session_id: &SessionId,
    ) -> Result<Option<SessionRecord>, SessionStoreError> {
        let mut conn = self.conn.lock().await;
        let payload: Option<String> = conn
            .get(get_key(session_id))
            .map_err(|e| SessionStoreError::DatabaseError(e.to_string()))?;

        payload
            .map(|raw| serde_json::from_str(&raw))
            .transpose()
            .map_err(|e| SessionStoreError::SerializationError(e.to_string()))
    }

    #[tracing::instrument(name = "Destroying session in Redis", skip_all)]
    async fn destroy(&self, session_id: &SessionId) -> Result<(), SessionStoreError> {
        let mut conn = self.conn.lock().await;
        let _: i64 = conn
            .del(get_key(session_id))
            .map_err(|e| SessionStoreError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}

// We are using a key prefix to prevent collisions and organize data!
const SESSION_KEY_PREFIX: &str = "session:";

fn get_key(session_id: &SessionId) -> String {
    format!("{}{}", SESSION_KEY_PREFIX, session_id)
}
