use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    password::PasswordHash,
    session::{SessionId, SessionRecord},
    user::User,
    username::Username,
};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::UserAlreadyExists, Self::UserAlreadyExists) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Persistence for user records. Uniqueness of usernames is ultimately
/// enforced here - the registration guard's pre-check cannot stop two
/// concurrent inserts on its own.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserStoreError>;
    async fn add_user(
        &self,
        username: Username,
        password_hash: PasswordHash,
    ) -> Result<User, UserStoreError>;
}

// SessionStore port trait and errors
#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Per-client session records keyed by the cookie-held id.
///
/// `destroy` is idempotent for ids that no longer exist; its error channel
/// reports I/O failures only.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn create(&self, record: SessionRecord) -> Result<SessionId, SessionStoreError>;
    async fn get(
        &self,
        session_id: &SessionId,
    ) -> Result<Option<SessionRecord>, SessionStoreError>;
    async fn destroy(&self, session_id: &SessionId) -> Result<(), SessionStoreError>;
}
