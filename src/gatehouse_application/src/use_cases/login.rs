use gatehouse_core::{
    CredentialHashError, CredentialHasher, Password, SessionId, SessionRecord, SessionStore,
    SessionStoreError, User,
};

/// Response from the login use case
#[derive(Debug, PartialEq)]
pub enum LoginOutcome {
    /// Credentials matched; a session record was created.
    Authenticated(SessionId),
    /// Credentials did not match; no session exists.
    RejectedCredentials,
}

/// Error types specific to the login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Password hashing error: {0}")]
    Hasher(#[from] CredentialHashError),
    #[error("Session store error: {0}")]
    SessionStore(#[from] SessionStoreError),
}

/// Login use case - verifies the candidate password against the stored hash
/// and, on success, marks a fresh session as authenticated.
///
/// Preconditions: the username-exists guard loaded `user`.
pub struct LoginUseCase<H, S>
where
    H: CredentialHasher,
    S: SessionStore,
{
    hasher: H,
    session_store: S,
}

impl<H, S> LoginUseCase<H, S>
where
    H: CredentialHasher,
    S: SessionStore,
{
    pub fn new(hasher: H, session_store: S) -> Self {
        Self {
            hasher,
            session_store,
        }
    }

    #[tracing::instrument(name = "LoginUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        user: &User,
        candidate: Password,
    ) -> Result<LoginOutcome, LoginError> {
        // The username presence check is repeated here even though the
        // exists guard already required a match.
        if user.username().is_empty() {
            return Ok(LoginOutcome::RejectedCredentials);
        }

        if !self.hasher.verify(&candidate, user.password_hash()).await? {
            return Ok(LoginOutcome::RejectedCredentials);
        }

        let session_id = self
            .session_store
            .create(SessionRecord::authenticated(user.id()))
            .await?;

        Ok(LoginOutcome::Authenticated(session_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatehouse_core::{PasswordHash, UserId, Username};
    use secrecy::{ExposeSecret, Secret};
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    #[derive(Clone)]
    struct MockCredentialHasher;

    #[async_trait::async_trait]
    impl CredentialHasher for MockCredentialHasher {
        async fn hash(&self, password: &Password) -> Result<PasswordHash, CredentialHashError> {
            Ok(PasswordHash::new(Secret::from(format!(
                "hashed:{}",
                password.as_ref().expose_secret()
            ))))
        }

        async fn verify(
            &self,
            candidate: &Password,
            stored: &PasswordHash,
        ) -> Result<bool, CredentialHashError> {
            let expected = format!("hashed:{}", candidate.as_ref().expose_secret());
            Ok(stored.as_ref().expose_secret() == &expected)
        }
    }

    #[derive(Clone, Default)]
    struct MockSessionStore {
        sessions: Arc<RwLock<HashMap<SessionId, SessionRecord>>>,
    }

    #[async_trait::async_trait]
    impl SessionStore for MockSessionStore {
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

    fn sue() -> User {
        User::new(
            UserId::new(1),
            Username::from("sue".to_string()),
            PasswordHash::new(Secret::from("hashed:1234".to_string())),
        )
    }

    #[tokio::test]
    async fn matching_credentials_create_an_authenticated_session() {
        let sessions = MockSessionStore::default();
        let use_case = LoginUseCase::new(MockCredentialHasher, sessions.clone());

        let outcome = use_case
            .execute(&sue(), Password::from(Secret::from("1234".to_string())))
            .await
            .unwrap();

        let LoginOutcome::Authenticated(session_id) = outcome else {
            panic!("expected an authenticated outcome");
        };
        let record = sessions.get(&session_id).await.unwrap().unwrap();
        assert!(record.is_authenticated());
        assert_eq!(record.user_id(), Some(UserId::new(1)));
    }

    #[tokio::test]
    async fn wrong_password_is_rejected_without_a_session() {
        let sessions = MockSessionStore::default();
        let use_case = LoginUseCase::new(MockCredentialHasher, sessions.clone());

        let outcome = use_case
            .execute(&sue(), Password::from(Secret::from("wrong".to_string())))
            .await
            .unwrap();

        assert_eq!(outcome, LoginOutcome::RejectedCredentials);
        assert!(sessions.sessions.read().await.is_empty());
    }

    #[tokio::test]
    async fn empty_username_is_rejected_even_with_a_matching_password() {
        let use_case = LoginUseCase::new(MockCredentialHasher, MockSessionStore::default());

        let user = User::new(
            UserId::new(1),
            Username::from(String::new()),
            PasswordHash::new(Secret::from("hashed:1234".to_string())),
        );
        let outcome = use_case
            .execute(&user, Password::from(Secret::from("1234".to_string())))
            .await
            .unwrap();

        assert_eq!(outcome, LoginOutcome::RejectedCredentials);
    }
}
