use gatehouse_core::{SessionId, SessionStore, SessionStoreError};

/// Response from the logout use case
#[derive(Debug, PartialEq)]
pub enum LogoutOutcome {
    /// An authenticated session existed and was destroyed.
    LoggedOut,
    /// No authenticated session to destroy. This is a success state, not an
    /// error - logging out while logged out is a no-op.
    NoSession,
}

/// Error types specific to the logout use case
#[derive(Debug, thiserror::Error)]
pub enum LogoutError {
    #[error("Session store error: {0}")]
    SessionStore(#[from] SessionStoreError),
}

/// Logout use case - destroys the client's session record if it is
/// authenticated.
pub struct LogoutUseCase<S>
where
    S: SessionStore,
{
    session_store: S,
}

impl<S> LogoutUseCase<S>
where
    S: SessionStore,
{
    pub fn new(session_store: S) -> Self {
        Self { session_store }
    }

    #[tracing::instrument(name = "LogoutUseCase::execute", skip(self))]
    pub async fn execute(
        &self,
        session_id: Option<SessionId>,
    ) -> Result<LogoutOutcome, LogoutError> {
        let Some(session_id) = session_id else {
            return Ok(LogoutOutcome::NoSession);
        };

        match self.session_store.get(&session_id).await? {
            Some(record) if record.is_authenticated() => {
                self.session_store.destroy(&session_id).await?;
                Ok(LogoutOutcome::LoggedOut)
            }
            _ => Ok(LogoutOutcome::NoSession),
        }
    }
}
