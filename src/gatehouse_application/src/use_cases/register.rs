use gatehouse_core::{
    CredentialHashError, CredentialHasher, Password, User, UserStore, UserStoreError, Username,
};

/// Error types specific to the register use case
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("User store error: {0}")]
    UserStore(#[from] UserStoreError),
    #[error("Password hashing error: {0}")]
    Hasher(#[from] CredentialHashError),
}

/// Register use case - hashes the password and persists a new user.
///
/// Preconditions: the username-free and password-length guards have run.
pub struct RegisterUseCase<U, H>
where
    U: UserStore,
    H: CredentialHasher,
{
    user_store: U,
    hasher: H,
}

impl<U, H> RegisterUseCase<U, H>
where
    U: UserStore,
    H: CredentialHasher,
{
    pub fn new(user_store: U, hasher: H) -> Self {
        Self { user_store, hasher }
    }

    /// Hash the plaintext and insert the record; the store assigns the id.
    #[tracing::instrument(name = "RegisterUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        username: Username,
        password: Password,
    ) -> Result<User, RegisterError> {
        let password_hash = self.hasher.hash(&password).await?;

        Ok(self.user_store.add_user(username, password_hash).await?)
    }
}
