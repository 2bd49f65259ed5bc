use async_trait::async_trait;
use thiserror::Error;

use crate::domain::password::{Password, PasswordHash};

#[derive(Debug, Error)]
pub enum CredentialHashError {
    #[error("Failed to hash password: {0}")]
    Hash(String),
    #[error("Stored password hash is malformed: {0}")]
    MalformedHash(String),
}

/// Port trait for the one-way, salted password hashing primitive.
///
/// `verify` reports a non-matching candidate as `Ok(false)`; the error
/// channel is reserved for unusable hashes and hashing failures.
#[async_trait]
pub trait CredentialHasher: Send + Sync {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, CredentialHashError>;
    async fn verify(
        &self,
        candidate: &Password,
        stored: &PasswordHash,
    ) -> Result<bool, CredentialHashError>;
}
