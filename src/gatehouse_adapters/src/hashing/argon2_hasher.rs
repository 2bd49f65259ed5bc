use argon2::{
    Algorithm, Argon2, Params, PasswordHash as Argon2PasswordHash, PasswordVerifier, Version,
    password_hash::{PasswordHasher, SaltString, rand_core},
};
use secrecy::{ExposeSecret, Secret};

use gatehouse_core::{CredentialHashError, CredentialHasher, Password, PasswordHash};

/// Argon2id hasher behind the `CredentialHasher` port.
///
/// Hashing and verification run on the blocking pool; both are CPU-bound by
/// construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2CredentialHasher;

impl Argon2CredentialHasher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl CredentialHasher for Argon2CredentialHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: &Password) -> Result<PasswordHash, CredentialHashError> {
        let password = password.clone();
        let current_span: tracing::Span = tracing::Span::current();

        let result = tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let salt: SaltString = SaltString::generate(rand_core::OsRng);
                hasher()?
                    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|hash| PasswordHash::new(Secret::from(hash.to_string())))
                    .map_err(|e| CredentialHashError::Hash(e.to_string()))
            })
        })
        .await
        .map_err(|e| CredentialHashError::Hash(e.to_string()))?;

        result
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify(
        &self,
        candidate: &Password,
        stored: &PasswordHash,
    ) -> Result<bool, CredentialHashError> {
        let candidate = candidate.clone();
        let stored = stored.clone();
        let current_span: tracing::Span = tracing::Span::current();

        let result = tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let expected_hash: Argon2PasswordHash<'_> =
                    Argon2PasswordHash::new(stored.as_ref().expose_secret())
                        .map_err(|e| CredentialHashError::MalformedHash(e.to_string()))?;

                match hasher()?.verify_password(
                    candidate.as_ref().expose_secret().as_bytes(),
                    &expected_hash,
                ) {
                    Ok(()) => Ok(true),
                    Err(argon2::password_hash::Error::Password) => Ok(false),
                    Err(e) => Err(CredentialHashError::MalformedHash(e.to_string())),
                }
            })
        })
        .await
        .map_err(|e| CredentialHashError::Hash(e.to_string()))?;

        result
    }
}

fn hasher() -> Result<Argon2<'static>, CredentialHashError> {
    Ok(Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(15000, 2, 1, None).map_err(|e| CredentialHashError::Hash(e.to_string()))?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn password(raw: &str) -> Password {
        Password::parse(Secret::from(raw.to_string())).unwrap()
    }

    #[tokio::test]
    async fn hash_then_verify_round_trips() {
        let hasher = Argon2CredentialHasher::new();
        let hash = hasher.hash(&password("correct horse")).await.unwrap();

        assert!(hasher.verify(&password("correct horse"), &hash).await.unwrap());
    }

    #[tokio::test]
    async fn verify_rejects_a_different_password() {
        let hasher = Argon2CredentialHasher::new();
        let hash = hasher.hash(&password("correct horse")).await.unwrap();

        assert!(!hasher.verify(&password("battery staple"), &hash).await.unwrap());
    }

    #[tokio::test]
    async fn hashes_are_salted() {
        let hasher = Argon2CredentialHasher::new();
        let first = hasher.hash(&password("1234")).await.unwrap();
        let second = hasher.hash(&password("1234")).await.unwrap();

        assert_ne!(
            first.as_ref().expose_secret(),
            second.as_ref().expose_secret()
        );
    }

    #[tokio::test]
    async fn malformed_stored_hash_is_an_error() {
        let hasher = Argon2CredentialHasher::new();
        let stored = PasswordHash::new(Secret::from("not-a-phc-string".to_string()));

        let result = hasher.verify(&password("1234"), &stored).await;
        assert!(matches!(
            result,
            Err(CredentialHashError::MalformedHash(_))
        ));
    }
}
