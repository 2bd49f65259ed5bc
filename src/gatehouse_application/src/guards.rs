//! Pre-handler checks.
//!
//! Guards are ordered predicate/transform stages: each either lets the
//! request continue (possibly enriching it, as `username_exists` does with
//! the loaded user) or short-circuits it with an error. Routes compose them
//! by calling them in sequence; the first failure wins.

use secrecy::Secret;

use gatehouse_core::{Password, PasswordError, User, UserStore, UserStoreError, Username};

#[derive(Debug, thiserror::Error)]
pub enum GuardError {
    #[error("Username taken")]
    UsernameTaken,
    #[error("Invalid credentials")]
    UnknownUsername,
    #[error(transparent)]
    InvalidPassword(#[from] PasswordError),
    #[error("User store error: {0}")]
    UserStore(#[from] UserStoreError),
}

/// Registration guard: the submitted username must not already be stored.
#[tracing::instrument(name = "Guard::username_free", skip(user_store))]
pub async fn username_free<U>(user_store: &U, username: &Username) -> Result<(), GuardError>
where
    U: UserStore,
{
    match user_store.find_by_username(username).await? {
        Some(_) => Err(GuardError::UsernameTaken),
        None => Ok(()),
    }
}

/// Registration guard: the submitted password must be longer than 3 chars.
pub fn password_length(candidate: Secret<String>) -> Result<Password, GuardError> {
    Ok(Password::parse(candidate)?)
}

/// Login guard: the submitted username must belong to a stored user. The
/// full record, hash included, is handed to the caller.
#[tracing::instrument(name = "Guard::username_exists", skip(user_store))]
pub async fn username_exists<U>(user_store: &U, username: &Username) -> Result<User, GuardError>
where
    U: UserStore,
{
    user_store
        .find_by_username(username)
        .await?
        .ok_or(GuardError::UnknownUsername)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatehouse_core::{PasswordHash, UserId};
    use secrecy::Secret;

    struct SingleUserStore {
        user: User,
    }

    #[async_trait::async_trait]
    impl UserStore for SingleUserStore {
        async fn find_by_username(
            &self,
            username: &Username,
        ) -> Result<Option<User>, UserStoreError> {
            if self.user.username() == username {
                Ok(Some(self.user.clone()))
            } else {
                Ok(None)
            }
        }

        async fn add_user(
            &self,
            _username: Username,
            _password_hash: PasswordHash,
        ) -> Result<User, UserStoreError> {
            unimplemented!()
        }
    }

    fn store_with_sue() -> SingleUserStore {
        SingleUserStore {
            user: User::new(
                UserId::new(1),
                Username::from("sue".to_string()),
                PasswordHash::new(Secret::from("$argon2id$stub".to_string())),
            ),
        }
    }

    #[tokio::test]
    async fn username_free_passes_for_an_unknown_username() {
        let store = store_with_sue();
        let result = username_free(&store, &Username::from("bob".to_string())).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn username_free_rejects_a_stored_username() {
        let store = store_with_sue();
        let result = username_free(&store, &Username::from("sue".to_string())).await;
        assert!(matches!(result, Err(GuardError::UsernameTaken)));
    }

    #[test]
    fn password_length_rejects_short_candidates() {
        let result = password_length(Secret::from("abc".to_string()));
        assert!(matches!(
            result,
            Err(GuardError::InvalidPassword(PasswordError::TooShort))
        ));
    }

    #[test]
    fn password_length_passes_longer_candidates() {
        assert!(password_length(Secret::from("abcd".to_string())).is_ok());
    }

    #[tokio::test]
    async fn username_exists_loads_the_stored_user() {
        let store = store_with_sue();
        let user = username_exists(&store, &Username::from("sue".to_string()))
            .await
            .unwrap();
        assert_eq!(user.id(), UserId::new(1));
    }

    #[tokio::test]
    async fn username_exists_rejects_an_unknown_username() {
        let store = store_with_sue();
        let result = username_exists(&store, &Username::from("bob".to_string())).await;
        assert!(matches!(result, Err(GuardError::UnknownUsername)));
    }
}
