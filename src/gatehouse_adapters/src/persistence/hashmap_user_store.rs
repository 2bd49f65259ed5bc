use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use gatehouse_core::{PasswordHash, User, UserId, UserStore, UserStoreError, Username};

/// In-memory user store for tests and local runs. Ids are assigned
/// sequentially starting at 1.
#[derive(Default, Clone)]
pub struct HashMapUserStore {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Default)]
struct Inner {
    users: HashMap<Username, User>,
    next_user_id: i64,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserStoreError> {
        Ok(self.inner.read().await.users.get(username).cloned())
    }

    async fn add_user(
        &self,
        username: Username,
        password_hash: PasswordHash,
    ) -> Result<User, UserStoreError> {
        let mut inner = self.inner.write().await;
        if inner.users.contains_key(&username) {
            return Err(UserStoreError::UserAlreadyExists);
        }

        inner.next_user_id += 1;
        let user = User::new(
            UserId::new(inner.next_user_id),
            username.clone(),
            password_hash,
        );
        inner.users.insert(username, user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::Secret;

    fn hash(raw: &str) -> PasswordHash {
        PasswordHash::new(Secret::from(raw.to_string()))
    }

    #[tokio::test]
    async fn ids_are_assigned_sequentially() {
        let store = HashMapUserStore::new();

        let sue = store
            .add_user(Username::from("sue".to_string()), hash("h1"))
            .await
            .unwrap();
        let bob = store
            .add_user(Username::from("bob".to_string()), hash("h2"))
            .await
            .unwrap();

        assert_eq!(sue.id(), UserId::new(1));
        assert_eq!(bob.id(), UserId::new(2));
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() {
        let store = HashMapUserStore::new();
        let username = Username::from("sue".to_string());

        store.add_user(username.clone(), hash("h1")).await.unwrap();
        let result = store.add_user(username, hash("h2")).await;

        assert_eq!(result.unwrap_err(), UserStoreError::UserAlreadyExists);
    }

    #[tokio::test]
    async fn find_by_username_is_case_sensitive() {
        let store = HashMapUserStore::new();
        store
            .add_user(Username::from("sue".to_string()), hash("h1"))
            .await
            .unwrap();

        assert!(
            store
                .find_by_username(&Username::from("sue".to_string()))
                .await
                .unwrap()
                .is_some()
        );
        assert!(
            store
                .find_by_username(&Username::from("Sue".to_string()))
                .await
                .unwrap()
                .is_none()
        );
    }
}
