use secrecy::{ExposeSecret, Secret};
use sqlx::postgres::PgRow;
use sqlx::{Pool, Postgres, Row};

use gatehouse_core::{PasswordHash, User, UserId, UserStore, UserStoreError, Username};

/// User store backed by the `users` table. The table's unique constraint on
/// `username` is the race-safety boundary for concurrent registrations.
#[derive(Clone)]
pub struct PostgresUserStore {
    pool: sqlx::PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresUserStore { pool }
    }
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Fetching user from PostgreSQL", skip_all)]
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserStoreError> {
        let row = sqlx::query(
            r#"
                SELECT user_id, username, password_hash
                FROM users
                WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        row.map(|row| user_from_row(&row)).transpose()
    }

    #[tracing::instrument(name = "Inserting user into PostgreSQL", skip_all)]
    async fn add_user(
        &self,
        username: Username,
        password_hash: PasswordHash,
    ) -> Result<User, UserStoreError> {
        let row = sqlx::query(
            r#"
                INSERT INTO users (username, password_hash)
                VALUES ($1, $2)
                RETURNING user_id, username, password_hash
            "#,
        )
        .bind(username.as_str())
        .bind(password_hash.as_ref().expose_secret())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.constraint().is_some() {
                    return UserStoreError::UserAlreadyExists;
                }
            }
            UserStoreError::UnexpectedError(e.to_string())
        })?;

        user_from_row(&row)
    }
}

fn user_from_row(row: &PgRow) -> Result<User, UserStoreError> {
    let user_id: i64 = row
        .try_get("user_id")
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
    let username: String = row
        .try_get("username")
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
    let password_hash: String = row
        .try_get("password_hash")
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

    Ok(User::new(
        UserId::new(user_id),
        Username::from(username),
        PasswordHash::new(Secret::from(password_hash)),
    ))
}
