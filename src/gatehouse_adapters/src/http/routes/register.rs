use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use secrecy::Secret;
use serde::{Deserialize, Serialize};

use gatehouse_application::{RegisterUseCase, guards};
use gatehouse_core::{CredentialHasher, User, UserStore, Username};

use super::error::AuthApiError;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: Secret<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub user_id: i64,
    pub username: String,
}

impl From<&User> for RegisterResponse {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id().as_i64(),
            username: user.username().as_str().to_owned(),
        }
    }
}

#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<U, H>(
    State((user_store, hasher)): State<(U, H)>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AuthApiError>
where
    U: UserStore + Clone + 'static,
    H: CredentialHasher + Clone + 'static,
{
    let username = Username::from(request.username);

    // Guard order matters: username-free runs before password-length.
    guards::username_free(&user_store, &username).await?;
    let password = guards::password_length(request.password)?;

    let use_case = RegisterUseCase::new(user_store, hasher);
    let user = use_case.execute(username, password).await?;

    Ok((StatusCode::OK, Json(RegisterResponse::from(&user))))
}
