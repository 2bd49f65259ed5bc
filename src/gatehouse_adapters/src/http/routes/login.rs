use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::CookieJar;
use secrecy::Secret;
use serde::Deserialize;

use gatehouse_application::{LoginOutcome, LoginUseCase, guards};
use gatehouse_core::{CredentialHasher, Password, SessionStore, UserStore, Username};

use crate::config::SESSION_COOKIE_NAME;
use crate::http::session_cookie::session_cookie;

use super::MessageResponse;
use super::error::AuthApiError;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: Secret<String>,
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<U, H, S>(
    State((user_store, hasher, session_store)): State<(U, H, S)>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, AuthApiError>
where
    U: UserStore + Clone + 'static,
    H: CredentialHasher + Clone + 'static,
    S: SessionStore + Clone + 'static,
{
    let username = Username::from(request.username);
    let user = guards::username_exists(&user_store, &username).await?;

    // No length rule here - any candidate is compared against the hash.
    let candidate = Password::from(request.password);

    let use_case = LoginUseCase::new(hasher, session_store);
    let outcome = use_case.execute(&user, candidate).await?;

    match outcome {
        LoginOutcome::Authenticated(session_id) => {
            let jar = jar.add(session_cookie(&SESSION_COOKIE_NAME, &session_id));
            Ok((
                jar,
                (
                    StatusCode::OK,
                    Json(MessageResponse {
                        message: format!("Welcome {}!", username.as_str()),
                    }),
                ),
            ))
        }
        LoginOutcome::RejectedCredentials => Err(AuthApiError::InvalidCredentials),
    }
}
