use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use gatehouse_application::{GuardError, LoginError, LogoutError, RegisterError};
use gatehouse_core::{PasswordError, SessionStoreError, UserStoreError};

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AuthApiError {
    #[error("Username taken")]
    UsernameTaken,

    #[error("Password must be longer than 3 chars")]
    PasswordTooShort,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> Response {
        let (status_code, message) = match self {
            AuthApiError::UsernameTaken | AuthApiError::PasswordTooShort => {
                (StatusCode::UNPROCESSABLE_ENTITY, self.to_string())
            }

            AuthApiError::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),

            AuthApiError::UnexpectedError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = Json(ErrorResponse { message });

        (status_code, body).into_response()
    }
}

impl From<UserStoreError> for AuthApiError {
    fn from(error: UserStoreError) -> Self {
        match error {
            // The storage-level unique constraint catches the register race
            // the username-free guard cannot.
            UserStoreError::UserAlreadyExists => AuthApiError::UsernameTaken,
            UserStoreError::UnexpectedError(e) => AuthApiError::UnexpectedError(e),
        }
    }
}

impl From<SessionStoreError> for AuthApiError {
    fn from(error: SessionStoreError) -> Self {
        AuthApiError::UnexpectedError(error.to_string())
    }
}

impl From<GuardError> for AuthApiError {
    fn from(error: GuardError) -> Self {
        match error {
            GuardError::UsernameTaken => AuthApiError::UsernameTaken,
            GuardError::UnknownUsername => AuthApiError::InvalidCredentials,
            GuardError::InvalidPassword(PasswordError::TooShort) => AuthApiError::PasswordTooShort,
            GuardError::UserStore(e) => e.into(),
        }
    }
}

impl From<RegisterError> for AuthApiError {
    fn from(error: RegisterError) -> Self {
        match error {
            RegisterError::UserStore(e) => e.into(),
            RegisterError::Hasher(e) => AuthApiError::UnexpectedError(e.to_string()),
        }
    }
}

impl From<LoginError> for AuthApiError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::Hasher(e) => AuthApiError::UnexpectedError(e.to_string()),
            LoginError::SessionStore(e) => e.into(),
        }
    }
}

impl From<LogoutError> for AuthApiError {
    fn from(error: LogoutError) -> Self {
        match error {
            LogoutError::SessionStore(e) => e.into(),
        }
    }
}
