use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::{CookieJar, cookie::Cookie};

use gatehouse_application::{LogoutOutcome, LogoutUseCase};
use gatehouse_core::SessionStore;

use crate::config::SESSION_COOKIE_NAME;
use crate::http::session_cookie::extract_session_id;

use super::MessageResponse;
use super::error::AuthApiError;

#[tracing::instrument(name = "Logout", skip_all)]
pub async fn logout<S>(
    State(session_store): State<S>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AuthApiError>
where
    S: SessionStore + Clone + 'static,
{
    let session_id = extract_session_id(&jar, &SESSION_COOKIE_NAME);

    let use_case = LogoutUseCase::new(session_store);
    let outcome = use_case.execute(session_id).await?;

    match outcome {
        LogoutOutcome::LoggedOut => {
            let jar = jar.remove(Cookie::from(*SESSION_COOKIE_NAME));
            Ok((
                jar,
                (
                    StatusCode::OK,
                    Json(MessageResponse {
                        message: "logged out".to_string(),
                    }),
                ),
            ))
        }
        LogoutOutcome::NoSession => Ok((
            jar,
            (
                StatusCode::OK,
                Json(MessageResponse {
                    message: "no session".to_string(),
                }),
            ),
        )),
    }
}
