use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};

use gatehouse_core::SessionId;

/// Build the session cookie handed out on login.
pub fn session_cookie(name: &str, session_id: &SessionId) -> Cookie<'static> {
    Cookie::build((name.to_owned(), session_id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Read the session id from the jar. Missing or unparseable cookies count
/// as no session.
pub fn extract_session_id(jar: &CookieJar, name: &str) -> Option<SessionId> {
    jar.get(name)
        .and_then(|cookie| SessionId::parse(cookie.value()))
}
