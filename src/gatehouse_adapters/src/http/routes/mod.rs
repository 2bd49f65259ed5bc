//! Axum route handlers.
//!
//! Each handler composes its guard stages by calling them in sequence and
//! then hands off to the matching use case; every failure path funnels into
//! `AuthApiError`.

pub mod error;
pub mod login;
pub mod logout;
pub mod register;

pub use error::{AuthApiError, ErrorResponse};
pub use login::login;
pub use logout::logout;
pub use register::register;

use serde::{Deserialize, Serialize};

/// Plain `{"message": ...}` success body shared by login and logout.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
