pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    password::{Password, PasswordError, PasswordHash},
    session::{SessionId, SessionRecord, SessionState},
    user::{User, UserId},
    username::Username,
};

pub use ports::{
    repositories::{SessionStore, SessionStoreError, UserStore, UserStoreError},
    services::{CredentialHashError, CredentialHasher},
};
