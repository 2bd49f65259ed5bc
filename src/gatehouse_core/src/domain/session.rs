use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserId;

/// Identifier for a session record, held by the client in a cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a cookie value. Anything that is not a UUID is treated as no
    /// session rather than an error.
    pub fn parse(value: &str) -> Option<Self> {
        Uuid::parse_str(value).ok().map(Self)
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Authentication status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SessionState {
    Anonymous,
    Authenticated { user_id: UserId },
}

/// Per-client session record, owned by the session store.
///
/// A record whose state is not `Authenticated` counts as unauthenticated
/// regardless of any other field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    state: SessionState,
    created_at: DateTime<Utc>,
}

impl SessionRecord {
    pub fn authenticated(user_id: UserId) -> Self {
        Self {
            state: SessionState::Authenticated { user_id },
            created_at: Utc::now(),
        }
    }

    pub fn anonymous() -> Self {
        Self {
            state: SessionState::Anonymous,
            created_at: Utc::now(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated { .. })
    }

    pub fn user_id(&self) -> Option<UserId> {
        match self.state {
            SessionState::Authenticated { user_id } => Some(user_id),
            SessionState::Anonymous => None,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
