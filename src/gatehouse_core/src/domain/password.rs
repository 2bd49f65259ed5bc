use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

/// Passwords of this many characters or fewer are rejected at registration.
pub const MAX_REJECTED_PASSWORD_CHARS: usize = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password must be longer than 3 chars")]
    TooShort,
}

/// A plaintext password. Exists only for the duration of a single request
/// and is never persisted or logged.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    /// Validate a registration password. The length is counted in characters,
    /// not bytes.
    pub fn parse(candidate: Secret<String>) -> Result<Self, PasswordError> {
        if candidate.expose_secret().chars().count() <= MAX_REJECTED_PASSWORD_CHARS {
            return Err(PasswordError::TooShort);
        }
        Ok(Self(candidate))
    }
}

// Login candidates are compared against the stored hash without the
// registration length rule.
impl From<Secret<String>> for Password {
    fn from(candidate: Secret<String>) -> Self {
        Self(candidate)
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

/// The opaque, salted hash stored in place of a password.
#[derive(Debug, Clone)]
pub struct PasswordHash(Secret<String>);

impl PasswordHash {
    pub fn new(hash: Secret<String>) -> Self {
        Self(hash)
    }
}

impl AsRef<Secret<String>> for PasswordHash {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn passwords_of_three_chars_or_less_are_rejected() {
        for candidate in ["", "a", "ab", "abc"] {
            let result = Password::parse(Secret::from(candidate.to_string()));
            assert_eq!(result.unwrap_err(), PasswordError::TooShort);
        }
    }

    #[test]
    fn four_char_password_is_accepted() {
        assert!(Password::parse(Secret::from("1234".to_string())).is_ok());
    }

    #[test]
    fn length_is_counted_in_chars_not_bytes() {
        // four two-byte characters
        assert!(Password::parse(Secret::from("äöüß".to_string())).is_ok());
    }

    #[quickcheck]
    fn parse_accepts_exactly_the_candidates_longer_than_three_chars(candidate: String) -> bool {
        let expected = candidate.chars().count() > MAX_REJECTED_PASSWORD_CHARS;
        Password::parse(Secret::from(candidate)).is_ok() == expected
    }

    #[test]
    fn login_candidates_skip_the_length_rule() {
        let candidate = Password::from(Secret::from("ab".to_string()));
        assert_eq!(candidate.as_ref().expose_secret(), "ab");
    }
}
