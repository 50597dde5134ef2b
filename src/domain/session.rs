// SPDX-License-Identifier: MPL-2.0
//! Sign-in credentials and the bearer token they buy.
//!
//! Neither type prints its secret through `Debug`.

use std::fmt;

/// Login endpoint plus the account used against it, and the data endpoint
/// the resulting token unlocks.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Credentials {
    pub login_url: String,
    pub email: String,
    pub password: String,
    pub pets_url: String,
}

impl Credentials {
    /// Returns `true` when every field needed for a session is present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.login_url.is_empty()
            && !self.pets_url.is_empty()
            && !self.email.is_empty()
            && !self.password.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("login_url", &self.login_url)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("pets_url", &self.pets_url)
            .finish()
    }
}

/// Opaque bearer token returned by the login endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wraps a raw token. Returns `None` for an empty string.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    /// Raw token, for building the `Authorization` header only.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_token_is_rejected() {
        assert!(SessionToken::new("").is_none());
        assert_eq!(SessionToken::new("abc").map(|t| t.expose().to_string()), Some("abc".into()));
    }

    #[test]
    fn debug_output_hides_secrets() {
        let token = SessionToken::new("s3cret-token").unwrap();
        assert!(!format!("{token:?}").contains("s3cret"));

        let credentials = Credentials {
            login_url: "https://pets.example/login".into(),
            email: "me@example.com".into(),
            password: "hunter2".into(),
            pets_url: "https://pets.example/pets".into(),
        };
        let debug = format!("{credentials:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("me@example.com"));
    }

    #[test]
    fn completeness_requires_all_fields() {
        let mut credentials = Credentials {
            login_url: "https://pets.example/login".into(),
            email: "me@example.com".into(),
            password: "hunter2".into(),
            pets_url: "https://pets.example/pets".into(),
        };
        assert!(credentials.is_complete());

        credentials.password.clear();
        assert!(!credentials.is_complete());
        assert!(!Credentials::default().is_complete());
    }
}
