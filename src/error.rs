// SPDX-License-Identifier: MPL-2.0
use crate::application::port::{AuthError, FetchError};
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Auth(AuthError),
    Fetch(FetchError),
}

impl Error {
    /// Returns the i18n message key used to explain this error to the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config-invalid",
            Error::Auth(err) => err.i18n_key(),
            Error::Fetch(err) => err.i18n_key(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Auth(e) => write!(f, "Sign-in Error: {}", e),
            Error::Fetch(e) => write!(f, "Fetch Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<AuthError> for Error {
    fn from(err: AuthError) -> Self {
        Error::Auth(err)
    }
}

impl From<FetchError> for Error {
    fn from(err: FetchError) -> Self {
        Error::Fetch(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
