// SPDX-License-Identifier: MPL-2.0
//! Pet API port definition.
//!
//! This module defines the [`PetApi`] trait covering the two calls the roster
//! depends on (sign-in and record fetch) plus thumbnail downloads.
//!
//! # Design Notes
//!
//! - `fetch_animals` takes a [`SessionToken`], so it cannot be issued before
//!   a sign-in succeeded
//! - Endpoints and the account are fixed when the adapter is built
//! - Records that fail to decode are dropped and counted, never surfaced as
//!   an error

use crate::domain::{Animal, SessionToken};
use std::fmt;
use std::future::Future;

// =============================================================================
// AuthError
// =============================================================================

/// Errors that can occur while signing in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The login endpoint could not be reached (DNS, TLS, timeout, ...).
    Unreachable(String),

    /// The server refused the credentials (401/403).
    Rejected,

    /// Any other non-success HTTP status.
    Status(u16),

    /// The response did not carry a non-empty `token` string.
    MissingToken,
}

impl AuthError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            AuthError::Unreachable(_) => "error-auth-unreachable",
            AuthError::Rejected => "error-auth-rejected",
            AuthError::Status(_) => "error-auth-status",
            AuthError::MissingToken => "error-auth-missing-token",
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Unreachable(msg) => write!(f, "login endpoint unreachable: {msg}"),
            AuthError::Rejected => write!(f, "credentials rejected"),
            AuthError::Status(code) => write!(f, "login failed with HTTP status {code}"),
            AuthError::MissingToken => write!(f, "login response carried no token"),
        }
    }
}

impl std::error::Error for AuthError {}

// =============================================================================
// FetchError
// =============================================================================

/// Errors that can occur while downloading records or thumbnails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The endpoint could not be reached (DNS, TLS, timeout, ...).
    Unreachable(String),

    /// The server refused the bearer token (401/403).
    Unauthorized,

    /// Any other non-success HTTP status.
    Status(u16),

    /// The body was not the expected shape (e.g. not a JSON array).
    UnexpectedBody(String),

    /// The body exceeded the download limit.
    TooLarge {
        /// Maximum accepted size in bytes.
        limit: u64,
    },
}

impl FetchError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            FetchError::Unreachable(_) => "error-fetch-unreachable",
            FetchError::Unauthorized => "error-fetch-unauthorized",
            FetchError::Status(_) => "error-fetch-status",
            FetchError::UnexpectedBody(_) => "error-fetch-unexpected-body",
            FetchError::TooLarge { .. } => "error-fetch-too-large",
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Unreachable(msg) => write!(f, "endpoint unreachable: {msg}"),
            FetchError::Unauthorized => write!(f, "bearer token refused"),
            FetchError::Status(code) => write!(f, "request failed with HTTP status {code}"),
            FetchError::UnexpectedBody(msg) => write!(f, "unexpected response body: {msg}"),
            FetchError::TooLarge { limit } => {
                write!(f, "response larger than {limit} bytes")
            }
        }
    }
}

impl std::error::Error for FetchError {}

// =============================================================================
// FetchedAnimals
// =============================================================================

/// Decoded records in server order, plus how many elements were dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchedAnimals {
    pub animals: Vec<Animal>,
    /// Elements of the response array that could not be decoded.
    pub skipped: usize,
}

// =============================================================================
// PetApi
// =============================================================================

/// Remote pet API.
pub trait PetApi: Send + Sync {
    /// Signs in with the configured account and returns the bearer token.
    fn authenticate(&self) -> impl Future<Output = Result<SessionToken, AuthError>> + Send;

    /// Downloads the animal records using `token`.
    fn fetch_animals(
        &self,
        token: &SessionToken,
    ) -> impl Future<Output = Result<FetchedAnimals, FetchError>> + Send;

    /// Downloads the raw bytes of a thumbnail.
    fn fetch_image(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send;
}
