// SPDX-License-Identifier: MPL-2.0
//! `reqwest` implementation of the pet API port.

use super::decode::{self, LoginRequest};
use crate::application::port::{AuthError, FetchError, FetchedAnimals, PetApi};
use crate::domain::{Credentials, SessionToken};
use crate::error::{Error, Result};
use reqwest::StatusCode;
use std::time::Duration;

/// Largest thumbnail accepted, in bytes.
pub const MAX_IMAGE_BYTES: u64 = 8 * 1024 * 1024;

const USER_AGENT: &str = concat!("PetRoster/", env!("CARGO_PKG_VERSION"));

/// Pet API client bound to one account and one pair of endpoints.
///
/// Cloning is cheap: the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct HttpPetApi {
    client: reqwest::Client,
    credentials: Credentials,
}

impl HttpPetApi {
    /// Builds a client with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the TLS backend cannot be initialized.
    pub fn new(credentials: Credentials, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(e.to_string()))?;

        Ok(Self {
            client,
            credentials,
        })
    }
}

fn is_auth_refusal(status: StatusCode) -> bool {
    status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN
}

/// Thumbnail URLs are public, so any non-2xx answer is a plain status error.
fn image_status(status: StatusCode) -> std::result::Result<(), FetchError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(FetchError::Status(status.as_u16()))
    }
}

/// Rejects a download up front when the server announces an oversized body.
fn check_declared_length(
    content_length: Option<u64>,
    limit: u64,
) -> std::result::Result<(), FetchError> {
    if content_length.is_some_and(|len| len > limit) {
        Err(FetchError::TooLarge { limit })
    } else {
        Ok(())
    }
}

/// Accumulates streamed chunks up to a byte limit.
#[derive(Debug)]
struct ImageBuffer {
    bytes: Vec<u8>,
    limit: u64,
}

impl ImageBuffer {
    fn new(limit: u64) -> Self {
        Self {
            bytes: Vec::new(),
            limit,
        }
    }

    fn push(&mut self, chunk: &[u8]) -> std::result::Result<(), FetchError> {
        if (self.bytes.len() + chunk.len()) as u64 > self.limit {
            return Err(FetchError::TooLarge { limit: self.limit });
        }
        self.bytes.extend_from_slice(chunk);
        Ok(())
    }

    fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl PetApi for HttpPetApi {
    async fn authenticate(&self) -> std::result::Result<SessionToken, AuthError> {
        let response = self
            .client
            .post(&self.credentials.login_url)
            .json(&LoginRequest {
                email: &self.credentials.email,
                password: &self.credentials.password,
            })
            .send()
            .await
            .map_err(|e| AuthError::Unreachable(e.to_string()))?;

        let status = response.status();
        if is_auth_refusal(status) {
            return Err(AuthError::Rejected);
        }
        if !status.is_success() {
            return Err(AuthError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| AuthError::Unreachable(e.to_string()))?;
        decode::decode_token(&body)
    }

    async fn fetch_animals(
        &self,
        token: &SessionToken,
    ) -> std::result::Result<FetchedAnimals, FetchError> {
        let response = self
            .client
            .get(&self.credentials.pets_url)
            .bearer_auth(token.expose())
            .send()
            .await
            .map_err(|e| FetchError::Unreachable(e.to_string()))?;

        let status = response.status();
        if is_auth_refusal(status) {
            return Err(FetchError::Unauthorized);
        }
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Unreachable(e.to_string()))?;
        decode::decode_animals(&body)
    }

    async fn fetch_image(&self, url: &str) -> std::result::Result<Vec<u8>, FetchError> {
        use futures_util::StreamExt;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Unreachable(e.to_string()))?;

        image_status(response.status())?;
        check_declared_length(response.content_length(), MAX_IMAGE_BYTES)?;

        let mut buffer = ImageBuffer::new(MAX_IMAGE_BYTES);
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| FetchError::Unreachable(e.to_string()))?;
            buffer.push(&chunk)?;
        }

        Ok(buffer.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refusal_statuses_are_401_and_403() {
        assert!(is_auth_refusal(StatusCode::UNAUTHORIZED));
        assert!(is_auth_refusal(StatusCode::FORBIDDEN));
        assert!(!is_auth_refusal(StatusCode::NOT_FOUND));
        assert!(!is_auth_refusal(StatusCode::OK));
    }

    #[test]
    fn image_errors_keep_the_status_code() {
        assert_eq!(image_status(StatusCode::OK), Ok(()));
        assert_eq!(
            image_status(StatusCode::NOT_FOUND),
            Err(FetchError::Status(404))
        );
        // No bearer token is sent for images, so 401 is not a session problem.
        assert_eq!(
            image_status(StatusCode::UNAUTHORIZED),
            Err(FetchError::Status(401))
        );
        assert_eq!(
            image_status(StatusCode::BAD_GATEWAY),
            Err(FetchError::Status(502))
        );
    }

    #[test]
    fn declared_length_is_checked_against_limit() {
        assert_eq!(check_declared_length(None, MAX_IMAGE_BYTES), Ok(()));
        assert_eq!(
            check_declared_length(Some(MAX_IMAGE_BYTES), MAX_IMAGE_BYTES),
            Ok(())
        );
        assert_eq!(
            check_declared_length(Some(MAX_IMAGE_BYTES + 1), MAX_IMAGE_BYTES),
            Err(FetchError::TooLarge {
                limit: MAX_IMAGE_BYTES
            })
        );
    }

    #[test]
    fn streamed_body_may_fill_limit_exactly() {
        let mut buffer = ImageBuffer::new(10);
        buffer.push(&[1; 4]).unwrap();
        buffer.push(&[2; 6]).unwrap();
        buffer.push(&[]).unwrap();

        assert_eq!(buffer.into_bytes().len(), 10);
    }

    #[test]
    fn streamed_body_one_byte_over_limit_is_rejected() {
        let mut buffer = ImageBuffer::new(10);
        buffer.push(&[1; 6]).unwrap();

        assert_eq!(
            buffer.push(&[2; 5]),
            Err(FetchError::TooLarge { limit: 10 })
        );
        // The rejected chunk is not kept.
        assert_eq!(buffer.into_bytes().len(), 6);
    }

    #[test]
    fn streamed_body_at_real_limit() {
        let mut buffer = ImageBuffer::new(MAX_IMAGE_BYTES);
        let chunk = vec![0u8; 1024 * 1024];
        for _ in 0..8 {
            buffer.push(&chunk).unwrap();
        }
        assert!(matches!(
            buffer.push(&[0]),
            Err(FetchError::TooLarge { .. })
        ));
    }

    #[tokio::test]
    async fn unreachable_login_endpoint_is_reported() {
        let api = HttpPetApi::new(
            Credentials {
                login_url: "http://127.0.0.1:9/login".into(),
                email: "me@example.com".into(),
                password: "pw".into(),
                pets_url: "http://127.0.0.1:9/pets".into(),
            },
            Duration::from_secs(2),
        )
        .expect("client builds");

        let err = api.authenticate().await.unwrap_err();
        assert!(matches!(err, AuthError::Unreachable(_)));
    }
}
