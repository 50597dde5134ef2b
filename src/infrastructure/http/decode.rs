// SPDX-License-Identifier: MPL-2.0
//! Decoding of pet API response bodies.
//!
//! The animal array is decoded element by element so that one malformed
//! record does not cost the whole list.

use crate::application::port::{AuthError, FetchError, FetchedAnimals};
use crate::domain::{Animal, AnimalId, SessionToken, Species};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of the login request.
#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    token: Option<String>,
}

/// One element of the animal array as sent on the wire.
#[derive(Debug, Deserialize)]
struct WireAnimal {
    id: i64,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    description: Option<String>,
    species_id: i64,
}

impl From<WireAnimal> for Animal {
    fn from(wire: WireAnimal) -> Self {
        Animal {
            id: AnimalId::new(wire.id),
            name: wire.name.unwrap_or_default(),
            image_url: wire.image_url,
            description: wire.description,
            species: Species::from_code(wire.species_id),
            has_detail_panel: false,
        }
    }
}

/// Extracts the bearer token from a login response body.
///
/// # Errors
///
/// Returns [`AuthError::MissingToken`] if the body is not JSON or carries no
/// non-empty `token` string.
pub fn decode_token(body: &[u8]) -> Result<SessionToken, AuthError> {
    let response: LoginResponse =
        serde_json::from_slice(body).map_err(|_| AuthError::MissingToken)?;
    response
        .token
        .and_then(SessionToken::new)
        .ok_or(AuthError::MissingToken)
}

/// Decodes the animal array, skipping elements that are not valid records.
///
/// # Errors
///
/// Returns [`FetchError::UnexpectedBody`] if the body is not a JSON array.
pub fn decode_animals(body: &[u8]) -> Result<FetchedAnimals, FetchError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| FetchError::UnexpectedBody(e.to_string()))?;

    let elements = match value {
        Value::Array(elements) => elements,
        other => {
            return Err(FetchError::UnexpectedBody(format!(
                "expected a JSON array, got {}",
                json_kind(&other)
            )))
        }
    };

    let mut fetched = FetchedAnimals {
        animals: Vec::with_capacity(elements.len()),
        skipped: 0,
    };
    for element in elements {
        match serde_json::from_value::<WireAnimal>(element) {
            Ok(wire) => fetched.animals.push(wire.into()),
            Err(_) => fetched.skipped += 1,
        }
    }
    Ok(fetched)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_read_from_body() {
        let token = decode_token(br#"{"token":"abc","user":{"id":3}}"#).unwrap();
        assert_eq!(token.expose(), "abc");
    }

    #[test]
    fn missing_or_empty_token_is_an_error() {
        assert_eq!(decode_token(br#"{}"#), Err(AuthError::MissingToken));
        assert_eq!(decode_token(br#"{"token":""}"#), Err(AuthError::MissingToken));
        assert_eq!(decode_token(br#"{"token":42}"#), Err(AuthError::MissingToken));
        assert_eq!(decode_token(b"<html>"), Err(AuthError::MissingToken));
    }

    #[test]
    fn animals_keep_server_order() {
        let body = r#"[
            {"id": 2, "name": "Mia", "image_url": null, "description": "Weiblich", "species_id": 2},
            {"id": 1, "name": "Rex", "image_url": "https://pets.example/rex.png", "description": "Männlich", "species_id": 1}
        ]"#
        .as_bytes();

        let fetched = decode_animals(body).unwrap();

        assert_eq!(fetched.skipped, 0);
        let ids: Vec<i64> = fetched.animals.iter().map(|a| a.id.value()).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(fetched.animals[0].image_url, None);
        assert_eq!(fetched.animals[1].species, Species::Dog);
        assert_eq!(fetched.animals[1].description.as_deref(), Some("Männlich"));
    }

    #[test]
    fn optional_fields_may_be_missing() {
        let fetched = decode_animals(br#"[{"id": 5, "species_id": 9}]"#).unwrap();
        let animal = &fetched.animals[0];

        assert_eq!(animal.name, "");
        assert_eq!(animal.description, None);
        assert_eq!(animal.species, Species::Other(9));
        assert!(!animal.has_detail_panel);
    }

    #[test]
    fn malformed_elements_are_skipped_and_counted() {
        let body = br#"[
            {"id": 1, "species_id": 1},
            {"name": "no id", "species_id": 1},
            {"id": "seven", "species_id": 2},
            {"id": 3},
            "not an object",
            {"id": 4, "species_id": 2}
        ]"#;

        let fetched = decode_animals(body).unwrap();

        assert_eq!(fetched.skipped, 4);
        let ids: Vec<i64> = fetched.animals.iter().map(|a| a.id.value()).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn non_array_body_is_rejected() {
        let err = decode_animals(br#"{"error":"nope"}"#).unwrap_err();
        assert!(matches!(err, FetchError::UnexpectedBody(msg) if msg.contains("object")));

        assert!(matches!(
            decode_animals(b"not json"),
            Err(FetchError::UnexpectedBody(_))
        ));
    }

    #[test]
    fn login_request_serializes_credentials() {
        let body = serde_json::to_value(LoginRequest {
            email: "me@example.com",
            password: "pw",
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"email": "me@example.com", "password": "pw"}));
    }
}
