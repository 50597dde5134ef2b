// SPDX-License-Identifier: MPL-2.0
//! Import of the `secrets.json` credential file used by earlier clients.
//!
//! The file is a flat JSON object:
//!
//! ```json
//! {
//!   "loginUrl": "https://pets.example/api/login",
//!   "email": "me@example.com",
//!   "password": "...",
//!   "getPetsUrl": "https://pets.example/api/pets"
//! }
//! ```
//!
//! Present fields overwrite the `[api]` section; absent fields leave it alone.

use super::ApiConfig;
use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SecretsFile {
    #[serde(default)]
    login_url: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    password: Option<String>,
    #[serde(default)]
    get_pets_url: Option<String>,
}

/// Reads a secrets file and overlays it on `api`.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::error::Error::Io) if the file cannot be read
/// and [`Error::Config`](crate::error::Error::Config) if it is not valid JSON.
pub fn load_secrets(path: &Path, api: &mut ApiConfig) -> Result<()> {
    let content = fs::read_to_string(path)?;
    apply_secrets(&content, api)
}

fn apply_secrets(content: &str, api: &mut ApiConfig) -> Result<()> {
    let secrets: SecretsFile = serde_json::from_str(content)?;

    if let Some(login_url) = secrets.login_url {
        api.login_url = Some(login_url);
    }
    if let Some(email) = secrets.email {
        api.email = Some(email);
    }
    if let Some(password) = secrets.password {
        api.password = Some(password);
    }
    if let Some(pets_url) = secrets.get_pets_url {
        api.pets_url = Some(pets_url);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn full_file_sets_every_field() {
        let mut api = ApiConfig::default();
        apply_secrets(
            r#"{"loginUrl":"https://a/login","email":"e@x","password":"pw","getPetsUrl":"https://a/pets"}"#,
            &mut api,
        )
        .expect("valid secrets");

        assert_eq!(api.login_url.as_deref(), Some("https://a/login"));
        assert_eq!(api.email.as_deref(), Some("e@x"));
        assert_eq!(api.password.as_deref(), Some("pw"));
        assert_eq!(api.pets_url.as_deref(), Some("https://a/pets"));
    }

    #[test]
    fn absent_fields_keep_existing_values() {
        let mut api = ApiConfig {
            email: Some("kept@example.com".into()),
            timeout_secs: Some(5),
            ..ApiConfig::default()
        };
        apply_secrets(r#"{"password":"pw"}"#, &mut api).expect("valid secrets");

        assert_eq!(api.email.as_deref(), Some("kept@example.com"));
        assert_eq!(api.password.as_deref(), Some("pw"));
        assert_eq!(api.timeout_secs, Some(5));
    }

    #[test]
    fn invalid_json_is_a_config_error() {
        let mut api = ApiConfig::default();
        assert!(matches!(
            apply_secrets("{ not json", &mut api),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut api = ApiConfig::default();
        assert!(matches!(
            load_secrets(&temp_dir.path().join("secrets.json"), &mut api),
            Err(Error::Io(_))
        ));
    }
}
