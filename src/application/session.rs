// SPDX-License-Identifier: MPL-2.0
//! Sign-in then fetch, as one sequential pipeline.
//!
//! The GUI drives the two calls step by step through
//! [`RosterState`](crate::ui::roster::state::RosterState) so it can show
//! progress between them; the headless mode and tests use [`load_roster`].

use super::port::{FetchError, FetchedAnimals, PetApi};
use crate::domain::{DetailPanelRule, SessionToken};
use crate::error::Result;

/// Fetches the records with `token` and applies the detail panel rule.
///
/// # Errors
///
/// Returns the adapter's [`FetchError`] unchanged.
pub async fn fetch_roster<A: PetApi>(
    api: &A,
    token: &SessionToken,
    rule: &DetailPanelRule,
) -> std::result::Result<FetchedAnimals, FetchError> {
    let mut fetched = api.fetch_animals(token).await?;
    rule.apply(&mut fetched.animals);
    Ok(fetched)
}

/// Signs in, then fetches the records with the issued token.
///
/// The fetch is never attempted when sign-in fails.
///
/// # Errors
///
/// Returns [`Error::Auth`](crate::error::Error::Auth) when sign-in fails and
/// [`Error::Fetch`](crate::error::Error::Fetch) when the record download fails.
pub async fn load_roster<A: PetApi>(api: &A, rule: &DetailPanelRule) -> Result<FetchedAnimals> {
    let token = api.authenticate().await?;
    Ok(fetch_roster(api, &token, rule).await?)
}
