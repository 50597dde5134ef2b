// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::FilterTag;
use crate::ui::roster;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Roster(roster::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `de`, `en-US`).
    pub lang: Option<String>,
    /// Optional legacy `secrets.json` overlaid on the `[api]` section.
    pub secrets: Option<String>,
    /// Filter applied when the list first appears.
    pub filter: FilterTag,
}
