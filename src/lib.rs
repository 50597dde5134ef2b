// SPDX-License-Identifier: MPL-2.0
//! `pet_roster` is a desktop client that signs in to a pet API, downloads the
//! animal records and lists them with filters for species and sex.
//!
//! It is built with the Iced GUI framework, localized with Fluent, and keeps
//! its settings in a `settings.toml` file.
//!
//! # Layers
//!
//! - [`domain`] - Records, filter predicate and session types (no I/O)
//! - [`application`] - The `PetApi` port and the sign-in/fetch pipeline
//! - [`infrastructure`] - HTTP adapter and JSON decoding
//! - [`ui`] / [`app`] - The roster screen and the Iced application shell

pub mod app;
pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
