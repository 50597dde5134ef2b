// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external dependencies like the
//! HTTP client.
//!
//! # Available Adapters
//!
//! - [`http`]: Pet API over HTTPS via `reqwest` (implements [`PetApi`])
//!
//! [`PetApi`]: crate::application::port::PetApi

pub mod http;

pub use http::HttpPetApi;
