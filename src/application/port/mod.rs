// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of the HTTP client.
//!
//! # Available Ports
//!
//! - [`pet_api`]: Sign-in, record fetch and thumbnail download
//!
//! # Design Notes
//!
//! - All traits use domain types only (no `reqwest` types, no Iced handles)
//! - Traits are `Send + Sync` so adapters can be shared behind an `Arc`
//! - Network calls return `Send` futures; callers wrap them in an Iced `Task`

pub mod pet_api;

pub use pet_api::{AuthError, FetchError, FetchedAnimals, PetApi};
