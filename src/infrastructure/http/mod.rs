// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the pet API.
//!
//! - [`client`]: `reqwest` implementation of [`PetApi`](crate::application::port::PetApi)
//! - [`decode`]: JSON body decoding (login token, animal array)

mod client;
pub mod decode;

pub use client::{HttpPetApi, MAX_IMAGE_BYTES};
