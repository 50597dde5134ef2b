// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core roster logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) so that the
//! filtering rules can be tested without a network or a window.
//!
//! # Modules
//!
//! - [`animal`]: Animal records ([`Animal`](animal::Animal),
//!   [`Species`](animal::Species), [`Sex`](animal::Sex),
//!   [`DetailPanelRule`](animal::DetailPanelRule))
//! - [`filter`]: Display filters ([`FilterTag`](filter::FilterTag),
//!   [`FilterCounts`](filter::FilterCounts))
//! - [`session`]: Credentials and bearer tokens
//!   ([`Credentials`](session::Credentials), [`SessionToken`](session::SessionToken))

pub mod animal;
pub mod filter;
pub mod session;

pub use animal::{Animal, AnimalId, DetailPanelRule, Sex, Species};
pub use filter::{FilterCounts, FilterTag};
pub use session::{Credentials, SessionToken};
