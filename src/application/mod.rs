// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`session`]: The sign-in then fetch pipeline
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer drives the ports through `iced::Task`s
//!
//! # Example
//!
//! ```ignore
//! use pet_roster::application::session::load_roster;
//! use pet_roster::domain::DetailPanelRule;
//! use pet_roster::infrastructure::http::HttpPetApi;
//!
//! let api = HttpPetApi::new(credentials, timeout)?;
//! let roster = load_roster(&api, &DetailPanelRule::new([1680])).await?;
//! ```

pub mod port;
pub mod session;
