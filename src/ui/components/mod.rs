// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components.
//!
//! # Components
//!
//! - [`error_display`] - Consistent error presentation with severity levels,
//!   expandable technical details, and i18n support

pub mod error_display;
