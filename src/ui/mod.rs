// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`roster`] - Filter buttons and the list of pets
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (error display)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod components;
pub mod design_tokens;
pub mod roster;
pub mod styles;
pub mod theming;
