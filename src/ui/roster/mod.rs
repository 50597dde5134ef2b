// SPDX-License-Identifier: MPL-2.0
//! The roster screen: filter buttons above a scrollable list of pets.

pub mod component;
mod empty_state;
pub mod filter_bar;
pub mod row;
pub mod state;

pub use component::{Message, State, ViewEnv};
pub use state::{Effect, ImageRequest, ImageSlot, LoadFailure, LoadPhase, RosterState};
