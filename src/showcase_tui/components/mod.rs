//! Reusable UI components for the showcase TUI

pub mod actor_card;
pub mod status_display;

pub use actor_card::{ActorCard, CARD_HEIGHT};
pub use status_display::{StatusDisplay, StatusType};
