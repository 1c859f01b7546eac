//! Two-sided card flip state

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which face of a card is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FlipState {
    /// Artwork, name, measurements, types
    #[default]
    Front,
    /// Move list
    Back,
}

/// Pointer events a card reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardEvent {
    PointerEnter,
    PointerLeave,
    Click,
}

impl FlipState {
    /// Next state after `event`. Entering shows the back, leaving shows the
    /// front, and clicking toggles.
    pub fn on(self, event: CardEvent) -> FlipState {
        match (self, event) {
            (_, CardEvent::PointerEnter) => FlipState::Back,
            (_, CardEvent::PointerLeave) => FlipState::Front,
            (FlipState::Front, CardEvent::Click) => FlipState::Back,
            (FlipState::Back, CardEvent::Click) => FlipState::Front,
        }
    }

    pub fn is_flipped(self) -> bool {
        self == FlipState::Back
    }
}

impl fmt::Display for FlipState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlipState::Front => write!(f, "front"),
            FlipState::Back => write!(f, "back"),
        }
    }
}
