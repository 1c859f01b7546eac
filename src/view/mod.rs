//! Card presentation
//!
//! Turns raw records into card views, tracks each card's flip state, and
//! renders cards as text.

pub mod card_view;
pub mod flip;
pub mod gallery;
pub mod interactive;
pub mod render;

pub use card_view::{capitalize, CardView, MAX_MOVES};
pub use flip::{CardEvent, FlipState};
pub use gallery::{Card, Gallery};
pub use interactive::{Browser, Command};
pub use render::{render_card, render_grid, render_page, RenderOptions};
