//! Dexcards - creature card gallery over the PokeAPI catalog
//!
//! Fetches a range of creatures from the catalog service, normalizes each raw
//! record into a display-ready card, and renders the cards as flip-cards in
//! the terminal.

pub mod config;
pub mod core;
pub mod error;
pub mod loader;
pub mod logger;
pub mod view;

pub use error::{DexError, Result};
