//! Core catalog types

pub mod creature;
pub mod palette;
pub mod types;

pub use creature::{ArtworkSet, CreatureRecord, MoveSlot, NamedResource, Sprites, TypeSlot};
pub use palette::{color_for, AccentColor};
pub use types::{DexNumber, MoveName, SpeciesName, TypeName};
