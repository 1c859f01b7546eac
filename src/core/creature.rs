//! Raw creature records as served by the catalog
//!
//! Mirrors the subset of the `/api/v2/pokemon/{id}` payload the gallery needs.
//! Everything else in the payload is ignored on decode.

use crate::core::{DexNumber, MoveName, SpeciesName, TypeName};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::BTreeMap;

/// Named API resource (`{ "name": ..., "url": ... }`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource<N> {
    pub name: N,
    #[serde(default)]
    pub url: String,
}

/// Entry of the `types` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource<TypeName>,
}

/// Entry of the `moves` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSlot {
    #[serde(rename = "move")]
    pub learned: NamedResource<MoveName>,
}

/// One artwork set under `sprites.other`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkSprites {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    /// Keyed by set name: "dream_world", "official-artwork", "home", ...
    #[serde(default)]
    pub other: BTreeMap<String, ArtworkSprites>,
}

/// Which artwork set under `sprites.other` a card displays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ArtworkSet {
    #[default]
    DreamWorld,
    OfficialArtwork,
    Home,
}

impl ArtworkSet {
    /// Key of this set in the `sprites.other` map
    pub fn key(self) -> &'static str {
        match self {
            ArtworkSet::DreamWorld => "dream_world",
            ArtworkSet::OfficialArtwork => "official-artwork",
            ArtworkSet::Home => "home",
        }
    }
}

/// Raw creature record, fetched once per dex number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureRecord {
    pub id: DexNumber,
    pub name: SpeciesName,
    /// Decimetres
    pub height: u32,
    /// Hectograms
    pub weight: u32,
    #[serde(default)]
    pub types: SmallVec<[TypeSlot; 2]>,
    #[serde(default)]
    pub moves: Vec<MoveSlot>,
    #[serde(default)]
    pub sprites: Sprites,
}

impl CreatureRecord {
    /// Type names in slot order as served
    pub fn type_names(&self) -> impl Iterator<Item = &TypeName> {
        self.types.iter().map(|slot| &slot.kind.name)
    }

    pub fn move_names(&self) -> impl Iterator<Item = &MoveName> {
        self.moves.iter().map(|slot| &slot.learned.name)
    }

    /// `sprites.other.<set>.front_default`, if the catalog has one
    pub fn artwork(&self, set: ArtworkSet) -> Option<&str> {
        self.sprites
            .other
            .get(set.key())
            .and_then(|art| art.front_default.as_deref())
    }

    /// Decode a record from a catalog response body
    pub fn from_json(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }
}
