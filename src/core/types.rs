//! Strongly-typed wrappers for catalog concepts
//!
//! Creature numbers, species names, type names and move names all arrive as
//! bare integers and strings from the catalog. Wrapping them keeps a move name
//! from being passed where a type name is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// National dex number of a creature (always positive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct DexNumber(u32);

impl DexNumber {
    pub fn new(n: u32) -> Option<Self> {
        if n == 0 {
            None
        } else {
            Some(DexNumber(n))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Zero-padded to at least three digits: 7 -> "007", 1025 -> "1025"
    pub fn padded(self) -> String {
        format!("{:03}", self.0)
    }
}

impl TryFrom<u32> for DexNumber {
    type Error = String;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        DexNumber::new(n).ok_or_else(|| "dex number must be positive, got 0".to_string())
    }
}

impl From<DexNumber> for u32 {
    fn from(n: DexNumber) -> u32 {
        n.0
    }
}

impl fmt::Display for DexNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Species name as the catalog spells it (lowercase, hyphenated)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpeciesName(String);

impl SpeciesName {
    pub fn new(s: impl Into<String>) -> Self {
        SpeciesName(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpeciesName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SpeciesName {
    fn from(s: &str) -> Self {
        SpeciesName(s.to_string())
    }
}

/// Elemental type name (e.g., "fire", "electric")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeName(String);

impl TypeName {
    pub fn new(s: impl Into<String>) -> Self {
        TypeName(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TypeName {
    fn from(s: &str) -> Self {
        TypeName(s.to_string())
    }
}

/// Move name (e.g., "thunder-shock")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveName(String);

impl MoveName {
    pub fn new(s: impl Into<String>) -> Self {
        MoveName(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MoveName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MoveName {
    fn from(s: &str) -> Self {
        MoveName(s.to_string())
    }
}
