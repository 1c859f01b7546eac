//! Accent colors per elemental type
//!
//! The card border and type badge take their color from the primary type.
//! Types outside the table simply get no accent.

use serde::{Serialize, Serializer};

/// A named accent color with its RGB value for terminal output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccentColor {
    /// CSS name or hex string
    pub css: &'static str,
    pub rgb: (u8, u8, u8),
}

impl AccentColor {
    const fn new(css: &'static str, r: u8, g: u8, b: u8) -> Self {
        AccentColor { css, rgb: (r, g, b) }
    }

    /// 24-bit ANSI foreground escape for this color
    pub fn ansi_fg(&self) -> String {
        let (r, g, b) = self.rgb;
        format!("\x1b[38;2;{r};{g};{b}m")
    }
}

impl Serialize for AccentColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.css)
    }
}

const ORANGE: AccentColor = AccentColor::new("orange", 255, 165, 0);
const DARKGREY: AccentColor = AccentColor::new("darkgrey", 169, 169, 169);

/// Look up the accent color for a type name. Total: unknown types give `None`.
pub fn color_for(type_name: &str) -> Option<AccentColor> {
    let color = match type_name {
        "fire" => ORANGE,
        "grass" => AccentColor::new("lightgreen", 144, 238, 144),
        "electric" => AccentColor::new("yellow", 255, 255, 0),
        "water" => AccentColor::new("#70ffea", 0x70, 0xff, 0xea),
        "ground" => DARKGREY,
        "rock" => AccentColor::new("grey", 128, 128, 128),
        "fairy" => AccentColor::new("pink", 255, 192, 203),
        "poison" => AccentColor::new("greenyellow", 173, 255, 47),
        "bug" => AccentColor::new("#94ecbe", 0x94, 0xec, 0xbe),
        "dragon" => ORANGE,
        "psychic" => AccentColor::new("#7c7db6", 0x7c, 0x7d, 0xb6),
        "flying" => AccentColor::new("#fcca46", 0xfc, 0xca, 0x46),
        "fighting" => DARKGREY,
        "normal" => AccentColor::new("lightgrey", 211, 211, 211),
        "ice" => AccentColor::new("#00f2f2", 0x00, 0xf2, 0xf2),
        "dark" => AccentColor::new("#4f7ecf", 0x4f, 0x7e, 0xcf),
        "ghost" => AccentColor::new("#7685a7", 0x76, 0x85, 0xa7),
        "steel" => AccentColor::new("steelblue", 70, 130, 180),
        _ => return None,
    };
    Some(color)
}
