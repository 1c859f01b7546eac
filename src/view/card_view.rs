//! Display-ready projection of a creature record

use crate::core::{color_for, AccentColor, ArtworkSet, CreatureRecord, TypeName};
use serde::Serialize;

/// Most moves shown on the back of a card
pub const MAX_MOVES: usize = 10;

/// Uppercase the first character and leave the rest unchanged
///
/// Only the first character of the whole string changes, so multi-word names
/// are not title-cased.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Immutable view model for one card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    /// Zero-padded dex number ("025")
    pub number: String,
    /// Capitalized display name
    pub name: String,
    /// Metres
    pub height_m: f64,
    /// Kilograms
    pub weight_kg: f64,
    /// Raw type names in slot order
    pub types: Vec<TypeName>,
    pub primary_type: Option<TypeName>,
    pub accent: Option<AccentColor>,
    /// First ten moves, capitalized
    pub moves: Vec<String>,
    pub image: Option<String>,
}

impl CardView {
    pub fn from_record(record: &CreatureRecord, artwork: ArtworkSet) -> Self {
        let types: Vec<TypeName> = record.type_names().cloned().collect();
        let primary_type = types.first().cloned();
        let accent = primary_type
            .as_ref()
            .and_then(|primary| color_for(primary.as_str()));

        CardView {
            number: record.id.padded(),
            name: capitalize(record.name.as_str()),
            height_m: f64::from(record.height) / 10.0,
            weight_kg: f64::from(record.weight) / 10.0,
            types,
            primary_type,
            accent,
            moves: record
                .move_names()
                .take(MAX_MOVES)
                .map(|m| capitalize(m.as_str()))
                .collect(),
            image: record.artwork(artwork).map(str::to_string),
        }
    }

    /// Views for a batch of records, keeping their order
    pub fn from_records(records: &[CreatureRecord], artwork: ArtworkSet) -> Vec<CardView> {
        records
            .iter()
            .map(|record| CardView::from_record(record, artwork))
            .collect()
    }

    /// Types as shown on the card front: "Grass / Poison"
    pub fn type_line(&self) -> String {
        self.types
            .iter()
            .map(|t| capitalize(t.as_str()))
            .collect::<Vec<_>>()
            .join(" / ")
    }

    pub fn height_label(&self) -> String {
        format!("{}mt", self.height_m)
    }

    pub fn weight_label(&self) -> String {
        format!("{}kg", self.weight_kg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_moves(move_count: usize) -> CreatureRecord {
        let moves: Vec<String> = (0..move_count)
            .map(|i| format!(r#"{{"move": {{"name": "move-{i}"}}}}"#))
            .collect();
        let body = format!(
            r#"{{"id": 6, "name": "charizard", "height": 17, "weight": 905,
                "types": [{{"type": {{"name": "fire"}}}}, {{"type": {{"name": "flying"}}}}],
                "moves": [{}]}}"#,
            moves.join(",")
        );
        CreatureRecord::from_json(body.as_bytes()).unwrap()
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("a"), "A");
        assert_eq!(capitalize("bulbasaur"), "Bulbasaur");
        assert_eq!(capitalize("mr. mime"), "Mr. mime");
        assert_eq!(capitalize("thunder-shock"), "Thunder-shock");
        assert_eq!(capitalize("Already"), "Already");
    }

    #[test]
    fn test_capitalize_multibyte_first_char() {
        assert_eq!(capitalize("éclair"), "Éclair");
        // 'ß' uppercases to two characters
        assert_eq!(capitalize("ßa"), "SSa");
    }

    #[test]
    fn test_move_list_is_capped() {
        for count in [0, 1, 9, 10, 11, 80] {
            let view = CardView::from_record(&record_with_moves(count), ArtworkSet::DreamWorld);
            assert_eq!(view.moves.len(), count.min(MAX_MOVES));
        }
    }

    #[test]
    fn test_moves_keep_order() {
        let view = CardView::from_record(&record_with_moves(12), ArtworkSet::DreamWorld);
        assert_eq!(view.moves.first().map(String::as_str), Some("Move-0"));
        assert_eq!(view.moves.last().map(String::as_str), Some("Move-9"));
    }

    #[test]
    fn test_measurements_are_not_cumulative() {
        let record = record_with_moves(0);
        let first = CardView::from_record(&record, ArtworkSet::DreamWorld);
        let second = CardView::from_record(&record, ArtworkSet::DreamWorld);

        assert_eq!(first.height_m, 1.7);
        assert_eq!(first.weight_kg, 90.5);
        assert_eq!(first, second);
        assert_eq!(record.height, 17);
    }

    #[test]
    fn test_type_line_and_primary_type() {
        let view = CardView::from_record(&record_with_moves(0), ArtworkSet::DreamWorld);
        assert_eq!(view.type_line(), "Fire / Flying");
        assert_eq!(view.primary_type, Some(TypeName::new("fire")));
        assert_eq!(view.accent.map(|c| c.css), Some("orange"));
    }

    #[test]
    fn test_unknown_primary_type_has_no_accent() {
        let body = r#"{"id": 999, "name": "missingno", "height": 30, "weight": 15900,
            "types": [{"type": {"name": "bird"}}]}"#;
        let record = CreatureRecord::from_json(body.as_bytes()).unwrap();
        let view = CardView::from_record(&record, ArtworkSet::DreamWorld);

        assert_eq!(view.primary_type, Some(TypeName::new("bird")));
        assert_eq!(view.accent, None);
        assert_eq!(view.image, None);
    }

    #[test]
    fn test_labels() {
        let view = CardView::from_record(&record_with_moves(0), ArtworkSet::DreamWorld);
        assert_eq!(view.height_label(), "1.7mt");
        assert_eq!(view.weight_label(), "90.5kg");
    }
}
