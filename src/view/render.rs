//! Plain-text card rendering
//!
//! Cards are fixed-size boxes so a row of them lines up in a grid. The border
//! takes the accent color of the primary type when colors are enabled.

use crate::view::card_view::{capitalize, CardView, MAX_MOVES};
use crate::view::flip::FlipState;
use crate::view::gallery::Gallery;

/// Characters between the side borders
pub const INNER_WIDTH: usize = 26;
/// Content lines per face (move header plus the full move list)
pub const FACE_HEIGHT: usize = MAX_MOVES + 1;

pub const BROKEN_IMAGE: &str = "[broken image]";
pub const LOADING: &str = "Loading...";
pub const EMPTY_GALLERY: &str = "No creatures loaded.";
const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub color: bool,
    pub columns: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            color: false,
            columns: crate::config::DEFAULT_COLUMNS,
        }
    }
}

/// Shorten to `width` characters, marking the cut with "..."
fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{kept}...")
}

fn front_lines(view: &CardView) -> Vec<String> {
    let badge = view
        .primary_type
        .as_ref()
        .map(|t| capitalize(t.as_str()))
        .unwrap_or_default();
    let number = format!("#{}", view.number);
    let gap = INNER_WIDTH.saturating_sub(number.chars().count() + badge.chars().count());
    let image = view.image.as_deref().unwrap_or(BROKEN_IMAGE);

    vec![
        fit(&format!("{number}{}{badge}", " ".repeat(gap)), INNER_WIDTH),
        fit(image, INNER_WIDTH),
        String::new(),
        fit(&view.name, INNER_WIDTH),
        fit(&format!("Height: {}", view.height_label()), INNER_WIDTH),
        fit(&format!("Weight: {}", view.weight_label()), INNER_WIDTH),
        fit(&format!("Type: {}", view.type_line()), INNER_WIDTH),
    ]
}

fn back_lines(view: &CardView) -> Vec<String> {
    let mut lines = vec!["Moves:".to_string()];
    lines.extend(
        view.moves
            .iter()
            .map(|m| fit(&format!("- {m}"), INNER_WIDTH)),
    );
    lines
}

/// Render one face of a card as `FACE_HEIGHT + 2` lines of equal width
pub fn render_card(view: &CardView, state: FlipState, options: &RenderOptions) -> Vec<String> {
    let mut content = match state {
        FlipState::Front => front_lines(view),
        FlipState::Back => back_lines(view),
    };
    content.resize(FACE_HEIGHT, String::new());

    let (paint, reset) = match view.accent {
        Some(accent) if options.color => (accent.ansi_fg(), RESET),
        _ => (String::new(), ""),
    };

    let edge = format!("{paint}+{}+{reset}", "-".repeat(INNER_WIDTH + 2));
    let mut lines = Vec::with_capacity(FACE_HEIGHT + 2);
    lines.push(edge.clone());
    for line in content {
        lines.push(format!(
            "{paint}|{reset} {line:<width$} {paint}|{reset}",
            width = INNER_WIDTH
        ));
    }
    lines.push(edge);
    lines
}

pub fn header() -> String {
    let rule = "=".repeat(INNER_WIDTH + 4);
    format!("{rule}\n  PokeWiki - creature gallery\n{rule}\n")
}

pub fn footer() -> String {
    "Source API: https://pokeapi.co/\n".to_string()
}

/// Shown while the batch is loading, before any card exists
pub fn loading() -> String {
    format!("{LOADING}\n")
}

/// Cards laid out `columns` per row, each in its current face
pub fn render_grid(gallery: &Gallery, options: &RenderOptions) -> String {
    if gallery.is_empty() {
        return format!("{EMPTY_GALLERY}\n");
    }

    let mut out = String::new();
    for row in gallery.cards().chunks(options.columns.max(1)) {
        let rendered: Vec<Vec<String>> = row
            .iter()
            .map(|card| render_card(&card.view, card.state, options))
            .collect();
        for i in 0..FACE_HEIGHT + 2 {
            let line: Vec<&str> = rendered.iter().map(|lines| lines[i].as_str()).collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
    }
    out
}

/// Header, grid and footer
pub fn render_page(gallery: &Gallery, options: &RenderOptions) -> String {
    format!(
        "{}\n{}\n{}",
        header(),
        render_grid(gallery, options),
        footer()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ArtworkSet, CreatureRecord};

    fn view(body: &str) -> CardView {
        let record = CreatureRecord::from_json(body.as_bytes()).unwrap();
        CardView::from_record(&record, ArtworkSet::DreamWorld)
    }

    fn bulbasaur() -> CardView {
        view(
            r#"{"id": 1, "name": "bulbasaur", "height": 7, "weight": 69,
                "types": [{"type": {"name": "grass"}}, {"type": {"name": "poison"}}],
                "moves": [{"move": {"name": "razor-wind"}}, {"move": {"name": "swords-dance"}}],
                "sprites": {"other": {"dream_world": {"front_default": "1.svg"}}}}"#,
        )
    }

    #[test]
    fn test_front_face() {
        let lines = render_card(&bulbasaur(), FlipState::Front, &RenderOptions::default());
        let expected = "\
+----------------------------+
| #001                 Grass |
| 1.svg                      |
|                            |
| Bulbasaur                  |
| Height: 0.7mt              |
| Weight: 6.9kg              |
| Type: Grass / Poison       |
|                            |
|                            |
|                            |
|                            |
+----------------------------+";
        similar_asserts::assert_eq!(lines.join("\n").as_str(), expected);
    }

    #[test]
    fn test_back_face() {
        let lines = render_card(&bulbasaur(), FlipState::Back, &RenderOptions::default());
        assert_eq!(lines.len(), FACE_HEIGHT + 2);
        assert_eq!(lines[1], format!("| {:<26} |", "Moves:"));
        assert_eq!(lines[2], format!("| {:<26} |", "- Razor-wind"));
        assert_eq!(lines[3], format!("| {:<26} |", "- Swords-dance"));
    }

    #[test]
    fn test_missing_artwork_shows_placeholder() {
        let card = view(r#"{"id": 10, "name": "caterpie", "height": 3, "weight": 29}"#);
        let lines = render_card(&card, FlipState::Front, &RenderOptions::default());
        assert!(lines[2].contains(BROKEN_IMAGE));
        // No type, no badge
        assert_eq!(lines[1].trim_end_matches('|').trim(), "| #010");
    }

    #[test]
    fn test_color_only_with_accent() {
        let colored = RenderOptions {
            color: true,
            ..RenderOptions::default()
        };
        let lines = render_card(&bulbasaur(), FlipState::Front, &colored);
        assert!(lines[0].starts_with("\x1b[38;2;144;238;144m+"));
        assert!(lines[0].ends_with(RESET));

        let plain = view(r#"{"id": 999, "name": "missingno", "height": 1, "weight": 1,
            "types": [{"type": {"name": "bird"}}]}"#);
        let lines = render_card(&plain, FlipState::Front, &colored);
        assert!(!lines[0].contains('\x1b'));
    }

    #[test]
    fn test_long_text_is_truncated() {
        assert_eq!(fit("short", 10), "short");
        assert_eq!(fit("abcdefghijkl", 10), "abcdefg...");
    }

    #[test]
    fn test_grid_rows() {
        let gallery = Gallery::new(vec![bulbasaur(), bulbasaur(), bulbasaur()]);
        let options = RenderOptions {
            color: false,
            columns: 2,
        };
        let grid = render_grid(&gallery, &options);
        let lines: Vec<&str> = grid.lines().collect();

        // Two rows of cards
        assert_eq!(lines.len(), 2 * (FACE_HEIGHT + 2));
        assert_eq!(lines[1].matches("#001").count(), 2);
        assert_eq!(lines[FACE_HEIGHT + 3].matches("#001").count(), 1);
    }

    #[test]
    fn test_empty_grid() {
        let grid = render_grid(&Gallery::default(), &RenderOptions::default());
        assert_eq!(grid, "No creatures loaded.\n");
    }

    #[test]
    fn test_loading_line() {
        assert_eq!(loading(), "Loading...\n");
    }

    #[test]
    fn test_page_has_header_and_footer() {
        let page = render_page(&Gallery::new(vec![bulbasaur()]), &RenderOptions::default());
        assert!(page.contains("PokeWiki"));
        assert!(page.trim_end().ends_with("Source API: https://pokeapi.co/"));
    }
}
