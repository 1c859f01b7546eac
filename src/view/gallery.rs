//! Ordered collection of cards, each with its own flip state

use crate::core::{ArtworkSet, CreatureRecord};
use crate::view::card_view::CardView;
use crate::view::flip::{CardEvent, FlipState};
use crate::{DexError, Result};

/// One card in the gallery
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub view: CardView,
    pub state: FlipState,
}

impl Card {
    pub fn new(view: CardView) -> Self {
        Card {
            view,
            state: FlipState::default(),
        }
    }

    pub fn handle(&mut self, event: CardEvent) -> FlipState {
        self.state = self.state.on(event);
        self.state
    }
}

/// Cards in fetch order. Positions are 1-based, as shown to the user.
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    cards: Vec<Card>,
}

impl Gallery {
    pub fn new(views: Vec<CardView>) -> Self {
        Gallery {
            cards: views.into_iter().map(Card::new).collect(),
        }
    }

    pub fn from_records(records: &[CreatureRecord], artwork: ArtworkSet) -> Self {
        Self::new(CardView::from_records(records, artwork))
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Card at 1-based `position`
    pub fn card(&self, position: usize) -> Result<&Card> {
        position
            .checked_sub(1)
            .and_then(|i| self.cards.get(i))
            .ok_or(DexError::NotFound(position))
    }

    /// Deliver `event` to the card at 1-based `position` only
    pub fn dispatch(&mut self, position: usize, event: CardEvent) -> Result<FlipState> {
        let card = position
            .checked_sub(1)
            .and_then(|i| self.cards.get_mut(i))
            .ok_or(DexError::NotFound(position))?;
        Ok(card.handle(event))
    }

    pub fn states(&self) -> Vec<FlipState> {
        self.cards.iter().map(|c| c.state).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery_of(n: u32) -> Gallery {
        let records: Vec<CreatureRecord> = (1..=n)
            .map(|id| {
                let body =
                    format!(r#"{{"id": {id}, "name": "mon-{id}", "height": 1, "weight": 1}}"#);
                CreatureRecord::from_json(body.as_bytes()).unwrap()
            })
            .collect();
        Gallery::from_records(&records, ArtworkSet::DreamWorld)
    }

    #[test]
    fn test_cards_start_on_front() {
        let gallery = gallery_of(3);
        assert_eq!(gallery.len(), 3);
        assert!(gallery.states().iter().all(|s| *s == FlipState::Front));
    }

    #[test]
    fn test_flip_state_is_per_card() {
        let mut gallery = gallery_of(3);

        assert_eq!(gallery.dispatch(2, CardEvent::PointerEnter).unwrap(), FlipState::Back);
        assert_eq!(
            gallery.states(),
            vec![FlipState::Front, FlipState::Back, FlipState::Front]
        );

        gallery.dispatch(3, CardEvent::Click).unwrap();
        gallery.dispatch(2, CardEvent::Click).unwrap();
        assert_eq!(
            gallery.states(),
            vec![FlipState::Front, FlipState::Front, FlipState::Back]
        );
    }

    #[test]
    fn test_out_of_range_position() {
        let mut gallery = gallery_of(2);
        assert!(matches!(
            gallery.dispatch(0, CardEvent::Click),
            Err(DexError::NotFound(0))
        ));
        assert!(matches!(gallery.card(3), Err(DexError::NotFound(3))));
    }

    #[test]
    fn test_huge_position_is_reported_in_full() {
        let mut gallery = gallery_of(2);
        let err = gallery.dispatch(usize::MAX, CardEvent::Click).unwrap_err();
        assert!(matches!(err, DexError::NotFound(n) if n == usize::MAX));
        assert_eq!(err.to_string(), format!("Card not found: {}", usize::MAX));

        #[cfg(target_pointer_width = "64")]
        assert!(matches!(
            gallery.card(4_294_967_297),
            Err(DexError::NotFound(4_294_967_297))
        ));
        assert_eq!(gallery.states(), vec![FlipState::Front, FlipState::Front]);
    }

    #[test]
    fn test_order_matches_records() {
        let gallery = gallery_of(5);
        let numbers: Vec<_> = gallery.cards().iter().map(|c| c.view.number.as_str()).collect();
        assert_eq!(numbers, vec!["001", "002", "003", "004", "005"]);
    }
}
