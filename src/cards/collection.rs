//! The draw pile.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

use super::card::{Card, CardColor};

/// An ordered stack of cards drawn from the top (the back of the list).
///
/// Drawing from an empty collection returns `None`; callers decide whether
/// that means restoring from another pile, skipping, or ending the game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCollection {
    cards: Vec<Card>,
}

impl CardCollection {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the standard 76-card deck: one 0 and two each of 1-9 per
    /// color. Unshuffled.
    #[must_use]
    pub fn standard() -> Self {
        let mut collection = Self::new();

        for color in CardColor::ALL {
            collection.add(Card::new(color, 0));
        }

        for color in CardColor::ALL {
            for rank in 1..=9 {
                collection.add(Card::new(color, rank));
                collection.add(Card::new(color, rank));
            }
        }

        collection
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the collection empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Add a card to the top.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove the first card equal to `card`. Returns whether one was
    /// removed.
    pub fn remove(&mut self, card: Card) -> bool {
        if let Some(index) = self.cards.iter().position(|&c| c == card) {
            self.cards.remove(index);
            true
        } else {
            false
        }
    }

    /// Draw and remove the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Peek at the top card without removing it.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Shuffle in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// All cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl FromIterator<Card> for CardCollection {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
