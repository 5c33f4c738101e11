//! Piles of cards on the table.

use serde::{Deserialize, Serialize};

use super::card::Card;

/// Pile identifier, allocated by the [`Table`](super::Table).
///
/// Opaque to the engine; the table assigns meaning via `PileKind`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PileId(pub u16);

impl PileId {
    /// Create a pile ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for PileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pile({})", self.0)
    }
}

/// What role a pile plays on the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PileKind {
    /// The human player's hand.
    Player,
    /// An opponent's hand.
    Opponent,
    /// The shared pile cards are played onto.
    Middle,
}

/// How a pile is laid out by the presentation layer.
///
/// The engine never does layout math; it just carries the tag so display
/// collaborators know whether to stack or fan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpreadKind {
    /// Cards directly on top of each other (deck, middle pile).
    Stacked,
    /// First card leftmost (hands).
    Fanned,
}

/// An ordered pile of cards.
///
/// Cards are added at the top (end); `remove_bottom` exists because hands
/// discard their oldest card first in some variants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPile {
    pub kind: PileKind,
    pub spread: SpreadKind,
    pub name: String,
    cards: Vec<Card>,
}

impl CardPile {
    /// Create an empty pile.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: PileKind, spread: SpreadKind) -> Self {
        Self {
            kind,
            spread,
            name: name.into(),
            cards: Vec::new(),
        }
    }

    /// Number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the pile empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Add a card to the top.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove and return the top card.
    pub fn take_top(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Remove and return the bottom card.
    pub fn remove_bottom(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
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

    /// Peek at the top card.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// All cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Which cards here could be played on `top`?
    ///
    /// `None` means the target pile is empty and anything goes.
    #[must_use]
    pub fn playable_on(&self, top: Option<Card>) -> Vec<Card> {
        match top {
            None => self.cards.clone(),
            Some(target) => self
                .cards
                .iter()
                .copied()
                .filter(|card| card.can_play_on(target))
                .collect(),
        }
    }
}
