//! Card values.

use serde::{Deserialize, Serialize};

/// The four card colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Blue,
    Green,
    Yellow,
}

impl CardColor {
    /// Every color, in deck-building order.
    pub const ALL: [CardColor; 4] = [
        CardColor::Red,
        CardColor::Blue,
        CardColor::Green,
        CardColor::Yellow,
    ];
}

impl std::fmt::Display for CardColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardColor::Red => "Red",
            CardColor::Blue => "Blue",
            CardColor::Green => "Green",
            CardColor::Yellow => "Yellow",
        };
        write!(f, "{name}")
    }
}

/// A single card: a color and a rank from 0 to 9.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub color: CardColor,
    pub rank: u8,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(color: CardColor, rank: u8) -> Self {
        Self { color, rank }
    }

    /// Can this card be played on top of `other`?
    ///
    /// The base rule: matching color or matching rank.
    #[must_use]
    pub fn can_play_on(self, other: Card) -> bool {
        self.color == other.color || self.rank == other.rank
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_play_on_matching_color() {
        let red3 = Card::new(CardColor::Red, 3);
        let red7 = Card::new(CardColor::Red, 7);
        assert!(red3.can_play_on(red7));
    }

    #[test]
    fn test_can_play_on_matching_rank() {
        let red3 = Card::new(CardColor::Red, 3);
        let blue3 = Card::new(CardColor::Blue, 3);
        assert!(red3.can_play_on(blue3));
    }

    #[test]
    fn test_cannot_play_on_mismatch() {
        let red3 = Card::new(CardColor::Red, 3);
        let blue7 = Card::new(CardColor::Blue, 7);
        assert!(!red3.can_play_on(blue7));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Card::new(CardColor::Green, 0)), "Green 0");
    }

    #[test]
    fn test_serialization() {
        let card = Card::new(CardColor::Yellow, 9);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
