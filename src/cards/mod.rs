//! The card table model: cards, the draw pile, table piles.
//!
//! Value types only: a `Card` is data, not an object with identity. The
//! scheduler's leaf effects mutate this model through a shared
//! [`Table`], which is the one place deck, piles and RNG live together.

pub mod card;
pub mod collection;
pub mod pile;
pub mod table;

pub use card::{Card, CardColor};
pub use collection::CardCollection;
pub use pile::{CardPile, PileId, PileKind, SpreadKind};
pub use table::Table;
