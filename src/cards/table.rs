//! The table: deck, piles, and the RNG that shuffles them.

use rustc_hash::FxHashMap;
use tracing::{info, warn};

use crate::core::GameRng;

use super::card::Card;
use super::collection::CardCollection;
use super::pile::{CardPile, PileId, PileKind, SpreadKind};

/// Everything on the table: the draw pile and the card piles, plus the
/// deterministic RNG used to shuffle.
///
/// Leaf effects share a table as `Rc<RefCell<Table>>`; the table itself is
/// plain data and does no scheduling.
///
/// ## Usage
///
/// ```
/// use cardtable::cards::{PileKind, SpreadKind, Table};
///
/// let mut table = Table::new(42);
/// let hand = table.add_pile("player", PileKind::Player, SpreadKind::Fanned);
///
/// let card = table.draw().unwrap();
/// table.pile_mut(hand).unwrap().add(card);
/// assert_eq!(table.pile(hand).unwrap().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Table {
    collection: CardCollection,
    piles: FxHashMap<PileId, CardPile>,
    /// Pile IDs in creation order, for stable iteration.
    order: Vec<PileId>,
    next_pile: u16,
    rng: GameRng,
}

impl Table {
    /// Create a table with a shuffled standard deck.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut table = Self::with_collection(seed, CardCollection::standard());
        table.shuffle_deck();
        table
    }

    /// Create a table with a specific (unshuffled) deck. Mostly for tests
    /// and variants with custom decks.
    #[must_use]
    pub fn with_collection(seed: u64, collection: CardCollection) -> Self {
        Self {
            collection,
            piles: FxHashMap::default(),
            order: Vec::new(),
            next_pile: 0,
            rng: GameRng::new(seed),
        }
    }

    /// Add a pile, returning its ID.
    pub fn add_pile(
        &mut self,
        name: impl Into<String>,
        kind: PileKind,
        spread: SpreadKind,
    ) -> PileId {
        let id = PileId::new(self.next_pile);
        self.next_pile += 1;
        self.piles.insert(id, CardPile::new(name, kind, spread));
        self.order.push(id);
        id
    }

    /// Look up a pile.
    #[must_use]
    pub fn pile(&self, id: PileId) -> Option<&CardPile> {
        self.piles.get(&id)
    }

    /// Look up a pile mutably.
    pub fn pile_mut(&mut self, id: PileId) -> Option<&mut CardPile> {
        self.piles.get_mut(&id)
    }

    /// Pile IDs in creation order.
    #[must_use]
    pub fn pile_ids(&self) -> &[PileId] {
        &self.order
    }

    /// Iterate piles in creation order.
    pub fn piles(&self) -> impl Iterator<Item = (PileId, &CardPile)> {
        self.order.iter().map(|&id| (id, &self.piles[&id]))
    }

    /// The draw pile.
    #[must_use]
    pub fn deck(&self) -> &CardCollection {
        &self.collection
    }

    /// Cards remaining in the draw pile.
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.collection.len()
    }

    /// Draw the top card of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.collection.draw()
    }

    /// Put a card back on top of the deck.
    pub fn return_to_deck(&mut self, card: Card) {
        self.collection.add(card);
    }

    /// Shuffle the draw pile.
    pub fn shuffle_deck(&mut self) {
        self.collection.shuffle(&mut self.rng);
    }

    /// Move every card in `pile` back into the deck, bottom first.
    ///
    /// Returns the number of cards reclaimed. The deck is not reshuffled;
    /// queue a shuffle separately if the variant wants one.
    pub fn reclaim(&mut self, id: PileId) -> usize {
        let Some(pile) = self.piles.get_mut(&id) else {
            warn!(pile = %id, "cannot reclaim a pile that does not exist");
            return 0;
        };

        let mut count = 0;
        while let Some(card) = pile.remove_bottom() {
            self.collection.add(card);
            count += 1;
        }

        info!(pile = %id, count, "reclaimed pile into the deck");
        count
    }
}
