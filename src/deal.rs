//! Dealing and playing through the batch queue.
//!
//! The dealer is the reference wiring of table + scheduler: every card
//! that moves at the start of a game moves because a batch here said so.
//! It is deliberately thin, no turn legality and no scoring, just the
//! choreography: wait, shuffle, deal one card at a time, play to the
//! middle.

use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

use crate::actions::{ActionBatchManager, Batch, Completion};
use crate::cards::{PileId, PileKind, SpreadKind, Table};
use crate::core::GameConfig;
use crate::effects::{CallbackAction, DelayAction, DrawCardAction, MoveCardAction, ShuffleAction};

/// Queues the table's standard sequences as batches.
///
/// Cheap to clone; deal callbacks carry a clone of the dealer so they can
/// enqueue follow-up batches from inside a running drain.
///
/// ## Example
///
/// ```
/// use cardtable::actions::{ActionBatchManager, ActionRunner, Completion};
/// use cardtable::cards::Table;
/// use cardtable::core::{GameConfig, TickContext};
/// use cardtable::deal::Dealer;
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let runner = ActionRunner::new();
/// let batches = ActionBatchManager::new(runner.clone());
/// let table = Rc::new(RefCell::new(Table::new(42)));
/// let config = GameConfig::new().with_starting_cards(2);
///
/// let dealer = Dealer::new(batches, table.clone(), config, &["you", "rival"]);
/// dealer.queue_starting_hands();
/// dealer.start(Completion::none());
///
/// let ctx = TickContext::new(0.1);
/// while dealer.batches().is_processing() {
///     runner.tick(&ctx);
/// }
///
/// let hand = dealer.player_piles()[0];
/// assert_eq!(table.borrow().pile(hand).unwrap().len(), 2);
/// ```
#[derive(Clone)]
pub struct Dealer {
    batches: ActionBatchManager,
    table: Rc<RefCell<Table>>,
    config: GameConfig,
    players: Rc<Vec<PileId>>,
    middle: PileId,
}

impl Dealer {
    /// Create the middle pile and one hand pile per player name.
    ///
    /// The first name is the human player's pile; the rest are opponents.
    #[must_use]
    pub fn new(
        batches: ActionBatchManager,
        table: Rc<RefCell<Table>>,
        config: GameConfig,
        player_names: &[&str],
    ) -> Self {
        let (players, middle) = {
            let mut table = table.borrow_mut();
            let middle = table.add_pile("middle", PileKind::Middle, SpreadKind::Stacked);
            let players = player_names
                .iter()
                .enumerate()
                .map(|(index, name)| {
                    let kind = if index == 0 {
                        PileKind::Player
                    } else {
                        PileKind::Opponent
                    };
                    table.add_pile(*name, kind, SpreadKind::Fanned)
                })
                .collect();
            (players, middle)
        };

        Self {
            batches,
            table,
            config,
            players: Rc::new(players),
            middle,
        }
    }

    /// The hand piles, in seating order.
    #[must_use]
    pub fn player_piles(&self) -> &[PileId] {
        &self.players
    }

    /// The shared middle pile.
    #[must_use]
    pub fn middle_pile(&self) -> PileId {
        self.middle
    }

    /// The batch queue this dealer feeds.
    #[must_use]
    pub fn batches(&self) -> &ActionBatchManager {
        &self.batches
    }

    /// Queue the opening flourish: a beat of quiet, then the shuffle.
    pub fn queue_opening(&self) {
        self.batches
            .add_batch(Batch::single(DelayAction::new(self.config.opening_delay)));
        self.batches.add_batch(Batch::single(ShuffleAction::new(
            self.table.clone(),
            self.config.shuffle_cycles,
            self.config.shuffle_cycle_duration,
        )));
    }

    /// Queue the starting deal: one card at a time to each hand, around
    /// the table, until every hand has its starting cards.
    pub fn queue_starting_hands(&self) {
        debug!(
            players = self.players.len(),
            each = self.config.starting_cards,
            "queueing starting deal"
        );
        for _ in 0..self.config.starting_cards {
            for &pile in self.players.iter() {
                self.queue_draw(pile);
            }
        }
    }

    /// Queue one dealt card to `target`.
    ///
    /// The batch holds a callback rather than the draw itself: when the
    /// callback runs (mid-drain, in queue order) it checks whether the
    /// deck has run dry, reclaims the middle pile if so, and only then
    /// enqueues the actual draw. Batches appended from inside a drain keep
    /// their enqueue order, which is what makes this two-step legal.
    pub fn queue_draw(&self, target: PileId) {
        let dealer = self.clone();
        self.batches
            .add_batch(Batch::single(CallbackAction::new(move || {
                if dealer.table.borrow().deck_len() == 0 {
                    debug!("deck ran dry, reclaiming the middle pile");
                    dealer.table.borrow_mut().reclaim(dealer.middle);
                }
                dealer
                    .batches
                    .add_batch(Batch::single(DrawCardAction::new(
                        dealer.table.clone(),
                        target,
                        dealer.config.draw_duration,
                    )));
            })));
    }

    /// Queue playing the top card of `from` onto the middle pile.
    pub fn queue_play_to_middle(&self, from: PileId) {
        self.batches.add_batch(Batch::single(MoveCardAction::new(
            self.table.clone(),
            from,
            self.middle,
            self.config.play_duration,
        )));
    }

    /// Begin draining, with `on_drained` firing once the queue empties.
    pub fn start(&self, on_drained: Completion) {
        self.batches.start_processing(on_drained);
    }
}
