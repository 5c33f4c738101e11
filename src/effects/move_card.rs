//! Moving a card between piles.

use std::cell::RefCell;
use std::rc::Rc;
use tracing::warn;

use crate::actions::{Action, Completion};
use crate::cards::{Card, PileId, Table};
use crate::core::TickContext;

use super::Easing;

/// Moves the top card of one pile onto another over an animation delay.
///
/// The card leaves the source during `start` and lands on the destination
/// on the completing tick. Both piles are validated up front; a missing
/// pile or an empty source degrades to an immediate no-op completion.
pub struct MoveCardAction {
    table: Rc<RefCell<Table>>,
    from: PileId,
    to: PileId,
    duration: f32,
    easing: Easing,
    elapsed: f32,
    in_flight: Option<Card>,
    complete: bool,
    done: Completion,
}

impl MoveCardAction {
    /// Move the top card of `from` onto `to` over `duration` seconds.
    #[must_use]
    pub fn new(table: Rc<RefCell<Table>>, from: PileId, to: PileId, duration: f32) -> Self {
        Self {
            table,
            from,
            to,
            duration,
            easing: Easing::Linear,
            elapsed: 0.0,
            in_flight: None,
            complete: false,
            done: Completion::none(),
        }
    }

    /// Override the animation curve.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Eased animation progress, 0..=1.
    #[must_use]
    pub fn progress(&self) -> f32 {
        let t = if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        };
        self.easing.apply(t)
    }
}

impl Action for MoveCardAction {
    fn start(&mut self, done: Completion) {
        self.done = done;
        self.elapsed = 0.0;
        self.complete = false;
        self.in_flight = None;

        let taken = {
            let mut table = self.table.borrow_mut();
            if table.pile(self.to).is_none() {
                warn!(pile = %self.to, "move destination does not exist, completing with no effect");
                None
            } else {
                match table.pile_mut(self.from) {
                    None => {
                        warn!(pile = %self.from, "move source does not exist, completing with no effect");
                        None
                    }
                    Some(pile) => {
                        let card = pile.take_top();
                        if card.is_none() {
                            warn!(pile = %self.from, "move source is empty, nothing to move");
                        }
                        card
                    }
                }
            }
        };

        match taken {
            Some(card) => self.in_flight = Some(card),
            None => {
                self.complete = true;
                self.done.fire();
            }
        }
    }

    fn tick(&mut self, ctx: &TickContext) {
        if self.complete {
            return;
        }

        self.elapsed += ctx.scaled_delta();
        let arrived = self.duration <= 0.0 || self.elapsed >= self.duration;

        if arrived {
            if let Some(card) = self.in_flight.take() {
                let mut table = self.table.borrow_mut();
                match table.pile_mut(self.to) {
                    Some(pile) => pile.add(card),
                    None => {
                        warn!(pile = %self.to, "move destination disappeared, returning card to deck");
                        table.return_to_deck(card);
                    }
                }
            }
            self.complete = true;
            self.done.fire();
        }
    }

    fn is_complete(&self) -> bool {
        self.complete
    }

    fn name(&self) -> &'static str {
        "move-card"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardCollection, CardColor, PileKind, SpreadKind};
    use std::cell::Cell;

    fn empty_table() -> Rc<RefCell<Table>> {
        Rc::new(RefCell::new(Table::with_collection(
            1,
            CardCollection::new(),
        )))
    }

    #[test]
    fn test_moves_top_card_between_piles() {
        let table = empty_table();
        let (hand, middle) = {
            let mut t = table.borrow_mut();
            let hand = t.add_pile("hand", PileKind::Player, SpreadKind::Fanned);
            let middle = t.add_pile("middle", PileKind::Middle, SpreadKind::Stacked);
            let pile = t.pile_mut(hand).unwrap();
            pile.add(Card::new(CardColor::Red, 1));
            pile.add(Card::new(CardColor::Blue, 2));
            (hand, middle)
        };

        let mut play = MoveCardAction::new(table.clone(), hand, middle, 0.1);
        play.start(Completion::none());

        // The top card left the hand immediately.
        assert_eq!(table.borrow().pile(hand).unwrap().len(), 1);
        assert!(table.borrow().pile(middle).unwrap().is_empty());

        play.tick(&TickContext::new(0.1));
        assert!(play.is_complete());
        assert_eq!(
            table.borrow().pile(middle).unwrap().top(),
            Some(Card::new(CardColor::Blue, 2))
        );
    }

    #[test]
    fn test_empty_source_degrades() {
        let table = empty_table();
        let (hand, middle) = {
            let mut t = table.borrow_mut();
            (
                t.add_pile("hand", PileKind::Player, SpreadKind::Fanned),
                t.add_pile("middle", PileKind::Middle, SpreadKind::Stacked),
            )
        };

        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();

        let mut play = MoveCardAction::new(table, hand, middle, 0.1);
        play.start(Completion::new(move || flag.set(true)));

        assert!(play.is_complete());
        assert!(fired.get());
    }

    #[test]
    fn test_missing_destination_leaves_source_untouched() {
        let table = empty_table();
        let hand = {
            let mut t = table.borrow_mut();
            let hand = t.add_pile("hand", PileKind::Player, SpreadKind::Fanned);
            t.pile_mut(hand).unwrap().add(Card::new(CardColor::Red, 9));
            hand
        };

        let mut play = MoveCardAction::new(table.clone(), hand, PileId::new(42), 0.1);
        play.start(Completion::none());

        assert!(play.is_complete());
        assert_eq!(table.borrow().pile(hand).unwrap().len(), 1);
    }
}
