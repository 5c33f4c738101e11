//! Drawing a card from the deck into a pile.

use std::cell::RefCell;
use std::rc::Rc;
use tracing::warn;

use crate::actions::{Action, Completion};
use crate::cards::{Card, PileId, Table};
use crate::core::TickContext;

use super::Easing;

/// Draws the top card of the deck and lands it in a target pile after an
/// animation delay.
///
/// The draw happens during `start` (the card leaves the deck immediately,
/// so a second draw queued behind this one sees the smaller deck); the
/// card joins the target pile on the completing tick.
///
/// Degrades to an immediate no-op completion when the deck is empty or the
/// target pile does not exist. The queue must not stall because one draw
/// had nothing to draw.
pub struct DrawCardAction {
    table: Rc<RefCell<Table>>,
    target: PileId,
    duration: f32,
    easing: Easing,
    elapsed: f32,
    in_flight: Option<Card>,
    complete: bool,
    done: Completion,
}

impl DrawCardAction {
    /// Draw into `target` over `duration` seconds.
    #[must_use]
    pub fn new(table: Rc<RefCell<Table>>, target: PileId, duration: f32) -> Self {
        Self {
            table,
            target,
            duration,
            easing: Easing::EaseOutCubic,
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

    /// Eased animation progress, 0..=1, for display collaborators.
    #[must_use]
    pub fn progress(&self) -> f32 {
        let t = if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        };
        self.easing.apply(t)
    }

    /// The card currently travelling, if any.
    #[must_use]
    pub fn in_flight(&self) -> Option<Card> {
        self.in_flight
    }
}

impl Action for DrawCardAction {
    fn start(&mut self, done: Completion) {
        self.done = done;
        self.elapsed = 0.0;
        self.complete = false;
        self.in_flight = None;

        let drawn = {
            let mut table = self.table.borrow_mut();
            if table.pile(self.target).is_none() {
                warn!(pile = %self.target, "draw target does not exist, completing with no effect");
                None
            } else if let Some(card) = table.draw() {
                Some(card)
            } else {
                warn!("deck is empty, drawing nothing");
                None
            }
        };

        match drawn {
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
                match table.pile_mut(self.target) {
                    Some(pile) => pile.add(card),
                    // Pile vanished mid-flight; send the card home.
                    None => {
                        warn!(pile = %self.target, "draw target disappeared, returning card to deck");
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
        "draw-card"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardCollection, CardColor, PileKind, SpreadKind};
    use std::cell::Cell;

    fn table_with_deck(cards: &[Card]) -> Rc<RefCell<Table>> {
        let collection: CardCollection = cards.iter().copied().collect();
        Rc::new(RefCell::new(Table::with_collection(1, collection)))
    }

    #[test]
    fn test_card_leaves_deck_at_start_and_lands_at_completion() {
        let table = table_with_deck(&[Card::new(CardColor::Red, 7)]);
        let hand = table
            .borrow_mut()
            .add_pile("hand", PileKind::Player, SpreadKind::Fanned);

        let mut draw = DrawCardAction::new(table.clone(), hand, 0.2);
        draw.start(Completion::none());

        assert_eq!(table.borrow().deck_len(), 0);
        assert!(table.borrow().pile(hand).unwrap().is_empty());
        assert_eq!(draw.in_flight(), Some(Card::new(CardColor::Red, 7)));

        let ctx = TickContext::new(0.1);
        draw.tick(&ctx);
        assert!(!draw.is_complete());

        draw.tick(&ctx);
        assert!(draw.is_complete());
        assert_eq!(
            table.borrow().pile(hand).unwrap().top(),
            Some(Card::new(CardColor::Red, 7))
        );
    }

    #[test]
    fn test_empty_deck_degrades_inside_start() {
        let table = table_with_deck(&[]);
        let hand = table
            .borrow_mut()
            .add_pile("hand", PileKind::Player, SpreadKind::Fanned);

        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();

        let mut draw = DrawCardAction::new(table.clone(), hand, 0.2);
        draw.start(Completion::new(move || flag.set(true)));

        // Completed (and called back) before start returned.
        assert!(draw.is_complete());
        assert!(fired.get());
        assert!(table.borrow().pile(hand).unwrap().is_empty());
    }

    #[test]
    fn test_missing_pile_degrades_without_drawing() {
        let table = table_with_deck(&[Card::new(CardColor::Blue, 3)]);

        let mut draw = DrawCardAction::new(table.clone(), PileId::new(42), 0.2);
        draw.start(Completion::none());

        assert!(draw.is_complete());
        // The deck was not touched.
        assert_eq!(table.borrow().deck_len(), 1);
    }

    #[test]
    fn test_tick_after_complete_is_noop() {
        let table = table_with_deck(&[Card::new(CardColor::Red, 1)]);
        let hand = table
            .borrow_mut()
            .add_pile("hand", PileKind::Player, SpreadKind::Fanned);

        let mut draw = DrawCardAction::new(table.clone(), hand, 0.0);
        draw.start(Completion::none());

        let ctx = TickContext::new(0.1);
        for _ in 0..5 {
            draw.tick(&ctx);
        }

        assert_eq!(table.borrow().pile(hand).unwrap().len(), 1);
    }
}
