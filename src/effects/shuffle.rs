//! The table shuffle.

use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, warn};

use crate::actions::{Action, Completion};
use crate::cards::Table;
use crate::core::TickContext;

/// A multi-cycle deck shuffle.
///
/// Each cycle runs for a fixed duration (the presentation layer fills it
/// with whatever split/riffle/stack spectacle it likes) and permutes the
/// deck at its boundary, so the deck order a cycle ends with is the order
/// observers see. Completes at the end of the last cycle.
///
/// Degrades to an immediate no-op completion when the deck is empty.
pub struct ShuffleAction {
    table: Rc<RefCell<Table>>,
    cycles: u32,
    cycle_duration: f32,
    current_cycle: u32,
    in_cycle: f32,
    complete: bool,
    done: Completion,
}

impl ShuffleAction {
    /// Shuffle for `cycles` cycles of `cycle_duration` seconds each.
    ///
    /// At least one cycle always runs.
    #[must_use]
    pub fn new(table: Rc<RefCell<Table>>, cycles: u32, cycle_duration: f32) -> Self {
        Self {
            table,
            cycles: cycles.max(1),
            cycle_duration,
            current_cycle: 0,
            in_cycle: 0.0,
            complete: false,
            done: Completion::none(),
        }
    }

    /// The cycle currently running (0-based).
    #[must_use]
    pub fn current_cycle(&self) -> u32 {
        self.current_cycle
    }
}

impl Action for ShuffleAction {
    fn start(&mut self, done: Completion) {
        self.done = done;
        self.complete = false;
        self.current_cycle = 0;
        self.in_cycle = 0.0;

        if self.table.borrow().deck_len() == 0 {
            warn!("nothing to shuffle, completing with no effect");
            self.complete = true;
            self.done.fire();
        }
    }

    fn tick(&mut self, ctx: &TickContext) {
        if self.complete {
            return;
        }

        self.in_cycle += ctx.scaled_delta();

        if self.in_cycle >= self.cycle_duration {
            self.table.borrow_mut().shuffle_deck();
            self.current_cycle += 1;
            self.in_cycle = 0.0;
            debug!(cycle = self.current_cycle, of = self.cycles, "shuffle cycle finished");

            if self.current_cycle >= self.cycles {
                self.complete = true;
                self.done.fire();
            }
        }
    }

    fn is_complete(&self) -> bool {
        self.complete
    }

    fn name(&self) -> &'static str {
        "shuffle"
    }
}
