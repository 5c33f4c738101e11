//! Waiting on a set of other actions.

use crate::core::TickContext;

use super::{Action, Completion, SharedAction};

/// Completes once every tracked action has completed.
///
/// This is the piece that lets the batch manager build sequential batches
/// on top of a runner that has no notion of ordering: submit a batch, then
/// submit one of these tracking exactly that batch, and its completion
/// hook is the "batch finished" signal.
///
/// An empty tracked set completes on the very first tick.
///
/// Always bypasses pausing: pause-menu transitions are driven through the
/// same queue as everything else, so a wait that respected the pause flag
/// would deadlock the drain that is supposed to animate the menu.
///
/// There is no timeout. A tracked action that never reports completion
/// stalls this action, and with it the whole batch queue, forever;
/// detecting or escaping that is deliberately left to the embedding
/// application.
pub struct WaitForAllAction {
    tracked: Vec<SharedAction>,
    complete: bool,
    done: Completion,
}

impl WaitForAllAction {
    /// Track the given actions.
    #[must_use]
    pub fn new(tracked: Vec<SharedAction>) -> Self {
        Self {
            tracked,
            complete: false,
            done: Completion::none(),
        }
    }

    /// Number of actions being tracked.
    #[must_use]
    pub fn tracked_len(&self) -> usize {
        self.tracked.len()
    }
}

impl Action for WaitForAllAction {
    fn start(&mut self, done: Completion) {
        self.done = done;
        self.complete = false;
    }

    fn tick(&mut self, _ctx: &TickContext) {
        if self.complete {
            return;
        }

        // An entry that is mutably borrowed right now is mid-tick and
        // therefore not complete; check again next cycle.
        let all_done = self
            .tracked
            .iter()
            .all(|action| action.try_borrow().map_or(false, |a| a.is_complete()));

        if all_done {
            self.complete = true;
            self.done.fire();
        }
    }

    fn is_complete(&self) -> bool {
        self.complete
    }

    fn bypass_pausing(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "wait-for-all"
    }
}
