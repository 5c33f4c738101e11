//! Deferred closures.

use crate::actions::{Action, Completion};
use crate::core::TickContext;

/// Runs a closure on its first tick, then completes.
///
/// The workhorse for sequencing arbitrary side effects through the batch
/// queue: hiding a menu after its slide-out finishes, restoring the deck
/// before the next draw, flipping game state between animations. Often
/// submitted with `with_bypass_pausing(true)` so pause-transition cleanup
/// can run while the table is paused.
pub struct CallbackAction {
    callback: Option<Box<dyn FnOnce()>>,
    bypass: bool,
    complete: bool,
    done: Completion,
}

impl CallbackAction {
    /// Run `callback` on the first tick after submission.
    #[must_use]
    pub fn new(callback: impl FnOnce() + 'static) -> Self {
        Self {
            callback: Some(Box::new(callback)),
            bypass: false,
            complete: false,
            done: Completion::none(),
        }
    }

    /// Let this callback run while the runner is paused.
    #[must_use]
    pub fn with_bypass_pausing(mut self, bypass: bool) -> Self {
        self.bypass = bypass;
        self
    }
}

impl Action for CallbackAction {
    fn start(&mut self, done: Completion) {
        self.done = done;
        self.complete = false;
    }

    fn tick(&mut self, _ctx: &TickContext) {
        if self.complete {
            return;
        }

        if let Some(callback) = self.callback.take() {
            callback();
        }

        self.complete = true;
        self.done.fire();
    }

    fn is_complete(&self) -> bool {
        self.complete
    }

    fn bypass_pausing(&self) -> bool {
        self.bypass
    }

    fn name(&self) -> &'static str {
        "callback"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_runs_on_first_tick_only() {
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();

        let mut action = CallbackAction::new(move || counter.set(counter.get() + 1));
        action.start(Completion::none());
        assert_eq!(count.get(), 0);

        let ctx = TickContext::new(0.1);
        action.tick(&ctx);
        assert!(action.is_complete());
        assert_eq!(count.get(), 1);

        action.tick(&ctx);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_completion_hook_fires_after_callback() {
        let order = Rc::new(std::cell::RefCell::new(Vec::new()));

        let log = order.clone();
        let mut action = CallbackAction::new(move || log.borrow_mut().push("effect"));

        let log = order.clone();
        action.start(Completion::new(move || log.borrow_mut().push("done")));

        action.tick(&TickContext::new(0.1));
        assert_eq!(*order.borrow(), vec!["effect", "done"]);
    }

    #[test]
    fn test_bypass_is_off_by_default() {
        let action = CallbackAction::new(|| {});
        assert!(!action.bypass_pausing());
        let action = CallbackAction::new(|| {}).with_bypass_pausing(true);
        assert!(action.bypass_pausing());
    }
}
