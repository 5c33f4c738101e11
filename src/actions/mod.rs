//! The action scheduler: lifecycle contract, runner, batching.
//!
//! Everything animated or deferred on the table is an [`Action`]: a unit of
//! work that is started once, advanced one increment per tick, and reports
//! its own completion. The scheduler is deliberately small:
//!
//! - [`ActionRunner`] advances every active action once per external tick
//!   and applies the global pause policy.
//! - [`WaitForAllAction`] is a synthetic action that completes when a fixed
//!   set of other actions has completed.
//! - [`ActionBatchManager`] drains a FIFO queue of batches, one batch at a
//!   time, by pairing each batch with a `WaitForAllAction` that gates the
//!   next dequeue.
//!
//! ## Design Philosophy
//!
//! Single-threaded and cooperative. "Concurrent" means several actions each
//! advance once within the same tick; there is no preemption and no OS
//! thread anywhere. Actions are shared as `Rc<RefCell<..>>` because the
//! runner and a wait action may track the same instance, and because
//! completion callbacks routinely re-enter the scheduler (enqueueing new
//! batches, submitting new actions, toggling pause) while a tick is in
//! flight.
//!
//! ## Example
//!
//! ```
//! use cardtable::actions::{ActionBatchManager, ActionRunner, Batch, Completion};
//! use cardtable::core::TickContext;
//! use cardtable::effects::DelayAction;
//!
//! let runner = ActionRunner::new();
//! let batches = ActionBatchManager::new(runner.clone());
//!
//! batches.add_batch(Batch::single(DelayAction::new(0.2)));
//! batches.add_batch(Batch::single(DelayAction::new(0.1)));
//! batches.start_processing(Completion::none());
//!
//! let ctx = TickContext::new(0.1);
//! while batches.is_processing() {
//!     runner.tick(&ctx);
//! }
//! assert!(runner.is_idle());
//! ```

mod batch;
mod runner;
mod wait;

pub use batch::{ActionBatchManager, Batch};
pub use runner::ActionRunner;
pub use wait::WaitForAllAction;

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::TickContext;

/// A unit of schedulable work with a start/tick/completion lifecycle.
///
/// ## Contract
///
/// - `start` stores the completion hook, resets the completion flag, and
///   performs setup side effects synchronously. Setup that cannot proceed
///   (a missing pile, an exhausted deck) completes the action immediately,
///   firing the hook before `start` returns. That degraded completion is a
///   documented no-op outcome, not an error: it keeps a single failed
///   action from stalling everything queued behind it.
/// - `tick` is a no-op once complete. A tick that causes completion must
///   update internal state first, then fire the stored hook, then return.
/// - Ticking after completion has no side effects.
/// - `bypass_pausing` is fixed per instance; builders may reconfigure it
///   before submission, never mid-flight.
pub trait Action {
    /// Begin the action, storing `done` to fire on completion.
    fn start(&mut self, done: Completion);

    /// Advance one increment of progress.
    fn tick(&mut self, ctx: &TickContext);

    /// Has this action finished?
    fn is_complete(&self) -> bool;

    /// Should this action keep advancing while the runner is paused?
    fn bypass_pausing(&self) -> bool {
        false
    }

    /// Short label for diagnostics and debug overlays.
    fn name(&self) -> &'static str {
        "action"
    }
}

/// A shareable, interiorly-mutable action handle.
///
/// The runner's active set and a wait action's tracked set may both hold
/// the same instance; neither owns it exclusively.
pub type SharedAction = Rc<RefCell<dyn Action>>;

/// Wrap a concrete action for submission.
#[must_use]
pub fn shared<A: Action + 'static>(action: A) -> SharedAction {
    Rc::new(RefCell::new(action))
}

/// A single-shot completion hook.
///
/// Firing consumes the stored closure, so every path through the scheduler
/// gets at-most-once invocation for free. A spent (or empty) completion
/// fires as a no-op.
#[derive(Default)]
pub struct Completion {
    hook: Option<Box<dyn FnOnce()>>,
}

impl Completion {
    /// A completion that invokes `hook` the first time it fires.
    #[must_use]
    pub fn new(hook: impl FnOnce() + 'static) -> Self {
        Self {
            hook: Some(Box::new(hook)),
        }
    }

    /// A completion that does nothing.
    #[must_use]
    pub fn none() -> Self {
        Self { hook: None }
    }

    /// Fire the hook, consuming it. Subsequent fires are no-ops.
    pub fn fire(&mut self) {
        if let Some(hook) = self.hook.take() {
            hook();
        }
    }

    /// True if there is no hook left to fire.
    #[must_use]
    pub fn is_spent(&self) -> bool {
        self.hook.is_none()
    }
}

impl std::fmt::Debug for Completion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Completion")
            .field("spent", &self.is_spent())
            .finish()
    }
}
