//! The per-tick action runner.
//!
//! The runner is the single authority that advances active actions. It
//! holds the active set and the global pause flag; everything else
//! (ordering across batches, completion chaining) is layered on top by the
//! batch manager.
//!
//! ## Reentrancy
//!
//! A ticking action's completion hook may synchronously submit new
//! actions, enqueue batches, or flip the pause flag. The runner is built
//! for that: each tick iterates a snapshot of the active set taken at tick
//! start (an O(1) clone thanks to `im::Vector`) and compacts completed
//! entries out at end of tick, so no mid-tick mutation can skip or
//! double-advance anything. Nested `tick` calls are refused with a
//! diagnostic rather than risking double advancement.

use im::Vector;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, warn};

use crate::core::TickContext;

use super::{Completion, SharedAction};

#[derive(Default)]
struct RunnerState {
    active: Vector<SharedAction>,
    paused: bool,
    ticking: bool,
}

/// Advances all active actions once per external tick.
///
/// Cheap to clone: clones share the same active set and pause flag, which
/// is how completion hooks reach the runner from inside a tick.
///
/// ## Pause policy
///
/// While paused, actions that do not bypass pausing are skipped entirely:
/// no progress, no removal. Bypass actions keep advancing, which is what
/// lets pause-menu animation drive through the very scheduler it paused.
#[derive(Clone, Default)]
pub struct ActionRunner {
    state: Rc<RefCell<RunnerState>>,
}

impl ActionRunner {
    /// Create a runner with an empty active set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start and track a group of actions, in the order given.
    ///
    /// Each action's `start` runs synchronously, now, not on the next
    /// tick. An action that completes during its own `start` (the degraded
    /// path) is never admitted to the active set.
    pub fn submit<I>(&self, actions: I)
    where
        I: IntoIterator<Item = SharedAction>,
    {
        for action in actions {
            self.admit(action, Completion::none());
        }
    }

    /// Start and track a single action with a caller completion hook.
    pub fn submit_with(&self, action: SharedAction, done: Completion) {
        self.admit(action, done);
    }

    fn admit(&self, action: SharedAction, done: Completion) {
        action.borrow_mut().start(done);

        if action.borrow().is_complete() {
            debug!(
                action = action.borrow().name(),
                "completed during start, not tracking"
            );
            return;
        }

        self.state.borrow_mut().active.push_back(action);
    }

    /// Advance every active action by one increment.
    ///
    /// Actions are visited in submission order over a snapshot taken at
    /// tick start; actions submitted mid-tick first run on the next tick.
    /// If an entry is found mutably borrowed mid-traversal (a sign the
    /// tick was re-entered), the rest of the traversal is abandoned with a
    /// diagnostic and the unvisited actions simply run next cycle.
    pub fn tick(&self, ctx: &TickContext) {
        let (snapshot, paused) = {
            let mut state = self.state.borrow_mut();
            if state.ticking {
                warn!("tick re-entered, ignoring nested call");
                return;
            }
            state.ticking = true;
            (state.active.clone(), state.paused)
        };

        for action in &snapshot {
            let Ok(mut action) = action.try_borrow_mut() else {
                warn!("active action still borrowed mid-tick, deferring the rest of this tick");
                break;
            };

            if paused && !action.bypass_pausing() {
                continue;
            }

            action.tick(ctx);
        }

        let mut state = self.state.borrow_mut();
        state.ticking = false;
        state
            .active
            .retain(|action| action.try_borrow().map_or(true, |a| !a.is_complete()));
    }

    /// Set the global pause flag.
    pub fn set_paused(&self, paused: bool) {
        self.state.borrow_mut().paused = paused;
    }

    /// Flip the global pause flag, returning the new value.
    pub fn toggle_paused(&self) -> bool {
        let mut state = self.state.borrow_mut();
        state.paused = !state.paused;
        state.paused
    }

    /// Is the runner currently paused?
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.state.borrow().paused
    }

    /// Snapshot of the active set, for diagnostics and debug overlays.
    ///
    /// The snapshot is O(1) to take and shares structure with the live
    /// set; mutating the runner through it is not possible.
    #[must_use]
    pub fn active(&self) -> Vector<SharedAction> {
        self.state.borrow().active.clone()
    }

    /// Number of actions currently active.
    #[must_use]
    pub fn active_len(&self) -> usize {
        self.state.borrow().active.len()
    }

    /// True when nothing is active.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.state.borrow().active.is_empty()
    }
}
