//! Sequential batch processing.
//!
//! A [`Batch`] is an ordered group of actions meant to run concurrently
//! with each other (each advanced once per tick) but strictly after every
//! batch queued before it. The [`ActionBatchManager`] owns the FIFO queue
//! and drains it one batch at a time: submit the batch's actions, submit a
//! [`WaitForAllAction`](super::WaitForAllAction) tracking exactly those
//! actions, and dequeue the next batch only when the wait completes.
//!
//! Batches may be appended at any time, including from callbacks running
//! inside an active drain; enqueue order is always preserved.

use im::Vector;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

use super::{shared, Action, ActionRunner, Completion, SharedAction, WaitForAllAction};

/// An ordered group of actions with same-tick concurrent semantics.
///
/// ## Example
///
/// ```
/// use cardtable::actions::Batch;
/// use cardtable::effects::DelayAction;
///
/// let batch = Batch::new()
///     .with(DelayAction::new(0.5))
///     .with(DelayAction::new(0.2));
/// assert_eq!(batch.len(), 2);
/// ```
#[derive(Clone, Default)]
pub struct Batch {
    /// SmallVec keeps the common two-or-three-action batch off the heap.
    actions: SmallVec<[SharedAction; 4]>,
}

impl Batch {
    /// Create an empty batch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a batch holding a single action.
    #[must_use]
    pub fn single<A: Action + 'static>(action: A) -> Self {
        Self::new().with(action)
    }

    /// Add an action, builder-style.
    #[must_use]
    pub fn with<A: Action + 'static>(mut self, action: A) -> Self {
        self.actions.push(shared(action));
        self
    }

    /// Add an already-shared action.
    pub fn push(&mut self, action: SharedAction) {
        self.actions.push(action);
    }

    /// Number of actions in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Is the batch empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Iterate the batch's actions in order.
    pub fn iter(&self) -> impl Iterator<Item = &SharedAction> {
        self.actions.iter()
    }
}

impl FromIterator<SharedAction> for Batch {
    fn from_iter<I: IntoIterator<Item = SharedAction>>(iter: I) -> Self {
        Self {
            actions: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Batch {
    type Item = SharedAction;
    type IntoIter = smallvec::IntoIter<[SharedAction; 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.into_iter()
    }
}

#[derive(Default)]
struct BatchState {
    queue: Vector<Batch>,
    processing: bool,
    on_drained: Completion,
}

/// Drains a FIFO queue of batches through an [`ActionRunner`].
///
/// Cheap to clone; clones share the queue, which is how the wait action's
/// completion hook re-enters the drain from inside a tick.
///
/// ## State machine
///
/// Idle (queue may be non-empty) -> `start_processing` -> Processing ->
/// queue empties -> drained callback fires -> Idle.
///
/// `start_processing` while already processing does **not** start a second
/// drain; it only replaces the stored drained callback. Last writer wins:
/// a previously registered, never-fired callback is discarded. Callers
/// rely on that when they re-trigger draining repeatedly, so it is
/// preserved here on purpose.
#[derive(Clone)]
pub struct ActionBatchManager {
    state: Rc<RefCell<BatchState>>,
    runner: ActionRunner,
}

impl ActionBatchManager {
    /// Create a manager that drains into `runner`.
    #[must_use]
    pub fn new(runner: ActionRunner) -> Self {
        Self {
            state: Rc::new(RefCell::new(BatchState::default())),
            runner,
        }
    }

    /// The runner this manager submits to.
    #[must_use]
    pub fn runner(&self) -> &ActionRunner {
        &self.runner
    }

    /// Append a batch to the queue tail.
    ///
    /// Legal at any time, in either state; never starts a drain by itself.
    pub fn add_batch(&self, batch: Batch) {
        self.state.borrow_mut().queue.push_back(batch);
    }

    /// Begin (or continue) draining, registering `on_drained` to fire once
    /// the queue empties.
    ///
    /// Replaces any previously stored callback, fired or not.
    pub fn start_processing(&self, on_drained: Completion) {
        let idle = {
            let mut state = self.state.borrow_mut();
            state.on_drained = on_drained;
            !state.processing
        };

        if idle {
            self.process_next_batch();
        }
    }

    fn process_next_batch(&self) {
        let mut state = self.state.borrow_mut();

        let Some(batch) = state.queue.pop_front() else {
            state.processing = false;
            let mut done = std::mem::take(&mut state.on_drained);
            // Release the borrow first: the callback may immediately
            // enqueue and re-trigger processing.
            drop(state);
            done.fire();
            return;
        };

        state.processing = true;
        let remaining = state.queue.len();
        drop(state);

        debug!(actions = batch.len(), remaining, "draining next batch");

        let tracked: Vec<SharedAction> = batch.iter().cloned().collect();
        self.runner.submit(batch);

        let chain = self.clone();
        self.runner.submit_with(
            shared(WaitForAllAction::new(tracked)),
            Completion::new(move || chain.process_next_batch()),
        );
    }

    /// Is a drain currently in progress?
    #[must_use]
    pub fn is_processing(&self) -> bool {
        self.state.borrow().processing
    }

    /// Snapshot of the batches still waiting, for diagnostics.
    #[must_use]
    pub fn pending_batches(&self) -> Vector<Batch> {
        self.state.borrow().queue.clone()
    }

    /// Number of batches still waiting.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.state.borrow().queue.len()
    }
}
