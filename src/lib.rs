//! # cardtable
//!
//! A headless, tick-driven card table engine built around a cooperative
//! action scheduler.
//!
//! ## Design Principles
//!
//! 1. **The scheduler is the engine**: card rules, rendering and input are
//!    collaborators. Everything that happens over time on the table, from a
//!    drawn card travelling to a hand to a pause-menu slide, is an
//!    [`Action`] advanced once per external tick.
//!
//! 2. **Cooperative, not concurrent**: one logical thread, one tick call
//!    per cycle. "Parallel" actions are just actions sharing a tick.
//!
//! 3. **Time is explicit**: actions accumulate a scaled per-tick delta.
//!    Nothing reads a clock, so pause is lossless and replays are exact.
//!
//! ## Architecture
//!
//! - **Runner**: advances the active set once per tick, honoring the
//!   global pause flag (except for bypass-flagged actions).
//!
//! - **Batches**: FIFO groups drained one at a time, each gated by a
//!   wait-for-all action tracking the batch before it.
//!
//! - **Degraded completion**: a leaf action that cannot do its job (empty
//!   deck, missing pile) completes immediately as a no-op instead of
//!   erroring, so one dud never stalls the queue.
//!
//! ## Modules
//!
//! - `actions`: the scheduler (action contract, runner, waiting, batching)
//! - `core`: tick context, configuration, RNG
//! - `cards`: cards, the deck, piles, the table
//! - `effects`: concrete leaf actions (delay, callback, tween, draw, move,
//!   shuffle)
//! - `deal`: batch choreography for dealing and playing

pub mod actions;
pub mod cards;
pub mod core;
pub mod deal;
pub mod effects;

// Re-export commonly used types
pub use crate::actions::{
    shared, Action, ActionBatchManager, ActionRunner, Batch, Completion, SharedAction,
    WaitForAllAction,
};

pub use crate::core::{GameConfig, GameRng, TickContext};

pub use crate::cards::{
    Card, CardCollection, CardColor, CardPile, PileId, PileKind, SpreadKind, Table,
};

pub use crate::effects::{
    CallbackAction, DelayAction, DrawCardAction, Easing, MoveCardAction, ShuffleAction,
    TweenAction,
};

pub use crate::deal::Dealer;
