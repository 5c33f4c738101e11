//! Core engine types: tick context, configuration, RNG.
//!
//! This module contains the fundamental building blocks that are
//! table-agnostic. Tables configure these via `GameConfig` rather than
//! modifying the core.

pub mod config;
pub mod context;
pub mod rng;

pub use config::GameConfig;
pub use context::TickContext;
pub use rng::GameRng;
