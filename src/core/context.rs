//! Per-tick time context.
//!
//! The driver (whatever owns the frame loop) builds one `TickContext` per
//! cycle and hands it to every ticked action. Actions accumulate
//! `scaled_delta` themselves; the engine never reads a wall clock, so a
//! paused action's progress is frozen exactly where it was and resume is
//! deterministic.
//!
//! The time scale lives here, not in a global: a driver that wants a 5x
//! fast-forward passes `with_time_scale(5.0)` instead of every action
//! consulting shared mutable state.

use serde::{Deserialize, Serialize};

/// Time context for a single tick.
///
/// ## Example
///
/// ```
/// use cardtable::core::TickContext;
///
/// // A 60 fps driver running at double speed
/// let ctx = TickContext::new(1.0 / 60.0).with_time_scale(2.0);
/// assert!((ctx.scaled_delta() - 2.0 / 60.0).abs() < 1e-6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TickContext {
    /// Real elapsed seconds since the previous tick.
    pub delta: f32,

    /// Speed multiplier applied to `delta`. 1.0 = real time.
    pub time_scale: f32,
}

impl TickContext {
    /// Create a context for a tick of `delta` seconds at normal speed.
    #[must_use]
    pub fn new(delta: f32) -> Self {
        Self {
            delta,
            time_scale: 1.0,
        }
    }

    /// Set the speed multiplier.
    #[must_use]
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    /// The delta actions should accumulate: `delta * time_scale`.
    #[must_use]
    pub fn scaled_delta(&self) -> f32 {
        self.delta * self.time_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_time_scale() {
        let ctx = TickContext::new(0.25);
        assert_eq!(ctx.time_scale, 1.0);
        assert_eq!(ctx.scaled_delta(), 0.25);
    }

    #[test]
    fn test_time_scale_applies() {
        let ctx = TickContext::new(0.1).with_time_scale(5.0);
        assert!((ctx.scaled_delta() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_serialization() {
        let ctx = TickContext::new(0.016).with_time_scale(2.0);
        let json = serde_json::to_string(&ctx).unwrap();
        let deserialized: TickContext = serde_json::from_str(&json).unwrap();
        assert_eq!(ctx, deserialized);
    }
}
