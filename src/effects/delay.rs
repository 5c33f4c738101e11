//! Pure waiting.

use crate::actions::{Action, Completion};
use crate::core::TickContext;

/// Completes after a fixed amount of scaled time has accumulated.
pub struct DelayAction {
    delay: f32,
    elapsed: f32,
    bypass: bool,
    complete: bool,
    done: Completion,
}

impl DelayAction {
    /// Wait for `delay` seconds of scaled time.
    #[must_use]
    pub fn new(delay: f32) -> Self {
        Self {
            delay,
            elapsed: 0.0,
            bypass: false,
            complete: false,
            done: Completion::none(),
        }
    }

    /// Let this delay keep counting while the runner is paused.
    #[must_use]
    pub fn with_bypass_pausing(mut self, bypass: bool) -> Self {
        self.bypass = bypass;
        self
    }

    /// Fraction of the delay that has elapsed, 0..=1.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.delay <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.delay).clamp(0.0, 1.0)
        }
    }
}

impl Action for DelayAction {
    fn start(&mut self, done: Completion) {
        self.done = done;
        self.elapsed = 0.0;
        self.complete = false;
    }

    fn tick(&mut self, ctx: &TickContext) {
        if self.complete {
            return;
        }

        self.elapsed += ctx.scaled_delta();

        if self.elapsed >= self.delay {
            self.complete = true;
            self.done.fire();
        }
    }

    fn is_complete(&self) -> bool {
        self.complete
    }

    fn bypass_pausing(&self) -> bool {
        self.bypass
    }

    fn name(&self) -> &'static str {
        "delay"
    }
}
