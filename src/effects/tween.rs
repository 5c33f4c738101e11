//! Generic interpolation driver.

use crate::actions::{Action, Completion};
use crate::core::TickContext;

use super::Easing;

/// Drives an eased progress value from 0 to 1 over a fixed duration,
/// feeding it to a caller closure once per tick.
///
/// The closure owns the actual effect: moving a card sprite, rotating a
/// panel, fading a label. The tween only owns the timing, which is what
/// makes it pausable and time-scalable like every other action.
///
/// On the completing tick the closure is called with exactly 1.0, so
/// effects always land on their end state with no floating point residue.
pub struct TweenAction {
    duration: f32,
    easing: Easing,
    apply: Box<dyn FnMut(f32)>,
    elapsed: f32,
    bypass: bool,
    complete: bool,
    done: Completion,
}

impl TweenAction {
    /// Interpolate for `duration` seconds, feeding eased progress to
    /// `apply`.
    #[must_use]
    pub fn new(duration: f32, easing: Easing, apply: impl FnMut(f32) + 'static) -> Self {
        Self {
            duration,
            easing,
            apply: Box::new(apply),
            elapsed: 0.0,
            bypass: false,
            complete: false,
            done: Completion::none(),
        }
    }

    /// Let this tween keep animating while the runner is paused.
    ///
    /// Pause-menu slide-ins are tweens themselves; without this they would
    /// freeze the moment the pause they announce takes effect.
    #[must_use]
    pub fn with_bypass_pausing(mut self, bypass: bool) -> Self {
        self.bypass = bypass;
        self
    }

    /// Raw (un-eased) progress, 0..=1.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }
}

impl Action for TweenAction {
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
        let t = self.progress();
        (self.apply)(self.easing.apply(t));

        if t >= 1.0 {
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
        "tween"
    }
}
