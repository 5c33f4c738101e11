//! Concrete leaf actions: delays, callbacks, tweens, card movement.
//!
//! Every effect here implements the [`Action`](crate::actions::Action)
//! contract and tracks its own progress by accumulating
//! [`scaled_delta`](crate::core::TickContext::scaled_delta), never by
//! reading a clock, so pausing the runner freezes an effect exactly where
//! it was.
//!
//! Effects that need table resources (a deck to draw from, a pile to land
//! on) validate them during `start` and take the degraded-completion path
//! when they are missing: complete immediately, log a diagnostic, touch
//! nothing. The queue keeps moving.

mod callback;
mod delay;
mod draw;
mod move_card;
mod shuffle;
mod tween;

pub use callback::CallbackAction;
pub use delay::DelayAction;
pub use draw::DrawCardAction;
pub use move_card::MoveCardAction;
pub use shuffle::ShuffleAction;
pub use tween::TweenAction;

use serde::{Deserialize, Serialize};

/// Progress curve for animated effects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    /// Constant speed.
    #[default]
    Linear,
    /// Fast start, gentle landing: `1 - (1 - t)^3`.
    EaseOutCubic,
}

impl Easing {
    /// Map raw progress `t` (clamped to 0..=1) through the curve.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::EaseOutCubic] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
    }

    #[test]
    fn test_easing_clamps() {
        assert_eq!(Easing::Linear.apply(-0.5), 0.0);
        assert_eq!(Easing::EaseOutCubic.apply(2.0), 1.0);
    }

    #[test]
    fn test_ease_out_cubic_leads_linear() {
        // ease-out covers more ground early
        assert!(Easing::EaseOutCubic.apply(0.3) > Easing::Linear.apply(0.3));
    }
}
