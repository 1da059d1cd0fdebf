//=========================================================================
// Easing Curves
//=========================================================================
//
// Maps normalized time `t ∈ [0, 1]` to interpolation progress.
//
// All curves satisfy `apply(0) == 0` and `apply(1) == 1` exactly, so a
// finished tween always lands on its end value.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::f32::consts::PI;

//=== Easing ==============================================================

/// Interpolation curve used by tweens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Easing {
    #[default]
    Linear,
    InQuad,
    OutExpo,
    InOutSine,
    OutBack,
}

impl Easing {
    /// Evaluates the curve at `t` (clamped to `[0, 1]`).
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Easing::Linear => t,
            Easing::InQuad => t * t,
            Easing::OutExpo => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2f32.powf(-10.0 * t)
                }
            }
            Easing::InOutSine => -((PI * t).cos() - 1.0) / 2.0,
            Easing::OutBack => {
                const C1: f32 = 1.70158;
                const C3: f32 = C1 + 1.0;
                let u = t - 1.0;
                1.0 + C3 * u * u * u + C1 * u * u
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
