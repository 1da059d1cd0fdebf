//=========================================================================
// Tween Driver
//=========================================================================
//
// Minimal polled interpolation tasks for object scale/rotation and the
// camera pose.
//
// Architecture:
//   start(TweenSpec) → TweenHandle
//        ↓
//   advance(dt, &mut impl Animatable) → writes values → Vec<TweenHandle>
//                                                         (completed)
//
// Rules:
// - One tween per (target, property): starting a new one replaces the
//   running one, which never completes.
// - `cancel_target` removes every tween on a target; cancelled tweens
//   never appear in a completion list.
// - The completing step writes the exact end value.
//
//=========================================================================

//=== Module Declarations =================================================

mod easing;

//=== Public API ==========================================================

pub use easing::Easing;

//=== External Dependencies ===============================================

use glam::{Quat, Vec3};
use log::trace;

//=== Internal Dependencies ===============================================

use crate::core::stage::ObjectId;

//=== Tween Addressing ====================================================

/// What a tween animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TweenTarget {
    Object(ObjectId),
    Camera,
}

/// Which property of the target is animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Scale,
    Rotation,
    Distance,
}

/// Animated value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenValue {
    Scalar(f32),
    Vector(Vec3),
    Rotation(Quat),
}

impl TweenValue {
    /// Interpolates towards `to` (slerp for rotations).
    ///
    /// Mismatched kinds jump straight to `to`.
    pub fn interpolate(self, to: TweenValue, t: f32) -> TweenValue {
        match (self, to) {
            (TweenValue::Scalar(a), TweenValue::Scalar(b)) => TweenValue::Scalar(a + (b - a) * t),
            (TweenValue::Vector(a), TweenValue::Vector(b)) => TweenValue::Vector(a.lerp(b, t)),
            (TweenValue::Rotation(a), TweenValue::Rotation(b)) => {
                TweenValue::Rotation(a.slerp(b, t))
            }
            (_, to) => to,
        }
    }
}

//=== Animatable ==========================================================

/// Storage a tween reads its start value from and writes into.
pub trait Animatable {
    fn read(&self, target: TweenTarget, property: Property) -> Option<TweenValue>;
    fn write(&mut self, target: TweenTarget, property: Property, value: TweenValue);
}

//=== TweenSpec ===========================================================

/// Description of a tween to start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSpec {
    pub target: TweenTarget,
    pub property: Property,
    pub from: TweenValue,
    pub to: TweenValue,
    pub duration: f32,
    pub easing: Easing,
}

impl TweenSpec {
    /// Linear, zero-duration tween; adjust with the `with_*` methods.
    pub fn new(target: TweenTarget, property: Property, from: TweenValue, to: TweenValue) -> Self {
        Self {
            target,
            property,
            from,
            to,
            duration: 0.0,
            easing: Easing::Linear,
        }
    }

    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration.max(0.0);
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

//=== TweenHandle =========================================================

/// Identifies one started tween; reported back when it completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TweenHandle(u64);

//=== Tweener =============================================================

struct Tween {
    handle: TweenHandle,
    spec: TweenSpec,
    elapsed: f32,
}

/// Owns and advances all running tweens.
#[derive(Default)]
pub struct Tweener {
    tweens: Vec<Tween>,
    next_id: u64,
}

impl Tweener {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Control ----------------------------------------------------------

    /// Starts a tween, replacing any running tween on the same
    /// target and property.
    pub fn start(&mut self, spec: TweenSpec) -> TweenHandle {
        self.tweens
            .retain(|t| !(t.spec.target == spec.target && t.spec.property == spec.property));

        let handle = TweenHandle(self.next_id);
        self.next_id += 1;

        trace!("Tween {:?} started: {:?}.{:?}", handle, spec.target, spec.property);
        self.tweens.push(Tween { handle, spec, elapsed: 0.0 });
        handle
    }

    /// Cancels every tween on `target`. Returns how many were removed.
    pub fn cancel_target(&mut self, target: TweenTarget) -> usize {
        let before = self.tweens.len();
        self.tweens.retain(|t| t.spec.target != target);
        before - self.tweens.len()
    }

    /// Cancels a single tween. Returns `false` if it was not running.
    pub fn cancel(&mut self, handle: TweenHandle) -> bool {
        let before = self.tweens.len();
        self.tweens.retain(|t| t.handle != handle);
        before != self.tweens.len()
    }

    //--- Update -----------------------------------------------------------

    /// Advances all tweens by `dt` seconds and writes their values.
    ///
    /// Returns the handles of tweens that finished during this step, in
    /// start order.
    pub fn advance(&mut self, dt: f32, world: &mut impl Animatable) -> Vec<TweenHandle> {
        let mut completed = Vec::new();

        for tween in &mut self.tweens {
            tween.elapsed += dt;

            let spec = &tween.spec;
            let t = if spec.duration <= 0.0 {
                1.0
            } else {
                (tween.elapsed / spec.duration).min(1.0)
            };

            if t >= 1.0 {
                world.write(spec.target, spec.property, spec.to);
                completed.push(tween.handle);
            } else {
                let value = spec.from.interpolate(spec.to, spec.easing.apply(t));
                world.write(spec.target, spec.property, value);
            }
        }

        if !completed.is_empty() {
            self.tweens.retain(|t| !completed.contains(&t.handle));
        }

        completed
    }

    //--- Query API --------------------------------------------------------

    pub fn is_running(&self, handle: TweenHandle) -> bool {
        self.tweens.iter().any(|t| t.handle == handle)
    }

    pub fn is_animating(&self, target: TweenTarget) -> bool {
        self.tweens.iter().any(|t| t.spec.target == target)
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
