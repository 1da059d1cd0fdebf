//=========================================================================
// Detail Rotator
//=========================================================================
//
// Lets the user turn the open detail object with drag gestures.
//
// Horizontal drags spin it around its local up axis (yaw), vertical
// drags tilt it around its local right axis (pitch). Each axis can be
// clamped independently. The accumulated angles are applied on top of
// the rotation the object had when the view finished opening, so a
// reset simply animates back to that rotation.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::{EulerRot, Quat};
use log::trace;

//=== Internal Dependencies ===============================================

use crate::core::config::DetailConfig;
use crate::core::input::DragAxis;
use crate::core::stage::{ObjectId, Stage};
use crate::core::tween::{Property, TweenSpec, TweenTarget, TweenValue, Tweener};

//=== AxisLimit ===========================================================

/// Optional clamp for one rotation axis, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisLimit {
    pub enabled: bool,
    pub min: f32,
    pub max: f32,
}

impl AxisLimit {
    /// No clamping.
    pub const FREE: AxisLimit = AxisLimit { enabled: false, min: -180.0, max: 180.0 };

    /// Clamp to `[min, max]` degrees.
    pub fn new(min: f32, max: f32) -> Self {
        Self { enabled: true, min: min.min(max), max: max.max(min) }
    }

    pub fn apply(&self, degrees: f32) -> f32 {
        if self.enabled {
            degrees.clamp(self.min, self.max)
        } else {
            degrees
        }
    }
}

impl Default for AxisLimit {
    fn default() -> Self {
        Self::FREE
    }
}

//=== RotationLimits ======================================================

/// Per-axis clamps for a detail object.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationLimits {
    /// Tilt around the local right axis (vertical drags).
    pub pitch: AxisLimit,

    /// Spin around the local up axis (horizontal drags).
    pub yaw: AxisLimit,
}

impl RotationLimits {
    pub fn with_pitch(mut self, limit: AxisLimit) -> Self {
        self.pitch = limit;
        self
    }

    pub fn with_yaw(mut self, limit: AxisLimit) -> Self {
        self.yaw = limit;
        self
    }
}

//=== DetailRotator =======================================================

#[derive(Debug, Clone, Copy)]
struct Target {
    object: ObjectId,
    initial: Quat,
    limits: RotationLimits,
}

/// Drag-driven rotation of the open detail object.
#[derive(Debug, Default)]
pub struct DetailRotator {
    target: Option<Target>,
    pitch: f32,
    yaw: f32,
}

impl DetailRotator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts controlling `object`, using `initial` as the rest rotation.
    pub fn begin(&mut self, object: ObjectId, initial: Quat, limits: RotationLimits) {
        self.target = Some(Target { object, initial, limits });
        self.pitch = 0.0;
        self.yaw = 0.0;
    }

    /// Stops controlling the object.
    pub fn end(&mut self) {
        self.target = None;
    }

    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    /// Current `(pitch, yaw)` offsets in degrees.
    pub fn angles(&self) -> (f32, f32) {
        (self.pitch, self.yaw)
    }

    /// Applies one drag step along `axis`.
    pub fn apply_drag(
        &mut self,
        axis: DragAxis,
        delta: f32,
        dt: f32,
        config: &DetailConfig,
        stage: &mut Stage,
        tweener: &mut Tweener,
    ) {
        let Some(target) = self.target else { return };

        let step = delta * config.rotation_speed * dt;
        match axis {
            DragAxis::Horizontal => self.yaw = target.limits.yaw.apply(self.yaw - step),
            DragAxis::Vertical => self.pitch = target.limits.pitch.apply(self.pitch + step),
        }

        // Manual rotation overrides a running reset
        tweener.cancel_target(TweenTarget::Object(target.object));
        stage.set_rotation(target.object, self.rotation_for(&target));
        trace!("Detail rotation: pitch {:.1}°, yaw {:.1}°", self.pitch, self.yaw);
    }

    /// Animates the object back to its rest rotation.
    pub fn reset(&mut self, config: &DetailConfig, stage: &Stage, tweener: &mut Tweener) {
        let Some(target) = self.target else { return };

        self.pitch = 0.0;
        self.yaw = 0.0;

        let current = stage.rotation(target.object).unwrap_or(target.initial);
        tweener.start(
            TweenSpec::new(
                TweenTarget::Object(target.object),
                Property::Rotation,
                TweenValue::Rotation(current),
                TweenValue::Rotation(target.initial),
            )
            .with_duration(config.reset_rotation_duration)
            .with_easing(config.reset_rotation_easing),
        );
    }

    fn rotation_for(&self, target: &Target) -> Quat {
        target.initial
            * Quat::from_euler(EulerRot::YXZ, self.yaw.to_radians(), self.pitch.to_radians(), 0.0)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::stage::StageObject;

    fn setup(limits: RotationLimits) -> (DetailRotator, Stage, Tweener, ObjectId) {
        let mut stage = Stage::new();
        let object = stage.spawn(StageObject::new("volcano"));
        let mut rotator = DetailRotator::new();
        rotator.begin(object, Quat::IDENTITY, limits);
        (rotator, stage, Tweener::new(), object)
    }

    #[test]
    fn axis_limit_clamps_only_when_enabled() {
        assert_eq!(AxisLimit::FREE.apply(500.0), 500.0);
        assert_eq!(AxisLimit::new(-30.0, 30.0).apply(45.0), 30.0);
        assert_eq!(AxisLimit::new(30.0, -30.0).apply(-45.0), -30.0);
    }

    #[test]
    fn vertical_drag_respects_pitch_limit() {
        let limits = RotationLimits::default().with_pitch(AxisLimit::new(-20.0, 20.0));
        let (mut rotator, mut stage, mut tweener, object) = setup(limits);
        let config = DetailConfig::default();

        // 100 px * 20 °/px·s * 0.1 s = 200° requested
        rotator.apply_drag(DragAxis::Vertical, 100.0, 0.1, &config, &mut stage, &mut tweener);

        assert_eq!(rotator.angles(), (20.0, 0.0));
        let rotation = stage.rotation(object).unwrap_or(Quat::IDENTITY);
        assert!(rotation.abs_diff_eq(Quat::from_rotation_x(20f32.to_radians()), 1e-5));
    }

    #[test]
    fn horizontal_drag_is_free_by_default() {
        let (mut rotator, mut stage, mut tweener, _) = setup(RotationLimits::default());
        let config = DetailConfig::default();

        rotator.apply_drag(DragAxis::Horizontal, 10.0, 1.0, &config, &mut stage, &mut tweener);
        assert_eq!(rotator.angles(), (0.0, -200.0));
    }

    #[test]
    fn reset_tweens_back_to_initial() {
        let (mut rotator, mut stage, mut tweener, object) = setup(RotationLimits::default());
        let config = DetailConfig::default();
        rotator.apply_drag(DragAxis::Horizontal, 5.0, 0.1, &config, &mut stage, &mut tweener);

        rotator.reset(&config, &stage, &mut tweener);
        assert_eq!(rotator.angles(), (0.0, 0.0));

        tweener.advance(config.reset_rotation_duration, &mut stage);
        let rotation = stage.rotation(object).unwrap_or(Quat::from_rotation_z(1.0));
        assert!(rotation.abs_diff_eq(Quat::IDENTITY, 1e-5));
    }

    #[test]
    fn inactive_rotator_ignores_drags() {
        let (mut rotator, mut stage, mut tweener, object) = setup(RotationLimits::default());
        rotator.end();
        rotator.apply_drag(
            DragAxis::Vertical,
            50.0,
            0.1,
            &DetailConfig::default(),
            &mut stage,
            &mut tweener,
        );
        assert_eq!(stage.rotation(object), Some(Quat::IDENTITY));
    }
}
