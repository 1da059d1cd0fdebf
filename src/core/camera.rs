//=========================================================================
// Camera Rig
//=========================================================================
//
// Orbit camera around the globe: drag to rotate, wheel/pinch to zoom,
// animated moves to a focus pose or back to the initial snapshot.
//
// Pose Model:
//   CameraPose { orientation, distance } on the Stage
//     orientation = yaw (world up) * pitch (local right)
//     distance    ∈ [min_zoom_distance, max_zoom_distance]
//     pitch       ∈ [min_vertical_angle, max_vertical_angle]
//
// Animated moves run as two Camera tweens (Rotation + Distance). Any
// manual press cancels them, so the user always wins.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::{EulerRot, Quat};
use log::{debug, info};

//=== Internal Dependencies ===============================================

use crate::core::config::CameraRigConfig;
use crate::core::error::SetupError;
use crate::core::globals::GlobalContext;
use crate::core::input::DragAxis;
use crate::core::stage::{CameraPose, Stage};
use crate::core::tween::{Easing, Property, TweenSpec, TweenTarget, TweenValue};

//=== FocusRequest ========================================================

/// Request to animate the camera to `pose`.
///
/// Processed once per tick; `None` fields fall back to the rig's focus
/// duration and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusRequest {
    pub pose: CameraPose,
    pub duration: Option<f32>,
    pub easing: Option<Easing>,
}

impl FocusRequest {
    pub fn new(pose: CameraPose) -> Self {
        Self { pose, duration: None, easing: None }
    }
}

//=== CameraRig ===========================================================

pub struct CameraRig {
    config: CameraRigConfig,
    available: bool,
    enabled: bool,
    initial: Option<CameraPose>,
    active_drag: Option<DragAxis>,
}

impl CameraRig {
    pub fn new(config: CameraRigConfig) -> Self {
        Self {
            config,
            available: true,
            enabled: true,
            initial: None,
            active_drag: None,
        }
    }

    //--- Setup ------------------------------------------------------------

    /// Checks that the stage has a camera. Without one the rig disables
    /// itself permanently.
    pub fn init(&mut self, stage: &Stage) -> Result<(), SetupError> {
        if stage.camera().is_none() {
            self.available = false;
            return Err(SetupError::MissingCamera);
        }
        self.available = true;
        Ok(())
    }

    /// Takes the reset snapshot once, after the first full tick.
    pub fn capture_initial(&mut self, stage: &Stage) {
        if self.initial.is_some() || !self.available {
            return;
        }
        if let Some(pose) = stage.camera() {
            info!("Captured initial camera pose (distance {:.1})", pose.distance);
            self.initial = Some(*pose);
        }
    }

    //--- Query API --------------------------------------------------------

    pub fn config(&self) -> &CameraRigConfig {
        &self.config
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn initial(&self) -> Option<CameraPose> {
        self.initial
    }

    pub fn active_drag(&self) -> Option<DragAxis> {
        self.active_drag
    }

    /// Current pitch in degrees, as clamped by the vertical range.
    pub fn vertical_angle(&self, stage: &Stage) -> Option<f32> {
        stage.camera().map(|pose| pitch_of(pose.orientation).to_degrees())
    }

    //--- Input ------------------------------------------------------------

    /// Enables or disables manual control. Any change drops the drag.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            debug!("Camera input {}", if enabled { "enabled" } else { "disabled" });
            self.enabled = enabled;
            self.active_drag = None;
        }
    }

    /// A pointer went down on the globe: stop any running camera move.
    pub fn on_press(&mut self, ctx: &mut GlobalContext) {
        if self.accepts_input() {
            ctx.tweener.cancel_target(TweenTarget::Camera);
        }
    }

    pub fn on_drag_start(&mut self, axis: DragAxis) {
        if self.accepts_input() {
            self.active_drag = Some(axis);
        }
    }

    pub fn on_drag_end(&mut self) {
        self.active_drag = None;
    }

    /// Rotates along `axis`, which must be the locked drag axis.
    pub fn rotate(&mut self, axis: DragAxis, delta: f32, dt: f32, stage: &mut Stage) {
        if !self.accepts_input() || self.active_drag != Some(axis) {
            return;
        }
        let step = (delta * self.config.rotation_speed * dt).to_radians();
        let (min, max) = (
            self.config.min_vertical_angle.to_radians(),
            self.config.max_vertical_angle.to_radians(),
        );
        let Some(camera) = stage.camera_mut() else { return };

        match axis {
            DragAxis::Horizontal => {
                camera.orientation = (Quat::from_rotation_y(-step) * camera.orientation).normalize();
            }
            DragAxis::Vertical => {
                let pitch = pitch_of(camera.orientation);
                let applied = (pitch + step).clamp(min, max) - pitch;
                camera.orientation = (camera.orientation * Quat::from_rotation_x(applied)).normalize();
            }
        }
    }

    /// Wheel zoom: positive `delta` moves closer.
    pub fn zoom(&mut self, delta: f32, dt: f32, stage: &mut Stage) {
        self.change_distance(-delta * self.config.zoom_speed * dt, stage);
    }

    /// Pinch zoom: positive `delta` (fingers spreading) moves closer.
    pub fn pinch(&mut self, delta: f32, stage: &mut Stage) {
        self.change_distance(-delta * self.config.zoom_speed / 200.0, stage);
    }

    //--- Animated Moves ---------------------------------------------------

    /// Animates to `orientation` / `distance`, replacing any running move.
    pub fn move_to_target(
        &mut self,
        orientation: Quat,
        distance: f32,
        duration: f32,
        easing: Easing,
        ctx: &mut GlobalContext,
    ) -> bool {
        if !self.available || self.initial.is_none() {
            debug!("Ignoring camera move: rig not ready");
            return false;
        }
        let Some(current) = ctx.stage.camera().copied() else { return false };

        ctx.tweener.cancel_target(TweenTarget::Camera);
        ctx.tweener.start(
            TweenSpec::new(
                TweenTarget::Camera,
                Property::Rotation,
                TweenValue::Rotation(current.orientation),
                TweenValue::Rotation(orientation.normalize()),
            )
            .with_duration(duration)
            .with_easing(easing),
        );
        ctx.tweener.start(
            TweenSpec::new(
                TweenTarget::Camera,
                Property::Distance,
                TweenValue::Scalar(current.distance),
                TweenValue::Scalar(self.config.clamp_distance(distance)),
            )
            .with_duration(duration)
            .with_easing(easing),
        );
        true
    }

    /// Animates back to the pose captured after the first tick.
    pub fn reset_to_initial(&mut self, ctx: &mut GlobalContext) -> bool {
        let Some(initial) = self.initial else {
            debug!("Ignoring camera reset: no initial pose yet");
            return false;
        };
        info!("Resetting camera");
        let (duration, easing) = (self.config.reset_duration, self.config.reset_easing);
        self.move_to_target(initial.orientation, initial.distance, duration, easing, ctx)
    }

    /// Drains `FocusRequest`s from the bus; the last one wins.
    pub fn process_focus_requests(&mut self, ctx: &mut GlobalContext) {
        let Some(request) = ctx.message_bus.drain::<FocusRequest>().pop() else { return };

        let duration = request.duration.unwrap_or(self.config.focus_duration);
        let easing = request.easing.unwrap_or(self.config.focus_easing);
        self.move_to_target(request.pose.orientation, request.pose.distance, duration, easing, ctx);
    }

    //--- Internal Helpers -------------------------------------------------

    fn accepts_input(&self) -> bool {
        self.available && self.enabled && self.initial.is_some()
    }

    fn change_distance(&mut self, change: f32, stage: &mut Stage) {
        if !self.accepts_input() || change == 0.0 {
            return;
        }
        if let Some(camera) = stage.camera_mut() {
            camera.distance = self.config.clamp_distance(camera.distance + change);
        }
    }
}

/// Pitch component of a yaw-then-pitch orientation, in radians.
fn pitch_of(orientation: Quat) -> f32 {
    let (_, pitch, _) = orientation.to_euler(EulerRot::YXZ);
    pitch
}

//=========================================================================
// Unit Tests
//=========================================================================
