//=========================================================================
// Interaction Configuration
//=========================================================================
//
// Tunable parameters for gestures, the camera rig, detail views and the
// selection highlight.
//
// Architecture:
//   InteractionConfig
//     ├─ GestureConfig     (double-click gate, axis lock)
//     ├─ CameraRigConfig   (speeds, zoom range, tilt clamp, transitions)
//     ├─ DetailConfig      (open/close transition, detail rotator)
//     └─ HighlightConfig   (pulse rate)
//
// Every struct carries its defaults in `Default`, exposes `with_*`
// setters for fluent construction, and reports out-of-range values from
// `validate()` instead of panicking.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::error::SetupError;
use crate::core::tween::Easing;

//--- Helpers -------------------------------------------------------------

fn require(condition: bool, message: &str) -> Result<(), SetupError> {
    if condition {
        Ok(())
    } else {
        Err(SetupError::InvalidConfig(message.to_string()))
    }
}

//=== GestureConfig =======================================================

/// Pointer gesture disambiguation parameters.
///
/// # Default Values
///
/// - **require_double_click**: true
/// - **double_click_threshold**: 0.30 s
/// - **double_click_max_move_px**: 20 px
/// - **axis_lock_threshold**: 5 px
#[derive(Debug, Clone, PartialEq)]
pub struct GestureConfig {
    /// When false, every press confirms a selection immediately.
    pub require_double_click: bool,

    /// Maximum time between two presses forming a double click (seconds).
    pub double_click_threshold: f32,

    /// Maximum distance between two presses forming a double click (pixels).
    pub double_click_max_move_px: f32,

    /// Cumulative movement after which a drag locks onto an axis (pixels).
    pub axis_lock_threshold: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            require_double_click: true,
            double_click_threshold: 0.30,
            double_click_max_move_px: 20.0,
            axis_lock_threshold: 5.0,
        }
    }
}

impl GestureConfig {
    pub fn with_require_double_click(mut self, required: bool) -> Self {
        self.require_double_click = required;
        self
    }

    pub fn with_double_click_threshold(mut self, seconds: f32) -> Self {
        self.double_click_threshold = seconds;
        self
    }

    pub fn with_double_click_max_move(mut self, pixels: f32) -> Self {
        self.double_click_max_move_px = pixels;
        self
    }

    pub fn with_axis_lock_threshold(mut self, pixels: f32) -> Self {
        self.axis_lock_threshold = pixels;
        self
    }

    /// Checks that all thresholds are positive.
    pub fn validate(&self) -> Result<(), SetupError> {
        require(self.double_click_threshold > 0.0, "double_click_threshold must be positive")?;
        require(self.double_click_max_move_px > 0.0, "double_click_max_move_px must be positive")?;
        require(self.axis_lock_threshold > 0.0, "axis_lock_threshold must be positive")
    }
}

//=== CameraRigConfig =====================================================

/// Orbit camera parameters.
///
/// Angles are in degrees, distances in world units, durations in seconds.
///
/// # Default Values
///
/// - **rotation_speed**: 20.0
/// - **zoom_speed**: 5.0
/// - **zoom range**: 5.0 – 50.0
/// - **vertical range**: -85° – 85°
/// - **reset**: 0.5 s, `OutExpo`
/// - **focus**: 1.2 s, `InOutSine`
#[derive(Debug, Clone, PartialEq)]
pub struct CameraRigConfig {
    pub rotation_speed: f32,
    pub zoom_speed: f32,
    pub min_zoom_distance: f32,
    pub max_zoom_distance: f32,
    pub min_vertical_angle: f32,
    pub max_vertical_angle: f32,
    pub reset_duration: f32,
    pub reset_easing: Easing,
    pub focus_duration: f32,
    pub focus_easing: Easing,
}

impl Default for CameraRigConfig {
    fn default() -> Self {
        Self {
            rotation_speed: 20.0,
            zoom_speed: 5.0,
            min_zoom_distance: 5.0,
            max_zoom_distance: 50.0,
            min_vertical_angle: -85.0,
            max_vertical_angle: 85.0,
            reset_duration: 0.5,
            reset_easing: Easing::OutExpo,
            focus_duration: 1.2,
            focus_easing: Easing::InOutSine,
        }
    }
}

impl CameraRigConfig {
    pub fn with_rotation_speed(mut self, speed: f32) -> Self {
        self.rotation_speed = speed;
        self
    }

    pub fn with_zoom_speed(mut self, speed: f32) -> Self {
        self.zoom_speed = speed;
        self
    }

    pub fn with_zoom_range(mut self, min: f32, max: f32) -> Self {
        self.min_zoom_distance = min;
        self.max_zoom_distance = max;
        self
    }

    pub fn with_vertical_range(mut self, min_degrees: f32, max_degrees: f32) -> Self {
        self.min_vertical_angle = min_degrees;
        self.max_vertical_angle = max_degrees;
        self
    }

    pub fn with_reset(mut self, duration: f32, easing: Easing) -> Self {
        self.reset_duration = duration;
        self.reset_easing = easing;
        self
    }

    pub fn with_focus(mut self, duration: f32, easing: Easing) -> Self {
        self.focus_duration = duration;
        self.focus_easing = easing;
        self
    }

    /// Clamps a distance into the configured zoom range.
    pub fn clamp_distance(&self, distance: f32) -> f32 {
        distance.clamp(self.min_zoom_distance, self.max_zoom_distance)
    }

    /// Checks speeds, ranges and durations.
    pub fn validate(&self) -> Result<(), SetupError> {
        require(self.rotation_speed > 0.0, "rotation_speed must be positive")?;
        require(self.zoom_speed > 0.0, "zoom_speed must be positive")?;
        require(self.min_zoom_distance > 0.0, "min_zoom_distance must be positive")?;
        require(
            self.min_zoom_distance <= self.max_zoom_distance,
            "min_zoom_distance must not exceed max_zoom_distance",
        )?;
        require(
            self.min_vertical_angle <= self.max_vertical_angle,
            "min_vertical_angle must not exceed max_vertical_angle",
        )?;
        require(
            self.min_vertical_angle > -90.0 && self.max_vertical_angle < 90.0,
            "vertical angles must stay inside (-90, 90)",
        )?;
        require(self.reset_duration >= 0.0, "reset_duration must not be negative")?;
        require(self.focus_duration >= 0.0, "focus_duration must not be negative")
    }
}

//=== DetailConfig ========================================================

/// Detail view transition and rotator parameters.
///
/// # Default Values
///
/// - **transition**: 0.5 s, `OutExpo`
/// - **rotation_speed**: 20.0 degrees per pixel-second
/// - **rotation reset**: 0.5 s, `OutExpo`
#[derive(Debug, Clone, PartialEq)]
pub struct DetailConfig {
    pub transition_duration: f32,
    pub transition_easing: Easing,
    pub rotation_speed: f32,
    pub reset_rotation_duration: f32,
    pub reset_rotation_easing: Easing,
}

impl Default for DetailConfig {
    fn default() -> Self {
        Self {
            transition_duration: 0.5,
            transition_easing: Easing::OutExpo,
            rotation_speed: 20.0,
            reset_rotation_duration: 0.5,
            reset_rotation_easing: Easing::OutExpo,
        }
    }
}

impl DetailConfig {
    pub fn with_transition(mut self, duration: f32, easing: Easing) -> Self {
        self.transition_duration = duration;
        self.transition_easing = easing;
        self
    }

    pub fn with_rotation_speed(mut self, speed: f32) -> Self {
        self.rotation_speed = speed;
        self
    }

    pub fn with_reset_rotation(mut self, duration: f32, easing: Easing) -> Self {
        self.reset_rotation_duration = duration;
        self.reset_rotation_easing = easing;
        self
    }

    pub fn validate(&self) -> Result<(), SetupError> {
        require(self.transition_duration >= 0.0, "transition_duration must not be negative")?;
        require(self.rotation_speed > 0.0, "detail rotation_speed must be positive")?;
        require(
            self.reset_rotation_duration >= 0.0,
            "reset_rotation_duration must not be negative",
        )
    }
}

//=== HighlightConfig =====================================================

/// Selection highlight pulse.
///
/// Default: 0.5 pulses per second.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightConfig {
    pub pulse_hz: f32,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self { pulse_hz: 0.5 }
    }
}

impl HighlightConfig {
    pub fn with_pulse_hz(mut self, hz: f32) -> Self {
        self.pulse_hz = hz;
        self
    }

    pub fn validate(&self) -> Result<(), SetupError> {
        require(self.pulse_hz >= 0.0, "pulse_hz must not be negative")
    }
}

//=== InteractionConfig ===================================================

/// Aggregate configuration handed to `GlobalSystems`.
///
/// Also carries the welcome text shown when nothing is selected.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionConfig {
    pub gesture: GestureConfig,
    pub camera: CameraRigConfig,
    pub detail: DetailConfig,
    pub highlight: HighlightConfig,
    pub default_title: String,
    pub default_body: String,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            gesture: GestureConfig::default(),
            camera: CameraRigConfig::default(),
            detail: DetailConfig::default(),
            highlight: HighlightConfig::default(),
            default_title: "Welcome".to_string(),
            default_body: "Double-click a feature on the globe to learn more.".to_string(),
        }
    }
}

impl InteractionConfig {
    pub fn with_gesture(mut self, gesture: GestureConfig) -> Self {
        self.gesture = gesture;
        self
    }

    pub fn with_camera(mut self, camera: CameraRigConfig) -> Self {
        self.camera = camera;
        self
    }

    pub fn with_detail(mut self, detail: DetailConfig) -> Self {
        self.detail = detail;
        self
    }

    pub fn with_highlight(mut self, highlight: HighlightConfig) -> Self {
        self.highlight = highlight;
        self
    }

    pub fn with_default_text(mut self, title: impl Into<String>, body: impl Into<String>) -> Self {
        self.default_title = title.into();
        self.default_body = body.into();
        self
    }

    /// Validates every nested configuration, reporting the first problem.
    pub fn validate(&self) -> Result<(), SetupError> {
        self.gesture.validate()?;
        self.camera.validate()?;
        self.detail.validate()?;
        self.highlight.validate()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
