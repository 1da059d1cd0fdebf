//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use globe_engine::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine runtime
pub use crate::engine::{Engine, EngineBuilder};

// Global systems and context
pub use crate::core::globals::{GlobalContext, GlobalSystems};

// Configuration and errors
pub use crate::core::config::{
    CameraRigConfig, DetailConfig, GestureConfig, HighlightConfig, InteractionConfig,
};
pub use crate::core::error::SetupError;

// World model
pub use crate::core::feature::{DetailBinding, Feature, FeatureId};
pub use crate::core::stage::{Backdrop, CameraPose, Color, ObjectId, Stage, StageObject};
pub use crate::core::display::{DisplaySurface, InfoPanel};
pub use crate::core::hit_test::{Hit, HitTester, Rect, RegionHitTester};

// Input
pub use crate::core::input::{InputEvent, KeyCode, PointerId, UiCommand};

// Detail views and overlays
pub use crate::core::detail::{AxisLimit, DetailPhase, DetailPhaseChanged, DetailSceneSetup, RotationLimits};
pub use crate::core::overlay::{OverlayChanged, OverlayKey, OverlayMode, OverlaySwitch};
pub use crate::core::selection::SelectionChanged;
pub use crate::core::camera::FocusRequest;

// Animation
pub use crate::core::tween::Easing;

// Message bus
pub use crate::core::message_bus::MessageBus;

// Math
pub use glam::{Quat, Vec2, Vec3};
