//=========================================================================
// Overlay Modes
//=========================================================================
//
// Mutually exclusive content layers on the globe (relief, rivers,
// climate zones, ...). Exactly one mode is active at a time.
//
// Architecture:
//   OverlayController<K>
//     ├─ modes: HashMap<K, OverlayMode>
//     └─ active: Option<K>
//
// Flow:
//   UI pushes OverlaySwitch<K> → process_switches() → switch_to()
//     → selection cleared, objects/colliders swapped, text shown
//     → FocusRequest pushed, default feature deferred to next tick
//     → OverlayChanged<K> published
//
//=========================================================================

//=== Module Declarations =================================================

mod deferred_queue;
mod overlay_controller;

//=== Public API ==========================================================

pub use deferred_queue::{DeferredQueue, DeferredTask};
pub use overlay_controller::{OverlayChanged, OverlayController, OverlayKey, OverlaySwitch};

//=== External Dependencies ===============================================

use crate::core::feature::FeatureId;
use crate::core::stage::{CameraPose, ObjectId};

//=== OverlayMode =========================================================

/// Content of one overlay mode.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OverlayMode {
    pub title: String,
    pub body: String,

    /// Objects shown only while the mode is active.
    pub objects: Vec<ObjectId>,

    /// Features whose colliders are enabled only while the mode is active.
    pub features: Vec<FeatureId>,

    /// Camera pose to fly to when switching in.
    pub focus: Option<CameraPose>,

    /// Feature selected one tick after switching in.
    pub default_feature: Option<FeatureId>,
}

impl OverlayMode {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            ..Default::default()
        }
    }

    pub fn with_objects(mut self, objects: impl IntoIterator<Item = ObjectId>) -> Self {
        self.objects = objects.into_iter().collect();
        self
    }

    pub fn with_features(mut self, features: impl IntoIterator<Item = FeatureId>) -> Self {
        self.features = features.into_iter().collect();
        self
    }

    pub fn with_focus(mut self, pose: CameraPose) -> Self {
        self.focus = Some(pose);
        self
    }

    pub fn with_default_feature(mut self, feature: FeatureId) -> Self {
        self.default_feature = Some(feature);
        self
    }
}
