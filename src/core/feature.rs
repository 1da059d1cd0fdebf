//=========================================================================
// Features
//=========================================================================
//
// Immutable metadata for every selectable thing on the globe: name and
// fact text, highlight colours, the renderable it lives on, and the
// optional detail-view capability.
//
// Architecture:
//   FeatureRegistry
//     └─ features: Vec<Feature>   (indexed by FeatureId)
//          └─ detail: Option<DetailBinding>   (capability, not a subtype)
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;

//=== Internal Dependencies ===============================================

use crate::core::detail::RotationLimits;
use crate::core::error::SetupError;
use crate::core::stage::{Backdrop, CameraPose, Color, ObjectId, Stage};

//=== FeatureId ===========================================================

/// Opaque feature identifier assigned by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeatureId(u32);

//=== DetailBinding =======================================================

/// Everything needed to open a detail view for a feature.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailBinding {
    /// Object grown from zero to `target_scale` when the view opens.
    pub detail_object: ObjectId,

    /// Full size of the detail object.
    pub target_scale: Vec3,

    /// Backdrop shown while the view is open (falls back to the scene default).
    pub backdrop: Option<Backdrop>,

    /// Per-axis clamps for the detail rotator.
    pub rotation_limits: RotationLimits,
}

impl DetailBinding {
    pub fn new(detail_object: ObjectId, target_scale: Vec3) -> Self {
        Self {
            detail_object,
            target_scale,
            backdrop: None,
            rotation_limits: RotationLimits::default(),
        }
    }

    pub fn with_backdrop(mut self, backdrop: Backdrop) -> Self {
        self.backdrop = Some(backdrop);
        self
    }

    pub fn with_rotation_limits(mut self, limits: RotationLimits) -> Self {
        self.rotation_limits = limits;
        self
    }
}

//=== Feature =============================================================

/// Selectable feature metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    id: FeatureId,
    pub name: String,
    pub text: String,
    pub object: ObjectId,
    pub highlight_color: Color,
    pub override_color: Option<Color>,
    pub enabled: bool,
    pub detail: Option<DetailBinding>,
    pub extras: Vec<ObjectId>,
    /// Camera pose flown to when the feature is selected.
    pub focus: Option<CameraPose>,
}

impl Feature {
    pub fn new(name: impl Into<String>, object: ObjectId) -> Self {
        Self {
            id: FeatureId(u32::MAX),
            name: name.into(),
            text: String::new(),
            object,
            highlight_color: Color::YELLOW,
            override_color: None,
            enabled: true,
            detail: None,
            extras: Vec::new(),
            focus: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_highlight_color(mut self, color: Color) -> Self {
        self.highlight_color = color;
        self
    }

    /// Base colour restored when the highlight stops, instead of the
    /// colour the object had when it started.
    pub fn with_override_color(mut self, color: Color) -> Self {
        self.override_color = Some(color);
        self
    }

    pub fn with_detail(mut self, binding: DetailBinding) -> Self {
        self.detail = Some(binding);
        self
    }

    /// Objects shown only while this feature is selected.
    pub fn with_extras(mut self, extras: impl IntoIterator<Item = ObjectId>) -> Self {
        self.extras = extras.into_iter().collect();
        self
    }

    pub fn with_focus(mut self, pose: CameraPose) -> Self {
        self.focus = Some(pose);
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn id(&self) -> FeatureId {
        self.id
    }

    pub fn is_detail_capable(&self) -> bool {
        self.detail.is_some()
    }
}

//=== FeatureRegistry =====================================================

/// Owns all feature metadata; everything else refers to features by id.
#[derive(Debug, Default)]
pub struct FeatureRegistry {
    features: Vec<Feature>,
}

impl FeatureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a feature and assigns its id.
    pub fn register(&mut self, mut feature: Feature) -> FeatureId {
        let id = FeatureId(self.features.len() as u32);
        feature.id = id;
        self.features.push(feature);
        id
    }

    pub fn get(&self, id: FeatureId) -> Option<&Feature> {
        self.features.get(id.0 as usize)
    }

    /// Registered and enabled.
    pub fn is_selectable(&self, id: FeatureId) -> bool {
        self.get(id).map(|f| f.enabled).unwrap_or(false)
    }

    pub fn set_enabled(&mut self, id: FeatureId, enabled: bool) {
        if let Some(feature) = self.features.get_mut(id.0 as usize) {
            feature.enabled = enabled;
        }
    }

    pub fn find_by_object(&self, object: ObjectId) -> Option<FeatureId> {
        self.features.iter().find(|f| f.object == object).map(|f| f.id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter()
    }

    pub fn detail_capable(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter().filter(|f| f.is_detail_capable())
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Returns `Err(UnknownFeature)` if `id` was never registered.
    pub fn require(&self, id: FeatureId) -> Result<(), SetupError> {
        if self.get(id).is_some() {
            Ok(())
        } else {
            Err(SetupError::UnknownFeature(id))
        }
    }

    /// Checks that every object referenced by a feature exists on `stage`.
    pub fn validate(&self, stage: &Stage) -> Result<(), SetupError> {
        for feature in &self.features {
            stage.require(feature.object)?;
            for &extra in &feature.extras {
                stage.require(extra)?;
            }
            if let Some(binding) = &feature.detail {
                stage.require(binding.detail_object)?;
            }
        }
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
