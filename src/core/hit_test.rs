//=========================================================================
// Hit Testing
//=========================================================================
//
// Resolves a screen position to what the pointer is over.
//
// UI always has priority over the world:
//
// ```text
// position → UI feature?   → Hit::UiFeature   (selectable list entry)
//          → UI element?   → Hit::UiBlocked   (swallows the press)
//          → world feature → Hit::WorldFeature (collider enabled)
//          → otherwise     → Hit::Miss
// ```
//
// Real raycasting lives in the renderer; `RegionHitTester` is a
// screen-rectangle implementation used by the demo and the tests.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Internal Dependencies ===============================================

use crate::core::feature::{FeatureId, FeatureRegistry};
use crate::core::stage::Stage;

//=== Hit =================================================================

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    UiFeature(FeatureId),
    UiBlocked,
    WorldFeature(FeatureId),
    Miss,
}

impl Hit {
    /// The feature under the pointer, from UI or world.
    pub fn feature(self) -> Option<FeatureId> {
        match self {
            Hit::UiFeature(id) | Hit::WorldFeature(id) => Some(id),
            _ => None,
        }
    }
}

//=== HitTester ===========================================================

/// Black-box pointer resolver supplied by the embedding application.
pub trait HitTester: Send {
    fn hit_test(&self, position: Vec2, stage: &Stage, features: &FeatureRegistry) -> Hit;
}

//=== Rect ================================================================

/// Axis-aligned screen rectangle (pixels, top-left origin).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + width, y + height),
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }
}

//=== RegionHitTester =====================================================

#[derive(Debug, Clone, Copy)]
enum Region {
    UiFeature(FeatureId),
    UiBlocker,
    World(FeatureId),
}

/// Hit tester over a list of screen rectangles.
///
/// UI regions are checked first, in insertion order. World regions only
/// hit when the feature is selectable and its object is active with its
/// collider enabled.
#[derive(Debug, Default)]
pub struct RegionHitTester {
    ui: Vec<(Rect, Region)>,
    world: Vec<(Rect, Region)>,
}

impl RegionHitTester {
    pub fn new() -> Self {
        Self::default()
    }

    /// A UI entry that selects `feature` (e.g. a list item).
    pub fn with_ui_feature(mut self, rect: Rect, feature: FeatureId) -> Self {
        self.ui.push((rect, Region::UiFeature(feature)));
        self
    }

    /// A UI element that swallows presses (buttons, panels).
    pub fn with_ui_blocker(mut self, rect: Rect) -> Self {
        self.ui.push((rect, Region::UiBlocker));
        self
    }

    /// The projected screen area of a world feature.
    pub fn with_world_feature(mut self, rect: Rect, feature: FeatureId) -> Self {
        self.world.push((rect, Region::World(feature)));
        self
    }
}

impl HitTester for RegionHitTester {
    fn hit_test(&self, position: Vec2, stage: &Stage, features: &FeatureRegistry) -> Hit {
        if let Some((_, region)) = self.ui.iter().find(|(rect, _)| rect.contains(position)) {
            return match *region {
                Region::UiFeature(id) if features.is_selectable(id) => Hit::UiFeature(id),
                _ => Hit::UiBlocked,
            };
        }

        for (rect, region) in &self.world {
            let Region::World(id) = *region else { continue };
            if !rect.contains(position) || !features.is_selectable(id) {
                continue;
            }
            let collidable = features
                .get(id)
                .and_then(|f| stage.get(f.object))
                .map(|o| o.active && o.collider_enabled)
                .unwrap_or(false);
            if collidable {
                return Hit::WorldFeature(id);
            }
        }

        Hit::Miss
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::feature::Feature;
    use crate::core::stage::StageObject;

    //--- Test Helpers -----------------------------------------------------

    fn world() -> (Stage, FeatureRegistry, FeatureId) {
        let mut stage = Stage::new();
        let object = stage.spawn(StageObject::new("continent"));
        let mut features = FeatureRegistry::new();
        let id = features.register(Feature::new("Africa", object));
        (stage, features, id)
    }

    //=====================================================================
    // Priority Tests
    //=====================================================================

    #[test]
    fn world_feature_hit() {
        let (stage, features, id) = world();
        let tester = RegionHitTester::new().with_world_feature(Rect::new(0.0, 0.0, 100.0, 100.0), id);

        assert_eq!(tester.hit_test(Vec2::new(50.0, 50.0), &stage, &features), Hit::WorldFeature(id));
        assert_eq!(tester.hit_test(Vec2::new(150.0, 50.0), &stage, &features), Hit::Miss);
    }

    #[test]
    fn ui_blocker_has_priority_over_world() {
        let (stage, features, id) = world();
        let tester = RegionHitTester::new()
            .with_world_feature(Rect::new(0.0, 0.0, 100.0, 100.0), id)
            .with_ui_blocker(Rect::new(0.0, 0.0, 20.0, 20.0));

        assert_eq!(tester.hit_test(Vec2::new(10.0, 10.0), &stage, &features), Hit::UiBlocked);
    }

    #[test]
    fn ui_feature_is_reported_as_ui() {
        let (stage, features, id) = world();
        let tester = RegionHitTester::new().with_ui_feature(Rect::new(0.0, 0.0, 10.0, 10.0), id);

        let hit = tester.hit_test(Vec2::new(5.0, 5.0), &stage, &features);
        assert_eq!(hit, Hit::UiFeature(id));
        assert_eq!(hit.feature(), Some(id));
    }

    //=====================================================================
    // Collider Tests
    //=====================================================================

    #[test]
    fn disabled_collider_misses() {
        let (mut stage, features, id) = world();
        let object = features.get(id).map(|f| f.object);
        if let Some(object) = object {
            stage.set_collider_enabled(object, false);
        }
        let tester = RegionHitTester::new().with_world_feature(Rect::new(0.0, 0.0, 100.0, 100.0), id);

        assert_eq!(tester.hit_test(Vec2::new(50.0, 50.0), &stage, &features), Hit::Miss);
    }

    #[test]
    fn disabled_feature_misses() {
        let (stage, mut features, id) = world();
        features.set_enabled(id, false);
        let tester = RegionHitTester::new().with_world_feature(Rect::new(0.0, 0.0, 100.0, 100.0), id);

        assert_eq!(tester.hit_test(Vec2::new(50.0, 50.0), &stage, &features), Hit::Miss);
    }
}
