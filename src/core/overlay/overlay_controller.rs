//=========================================================================
// Overlay Controller
//=========================================================================
//
// Registers overlay modes by key and switches between them.
//
// Modes are stored in a HashMap by key; only one key is active. Switch
// requests arrive on the message bus and are applied at the tick
// boundary, after selection input has been handled.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use super::{DeferredTask, OverlayMode};
use crate::core::camera::FocusRequest;
use crate::core::detail::{DetailPhase, DetailSessionManager};
use crate::core::error::SetupError;
use crate::core::feature::FeatureRegistry;
use crate::core::globals::GlobalContext;
use crate::core::selection::SelectionCoordinator;
use crate::core::stage::Stage;

//=== Overlay Key Trait ===================================================

/// Marker trait for overlay mode identifiers.
///
/// Typically implemented by an application enum.
pub trait OverlayKey: Clone + Copy + Eq + Hash + Debug + Send + 'static {}

//=== Messages ============================================================

/// Request to switch to the given mode (consumed by the controller).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlaySwitch<K: OverlayKey>(pub K);

/// Notification published after a mode switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayChanged<K: OverlayKey> {
    pub previous: Option<K>,
    pub current: K,
}

//=== OverlayController ===================================================

/// Keeps exactly one overlay mode active.
pub struct OverlayController<K: OverlayKey> {
    modes: HashMap<K, OverlayMode>,
    default: Option<K>,
    active: Option<K>,
}

impl<K: OverlayKey> OverlayController<K> {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        Self {
            modes: HashMap::new(),
            default: None,
            active: None,
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers a mode under `key`, replacing any previous one.
    pub fn register_mode(&mut self, key: K, mode: OverlayMode) {
        if self.modes.insert(key, mode).is_some() {
            warn!("Overlay mode {:?} was already registered and has been replaced", key);
        }
    }

    /// Registers a mode and makes it the one `start` activates.
    pub fn register_default(&mut self, key: K, mode: OverlayMode) {
        self.register_mode(key, mode);
        if let Some(previous) = self.default.replace(key) {
            if previous != key {
                warn!("Default overlay mode changed from {:?} to {:?}", previous, key);
            }
        }
    }

    /// Checks that every mode refers to known objects and features.
    pub fn validate(&self, stage: &Stage, features: &FeatureRegistry) -> Result<(), SetupError> {
        if self.modes.is_empty() {
            return Ok(());
        }
        let Some(default) = self.default else {
            return Err(SetupError::UnknownMode("no default overlay mode".to_string()));
        };
        if !self.modes.contains_key(&default) {
            return Err(SetupError::UnknownMode(format!("{:?}", default)));
        }

        for mode in self.modes.values() {
            for &object in &mode.objects {
                stage.require(object)?;
            }
            for &feature in mode.features.iter().chain(mode.default_feature.iter()) {
                features.require(feature)?;
            }
        }
        Ok(())
    }

    /// Activates the default mode and deactivates every other one.
    ///
    /// No camera focus is requested; the initial camera pose stands.
    pub fn start(&mut self, ctx: &mut GlobalContext) {
        let Some(default) = self.default else {
            debug!("No overlay modes registered");
            return;
        };

        for (&key, mode) in &self.modes {
            if key != default {
                apply_visibility(mode, false, ctx);
            }
        }
        if let Some(mode) = self.modes.get(&default) {
            debug!("Starting overlay controller with mode {:?}", default);
            apply_visibility(mode, true, ctx);
            ctx.display.show(&mode.title, &mode.body);
            if let Some(feature) = mode.default_feature {
                ctx.deferred.push(DeferredTask::SelectFeature(feature));
            }
        }
        self.active = Some(default);
    }

    //--- Query API --------------------------------------------------------

    pub fn active(&self) -> Option<K> {
        self.active
    }

    pub fn mode(&self, key: K) -> Option<&OverlayMode> {
        self.modes.get(&key)
    }

    //--- Switching --------------------------------------------------------

    /// Switches to `key`. Switching to the active mode does nothing.
    pub fn switch_to(
        &mut self,
        key: K,
        ctx: &mut GlobalContext,
        selection: &mut SelectionCoordinator,
        detail: &mut DetailSessionManager,
    ) -> bool {
        if self.active == Some(key) {
            debug!("Overlay mode {:?} already active", key);
            return false;
        }
        let Some(mode) = self.modes.get(&key) else {
            warn!("Attempted to switch to unregistered overlay mode {:?}", key);
            return false;
        };

        info!("Switching overlay mode {:?} → {:?}", self.active, key);

        selection.clear(ctx, detail);
        // An animated close would outlive the old mode's objects
        if detail.phase() != DetailPhase::Inactive {
            detail.force_close(ctx);
        }

        if let Some(old) = self.active.and_then(|k| self.modes.get(&k)) {
            apply_visibility(old, false, ctx);
        }
        apply_visibility(mode, true, ctx);

        ctx.display.show(&mode.title, &mode.body);
        if let Some(pose) = mode.focus {
            ctx.message_bus.push(FocusRequest::new(pose));
        }
        if let Some(feature) = mode.default_feature {
            ctx.deferred.push(DeferredTask::SelectFeature(feature));
        }

        let previous = self.active.replace(key);
        ctx.message_bus.push(OverlayChanged { previous, current: key });
        true
    }

    /// Applies every queued `OverlaySwitch<K>` in FIFO order.
    pub fn process_switches(
        &mut self,
        ctx: &mut GlobalContext,
        selection: &mut SelectionCoordinator,
        detail: &mut DetailSessionManager,
    ) {
        for OverlaySwitch(key) in ctx.message_bus.drain::<OverlaySwitch<K>>() {
            self.switch_to(key, ctx, selection, detail);
        }
    }
}

impl<K: OverlayKey> Default for OverlayController<K> {
    fn default() -> Self {
        Self::new()
    }
}

//--- Internal Helpers -----------------------------------------------------

fn apply_visibility(mode: &OverlayMode, active: bool, ctx: &mut GlobalContext) {
    for &object in &mode.objects {
        ctx.stage.set_active(object, active);
    }
    for &feature in &mode.features {
        if let Some(object) = ctx.features.get(feature).map(|f| f.object) {
            ctx.stage.set_collider_enabled(object, active);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{DetailConfig, HighlightConfig};
    use crate::core::detail::DetailSceneSetup;
    use crate::core::feature::{DetailBinding, Feature, FeatureId};
    use crate::core::selection::SelectionChanged;
    use crate::core::stage::{CameraPose, ObjectId, StageObject};
    use crate::core::tween::Easing;
    use glam::{Quat, Vec3};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Mode {
        Relief,
        Rivers,
    }

    impl OverlayKey for Mode {}

    //--- Test Helpers -----------------------------------------------------

    struct Fixture {
        ctx: GlobalContext,
        overlays: OverlayController<Mode>,
        selection: SelectionCoordinator,
        detail: DetailSessionManager,
        mountains: ObjectId,
        rivers: ObjectId,
        nile: FeatureId,
        nile_object: ObjectId,
        etna: FeatureId,
    }

    fn fixture() -> Fixture {
        let mut ctx = GlobalContext::new();
        let root = ctx.stage.spawn(StageObject::new("globe"));
        let mountains = ctx.stage.spawn(StageObject::new("mountains"));
        let rivers = ctx.stage.spawn(StageObject::new("rivers"));
        let nile_object = ctx.stage.spawn(StageObject::new("nile"));
        let etna_object = ctx.stage.spawn(StageObject::new("etna"));
        let etna_model = ctx.stage.spawn(StageObject::new("etna-model").inactive());

        let nile = ctx.features.register(Feature::new("Nile", nile_object));
        let etna = ctx.features.register(
            Feature::new("Etna", etna_object)
                .with_detail(DetailBinding::new(etna_model, Vec3::ONE)),
        );

        let mut overlays = OverlayController::new();
        overlays.register_default(
            Mode::Relief,
            OverlayMode::new("Relief", "Mountains and valleys.")
                .with_objects([mountains])
                .with_features([etna]),
        );
        overlays.register_mode(
            Mode::Rivers,
            OverlayMode::new("Rivers", "Major rivers.")
                .with_objects([rivers])
                .with_features([nile])
                .with_focus(CameraPose::new(Quat::IDENTITY, 12.0))
                .with_default_feature(nile),
        );

        let mut detail =
            DetailSessionManager::new(DetailConfig::default().with_transition(1.0, Easing::Linear));
        detail.set_scene(DetailSceneSetup::new(root));

        Fixture {
            ctx,
            overlays,
            selection: SelectionCoordinator::new(HighlightConfig::default(), "Welcome", ""),
            detail,
            mountains,
            rivers,
            nile,
            nile_object,
            etna,
        }
    }

    fn switch(f: &mut Fixture, key: Mode) -> bool {
        f.overlays.switch_to(key, &mut f.ctx, &mut f.selection, &mut f.detail)
    }

    //=====================================================================
    // Start Tests
    //=====================================================================

    #[test]
    fn start_activates_only_default() {
        let mut f = fixture();
        f.overlays.start(&mut f.ctx);

        assert_eq!(f.overlays.active(), Some(Mode::Relief));
        assert!(f.ctx.stage.is_active(f.mountains));
        assert!(!f.ctx.stage.is_active(f.rivers));
        assert_eq!(f.ctx.stage.get(f.nile_object).map(|o| o.collider_enabled), Some(false));
        assert_eq!(f.ctx.display.title(), "Relief");
        assert_eq!(f.ctx.message_bus.count::<FocusRequest>(), 0);
    }

    #[test]
    fn validate_reports_missing_default() {
        let f = fixture();
        assert_eq!(f.overlays.validate(&f.ctx.stage, &f.ctx.features), Ok(()));

        let mut bare: OverlayController<Mode> = OverlayController::new();
        bare.register_mode(Mode::Rivers, OverlayMode::default());
        assert!(matches!(
            bare.validate(&f.ctx.stage, &f.ctx.features),
            Err(SetupError::UnknownMode(_))
        ));
    }

    //=====================================================================
    // Switch Tests
    //=====================================================================

    #[test]
    fn switch_swaps_content() {
        let mut f = fixture();
        f.overlays.start(&mut f.ctx);

        assert!(switch(&mut f, Mode::Rivers));
        assert!(!f.ctx.stage.is_active(f.mountains));
        assert!(f.ctx.stage.is_active(f.rivers));
        assert_eq!(f.ctx.stage.get(f.nile_object).map(|o| o.collider_enabled), Some(true));
        assert_eq!(f.ctx.display.title(), "Rivers");
        assert_eq!(f.ctx.message_bus.count::<FocusRequest>(), 1);
        assert_eq!(
            f.ctx.message_bus.read::<OverlayChanged<Mode>>(),
            &[OverlayChanged { previous: Some(Mode::Relief), current: Mode::Rivers }]
        );
    }

    #[test]
    fn switch_to_active_is_noop() {
        let mut f = fixture();
        f.overlays.start(&mut f.ctx);
        assert!(!switch(&mut f, Mode::Relief));
        assert!(f.ctx.message_bus.read::<OverlayChanged<Mode>>().is_empty());
    }

    #[test]
    fn default_feature_is_deferred() {
        let mut f = fixture();
        f.overlays.start(&mut f.ctx);
        switch(&mut f, Mode::Rivers);

        // Not selected yet, only scheduled
        assert_eq!(f.selection.current(), None);
        assert_eq!(f.ctx.deferred.take(), vec![DeferredTask::SelectFeature(f.nile)]);
    }

    #[test]
    fn switch_clears_selection_and_closes_detail() {
        let mut f = fixture();
        f.overlays.start(&mut f.ctx);
        f.selection.select(f.etna, &mut f.ctx, &mut f.detail);
        for handle in f.ctx.tweener.advance(1.0, &mut f.ctx.stage) {
            f.detail.on_tween_completed(handle, &mut f.ctx);
        }
        assert_eq!(f.detail.phase(), DetailPhase::Active);

        switch(&mut f, Mode::Rivers);
        assert_eq!(f.selection.current(), None);
        assert_eq!(f.detail.phase(), DetailPhase::Inactive);
        assert!(f.ctx.selection_input_enabled);
        assert_eq!(
            f.ctx.message_bus.read::<SelectionChanged>().last().map(|m| m.current),
            Some(None)
        );
    }

    #[test]
    fn bus_requests_processed_in_order() {
        let mut f = fixture();
        f.overlays.start(&mut f.ctx);
        f.ctx.message_bus.push(OverlaySwitch(Mode::Rivers));
        f.ctx.message_bus.push(OverlaySwitch(Mode::Relief));

        f.overlays.process_switches(&mut f.ctx, &mut f.selection, &mut f.detail);
        assert_eq!(f.overlays.active(), Some(Mode::Relief));
        assert_eq!(f.ctx.message_bus.count::<OverlaySwitch<Mode>>(), 0);
        assert_eq!(f.ctx.message_bus.count::<OverlayChanged<Mode>>(), 2);
    }
}
