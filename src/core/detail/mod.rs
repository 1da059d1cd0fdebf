//=========================================================================
// Detail View State Machine
//=========================================================================
//
// Owns the single modal "detail view": the globe shrinks away, a 3D
// detail model grows in its place, and everything else is locked until
// the view closes again.
//
// Architecture:
//   DetailSessionManager
//     ├─ phase: DetailPhase          (single source of truth, crate-wide)
//     ├─ session: Option<DetailSession>
//     ├─ original_backdrop           (captured on first activation)
//     └─ rotator: DetailRotator      (drag rotation while Active)
//
// Transitions are driven by tween completions: only the anchor tween of
// the current session moves the phase forward, so a cancelled or stale
// tween can never close or open anything.
//
//=========================================================================

//=== Module Declarations =================================================

mod rotator;
mod session;

//=== Public API ==========================================================

pub use rotator::{AxisLimit, DetailRotator, RotationLimits};
pub use session::{DetailPhase, DetailPhaseChanged};

//=== External Dependencies ===============================================

use glam::{Quat, Vec3};
use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use crate::core::config::DetailConfig;
use crate::core::error::SetupError;
use crate::core::feature::{FeatureId, FeatureRegistry};
use crate::core::globals::GlobalContext;
use crate::core::input::DragAxis;
use crate::core::stage::{Backdrop, ObjectId, Stage};
use crate::core::tween::{Property, TweenHandle, TweenSpec, TweenTarget, TweenValue};
use session::DetailSession;

//=== DetailSceneSetup ====================================================

/// Scene objects shared by every detail view.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailSceneSetup {
    /// Root of the globe, shrunk to zero while a view is open.
    pub world_root: ObjectId,

    /// UI hidden while a view is open.
    pub ambient_ui: Vec<ObjectId>,

    /// Button closing the view; shown only while a view is open.
    pub back_button: Option<ObjectId>,

    /// Backdrop used when a feature does not bring its own.
    pub detail_backdrop: Option<Backdrop>,
}

impl DetailSceneSetup {
    pub fn new(world_root: ObjectId) -> Self {
        Self {
            world_root,
            ambient_ui: Vec::new(),
            back_button: None,
            detail_backdrop: None,
        }
    }

    pub fn with_ambient_ui(mut self, objects: impl IntoIterator<Item = ObjectId>) -> Self {
        self.ambient_ui = objects.into_iter().collect();
        self
    }

    pub fn with_back_button(mut self, button: ObjectId) -> Self {
        self.back_button = Some(button);
        self
    }

    pub fn with_detail_backdrop(mut self, backdrop: Backdrop) -> Self {
        self.detail_backdrop = Some(backdrop);
        self
    }
}

//=== DetailSessionManager ================================================

/// The one and only detail view state machine.
pub struct DetailSessionManager {
    config: DetailConfig,
    setup: Option<DetailSceneSetup>,
    phase: DetailPhase,
    session: Option<DetailSession>,
    original_backdrop: Option<Option<Backdrop>>,
    rotator: DetailRotator,
}

impl DetailSessionManager {
    pub fn new(config: DetailConfig) -> Self {
        Self {
            config,
            setup: None,
            phase: DetailPhase::Inactive,
            session: None,
            original_backdrop: None,
            rotator: DetailRotator::new(),
        }
    }

    //--- Setup ------------------------------------------------------------

    /// Installs the shared scene objects. Without them no view can open.
    pub fn set_scene(&mut self, setup: DetailSceneSetup) {
        self.setup = Some(setup);
    }

    /// Drops the scene setup; every later `activate` is refused.
    pub fn disable(&mut self) {
        self.setup = None;
    }

    pub fn is_enabled(&self) -> bool {
        self.setup.is_some()
    }

    /// Checks the scene setup against the stage.
    ///
    /// Missing setup is only an error when some feature can open a view.
    pub fn validate(&self, stage: &Stage, features: &FeatureRegistry) -> Result<(), SetupError> {
        let Some(setup) = &self.setup else {
            if features.detail_capable().next().is_some() {
                return Err(SetupError::InvalidConfig(
                    "detail-capable features registered without a detail scene".to_string(),
                ));
            }
            return Ok(());
        };

        stage.require(setup.world_root)?;
        for &object in &setup.ambient_ui {
            stage.require(object)?;
        }
        if let Some(button) = setup.back_button {
            stage.require(button)?;
        }
        Ok(())
    }

    /// Puts the scene into its closed state (back button hidden).
    pub fn prepare(&self, stage: &mut Stage) {
        if let Some(button) = self.setup.as_ref().and_then(|s| s.back_button) {
            stage.set_active(button, false);
        }
    }

    //--- Query API --------------------------------------------------------

    pub fn phase(&self) -> DetailPhase {
        self.phase
    }

    /// Feature owning the current session, if any.
    pub fn session_feature(&self) -> Option<FeatureId> {
        self.session.as_ref().map(|s| s.feature)
    }

    pub fn rotator(&self) -> &DetailRotator {
        &self.rotator
    }

    //--- Transitions ------------------------------------------------------

    /// Opens the detail view of `feature`. Only valid from `Inactive`.
    ///
    /// Returns `true` if the opening animation started.
    pub fn activate(&mut self, feature: FeatureId, ctx: &mut GlobalContext) -> bool {
        if self.phase != DetailPhase::Inactive {
            debug!("Ignoring activate({:?}) in phase {:?}", feature, self.phase);
            return false;
        }
        let Some(setup) = self.setup.clone() else {
            debug!("Ignoring activate({:?}): detail views disabled", feature);
            return false;
        };
        let Some(binding) = ctx.features.get(feature).and_then(|f| f.detail.clone()) else {
            debug!("Ignoring activate({:?}): feature has no detail view", feature);
            return false;
        };

        info!("Opening detail view for {:?}", feature);

        //--- Lock global input ---------------------------------------------
        ctx.selection_input_enabled = false;
        ctx.camera_input_enabled = false;

        //--- Disable competing detail targets ------------------------------
        let disabled_colliders: Vec<ObjectId> = ctx
            .features
            .detail_capable()
            .filter(|f| f.id() != feature)
            .map(|f| f.object)
            .filter(|&o| ctx.stage.get(o).map(|o| o.collider_enabled).unwrap_or(false))
            .collect();
        for &object in &disabled_colliders {
            ctx.stage.set_collider_enabled(object, false);
        }

        //--- Hide ambient UI -----------------------------------------------
        let hidden_ui: Vec<ObjectId> = setup
            .ambient_ui
            .iter()
            .copied()
            .filter(|&o| ctx.stage.is_active(o))
            .collect();
        for &object in &hidden_ui {
            ctx.stage.set_active(object, false);
        }

        //--- Swap backdrop -------------------------------------------------
        if self.original_backdrop.is_none() {
            self.original_backdrop = Some(ctx.stage.backdrop().cloned());
        }
        if let Some(backdrop) = binding.backdrop.clone().or(setup.detail_backdrop) {
            ctx.stage.set_backdrop(Some(backdrop));
        }

        //--- Back button ---------------------------------------------------
        if let Some(button) = setup.back_button {
            ctx.stage.set_active(button, true);
            ctx.stage.set_interactable(button, true);
        }

        //--- Launch paired tweens ------------------------------------------
        let world_root_scale = ctx.stage.scale(setup.world_root).unwrap_or(Vec3::ONE);
        let detail_object = binding.detail_object;
        ctx.stage.set_active(detail_object, true);
        ctx.stage.set_scale(detail_object, Vec3::ZERO);
        let initial_rotation = ctx.stage.rotation(detail_object).unwrap_or(Quat::IDENTITY);

        ctx.tweener.start(self.scale_tween(setup.world_root, world_root_scale, Vec3::ZERO));
        let anchor = ctx.tweener.start(self.scale_tween(
            detail_object,
            Vec3::ZERO,
            binding.target_scale,
        ));

        self.session = Some(DetailSession {
            feature,
            world_root: setup.world_root,
            world_root_scale,
            detail_object,
            initial_rotation,
            anchor: Some(anchor),
            detail_hide: None,
            hidden_ui,
            disabled_colliders,
        });
        self.set_phase(DetailPhase::Activating, ctx);
        true
    }

    /// Starts closing the open view. Only valid from `Active`.
    ///
    /// Returns `true` if the closing animation started.
    pub fn deactivate(&mut self, ctx: &mut GlobalContext) -> bool {
        if self.phase != DetailPhase::Active {
            debug!("Ignoring deactivate in phase {:?}", self.phase);
            return false;
        }
        let Some(session) = self.session.as_ref() else {
            warn!("Active detail phase without a session");
            return false;
        };
        let (detail_object, world_root) = (session.detail_object, session.world_root);
        let world_root_scale = session.world_root_scale;

        info!("Closing detail view for {:?}", session.feature);

        self.restore_backdrop(ctx);
        if let Some(button) = self.setup.as_ref().and_then(|s| s.back_button) {
            ctx.stage.set_interactable(button, false);
        }
        self.rotator.end();

        // Drop a pending rotation reset before shrinking
        ctx.tweener.cancel_target(TweenTarget::Object(detail_object));

        let detail_scale = ctx.stage.scale(detail_object).unwrap_or(Vec3::ZERO);
        let root_scale = ctx.stage.scale(world_root).unwrap_or(Vec3::ZERO);
        let detail_hide = ctx.tweener.start(self.scale_tween(detail_object, detail_scale, Vec3::ZERO));
        let anchor = ctx.tweener.start(self.scale_tween(world_root, root_scale, world_root_scale));

        if let Some(session) = self.session.as_mut() {
            session.detail_hide = Some(detail_hide);
            session.anchor = Some(anchor);
        }
        self.set_phase(DetailPhase::Deactivating, ctx);
        true
    }

    /// Tears the view down immediately from any phase.
    ///
    /// Cancels the session's tweens, snaps the world root back to its
    /// original scale and the detail object to zero, and restores
    /// everything `activate` changed. Returns `false` when already closed.
    pub fn force_close(&mut self, ctx: &mut GlobalContext) -> bool {
        if self.phase == DetailPhase::Inactive {
            return false;
        }
        let Some(session) = self.session.as_ref() else {
            self.set_phase(DetailPhase::Inactive, ctx);
            return true;
        };

        info!("Force-closing detail view for {:?} (phase {:?})", session.feature, self.phase);

        ctx.tweener.cancel_target(TweenTarget::Object(session.world_root));
        ctx.tweener.cancel_target(TweenTarget::Object(session.detail_object));
        ctx.stage.set_scale(session.world_root, session.world_root_scale);
        ctx.stage.set_rotation(session.detail_object, session.initial_rotation);

        self.restore_backdrop(ctx);
        self.rotator.end();
        self.finish_close(ctx);
        true
    }

    /// Forced teardown when the owning feature goes away mid-session.
    pub fn teardown_feature(&mut self, feature: FeatureId, ctx: &mut GlobalContext) {
        if self.session_feature() == Some(feature) {
            self.force_close(ctx);
        }
    }

    /// Routes a finished tween. Only handles belonging to the current
    /// session have any effect.
    pub fn on_tween_completed(&mut self, handle: TweenHandle, ctx: &mut GlobalContext) {
        let Some(session) = self.session.as_mut() else { return };

        if session.detail_hide == Some(handle) {
            session.detail_hide = None;
            ctx.stage.set_active(session.detail_object, false);
            return;
        }
        if session.anchor != Some(handle) {
            return;
        }
        session.anchor = None;

        match self.phase {
            DetailPhase::Activating => {
                let (object, rotation) = (session.detail_object, session.initial_rotation);
                let limits = ctx
                    .features
                    .get(session.feature)
                    .and_then(|f| f.detail.as_ref())
                    .map(|b| b.rotation_limits)
                    .unwrap_or_default();
                self.rotator.begin(object, rotation, limits);
                self.set_phase(DetailPhase::Active, ctx);
            }
            DetailPhase::Deactivating => self.finish_close(ctx),
            phase => debug!("Anchor completed in unexpected phase {:?}", phase),
        }
    }

    //--- Detail Rotation --------------------------------------------------

    /// Rotates the detail object (only while `Active`).
    pub fn rotate(&mut self, axis: DragAxis, delta: f32, dt: f32, ctx: &mut GlobalContext) {
        if self.phase == DetailPhase::Active {
            self.rotator
                .apply_drag(axis, delta, dt, &self.config, &mut ctx.stage, &mut ctx.tweener);
        }
    }

    /// Animates the detail object back to its rest rotation (only while `Active`).
    pub fn reset_rotation(&mut self, ctx: &mut GlobalContext) {
        if self.phase == DetailPhase::Active {
            self.rotator.reset(&self.config, &ctx.stage, &mut ctx.tweener);
        } else {
            debug!("Ignoring rotation reset in phase {:?}", self.phase);
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn scale_tween(&self, object: ObjectId, from: Vec3, to: Vec3) -> TweenSpec {
        TweenSpec::new(
            TweenTarget::Object(object),
            Property::Scale,
            TweenValue::Vector(from),
            TweenValue::Vector(to),
        )
        .with_duration(self.config.transition_duration)
        .with_easing(self.config.transition_easing)
    }

    fn restore_backdrop(&self, ctx: &mut GlobalContext) {
        if let Some(original) = &self.original_backdrop {
            ctx.stage.set_backdrop(original.clone());
        }
    }

    /// Restores everything `activate` changed and returns to `Inactive`.
    fn finish_close(&mut self, ctx: &mut GlobalContext) {
        let Some(session) = self.session.take() else {
            self.set_phase(DetailPhase::Inactive, ctx);
            return;
        };

        if let Some(handle) = session.detail_hide {
            ctx.tweener.cancel(handle);
        }
        ctx.stage.set_scale(session.detail_object, Vec3::ZERO);
        ctx.stage.set_active(session.detail_object, false);

        for &object in &session.hidden_ui {
            ctx.stage.set_active(object, true);
        }
        if let Some(button) = self.setup.as_ref().and_then(|s| s.back_button) {
            ctx.stage.set_active(button, false);
            ctx.stage.set_interactable(button, true);
        }
        for &object in &session.disabled_colliders {
            ctx.stage.set_collider_enabled(object, true);
        }

        ctx.selection_input_enabled = true;
        ctx.camera_input_enabled = true;

        info!("Detail view for {:?} closed", session.feature);
        self.phase = DetailPhase::Inactive;
        ctx.message_bus.push(DetailPhaseChanged { feature: Some(session.feature), phase: self.phase });
    }

    fn set_phase(&mut self, phase: DetailPhase, ctx: &mut GlobalContext) {
        debug!("Detail phase {:?} → {:?}", self.phase, phase);
        self.phase = phase;
        ctx.message_bus.push(DetailPhaseChanged { feature: self.session_feature(), phase });
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::feature::{DetailBinding, Feature};
    use crate::core::stage::StageObject;

    //--- Test Helpers -----------------------------------------------------

    struct Fixture {
        ctx: GlobalContext,
        manager: DetailSessionManager,
        world_root: ObjectId,
        back_button: ObjectId,
        ambient: ObjectId,
        volcano: FeatureId,
        volcano_model: ObjectId,
        reef: FeatureId,
        reef_object: ObjectId,
        plain: FeatureId,
    }

    const DURATION: f32 = 0.5;

    fn fixture() -> Fixture {
        let mut ctx = GlobalContext::new();
        let stage = &mut ctx.stage;
        let world_root = stage.spawn(StageObject::new("globe").with_scale(Vec3::splat(2.0)));
        let back_button = stage.spawn(StageObject::new("back"));
        let ambient = stage.spawn(StageObject::new("legend"));
        let volcano_object = stage.spawn(StageObject::new("volcano-marker"));
        let volcano_model = stage.spawn(StageObject::new("volcano-model").inactive());
        let reef_object = stage.spawn(StageObject::new("reef-marker"));
        let reef_model = stage.spawn(StageObject::new("reef-model").inactive());
        let plain_object = stage.spawn(StageObject::new("plain"));
        stage.set_backdrop(Some(Backdrop::new("space")));

        let volcano = ctx.features.register(
            Feature::new("Volcano", volcano_object)
                .with_detail(DetailBinding::new(volcano_model, Vec3::splat(3.0))),
        );
        let reef = ctx.features.register(
            Feature::new("Reef", reef_object)
                .with_detail(DetailBinding::new(reef_model, Vec3::ONE)),
        );
        let plain = ctx.features.register(Feature::new("Plain", plain_object));

        let mut manager = DetailSessionManager::new(
            DetailConfig::default().with_transition(DURATION, crate::core::tween::Easing::Linear),
        );
        manager.set_scene(
            DetailSceneSetup::new(world_root)
                .with_ambient_ui([ambient])
                .with_back_button(back_button)
                .with_detail_backdrop(Backdrop::new("studio")),
        );
        manager.prepare(&mut ctx.stage);

        Fixture {
            ctx,
            manager,
            world_root,
            back_button,
            ambient,
            volcano,
            volcano_model,
            reef,
            reef_object,
            plain,
        }
    }

    /// Advances tweens and routes completions, like one core tick.
    fn tick(f: &mut Fixture, dt: f32) {
        let done = f.ctx.tweener.advance(dt, &mut f.ctx.stage);
        for handle in done {
            f.manager.on_tween_completed(handle, &mut f.ctx);
        }
    }

    fn open(f: &mut Fixture) {
        assert!(f.manager.activate(f.volcano, &mut f.ctx));
        tick(f, DURATION);
        assert_eq!(f.manager.phase(), DetailPhase::Active);
    }

    fn assert_closed_world(f: &Fixture) {
        let stage = &f.ctx.stage;
        assert_eq!(f.manager.phase(), DetailPhase::Inactive);
        assert_eq!(stage.scale(f.world_root), Some(Vec3::splat(2.0)));
        assert_eq!(stage.scale(f.volcano_model), Some(Vec3::ZERO));
        assert!(!stage.is_active(f.volcano_model));
        assert!(!stage.is_active(f.back_button));
        assert!(stage.is_active(f.ambient));
        assert_eq!(stage.backdrop(), Some(&Backdrop::new("space")));
        assert_eq!(stage.get(f.reef_object).map(|o| o.collider_enabled), Some(true));
        assert!(f.ctx.selection_input_enabled);
        assert!(f.ctx.camera_input_enabled);
        assert_eq!(f.manager.session_feature(), None);
    }

    //=====================================================================
    // Activation Tests
    //=====================================================================

    #[test]
    fn activate_locks_world_and_starts_tweens() {
        let mut f = fixture();
        assert!(f.manager.activate(f.volcano, &mut f.ctx));

        let stage = &f.ctx.stage;
        assert_eq!(f.manager.phase(), DetailPhase::Activating);
        assert!(!f.ctx.selection_input_enabled);
        assert!(!f.ctx.camera_input_enabled);
        assert!(stage.is_active(f.volcano_model));
        assert!(stage.is_active(f.back_button));
        assert!(!stage.is_active(f.ambient));
        assert_eq!(stage.backdrop(), Some(&Backdrop::new("studio")));
        assert_eq!(stage.get(f.reef_object).map(|o| o.collider_enabled), Some(false));
        assert_eq!(f.ctx.tweener.len(), 2);
    }

    #[test]
    fn anchor_completion_makes_active() {
        let mut f = fixture();
        f.manager.activate(f.volcano, &mut f.ctx);

        tick(&mut f, DURATION * 0.5);
        assert_eq!(f.manager.phase(), DetailPhase::Activating);

        tick(&mut f, DURATION * 0.5);
        assert_eq!(f.manager.phase(), DetailPhase::Active);
        assert_eq!(f.ctx.stage.scale(f.world_root), Some(Vec3::ZERO));
        assert_eq!(f.ctx.stage.scale(f.volcano_model), Some(Vec3::splat(3.0)));
        assert!(f.manager.rotator().is_active());
    }

    #[test]
    fn activating_twice_keeps_one_session() {
        let mut f = fixture();
        assert!(f.manager.activate(f.volcano, &mut f.ctx));
        assert!(!f.manager.activate(f.volcano, &mut f.ctx));
        assert!(!f.manager.activate(f.reef, &mut f.ctx));

        assert_eq!(f.manager.session_feature(), Some(f.volcano));
        assert_eq!(f.ctx.tweener.len(), 2);
    }

    #[test]
    fn plain_feature_cannot_activate() {
        let mut f = fixture();
        assert!(!f.manager.activate(f.plain, &mut f.ctx));
        assert_eq!(f.manager.phase(), DetailPhase::Inactive);
    }

    #[test]
    fn disabled_manager_refuses() {
        let mut f = fixture();
        f.manager.disable();
        assert!(!f.manager.activate(f.volcano, &mut f.ctx));
    }

    //=====================================================================
    // Deactivation Tests
    //=====================================================================

    #[test]
    fn deactivate_only_from_active() {
        let mut f = fixture();
        assert!(!f.manager.deactivate(&mut f.ctx));

        f.manager.activate(f.volcano, &mut f.ctx);
        assert!(!f.manager.deactivate(&mut f.ctx), "still activating");
    }

    #[test]
    fn animated_close_restores_world() {
        let mut f = fixture();
        open(&mut f);

        assert!(f.manager.deactivate(&mut f.ctx));
        assert_eq!(f.manager.phase(), DetailPhase::Deactivating);
        assert_eq!(f.ctx.stage.backdrop(), Some(&Backdrop::new("space")));
        assert_eq!(f.ctx.stage.get(f.back_button).map(|o| o.interactable), Some(false));

        tick(&mut f, DURATION);
        assert_closed_world(&f);
        assert_eq!(f.ctx.stage.get(f.back_button).map(|o| o.interactable), Some(true));
    }

    //=====================================================================
    // Forced Teardown Tests
    //=====================================================================

    #[test]
    fn force_close_while_activating() {
        let mut f = fixture();
        f.manager.activate(f.volcano, &mut f.ctx);
        tick(&mut f, DURATION * 0.4);

        assert!(f.manager.force_close(&mut f.ctx));
        assert_closed_world(&f);

        // No stale completion can reopen or close anything
        assert!(f.ctx.tweener.is_empty());
        tick(&mut f, DURATION * 2.0);
        assert_closed_world(&f);
    }

    #[test]
    fn force_close_while_deactivating() {
        let mut f = fixture();
        open(&mut f);
        f.manager.deactivate(&mut f.ctx);
        tick(&mut f, DURATION * 0.3);

        f.manager.force_close(&mut f.ctx);
        assert_closed_world(&f);
    }

    #[test]
    fn stale_handle_is_ignored() {
        let mut f = fixture();
        f.manager.activate(f.volcano, &mut f.ctx);
        let stale = f.ctx.tweener.start(TweenSpec::new(
            TweenTarget::Camera,
            Property::Distance,
            TweenValue::Scalar(0.0),
            TweenValue::Scalar(1.0),
        ));

        f.manager.on_tween_completed(stale, &mut f.ctx);
        assert_eq!(f.manager.phase(), DetailPhase::Activating);
    }

    #[test]
    fn teardown_only_for_owner() {
        let mut f = fixture();
        f.manager.activate(f.volcano, &mut f.ctx);

        f.manager.teardown_feature(f.reef, &mut f.ctx);
        assert_eq!(f.manager.phase(), DetailPhase::Activating);

        f.manager.teardown_feature(f.volcano, &mut f.ctx);
        assert_closed_world(&f);
    }

    #[test]
    fn reopen_after_close_captures_original_backdrop_once() {
        let mut f = fixture();
        open(&mut f);
        f.manager.force_close(&mut f.ctx);

        open(&mut f);
        assert_eq!(f.ctx.stage.backdrop(), Some(&Backdrop::new("studio")));
        f.manager.force_close(&mut f.ctx);
        assert_eq!(f.ctx.stage.backdrop(), Some(&Backdrop::new("space")));
    }

    //=====================================================================
    // Notification & Rotation Tests
    //=====================================================================

    #[test]
    fn phase_changes_are_published() {
        let mut f = fixture();
        open(&mut f);

        let phases: Vec<_> = f
            .ctx
            .message_bus
            .read::<DetailPhaseChanged>()
            .iter()
            .map(|m| m.phase)
            .collect();
        assert_eq!(phases, vec![DetailPhase::Activating, DetailPhase::Active]);
    }

    #[test]
    fn rotation_only_while_active() {
        let mut f = fixture();
        f.manager.activate(f.volcano, &mut f.ctx);
        f.manager.rotate(DragAxis::Horizontal, 10.0, 0.1, &mut f.ctx);
        assert_eq!(f.ctx.stage.rotation(f.volcano_model), Some(Quat::IDENTITY));

        tick(&mut f, DURATION);
        f.manager.rotate(DragAxis::Horizontal, 10.0, 0.1, &mut f.ctx);
        assert_ne!(f.ctx.stage.rotation(f.volcano_model), Some(Quat::IDENTITY));

        f.manager.reset_rotation(&mut f.ctx);
        tick(&mut f, 1.0);
        let rotation = f.ctx.stage.rotation(f.volcano_model).unwrap_or(Quat::from_rotation_x(1.0));
        assert!(rotation.abs_diff_eq(Quat::IDENTITY, 1e-5));
    }

    #[test]
    fn validate_requires_scene_for_detail_features() {
        let f = fixture();
        assert_eq!(f.manager.validate(&f.ctx.stage, &f.ctx.features), Ok(()));

        let bare = DetailSessionManager::new(DetailConfig::default());
        assert!(bare.validate(&f.ctx.stage, &f.ctx.features).is_err());
    }
}
