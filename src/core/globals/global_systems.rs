//=========================================================================
// Global Systems
//=========================================================================
//
// Container for the interaction systems with logic.
//
// Owns the gesture classifier, key bindings, selection coordinator,
// detail view state machine, camera rig and overlay controller, and
// runs them in a fixed order once per tick. Systems operate on
// GlobalContext data.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, error, info, trace};

//=== Internal Dependencies ===============================================

use super::GlobalContext;
use crate::core::camera::CameraRig;
use crate::core::config::InteractionConfig;
use crate::core::detail::{DetailPhase, DetailPhaseChanged, DetailSessionManager};
use crate::core::feature::FeatureId;
use crate::core::hit_test::{Hit, HitTester, RegionHitTester};
use crate::core::input::{GestureClassifier, GestureEvent, InputEvent, KeyBindings, UiCommand};
use crate::core::overlay::{
    DeferredTask, OverlayChanged, OverlayController, OverlayKey, OverlaySwitch,
};
use crate::core::selection::{SelectionChanged, SelectionCoordinator};

//=== GlobalSystems =======================================================

/// Container for the interaction logic systems.
///
/// # Available Systems
///
/// - `gestures`: click / double-click / drag / pinch disambiguation
/// - `bindings`: key → `UiCommand` table
/// - `selection`: current feature, highlight and info text
/// - `detail`: the modal detail view state machine
/// - `camera`: orbit camera rig
/// - `overlays`: mutually exclusive overlay modes
pub struct GlobalSystems<K: OverlayKey> {
    pub gestures: GestureClassifier,
    pub bindings: KeyBindings<K>,
    pub selection: SelectionCoordinator,
    pub detail: DetailSessionManager,
    pub camera: CameraRig,
    pub overlays: OverlayController<K>,

    hit_tester: Box<dyn HitTester>,
    config: InteractionConfig,
}

impl<K: OverlayKey> GlobalSystems<K> {
    /// Creates the systems from one aggregate configuration.
    ///
    /// Hosts embedding the core without the winit platform construct
    /// this directly and call `init` / `update` themselves.
    pub fn new(config: InteractionConfig) -> Self {
        Self {
            gestures: GestureClassifier::new(config.gesture.clone()),
            bindings: KeyBindings::with_defaults(),
            selection: SelectionCoordinator::new(
                config.highlight.clone(),
                config.default_title.clone(),
                config.default_body.clone(),
            ),
            detail: DetailSessionManager::new(config.detail.clone()),
            camera: CameraRig::new(config.camera.clone()),
            overlays: OverlayController::new(),
            hit_tester: Box::new(RegionHitTester::new()),
            config,
        }
    }

    /// Replaces the pointer resolver.
    pub fn set_hit_tester(&mut self, tester: impl HitTester + 'static) {
        self.hit_tester = Box::new(tester);
    }

    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    //--- Lifecycle --------------------------------------------------------

    /// Validates the scene and puts every system into its start state.
    ///
    /// Setup problems are logged and disable only the affected system;
    /// the rest keeps working.
    pub fn init(&mut self, ctx: &mut GlobalContext) {
        if let Err(e) = self.config.validate() {
            error!("Invalid interaction config: {}", e);
        }
        if let Err(e) = ctx.features.validate(&ctx.stage) {
            error!("Feature registry references a missing object: {}", e);
        }
        if let Err(e) = self.camera.init(&ctx.stage) {
            error!("Camera rig disabled: {}", e);
        }
        if let Err(e) = self.detail.validate(&ctx.stage, &ctx.features) {
            error!("Detail views disabled: {}", e);
            self.detail.disable();
        }

        self.detail.prepare(&mut ctx.stage);
        ctx.display.show(&self.config.default_title, &self.config.default_body);

        match self.overlays.validate(&ctx.stage, &ctx.features) {
            Ok(()) => self.overlays.start(ctx),
            Err(e) => error!("Overlay modes disabled: {}", e),
        }

        info!(
            "Interaction systems initialized ({} features, camera {})",
            ctx.features.len(),
            if self.camera.is_available() { "available" } else { "missing" }
        );
    }

    /// Disables a feature at runtime, tearing down its selection and any
    /// detail view it owns, even mid-transition.
    pub fn disable_feature(&mut self, feature: FeatureId, ctx: &mut GlobalContext) {
        ctx.features.set_enabled(feature, false);
        if self.selection.current() == Some(feature) {
            self.selection.clear(ctx, &mut self.detail);
        }
        self.detail.teardown_feature(feature, ctx);
    }

    //--- Update Loop ------------------------------------------------------

    /// Runs one tick of `dt` seconds.
    ///
    /// # Processing Pipeline
    ///
    /// 1. **Notifications**: last tick's notifications are dropped
    /// 2. **Deferred Tasks**: tasks queued by the previous tick run
    /// 3. **Input State**: frame batches update the state tracker
    /// 4. **Gestures**: UI-blocked presses are filtered, the rest classified
    /// 5. **Dispatch**: selects, drags and zooms reach their systems
    /// 6. **Commands**: key bindings and bus-queued `UiCommand`s
    /// 7. **Overlay Switches**: bus-queued `OverlaySwitch` requests
    /// 8. **Animation**: focus requests, tweens, completions, highlight
    /// 9. **Snapshot**: first-tick camera pose
    pub fn update(&mut self, ctx: &mut GlobalContext, dt: f32) {
        // 1. Notifications live for exactly one tick
        ctx.message_bus.clear::<SelectionChanged>();
        ctx.message_bus.clear::<DetailPhaseChanged>();
        ctx.message_bus.clear::<OverlayChanged<K>>();
        ctx.clock += dt as f64;

        // 2. Tasks deferred by the previous tick
        self.run_deferred(ctx);

        // 3. Low-level input state
        let events: Vec<InputEvent> = ctx.frame_events.drain(..).flatten().collect();
        ctx.input_state.clear();
        ctx.input_state.process_events(&events);
        ctx.input_state.finalize_frame();

        // 4. Gesture classification
        self.camera.set_enabled(ctx.camera_input_enabled);
        let accepted = self.route_ui_presses(events, ctx);
        for event in &accepted {
            if matches!(event, InputEvent::PointerDown { .. }) {
                self.camera.on_press(ctx);
            }
        }
        self.gestures.process_events(&accepted, ctx.clock);

        // 5. Gesture dispatch
        let gestures = self.gestures.gestures().to_vec();
        for gesture in gestures {
            self.dispatch_gesture(gesture, dt, ctx);
        }

        // 6. Commands from keys and embedding UI
        let mut commands = self.bindings.resolve(&ctx.input_state);
        commands.extend(ctx.message_bus.drain::<UiCommand<K>>());
        for command in commands {
            self.execute_command(command, ctx);
        }

        // 7. Mode switches
        self.overlays.process_switches(ctx, &mut self.selection, &mut self.detail);

        // 8. Animation
        self.camera.process_focus_requests(ctx);
        let completed = ctx.tweener.advance(dt, &mut ctx.stage);
        for handle in completed {
            self.detail.on_tween_completed(handle, ctx);
        }
        self.camera.set_enabled(ctx.camera_input_enabled);
        self.selection.tick_highlight(dt, &mut ctx.stage);

        // 9. Reset snapshot after the first full tick
        self.camera.capture_initial(&ctx.stage);
    }

    //--- Internal Helpers -------------------------------------------------

    fn run_deferred(&mut self, ctx: &mut GlobalContext) {
        for task in ctx.deferred.take() {
            match task {
                DeferredTask::SelectFeature(feature) => {
                    debug!("Running deferred selection of {:?}", feature);
                    self.selection.select(feature, ctx, &mut self.detail);
                }
            }
        }
    }

    /// Resolves presses that land on UI before gesture classification.
    ///
    /// Blocking UI swallows the press. A UI feature entry selects on the
    /// first click and never arms the double-click gate. In both cases the
    /// press is dropped, so later moves and releases of that pointer have
    /// no contact in the classifier and are ignored.
    fn route_ui_presses(&mut self, events: Vec<InputEvent>, ctx: &mut GlobalContext) -> Vec<InputEvent> {
        let mut accepted = Vec::with_capacity(events.len());
        for event in events {
            let InputEvent::PointerDown { position, .. } = event else {
                accepted.push(event);
                continue;
            };
            match self.hit_tester.hit_test(position, &ctx.stage, &ctx.features) {
                Hit::UiBlocked => trace!("Press at {:?} blocked by UI", position),
                Hit::UiFeature(feature) => {
                    if ctx.selection_input_enabled {
                        debug!("UI entry {:?} pressed", feature);
                        self.selection.select(feature, ctx, &mut self.detail);
                    }
                }
                _ => accepted.push(event),
            }
        }
        accepted
    }

    fn dispatch_gesture(&mut self, gesture: GestureEvent, dt: f32, ctx: &mut GlobalContext) {
        match gesture {
            GestureEvent::SingleClick { position } => {
                trace!("Single click at {:?}", position);
            }
            GestureEvent::ConfirmedSelect { position } => {
                if !ctx.selection_input_enabled {
                    return;
                }
                let hit = self.hit_tester.hit_test(position, &ctx.stage, &ctx.features);
                if let Some(feature) = hit.feature() {
                    self.selection.select(feature, ctx, &mut self.detail);
                }
            }
            GestureEvent::DragStart { axis } => self.camera.on_drag_start(axis),
            GestureEvent::Drag { axis, delta } => {
                if self.detail.phase() == DetailPhase::Active {
                    self.detail.rotate(axis, delta, dt, ctx);
                } else {
                    self.camera.rotate(axis, delta, dt, &mut ctx.stage);
                }
            }
            GestureEvent::DragEnd => self.camera.on_drag_end(),
            GestureEvent::Zoom { delta } => self.camera.zoom(delta, dt, &mut ctx.stage),
            GestureEvent::PinchZoom { delta } => self.camera.pinch(delta, &mut ctx.stage),
        }
    }

    fn execute_command(&mut self, command: UiCommand<K>, ctx: &mut GlobalContext) {
        debug!("Executing {:?}", command);
        match command {
            UiCommand::Back => {
                if self.detail.phase().is_transitioning() {
                    debug!("Ignoring Back during detail transition");
                    return;
                }
                self.selection.clear(ctx, &mut self.detail);
            }
            UiCommand::ResetCamera => {
                if ctx.camera_input_enabled {
                    self.camera.reset_to_initial(ctx);
                }
            }
            UiCommand::ResetDetailRotation => self.detail.reset_rotation(ctx),
            UiCommand::ResetToDefault => self.selection.reset_to_default(ctx, &mut self.detail),
            UiCommand::SwitchOverlay(key) => ctx.message_bus.push(OverlaySwitch(key)),
        }
    }
}

//=========================================================================
// Integration Tests
//=========================================================================
