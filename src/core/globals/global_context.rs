//=========================================================================
// Global Context
//=========================================================================
//
// Shared data container for the interaction systems.
//
// Contains state data that systems read/write during a tick:
// - input_state: Low-level input state (keys, pointers, scroll)
// - stage / features: the world the state machines act upon
// - tweener: running animations
// - display: info text sink
// - message_bus: notifications and requests
// - deferred: tasks postponed to the next tick
// - input gates: whether selection and camera input are accepted
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::display::{DisplaySurface, InfoPanel};
use crate::core::feature::FeatureRegistry;
use crate::core::input::{InputEvent, StateTracker};
use crate::core::message_bus::MessageBus;
use crate::core::overlay::DeferredQueue;
use crate::core::stage::Stage;
use crate::core::tween::Tweener;

//=== GlobalContext =======================================================

/// Shared context data accessible to systems during updates.
///
/// This separates world data from the logic held in `GlobalSystems`,
/// so any system can borrow the context mutably while the others stay
/// borrowed from the systems container.
pub struct GlobalContext {
    /// Raw input state tracker for low-level input queries.
    pub input_state: StateTracker,

    /// Objects, backdrop and camera pose.
    pub stage: Stage,

    /// Read-only feature metadata (registered at init).
    pub features: FeatureRegistry,

    /// Running scale/rotation/camera tweens.
    pub tweener: Tweener,

    /// Title/body text panel.
    pub display: Box<dyn DisplaySurface>,

    /// Inter-system messages, also open to the embedding UI.
    pub message_bus: MessageBus,

    /// Tasks executed at the start of the next tick.
    pub deferred: DeferredQueue,

    /// False while a detail view owns the screen.
    pub selection_input_enabled: bool,

    /// False while a detail view owns the screen.
    pub camera_input_enabled: bool,

    /// Seconds since the first tick.
    pub clock: f64,

    /// Input events for the current frame.
    ///
    /// Populated from the platform batches and consumed by
    /// `GlobalSystems::update`.
    pub(crate) frame_events: Vec<Vec<InputEvent>>,
}

impl GlobalContext {
    /// Creates a context with an empty stage and an `InfoPanel` display.
    pub fn new() -> Self {
        Self::with_display(Box::new(InfoPanel::new()))
    }

    /// Creates a context around a custom display surface.
    pub fn with_display(display: Box<dyn DisplaySurface>) -> Self {
        Self {
            input_state: StateTracker::new(),
            stage: Stage::new(),
            features: FeatureRegistry::new(),
            tweener: Tweener::new(),
            display,
            message_bus: MessageBus::new(),
            deferred: DeferredQueue::new(),
            selection_input_enabled: true,
            camera_input_enabled: true,
            clock: 0.0,
            frame_events: Vec::new(),
        }
    }

    /// Queues a batch of input events for the next update.
    pub fn push_input(&mut self, events: Vec<InputEvent>) {
        if !events.is_empty() {
            self.frame_events.push(events);
        }
    }
}

impl Default for GlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
