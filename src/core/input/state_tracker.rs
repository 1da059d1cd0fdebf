//=========================================================================
// State Tracker
//=========================================================================
//
// Low-level input state tracking with per-frame delta tracking.
//
// Architecture:
//   InputEvent → process_events() → keys held / pointers down → query
//
// Frame lifecycle: clear() → process_events() → finalize_frame() → query
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::{HashMap, HashSet};

use glam::Vec2;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode, PointerId};

//=== StateTracker ========================================================

/// Tracks persistent state (keys held, pointers down) and per-frame deltas.
/// Frame lifecycle: clear() → process_events() → finalize_frame() → query.
pub struct StateTracker {
    //--- Persistent State (survives frame boundary) ----------------------
    keys_down: HashSet<KeyCode>,
    pointers_down: HashMap<PointerId, Vec2>,
    pointer_position: Vec2,

    //--- Frame Deltas (reset each frame via clear()) --------------------
    keys_pressed_this_frame: Vec<KeyCode>,
    keys_released_this_frame: Vec<KeyCode>,
    scroll_this_frame: f32,
    device_lost_this_frame: bool,

    //--- Continuous Input (accumulated/calculated) -----------------------
    pointer_delta: Vec2,
    last_pointer_position: Vec2,
}

impl StateTracker {
    /// Creates a new state tracker with empty state.
    pub fn new() -> Self {
        Self {
            keys_down: HashSet::new(),
            pointers_down: HashMap::new(),
            pointer_position: Vec2::ZERO,
            keys_pressed_this_frame: Vec::new(),
            keys_released_this_frame: Vec::new(),
            scroll_this_frame: 0.0,
            device_lost_this_frame: false,
            pointer_delta: Vec2::ZERO,
            last_pointer_position: Vec2::ZERO,
        }
    }

    //--- Frame Processing -------------------------------------------------

    /// Clears frame-specific deltas (pressed/released flags, scroll).
    pub(crate) fn clear(&mut self) {
        self.keys_pressed_this_frame.clear();
        self.keys_released_this_frame.clear();
        self.scroll_this_frame = 0.0;
        self.device_lost_this_frame = false;
        self.last_pointer_position = self.pointer_position;
    }

    /// Processes input events, updating internal state.
    pub(crate) fn process_events(&mut self, events: &[InputEvent]) {
        for event in events {
            self.process_event(event);
        }
    }

    /// Finalizes frame calculations (calculates pointer delta).
    pub(crate) fn finalize_frame(&mut self) {
        self.pointer_delta = self.pointer_position - self.last_pointer_position;
    }

    //--- Internal Helpers -------------------------------------------------
    fn process_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown { key } => {
                // Only mark as pressed if it wasn't already down
                if self.keys_down.insert(key) {
                    self.keys_pressed_this_frame.push(key);
                }
            }

            InputEvent::KeyUp { key } => {
                // Only mark as released if it was actually down
                if self.keys_down.remove(&key) {
                    self.keys_released_this_frame.push(key);
                }
            }

            InputEvent::PointerDown { pointer, position } => {
                self.pointers_down.insert(pointer, position);
                self.pointer_position = position;
            }

            InputEvent::PointerMoved { pointer, position } => {
                if let Some(slot) = self.pointers_down.get_mut(&pointer) {
                    *slot = position;
                }
                if pointer == PointerId::Mouse || self.pointers_down.contains_key(&pointer) {
                    self.pointer_position = position;
                }
            }

            InputEvent::PointerUp { pointer, position } => {
                self.pointers_down.remove(&pointer);
                self.pointer_position = position;
            }

            InputEvent::PointerCancelled { pointer } => {
                self.pointers_down.remove(&pointer);
            }

            InputEvent::Scroll { delta } => {
                self.scroll_this_frame += delta;
            }

            InputEvent::DeviceLost => {
                // Held state is unreliable once focus is gone
                self.keys_down.clear();
                self.pointers_down.clear();
                self.device_lost_this_frame = true;
            }

            InputEvent::Unidentified => {
                // Ignore unrecognized events
            }
        }
    }

    //=====================================================================
    // Query API - Keyboard
    //=====================================================================

    /// Returns `true` if key transitioned UP → DOWN (one frame only).
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed_this_frame.contains(&key)
    }

    /// Returns `true` while key is held.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Returns `true` if key transitioned DOWN → UP.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys_released_this_frame.contains(&key)
    }

    /// Keys pressed this frame, in arrival order.
    pub fn keys_pressed(&self) -> impl Iterator<Item = &KeyCode> {
        self.keys_pressed_this_frame.iter()
    }

    /// Keys released this frame, in arrival order.
    pub fn keys_released(&self) -> impl Iterator<Item = &KeyCode> {
        self.keys_released_this_frame.iter()
    }

    //=====================================================================
    // Query API - Pointers
    //=====================================================================

    /// Returns `true` while the pointer is pressed.
    pub fn is_pointer_down(&self, pointer: PointerId) -> bool {
        self.pointers_down.contains_key(&pointer)
    }

    /// Number of pointers currently pressed (mouse + touches).
    pub fn pointer_count(&self) -> usize {
        self.pointers_down.len()
    }

    /// Last known position of the most recently active pointer
    /// (pixels, top-left origin).
    pub fn pointer_position(&self) -> Vec2 {
        self.pointer_position
    }

    /// Pointer movement since last frame (zero if no movement).
    pub fn pointer_delta(&self) -> Vec2 {
        self.pointer_delta
    }

    //=====================================================================
    // Query API - Misc
    //=====================================================================

    /// Scroll lines accumulated this frame.
    pub fn scroll(&self) -> f32 {
        self.scroll_this_frame
    }

    /// Returns `true` if the device was lost during this frame.
    pub fn device_lost(&self) -> bool {
        self.device_lost_this_frame
    }
}

//--- Trait Implementations -----------------------------------------------

impl Default for StateTracker {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
