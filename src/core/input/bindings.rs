//=========================================================================
// Key Bindings
//=========================================================================
//
// Maps keys pressed this frame to UI commands.
//
// Architecture:
//   StateTracker::keys_pressed() → KeyBindings::resolve() → Vec<UiCommand>
//
// Commands are the same values embedding UI code pushes onto the message
// bus (back button, reset button, overlay dropdown), so keyboard and
// on-screen controls share one path through `GlobalSystems`.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::event::KeyCode;
use super::state_tracker::StateTracker;
use crate::core::overlay::OverlayKey;

//=== UiCommand ===========================================================

/// High-level request issued by a key or an on-screen control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiCommand<K: OverlayKey> {
    /// Close the detail view / clear the current selection.
    Back,

    /// Animate the camera back to its initial pose.
    ResetCamera,

    /// Animate the detail object back to its initial rotation.
    ResetDetailRotation,

    /// Clear the selection and show the welcome text.
    ResetToDefault,

    /// Switch to another overlay mode.
    SwitchOverlay(K),
}

//=== KeyBindings =========================================================

/// Key → command table.
pub struct KeyBindings<K: OverlayKey> {
    bindings: HashMap<KeyCode, UiCommand<K>>,
}

impl<K: OverlayKey> KeyBindings<K> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self { bindings: HashMap::new() }
    }

    /// Escape → Back, R → ResetCamera, Space → ResetDetailRotation,
    /// H → ResetToDefault.
    pub fn with_defaults() -> Self {
        let mut bindings = Self::new();
        bindings.bind(KeyCode::Escape, UiCommand::Back);
        bindings.bind(KeyCode::KeyR, UiCommand::ResetCamera);
        bindings.bind(KeyCode::Space, UiCommand::ResetDetailRotation);
        bindings.bind(KeyCode::KeyH, UiCommand::ResetToDefault);
        bindings
    }

    //--- Binding Management -----------------------------------------------

    /// Binds `key`, replacing any previous binding.
    pub fn bind(&mut self, key: KeyCode, command: UiCommand<K>) {
        if matches!(key, KeyCode::Unidentified) {
            warn!("Refusing to bind an unidentified key");
            return;
        }
        if let Some(previous) = self.bindings.insert(key, command) {
            debug!("Key {:?} rebound from {:?} to {:?}", key, previous, command);
        }
    }

    pub fn unbind(&mut self, key: KeyCode) -> Option<UiCommand<K>> {
        self.bindings.remove(&key)
    }

    pub fn command_for(&self, key: KeyCode) -> Option<UiCommand<K>> {
        self.bindings.get(&key).copied()
    }

    //--- Resolution -------------------------------------------------------

    /// Commands for every key pressed this frame, in press order.
    pub fn resolve(&self, state: &StateTracker) -> Vec<UiCommand<K>> {
        state
            .keys_pressed()
            .filter_map(|key| self.command_for(*key))
            .collect()
    }
}

impl<K: OverlayKey> Default for KeyBindings<K> {
    fn default() -> Self {
        Self::with_defaults()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::event::InputEvent;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestMode {
        Relief,
        Climate,
    }

    impl OverlayKey for TestMode {}

    fn pressed(keys: &[KeyCode]) -> StateTracker {
        let mut tracker = StateTracker::new();
        let events: Vec<_> = keys.iter().map(|&key| InputEvent::KeyDown { key }).collect();
        tracker.clear();
        tracker.process_events(&events);
        tracker.finalize_frame();
        tracker
    }

    #[test]
    fn defaults_cover_back_and_resets() {
        let bindings = KeyBindings::<TestMode>::with_defaults();
        assert_eq!(bindings.command_for(KeyCode::Escape), Some(UiCommand::Back));
        assert_eq!(bindings.command_for(KeyCode::KeyR), Some(UiCommand::ResetCamera));
        assert_eq!(bindings.command_for(KeyCode::Space), Some(UiCommand::ResetDetailRotation));
        assert_eq!(bindings.command_for(KeyCode::Digit1), None);
    }

    #[test]
    fn resolve_follows_press_order() {
        let mut bindings = KeyBindings::with_defaults();
        bindings.bind(KeyCode::Digit1, UiCommand::SwitchOverlay(TestMode::Relief));
        bindings.bind(KeyCode::Digit2, UiCommand::SwitchOverlay(TestMode::Climate));

        let state = pressed(&[KeyCode::Digit2, KeyCode::Enter, KeyCode::Escape]);
        assert_eq!(
            bindings.resolve(&state),
            vec![UiCommand::SwitchOverlay(TestMode::Climate), UiCommand::Back]
        );
    }

    #[test]
    fn rebinding_replaces() {
        let mut bindings = KeyBindings::<TestMode>::new();
        bindings.bind(KeyCode::Escape, UiCommand::Back);
        bindings.bind(KeyCode::Escape, UiCommand::ResetToDefault);
        assert_eq!(bindings.command_for(KeyCode::Escape), Some(UiCommand::ResetToDefault));

        assert_eq!(bindings.unbind(KeyCode::Escape), Some(UiCommand::ResetToDefault));
        assert_eq!(bindings.command_for(KeyCode::Escape), None);
    }

    #[test]
    fn unidentified_key_cannot_be_bound() {
        let mut bindings = KeyBindings::<TestMode>::new();
        bindings.bind(KeyCode::Unidentified, UiCommand::Back);
        assert_eq!(bindings.command_for(KeyCode::Unidentified), None);
    }
}
