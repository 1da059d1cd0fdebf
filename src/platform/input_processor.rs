//=========================================================================
// Input Processor
//=========================================================================
//
// Converts platform-specific Winit events into engine InputEvents.
//
// Architecture:
//   Winit Events → InputProcessor → InputEvent (engine type) → InputBuffer
//
// Stateful cursor tracking: winit reports mouse buttons without a
// position, so the last CursorMoved position is cached and attached to
// presses and releases. Only the left button drives the globe; key
// repeats and unmapped keys are filtered (returns None).
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use winit::{
    event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta, TouchPhase},
    keyboard::{KeyCode as WinitKeyCode, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::{InputEvent, KeyCode, PointerId};

//=== InputProcessor ======================================================

/// Pixels treated as one wheel line for trackpad (pixel) scrolling.
const PIXELS_PER_LINE: f32 = 40.0;

/// Converts Winit events to engine InputEvents with cursor tracking.
pub(crate) struct InputProcessor {
    cursor: Vec2,
}

impl InputProcessor {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self { cursor: Vec2::ZERO }
    }

    //--- Event Processing -------------------------------------------------

    /// Converts a Winit KeyEvent (filters repeats and unmapped keys).
    pub(crate) fn process_key_event(&self, key_event: &KeyEvent) -> Option<InputEvent> {
        let PhysicalKey::Code(code) = key_event.physical_key else {
            return None;
        };
        self.key_input(code, key_event.state, key_event.repeat)
    }

    /// Records the cursor and emits a mouse move.
    pub(crate) fn process_cursor_move(&mut self, x: f32, y: f32) -> InputEvent {
        self.cursor = Vec2::new(x, y);
        InputEvent::PointerMoved { pointer: PointerId::Mouse, position: self.cursor }
    }

    /// Converts a left-button press/release at the cached cursor.
    pub(crate) fn process_mouse_button(
        &self,
        button: MouseButton,
        state: ElementState,
    ) -> Option<InputEvent> {
        if button != MouseButton::Left {
            return None;
        }
        let (pointer, position) = (PointerId::Mouse, self.cursor);
        Some(match state {
            ElementState::Pressed => InputEvent::PointerDown { pointer, position },
            ElementState::Released => InputEvent::PointerUp { pointer, position },
        })
    }

    /// Converts wheel/trackpad scrolling into lines (positive = away from user).
    pub(crate) fn process_wheel(&self, delta: MouseScrollDelta) -> Option<InputEvent> {
        let lines = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(position) => position.y as f32 / PIXELS_PER_LINE,
        };
        (lines != 0.0).then_some(InputEvent::Scroll { delta: lines })
    }

    /// Converts one touch contact update.
    pub(crate) fn process_touch(&self, id: u64, phase: TouchPhase, x: f32, y: f32) -> InputEvent {
        let (pointer, position) = (PointerId::Touch(id), Vec2::new(x, y));
        match phase {
            TouchPhase::Started => InputEvent::PointerDown { pointer, position },
            TouchPhase::Moved => InputEvent::PointerMoved { pointer, position },
            TouchPhase::Ended => InputEvent::PointerUp { pointer, position },
            TouchPhase::Cancelled => InputEvent::PointerCancelled { pointer },
        }
    }

    /// Focus loss invalidates every held key and pointer.
    pub(crate) fn process_focus(&self, focused: bool) -> Option<InputEvent> {
        (!focused).then_some(InputEvent::DeviceLost)
    }

    //--- Internal Helpers -------------------------------------------------

    fn key_input(&self, code: WinitKeyCode, state: ElementState, repeat: bool) -> Option<InputEvent> {
        if repeat {
            return None;
        }
        let key = KeyCode::from(code);
        if matches!(key, KeyCode::Unidentified) {
            return None;
        }
        Some(match state {
            ElementState::Pressed => InputEvent::KeyDown { key },
            ElementState::Released => InputEvent::KeyUp { key },
        })
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Converts Winit physical key codes to engine key codes.
///
/// Maps the digits (overlay shortcuts) and the command keys. Everything
/// else returns `KeyCode::Unidentified`.
impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Digits -------------------------------------------------------

            Digit0 => KeyCode::Digit0,
            Digit1 => KeyCode::Digit1,
            Digit2 => KeyCode::Digit2,
            Digit3 => KeyCode::Digit3,
            Digit4 => KeyCode::Digit4,
            Digit5 => KeyCode::Digit5,
            Digit6 => KeyCode::Digit6,
            Digit7 => KeyCode::Digit7,
            Digit8 => KeyCode::Digit8,
            Digit9 => KeyCode::Digit9,

            //--- Commands -----------------------------------------------------

            KeyR => KeyCode::KeyR,
            KeyH => KeyCode::KeyH,
            Space => KeyCode::Space,
            Enter => KeyCode::Enter,
            Escape => KeyCode::Escape,
            Backspace => KeyCode::Backspace,

            //--- Unmapped (return Unidentified) -------------------------------

            _ => KeyCode::Unidentified,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    #[test]
    fn buttons_use_cached_cursor() {
        let mut processor = InputProcessor::new();
        processor.process_cursor_move(120.0, 45.0);

        let event = processor.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        match event {
            Some(InputEvent::PointerDown { pointer, position }) => {
                assert_eq!(pointer, PointerId::Mouse);
                assert_eq!(position, Vec2::new(120.0, 45.0));
            }
            other => panic!("Expected PointerDown, got {:?}", other),
        }
    }

    #[test]
    fn only_left_button_is_mapped() {
        let processor = InputProcessor::new();
        assert!(processor.process_mouse_button(MouseButton::Right, ElementState::Pressed).is_none());
        assert!(processor.process_mouse_button(MouseButton::Middle, ElementState::Released).is_none());
    }

    #[test]
    fn key_repeats_are_dropped() {
        let processor = InputProcessor::new();
        assert_eq!(
            processor.key_input(WinitKeyCode::Escape, ElementState::Pressed, false),
            Some(InputEvent::KeyDown { key: KeyCode::Escape })
        );
        assert_eq!(processor.key_input(WinitKeyCode::Escape, ElementState::Pressed, true), None);
    }

    #[test]
    fn unmapped_keys_are_dropped() {
        let processor = InputProcessor::new();
        assert_eq!(processor.key_input(WinitKeyCode::F13, ElementState::Pressed, false), None);
        assert_eq!(KeyCode::from(WinitKeyCode::KeyQ), KeyCode::Unidentified);
    }

    #[test]
    fn wheel_lines_and_pixels() {
        let processor = InputProcessor::new();
        assert_eq!(
            processor.process_wheel(MouseScrollDelta::LineDelta(0.0, 2.0)),
            Some(InputEvent::Scroll { delta: 2.0 })
        );
        match processor.process_wheel(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -80.0))) {
            Some(InputEvent::Scroll { delta }) => assert_eq!(delta, -2.0),
            other => panic!("Expected Scroll, got {:?}", other),
        }
        assert!(processor.process_wheel(MouseScrollDelta::LineDelta(3.0, 0.0)).is_none());
    }

    #[test]
    fn touch_phases_map_to_pointer_events() {
        let processor = InputProcessor::new();
        let pointer = PointerId::Touch(7);

        assert!(matches!(
            processor.process_touch(7, TouchPhase::Started, 1.0, 2.0),
            InputEvent::PointerDown { pointer: p, .. } if p == pointer
        ));
        assert!(matches!(
            processor.process_touch(7, TouchPhase::Moved, 1.0, 2.0),
            InputEvent::PointerMoved { .. }
        ));
        assert!(matches!(
            processor.process_touch(7, TouchPhase::Ended, 1.0, 2.0),
            InputEvent::PointerUp { .. }
        ));
        assert_eq!(
            processor.process_touch(7, TouchPhase::Cancelled, 0.0, 0.0),
            InputEvent::PointerCancelled { pointer }
        );
    }

    #[test]
    fn focus_loss_is_device_lost() {
        let processor = InputProcessor::new();
        assert_eq!(processor.process_focus(false), Some(InputEvent::DeviceLost));
        assert_eq!(processor.process_focus(true), None);
    }
}
