//=========================================================================
// Input Event Types
//
// Defines the internal representation of low-level input events.
//
// This module abstracts away platform-specific input (Winit mouse, touch
// and keyboard events) into a unified pointer-centric format consumed by
// the state tracker and the gesture classifier.
//
// Responsibilities:
// - Represent keyboard, mouse and touch input in a stable, portable way
// - Treat mouse and touch contacts uniformly as "pointers"
// - Provide equality and hashing semantics for coalescing
// - Carry the "device lost" signal used to abandon gestures cleanly
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    StateTracker + GestureClassifier
//         ↓
//    GestureEvent (semantic: select / drag / zoom)
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::hash::{Hash, Hasher};

//=== External Crates =====================================================

use glam::Vec2;

//=== PointerId ===========================================================

/// Identifies one contact point.
///
/// The mouse is a single, persistent pointer. Every touch contact gets
/// the identifier reported by the platform for the lifetime of that
/// contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerId {
    /// The primary mouse button.
    Mouse,

    /// A touch contact with its platform identifier.
    Touch(u64),
}

impl PointerId {
    /// Returns `true` for touch contacts.
    pub fn is_touch(&self) -> bool {
        matches!(self, Self::Touch(_))
    }
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Only the keys the globe binds by default are named; everything else
/// maps to `Unidentified` and is dropped by the platform layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    /// Number row: 0-9 (overlay shortcuts)
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Letter Keys ------------------------------------------------------

    /// Reset camera
    KeyR,

    /// Return to the welcome text
    KeyH,

    //--- Special Keys -----------------------------------------------------

    /// Spacebar
    Space,

    /// Return/Enter key
    Enter,

    /// Escape key (back out of a detail view)
    Escape,

    /// Backspace key
    Backspace,

    /// Fallback for keys not explicitly mapped by the input layer.
    Unidentified
}

impl KeyCode {
    /// Returns the digit key for `n` (0-9), if any.
    pub fn digit(n: u8) -> Option<Self> {
        use KeyCode::*;
        const DIGITS: [KeyCode; 10] = [
            Digit0, Digit1, Digit2, Digit3, Digit4,
            Digit5, Digit6, Digit7, Digit8, Digit9,
        ];
        DIGITS.get(n as usize).copied()
    }
}

//=== InputEvent ==========================================================

/// Low-level input event from the platform layer.
///
/// # Equality & Hashing Semantics
///
/// Events are compared by type + identity payload (key or pointer).
/// Positions are ignored: two `PointerMoved` events for the same
/// pointer are equal, which lets the input buffer keep only the latest
/// position per pointer each frame.
///
/// ```text
/// Equality Rules:
/// PointerMoved{Mouse, a}    == PointerMoved{Mouse, b}      ✓ (coalesced)
/// PointerMoved{Touch(1), a} == PointerMoved{Touch(2), a}   ✗ (different pointer)
/// PointerDown{Mouse, a}     == PointerUp{Mouse, a}         ✗ (different type)
/// Scroll{1.0}               == Scroll{-3.0}                ✓ (accumulated upstream)
/// ```
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// Key pressed down.
    KeyDown { key: KeyCode },

    /// Key released.
    KeyUp { key: KeyCode },

    /// Pointer pressed (mouse button down or touch began).
    ///
    /// Coordinates are in screen space (pixels, top-left origin).
    PointerDown { pointer: PointerId, position: Vec2 },

    /// Pointer released (mouse button up or touch ended).
    PointerUp { pointer: PointerId, position: Vec2 },

    /// Pointer moved to a new position.
    PointerMoved { pointer: PointerId, position: Vec2 },

    /// The platform cancelled a contact (e.g. touch stolen by the OS).
    ///
    /// Treated as a release without a final position.
    PointerCancelled { pointer: PointerId },

    /// Scroll wheel movement in lines (positive = away from the user).
    Scroll { delta: f32 },

    /// The input device disappeared or the window lost focus.
    ///
    /// Any gesture in progress must be terminated as if released.
    DeviceLost,

    /// Unrecognized or unsupported event, ignored by the core.
    Unidentified
}

//--- Implementation ------------------------------------------------------

impl InputEvent {
    /// Returns the pointer this event refers to, if any.
    pub fn pointer(&self) -> Option<PointerId> {
        match self {
            Self::PointerDown { pointer, .. }
            | Self::PointerUp { pointer, .. }
            | Self::PointerMoved { pointer, .. }
            | Self::PointerCancelled { pointer } => Some(*pointer),
            _ => None,
        }
    }

    /// Returns `true` for events whose latest value supersedes older ones.
    pub fn is_continuous(&self) -> bool {
        matches!(self, Self::PointerMoved { .. } | Self::Scroll { .. })
    }
}

//--- Trait Implementations -----------------------------------------------

impl PartialEq for InputEvent {
    fn eq(&self, other: &Self) -> bool {
        use InputEvent::*;
        match (self, other) {
            (KeyDown { key: a }, KeyDown { key: b }) => a == b,
            (KeyUp { key: a }, KeyUp { key: b }) => a == b,
            (PointerDown { pointer: a, .. }, PointerDown { pointer: b, .. }) => a == b,
            (PointerUp { pointer: a, .. }, PointerUp { pointer: b, .. }) => a == b,
            (PointerMoved { pointer: a, .. }, PointerMoved { pointer: b, .. }) => a == b,
            (PointerCancelled { pointer: a }, PointerCancelled { pointer: b }) => a == b,
            (Scroll { .. }, Scroll { .. }) => true,
            (DeviceLost, DeviceLost) => true,
            (Unidentified, Unidentified) => true,
            _ => false,
        }
    }
}

impl Eq for InputEvent {}

/// Hashes discriminant + key/pointer identity. Positions and scroll
/// amounts are NOT hashed (consistent with equality).
impl Hash for InputEvent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);

        match self {
            Self::KeyDown { key } | Self::KeyUp { key } => key.hash(state),
            Self::PointerDown { pointer, .. }
            | Self::PointerUp { pointer, .. }
            | Self::PointerMoved { pointer, .. }
            | Self::PointerCancelled { pointer } => pointer.hash(state),
            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
