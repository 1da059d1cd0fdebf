//=========================================================================
// Input System
//
// Low-level pointer/keyboard handling for the interaction core.
//
// Responsibilities:
// - Represent platform input as portable `InputEvent`s
// - Track held keys and pressed pointers per frame (`StateTracker`)
// - Disambiguate clicks, double clicks, drags and pinches
//   (`GestureClassifier`)
// - Map pressed keys to UI commands (`KeyBindings`)
//
// Architecture:
// ```text
//   frame batches ─┬─► StateTracker ──► KeyBindings ──► UiCommand
//                  └─► GestureClassifier ─────────────► GestureEvent
// ```
//
// Notes:
// All of this runs inside `GlobalSystems::update`, on the core thread.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod event;
mod bindings;
mod gesture;
mod state_tracker;

//=== Public API ==========================================================

pub use bindings::{KeyBindings, UiCommand};
pub use event::{InputEvent, KeyCode, PointerId};
pub use gesture::{DragAxis, GestureClassifier, GestureEvent};
pub use state_tracker::StateTracker;
