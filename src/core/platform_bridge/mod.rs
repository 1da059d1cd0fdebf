//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges the winit platform layer with the interaction core.
//
// The core never touches winit types: the platform converts window
// events into `InputEvent`s and ships them across this boundary.
//
// Components:
// - `interface`: Event types and error definitions (the contract)
// - `event_collector`: Core-side event collection and buffering
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub(crate) use event_collector::{EventCollector, TickControl};
pub(crate) use interface::PlatformEvent;
pub use interface::PlatformError;
