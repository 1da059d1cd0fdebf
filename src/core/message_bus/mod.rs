//=========================================================================
// Message Bus
//=========================================================================
//
// Tick-boundary messaging between the interaction systems and the
// embedding UI.
//
// Components:
// - `message_bus`: per-type queues with push/read/drain/clear
// - `message_queue`: type-erased queue storage
//
//=========================================================================

//=== Module Declarations =================================================

mod message_bus;
mod message_queue;

//=== Public API ==========================================================

pub use message_bus::{Message, MessageBus};
