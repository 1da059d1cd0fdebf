//=========================================================================
// Message Bus
//=========================================================================
//
// Type-safe multi-consumer message queue for inter-system communication.
//
// Architecture:
//   Systems / UI → push<M>() → HashMap<TypeId, Vec<M>>
//                                   ↓
//   Observers ←──────────── read<M>()   (notifications, shared)
//   Processor ←──────────── drain<M>()  (requests, consumed once)
//                                   ↓
//   GlobalSystems ────────→ clear<M>() at tick start (notifications)
//
// Two message flavours travel on the bus:
// - Notifications (SelectionChanged, DetailPhaseChanged, OverlayChanged)
//   stay readable until the start of the next tick.
// - Requests (UiCommand, OverlaySwitch, FocusRequest) are drained by the
//   system that handles them at the tick boundary.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::TypeId;
use std::collections::HashMap;

use log::debug;

//=== Internal Dependencies ===============================================

use super::message_queue::MessageQueue;

//=== Public API ==========================================================

/// Marker trait for types that can be sent through the MessageBus.
///
/// Automatically implemented for all types that are Send + 'static.
pub trait Message: Send + 'static {}

// Blanket implementation
impl<T: Send + 'static> Message for T {}

//=========================================================================

/// Type-safe message queue for batched inter-system communication.
///
/// Maintains separate queues per message type, allowing systems and the
/// embedding UI to push messages between ticks and have them processed
/// at tick boundaries.
pub struct MessageBus {
    queues: HashMap<TypeId, Box<dyn MessageQueue>>,
}

impl MessageBus {
    /// Creates a new empty message bus.
    pub fn new() -> Self {
        MessageBus {
            queues: HashMap::new(),
        }
    }

    //--- Message Operations -----------------------------------------------

    /// Pushes a message into the queue for its type.
    pub fn push<M: Message>(&mut self, msg: M) {
        let type_id = TypeId::of::<M>();

        let boxed_queue: &mut Box<dyn MessageQueue> = self.queues
            .entry(type_id)
            .or_insert_with(|| Box::new(Vec::<M>::new()));

        // Queues are only ever inserted under their own TypeId
        let queue: &mut Vec<M> = boxed_queue
            .as_any_mut()
            .downcast_mut::<Vec<M>>()
            .expect("Type mismatch in MessageBus queue");

        queue.push(msg);
    }

    /// Returns a slice of all messages of type M currently queued.
    ///
    /// Supports multi-consumer pattern: multiple observers can read the
    /// same messages. Call `clear<M>()` once all of them are done.
    pub fn read<M: Message>(&self) -> &[M] {
        self.queues
            .get(&TypeId::of::<M>())
            .and_then(|q| q.as_any().downcast_ref::<Vec<M>>())
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Removes and returns all messages of type M, in push order.
    ///
    /// Used by the single system that handles a request type. Capacity
    /// of the underlying queue is preserved.
    pub fn drain<M: Message>(&mut self) -> Vec<M> {
        self.queues
            .get_mut(&TypeId::of::<M>())
            .and_then(|q| q.as_any_mut().downcast_mut::<Vec<M>>())
            .map(|v| v.drain(..).collect())
            .unwrap_or_default()
    }

    //--- Query API --------------------------------------------------------

    /// Returns true if there are any messages of type M queued.
    pub fn has_messages<M: Message>(&self) -> bool {
        self.count::<M>() > 0
    }

    /// Returns the number of messages of type M currently queued.
    pub fn count<M: Message>(&self) -> usize {
        self.queues
            .get(&TypeId::of::<M>())
            .map(|q| q.len())
            .unwrap_or(0)
    }

    /// Clears all messages of type M, preserving allocated capacity.
    pub fn clear<M: Message>(&mut self) {
        if let Some(queue) = self.queues.get_mut(&TypeId::of::<M>()) {
            queue.clear_queue();
        }
    }

    /// Clears all queues for all message types, preserving capacity.
    ///
    /// Unconsumed messages are reported at debug level.
    pub fn clear_all(&mut self) {
        for queue in self.queues.values_mut() {
            if !queue.is_empty() {
                debug!("Discarding {} pending {}", queue.len(), queue.message_type());
            }
            queue.clear_queue();
        }
    }
}

impl Default for MessageBus {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Tests
//=========================================================================
