//=========================================================================
// Message Queue Trait
//=========================================================================
//
// Type-erased storage for one message type. Lets the bus keep a
// HashMap<TypeId, Box<dyn MessageQueue>> and still clear or count a
// queue without knowing its concrete element type.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::Any;

//=== Internal Dependencies ===============================================

use super::Message;

//=========================================================================

/// Type-erased trait for message queue storage and operations.
///
/// Allows clearing queues and querying length without knowing the
/// concrete message type at compile time.
pub(super) trait MessageQueue: Send {
    /// Clears all messages while preserving allocated capacity.
    fn clear_queue(&mut self);

    /// Returns the number of messages currently queued.
    fn len(&self) -> usize;

    /// Returns true if the queue is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Name of the stored message type, for diagnostics.
    fn message_type(&self) -> &'static str;

    /// Downcasts to `&dyn Any` for type-specific operations.
    fn as_any(&self) -> &dyn Any;

    /// Downcasts to `&mut dyn Any` for type-specific operations.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

//=========================================================================

/// Implementation of MessageQueue for Vec<M>.
impl<M: Message> MessageQueue for Vec<M> {
    fn clear_queue(&mut self) {
        self.clear(); // Vec::clear preserves capacity
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn message_type(&self) -> &'static str {
        std::any::type_name::<M>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

//=========================================================================
// Tests
//=========================================================================
