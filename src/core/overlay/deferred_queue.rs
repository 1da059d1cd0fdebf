//=========================================================================
// Deferred Queue
//=========================================================================
//
// Tasks postponed by one tick.
//
// Systems queue tasks here during an update. `GlobalSystems` takes the
// whole queue at the start of the next tick and runs it before any input
// is processed, so a task always sees the fully applied previous tick.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::feature::FeatureId;

//=== DeferredTask ========================================================

/// Work that must wait for the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredTask {
    /// Select a feature once the current mode switch has settled.
    SelectFeature(FeatureId),
}

//=== DeferredQueue =======================================================

/// FIFO of tasks for the next tick.
#[derive(Debug, Default)]
pub struct DeferredQueue {
    queue: Vec<DeferredTask>,
}

impl DeferredQueue {
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    /// Queues a task for the next tick.
    pub fn push(&mut self, task: DeferredTask) {
        self.queue.push(task);
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn clear(&mut self) {
        self.queue.clear()
    }

    /// Takes all queued tasks, leaving the queue empty.
    ///
    /// Tasks queued while the taken ones run wait for the following tick.
    pub fn take(&mut self) -> Vec<DeferredTask> {
        std::mem::take(&mut self.queue)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
