//=========================================================================
// Input Buffer
//
// Collects engine input events between two redraws and splits them into
// the two batches the core expects: discrete and continuous.
//
// Responsibilities:
// - Keep discrete inputs (presses, releases, keys) in arrival order
// - Drop consecutive duplicates of the same discrete input
// - Coalesce pointer moves to the latest position per pointer
// - Accumulate wheel scrolling into a single Scroll event
//
// Notes:
// The buffer lives on the platform thread and is emptied on every
// flush; storage is retained across frames.
//=========================================================================

//=== Standard Library Imports ============================================
use std::collections::HashSet;

//=== Internal Modules ====================================================
use crate::core::input::InputEvent;

//=== InputBuffer Struct ==================================================
//
// Internally maintains:
// - `discrete`: ordered one-shot inputs (PointerDown, KeyUp, DeviceLost)
// - `continuous`: last-known move per pointer (hash ignores position)
// - `scroll`: wheel lines accumulated since the last drain
//
pub(crate) struct InputBuffer {
    discrete: Vec<InputEvent>,
    continuous: HashSet<InputEvent>,
    scroll: f32,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        const DISCRETE_BASE: usize = 64;
        const CONTINUOUS_BASE: usize = 8;

        Self {
            discrete: Vec::with_capacity(DISCRETE_BASE),
            continuous: HashSet::with_capacity(CONTINUOUS_BASE),
            scroll: 0.0,
        }
    }

    //--- Event Intake -----------------------------------------------------
    //
    // Routes an event by its kind. Moves replace the previous move of the
    // same pointer, scroll deltas add up, everything else is discrete.
    //
    pub(crate) fn push(&mut self, event: InputEvent) {
        match event {
            InputEvent::Scroll { delta } => self.scroll += delta,
            InputEvent::PointerMoved { .. } => {
                self.continuous.replace(event);
            }
            InputEvent::Unidentified => {}
            _ => self.push_discrete(event),
        }
    }

    fn push_discrete(&mut self, event: InputEvent) {
        if self.discrete.last() != Some(&event) {
            self.discrete.push(event);
        }
    }

    //--- Drain ------------------------------------------------------------
    //
    // Returns `(discrete, continuous)` for this frame and resets the
    // buffer, or `None` when nothing was collected.
    //
    pub(crate) fn drain(&mut self) -> Option<(Vec<InputEvent>, Vec<InputEvent>)> {
        if self.is_empty() {
            return None;
        }

        let discrete = self.discrete.drain(..).collect();
        let mut continuous: Vec<InputEvent> = self.continuous.drain().collect();
        if self.scroll != 0.0 {
            continuous.push(InputEvent::Scroll { delta: self.scroll });
        }
        self.scroll = 0.0;

        Some((discrete, continuous))
    }

    //--- Utilities --------------------------------------------------------

    pub(crate) fn len(&self) -> usize {
        self.discrete.len() + self.continuous.len() + usize::from(self.scroll != 0.0)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
