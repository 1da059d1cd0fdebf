//=========================================================================
// Gesture Classifier
//=========================================================================
//
// Turns raw pointer events into semantic gestures.
//
// Architecture:
//   InputEvent (pointer/scroll) → process_events(events, now) → gestures()
//
// Rules:
// - Press:  double-click gate (time + distance) → ConfirmedSelect, else
//           arm the gate → SingleClick. In single-click mode every press
//           confirms.
// - Move:   cumulative displacement since press ≥ axis_lock_threshold
//           locks the dominant axis → DragStart, then Drag on that axis
//           only until release → DragEnd.
// - Touch:  a second contact cancels the drag and switches to pinch;
//           single-contact handling resumes once every contact is gone.
// - Lost:   DeviceLost / PointerCancelled end the gesture as a release.
// - Wheel:  Scroll → Zoom.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::BTreeMap;

use glam::Vec2;
use log::{debug, trace};

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, PointerId};
use crate::core::config::GestureConfig;

//=== DragAxis ============================================================

/// Axis a drag is locked onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragAxis {
    Horizontal,
    Vertical,
}

impl DragAxis {
    /// Picks the component of `delta` along this axis.
    pub fn component(self, delta: Vec2) -> f32 {
        match self {
            DragAxis::Horizontal => delta.x,
            DragAxis::Vertical => delta.y,
        }
    }

    fn dominant(delta: Vec2) -> Self {
        if delta.x.abs() >= delta.y.abs() {
            DragAxis::Horizontal
        } else {
            DragAxis::Vertical
        }
    }
}

//=== GestureEvent ========================================================

/// Semantic gesture emitted by the classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// First press of a potential double click.
    SingleClick { position: Vec2 },

    /// Press that passed the double-click gate (or any press in
    /// single-click mode).
    ConfirmedSelect { position: Vec2 },

    DragStart { axis: DragAxis },

    /// Movement along the locked axis, in pixels.
    Drag { axis: DragAxis, delta: f32 },

    DragEnd,

    /// Scroll wheel, in lines (positive = away from the user).
    Zoom { delta: f32 },

    /// Change in distance between two touches, in pixels.
    PinchZoom { delta: f32 },
}

//=== GestureClassifier ===================================================

#[derive(Debug, Clone, Copy)]
struct Contact {
    pointer: PointerId,
    press_position: Vec2,
    last_position: Vec2,
    axis: Option<DragAxis>,
}

/// Single global pointer disambiguator.
pub struct GestureClassifier {
    config: GestureConfig,
    enabled: bool,

    //--- Double-Click Gate ------------------------------------------------
    armed_at: Option<f64>,
    armed_position: Option<Vec2>,

    //--- Drag -------------------------------------------------------------
    primary: Option<Contact>,

    //--- Multi-Touch ------------------------------------------------------
    touches: BTreeMap<u64, Vec2>,
    pinching: bool,
    pinch_distance: Option<f32>,

    //--- Output -----------------------------------------------------------
    gestures: Vec<GestureEvent>,
}

impl GestureClassifier {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            enabled: true,
            armed_at: None,
            armed_position: None,
            primary: None,
            touches: BTreeMap::new(),
            pinching: false,
            pinch_distance: None,
            gestures: Vec::with_capacity(8),
        }
    }

    //--- Configuration ----------------------------------------------------

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Enables or disables classification. Either way all transient
    /// state is dropped, so a re-enabled classifier starts fresh.
    pub fn set_enabled(&mut self, enabled: bool) {
        debug!("Gesture classifier {}", if enabled { "enabled" } else { "disabled" });
        self.enabled = enabled;
        self.reset();
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Forgets every in-progress gesture and the double-click arm.
    pub fn reset(&mut self) {
        self.armed_at = None;
        self.armed_position = None;
        self.primary = None;
        self.touches.clear();
        self.pinching = false;
        self.pinch_distance = None;
    }

    //--- Frame Processing -------------------------------------------------

    /// Classifies one frame of events. `now` is the tick clock in seconds.
    pub fn process_events(&mut self, events: &[InputEvent], now: f64) {
        self.gestures.clear();
        if !self.enabled {
            return;
        }
        for event in events {
            self.process_event(event, now);
        }
    }

    /// Gestures recognised during the last `process_events` call.
    pub fn gestures(&self) -> &[GestureEvent] {
        &self.gestures
    }

    //--- Query API --------------------------------------------------------

    pub fn is_dragging(&self) -> bool {
        self.primary.map(|c| c.axis.is_some()).unwrap_or(false)
    }

    pub fn locked_axis(&self) -> Option<DragAxis> {
        self.primary.and_then(|c| c.axis)
    }

    pub fn is_pinching(&self) -> bool {
        self.pinching
    }

    //--- Internal Helpers -------------------------------------------------

    fn process_event(&mut self, event: &InputEvent, now: f64) {
        match *event {
            InputEvent::PointerDown { pointer, position } => self.on_press(pointer, position, now),
            InputEvent::PointerMoved { pointer, position } => self.on_move(pointer, position),
            InputEvent::PointerUp { pointer, .. } | InputEvent::PointerCancelled { pointer } => {
                self.on_release(pointer)
            }
            InputEvent::Scroll { delta } => {
                if delta != 0.0 {
                    self.gestures.push(GestureEvent::Zoom { delta });
                }
            }
            InputEvent::DeviceLost => self.on_device_lost(),
            InputEvent::KeyDown { .. } | InputEvent::KeyUp { .. } | InputEvent::Unidentified => {}
        }
    }

    fn on_press(&mut self, pointer: PointerId, position: Vec2, now: f64) {
        if let PointerId::Touch(id) = pointer {
            self.touches.insert(id, position);

            if self.touches.len() >= 2 {
                if !self.pinching {
                    trace!("Second touch: switching to pinch");
                    self.end_drag();
                    self.pinching = true;
                }
                self.pinch_distance = self.current_pinch_distance();
                return;
            }
        }

        if self.pinching || self.primary.is_some() {
            return;
        }

        self.classify_click(position, now);
        self.primary = Some(Contact {
            pointer,
            press_position: position,
            last_position: position,
            axis: None,
        });
    }

    fn classify_click(&mut self, position: Vec2, now: f64) {
        if !self.config.require_double_click {
            self.gestures.push(GestureEvent::ConfirmedSelect { position });
            return;
        }

        let in_time = self
            .armed_at
            .map(|at| now - at <= self.config.double_click_threshold as f64)
            .unwrap_or(false);
        let in_range = self
            .armed_position
            .map(|p| p.distance(position) <= self.config.double_click_max_move_px)
            .unwrap_or(true);

        if in_time && in_range {
            self.armed_at = None;
            self.armed_position = None;
            self.gestures.push(GestureEvent::ConfirmedSelect { position });
        } else {
            self.armed_at = Some(now);
            self.armed_position = Some(position);
            self.gestures.push(GestureEvent::SingleClick { position });
        }
    }

    fn on_move(&mut self, pointer: PointerId, position: Vec2) {
        if let PointerId::Touch(id) = pointer {
            match self.touches.get_mut(&id) {
                Some(slot) => *slot = position,
                None => return,
            }

            if self.pinching {
                let distance = self.current_pinch_distance();
                if let (Some(previous), Some(current)) = (self.pinch_distance, distance) {
                    let delta = current - previous;
                    if delta != 0.0 {
                        self.gestures.push(GestureEvent::PinchZoom { delta });
                    }
                }
                self.pinch_distance = distance;
                return;
            }
        }

        let threshold = self.config.axis_lock_threshold;
        let Some(contact) = self.primary.as_mut().filter(|c| c.pointer == pointer) else {
            return;
        };

        let frame_delta = position - contact.last_position;
        contact.last_position = position;

        let axis = match contact.axis {
            Some(axis) => axis,
            None => {
                let cumulative = position - contact.press_position;
                if cumulative.abs().max_element() < threshold {
                    return;
                }
                let axis = DragAxis::dominant(cumulative);
                contact.axis = Some(axis);
                trace!("Drag locked to {:?}", axis);
                self.gestures.push(GestureEvent::DragStart { axis });
                axis
            }
        };

        let delta = axis.component(frame_delta);
        if delta != 0.0 {
            self.gestures.push(GestureEvent::Drag { axis, delta });
        }
    }

    fn on_release(&mut self, pointer: PointerId) {
        if let PointerId::Touch(id) = pointer {
            if self.touches.remove(&id).is_none() {
                return;
            }
            if self.pinching {
                if self.touches.is_empty() {
                    trace!("All touches released: pinch finished");
                    self.pinching = false;
                    self.pinch_distance = None;
                } else {
                    self.pinch_distance = self.current_pinch_distance();
                }
                return;
            }
        }

        if self.primary.map(|c| c.pointer == pointer).unwrap_or(false) {
            self.end_drag();
        }
    }

    fn on_device_lost(&mut self) {
        debug!("Input device lost: abandoning gesture");
        self.end_drag();
        self.touches.clear();
        self.pinching = false;
        self.pinch_distance = None;
    }

    /// Emits DragEnd if a drag was locked, then drops the primary contact.
    fn end_drag(&mut self) {
        if let Some(contact) = self.primary.take() {
            if contact.axis.is_some() {
                self.gestures.push(GestureEvent::DragEnd);
            }
        }
    }

    fn current_pinch_distance(&self) -> Option<f32> {
        let mut positions = self.touches.values();
        match (positions.next(), positions.next()) {
            (Some(a), Some(b)) => Some(a.distance(*b)),
            _ => None,
        }
    }
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //--- Test Helpers -----------------------------------------------------

    fn down(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerDown { pointer: PointerId::Mouse, position: Vec2::new(x, y) }
    }

    fn up(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerUp { pointer: PointerId::Mouse, position: Vec2::new(x, y) }
    }

    fn moved(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerMoved { pointer: PointerId::Mouse, position: Vec2::new(x, y) }
    }

    fn touch_down(id: u64, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerDown { pointer: PointerId::Touch(id), position: Vec2::new(x, y) }
    }

    fn touch_move(id: u64, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerMoved { pointer: PointerId::Touch(id), position: Vec2::new(x, y) }
    }

    fn touch_up(id: u64) -> InputEvent {
        InputEvent::PointerUp { pointer: PointerId::Touch(id), position: Vec2::ZERO }
    }

    fn classifier() -> GestureClassifier {
        GestureClassifier::new(GestureConfig::default())
    }

    fn classifier_with_move_limit(pixels: f32) -> GestureClassifier {
        GestureClassifier::new(GestureConfig::default().with_double_click_max_move(pixels))
    }

    fn confirmed(gestures: &[GestureEvent]) -> bool {
        gestures.iter().any(|g| matches!(g, GestureEvent::ConfirmedSelect { .. }))
    }

    //=====================================================================
    // Double-Click Gate Tests
    //=====================================================================

    #[test]
    fn first_press_is_single_click() {
        let mut gc = classifier();
        gc.process_events(&[down(10.0, 10.0)], 1.0);
        assert_eq!(gc.gestures(), &[GestureEvent::SingleClick { position: Vec2::new(10.0, 10.0) }]);
    }

    #[test]
    fn second_press_within_threshold_confirms() {
        let mut gc = classifier();
        gc.process_events(&[down(10.0, 10.0), up(10.0, 10.0)], 1.0);
        gc.process_events(&[down(12.0, 10.0)], 1.25);

        assert!(confirmed(gc.gestures()));
    }

    #[test]
    fn second_press_after_threshold_re_arms() {
        let mut gc = classifier();
        gc.process_events(&[down(10.0, 10.0), up(10.0, 10.0)], 1.0);
        gc.process_events(&[down(10.0, 10.0), up(10.0, 10.0)], 1.5);

        assert!(!confirmed(gc.gestures()));
        assert!(matches!(gc.gestures()[0], GestureEvent::SingleClick { .. }));

        // The late press armed the gate again.
        gc.process_events(&[down(10.0, 10.0)], 1.6);
        assert!(confirmed(gc.gestures()));
    }

    #[test]
    fn distance_gate_rejects_far_second_press() {
        let mut gc = classifier_with_move_limit(20.0);
        gc.process_events(&[down(0.0, 0.0), up(0.0, 0.0)], 1.0);
        gc.process_events(&[down(100.0, 0.0)], 1.1);
        assert!(!confirmed(gc.gestures()));
    }

    #[test]
    fn distance_gate_accepts_within_limit() {
        let mut gc = classifier_with_move_limit(150.0);
        gc.process_events(&[down(0.0, 0.0), up(0.0, 0.0)], 1.0);
        gc.process_events(&[down(100.0, 0.0)], 1.1);
        assert!(confirmed(gc.gestures()));
    }

    #[test]
    fn press_at_time_zero_arms_the_gate() {
        let mut gc = classifier();
        gc.process_events(&[down(0.0, 0.0), up(0.0, 0.0)], 0.0);
        assert!(!confirmed(gc.gestures()));

        gc.process_events(&[down(0.0, 0.0)], 0.25);
        assert!(confirmed(gc.gestures()));
    }

    #[test]
    fn presses_half_a_second_apart_do_not_confirm() {
        let mut gc = classifier();
        gc.process_events(&[down(0.0, 0.0), up(0.0, 0.0)], 0.0);
        assert!(matches!(gc.gestures().first(), Some(GestureEvent::SingleClick { .. })));

        gc.process_events(&[down(0.0, 0.0), up(0.0, 0.0)], 0.5);
        assert!(!confirmed(gc.gestures()));
        assert!(matches!(gc.gestures().first(), Some(GestureEvent::SingleClick { .. })));
    }

    #[test]
    fn distance_gate_from_time_zero() {
        let mut near = classifier_with_move_limit(150.0);
        near.process_events(&[down(0.0, 0.0), up(0.0, 0.0)], 0.0);
        near.process_events(&[down(100.0, 0.0)], 0.1);
        assert!(confirmed(near.gestures()));

        let mut far = classifier_with_move_limit(20.0);
        far.process_events(&[down(0.0, 0.0), up(0.0, 0.0)], 0.0);
        far.process_events(&[down(100.0, 0.0)], 0.1);
        assert!(!confirmed(far.gestures()));
    }

    #[test]
    fn gates_are_inclusive_at_the_limits() {
        let config = GestureConfig::default()
            .with_double_click_threshold(0.25)
            .with_double_click_max_move(20.0);

        let mut gc = GestureClassifier::new(config.clone());
        gc.process_events(&[down(0.0, 0.0), up(0.0, 0.0)], 1.0);
        gc.process_events(&[down(20.0, 0.0)], 1.25);
        assert!(confirmed(gc.gestures()), "exactly at both limits");

        let mut gc = GestureClassifier::new(config);
        gc.process_events(&[down(0.0, 0.0), up(0.0, 0.0)], 1.0);
        gc.process_events(&[down(20.5, 0.0)], 1.1);
        assert!(!confirmed(gc.gestures()), "just past the distance limit");
    }

    #[test]
    fn confirm_clears_the_arm() {
        let mut gc = classifier();
        gc.process_events(&[down(0.0, 0.0), up(0.0, 0.0)], 1.0);
        gc.process_events(&[down(0.0, 0.0), up(0.0, 0.0)], 1.1);
        gc.process_events(&[down(0.0, 0.0)], 1.2);

        assert!(!confirmed(gc.gestures()), "third press starts a new pair");
    }

    #[test]
    fn single_click_mode_confirms_every_press() {
        let mut gc = GestureClassifier::new(GestureConfig::default().with_require_double_click(false));
        gc.process_events(&[down(5.0, 5.0)], 0.0);
        assert_eq!(gc.gestures(), &[GestureEvent::ConfirmedSelect { position: Vec2::new(5.0, 5.0) }]);
    }

    //=====================================================================
    // Drag Tests
    //=====================================================================

    #[test]
    fn movement_below_threshold_emits_nothing() {
        let mut gc = classifier();
        gc.process_events(&[down(0.0, 0.0)], 0.0);
        gc.process_events(&[moved(3.0, 2.0)], 0.02);
        assert!(gc.gestures().is_empty());
        assert!(!gc.is_dragging());
    }

    #[test]
    fn axis_lock_persists_after_lock() {
        let mut gc = classifier();
        gc.process_events(&[down(0.0, 0.0)], 0.0);

        gc.process_events(&[moved(30.0, 5.0)], 0.02);
        assert_eq!(
            gc.gestures(),
            &[
                GestureEvent::DragStart { axis: DragAxis::Horizontal },
                GestureEvent::Drag { axis: DragAxis::Horizontal, delta: 30.0 },
            ]
        );

        // Purely vertical motion afterwards stays on the horizontal axis.
        gc.process_events(&[moved(30.0, 80.0)], 0.04);
        assert!(gc.gestures().is_empty());

        gc.process_events(&[moved(40.0, 200.0)], 0.06);
        assert_eq!(gc.gestures(), &[GestureEvent::Drag { axis: DragAxis::Horizontal, delta: 10.0 }]);
        assert_eq!(gc.locked_axis(), Some(DragAxis::Horizontal));
    }

    #[test]
    fn cumulative_movement_locks_axis() {
        let mut gc = classifier();
        gc.process_events(&[down(0.0, 0.0)], 0.0);
        gc.process_events(&[moved(0.0, 3.0)], 0.02);
        gc.process_events(&[moved(1.0, 6.0)], 0.04);

        assert_eq!(gc.gestures()[0], GestureEvent::DragStart { axis: DragAxis::Vertical });
    }

    #[test]
    fn release_ends_drag() {
        let mut gc = classifier();
        gc.process_events(&[down(0.0, 0.0), moved(20.0, 0.0), up(20.0, 0.0)], 0.0);
        assert_eq!(gc.gestures().last(), Some(&GestureEvent::DragEnd));
        assert!(!gc.is_dragging());
    }

    #[test]
    fn tap_release_emits_no_drag_end() {
        let mut gc = classifier();
        gc.process_events(&[down(0.0, 0.0), up(0.0, 0.0)], 0.0);
        assert!(!gc.gestures().contains(&GestureEvent::DragEnd));
    }

    #[test]
    fn device_lost_terminates_drag() {
        let mut gc = classifier();
        gc.process_events(&[down(0.0, 0.0), moved(20.0, 0.0)], 0.0);
        gc.process_events(&[InputEvent::DeviceLost], 0.02);

        assert_eq!(gc.gestures(), &[GestureEvent::DragEnd]);
        gc.process_events(&[moved(60.0, 0.0)], 0.04);
        assert!(gc.gestures().is_empty(), "moves after loss are stale");
    }

    #[test]
    fn pointer_cancel_acts_as_release() {
        let mut gc = classifier();
        gc.process_events(&[touch_down(1, 0.0, 0.0), touch_move(1, 0.0, 30.0)], 0.0);
        gc.process_events(&[InputEvent::PointerCancelled { pointer: PointerId::Touch(1) }], 0.02);
        assert_eq!(gc.gestures(), &[GestureEvent::DragEnd]);
    }

    //=====================================================================
    // Multi-Touch Tests
    //=====================================================================

    #[test]
    fn second_touch_cancels_drag_and_pinches() {
        let mut gc = classifier();
        gc.process_events(&[touch_down(1, 0.0, 0.0), touch_move(1, 20.0, 0.0)], 0.0);
        assert!(gc.is_dragging());

        gc.process_events(&[touch_down(2, 120.0, 0.0)], 0.02);
        assert_eq!(gc.gestures(), &[GestureEvent::DragEnd]);
        assert!(gc.is_pinching());

        gc.process_events(&[touch_move(2, 140.0, 0.0)], 0.04);
        assert_eq!(gc.gestures(), &[GestureEvent::PinchZoom { delta: 20.0 }]);
    }

    #[test]
    fn single_touch_resumes_only_after_all_released() {
        let mut gc = classifier();
        gc.process_events(&[touch_down(1, 0.0, 0.0), touch_down(2, 50.0, 0.0)], 0.0);
        gc.process_events(&[touch_up(2)], 0.02);

        // One finger still down: movement is not a drag.
        gc.process_events(&[touch_move(1, 40.0, 0.0)], 0.04);
        assert!(gc.gestures().is_empty());

        gc.process_events(&[touch_up(1)], 0.06);
        assert!(!gc.is_pinching());

        gc.process_events(&[touch_down(3, 0.0, 0.0), touch_move(3, 30.0, 0.0)], 0.5);
        assert!(gc.is_dragging());
    }

    //=====================================================================
    // Misc Tests
    //=====================================================================

    #[test]
    fn scroll_becomes_zoom() {
        let mut gc = classifier();
        gc.process_events(&[InputEvent::Scroll { delta: 2.0 }], 0.0);
        assert_eq!(gc.gestures(), &[GestureEvent::Zoom { delta: 2.0 }]);
    }

    #[test]
    fn disabled_classifier_ignores_input_and_resets() {
        let mut gc = classifier();
        gc.process_events(&[down(0.0, 0.0), up(0.0, 0.0)], 1.0);

        gc.set_enabled(false);
        gc.process_events(&[down(0.0, 0.0)], 1.1);
        assert!(gc.gestures().is_empty());

        gc.set_enabled(true);
        gc.process_events(&[down(0.0, 0.0)], 1.15);
        assert!(!confirmed(gc.gestures()), "arm was cleared by re-enable");
    }
}
