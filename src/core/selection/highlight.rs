//=========================================================================
// Selection Highlight
//=========================================================================
//
// Pulses the colour of the selected feature between its original colour
// and the feature's highlight colour. At most one feature is highlighted
// at a time; starting a new highlight restores the previous one first.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::f32::consts::TAU;

use log::trace;

//=== Internal Dependencies ===============================================

use crate::core::config::HighlightConfig;
use crate::core::feature::{Feature, FeatureId};
use crate::core::stage::{Color, ObjectId, Stage};

//=== Highlighter =========================================================

#[derive(Debug, Clone, Copy)]
struct Pulse {
    feature: FeatureId,
    object: ObjectId,
    original: Color,
    highlight: Color,
    elapsed: f32,
}

/// Colour pulse on the selected feature.
#[derive(Debug, Default)]
pub struct Highlighter {
    config: HighlightConfig,
    active: Option<Pulse>,
}

impl Highlighter {
    pub fn new(config: HighlightConfig) -> Self {
        Self { config, active: None }
    }

    /// Feature currently pulsing.
    pub fn highlighted(&self) -> Option<FeatureId> {
        self.active.map(|p| p.feature)
    }

    /// Seconds the current pulse has been running.
    pub fn elapsed(&self) -> Option<f32> {
        self.active.map(|p| p.elapsed)
    }

    /// Starts pulsing `feature`, restoring any previous highlight.
    pub fn start(&mut self, feature: &Feature, stage: &mut Stage) {
        self.stop(stage);

        let current = stage.color(feature.object).unwrap_or_default();
        self.active = Some(Pulse {
            feature: feature.id(),
            object: feature.object,
            original: feature.override_color.unwrap_or(current),
            highlight: feature.highlight_color,
            elapsed: 0.0,
        });
    }

    /// Advances the pulse and writes the blended colour.
    pub fn tick(&mut self, dt: f32, stage: &mut Stage) {
        let Some(pulse) = self.active.as_mut() else { return };

        pulse.elapsed += dt;
        let t = ((pulse.elapsed * TAU * self.config.pulse_hz).sin() + 1.0) * 0.5;
        let color = pulse.original.lerp(pulse.highlight, t);
        trace!("Highlight {:?} at t={:.2}", pulse.feature, t);
        stage.set_color(pulse.object, color);
    }

    /// Stops pulsing and restores the original colour.
    pub fn stop(&mut self, stage: &mut Stage) {
        if let Some(pulse) = self.active.take() {
            stage.set_color(pulse.object, pulse.original);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
