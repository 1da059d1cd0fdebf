//=========================================================================
// Selection Coordinator
//=========================================================================
//
// Tracks which feature is selected and keeps its side effects in step:
// highlight pulse, info text, extra objects and the detail view.
//
// Selection Flow:
// ```text
//   select(B) while A selected:
//     clear(A) → highlight off, extras off, A's detail view closed
//     current = B → highlight on, text shown, extras on
//     B has a focus pose → FocusRequest for the camera
//     B detail-capable → detail.activate(B)
//     publish SelectionChanged { previous: A, current: B }
// ```
//
//=========================================================================

//=== Module Declarations =================================================

mod highlight;

//=== Public API ==========================================================

pub use highlight::Highlighter;

//=== External Dependencies ===============================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use crate::core::camera::FocusRequest;
use crate::core::config::HighlightConfig;
use crate::core::detail::{DetailPhase, DetailSessionManager};
use crate::core::feature::FeatureId;
use crate::core::globals::GlobalContext;
use crate::core::stage::Stage;

//=== SelectionChanged ====================================================

/// Bus notification published whenever the selection changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChanged {
    pub previous: Option<FeatureId>,
    pub current: Option<FeatureId>,
}

//=== SelectionCoordinator ================================================

/// Owner of the current selection.
pub struct SelectionCoordinator {
    current: Option<FeatureId>,
    highlighter: Highlighter,
    default_title: String,
    default_body: String,
}

impl SelectionCoordinator {
    pub fn new(
        highlight: HighlightConfig,
        default_title: impl Into<String>,
        default_body: impl Into<String>,
    ) -> Self {
        Self {
            current: None,
            highlighter: Highlighter::new(highlight),
            default_title: default_title.into(),
            default_body: default_body.into(),
        }
    }

    pub fn current(&self) -> Option<FeatureId> {
        self.current
    }

    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }

    //--- Selection --------------------------------------------------------

    /// Selects `id`. Reselecting the current feature does nothing, and
    /// unknown or disabled features are ignored.
    pub fn select(
        &mut self,
        id: FeatureId,
        ctx: &mut GlobalContext,
        detail: &mut DetailSessionManager,
    ) {
        if self.current == Some(id) {
            debug!("Feature {:?} already selected", id);
            return;
        }
        let Some(feature) = ctx.features.get(id).cloned() else {
            debug!("Ignoring selection of unknown feature {:?}", id);
            return;
        };
        if !feature.enabled {
            debug!("Ignoring selection of disabled feature '{}'", feature.name);
            return;
        }

        let previous = self.current;
        if previous.is_some() {
            self.release(ctx, detail);
        }

        info!("Selected '{}'", feature.name);
        self.current = Some(id);
        self.highlighter.start(&feature, &mut ctx.stage);
        ctx.display.show(&feature.name, &feature.text);
        for &object in &feature.extras {
            ctx.stage.set_active(object, true);
        }
        if let Some(pose) = feature.focus {
            ctx.message_bus.push(FocusRequest::new(pose));
        }

        if feature.is_detail_capable() {
            // A closing view of another feature must not block this one
            if detail.phase() != DetailPhase::Inactive {
                detail.force_close(ctx);
            }
            detail.activate(id, ctx);
        }

        ctx.message_bus.push(SelectionChanged { previous, current: Some(id) });
    }

    /// Clears the selection. Calling it with nothing selected does nothing.
    pub fn clear(&mut self, ctx: &mut GlobalContext, detail: &mut DetailSessionManager) {
        let Some(previous) = self.current else { return };

        self.release(ctx, detail);
        info!("Selection cleared");
        ctx.message_bus.push(SelectionChanged { previous: Some(previous), current: None });
    }

    /// Clears the selection and shows the welcome text.
    pub fn reset_to_default(&mut self, ctx: &mut GlobalContext, detail: &mut DetailSessionManager) {
        self.clear(ctx, detail);
        ctx.display.show(&self.default_title, &self.default_body);
    }

    /// Advances the highlight pulse.
    pub fn tick_highlight(&mut self, dt: f32, stage: &mut Stage) {
        self.highlighter.tick(dt, stage);
    }

    //--- Internal Helpers -------------------------------------------------

    /// Undoes the side effects of the current selection without notifying.
    fn release(&mut self, ctx: &mut GlobalContext, detail: &mut DetailSessionManager) {
        let Some(id) = self.current.take() else { return };

        self.highlighter.stop(&mut ctx.stage);
        if let Some(feature) = ctx.features.get(id) {
            for &object in &feature.extras {
                ctx.stage.set_active(object, false);
            }
        }

        if detail.session_feature() == Some(id) {
            match detail.phase() {
                DetailPhase::Active => {
                    detail.deactivate(ctx);
                }
                DetailPhase::Activating | DetailPhase::Deactivating => {
                    detail.force_close(ctx);
                }
                DetailPhase::Inactive => {}
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
