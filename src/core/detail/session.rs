//=========================================================================
// Detail Session
//=========================================================================
//
// Phase enum and the bookkeeping of one open (or opening/closing)
// detail view.
//
// Phase Flow:
// ```text
//   Inactive ──activate──► Activating ──anchor done──► Active
//      ▲                                                 │
//      └──anchor done── Deactivating ◄──deactivate───────┘
//
//   force_close: any non-Inactive phase ──► Inactive (immediately)
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::{Quat, Vec3};

//=== Internal Dependencies ===============================================

use crate::core::feature::FeatureId;
use crate::core::stage::ObjectId;
use crate::core::tween::TweenHandle;

//=== DetailPhase =========================================================

/// Lifecycle phase of the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DetailPhase {
    #[default]
    Inactive,
    Activating,
    Active,
    Deactivating,
}

impl DetailPhase {
    /// Opening or closing animation in flight.
    pub fn is_transitioning(self) -> bool {
        matches!(self, DetailPhase::Activating | DetailPhase::Deactivating)
    }
}

//=== DetailPhaseChanged ==================================================

/// Bus notification published on every phase change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailPhaseChanged {
    /// Feature owning the session (None once fully closed by teardown).
    pub feature: Option<FeatureId>,
    pub phase: DetailPhase,
}

//=== DetailSession =======================================================

/// State captured while a detail view is open.
#[derive(Debug, Clone)]
pub(crate) struct DetailSession {
    pub feature: FeatureId,
    pub world_root: ObjectId,
    pub world_root_scale: Vec3,
    pub detail_object: ObjectId,
    pub initial_rotation: Quat,

    /// Growth tween while opening, world-root restore while closing.
    /// The only completion that changes the phase.
    pub anchor: Option<TweenHandle>,

    /// Shrink tween of the detail object while closing.
    pub detail_hide: Option<TweenHandle>,

    /// Ambient UI objects this session hid.
    pub hidden_ui: Vec<ObjectId>,

    /// Colliders of other detail-capable features this session disabled.
    pub disabled_colliders: Vec<ObjectId>,
}
