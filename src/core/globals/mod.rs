//=========================================================================
// Global Interaction State
//=========================================================================
//
// Separates systems (logic components) from context (shared data).
//
// Architecture:
//   GlobalSystems: gestures, bindings, selection, detail, camera,
//                  overlays (owned by the orchestrator)
//   GlobalContext: stage, features, tweens, display, message bus,
//                  deferred tasks (passed to every system)
//
//=========================================================================

//=== Module Declarations =================================================

mod global_context;
mod global_systems;

//=== Public API ==========================================================

pub use global_context::GlobalContext;
pub use global_systems::GlobalSystems;
