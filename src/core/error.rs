//=========================================================================
// Setup Errors
//=========================================================================
//
// Errors detected while wiring the interaction core at startup.
//
// Runtime misuse (invalid phase transitions, stale input) is never an
// error: those are silent no-ops logged at debug level. Only missing or
// inconsistent references found during `GlobalSystems::init` surface
// here, and the boundary logs them and disables the affected component.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::feature::FeatureId;
use crate::core::stage::ObjectId;

//=== SetupError ==========================================================

/// Missing or inconsistent reference found at startup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SetupError {
    /// No camera pose was registered on the stage.
    #[error("no camera registered on the stage")]
    MissingCamera,

    /// A component references an object the stage does not know.
    #[error("object {0:?} is not registered on the stage")]
    UnknownObject(ObjectId),

    /// A component references a feature the registry does not know.
    #[error("feature {0:?} is not registered")]
    UnknownFeature(FeatureId),

    /// An overlay mode key was used before being registered.
    #[error("overlay mode {0} is not registered")]
    UnknownMode(String),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

//=========================================================================
// Unit Tests
//=========================================================================
