//=========================================================================
// Globe Engine Library Root
//
// This crate defines the public API surface of the globe interaction
// runtime.
//
// Responsibilities:
// - Expose the runtime facade (`Engine`, `EngineBuilder`)
// - Expose the interaction core (`core`) for hosts that drive ticks
//   themselves
// - Keep the winit integration (`platform`) hidden from end users
//
// Typical usage:
// ```no_run
// use globe_engine::prelude::*;
//
// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
// enum Overlay { Physical }
// impl OverlayKey for Overlay {}
//
// fn main() {
//     EngineBuilder::<Overlay>::new()
//         .build()
//         .init(|_systems, ctx| {
//             ctx.stage.set_camera(CameraPose::new(Quat::IDENTITY, 10.0));
//         })
//         .run();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the frame-driven state machines (gestures, selection,
// detail views, camera, overlays) and the world model they act upon.
// Nothing in it depends on winit.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the window and converts winit events into core input.
// `engine` wires platform and core threads together.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use crate::core::platform_bridge::PlatformError;
pub use engine::{Engine, EngineBuilder};
