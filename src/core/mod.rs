//=========================================================================
// Core Systems Orchestrator
//
// Runs the interaction core on its own thread at a fixed tick rate.
//
// Responsibilities:
// - Own the interaction systems (`GlobalSystems`) and their shared
//   data (`GlobalContext`)
// - Receive input batches from the platform over a crossbeam channel
// - Tick every system once per frame with a fixed `dt`
//
// Notes:
// The orchestrator runs independently from the platform layer.
// Communication with the platform occurs only through message passing,
// so nothing in `core` ever touches a winit type.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod camera;
pub mod config;
pub mod detail;
pub mod display;
pub mod error;
pub mod feature;
pub mod globals;
pub mod hit_test;
pub mod input;
pub mod message_bus;
pub mod overlay;
pub(crate) mod platform_bridge;
pub mod selection;
pub mod stage;
pub mod tween;

//=== Public API ==========================================================

pub use globals::{GlobalContext, GlobalSystems};
pub use overlay::OverlayKey;

//=== External Dependencies ===============================================

use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;
use log::info;

//=== Internal Dependencies ===============================================

use crate::core::config::InteractionConfig;
use platform_bridge::{EventCollector, PlatformEvent, TickControl};

//=== CoreSystemsOrchestrator =============================================

/// Owner of the interaction systems and their tick thread.
pub(crate) struct CoreSystemsOrchestrator<K: OverlayKey> {
    systems: GlobalSystems<K>,
    context: GlobalContext,
}

impl<K: OverlayKey> CoreSystemsOrchestrator<K> {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(config: InteractionConfig) -> Self {
        Self {
            systems: GlobalSystems::new(config),
            context: GlobalContext::new(),
        }
    }

    /// Gives the embedding application access to systems and world data
    /// before the tick thread starts.
    pub(crate) fn init_systems<F>(&mut self, init_fn: F)
    where
        F: FnOnce(&mut GlobalSystems<K>, &mut GlobalContext),
    {
        init_fn(&mut self.systems, &mut self.context);
    }

    //--- spawn_core_thread() ----------------------------------------------
    //
    // Each tick:
    //  1. Collects input batches from the platform
    //  2. Runs GlobalSystems::update with a fixed dt
    //  3. Sleeps to maintain fixed pacing
    //  4. Exits on window close or channel disconnect
    //
    pub(crate) fn spawn_core_thread(
        self,
        receiver: Receiver<PlatformEvent>,
        tps: f64,
    ) -> thread::JoinHandle<()> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);
        let dt = frame_duration.as_secs_f32();

        thread::spawn(move || {
            let mut systems = self.systems;
            let mut context = self.context;
            let mut collector = EventCollector::new(receiver);

            systems.init(&mut context);

            loop {
                let frame_start = Instant::now();

                //--- Step 1: Gather platform events ------------------------
                if collector.collect_frame() == TickControl::Exit {
                    info!("Core thread exiting");
                    break;
                }
                for batch in collector.take_batches() {
                    context.push_input(batch);
                }

                //--- Step 2: Update systems --------------------------------
                systems.update(&mut context, dt);

                //--- Step 3: Maintain deterministic pacing -----------------
                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }
        })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
