//=========================================================================
// Globe Engine
//
// Main entry point and coordinator for the interaction runtime.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──init()──>  ──run()──>  [Runtime]
//         │                          │                    │
//         ├─ with_tps()              └─ stage, features,  └─ spawns core thread
//         ├─ with_channel_capacity()    overlays, hit        runs platform
//         ├─ with_config()              tester               blocks until exit
//         └─ with_title()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::config::InteractionConfig;
use crate::core::platform_bridge::PlatformEvent;
use crate::core::{CoreSystemsOrchestrator, GlobalContext, GlobalSystems, OverlayKey};
use crate::platform::Platform;

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (interaction ticks per second)
/// - **Channel capacity**: 128 platform messages
/// - **Config**: `InteractionConfig::default()`
/// - **Title**: "Globe Viewer"
///
/// # Examples
///
/// ```no_run
/// use globe_engine::EngineBuilder;
/// use globe_engine::core::OverlayKey;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Overlay { Physical }
/// impl OverlayKey for Overlay {}
///
/// EngineBuilder::<Overlay>::new()
///     .with_tps(120.0)
///     .with_channel_capacity(256)
///     .build()
///     .run();
/// ```
pub struct EngineBuilder<K: OverlayKey> {
    tps: f64,
    channel_capacity: usize,
    config: InteractionConfig,
    title: String,
    _phantom: std::marker::PhantomData<K>,
}

impl<K: OverlayKey> EngineBuilder<K> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            config: InteractionConfig::default(),
            title: String::from("Globe Viewer"),
            _phantom: std::marker::PhantomData,
        }
    }

    /// Sets the target ticks per second for the core thread.
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the channel capacity for platform → core communication.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Replaces the interaction tuning (gestures, camera, detail, highlight).
    ///
    /// Invalid values are reported when the core thread initializes the
    /// systems, not here.
    pub fn with_config(mut self, config: InteractionConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builds the engine instance.
    pub fn build(self) -> Engine<K> {
        info!("Building engine (TPS: {}, channel: {})", self.tps, self.channel_capacity);

        Engine {
            orchestrator: CoreSystemsOrchestrator::new(self.config),
            tps: self.tps,
            channel_capacity: self.channel_capacity,
            title: self.title,
        }
    }
}

impl<K: OverlayKey> Default for EngineBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Globe interaction runtime.
///
/// # Architecture
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreSystemsOrchestrator (Core Thread @ TPS)
///   │     └─► gestures, selection, detail session, camera, overlays
///   │
///   └─► Platform (Event Loop)
///         └─► Window, pointer/keyboard polling
///
/// Communication: crossbeam channel (PlatformEvent)
/// ```
pub struct Engine<K: OverlayKey> {
    orchestrator: CoreSystemsOrchestrator<K>,
    tps: f64,
    channel_capacity: usize,
    title: String,
}

impl<K: OverlayKey> Engine<K> {
    //--- Initialization ---------------------------------------------------

    /// Populates the world and configures the systems before running.
    ///
    /// The closure receives the systems (bindings, hit tester, overlay
    /// modes, detail scene) and the context (stage, features). Setup is
    /// validated when the core thread starts.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use globe_engine::EngineBuilder;
    /// # use globe_engine::core::OverlayKey;
    /// # use globe_engine::core::feature::Feature;
    /// # use globe_engine::core::stage::StageObject;
    /// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    /// # enum Overlay { Physical }
    /// # impl OverlayKey for Overlay {}
    /// EngineBuilder::<Overlay>::new()
    ///     .build()
    ///     .init(|_systems, ctx| {
    ///         let nile = ctx.stage.spawn(StageObject::new("nile"));
    ///         ctx.features.register(Feature::new("Nile", nile));
    ///     })
    ///     .run();
    /// ```
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut GlobalSystems<K>, &mut GlobalContext),
    {
        info!("Initializing engine systems");

        self.orchestrator.init_systems(init_fn);

        info!("Engine initialization complete");
        self
    }

    //--- Execution --------------------------------------------------------

    /// Starts the runtime and blocks until the window closes.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the platform → core channel
    /// 2. Spawns the core thread running at the configured TPS
    /// 3. Runs the platform event loop (blocks here)
    /// 4. On window close: platform exits → core thread terminates
    pub fn run(self) {
        info!("Starting engine runtime (TPS: {})", self.tps);

        //--- 1. Create communication channel -----------------------------
        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);

        info!("Channel created (capacity: {})", self.channel_capacity);

        //--- 2. Spawn the core thread -------------------------------------
        let core_handle = self.orchestrator.spawn_core_thread(rx, self.tps);
        info!("Core thread spawned");

        //--- 3. Launch the platform subsystem -----------------------------
        let platform = Platform::new(tx, self.title);
        info!("Platform initialized, entering event loop");

        if let Err(e) = platform.run() {
            error!("Platform error: {}", e);
        }

        info!("Platform event loop exited");

        //--- 4. Cleanup: wait for the core thread -------------------------
        match core_handle.join() {
            Ok(()) => info!("Core thread terminated cleanly"),
            Err(e) => error!("Core thread panicked: {:?}", e),
        }

        info!("Engine shutdown complete");
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
