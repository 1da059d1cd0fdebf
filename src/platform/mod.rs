//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the interaction core thread via
// a crossbeam channel.
//
// Architecture:
// ```text
//  Main Thread:                     Core Thread:
//  ┌──────────────────────────┐    ┌──────────────────────┐
//  │  Winit Event Loop        │    │  GlobalSystems       │
//  │   ↓                      │    │   ├─ StateTracker    │
//  │  InputProcessor          │    │   ├─ Gestures        │
//  │   ├─ Converts Winit      │    │   ├─ Selection       │
//  │   └─ Tracks the cursor   │    │   ├─ Detail session  │
//  │   ↓                      │    │   └─ Camera rig      │
//  │  InputBuffer             │    │                      │
//  │   ├─ discrete: Vec<>     │    └──────────────────────┘
//  │   └─ continuous: moves,  │             ↑
//  │      accumulated scroll  │             │
//  │   ↓                      │             │
//  │  RedrawRequested (flush) │             │
//  │   ↓                      │             │
//  │  Channel ────────────────┼─────────────┘
//  └──────────────────────────┘    PlatformEvent
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: all input gathered since the
//   previous redraw is sent as one batch; empty batches are not sent
// - **Focus loss = DeviceLost**: an active drag or pinch ends cleanly
//   when the window is deactivated mid-gesture
// - **Graceful channel disconnect**: if the core thread is gone, the
//   platform logs a warning and keeps running until the window closes
// - **Main thread requirement**: Winit mandates the main thread on
//   macOS/iOS, so this runs on the thread that called `Engine::run()`
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== External Crates =====================================================

use crossbeam_channel::Sender;
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

//=== Platform ============================================================

/// Window owner and input aggregator.
///
/// Runs on the main thread and sends batched input to the core thread.
/// The window is created lazily in `resumed()` (mobile compatibility).
pub(crate) struct Platform {
    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,

    /// Window title applied on creation.
    title: String,

    /// Buffers input until the frame boundary.
    buffer: InputBuffer,

    /// Channel to the core thread.
    event_sender: Sender<PlatformEvent>,

    /// Converts Winit events to engine InputEvents.
    input_processor: InputProcessor,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(event_sender: Sender<PlatformEvent>, title: impl Into<String>) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            title: title.into(),
            buffer: InputBuffer::new(),
            event_sender,
            input_processor: InputProcessor::new(),
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the Winit event loop until the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// exits with an error.
    pub(crate) fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Sends everything buffered since the last redraw as one batch.
    ///
    /// On a disconnected channel the events are dropped with a warning so
    /// the user can still close the window.
    fn flush_input_buffer(&mut self) {
        let Some((discrete, continuous)) = self.buffer.drain() else {
            return;
        };
        let discrete_count = discrete.len();
        let continuous_count = continuous.len();

        trace!(
            target: "platform::input",
            "Flushing {} discrete + {} continuous events",
            discrete_count,
            continuous_count
        );

        if self.event_sender.send(PlatformEvent::Inputs { discrete, continuous }).is_err() {
            warn!(
                target: "platform::input",
                "Channel disconnected, dropping {} events ({} discrete, {} continuous)",
                discrete_count + continuous_count,
                discrete_count,
                continuous_count
            );
        }
    }

    /// Routes one window event into the input buffer.
    ///
    /// Returns `true` for events the core cares about.
    fn buffer_window_event(&mut self, event: &WindowEvent) -> bool {
        let processor = &mut self.input_processor;
        let converted = match event {
            WindowEvent::CursorMoved { position, .. } => {
                Some(processor.process_cursor_move(position.x as f32, position.y as f32))
            }
            WindowEvent::MouseInput { state, button, .. } => {
                processor.process_mouse_button(*button, *state)
            }
            WindowEvent::MouseWheel { delta, .. } => processor.process_wheel(*delta),
            WindowEvent::Touch(touch) => Some(processor.process_touch(
                touch.id,
                touch.phase,
                touch.location.x as f32,
                touch.location.y as f32,
            )),
            WindowEvent::KeyboardInput { event: key_event, .. } => {
                let converted = processor.process_key_event(key_event);
                if converted.is_none() {
                    trace!(target: "platform::input", "Unmapped or repeated key ignored");
                }
                converted
            }
            WindowEvent::Focused(focused) => {
                let converted = processor.process_focus(*focused);
                if converted.is_some() {
                    debug!(target: "platform::input", "Focus lost, releasing held input");
                }
                converted
            }
            _ => None,
        };

        match converted {
            Some(input) => {
                self.buffer.push(input);
                true
            }
            None => false,
        }
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Creates the window on first resume.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(1024, 768));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }

            WindowEvent::RedrawRequested => {
                // Frame boundary
                self.flush_input_buffer();

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {
                self.buffer_window_event(&event);
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{InputEvent, KeyCode, PointerId};
    use crossbeam_channel::unbounded;
    use glam::Vec2;

    fn platform() -> (Platform, crossbeam_channel::Receiver<PlatformEvent>) {
        let (tx, rx) = unbounded();
        (Platform::new(tx, "test"), rx)
    }

    //=====================================================================
    // Platform Tests
    //=====================================================================

    #[test]
    fn window_is_created_lazily() {
        let (platform, _rx) = platform();
        assert!(platform.window.is_none(), "Window should be created lazily");
        assert_eq!(platform.title, "test");
    }

    #[test]
    fn flush_empty_buffer_is_noop() {
        let (mut platform, rx) = platform();

        platform.flush_input_buffer();

        assert!(rx.try_recv().is_err(), "No events should be sent for empty buffer");
    }

    #[test]
    fn flush_sends_buffered_events() {
        let (mut platform, rx) = platform();
        platform.buffer.push(InputEvent::KeyDown { key: KeyCode::Escape });
        platform.buffer.push(InputEvent::PointerMoved {
            pointer: PointerId::Mouse,
            position: Vec2::new(3.0, 4.0),
        });

        platform.flush_input_buffer();

        match rx.try_recv() {
            Ok(PlatformEvent::Inputs { discrete, continuous }) => {
                assert_eq!(discrete.len(), 1, "Should have 1 discrete event");
                assert_eq!(continuous.len(), 1, "Should have 1 continuous event");
            }
            other => panic!("Expected Inputs event, got {:?}", other),
        }
    }

    #[test]
    fn flush_handles_disconnected_channel() {
        let (mut platform, rx) = platform();
        platform.buffer.push(InputEvent::DeviceLost);
        drop(rx);

        // Should not panic, just log warning
        platform.flush_input_buffer();
        assert!(platform.buffer.is_empty());
    }

    #[test]
    fn multiple_flushes_clear_buffer() {
        let (mut platform, rx) = platform();
        platform.buffer.push(InputEvent::KeyDown { key: KeyCode::KeyR });

        platform.flush_input_buffer();
        platform.flush_input_buffer();

        assert!(rx.try_recv().is_ok(), "First flush should send");
        assert!(rx.try_recv().is_err(), "Second flush should not send");
    }

    #[test]
    fn focus_events_are_buffered_only_on_loss() {
        let (mut platform, _rx) = platform();

        assert!(!platform.buffer_window_event(&WindowEvent::Focused(true)));
        assert!(platform.buffer_window_event(&WindowEvent::Focused(false)));
        assert_eq!(platform.buffer.len(), 1);
    }

    #[test]
    fn unrelated_window_events_are_ignored() {
        let (mut platform, _rx) = platform();
        assert!(!platform.buffer_window_event(&WindowEvent::Destroyed));
        assert!(platform.buffer.is_empty());
    }
}
