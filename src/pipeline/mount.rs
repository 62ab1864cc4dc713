//! Mount API - terminal lifecycle and event loop.
//!
//! Mounting takes over the terminal (raw mode, alternate screen), wires the
//! frame derived to the widget and a terminal-size signal, and hands back a
//! [`MountHandle`]. Each tick polls input for up to 16ms, applies it to the
//! widget, advances the copy-feedback deadline and diff-renders the frame
//! when anything changed.
//!
//! # Example
//!
//! ```ignore
//! use gridview_builder::pipeline::mount;
//!
//! let mut handle = mount::mount(widget)?;
//!
//! // Option 1: Run blocking event loop
//! mount::run(&mut handle)?;
//!
//! // Option 2: Tick manually in your own loop
//! while mount::tick(&mut handle)? {
//!     // Your logic here
//! }
//!
//! handle.unmount();
//! ```

use std::io::{self, IsTerminal};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use spark_signals::{signal, Signal};

use super::frame::create_frame_derived;
use crate::controls::PanelAction;
use crate::error::{Error, Result};
use crate::renderer::{DiffRenderer, FrameBuffer};
use crate::state::input::{self, InputEvent};
use crate::widget::{GridViewBuilder, Reader};

/// Input poll timeout per tick (~60fps).
const POLL_INTERVAL: Duration = Duration::from_millis(16);

// =============================================================================
// Mount Handle
// =============================================================================

/// Handle returned by [`mount`]. Restores the terminal on unmount or drop.
pub struct MountHandle {
    widget: GridViewBuilder,
    frame: Reader<FrameBuffer>,
    size: Signal<(u16, u16)>,
    renderer: DiffRenderer,
    running: Arc<AtomicBool>,
    dirty: bool,
    active: bool,
}

impl MountHandle {
    /// Stop the loop and give the terminal back.
    pub fn unmount(mut self) {
        self.running.store(false, Ordering::SeqCst);
        self.restore();
        tracing::info!("unmounted");
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Ask the loop to stop after the current tick.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    fn render(&mut self) -> Result<()> {
        let frame = (self.frame)();
        self.renderer.render(&frame)?;
        self.dirty = false;
        Ok(())
    }

    fn restore(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        if let Err(e) = self.renderer.exit_fullscreen() {
            tracing::warn!(error = %e, "failed to leave alternate screen");
        }
        if let Err(e) = disable_raw_mode() {
            tracing::warn!(error = %e, "failed to disable raw mode");
        }
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        self.restore();
    }
}

// =============================================================================
// Mount Function
// =============================================================================

/// Mount the widget on the terminal.
///
/// Fails with [`Error::MountNotFound`] when stdout is not a terminal.
pub fn mount(widget: GridViewBuilder) -> Result<MountHandle> {
    if !io::stdout().is_terminal() {
        return Err(Error::MountNotFound("stdout is not a terminal".to_string()));
    }

    let (width, height) = crossterm::terminal::size()?;
    let size = signal((width, height));
    let frame = create_frame_derived(&widget, size.clone());

    enable_raw_mode()?;
    let mut renderer = DiffRenderer::new();
    if let Err(e) = renderer.enter_fullscreen() {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    let mut handle = MountHandle {
        widget,
        frame,
        size,
        renderer,
        running: Arc::new(AtomicBool::new(true)),
        dirty: true,
        active: true,
    };
    handle.render()?;

    tracing::info!(width, height, "mounted");
    Ok(handle)
}

/// Unmount and clean up.
pub fn unmount(handle: MountHandle) {
    handle.unmount();
}

// =============================================================================
// Event handling
// =============================================================================

/// What one input event did to the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Nothing visible changed.
    Idle,
    /// The frame needs a redraw.
    Redraw,
    /// The user asked to quit.
    Quit,
}

/// Apply one input event to the widget and the size signal.
pub fn handle_event(widget: &mut GridViewBuilder, size: &Signal<(u16, u16)>, event: InputEvent) -> EventOutcome {
    match event {
        InputEvent::Key(key) => {
            let action = widget.handle_key(&key);
            if action != PanelAction::None {
                tracing::debug!(key = %key.key, ?action, "key handled");
            }
            match action {
                PanelAction::Quit => EventOutcome::Quit,
                PanelAction::None => EventOutcome::Idle,
                _ => EventOutcome::Redraw,
            }
        }
        InputEvent::Resize(width, height) => {
            tracing::debug!(width, height, "terminal resized");
            size.set((width, height));
            EventOutcome::Redraw
        }
        InputEvent::None => EventOutcome::Idle,
    }
}

// =============================================================================
// Event Loop
// =============================================================================

/// Run the event loop once.
///
/// Returns `Ok(false)` once the application should stop.
pub fn tick(handle: &mut MountHandle) -> Result<bool> {
    if !handle.is_running() {
        return Ok(false);
    }

    if let Some(event) = input::poll_event(POLL_INTERVAL)? {
        let resized = matches!(event, InputEvent::Resize(..));
        match handle_event(&mut handle.widget, &handle.size, event) {
            EventOutcome::Quit => {
                handle.stop();
                return Ok(false);
            }
            EventOutcome::Redraw => handle.dirty = true,
            EventOutcome::Idle => {}
        }
        if resized {
            handle.renderer.invalidate();
        }
    }

    if handle.widget.tick(Instant::now()) {
        handle.dirty = true;
    }

    if handle.dirty {
        handle.render()?;
    }

    Ok(handle.is_running())
}

/// Run the event loop until quit or [`MountHandle::stop`].
pub fn run(handle: &mut MountHandle) -> Result<()> {
    while tick(handle)? {}
    Ok(())
}
