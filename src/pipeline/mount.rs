//! Mount API - Application lifecycle and render effect.
//!
//! # Example
//!
//! ```ignore
//! use product_catalog::pipeline::{mount, run, ScreenSource};
//!
//! let handle = mount(source)?;
//! run(&handle)?; // Blocks until q / Ctrl+C
//! handle.unmount();
//! ```

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use spark_signals::effect;
use tracing::{debug, info, warn};

use super::snapshot::ScreenSource;
use super::terminal::{detect_terminal_size, enter_fullscreen, exit_fullscreen, terminal_size};
use crate::renderer::DiffRenderer;
use crate::state::{filter_keys, focus, global_keys, input, mouse};

// =============================================================================
// Mount Handle
// =============================================================================

/// Handle returned by mount() that allows unmounting.
///
/// Holds the render effect stop function, the running flag (cleared by
/// Ctrl+C, `q` or unmount) and the key binding handles.
pub struct MountHandle {
    stop_effect: Option<Box<dyn FnOnce()>>,
    running: Arc<AtomicBool>,
    global_keys: Option<global_keys::GlobalKeysHandle>,
    filter_keys: Option<filter_keys::FilterKeysHandle>,
}

impl MountHandle {
    /// Stop rendering, remove bindings and restore the terminal.
    pub fn unmount(mut self) {
        self.teardown();
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Stop the application (sets running to false).
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    fn teardown(&mut self) {
        self.running.store(false, Ordering::SeqCst);

        if let Some(handle) = self.global_keys.take() {
            handle.cleanup();
        }
        if let Some(handle) = self.filter_keys.take() {
            handle.cleanup();
        }

        let Some(stop) = self.stop_effect.take() else {
            return;
        };
        stop();

        if let Err(err) = input::disable_mouse().and(exit_fullscreen()) {
            warn!(error = %err, "failed to restore terminal");
        }
        debug!("unmounted");
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}

// =============================================================================
// Mount Function
// =============================================================================

/// Mount the catalog screen.
///
/// This sets up:
/// 1. Terminal size detection and fullscreen mode
/// 2. The render effect (visible products + filter state + focus + size → frame)
/// 3. Mouse capture
/// 4. Global keys (Ctrl+C, Tab/Shift+Tab) and the filter bindings
pub fn mount(source: ScreenSource) -> io::Result<MountHandle> {
    detect_terminal_size();
    enter_fullscreen()?;

    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();

    let visible = source.store.create_visible_derived();
    let mut renderer = DiffRenderer::new();
    renderer.clear_screen()?;
    let mut last_size = (0, 0);

    let render_source = source.clone();
    let stop = effect(move || {
        if !running_clone.load(Ordering::SeqCst) {
            return;
        }

        // Tracked reads: re-run on any of these
        let products = visible.get();
        let focused = focus::focused();
        let size = terminal_size();

        let frame = render_source.compose(&products, focused, size);

        if last_size != size {
            mouse::resize_hit_grid(size.0, size.1);
            renderer.invalidate();
            last_size = size;
        } else {
            mouse::clear_hit_grid();
        }
        for hit in &frame.hits {
            mouse::fill_hit_rect(hit.x, hit.y, hit.width, hit.height, hit.control);
        }

        if let Err(err) = renderer.render(&frame.buffer) {
            warn!(error = %err, "render failed");
        }
    });

    input::enable_mouse()?;

    let global_keys_handle = global_keys::setup_global_keys(running.clone());
    let filter_keys_handle =
        filter_keys::setup_filter_keys(source.store.clone(), source.users.clone(), running.clone());

    info!(size = ?terminal_size(), "mounted");

    Ok(MountHandle {
        stop_effect: Some(Box::new(stop)),
        running,
        global_keys: Some(global_keys_handle),
        filter_keys: Some(filter_keys_handle),
    })
}

/// Unmount and clean up.
pub fn unmount(handle: MountHandle) {
    handle.unmount();
}

// =============================================================================
// Event Loop
// =============================================================================

/// Process at most one input event.
///
/// Returns `Ok(false)` once a stop was requested (`q`, Ctrl+C, `handle.stop()`).
pub fn tick(handle: &MountHandle) -> io::Result<bool> {
    if !handle.is_running() {
        return Ok(false);
    }

    // Poll with short timeout (~60fps)
    if let Some(event) = input::poll_event(Duration::from_millis(16))? {
        input::route_event(event);
    }

    Ok(handle.is_running())
}

/// Run the event loop (blocking until stopped).
pub fn run(handle: &MountHandle) -> io::Result<()> {
    while tick(handle)? {}
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
