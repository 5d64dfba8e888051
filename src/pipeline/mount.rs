//! Mount API - application lifecycle, render effect and event loop.
//!
//! # Example
//!
//! ```ignore
//! use std::rc::Rc;
//! use spark_compose::pipeline::{mount, run, Environment};
//!
//! let env = Environment::default();
//! let handle = mount(&env, Rc::new(page))?;
//! run(&handle, &env)?; // blocks until `q` or Ctrl+C
//! handle.unmount();
//! ```
//!
//! Key bindings handled by the loop:
//! - `m` toggles light and dark mode
//! - `q` and Ctrl+C stop the loop
//! - a left click on a link asks the [`Navigator`] to navigate

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use spark_signals::effect;

use crate::config::RenderMode;
use crate::element::Renderable;
use crate::error::Result;
use crate::primitives::{dispatch_click, Navigator};
use crate::renderer::{enter_fullscreen, exit_fullscreen, DiffRenderer, InlineRenderer, LinkRegion};

use super::element_derived::create_element_derived;
use super::environment::Environment;
use super::frame_derived::create_frame_derived;

// =============================================================================
// Mount Handle
// =============================================================================

/// Handle returned by [`mount`].
///
/// Dropping the handle stops rendering and restores the terminal.
pub struct MountHandle {
    stop_effect: Option<Box<dyn FnOnce()>>,
    running: Arc<AtomicBool>,
    link_regions: Rc<RefCell<Vec<LinkRegion>>>,
    render_mode: RenderMode,
}

impl MountHandle {
    /// Stop the render effect and restore the terminal.
    pub fn unmount(mut self) {
        self.teardown();
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Ask the event loop to return.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    /// Link regions of the most recently painted frame.
    pub fn link_regions(&self) -> Vec<LinkRegion> {
        self.link_regions.borrow().clone()
    }

    fn teardown(&mut self) {
        let Some(stop) = self.stop_effect.take() else {
            return;
        };
        self.running.store(false, Ordering::SeqCst);
        stop();

        let mut out = io::stdout();
        let _ = execute!(out, DisableMouseCapture);
        if self.render_mode == RenderMode::Fullscreen {
            let _ = exit_fullscreen(&mut out);
        } else {
            let _ = writeln!(out);
        }
        let _ = disable_raw_mode();
        tracing::info!("unmounted");
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}

// =============================================================================
// Terminal Guard
// =============================================================================

/// Terminal modes switched on by [`mount`].
///
/// Dropping the guard undoes them in reverse order, so a `mount` that fails
/// partway leaves the terminal as it found it. [`TerminalGuard::release`]
/// hands the terminal over to the [`MountHandle`].
struct TerminalGuard<W: Write> {
    out: W,
    raw: bool,
    mouse: bool,
    fullscreen: bool,
}

impl<W: Write> TerminalGuard<W> {
    fn new(out: W) -> Self {
        Self {
            out,
            raw: false,
            mouse: false,
            fullscreen: false,
        }
    }

    fn enable_raw_mode(&mut self) -> Result<()> {
        enable_raw_mode()?;
        self.raw = true;
        Ok(())
    }

    fn enable_mouse_capture(&mut self) -> Result<()> {
        execute!(self.out, EnableMouseCapture)?;
        self.mouse = true;
        Ok(())
    }

    fn enter_fullscreen(&mut self) -> Result<()> {
        enter_fullscreen(&mut self.out)?;
        self.fullscreen = true;
        Ok(())
    }

    fn release(mut self) {
        self.raw = false;
        self.mouse = false;
        self.fullscreen = false;
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if !(self.raw || self.mouse || self.fullscreen) {
            return;
        }
        if self.fullscreen {
            let _ = exit_fullscreen(&mut self.out);
        }
        if self.mouse {
            let _ = execute!(self.out, DisableMouseCapture);
        }
        if self.raw {
            let _ = disable_raw_mode();
        }
        tracing::warn!("mount failed, terminal restored");
    }
}

// =============================================================================
// Mount Function
// =============================================================================

/// Mount `root` on the terminal.
///
/// Detects the terminal size, switches the terminal to raw mode with mouse
/// capture, and installs the one render effect that writes every new frame.
/// Fullscreen mode uses the alternate screen and differential output; inline
/// mode redraws in place below the cursor.
pub fn mount(env: &Environment, root: Rc<dyn Renderable>) -> Result<MountHandle> {
    env.detect_terminal_size();
    let render_mode = env.render_mode();

    let element_derived = create_element_derived(env, root);
    let frame_derived = create_frame_derived(env, element_derived);

    let running = Arc::new(AtomicBool::new(true));
    let link_regions = Rc::new(RefCell::new(Vec::new()));

    let mut guard = TerminalGuard::new(io::stdout());
    guard.enable_raw_mode()?;
    guard.enable_mouse_capture()?;

    let running_clone = running.clone();
    let regions = link_regions.clone();

    // Each branch is boxed because effect() returns different closure types.
    let stop: Box<dyn FnOnce()> = match render_mode {
        RenderMode::Fullscreen => {
            guard.enter_fullscreen()?;
            let mut renderer = DiffRenderer::new();
            Box::new(effect(move || {
                if !running_clone.load(Ordering::SeqCst) {
                    return;
                }
                let result = frame_derived.get();
                *regions.borrow_mut() = result.link_regions.clone();
                if let Err(e) = renderer.render(&mut io::stdout().lock(), &result.buffer) {
                    tracing::error!(error = %e, "frame write failed");
                }
            }))
        }
        RenderMode::Inline => {
            let mut renderer = InlineRenderer::new();
            Box::new(effect(move || {
                if !running_clone.load(Ordering::SeqCst) {
                    return;
                }
                let result = frame_derived.get();
                *regions.borrow_mut() = result.link_regions.clone();
                if let Err(e) = renderer.render(&mut io::stdout().lock(), &result.buffer) {
                    tracing::error!(error = %e, "frame write failed");
                }
            }))
        }
    };

    guard.release();
    let (width, height) = env.viewport();
    tracing::info!(?render_mode, width, height, "mounted");

    Ok(MountHandle {
        stop_effect: Some(stop),
        running,
        link_regions,
        render_mode,
    })
}

// =============================================================================
// Event Loop
// =============================================================================

/// Apply one terminal event to the environment.
///
/// Returns `false` when the event asks the application to quit.
pub fn apply_event(
    env: &Environment,
    event: &Event,
    link_regions: &[LinkRegion],
    navigator: &dyn Navigator,
) -> bool {
    match event {
        Event::Resize(width, height) => {
            env.set_viewport(*width, *height);
            true
        }
        Event::Key(key) => apply_key(env, key),
        Event::Mouse(mouse) => {
            if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                dispatch_click(link_regions, mouse.column, mouse.row, navigator);
            }
            true
        }
        _ => true,
    }
}

fn apply_key(env: &Environment, key: &KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return true;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => false,
        KeyCode::Char('q') => false,
        KeyCode::Char('m') => {
            let mode = env.toggle_mode();
            tracing::debug!(?mode, "color mode toggled");
            true
        }
        _ => true,
    }
}

/// Process at most one pending event (waits up to ~16ms).
///
/// Returns `Ok(false)` once the application should stop.
pub fn tick(handle: &MountHandle, env: &Environment, navigator: &dyn Navigator) -> Result<bool> {
    if !handle.is_running() {
        return Ok(false);
    }

    if event::poll(Duration::from_millis(16))? {
        let event = event::read()?;
        let regions = handle.link_regions.borrow().clone();
        if !apply_event(env, &event, &regions, navigator) {
            handle.stop();
        }
    }

    Ok(handle.is_running())
}

/// Run the event loop until stopped, logging link activations.
pub fn run(handle: &MountHandle, env: &Environment) -> Result<()> {
    run_with_navigator(handle, env, &|target: &str| {
        tracing::info!(path = target, "navigate");
    })
}

/// Run the event loop until stopped, routing link clicks to `navigator`.
pub fn run_with_navigator(
    handle: &MountHandle,
    env: &Environment,
    navigator: &dyn Navigator,
) -> Result<()> {
    while tick(handle, env, navigator)? {}
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventState, MouseEvent};

    use super::*;
    use crate::theme::ColorMode;
    use crate::types::Rect;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn ignore(_: &str) {}

    #[test]
    fn test_resize_updates_viewport() {
        let env = Environment::new(80, 24);
        assert!(apply_event(&env, &Event::Resize(120, 30), &[], &ignore));
        assert_eq!(env.viewport(), (120, 30));
    }

    #[test]
    fn test_mode_key_toggles() {
        let env = Environment::default();
        assert!(apply_event(&env, &key(KeyCode::Char('m'), KeyModifiers::NONE), &[], &ignore));
        assert_eq!(env.mode(), ColorMode::Light);
    }

    #[test]
    fn test_quit_keys() {
        let env = Environment::default();
        assert!(!apply_event(&env, &key(KeyCode::Char('q'), KeyModifiers::NONE), &[], &ignore));
        assert!(!apply_event(
            &env,
            &key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &[],
            &ignore
        ));
        assert!(apply_event(&env, &key(KeyCode::Char('c'), KeyModifiers::NONE), &[], &ignore));
    }

    #[test]
    fn test_guard_restores_terminal_on_drop() {
        let mut out = Vec::new();
        {
            let mut guard = TerminalGuard::new(&mut out);
            guard.enable_mouse_capture().unwrap();
            guard.enter_fullscreen().unwrap();
        }
        let written = String::from_utf8(out).unwrap();
        let leave = written.find("\x1b[?1049l").expect("alternate screen left");
        let mouse_off = written.find("\x1b[?1000l").expect("mouse capture disabled");
        assert!(leave < mouse_off);
    }

    #[test]
    fn test_released_guard_leaves_terminal() {
        let mut out = Vec::new();
        {
            let mut guard = TerminalGuard::new(&mut out);
            guard.enable_mouse_capture().unwrap();
            guard.release();
        }
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1000h"));
        assert!(!written.contains("\x1b[?1000l"));
    }

    #[test]
    fn test_click_navigates() {
        let env = Environment::default();
        let visited = RefCell::new(Vec::new());
        let navigator = |target: &str| visited.borrow_mut().push(target.to_string());
        let regions = vec![LinkRegion {
            rect: Rect::new(2, 1, 10, 1),
            target: "/registration".into(),
        }];

        assert!(apply_event(&env, &click(5, 1), &regions, &navigator));
        assert!(apply_event(&env, &click(5, 3), &regions, &navigator));
        assert_eq!(*visited.borrow(), vec!["/registration".to_string()]);
    }
}
