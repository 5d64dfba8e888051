//! Environment signals.
//!
//! The root signals of the pipeline: terminal width and height, the color
//! mode and the render mode. The host owns an [`Environment`] and writes to
//! it; render passes only read from it, through a
//! [`RenderContext`](crate::context::RenderContext).

use spark_signals::{signal, Signal};

use crate::config::{ComposeConfig, RenderMode};
use crate::context::RenderContext;
use crate::error::Result;
use crate::responsive::{Breakpoints, Tier};
use crate::theme::ColorMode;

/// Reactive viewport and theme state.
///
/// Cloning shares the underlying signals.
#[derive(Clone)]
pub struct Environment {
    width: Signal<u16>,
    height: Signal<u16>,
    mode: Signal<ColorMode>,
    render_mode: Signal<RenderMode>,
    breakpoints: Breakpoints,
}

impl Environment {
    /// An environment of the given size with default breakpoints, dark mode
    /// and fullscreen rendering.
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_parts(width, height, Breakpoints::default(), ColorMode::default(), RenderMode::default())
    }

    /// An 80x24 environment configured from `config`.
    pub fn from_config(config: &ComposeConfig) -> Result<Self> {
        Ok(Self::with_parts(80, 24, config.breakpoints()?, config.mode, config.render_mode))
    }

    fn with_parts(
        width: u16,
        height: u16,
        breakpoints: Breakpoints,
        mode: ColorMode,
        render_mode: RenderMode,
    ) -> Self {
        Self {
            width: signal(width),
            height: signal(height),
            mode: signal(mode),
            render_mode: signal(render_mode),
            breakpoints,
        }
    }

    // -------------------------------------------------------------------------
    // Viewport
    // -------------------------------------------------------------------------

    /// Current `(width, height)`.
    pub fn viewport(&self) -> (u16, u16) {
        (self.width.get(), self.height.get())
    }

    /// Set the viewport size (called on resize events).
    pub fn set_viewport(&self, width: u16, height: u16) {
        if self.width.get() != width {
            self.width.set(width);
        }
        if self.height.get() != height {
            self.height.set(height);
        }
    }

    /// Query the real terminal size with crossterm and apply it.
    ///
    /// Leaves the viewport unchanged when there is no terminal.
    pub fn detect_terminal_size(&self) {
        if let Ok((width, height)) = crossterm::terminal::size() {
            self.set_viewport(width, height);
        }
    }

    /// The tier for the current width.
    pub fn tier(&self) -> Tier {
        self.breakpoints.tier_for_width(self.width.get())
    }

    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    // -------------------------------------------------------------------------
    // Modes
    // -------------------------------------------------------------------------

    pub fn mode(&self) -> ColorMode {
        self.mode.get()
    }

    pub fn set_mode(&self, mode: ColorMode) {
        if self.mode.get() != mode {
            self.mode.set(mode);
        }
    }

    /// Flip between light and dark. Returns the new mode.
    pub fn toggle_mode(&self) -> ColorMode {
        let mode = self.mode.get().toggle();
        self.mode.set(mode);
        mode
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode.get()
    }

    pub fn set_render_mode(&self, mode: RenderMode) {
        self.render_mode.set(mode);
    }

    // -------------------------------------------------------------------------
    // Pipeline access
    // -------------------------------------------------------------------------

    /// A context for one render pass reading this environment's signals.
    ///
    /// Called inside a derived, the first tier or mode read subscribes the
    /// derived to the corresponding signal.
    pub fn context(&self) -> RenderContext {
        let width = self.width.clone();
        let breakpoints = self.breakpoints;
        let mode = self.mode.clone();
        RenderContext::from_getters(
            move || breakpoints.tier_for_width(width.get()),
            move || mode.get(),
        )
    }

    pub(crate) fn width_signal(&self) -> Signal<u16> {
        self.width.clone()
    }

    pub(crate) fn height_signal(&self) -> Signal<u16> {
        self.height.clone()
    }

    pub(crate) fn render_mode_signal(&self) -> Signal<RenderMode> {
        self.render_mode.clone()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(80, 24)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_and_tier() {
        let env = Environment::new(50, 20);
        assert_eq!(env.viewport(), (50, 20));
        assert_eq!(env.tier(), Tier::Small);

        env.set_viewport(120, 40);
        assert_eq!(env.viewport(), (120, 40));
        assert_eq!(env.tier(), Tier::Large);
    }

    #[test]
    fn test_mode_toggle() {
        let env = Environment::default();
        assert_eq!(env.mode(), ColorMode::Dark);
        assert_eq!(env.toggle_mode(), ColorMode::Light);
        assert_eq!(env.mode(), ColorMode::Light);
        env.set_mode(ColorMode::Dark);
        assert_eq!(env.mode(), ColorMode::Dark);
    }

    #[test]
    fn test_clones_share_signals() {
        let env = Environment::default();
        let other = env.clone();
        other.set_viewport(200, 50);
        assert_eq!(env.viewport(), (200, 50));
    }

    #[test]
    fn test_from_config() {
        let config = ComposeConfig::from_toml_str(
            "mode = \"light\"\nrender_mode = \"inline\"\n[breakpoints]\nmd = 30\n",
        )
        .unwrap();
        let env = Environment::from_config(&config).unwrap();
        assert_eq!(env.mode(), ColorMode::Light);
        assert_eq!(env.render_mode(), RenderMode::Inline);
        env.set_viewport(30, 10);
        assert_eq!(env.tier(), Tier::Medium);
    }

    #[test]
    fn test_context_reads_current_values() {
        let env = Environment::new(150, 40);
        env.set_mode(ColorMode::Light);
        let ctx = env.context();
        assert_eq!(ctx.tier(), Tier::XLarge);
        assert_eq!(ctx.mode(), ColorMode::Light);
    }
}
