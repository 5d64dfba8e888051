//! Theme system for spark-compose.
//!
//! Two concerns live here:
//!
//! - The light/dark [`ColorMode`] and [`ModeValue`], a pair of literals of
//!   which exactly one is active for a render pass.
//! - Colors: [`ThemeColor`] (terminal default, ANSI, RGB or a palette token
//!   like `orange.500`), container [`Fill`]s and [`TextGradient`]s.
//!
//! # Example
//!
//! ```
//! use spark_compose::theme::{ColorMode, ModeValue, ThemeColor};
//!
//! let bg = ModeValue::new(ThemeColor::from("gray.100"), ThemeColor::from("transparent"));
//!
//! assert_eq!(bg.resolve(ColorMode::Light), &ThemeColor::from("gray.100"));
//! assert_eq!(bg.resolve(ColorMode::Dark), &ThemeColor::from("transparent"));
//! ```

use serde::Deserialize;

use crate::context::RenderContext;
use crate::types::Rgba;

mod fill;
pub mod palette;

pub use fill::{Fill, GradientDirection, ResolvedFill, TextGradient};

// =============================================================================
// ColorMode
// =============================================================================

/// The active light/dark visual theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    #[default]
    Dark,
}

impl ColorMode {
    /// The other mode.
    pub const fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

// =============================================================================
// ModeValue
// =============================================================================

/// A `(light, dark)` pair resolved by the active [`ColorMode`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModeValue<T> {
    pub light: T,
    pub dark: T,
}

impl<T> ModeValue<T> {
    pub const fn new(light: T, dark: T) -> Self {
        Self { light, dark }
    }

    /// Value for `mode`.
    #[inline]
    pub fn resolve(&self, mode: ColorMode) -> &T {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> ModeValue<U> {
        ModeValue {
            light: f(&self.light),
            dark: f(&self.dark),
        }
    }
}

impl<T: PartialEq> ModeValue<T> {
    /// Value for the mode of the current render pass.
    ///
    /// Reading the mode through the context subscribes the pass to mode
    /// changes. A pair with equal halves does not read it.
    pub fn resolve_in(&self, ctx: &RenderContext) -> &T {
        if self.light == self.dark {
            return &self.dark;
        }
        self.resolve(ctx.mode())
    }
}

impl<T: Clone> ModeValue<T> {
    /// The same value in both modes.
    pub fn both(value: T) -> Self {
        Self {
            light: value.clone(),
            dark: value,
        }
    }
}

impl From<ThemeColor> for ModeValue<ThemeColor> {
    fn from(color: ThemeColor) -> Self {
        Self::both(color)
    }
}

impl From<&str> for ModeValue<ThemeColor> {
    fn from(token: &str) -> Self {
        Self::both(ThemeColor::from(token))
    }
}

impl From<(&str, &str)> for ModeValue<ThemeColor> {
    fn from((light, dark): (&str, &str)) -> Self {
        Self::new(ThemeColor::from(light), ThemeColor::from(dark))
    }
}

// =============================================================================
// ThemeColor
// =============================================================================

/// A color as written by page code.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ThemeColor {
    /// Terminal's default color.
    #[default]
    Default,
    /// ANSI palette index (0-255).
    Ansi(u8),
    /// Explicit RGB color.
    Rgb(Rgba),
    /// Palette token (`orange.500`, `blackAlpha.900`) or a literal (`#ff8800`).
    Token(String),
}

impl ThemeColor {
    /// Resolve to Rgba. Unknown tokens resolve to magenta.
    pub fn resolve(&self) -> Rgba {
        match self {
            Self::Default => Rgba::TERMINAL_DEFAULT,
            Self::Ansi(i) => Rgba::ansi(*i),
            Self::Rgb(c) => *c,
            Self::Token(s) => palette::lookup(s)
                .or_else(|| Rgba::parse(s))
                .unwrap_or(Rgba::MAGENTA),
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }
}

impl From<()> for ThemeColor {
    fn from(_: ()) -> Self {
        Self::Default
    }
}

impl From<u8> for ThemeColor {
    fn from(index: u8) -> Self {
        Self::Ansi(index)
    }
}

impl From<Rgba> for ThemeColor {
    fn from(color: Rgba) -> Self {
        Self::Rgb(color)
    }
}

impl From<&str> for ThemeColor {
    fn from(s: &str) -> Self {
        Self::Token(s.to_string())
    }
}

impl From<String> for ThemeColor {
    fn from(s: String) -> Self {
        Self::Token(s)
    }
}

impl From<u32> for ThemeColor {
    fn from(rgb: u32) -> Self {
        Self::Rgb(Rgba::from_rgb_int(rgb))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_toggle_round_trip() {
        for mode in [ColorMode::Light, ColorMode::Dark] {
            assert_ne!(mode.toggle(), mode);
            assert_eq!(mode.toggle().toggle(), mode);
        }
    }

    #[test]
    fn test_mode_value_resolution() {
        let pair = ModeValue::new(1, 2);
        assert_eq!(*pair.resolve(ColorMode::Light), 1);
        assert_eq!(*pair.resolve(ColorMode::Dark), 2);

        let mode = ColorMode::Light;
        assert_eq!(pair.resolve(mode.toggle().toggle()), pair.resolve(mode));
    }

    #[test]
    fn test_resolve_in_subscribes_only_for_distinct_pairs() {
        use crate::context::{Reads, RenderContext};
        use crate::responsive::Tier;

        let ctx = RenderContext::fixed(Tier::Small, ColorMode::Light);
        assert_eq!(*ModeValue::both(5).resolve_in(&ctx), 5);
        assert!(!ctx.reads().contains(Reads::MODE));

        assert_eq!(*ModeValue::new(1, 2).resolve_in(&ctx), 1);
        assert!(ctx.reads().contains(Reads::MODE));
    }

    #[test]
    fn test_mode_value_both_and_map() {
        let pair = ModeValue::both("x").map(|s| s.len());
        assert_eq!(pair, ModeValue::new(1, 1));
    }

    #[test]
    fn test_mode_value_from_tuple() {
        let bg: ModeValue<ThemeColor> = ("gray.100", "transparent").into();
        assert_eq!(bg.resolve(ColorMode::Light).resolve(), Rgba::from_rgb_int(0xEDF2F7));
        assert!(bg.resolve(ColorMode::Dark).resolve().is_transparent());
    }

    #[test]
    fn test_theme_color_resolve() {
        assert!(ThemeColor::Default.resolve().is_terminal_default());
        assert_eq!(ThemeColor::Ansi(3).resolve(), Rgba::ansi(3));
        assert_eq!(ThemeColor::from(0xff0000u32).resolve(), Rgba::rgb(255, 0, 0));
        assert_eq!(ThemeColor::from("orange.500").resolve(), Rgba::from_rgb_int(0xDD6B20));
        assert_eq!(ThemeColor::from("#00ff00").resolve(), Rgba::rgb(0, 255, 0));
        assert_eq!(ThemeColor::from("chartreuse.999").resolve(), Rgba::MAGENTA);
    }

    #[test]
    fn test_color_mode_deserialize() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: ColorMode,
        }
        let w: Wrapper = toml::from_str("mode = \"light\"").unwrap();
        assert_eq!(w.mode, ColorMode::Light);
    }
}
