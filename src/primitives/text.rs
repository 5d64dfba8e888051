//! Text primitive - a run of styled text.
//!
//! Size is a [`TextSize`] that may vary by tier. Terminals have a single
//! glyph height, so larger sizes are rendered with weight and spacing:
//! `lg` and above are bold, `3xl` and above spread glyphs one cell apart.
//!
//! # Example
//!
//! ```
//! use spark_compose::primitives::{Text, TextSize};
//!
//! let tagline = Text::new("DeFi for everyone")
//!     .size([TextSize::Md, TextSize::Lg])
//!     .color(("gray.700", "gray.300"));
//! # let _ = tagline;
//! ```

use crate::context::RenderContext;
use crate::element::{Element, ElementKind, ElementStyle, Renderable};
use crate::responsive::BreakpointValue;
use crate::theme::{ModeValue, TextGradient, ThemeColor};
use crate::types::{Attr, TextAlign};

// =============================================================================
// TextSize
// =============================================================================

/// Typographic scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum TextSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
    Xxl,
    Xxxl,
    Xxxxl,
}

impl TextSize {
    pub const fn attrs(self) -> Attr {
        match self {
            Self::Sm => Attr::DIM,
            Self::Md => Attr::NONE,
            _ => Attr::BOLD,
        }
    }

    /// Blank cells between glyphs.
    pub const fn letter_spacing(self) -> u16 {
        match self {
            Self::Xxxl | Self::Xxxxl => 1,
            _ => 0,
        }
    }
}

impl From<TextSize> for BreakpointValue<TextSize> {
    fn from(size: TextSize) -> Self {
        Self::uniform(size)
    }
}

// =============================================================================
// Text
// =============================================================================

pub struct Text {
    content: String,
    size: BreakpointValue<TextSize>,
    color: ModeValue<ThemeColor>,
    gradient: Option<TextGradient>,
    align: TextAlign,
    attrs: Attr,
    key: Option<String>,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            size: BreakpointValue::uniform(TextSize::Md),
            color: ModeValue::both(ThemeColor::Default),
            gradient: None,
            align: TextAlign::Left,
            attrs: Attr::NONE,
            key: None,
        }
    }

    pub fn size(mut self, size: impl Into<BreakpointValue<TextSize>>) -> Self {
        self.size = size.into();
        self
    }

    pub fn color(mut self, color: impl Into<ModeValue<ThemeColor>>) -> Self {
        self.color = color.into();
        self
    }

    /// Color glyphs along a horizontal gradient. Overrides `color`.
    pub fn gradient(mut self, gradient: TextGradient) -> Self {
        self.gradient = Some(gradient);
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn bold(mut self) -> Self {
        self.attrs |= Attr::BOLD;
        self
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Renderable for Text {
    fn render(&self, ctx: &RenderContext) -> Element {
        let size = *self.size.resolve_in(ctx);
        let fg = match self.gradient {
            Some(_) => ThemeColor::Default.resolve(),
            None => self.color.resolve_in(ctx).resolve(),
        };

        let style = ElementStyle {
            fg,
            attrs: self.attrs | size.attrs(),
            text_align: self.align,
            ..ElementStyle::default()
        };
        let kind = ElementKind::Text {
            content: self.content.clone(),
            gradient: self.gradient.as_ref().map(TextGradient::resolve),
            letter_spacing: size.letter_spacing(),
        };
        Element::new(kind, style).with_key(self.key.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Reads;
    use crate::responsive::Tier;
    use crate::theme::ColorMode;
    use crate::types::Rgba;

    #[test]
    fn test_size_by_tier() {
        let text = Text::new("Build with").size([TextSize::Xl, TextSize::Xxl, TextSize::Xxxl]);

        let small = text.render(&RenderContext::fixed(Tier::Small, ColorMode::Dark));
        let ElementKind::Text { letter_spacing, .. } = small.kind else {
            panic!("expected text");
        };
        assert_eq!(letter_spacing, 0);
        assert!(small.style.attrs.contains(Attr::BOLD));

        let large = text.render(&RenderContext::fixed(Tier::Xxl, ColorMode::Dark));
        let ElementKind::Text { letter_spacing, .. } = large.kind else {
            panic!("expected text");
        };
        assert_eq!(letter_spacing, 1);
    }

    #[test]
    fn test_color_by_mode() {
        let text = Text::new("x").color(("black", "white"));
        let light = text.render(&RenderContext::fixed(Tier::Small, ColorMode::Light));
        let dark = text.render(&RenderContext::fixed(Tier::Small, ColorMode::Dark));
        assert_eq!(light.style.fg, Rgba::BLACK);
        assert_eq!(dark.style.fg, Rgba::WHITE);
    }

    #[test]
    fn test_gradient_skips_mode_read() {
        let text = Text::new("BLOCKCHAIN")
            .color(("black", "white"))
            .gradient(TextGradient::default());
        let ctx = RenderContext::fixed(Tier::Small, ColorMode::Light);
        let element = text.render(&ctx);

        assert!(!ctx.reads().contains(Reads::MODE));
        let ElementKind::Text { gradient, .. } = element.kind else {
            panic!("expected text");
        };
        assert_eq!(gradient, Some(TextGradient::default().resolve()));
    }

    #[test]
    fn test_empty_content_renders() {
        let element = Text::new("").render(&RenderContext::fixed(Tier::Small, ColorMode::Dark));
        assert_eq!(element.texts(), vec![""]);
    }

    #[test]
    fn test_small_is_dim() {
        assert_eq!(TextSize::Sm.attrs(), Attr::DIM);
        assert_eq!(TextSize::Md.attrs(), Attr::NONE);
        assert!(TextSize::Lg < TextSize::Xxxxl);
    }
}
