//! Asset primitive - an opaque icon or logo.
//!
//! Assets are black boxes of fixed intrinsic size. In a terminal they are
//! drawn as a short glyph string centered in their box.

use crate::context::RenderContext;
use crate::element::{Element, ElementKind, ElementStyle, Renderable};
use crate::layout::string_width;
use crate::theme::{ModeValue, ThemeColor};
use crate::types::{clamp_cells, Dimension};

#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    name: String,
    glyph: String,
    width: u16,
    height: u16,
    color: ModeValue<ThemeColor>,
}

impl Asset {
    /// An asset named `name`, drawn as `glyph`, sized to the glyph.
    pub fn new(name: impl Into<String>, glyph: impl Into<String>) -> Self {
        let glyph = glyph.into();
        let width = string_width(&glyph);
        Self {
            name: name.into(),
            glyph,
            width,
            height: 1,
            color: ModeValue::both(ThemeColor::Default),
        }
    }

    /// Intrinsic size in cells. Negative values become zero.
    pub fn size(mut self, width: i32, height: i32) -> Self {
        self.width = clamp_cells(width);
        self.height = clamp_cells(height);
        self
    }

    pub fn color(mut self, color: impl Into<ModeValue<ThemeColor>>) -> Self {
        self.color = color.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Renderable for Asset {
    fn render(&self, ctx: &RenderContext) -> Element {
        let style = ElementStyle {
            width: Dimension::Cells(self.width),
            height: Dimension::Cells(self.height),
            shrink: 0.0,
            fg: self.color.resolve_in(ctx).resolve(),
            ..ElementStyle::default()
        };
        let kind = ElementKind::Asset {
            name: self.name.clone(),
            glyph: self.glyph.clone(),
        };
        Element::new(kind, style).with_key(Some(self.name.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responsive::Tier;
    use crate::theme::ColorMode;

    #[test]
    fn test_intrinsic_size_from_glyph() {
        let asset = Asset::new("bsc", "◆ BSC");
        let element = asset.render(&RenderContext::fixed(Tier::Small, ColorMode::Dark));
        assert_eq!(element.style.width, Dimension::Cells(5));
        assert_eq!(element.style.height, Dimension::Cells(1));
        assert_eq!(element.key.as_deref(), Some("bsc"));
    }

    #[test]
    fn test_explicit_size_is_clamped() {
        let element = Asset::new("logo", "M")
            .size(-4, 3)
            .render(&RenderContext::fixed(Tier::Small, ColorMode::Dark));
        assert_eq!(element.style.width, Dimension::Cells(0));
        assert_eq!(element.style.height, Dimension::Cells(3));
    }
}
