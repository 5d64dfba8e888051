//! HeadingBlock - a section title in two parts.
//!
//! The plain part is drawn in the body color, the accent part along a
//! horizontal [`TextGradient`]. Both share one responsive size.

use crate::context::RenderContext;
use crate::element::{Element, Renderable};
use crate::primitives::{ContainerBlock, Text, TextSize};
use crate::responsive::BreakpointValue;
use crate::theme::{ModeValue, TextGradient, ThemeColor};
use crate::types::{FlexWrap, JustifyContent, TextAlign};

/// Keys of the two text elements in the rendered heading.
pub const PLAIN_KEY: &str = "heading-plain";
pub const GRADIENT_KEY: &str = "heading-gradient";

pub struct HeadingBlock {
    plain: String,
    accent: String,
    size: BreakpointValue<TextSize>,
    gradient: TextGradient,
    color: ModeValue<ThemeColor>,
    key: Option<String>,
}

impl HeadingBlock {
    /// `plain` followed by `accent`. Either may be empty.
    pub fn new(plain: impl Into<String>, accent: impl Into<String>) -> Self {
        Self {
            plain: plain.into(),
            accent: accent.into(),
            size: BreakpointValue::from_array([TextSize::Xl, TextSize::Xxl, TextSize::Xxxl]),
            gradient: TextGradient::default(),
            color: ModeValue::both(ThemeColor::Default),
            key: None,
        }
    }

    pub fn size(mut self, size: impl Into<BreakpointValue<TextSize>>) -> Self {
        self.size = size.into();
        self
    }

    pub fn gradient(mut self, gradient: TextGradient) -> Self {
        self.gradient = gradient;
        self
    }

    /// Color of the plain part.
    pub fn color(mut self, color: impl Into<ModeValue<ThemeColor>>) -> Self {
        self.color = color.into();
        self
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn plain_text(&self) -> &str {
        &self.plain
    }

    pub fn gradient_text(&self) -> &str {
        &self.accent
    }
}

impl Renderable for HeadingBlock {
    fn render(&self, ctx: &RenderContext) -> Element {
        let plain = Text::new(self.plain.clone())
            .size(self.size.clone())
            .color(self.color.clone())
            .align(TextAlign::Center)
            .key(PLAIN_KEY);
        let accent = Text::new(self.accent.clone())
            .size(self.size.clone())
            .gradient(self.gradient.clone())
            .align(TextAlign::Center)
            .key(GRADIENT_KEY);

        let mut row = ContainerBlock::hstack()
            .wrap(FlexWrap::Wrap)
            .justify(JustifyContent::Center)
            .spacing(1)
            .child(plain)
            .child(accent);
        if let Some(key) = &self.key {
            row = row.key(key.clone());
        }
        row.render(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementKind;
    use crate::layout::compute_layout;
    use crate::renderer::paint;
    use crate::responsive::Tier;
    use crate::theme::ColorMode;
    use crate::types::Attr;

    fn letter_spacing(element: &Element, key: &str) -> u16 {
        match element.find(key).map(|e| &e.kind) {
            Some(ElementKind::Text { letter_spacing, .. }) => *letter_spacing,
            _ => panic!("missing {key}"),
        }
    }

    #[test]
    fn test_plain_then_gradient() {
        let heading = HeadingBlock::new("Supported by the", "BEST").key("chains");
        let element = heading.render(&RenderContext::fixed(Tier::Small, ColorMode::Dark));

        assert_eq!(element.key.as_deref(), Some("chains"));
        assert_eq!(element.texts(), vec!["Supported by the", "BEST"]);

        let accent = element.find(GRADIENT_KEY).unwrap();
        let ElementKind::Text { gradient, .. } = &accent.kind else {
            panic!("expected text");
        };
        assert_eq!(*gradient, Some(TextGradient::default().resolve()));

        let ElementKind::Text { gradient, .. } = &element.find(PLAIN_KEY).unwrap().kind else {
            panic!("expected text");
        };
        assert_eq!(*gradient, None);
    }

    #[test]
    fn test_size_follows_tier() {
        let heading = HeadingBlock::new("Build with the power of", "BLOCKCHAIN");

        let small = heading.render(&RenderContext::fixed(Tier::Small, ColorMode::Dark));
        assert_eq!(letter_spacing(&small, GRADIENT_KEY), 0);
        assert!(small.find(PLAIN_KEY).unwrap().style.attrs.contains(Attr::BOLD));

        let large = heading.render(&RenderContext::fixed(Tier::Large, ColorMode::Dark));
        assert_eq!(letter_spacing(&large, PLAIN_KEY), 1);
        assert_eq!(letter_spacing(&large, GRADIENT_KEY), 1);
    }

    #[test]
    fn test_empty_parts_render_empty() {
        let heading = HeadingBlock::new("", "");
        let element = heading.render(&RenderContext::fixed(Tier::Medium, ColorMode::Light));
        assert_eq!(element.texts(), vec!["", ""]);

        let layout = compute_layout(&element, 20, 3, false).unwrap();
        let frame = paint(&element, &layout, 20, layout.content_height.max(1));
        assert_eq!(frame.buffer.to_text().trim(), "");
    }

    #[test]
    fn test_paints_on_one_line_when_wide() {
        let heading = HeadingBlock::new("Supported", "CURRENCIES").size(TextSize::Lg);
        let element = heading.render(&RenderContext::fixed(Tier::Medium, ColorMode::Dark));
        let layout = compute_layout(&element, 40, 3, false).unwrap();
        let frame = paint(&element, &layout, 40, 1);
        assert_eq!(frame.buffer.row_text(0).trim(), "Supported CURRENCIES");
    }
}
