//! Container fills and text gradients.

use crate::context::RenderContext;
use crate::types::Rgba;

use super::{ColorMode, ModeValue, ThemeColor};

/// Which way a vertical gradient runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradientDirection {
    /// `from` at the bottom edge, `to` at the top.
    ToTop,
    /// `from` at the top edge, `to` at the bottom.
    #[default]
    ToBottom,
}

/// Background of a container.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Fill {
    #[default]
    None,
    Solid(ModeValue<ThemeColor>),
    Gradient {
        from: ModeValue<ThemeColor>,
        to: ModeValue<ThemeColor>,
        direction: GradientDirection,
    },
}

impl Fill {
    pub fn solid(color: impl Into<ModeValue<ThemeColor>>) -> Self {
        Self::Solid(color.into())
    }

    pub fn gradient(
        direction: GradientDirection,
        from: impl Into<ModeValue<ThemeColor>>,
        to: impl Into<ModeValue<ThemeColor>>,
    ) -> Self {
        Self::Gradient {
            from: from.into(),
            to: to.into(),
            direction,
        }
    }

    /// Whether resolving this fill needs the color mode.
    pub fn depends_on_mode(&self) -> bool {
        match self {
            Self::None => false,
            Self::Solid(c) => c.light != c.dark,
            Self::Gradient { from, to, .. } => from.light != from.dark || to.light != to.dark,
        }
    }

    /// Resolve for the current pass, reading the mode only when it matters.
    pub fn resolve_in(&self, ctx: &RenderContext) -> ResolvedFill {
        if self.depends_on_mode() {
            self.resolve(ctx.mode())
        } else {
            self.resolve(ColorMode::Dark)
        }
    }

    pub fn resolve(&self, mode: ColorMode) -> ResolvedFill {
        match self {
            Self::None => ResolvedFill::None,
            Self::Solid(c) => ResolvedFill::Solid(c.resolve(mode).resolve()),
            Self::Gradient {
                from,
                to,
                direction,
            } => {
                let from = from.resolve(mode).resolve();
                let to = to.resolve(mode).resolve();
                match direction {
                    GradientDirection::ToBottom => ResolvedFill::Vertical { top: from, bottom: to },
                    GradientDirection::ToTop => ResolvedFill::Vertical { top: to, bottom: from },
                }
            }
        }
    }
}

/// A fill with concrete colors.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ResolvedFill {
    #[default]
    None,
    Solid(Rgba),
    Vertical { top: Rgba, bottom: Rgba },
}

impl ResolvedFill {
    /// Color of row `row` out of `rows`.
    pub fn color_at(&self, row: u16, rows: u16) -> Option<Rgba> {
        match *self {
            Self::None => None,
            Self::Solid(c) => Some(c),
            Self::Vertical { top, bottom } => {
                let t = if rows <= 1 {
                    0.0
                } else {
                    row as f32 / (rows - 1) as f32
                };
                Some(Rgba::lerp(top, bottom, t))
            }
        }
    }
}

/// Horizontal gradient applied glyph by glyph to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextGradient {
    pub from: ThemeColor,
    pub to: ThemeColor,
}

impl TextGradient {
    pub fn new(from: impl Into<ThemeColor>, to: impl Into<ThemeColor>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn resolve(&self) -> (Rgba, Rgba) {
        (self.from.resolve(), self.to.resolve())
    }
}

impl Default for TextGradient {
    fn default() -> Self {
        Self::new("orange.500", "yellow.300")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_fill_follows_mode() {
        let fill = Fill::solid(("gray.100", "transparent"));
        assert!(fill.depends_on_mode());
        assert_eq!(
            fill.resolve(ColorMode::Light),
            ResolvedFill::Solid(Rgba::from_rgb_int(0xEDF2F7))
        );
        assert_eq!(fill.resolve(ColorMode::Dark), ResolvedFill::Solid(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_to_top_gradient_starts_at_bottom() {
        let fill = Fill::gradient(GradientDirection::ToTop, ("white", "blackAlpha.900"), "transparent");
        let ResolvedFill::Vertical { top, bottom } = fill.resolve(ColorMode::Light) else {
            panic!("expected a vertical fill");
        };
        assert_eq!(bottom, Rgba::WHITE);
        assert_eq!(top, Rgba::TRANSPARENT);
    }

    #[test]
    fn test_vertical_color_at_edges() {
        let fill = ResolvedFill::Vertical {
            top: Rgba::BLACK,
            bottom: Rgba::WHITE,
        };
        assert_eq!(fill.color_at(0, 5), Some(Rgba::BLACK));
        assert_eq!(fill.color_at(4, 5), Some(Rgba::WHITE));
        assert_eq!(fill.color_at(0, 1), Some(Rgba::BLACK));
        assert_eq!(ResolvedFill::None.color_at(0, 1), None);
    }

    #[test]
    fn test_uniform_fill_is_mode_independent() {
        assert!(!Fill::solid("gray.100").depends_on_mode());
        assert!(!Fill::None.depends_on_mode());
    }
}
