//! ContainerBlock - the nestable flex box every layout is built from.
//!
//! Style inputs are accepted as written by page code (signed integers,
//! per-tier arrays, light/dark pairs) and clamped once, here, at
//! construction: negative spacing, padding, sizes and border widths become
//! zero, percents are limited to `0..=100`. Rendering never fails.
//!
//! # Example
//!
//! ```
//! use spark_compose::primitives::{ContainerBlock, Text};
//! use spark_compose::types::Length;
//!
//! let card = ContainerBlock::vstack()
//!     .width(Length::FULL)
//!     .padding([1, 2])
//!     .spacing(1)
//!     .border_width(1)
//!     .border_bottom_width(5)
//!     .border_radius(50)
//!     .background(("gray.100", "transparent"))
//!     .child(Text::new("Hello"));
//! # let _ = card;
//! ```

use crate::context::RenderContext;
use crate::element::{Child, Edges, Element, ElementKind, ElementStyle, Renderable};
use crate::responsive::BreakpointValue;
use crate::theme::{Fill, ModeValue, ThemeColor};
use crate::types::{
    clamp_cells, AlignItems, BorderStyle, Dimension, FlexDirection, FlexWrap, JustifyContent,
    Length,
};

/// A box with layout and style attributes and an ordered list of children.
pub struct ContainerBlock {
    direction: FlexDirection,
    wrap: FlexWrap,
    justify: JustifyContent,
    align: AlignItems,
    spacing: BreakpointValue<u16>,
    padding_x: BreakpointValue<u16>,
    padding_y: BreakpointValue<u16>,
    width: BreakpointValue<Dimension>,
    height: BreakpointValue<Dimension>,
    min_width: BreakpointValue<Dimension>,
    min_height: BreakpointValue<Dimension>,
    grow: f32,
    shrink: f32,
    border_width: u16,
    border_bottom_width: u16,
    border_radius: u16,
    border_color: ModeValue<ThemeColor>,
    fill: Fill,
    key: Option<String>,
    children: Vec<Child>,
}

impl ContainerBlock {
    pub fn new(direction: FlexDirection) -> Self {
        Self {
            direction,
            wrap: FlexWrap::NoWrap,
            justify: JustifyContent::FlexStart,
            align: AlignItems::Stretch,
            spacing: BreakpointValue::uniform(0),
            padding_x: BreakpointValue::uniform(0),
            padding_y: BreakpointValue::uniform(0),
            width: BreakpointValue::uniform(Dimension::Auto),
            height: BreakpointValue::uniform(Dimension::Auto),
            min_width: BreakpointValue::uniform(Dimension::Auto),
            min_height: BreakpointValue::uniform(Dimension::Auto),
            grow: 0.0,
            shrink: 1.0,
            border_width: 0,
            border_bottom_width: 0,
            border_radius: 0,
            border_color: ModeValue::both(ThemeColor::Default),
            fill: Fill::None,
            key: None,
            children: Vec::new(),
        }
    }

    /// Column with children centered on the cross axis.
    pub fn vstack() -> Self {
        Self::new(FlexDirection::Column).align(AlignItems::Center)
    }

    /// Row with children centered on the cross axis.
    pub fn hstack() -> Self {
        Self::new(FlexDirection::Row).align(AlignItems::Center)
    }

    /// Column centering its children on both axes.
    pub fn center() -> Self {
        Self::new(FlexDirection::Column)
            .align(AlignItems::Center)
            .justify(JustifyContent::Center)
    }

    // -------------------------------------------------------------------------
    // Layout
    // -------------------------------------------------------------------------

    pub fn direction(mut self, direction: FlexDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn wrap(mut self, wrap: FlexWrap) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn justify(mut self, justify: JustifyContent) -> Self {
        self.justify = justify;
        self
    }

    pub fn align(mut self, align: AlignItems) -> Self {
        self.align = align;
        self
    }

    /// Gap between children. Negative values are treated as zero.
    pub fn spacing(mut self, spacing: impl Into<BreakpointValue<i32>>) -> Self {
        self.spacing = clamp_all(spacing.into());
        self
    }

    /// Padding on all sides.
    pub fn padding(self, padding: impl Into<BreakpointValue<i32>>) -> Self {
        let padding = padding.into();
        self.padding_x(padding.clone()).padding_y(padding)
    }

    pub fn padding_x(mut self, padding: impl Into<BreakpointValue<i32>>) -> Self {
        self.padding_x = clamp_all(padding.into());
        self
    }

    pub fn padding_y(mut self, padding: impl Into<BreakpointValue<i32>>) -> Self {
        self.padding_y = clamp_all(padding.into());
        self
    }

    pub fn width(mut self, width: impl Into<BreakpointValue<Length>>) -> Self {
        self.width = width.into().map(|l| l.clamped());
        self
    }

    pub fn height(mut self, height: impl Into<BreakpointValue<Length>>) -> Self {
        self.height = height.into().map(|l| l.clamped());
        self
    }

    pub fn min_width(mut self, width: impl Into<BreakpointValue<Length>>) -> Self {
        self.min_width = width.into().map(|l| l.clamped());
        self
    }

    pub fn min_height(mut self, height: impl Into<BreakpointValue<Length>>) -> Self {
        self.min_height = height.into().map(|l| l.clamped());
        self
    }

    /// Flex grow factor. Negative or NaN becomes zero.
    pub fn grow(mut self, grow: f32) -> Self {
        self.grow = non_negative(grow);
        self
    }

    /// Flex shrink factor. Negative or NaN becomes zero.
    pub fn shrink(mut self, shrink: f32) -> Self {
        self.shrink = non_negative(shrink);
        self
    }

    // -------------------------------------------------------------------------
    // Decoration
    // -------------------------------------------------------------------------

    /// Any positive width draws a one-cell border.
    pub fn border_width(mut self, width: i32) -> Self {
        self.border_width = clamp_cells(width);
        self
    }

    /// A bottom width greater than the border width draws a thick bottom edge.
    pub fn border_bottom_width(mut self, width: i32) -> Self {
        self.border_bottom_width = clamp_cells(width);
        self
    }

    /// Any positive radius rounds the corners.
    pub fn border_radius(mut self, radius: i32) -> Self {
        self.border_radius = clamp_cells(radius);
        self
    }

    pub fn border_color(mut self, color: impl Into<ModeValue<ThemeColor>>) -> Self {
        self.border_color = color.into();
        self
    }

    pub fn fill(mut self, fill: Fill) -> Self {
        self.fill = fill;
        self
    }

    /// Solid background, optionally different per color mode.
    pub fn background(self, color: impl Into<ModeValue<ThemeColor>>) -> Self {
        self.fill(Fill::Solid(color.into()))
    }

    // -------------------------------------------------------------------------
    // Tree
    // -------------------------------------------------------------------------

    /// Identify the rendered element (for lookups in tests and hosts).
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn child(mut self, child: impl Renderable + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    pub fn boxed_child(mut self, child: Child) -> Self {
        self.children.push(child);
        self
    }

    pub fn children<R: Renderable + 'static>(mut self, children: impl IntoIterator<Item = R>) -> Self {
        self.children
            .extend(children.into_iter().map(|c| Box::new(c) as Child));
        self
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Style for the current pass. Tier and mode are read only if some
    /// attribute varies with them.
    pub(crate) fn resolve_style(&self, ctx: &RenderContext) -> ElementStyle {
        let has_border = self.border_width > 0 || self.border_bottom_width > 0;
        let border = match (has_border, self.border_radius > 0) {
            (false, _) => BorderStyle::None,
            (true, true) => BorderStyle::Rounded,
            (true, false) => BorderStyle::Single,
        };
        let fg = match border {
            BorderStyle::None => ThemeColor::Default.resolve(),
            _ => self.border_color.resolve_in(ctx).resolve(),
        };

        ElementStyle {
            direction: self.direction,
            wrap: self.wrap,
            justify: self.justify,
            align: self.align,
            gap: *self.spacing.resolve_in(ctx),
            padding: Edges::xy(*self.padding_x.resolve_in(ctx), *self.padding_y.resolve_in(ctx)),
            width: *self.width.resolve_in(ctx),
            height: *self.height.resolve_in(ctx),
            min_width: *self.min_width.resolve_in(ctx),
            min_height: *self.min_height.resolve_in(ctx),
            grow: self.grow,
            shrink: self.shrink,
            border,
            thick_bottom: self.border_bottom_width > self.border_width.max(1),
            fill: self.fill.resolve_in(ctx),
            fg,
            ..ElementStyle::default()
        }
    }
}

impl Default for ContainerBlock {
    fn default() -> Self {
        Self::new(FlexDirection::Column)
    }
}

impl Renderable for ContainerBlock {
    fn render(&self, ctx: &RenderContext) -> Element {
        let children = self.children.iter().map(|c| c.render(ctx)).collect();
        Element::new(ElementKind::Box, self.resolve_style(ctx))
            .with_key(self.key.clone())
            .with_children(children)
    }
}

fn clamp_all(value: BreakpointValue<i32>) -> BreakpointValue<u16> {
    value.map(|v| clamp_cells(*v))
}

fn non_negative(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.max(0.0) }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Reads;
    use crate::primitives::Text;
    use crate::responsive::Tier;
    use crate::theme::{ColorMode, ResolvedFill};
    use crate::types::Rgba;

    fn ctx(tier: Tier) -> RenderContext {
        RenderContext::fixed(tier, ColorMode::Light)
    }

    #[test]
    fn test_negative_inputs_clamp_to_zero() {
        let block = ContainerBlock::vstack()
            .spacing(-3)
            .padding(-1)
            .width(-40)
            .min_height(Length::Percent(-10.0))
            .border_width(-2)
            .grow(-1.0);

        let style = block.render(&ctx(Tier::Small)).style;
        assert_eq!(style.gap, 0);
        assert_eq!(style.padding, Edges::ZERO);
        assert_eq!(style.width, Dimension::Cells(0));
        assert_eq!(style.min_height, Dimension::Percent(0.0));
        assert_eq!(style.border, BorderStyle::None);
        assert_eq!(style.grow, 0.0);
    }

    #[test]
    fn test_responsive_padding_and_width() {
        let block = ContainerBlock::vstack().padding([5, 10]).width([30, 50, 70]);

        let small = block.render(&ctx(Tier::Small)).style;
        assert_eq!(small.padding, Edges::all(5));
        assert_eq!(small.width, Dimension::Cells(30));

        let large = block.render(&ctx(Tier::Large)).style;
        assert_eq!(large.padding, Edges::all(10));
        assert_eq!(large.width, Dimension::Cells(70));
    }

    #[test]
    fn test_children_render_in_order() {
        let block = ContainerBlock::hstack()
            .child(Text::new("a"))
            .child(ContainerBlock::vstack().child(Text::new("b")).child(Text::new("c")))
            .child(Text::new("d"));

        assert_eq!(block.child_count(), 3);
        let element = block.render(&ctx(Tier::Medium));
        assert_eq!(element.texts(), vec!["a", "b", "c", "d"]);
        assert_eq!(element.children.len(), 3);
    }

    #[test]
    fn test_border_variants() {
        let plain = ContainerBlock::vstack().border_width(1).render(&ctx(Tier::Small));
        assert_eq!(plain.style.border, BorderStyle::Single);
        assert!(!plain.style.thick_bottom);

        let card = ContainerBlock::vstack()
            .border_width(1)
            .border_bottom_width(5)
            .border_radius(50)
            .render(&ctx(Tier::Small));
        assert_eq!(card.style.border, BorderStyle::Rounded);
        assert!(card.style.thick_bottom);

        let tag = ContainerBlock::vstack()
            .border_bottom_width(3)
            .border_radius(50)
            .render(&ctx(Tier::Small));
        assert!(tag.style.thick_bottom);
    }

    #[test]
    fn test_background_follows_mode() {
        let block = ContainerBlock::vstack().background(("gray.100", "transparent"));

        let light = block.render(&RenderContext::fixed(Tier::Small, ColorMode::Light));
        assert_eq!(light.style.fill, ResolvedFill::Solid(Rgba::from_rgb_int(0xEDF2F7)));

        let dark = block.render(&RenderContext::fixed(Tier::Small, ColorMode::Dark));
        assert_eq!(dark.style.fill, ResolvedFill::Solid(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_static_block_reads_nothing() {
        let block = ContainerBlock::vstack().padding(2).background("gray.100");
        let c = ctx(Tier::Large);
        block.render(&c);
        assert_eq!(c.reads(), Reads::empty());
    }

    #[test]
    fn test_border_color_needs_border() {
        let c = ctx(Tier::Small);
        let plain = ContainerBlock::vstack().border_color(("black", "white")).render(&c);
        assert_eq!(plain.style.fg, Rgba::TERMINAL_DEFAULT);
        assert!(!c.reads().contains(Reads::MODE));

        let bordered = ContainerBlock::vstack()
            .border_width(1)
            .border_color(("black", "white"))
            .render(&c);
        assert_eq!(bordered.style.fg, Rgba::BLACK);
    }

    #[test]
    fn test_key_is_carried() {
        let element = ContainerBlock::vstack().key("card").render(&ctx(Tier::Small));
        assert_eq!(element.key.as_deref(), Some("card"));
    }
}
