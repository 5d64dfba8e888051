//! BadgeRow - a wrapping row of rounded tags.
//!
//! Every badge in a row shares one style: rounded corners, a thick bottom
//! edge, the same padding and the same minimum width. The row wraps onto new
//! lines when the viewport is too narrow, keeping input order.
//!
//! A badge with a caption stacks the caption under its asset, which is how
//! feature tiles are drawn.

use crate::context::RenderContext;
use crate::element::{Element, Renderable};
use crate::primitives::{Asset, ContainerBlock, Text, TextSize};
use crate::responsive::BreakpointValue;
use crate::theme::{ModeValue, ThemeColor};
use crate::types::{clamp_cells, FlexWrap, JustifyContent, TextAlign};

/// Key of the badge at `index` in a rendered row.
pub fn badge_key(index: usize) -> String {
    format!("badge-{index}")
}

/// One tag: an asset and an optional caption.
#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    asset: Asset,
    caption: Option<String>,
}

impl Badge {
    pub fn new(asset: Asset) -> Self {
        Self {
            asset,
            caption: None,
        }
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn asset(&self) -> &Asset {
        &self.asset
    }

    pub fn caption_text(&self) -> Option<&str> {
        self.caption.as_deref()
    }
}

impl From<Asset> for Badge {
    fn from(asset: Asset) -> Self {
        Self::new(asset)
    }
}

pub struct BadgeRow {
    badges: Vec<Badge>,
    spacing: BreakpointValue<i32>,
    padding: BreakpointValue<i32>,
    badge_padding: u16,
    badge_min_width: u16,
    background: ModeValue<ThemeColor>,
    caption_color: ModeValue<ThemeColor>,
    caption_size: BreakpointValue<TextSize>,
    key: Option<String>,
}

impl BadgeRow {
    pub fn new(badges: impl IntoIterator<Item = impl Into<Badge>>) -> Self {
        Self {
            badges: badges.into_iter().map(Into::into).collect(),
            spacing: BreakpointValue::from_array([1, 2, 4]),
            padding: BreakpointValue::from_array([1, 2, 4]),
            badge_padding: 1,
            badge_min_width: 9,
            background: ModeValue::both(ThemeColor::Default),
            caption_color: ModeValue::both(ThemeColor::Default),
            caption_size: BreakpointValue::from_array([TextSize::Sm, TextSize::Md]),
            key: None,
        }
    }

    pub fn push(mut self, badge: impl Into<Badge>) -> Self {
        self.badges.push(badge.into());
        self
    }

    /// Gap between badges, on both axes.
    pub fn spacing(mut self, spacing: impl Into<BreakpointValue<i32>>) -> Self {
        self.spacing = spacing.into();
        self
    }

    /// Padding around the row.
    pub fn padding(mut self, padding: impl Into<BreakpointValue<i32>>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Vertical padding inside each badge. Horizontal padding is twice this.
    pub fn badge_padding(mut self, padding: i32) -> Self {
        self.badge_padding = clamp_cells(padding);
        self
    }

    pub fn badge_min_width(mut self, width: i32) -> Self {
        self.badge_min_width = clamp_cells(width);
        self
    }

    pub fn badge_background(mut self, color: impl Into<ModeValue<ThemeColor>>) -> Self {
        self.background = color.into();
        self
    }

    pub fn caption_color(mut self, color: impl Into<ModeValue<ThemeColor>>) -> Self {
        self.caption_color = color.into();
        self
    }

    pub fn caption_size(mut self, size: impl Into<BreakpointValue<TextSize>>) -> Self {
        self.caption_size = size.into();
        self
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn len(&self) -> usize {
        self.badges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.badges.is_empty()
    }

    fn badge(&self, index: usize, badge: &Badge) -> ContainerBlock {
        let mut block = ContainerBlock::vstack()
            .key(badge_key(index))
            .padding_x(i32::from(self.badge_padding) * 2)
            .padding_y(i32::from(self.badge_padding))
            .min_width(i32::from(self.badge_min_width))
            .spacing(1)
            .border_width(1)
            .border_bottom_width(5)
            .border_radius(50)
            .background(self.background.clone())
            .child(badge.asset.clone());
        if let Some(caption) = &badge.caption {
            block = block.child(
                Text::new(caption.clone())
                    .size(self.caption_size.clone())
                    .color(self.caption_color.clone())
                    .bold()
                    .align(TextAlign::Center),
            );
        }
        block
    }
}

impl Renderable for BadgeRow {
    fn render(&self, ctx: &RenderContext) -> Element {
        let mut row = ContainerBlock::hstack()
            .wrap(FlexWrap::Wrap)
            .justify(JustifyContent::Center)
            .spacing(self.spacing.clone())
            .padding(self.padding.clone())
            .children(
                self.badges
                    .iter()
                    .enumerate()
                    .map(|(i, badge)| self.badge(i, badge)),
            );
        if let Some(key) = &self.key {
            row = row.key(key.clone());
        }
        row.render(ctx)
    }
}
