//! Elements - the resolved output of a render pass.
//!
//! Page code builds a tree of [`Renderable`]s whose style values may still
//! depend on the viewport tier or the color mode. Rendering with a
//! [`RenderContext`] resolves them into an [`Element`] tree: plain data with
//! concrete sizes and colors, ready for layout and painting.
//!
//! Elements carry no identity across passes. Each pass builds a new tree and
//! every element exclusively owns its children.

use std::rc::Rc;

use crate::context::RenderContext;
use crate::theme::ResolvedFill;
use crate::types::{
    AlignItems, Attr, BorderStyle, Dimension, FlexDirection, FlexWrap, JustifyContent, Rgba,
    TextAlign,
};

// =============================================================================
// Renderable
// =============================================================================

/// Anything that can produce an element for a render pass.
pub trait Renderable {
    fn render(&self, ctx: &RenderContext) -> Element;
}

/// An owned child renderable.
pub type Child = Box<dyn Renderable>;

impl<R: Renderable + ?Sized> Renderable for Box<R> {
    fn render(&self, ctx: &RenderContext) -> Element {
        (**self).render(ctx)
    }
}

impl<R: Renderable + ?Sized> Renderable for Rc<R> {
    fn render(&self, ctx: &RenderContext) -> Element {
        (**self).render(ctx)
    }
}

/// A pre-resolved element renders as itself.
impl Renderable for Element {
    fn render(&self, _ctx: &RenderContext) -> Element {
        self.clone()
    }
}

/// Renderable backed by a closure.
pub struct FnRenderable<F>(F);

impl<F: Fn(&RenderContext) -> Element> Renderable for FnRenderable<F> {
    fn render(&self, ctx: &RenderContext) -> Element {
        (self.0)(ctx)
    }
}

/// Wrap a closure as a renderable.
pub fn from_fn<F: Fn(&RenderContext) -> Element>(f: F) -> FnRenderable<F> {
    FnRenderable(f)
}

// =============================================================================
// Style
// =============================================================================

/// Spacing on four sides, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Edges {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Edges {
    pub const ZERO: Self = Self::all(0);

    pub const fn all(n: u16) -> Self {
        Self {
            top: n,
            right: n,
            bottom: n,
            left: n,
        }
    }

    /// Horizontal `x`, vertical `y`.
    pub const fn xy(x: u16, y: u16) -> Self {
        Self {
            top: y,
            right: x,
            bottom: y,
            left: x,
        }
    }
}

/// Resolved style of one element.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementStyle {
    pub direction: FlexDirection,
    pub wrap: FlexWrap,
    pub justify: JustifyContent,
    pub align: AlignItems,
    /// Space between children along the main axis (and between wrapped lines).
    pub gap: u16,
    pub padding: Edges,
    pub width: Dimension,
    pub height: Dimension,
    pub min_width: Dimension,
    pub min_height: Dimension,
    pub grow: f32,
    pub shrink: f32,
    pub border: BorderStyle,
    /// Draw the bottom edge with the thick glyph.
    pub thick_bottom: bool,
    pub fill: ResolvedFill,
    pub fg: Rgba,
    pub attrs: Attr,
    pub text_align: TextAlign,
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self {
            direction: FlexDirection::Column,
            wrap: FlexWrap::NoWrap,
            justify: JustifyContent::FlexStart,
            align: AlignItems::Stretch,
            gap: 0,
            padding: Edges::ZERO,
            width: Dimension::Auto,
            height: Dimension::Auto,
            min_width: Dimension::Auto,
            min_height: Dimension::Auto,
            grow: 0.0,
            shrink: 1.0,
            border: BorderStyle::None,
            thick_bottom: false,
            fill: ResolvedFill::None,
            fg: Rgba::TERMINAL_DEFAULT,
            attrs: Attr::NONE,
            text_align: TextAlign::Left,
        }
    }
}

// =============================================================================
// Element
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    /// Flex container.
    Box,
    /// A run of text.
    Text {
        content: String,
        /// Horizontal per-glyph gradient, overriding `fg`.
        gradient: Option<(Rgba, Rgba)>,
        /// Blank cells inserted between glyphs.
        letter_spacing: u16,
    },
    /// An opaque icon or image of fixed intrinsic size.
    Asset { name: String, glyph: String },
    /// A region that navigates to `target` when activated.
    Link { target: String },
}

/// One node of a resolved tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub kind: ElementKind,
    pub style: ElementStyle,
    pub key: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(kind: ElementKind, style: ElementStyle) -> Self {
        Self {
            kind,
            style,
            key: None,
            children: Vec::new(),
        }
    }

    /// An empty box with default style.
    pub fn empty() -> Self {
        Self::new(ElementKind::Box, ElementStyle::default())
    }

    pub fn with_key(mut self, key: Option<String>) -> Self {
        self.key = key;
        self
    }

    pub fn with_children(mut self, children: Vec<Element>) -> Self {
        self.children = children;
        self
    }

    pub fn is_text(&self) -> bool {
        matches!(self.kind, ElementKind::Text { .. })
    }

    /// Visit every element in document (pre-)order.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a Element)) {
        f(self);
        for child in &self.children {
            child.walk(f);
        }
    }

    /// First element in document order with the given key.
    pub fn find(&self, key: &str) -> Option<&Element> {
        if self.key.as_deref() == Some(key) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Number of elements (including this one) matching `pred`.
    pub fn count(&self, pred: impl Fn(&Element) -> bool) -> usize {
        let mut n = 0;
        self.walk(&mut |e| {
            if pred(e) {
                n += 1;
            }
        });
        n
    }

    /// Total number of elements in the tree.
    pub fn len(&self) -> usize {
        self.count(|_| true)
    }

    /// Text content of every text element, in document order.
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.walk(&mut |e| {
            if let ElementKind::Text { content, .. } = &e.kind {
                out.push(content.as_str());
            }
        });
        out
    }
}
