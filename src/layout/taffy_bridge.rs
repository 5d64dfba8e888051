//! Taffy Bridge - Integration with the Taffy layout engine
//!
//! Converts resolved element styles to Taffy styles, runs flexbox layout and
//! extracts absolute cell rectangles in document order.

use taffy::{
    AlignItems as TaffyAlignItems, AvailableSpace, Dimension as TaffyDimension, Display,
    FlexDirection as TaffyFlexDirection, FlexWrap as TaffyFlexWrap,
    JustifyContent as TaffyJustifyContent, LengthPercentage, NodeId, Rect as TaffyRect, Size,
    Style, TaffyTree,
};

use crate::element::{Element, ElementKind};
use crate::error::{ComposeError, Result};
use crate::types::{
    AlignItems, BorderStyle, Dimension, FlexDirection, FlexWrap, JustifyContent, Rect,
};

use super::text_measure::{letter_spaced, max_line_width, string_width, wrap_text};

// =============================================================================
// LAYOUT RESULT
// =============================================================================

/// Computed rectangles for every element of a tree.
///
/// `rects[i]` is the absolute position of the `i`-th element in document
/// (pre-)order, the same order as [`Element::walk`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutTree {
    pub rects: Vec<Rect>,
    pub content_width: u16,
    pub content_height: u16,
}

impl LayoutTree {
    pub fn get(&self, index: usize) -> Option<Rect> {
        self.rects.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Rectangle of the first element of `root` keyed `key`.
    pub fn rect_of(&self, root: &Element, key: &str) -> Option<Rect> {
        let mut index = 0;
        let mut found = None;
        root.walk(&mut |e| {
            if found.is_none() && e.key.as_deref() == Some(key) {
                found = Some(index);
            }
            index += 1;
        });
        found.and_then(|i| self.get(i))
    }
}

// =============================================================================
// CONVERSIONS
// =============================================================================

fn to_taffy_dimension(dim: Dimension) -> TaffyDimension {
    match dim {
        Dimension::Auto => TaffyDimension::Auto,
        Dimension::Cells(n) => TaffyDimension::Length(n as f32),
        Dimension::Percent(p) => TaffyDimension::Percent(p / 100.0),
    }
}

fn to_taffy_flex_direction(dir: FlexDirection) -> TaffyFlexDirection {
    match dir {
        FlexDirection::Column => TaffyFlexDirection::Column,
        FlexDirection::Row => TaffyFlexDirection::Row,
    }
}

fn to_taffy_flex_wrap(wrap: FlexWrap) -> TaffyFlexWrap {
    match wrap {
        FlexWrap::NoWrap => TaffyFlexWrap::NoWrap,
        FlexWrap::Wrap => TaffyFlexWrap::Wrap,
    }
}

fn to_taffy_justify_content(justify: JustifyContent) -> Option<TaffyJustifyContent> {
    Some(match justify {
        JustifyContent::FlexStart => TaffyJustifyContent::FlexStart,
        JustifyContent::Center => TaffyJustifyContent::Center,
        JustifyContent::FlexEnd => TaffyJustifyContent::FlexEnd,
        JustifyContent::SpaceBetween => TaffyJustifyContent::SpaceBetween,
    })
}

fn to_taffy_align_items(align: AlignItems) -> Option<TaffyAlignItems> {
    Some(match align {
        AlignItems::Stretch => TaffyAlignItems::Stretch,
        AlignItems::FlexStart => TaffyAlignItems::FlexStart,
        AlignItems::Center => TaffyAlignItems::Center,
        AlignItems::FlexEnd => TaffyAlignItems::FlexEnd,
    })
}

fn cells(n: u16) -> LengthPercentage {
    LengthPercentage::Length(n as f32)
}

// =============================================================================
// STYLE BUILDING
// =============================================================================

fn build_style(element: &Element) -> Style {
    let s = &element.style;
    let border = cells(u16::from(s.border != BorderStyle::None));

    Style {
        display: Display::Flex,
        flex_direction: to_taffy_flex_direction(s.direction),
        flex_wrap: to_taffy_flex_wrap(s.wrap),
        justify_content: to_taffy_justify_content(s.justify),
        align_items: to_taffy_align_items(s.align),
        flex_grow: s.grow,
        flex_shrink: s.shrink,
        size: Size {
            width: to_taffy_dimension(s.width),
            height: to_taffy_dimension(s.height),
        },
        min_size: Size {
            width: to_taffy_dimension(s.min_width),
            height: to_taffy_dimension(s.min_height),
        },
        padding: TaffyRect {
            top: cells(s.padding.top),
            right: cells(s.padding.right),
            bottom: cells(s.padding.bottom),
            left: cells(s.padding.left),
        },
        border: TaffyRect {
            top: border,
            right: border,
            bottom: border,
            left: border,
        },
        gap: Size {
            width: cells(s.gap),
            height: cells(s.gap),
        },
        ..Default::default()
    }
}

// =============================================================================
// TEXT MEASUREMENT
// =============================================================================

/// Width of the widest unbreakable word.
fn min_content_width(content: &str) -> u16 {
    content
        .split([' ', '\n'])
        .map(string_width)
        .max()
        .unwrap_or(0)
}

fn measure_text(
    content: &str,
    known_dimensions: Size<Option<f32>>,
    available_space: Size<AvailableSpace>,
) -> Size<f32> {
    if content.is_empty() {
        return Size::ZERO;
    }

    let wrap_width = match (known_dimensions.width, available_space.width) {
        (Some(w), _) | (None, AvailableSpace::Definite(w)) => w.max(0.0).floor() as u16,
        (None, AvailableSpace::MinContent) => min_content_width(content),
        (None, AvailableSpace::MaxContent) => max_line_width(content),
    };

    let lines = wrap_text(content, wrap_width.max(1));
    let text_width = lines.iter().map(|l| string_width(l)).max().unwrap_or(0);

    Size {
        width: known_dimensions.width.unwrap_or(text_width as f32),
        height: known_dimensions.height.unwrap_or(lines.len() as f32),
    }
}

// =============================================================================
// TREE BUILDING
// =============================================================================

fn layout_error(err: taffy::TaffyError) -> ComposeError {
    ComposeError::Layout(err.to_string())
}

/// Add `element` and its subtree to `tree` in document order.
///
/// `texts[i]` holds the drawn text of the `i`-th element, used as the
/// measure context of text leaves.
fn build_node(
    tree: &mut TaffyTree<usize>,
    element: &Element,
    style: Style,
    nodes: &mut Vec<NodeId>,
    texts: &mut Vec<String>,
) -> Result<NodeId> {
    let index = nodes.len();

    let node = match &element.kind {
        ElementKind::Text {
            content,
            letter_spacing,
            ..
        } => {
            texts.push(letter_spaced(content, *letter_spacing));
            tree.new_leaf_with_context(style, index)
        }
        _ => {
            texts.push(String::new());
            tree.new_leaf(style)
        }
    }
    .map_err(layout_error)?;
    nodes.push(node);

    for child in &element.children {
        let child_node = build_node(tree, child, build_style(child), nodes, texts)?;
        tree.add_child(node, child_node).map_err(layout_error)?;
    }

    Ok(node)
}

fn extract(
    tree: &TaffyTree<usize>,
    element: &Element,
    nodes: &[NodeId],
    next: &mut usize,
    origin: (f32, f32),
    rects: &mut Vec<Rect>,
) -> Result<()> {
    let layout = tree.layout(nodes[*next]).map_err(layout_error)?;
    *next += 1;

    let x = origin.0 + layout.location.x;
    let y = origin.1 + layout.location.y;
    rects.push(Rect::new(
        to_cell(x),
        to_cell(y),
        to_cell(layout.size.width),
        to_cell(layout.size.height),
    ));

    for child in &element.children {
        extract(tree, child, nodes, next, (x, y), rects)?;
    }
    Ok(())
}

fn to_cell(v: f32) -> u16 {
    v.round().clamp(0.0, u16::MAX as f32) as u16
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Compute layout for an element tree using Taffy.
///
/// # Arguments
///
/// * `root` - The resolved tree
/// * `terminal_width` - Available width in terminal columns
/// * `terminal_height` - Available height in terminal rows
/// * `constrain_height` - If true, constrain to terminal height (fullscreen mode)
///
/// A root with automatic width fills the terminal width. With
/// `constrain_height` an automatic root height fills the terminal height too;
/// otherwise the root grows with its content (inline mode).
pub fn compute_layout(
    root: &Element,
    terminal_width: u16,
    terminal_height: u16,
    constrain_height: bool,
) -> Result<LayoutTree> {
    let mut tree: TaffyTree<usize> = TaffyTree::new();
    let mut nodes = Vec::with_capacity(root.len());
    let mut texts = Vec::with_capacity(root.len());

    let mut root_style = build_style(root);
    if root_style.size.width == TaffyDimension::Auto {
        root_style.size.width = TaffyDimension::Length(terminal_width as f32);
    }
    if constrain_height && root_style.size.height == TaffyDimension::Auto {
        root_style.size.height = TaffyDimension::Length(terminal_height as f32);
    }

    let root_node = build_node(&mut tree, root, root_style, &mut nodes, &mut texts)?;

    let available = Size {
        width: AvailableSpace::Definite(terminal_width as f32),
        height: if constrain_height {
            AvailableSpace::Definite(terminal_height as f32)
        } else {
            AvailableSpace::MaxContent
        },
    };

    let mut measure_fn = |known_dimensions: Size<Option<f32>>,
                          available_space: Size<AvailableSpace>,
                          _node_id: NodeId,
                          context: Option<&mut usize>,
                          _style: &Style| {
        match context {
            Some(&mut index) => measure_text(&texts[index], known_dimensions, available_space),
            None => Size::ZERO,
        }
    };

    tree.compute_layout_with_measure(root_node, available, &mut measure_fn)
        .map_err(layout_error)?;

    let mut rects = Vec::with_capacity(nodes.len());
    extract(&tree, root, &nodes, &mut 0, (0.0, 0.0), &mut rects)?;

    let (content_width, content_height) = rects
        .first()
        .map(|r| (r.width, r.height))
        .unwrap_or_default();

    Ok(LayoutTree {
        rects,
        content_width,
        content_height,
    })
}
