//! Painting - element tree plus layout into a FrameBuffer.
//!
//! Elements are drawn in document order, so later siblings paint over earlier
//! ones and children over their parents. Each subtree is clipped to its
//! parent's rectangle.

use crate::element::{Element, ElementKind};
use crate::layout::{letter_spaced, string_width, wrap_text, LayoutTree};
use crate::primitives::is_clickable;
use crate::types::{Rect, Rgba, TextAlign};

use super::buffer::FrameBuffer;

/// Where a navigation link landed on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRegion {
    pub rect: Rect,
    pub target: String,
}

/// Output of painting one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameResult {
    pub buffer: FrameBuffer,
    pub link_regions: Vec<LinkRegion>,
}

impl FrameResult {
    pub fn empty(width: u16, height: u16) -> Self {
        Self {
            buffer: FrameBuffer::new(width, height),
            link_regions: Vec::new(),
        }
    }
}

/// Paint `root` using rectangles from `layout`.
///
/// `layout` must have been computed for `root`. Elements without a
/// rectangle are skipped.
pub fn paint(root: &Element, layout: &LayoutTree, width: u16, height: u16) -> FrameResult {
    let mut frame = FrameResult::empty(width, height);
    let bounds = frame.buffer.bounds();
    let mut painter = Painter {
        layout,
        next: 0,
        frame: &mut frame,
    };
    painter.paint(root, bounds);
    frame
}

struct Painter<'a> {
    layout: &'a LayoutTree,
    next: usize,
    frame: &'a mut FrameResult,
}

impl Painter<'_> {
    fn paint(&mut self, element: &Element, clip: Rect) {
        let index = self.next;
        self.next += 1;

        let Some(rect) = self.layout.get(index) else {
            self.skip(element);
            return;
        };
        let Some(visible) = rect.intersect(&clip) else {
            self.skip(element);
            return;
        };

        match &element.kind {
            ElementKind::Box => self.paint_box(element, rect, visible),
            ElementKind::Text {
                content,
                gradient,
                letter_spacing,
            } => {
                let text = letter_spaced(content, *letter_spacing);
                self.paint_text(element, &text, *gradient, rect, visible);
            }
            ElementKind::Asset { glyph, .. } => {
                let line = rect.height / 2;
                let offset = rect.width.saturating_sub(string_width(glyph)) / 2;
                let fg = element.style.fg;
                self.frame.buffer.draw_text(
                    rect.x + offset,
                    rect.y + line,
                    glyph,
                    |_| fg,
                    element.style.attrs,
                    Some(&visible),
                );
            }
            ElementKind::Link { target } => {
                if is_clickable(&visible) {
                    self.frame.link_regions.push(LinkRegion {
                        rect: visible,
                        target: target.clone(),
                    });
                }
            }
        }

        for child in &element.children {
            self.paint(child, visible);
        }
    }

    /// Advance past a subtree that is not drawn.
    fn skip(&mut self, element: &Element) {
        self.next += element.len() - 1;
    }

    fn paint_box(&mut self, element: &Element, rect: Rect, visible: Rect) {
        let style = &element.style;
        let buffer = &mut self.frame.buffer;

        for row in 0..rect.height {
            if let Some(bg) = style.fill.color_at(row, rect.height) {
                buffer.fill_rect(Rect::new(rect.x, rect.y + row, rect.width, 1), bg, Some(&visible));
            }
        }

        buffer.draw_border(rect, style.border, style.thick_bottom, style.fg, Some(&visible));
    }

    fn paint_text(
        &mut self,
        element: &Element,
        text: &str,
        gradient: Option<(Rgba, Rgba)>,
        rect: Rect,
        visible: Rect,
    ) {
        let style = &element.style;
        let lines = wrap_text(text, rect.width);
        let span = lines.iter().map(|l| string_width(l)).max().unwrap_or(0);

        for (row, line) in lines.iter().take(rect.height as usize).enumerate() {
            let line_width = string_width(line);
            let offset = match style.text_align {
                TextAlign::Left => 0,
                TextAlign::Center => rect.width.saturating_sub(line_width) / 2,
                TextAlign::Right => rect.width.saturating_sub(line_width),
            };

            let fg = style.fg;
            let color_at = |col: u16| match gradient {
                Some((from, to)) if span > 1 => {
                    Rgba::lerp(from, to, col as f32 / (span - 1) as f32)
                }
                Some((from, _)) => from,
                None => fg,
            };

            self.frame.buffer.draw_text(
                rect.x + offset,
                rect.y + row as u16,
                line,
                color_at,
                style.attrs,
                Some(&visible),
            );
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
