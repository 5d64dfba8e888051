//! FrameBuffer and drawing primitives.
//!
//! The FrameBuffer is a 2D grid of Cells that represents what should be
//! displayed on the terminal. All drawing operations work on this buffer.
//!
//! - **Flat storage**: `Vec<Cell>` with row-major indexing.
//! - **Clipping**: drawing functions accept an optional clip `Rect`.
//! - **Alpha blending**: translucent backgrounds blend with existing cells.
//! - **Wide characters**: the trailing half of a wide glyph holds char `0`.

use crate::layout::char_width;
use crate::types::{Attr, BorderStyle, Cell, Rect, Rgba, THICK_HORIZONTAL};

/// A 2D buffer of terminal cells.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// Create a new buffer filled with default cells.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// The full buffer as a clip rectangle.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Get a cell (None if out of bounds).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The characters of row `y`, trailing spaces trimmed.
    ///
    /// Wide glyph continuations are skipped, so the string reads as drawn.
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = self.index(0, y);
        let row = &self.cells[start..start + self.width as usize];
        let text: String = row
            .iter()
            .filter(|c| c.char != 0)
            .filter_map(|c| char::from_u32(c.char))
            .collect();
        text.trim_end().to_string()
    }

    /// Every row as text, joined with newlines.
    pub fn to_text(&self) -> String {
        (0..self.height)
            .map(|y| self.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // =========================================================================
    // Drawing Primitives
    // =========================================================================

    /// Set a single cell, blending a translucent background over the old one.
    ///
    /// Returns true if the cell was set.
    pub fn set_cell(
        &mut self,
        x: u16,
        y: u16,
        char: u32,
        fg: Rgba,
        bg: Rgba,
        attrs: Attr,
        clip: Option<&Rect>,
    ) -> bool {
        if !self.in_bounds(x, y) || clip.is_some_and(|c| !c.contains(x, y)) {
            return false;
        }

        let idx = self.index(x, y);
        let cell = &mut self.cells[idx];

        cell.bg = blend_over(bg, cell.bg);
        cell.char = char;
        cell.fg = fg;
        cell.attrs = attrs;
        true
    }

    /// Fill a rectangle with a background color, clearing its glyphs.
    pub fn fill_rect(&mut self, rect: Rect, bg: Rgba, clip: Option<&Rect>) {
        let Some(area) = self.clip(rect, clip) else {
            return;
        };

        for row in area.y..area.y + area.height {
            let start = self.index(area.x, row);
            let end = start + area.width as usize;
            for cell in &mut self.cells[start..end] {
                cell.bg = blend_over(bg, cell.bg);
                cell.char = b' ' as u32;
                cell.attrs = Attr::NONE;
            }
        }
    }

    /// Draw text at a position, keeping the background underneath.
    ///
    /// `fg` gives the color of each glyph from its column offset. Returns the
    /// number of cells used.
    pub fn draw_text(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        fg: impl Fn(u16) -> Rgba,
        attrs: Attr,
        clip: Option<&Rect>,
    ) -> u16 {
        let mut col = x;

        for ch in text.chars() {
            if col >= self.width {
                break;
            }
            let w = char_width(ch);
            if w == 0 {
                continue;
            }

            let color = fg(col - x);
            if ch != ' ' && self.set_cell(col, y, ch as u32, color, Rgba::TRANSPARENT, attrs, clip) && w == 2 {
                let in_clip = clip.is_none_or(|c| c.contains(col + 1, y));
                if let Some(next) = self.get_mut(col + 1, y).filter(|_| in_clip) {
                    next.char = 0;
                    next.fg = color;
                    next.attrs = attrs;
                }
            }

            col = col.saturating_add(w);
        }

        col - x
    }

    /// Draw a border around a rectangle.
    ///
    /// With `thick_bottom` the bottom edge uses the thick horizontal glyph.
    pub fn draw_border(
        &mut self,
        rect: Rect,
        style: BorderStyle,
        thick_bottom: bool,
        color: Rgba,
        clip: Option<&Rect>,
    ) {
        if rect.width < 2 || rect.height < 2 || style == BorderStyle::None {
            return;
        }

        let (horiz, vert, tl, tr, br, bl) = style.chars();
        let bottom = if thick_bottom { THICK_HORIZONTAL } else { horiz };

        let (x, y) = (rect.x, rect.y);
        let x2 = x + rect.width - 1;
        let y2 = y + rect.height - 1;

        let mut put = |cx: u16, cy: u16, ch: char| {
            self.set_cell(cx, cy, ch as u32, color, Rgba::TRANSPARENT, Attr::NONE, clip);
        };

        put(x, y, tl);
        put(x2, y, tr);
        put(x2, y2, br);
        put(x, y2, bl);

        for col in (x + 1)..x2 {
            put(col, y, horiz);
            put(col, y2, bottom);
        }
        for row in (y + 1)..y2 {
            put(x, row, vert);
            put(x2, row, vert);
        }
    }

    fn clip(&self, rect: Rect, clip: Option<&Rect>) -> Option<Rect> {
        let area = rect.intersect(&self.bounds())?;
        match clip {
            Some(c) => area.intersect(c),
            None => Some(area),
        }
    }
}

/// `src` painted over `dst`. Special colors and opaque colors replace;
/// fully transparent ones leave `dst` untouched.
fn blend_over(src: Rgba, dst: Rgba) -> Rgba {
    if src.is_opaque() || src.is_terminal_default() || src.is_ansi() {
        src
    } else if src.is_transparent() {
        dst
    } else {
        Rgba::blend(src, dst)
    }
}

// =============================================================================
// Tests
// =============================================================================
