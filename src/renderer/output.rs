//! Terminal output with crossterm.
//!
//! - [`write_frame`] emits a whole frame.
//! - [`DiffRenderer`] keeps the previous frame and only emits changed cells,
//!   wrapped in a synchronized update.
//! - [`InlineRenderer`] redraws in the normal screen buffer, erasing the
//!   previous frame first.
//!
//! Both go through [`CellWriter`], which tracks cursor, colors and attributes
//! so escape codes are only emitted for state that changed.

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, MoveToColumn, MoveUp, Show};
use crossterm::queue;
use crossterm::style::{
    Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{
    BeginSynchronizedUpdate, Clear, ClearType, EndSynchronizedUpdate, EnterAlternateScreen,
    LeaveAlternateScreen,
};

use super::buffer::FrameBuffer;
use crate::types::{Attr, Cell, Rgba};

/// Map a cell color to a crossterm color.
///
/// Terminal default and fully transparent colors reset to the terminal's own.
pub fn to_crossterm_color(color: Rgba) -> Color {
    if color.is_terminal_default() || color.is_transparent() {
        Color::Reset
    } else if color.is_ansi() {
        Color::AnsiValue(color.ansi_index())
    } else {
        Color::Rgb {
            r: color.r.clamp(0, 255) as u8,
            g: color.g.clamp(0, 255) as u8,
            b: color.b.clamp(0, 255) as u8,
        }
    }
}

// =============================================================================
// CellWriter
// =============================================================================

/// Writes cells while tracking terminal state to minimize output.
#[derive(Debug)]
struct CellWriter {
    last_x: i32,
    last_y: i32,
    last_fg: Option<Rgba>,
    last_bg: Option<Rgba>,
    last_attrs: Attr,
}

impl CellWriter {
    fn new() -> Self {
        Self {
            last_x: -1,
            last_y: -1,
            last_fg: None,
            last_bg: None,
            last_attrs: Attr::NONE,
        }
    }

    fn write_cell<W: Write>(&mut self, out: &mut W, x: u16, y: u16, cell: &Cell) -> io::Result<()> {
        // Continuations of wide glyphs were drawn with the glyph itself.
        if cell.char != 0 && (y as i32 != self.last_y || x as i32 != self.last_x + 1) {
            queue!(out, MoveTo(x, y))?;
        }
        self.last_x = x as i32;
        self.last_y = y as i32;
        self.write_styled(out, cell)
    }

    /// Write at the current cursor position.
    fn write_cell_inline<W: Write>(&mut self, out: &mut W, cell: &Cell) -> io::Result<()> {
        self.write_styled(out, cell)
    }

    fn write_styled<W: Write>(&mut self, out: &mut W, cell: &Cell) -> io::Result<()> {
        if cell.char == 0 {
            return Ok(());
        }

        if cell.attrs != self.last_attrs {
            queue!(out, SetAttribute(Attribute::Reset))?;
            for (flag, attribute) in [
                (Attr::BOLD, Attribute::Bold),
                (Attr::DIM, Attribute::Dim),
                (Attr::ITALIC, Attribute::Italic),
                (Attr::UNDERLINE, Attribute::Underlined),
            ] {
                if cell.attrs.contains(flag) {
                    queue!(out, SetAttribute(attribute))?;
                }
            }
            self.last_fg = None;
            self.last_bg = None;
            self.last_attrs = cell.attrs;
        }

        if self.last_fg != Some(cell.fg) {
            queue!(out, SetForegroundColor(to_crossterm_color(cell.fg)))?;
            self.last_fg = Some(cell.fg);
        }
        if self.last_bg != Some(cell.bg) {
            queue!(out, SetBackgroundColor(to_crossterm_color(cell.bg)))?;
            self.last_bg = Some(cell.bg);
        }

        let ch = char::from_u32(cell.char).unwrap_or(' ');
        queue!(out, Print(ch))
    }
}

/// Write every cell of `buffer` to `out`, starting at the top-left corner.
pub fn write_frame<W: Write>(out: &mut W, buffer: &FrameBuffer) -> io::Result<()> {
    let mut writer = CellWriter::new();
    for y in 0..buffer.height() {
        for x in 0..buffer.width() {
            if let Some(cell) = buffer.get(x, y) {
                writer.write_cell(out, x, y, cell)?;
            }
        }
    }
    queue!(out, SetAttribute(Attribute::Reset))?;
    out.flush()
}

// =============================================================================
// DiffRenderer
// =============================================================================

/// Differential renderer for fullscreen mode.
///
/// Compares each frame to the previous one and only outputs changed cells.
#[derive(Debug, Default)]
pub struct DiffRenderer {
    previous: Option<FrameBuffer>,
}

impl DiffRenderer {
    pub fn new() -> Self {
        Self { previous: None }
    }

    /// Render a frame, outputting only changed cells.
    ///
    /// Returns true if any cell changed. A frame of a different size than
    /// the previous one is drawn in full.
    pub fn render<W: Write>(&mut self, out: &mut W, buffer: &FrameBuffer) -> io::Result<bool> {
        let mut writer = CellWriter::new();
        let mut has_changes = false;

        let previous = self
            .previous
            .as_ref()
            .filter(|p| p.width() == buffer.width() && p.height() == buffer.height());
        if previous.is_none() {
            queue!(out, Clear(ClearType::All))?;
        }

        queue!(out, BeginSynchronizedUpdate)?;
        for y in 0..buffer.height() {
            for x in 0..buffer.width() {
                let Some(cell) = buffer.get(x, y) else {
                    continue;
                };
                if previous.and_then(|p| p.get(x, y)) == Some(cell) {
                    continue;
                }
                has_changes = true;
                writer.write_cell(out, x, y, cell)?;
            }
        }
        queue!(out, SetAttribute(Attribute::Reset), EndSynchronizedUpdate)?;
        out.flush()?;

        self.previous = Some(buffer.clone());
        Ok(has_changes)
    }

    /// Forget the previous frame. The next render is a full redraw.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }
}

// =============================================================================
// InlineRenderer
// =============================================================================

/// Renderer for the normal screen buffer.
///
/// Each frame erases the rows the previous frame occupied and writes the
/// new one from the left edge, leaving scrollback above it untouched.
#[derive(Debug, Default)]
pub struct InlineRenderer {
    previous_height: u16,
}

impl InlineRenderer {
    pub fn new() -> Self {
        Self { previous_height: 0 }
    }

    pub fn render<W: Write>(&mut self, out: &mut W, buffer: &FrameBuffer) -> io::Result<()> {
        queue!(out, BeginSynchronizedUpdate)?;
        self.erase(out)?;

        let mut writer = CellWriter::new();
        for y in 0..buffer.height() {
            if y > 0 {
                queue!(out, SetAttribute(Attribute::Reset), Print("\r\n"))?;
                writer = CellWriter::new();
            }
            for x in 0..buffer.width() {
                if let Some(cell) = buffer.get(x, y) {
                    writer.write_cell_inline(out, cell)?;
                }
            }
        }

        queue!(out, SetAttribute(Attribute::Reset), EndSynchronizedUpdate)?;
        out.flush()?;
        self.previous_height = buffer.height();
        Ok(())
    }

    /// Erase the last frame and forget it.
    pub fn clear<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        self.erase(out)?;
        out.flush()?;
        self.previous_height = 0;
        Ok(())
    }

    pub fn previous_height(&self) -> u16 {
        self.previous_height
    }

    fn erase<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.previous_height == 0 {
            return Ok(());
        }
        // The cursor rests on the last row of the previous frame.
        if self.previous_height > 1 {
            queue!(out, MoveUp(self.previous_height - 1))?;
        }
        queue!(out, MoveToColumn(0), Clear(ClearType::FromCursorDown))
    }
}

/// Switch to the alternate screen and hide the cursor.
pub fn enter_fullscreen<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, EnterAlternateScreen, Hide, Clear(ClearType::All))?;
    out.flush()
}

/// Restore the main screen and the cursor.
pub fn exit_fullscreen<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, SetAttribute(Attribute::Reset), Show, LeaveAlternateScreen)?;
    out.flush()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rect;

    fn frame(text: &str) -> FrameBuffer {
        let mut buf = FrameBuffer::new(8, 1);
        buf.draw_text(0, 0, text, |_| Rgba::WHITE, Attr::NONE, None);
        buf
    }

    #[test]
    fn test_color_mapping() {
        assert_eq!(to_crossterm_color(Rgba::TERMINAL_DEFAULT), Color::Reset);
        assert_eq!(to_crossterm_color(Rgba::TRANSPARENT), Color::Reset);
        assert_eq!(to_crossterm_color(Rgba::ansi(4)), Color::AnsiValue(4));
        assert_eq!(
            to_crossterm_color(Rgba::rgb(1, 2, 3)),
            Color::Rgb { r: 1, g: 2, b: 3 }
        );
    }

    #[test]
    fn test_write_frame_contains_text() {
        let mut out = Vec::new();
        write_frame(&mut out, &frame("hey")).unwrap();
        let s = String::from_utf8_lossy(&out);
        assert!(s.contains("hey"));
        assert!(s.contains("\x1b["));
    }

    #[test]
    fn test_write_frame_skips_wide_continuation() {
        let mut buf = FrameBuffer::new(2, 1);
        buf.draw_text(0, 0, "日", |_| Rgba::WHITE, Attr::NONE, None);
        let mut out = Vec::new();
        write_frame(&mut out, &buf).unwrap();
        assert_eq!(String::from_utf8_lossy(&out).matches('日').count(), 1);
    }

    #[test]
    fn test_diff_renderer_only_emits_changes() {
        let mut renderer = DiffRenderer::new();
        let mut out = Vec::new();
        assert!(renderer.render(&mut out, &frame("abc")).unwrap());
        assert!(renderer.has_previous());

        let mut out = Vec::new();
        assert!(!renderer.render(&mut out, &frame("abc")).unwrap());

        let mut out = Vec::new();
        assert!(renderer.render(&mut out, &frame("abd")).unwrap());
        let s = String::from_utf8_lossy(&out);
        assert!(s.contains('d'));
        assert!(!s.contains('a'));
    }

    #[test]
    fn test_inline_renderer_rows_and_erase() {
        let mut renderer = InlineRenderer::new();
        let mut buf = FrameBuffer::new(3, 2);
        buf.draw_text(0, 0, "ab", |_| Rgba::WHITE, Attr::NONE, None);
        buf.draw_text(0, 1, "cd", |_| Rgba::WHITE, Attr::NONE, None);

        let mut out = Vec::new();
        renderer.render(&mut out, &buf).unwrap();
        let first = String::from_utf8_lossy(&out).into_owned();
        assert!(first.contains("\r\n"));
        assert!(!first.contains("\x1b[J"));
        assert_eq!(renderer.previous_height(), 2);

        let mut out = Vec::new();
        renderer.render(&mut out, &buf).unwrap();
        assert!(String::from_utf8_lossy(&out).contains("\x1b[J"));

        renderer.clear(&mut Vec::new()).unwrap();
        assert_eq!(renderer.previous_height(), 0);
    }

    #[test]
    fn test_invalidate_forces_full_redraw() {
        let mut renderer = DiffRenderer::new();
        let mut buf = FrameBuffer::new(3, 1);
        buf.fill_rect(Rect::new(0, 0, 3, 1), Rgba::BLACK, None);
        renderer.render(&mut Vec::new(), &buf).unwrap();

        renderer.invalidate();
        assert!(!renderer.has_previous());
        assert!(renderer.render(&mut Vec::new(), &buf).unwrap());
    }
}
