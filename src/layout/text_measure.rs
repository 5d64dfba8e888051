//! Text Measurement
//!
//! Utilities for measuring text in terminal cells.
//!
//! Terminal text width depends on Unicode character widths:
//! - ASCII printable characters: 1 cell
//! - CJK characters and most emoji: 2 cells (fullwidth)
//! - Control characters: 0 cells

/// Width of a single character in terminal cells.
pub fn char_width(c: char) -> u16 {
    if c.is_ascii() {
        return if c.is_ascii_control() { 0 } else { 1 };
    }
    let code = c as u32;
    if (0x1100..=0x115F).contains(&code)     // Hangul Jamo
        || (0x2E80..=0x9FFF).contains(&code)   // CJK
        || (0xAC00..=0xD7A3).contains(&code)   // Hangul Syllables
        || (0xF900..=0xFAFF).contains(&code)   // CJK Compatibility
        || (0xFE10..=0xFE1F).contains(&code)   // Vertical Forms
        || (0xFE30..=0xFE6F).contains(&code)   // CJK Compatibility Forms
        || (0xFF00..=0xFF60).contains(&code)   // Fullwidth Forms
        || (0xFFE0..=0xFFE6).contains(&code)   // Fullwidth Forms
        || (0x1F300..=0x1F9FF).contains(&code) // Emoji
        || (0x20000..=0x2FFFF).contains(&code) // CJK Extension B-F
    {
        2
    } else {
        1
    }
}

/// Display width of a string in terminal cells.
pub fn string_width(s: &str) -> u16 {
    s.chars()
        .fold(0u16, |width, c| width.saturating_add(char_width(c)))
}

/// The string as drawn with `spacing` blank cells between glyphs.
///
/// Newlines are kept as line breaks and are not padded.
pub fn letter_spaced(text: &str, spacing: u16) -> String {
    if spacing == 0 {
        return text.to_string();
    }
    let gap = " ".repeat(spacing as usize);
    let mut out = String::with_capacity(text.len() * (spacing as usize + 1));
    let mut prev_on_line = false;
    for c in text.chars() {
        if c == '\n' {
            out.push(c);
            prev_on_line = false;
            continue;
        }
        if prev_on_line {
            out.push_str(&gap);
        }
        out.push(c);
        prev_on_line = true;
    }
    out
}

/// Width of the widest line.
pub fn max_line_width(text: &str) -> u16 {
    text.split('\n').map(string_width).max().unwrap_or(0)
}

/// Wrap text to a given width.
///
/// Lines break at spaces when a word would overflow and inside a word only
/// when the word alone is wider than `width`. A zero width disables wrapping.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    if text.is_empty() {
        return vec![];
    }
    if width == 0 {
        return text.split('\n').map(str::to_string).collect();
    }

    // Widths accumulate in u32: a single word may exceed u16::MAX cells.
    let width = u32::from(width);
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0u32;

        for word in paragraph.split(' ') {
            let word_width: u32 = word.chars().map(|c| u32::from(char_width(c))).sum();
            let sep = u32::from(!line.is_empty());

            if line_width + sep + word_width <= width {
                if sep == 1 {
                    line.push(' ');
                }
                line.push_str(word);
                line_width += sep + word_width;
                continue;
            }

            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }

            // Hard-break words wider than the line.
            for c in word.chars() {
                let w = u32::from(char_width(c));
                if line_width + w > width && !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                line.push(c);
                line_width += w;
            }
        }
        lines.push(line);
    }

    lines
}
