//! Core types for spark-compose.
//!
//! Colors, sizes, cells and the flexbox enums that resolved elements carry
//! into layout and painting.

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels stored as `i16`.
///
/// Negative red marks the special colors: `-1` is the terminal default,
/// `-2` is an ANSI palette entry whose index lives in `g`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: i16,
    pub g: i16,
    pub b: i16,
    pub a: i16,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as i16,
            g: g as i16,
            b: b as i16,
            a: a as i16,
        }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Terminal default color (let terminal decide).
    pub const TERMINAL_DEFAULT: Self = Self {
        r: -1,
        g: -1,
        b: -1,
        a: -1,
    };

    /// Fully transparent.
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    /// ANSI palette color (0-255).
    pub const fn ansi(index: u8) -> Self {
        Self {
            r: -2,
            g: index as i16,
            b: 0,
            a: 255,
        }
    }

    #[inline]
    pub const fn is_terminal_default(&self) -> bool {
        self.r == -1
    }

    #[inline]
    pub const fn is_ansi(&self) -> bool {
        self.r == -2
    }

    /// ANSI palette index (only meaningful when `is_ansi()`).
    #[inline]
    pub const fn ansi_index(&self) -> u8 {
        self.g as u8
    }

    #[inline]
    pub const fn is_opaque(&self) -> bool {
        self.a == 255
    }

    #[inline]
    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Alpha blend `src` over `dst`.
    ///
    /// Special colors on either side are treated as opaque.
    pub fn blend(src: Self, dst: Self) -> Self {
        if src.is_opaque() || src.is_terminal_default() || src.is_ansi() {
            return src;
        }
        if src.is_transparent() {
            return dst;
        }
        if dst.is_terminal_default() || dst.is_ansi() {
            // Nothing to mix with; keep the translucent color as-is.
            return Self { a: 255, ..src };
        }

        let sa = src.a as i32;
        let inv = 255 - sa;
        let mix = |s: i16, d: i16| ((s as i32 * sa + d as i32 * inv) / 255).clamp(0, 255) as i16;

        Self {
            r: mix(src.r, dst.r),
            g: mix(src.g, dst.g),
            b: mix(src.b, dst.b),
            a: 255,
        }
    }

    /// Linear interpolation between two colors, `t` in `0.0..=1.0`.
    ///
    /// Special colors do not interpolate: the nearer endpoint wins.
    pub fn lerp(a: Self, b: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        if a.r < 0 || b.r < 0 {
            return if t < 0.5 { a } else { b };
        }
        let inv = 1.0 - t;

        Self {
            r: (a.r as f32 * inv + b.r as f32 * t).round() as i16,
            g: (a.g as f32 * inv + b.g as f32 * t).round() as i16,
            b: (a.b as f32 * inv + b.b as f32 * t).round() as i16,
            a: (a.a as f32 * inv + b.a as f32 * t).round() as i16,
        }
    }

    /// Create from a `0xRRGGBB` integer.
    pub const fn from_rgb_int(rgb: u32) -> Self {
        Self::rgb(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        )
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA`. The `#` is optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.is_ascii() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).ok().map(|n| n << 4 | n);

        match digits.len() {
            3 => Some(Self::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// Parse a literal color: hex, `transparent` or `default`.
    ///
    /// Palette tokens such as `orange.500` are resolved by
    /// [`crate::theme::palette`], not here.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        match input.to_ascii_lowercase().as_str() {
            "" => None,
            "transparent" => Some(Self::TRANSPARENT),
            "default" | "inherit" | "currentcolor" => Some(Self::TERMINAL_DEFAULT),
            _ => Self::from_hex(input),
        }
    }
}

// =============================================================================
// Lengths
// =============================================================================

/// A requested size as written by page code.
///
/// May be out of range (negative cells, percents above 100). Converted to a
/// [`Dimension`] with [`Length::clamped`] when a component is constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Auto,
    Cells(i32),
    Percent(f32),
}

impl Length {
    /// `100%` of the parent.
    pub const FULL: Self = Self::Percent(100.0);

    /// Clamp into a layout-ready dimension.
    ///
    /// Negative cell counts become zero. Percents are clamped to `0..=100`
    /// and NaN becomes zero.
    pub fn clamped(self) -> Dimension {
        match self {
            Self::Auto => Dimension::Auto,
            Self::Cells(n) => Dimension::Cells(n.clamp(0, u16::MAX as i32) as u16),
            Self::Percent(p) if p.is_nan() => Dimension::Percent(0.0),
            Self::Percent(p) => Dimension::Percent(p.clamp(0.0, 100.0)),
        }
    }
}

impl Default for Length {
    fn default() -> Self {
        Self::Auto
    }
}

impl From<i32> for Length {
    fn from(value: i32) -> Self {
        Self::Cells(value)
    }
}

/// Clamp a signed spacing value to a non-negative cell count.
#[inline]
pub fn clamp_cells(value: i32) -> u16 {
    value.clamp(0, u16::MAX as i32) as u16
}

/// A validated size handed to the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Dimension {
    /// Size from content.
    #[default]
    Auto,
    /// Absolute size in terminal cells.
    Cells(u16),
    /// Percentage of the parent (0-100).
    Percent(f32),
}

// =============================================================================
// Cell Attributes
// =============================================================================

bitflags::bitflags! {
    /// Text attributes for a painted cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
    }
}

// =============================================================================
// Cell
// =============================================================================

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Unicode codepoint. `0` marks the trailing half of a wide glyph.
    pub char: u32,
    pub fg: Rgba,
    pub bg: Rgba,
    pub attrs: Attr,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: b' ' as u32,
            fg: Rgba::TERMINAL_DEFAULT,
            bg: Rgba::TERMINAL_DEFAULT,
            attrs: Attr::NONE,
        }
    }
}

// =============================================================================
// Rect
// =============================================================================

/// An axis-aligned rectangle in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && (x as u32) < self.x as u32 + self.width as u32
            && (y as u32) < self.y as u32 + self.height as u32
    }

    /// Intersection of two rects, `None` when they do not overlap.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = (self.x as u32 + self.width as u32).min(other.x as u32 + other.width as u32);
        let y2 = (self.y as u32 + self.height as u32).min(other.y as u32 + other.height as u32);

        if x2 > x1 as u32 && y2 > y1 as u32 {
            Some(Rect::new(x1, y1, (x2 - x1 as u32) as u16, (y2 - y1 as u32) as u16))
        } else {
            None
        }
    }
}

// =============================================================================
// Borders
// =============================================================================

/// Border glyph sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    #[default]
    None,
    /// ─ │ ┌ ┐ └ ┘
    Single,
    /// ─ │ ╭ ╮ ╰ ╯
    Rounded,
}

impl BorderStyle {
    /// `(horizontal, vertical, top_left, top_right, bottom_right, bottom_left)`
    pub const fn chars(&self) -> (char, char, char, char, char, char) {
        match self {
            Self::None => (' ', ' ', ' ', ' ', ' ', ' '),
            Self::Single => ('─', '│', '┌', '┐', '┘', '└'),
            Self::Rounded => ('─', '│', '╭', '╮', '╯', '╰'),
        }
    }
}

/// Glyph used for an emphasized (thick) bottom edge.
pub const THICK_HORIZONTAL: char = '━';

// =============================================================================
// Flex Enums
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexDirection {
    #[default]
    Column,
    Row,
}

impl FlexDirection {
    pub const fn is_row(&self) -> bool {
        matches!(self, Self::Row)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexWrap {
    #[default]
    NoWrap,
    Wrap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JustifyContent {
    #[default]
    FlexStart,
    Center,
    FlexEnd,
    SpaceBetween,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignItems {
    #[default]
    Stretch,
    FlexStart,
    Center,
    FlexEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

// =============================================================================
// Tests
// =============================================================================
