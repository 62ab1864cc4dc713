//! Core rendering types for gridview-builder.
//!
//! These types are what the terminal adapter understands: colors, cell
//! attributes, cells and clip rectangles. The pure core (catalog, preview,
//! codegen) never touches them; the frame composer turns preview fragments
//! into cells.

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Using integers for exact comparison - no floating point epsilon needed.
/// Alpha 255 = fully opaque, 0 = fully transparent.
/// Special value: r=-1 means "terminal default" (let terminal pick).
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

    // Standard colors
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    /// Create an ANSI palette color (0-255).
    ///
    /// Uses special marker: r=-2, g=palette_index.
    pub const fn ansi(index: u8) -> Self {
        Self {
            r: -2,
            g: index as i16,
            b: 0,
            a: 255,
        }
    }

    /// Check if this is the terminal default color.
    #[inline]
    pub const fn is_terminal_default(&self) -> bool {
        self.r == -1
    }

    /// Check if this is an ANSI palette color.
    #[inline]
    pub const fn is_ansi(&self) -> bool {
        self.r == -2
    }

    /// Get ANSI palette index (only valid if is_ansi() returns true).
    #[inline]
    pub const fn ansi_index(&self) -> u8 {
        self.g as u8
    }

    /// Create from a 0xRRGGBB integer.
    ///
    /// ```
    /// use gridview_builder::types::Rgba;
    ///
    /// let primary = Rgba::from_rgb_int(0x570df8);
    /// assert_eq!(primary, Rgba::rgb(0x57, 0x0d, 0xf8));
    /// ```
    pub const fn from_rgb_int(rgb: u32) -> Self {
        Self::rgb(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        )
    }

    /// Parse hex color string (#RGB, #RRGGBB).
    ///
    /// Returns None for invalid format.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');

        fn hex_digit(c: u8) -> Option<u8> {
            match c {
                b'0'..=b'9' => Some(c - b'0'),
                b'a'..=b'f' => Some(c - b'a' + 10),
                b'A'..=b'F' => Some(c - b'A' + 10),
                _ => None,
            }
        }

        let bytes = hex.as_bytes();
        match bytes.len() {
            3 => {
                let r = hex_digit(bytes[0])?;
                let g = hex_digit(bytes[1])?;
                let b = hex_digit(bytes[2])?;
                Some(Self::rgb((r << 4) | r, (g << 4) | g, (b << 4) | b))
            }
            6 => {
                let mut channels = [0u8; 3];
                for (i, channel) in channels.iter_mut().enumerate() {
                    let high = hex_digit(bytes[i * 2])?;
                    let low = hex_digit(bytes[i * 2 + 1])?;
                    *channel = (high << 4) | low;
                }
                Some(Self::rgb(channels[0], channels[1], channels[2]))
            }
            _ => None,
        }
    }

    /// Linear interpolation between two colors.
    ///
    /// Terminal default and ANSI colors cannot be mixed; the nearer endpoint wins.
    #[inline]
    pub fn lerp(a: Self, b: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        if a.is_terminal_default() || a.is_ansi() || b.is_terminal_default() || b.is_ansi() {
            return if t < 0.5 { a } else { b };
        }
        let inv_t = 1.0 - t;

        Self {
            r: ((a.r as f32 * inv_t) + (b.r as f32 * t)).round() as i16,
            g: ((a.g as f32 * inv_t) + (b.g as f32 * t)).round() as i16,
            b: ((a.b as f32 * inv_t) + (b.b as f32 * t)).round() as i16,
            a: ((a.a as f32 * inv_t) + (b.a as f32 * t)).round() as i16,
        }
    }

    /// Dim the color by a factor (0.0 = black, 1.0 = unchanged).
    #[inline]
    pub fn dim(self, factor: f32) -> Self {
        if self.is_terminal_default() {
            return Self::GRAY;
        }
        if self.is_ansi() {
            return self;
        }
        Self {
            r: (self.r as f32 * factor).clamp(0.0, 255.0) as i16,
            g: (self.g as f32 * factor).clamp(0.0, 255.0) as i16,
            b: (self.b as f32 * factor).clamp(0.0, 255.0) as i16,
            a: self.a,
        }
    }

    /// Relative luminance for WCAG contrast calculations.
    pub fn relative_luminance(&self) -> f32 {
        if self.is_terminal_default() || self.is_ansi() {
            return 0.0;
        }

        fn channel_luminance(c: i16) -> f32 {
            let c = c as f32 / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }

        0.2126 * channel_luminance(self.r)
            + 0.7152 * channel_luminance(self.g)
            + 0.0722 * channel_luminance(self.b)
    }

    /// Pick black or white, whichever reads better on `bg`.
    pub fn readable_on(bg: Self) -> Self {
        if bg.is_terminal_default() || bg.is_ansi() {
            return Self::TERMINAL_DEFAULT;
        }
        if bg.relative_luminance() > 0.4 {
            Self::BLACK
        } else {
            Self::WHITE
        }
    }
}

// =============================================================================
// Cell Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield for efficient storage and comparison.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::ITALIC`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const INVERSE = 1 << 5;
    }
}

// =============================================================================
// Cell - The atomic unit of terminal rendering
// =============================================================================

/// A single terminal cell.
///
/// `char == 0` marks the continuation half of a wide character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Unicode codepoint (32 for space).
    pub char: u32,
    /// Foreground color.
    pub fg: Rgba,
    /// Background color.
    pub bg: Rgba,
    /// Attribute flags (bold, italic, etc.).
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
// ClipRect
// =============================================================================

/// A rectangle in cell coordinates, used for panel areas and clipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClipRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClipRect {
    /// Create a new clip rect.
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    /// Check if a point is inside this rect.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && (x as u32) < self.x as u32 + self.width as u32
            && y >= self.y
            && (y as u32) < self.y as u32 + self.height as u32
    }

    /// Compute intersection of two rects.
    pub fn intersect(&self, other: &ClipRect) -> Option<ClipRect> {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.x.saturating_add(self.width).min(other.x.saturating_add(other.width));
        let y2 = self.y.saturating_add(self.height).min(other.y.saturating_add(other.height));

        if x2 > x1 && y2 > y1 {
            Some(ClipRect {
                x: x1,
                y: y1,
                width: x2 - x1,
                height: y2 - y1,
            })
        } else {
            None
        }
    }

    /// Shrink the rect by `n` cells on every side.
    pub fn inset(&self, n: u16) -> ClipRect {
        ClipRect {
            x: self.x.saturating_add(n),
            y: self.y.saturating_add(n),
            width: self.width.saturating_sub(n * 2),
            height: self.height.saturating_sub(n * 2),
        }
    }

    /// True if the rect covers no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_from_rgb_int() {
        assert_eq!(Rgba::from_rgb_int(0xff0000), Rgba::rgb(255, 0, 0));
        assert_eq!(Rgba::from_rgb_int(0x282a36), Rgba::rgb(40, 42, 54));
    }

    #[test]
    fn test_rgba_from_hex() {
        assert_eq!(Rgba::from_hex("#fff"), Some(Rgba::WHITE));
        assert_eq!(Rgba::from_hex("00ff00"), Some(Rgba::rgb(0, 255, 0)));
        assert_eq!(Rgba::from_hex("#gg0000"), None);
        assert_eq!(Rgba::from_hex("#ff00"), None);
    }

    #[test]
    fn test_rgba_lerp_endpoints() {
        let a = Rgba::rgb(0, 0, 0);
        let b = Rgba::rgb(200, 100, 50);
        assert_eq!(Rgba::lerp(a, b, 0.0), a);
        assert_eq!(Rgba::lerp(a, b, 1.0), b);
        assert_eq!(Rgba::lerp(a, b, 0.5), Rgba::rgb(100, 50, 25));
    }

    #[test]
    fn test_rgba_lerp_special_colors() {
        let ansi = Rgba::ansi(4);
        let rgb = Rgba::WHITE;
        assert_eq!(Rgba::lerp(ansi, rgb, 0.2), ansi);
        assert_eq!(Rgba::lerp(ansi, rgb, 0.8), rgb);
    }

    #[test]
    fn test_readable_on() {
        assert_eq!(Rgba::readable_on(Rgba::WHITE), Rgba::BLACK);
        assert_eq!(Rgba::readable_on(Rgba::BLACK), Rgba::WHITE);
        assert!(Rgba::readable_on(Rgba::ansi(3)).is_terminal_default());
    }

    #[test]
    fn test_cell_default() {
        let cell = Cell::default();
        assert_eq!(cell.char, ' ' as u32);
        assert!(cell.fg.is_terminal_default());
        assert_eq!(cell.attrs, Attr::NONE);
    }

    #[test]
    fn test_clip_rect_intersect() {
        let a = ClipRect::new(0, 0, 10, 10);
        let b = ClipRect::new(5, 5, 10, 10);
        assert_eq!(a.intersect(&b), Some(ClipRect::new(5, 5, 5, 5)));

        let c = ClipRect::new(20, 20, 2, 2);
        assert_eq!(a.intersect(&c), None);
    }

    #[test]
    fn test_clip_rect_inset() {
        let r = ClipRect::new(2, 3, 10, 6);
        assert_eq!(r.inset(1), ClipRect::new(3, 4, 8, 4));
        assert!(ClipRect::new(0, 0, 1, 1).inset(1).is_empty());
        assert!(r.contains(2, 3));
        assert!(!r.contains(12, 3));
    }
}
