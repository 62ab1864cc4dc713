//! Text Measurement
//!
//! Display widths in terminal cells, via `unicode-width`:
//! - ASCII characters: 1 cell
//! - CJK characters and most emoji: 2 cells
//! - Control and zero-width characters: 0 cells

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width of a single character in cells.
#[inline]
pub fn char_width(c: char) -> u16 {
    c.width().unwrap_or(0) as u16
}

/// Measure the display width of a string in terminal cells.
pub fn string_width(s: &str) -> u16 {
    s.width().min(u16::MAX as usize) as u16
}

/// Word-wrap text to a given width.
///
/// Breaks at spaces where possible, hard-breaks words longer than the line.
/// Explicit newlines always start a new line.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0u16;

        for word in paragraph.split(' ') {
            let word_width = string_width(word);
            let sep = u16::from(!line.is_empty());

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

            // Hard-break a word that does not fit on an empty line.
            for c in word.chars() {
                let w = char_width(c);
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

/// Truncate text to a width, ending in `…` when shortened.
pub fn truncate_text(text: &str, width: u16) -> String {
    if width == 0 {
        return String::new();
    }

    if string_width(text) <= width {
        return text.to_string();
    }

    // Leave room for the ellipsis
    let target_width = width.saturating_sub(1);
    let mut result = String::new();
    let mut current_width = 0u16;

    for c in text.chars() {
        let w = char_width(c);
        if current_width + w > target_width {
            break;
        }
        result.push(c);
        current_width += w;
    }

    result.push('…');
    result
}
