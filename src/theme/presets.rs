//! Theme presets.
//!
//! Built-in palettes selectable through the widget's `theme` token:
//! - light (default)
//! - dark
//! - dracula
//! - nord
//! - terminal (ANSI colors, respects the user's terminal scheme)

use super::{Theme, ThemeColor};
use crate::types::Rgba;

// =============================================================================
// Light Theme (Default)
// =============================================================================

/// Light - white surfaces with a violet primary.
pub fn light() -> Theme {
    Theme {
        name: "light".to_string(),
        description: "Light theme".to_string(),
        primary: ThemeColor::Rgb(Rgba::from_rgb_int(0x570df8)),
        secondary: ThemeColor::Rgb(Rgba::from_rgb_int(0xf000b8)),
        accent: ThemeColor::Rgb(Rgba::from_rgb_int(0x37cdbe)),
        neutral: ThemeColor::Rgb(Rgba::from_rgb_int(0x3d4451)),
        info: ThemeColor::Rgb(Rgba::from_rgb_int(0x3abff8)),
        success: ThemeColor::Rgb(Rgba::from_rgb_int(0x36d399)),
        warning: ThemeColor::Rgb(Rgba::from_rgb_int(0xfbbd23)),
        error: ThemeColor::Rgb(Rgba::from_rgb_int(0xf87272)),
        base_100: ThemeColor::Rgb(Rgba::from_rgb_int(0xffffff)),
        base_200: ThemeColor::Rgb(Rgba::from_rgb_int(0xf2f2f2)),
        base_300: ThemeColor::Rgb(Rgba::from_rgb_int(0xe5e6e6)),
        base_content: ThemeColor::Rgb(Rgba::from_rgb_int(0x1f2937)),
        text_muted: ThemeColor::Rgb(Rgba::from_rgb_int(0x6b7280)),
        border: ThemeColor::Rgb(Rgba::from_rgb_int(0xd1d5db)),
        border_focus: ThemeColor::Rgb(Rgba::from_rgb_int(0x570df8)),
    }
}

// =============================================================================
// Dark Theme
// =============================================================================

/// Dark - slate surfaces with a violet primary.
pub fn dark() -> Theme {
    Theme {
        name: "dark".to_string(),
        description: "Dark theme".to_string(),
        primary: ThemeColor::Rgb(Rgba::from_rgb_int(0x661ae6)),
        secondary: ThemeColor::Rgb(Rgba::from_rgb_int(0xd926aa)),
        accent: ThemeColor::Rgb(Rgba::from_rgb_int(0x1fb2a5)),
        neutral: ThemeColor::Rgb(Rgba::from_rgb_int(0x191d24)),
        info: ThemeColor::Rgb(Rgba::from_rgb_int(0x3abff8)),
        success: ThemeColor::Rgb(Rgba::from_rgb_int(0x36d399)),
        warning: ThemeColor::Rgb(Rgba::from_rgb_int(0xfbbd23)),
        error: ThemeColor::Rgb(Rgba::from_rgb_int(0xf87272)),
        base_100: ThemeColor::Rgb(Rgba::from_rgb_int(0x2a303c)),
        base_200: ThemeColor::Rgb(Rgba::from_rgb_int(0x242933)),
        base_300: ThemeColor::Rgb(Rgba::from_rgb_int(0x20252e)),
        base_content: ThemeColor::Rgb(Rgba::from_rgb_int(0xa6adbb)),
        text_muted: ThemeColor::Rgb(Rgba::from_rgb_int(0x6b7280)),
        border: ThemeColor::Rgb(Rgba::from_rgb_int(0x3d4451)),
        border_focus: ThemeColor::Rgb(Rgba::from_rgb_int(0x661ae6)),
    }
}

// =============================================================================
// Dracula Theme
// =============================================================================

/// Dracula - dark theme with vivid colors.
pub fn dracula() -> Theme {
    Theme {
        name: "dracula".to_string(),
        description: "Dracula dark theme".to_string(),
        primary: ThemeColor::Rgb(Rgba::from_rgb_int(0xff79c6)),
        secondary: ThemeColor::Rgb(Rgba::from_rgb_int(0xbd93f9)),
        accent: ThemeColor::Rgb(Rgba::from_rgb_int(0xffb86c)),
        neutral: ThemeColor::Rgb(Rgba::from_rgb_int(0x414558)),
        info: ThemeColor::Rgb(Rgba::from_rgb_int(0x8be9fd)),
        success: ThemeColor::Rgb(Rgba::from_rgb_int(0x50fa7b)),
        warning: ThemeColor::Rgb(Rgba::from_rgb_int(0xf1fa8c)),
        error: ThemeColor::Rgb(Rgba::from_rgb_int(0xff5555)),
        base_100: ThemeColor::Rgb(Rgba::from_rgb_int(0x282a36)),
        base_200: ThemeColor::Rgb(Rgba::from_rgb_int(0x21222c)),
        base_300: ThemeColor::Rgb(Rgba::from_rgb_int(0x191a21)),
        base_content: ThemeColor::Rgb(Rgba::from_rgb_int(0xf8f8f2)),
        text_muted: ThemeColor::Rgb(Rgba::from_rgb_int(0x6272a4)),
        border: ThemeColor::Rgb(Rgba::from_rgb_int(0x44475a)),
        border_focus: ThemeColor::Rgb(Rgba::from_rgb_int(0xbd93f9)),
    }
}

// =============================================================================
// Nord Theme
// =============================================================================

/// Nord - arctic, light surfaces with frost accents.
pub fn nord() -> Theme {
    Theme {
        name: "nord".to_string(),
        description: "Nord arctic theme".to_string(),
        primary: ThemeColor::Rgb(Rgba::from_rgb_int(0x5e81ac)),
        secondary: ThemeColor::Rgb(Rgba::from_rgb_int(0x81a1c1)),
        accent: ThemeColor::Rgb(Rgba::from_rgb_int(0x88c0d0)),
        neutral: ThemeColor::Rgb(Rgba::from_rgb_int(0x4c566a)),
        info: ThemeColor::Rgb(Rgba::from_rgb_int(0xb48ead)),
        success: ThemeColor::Rgb(Rgba::from_rgb_int(0xa3be8c)),
        warning: ThemeColor::Rgb(Rgba::from_rgb_int(0xebcb8b)),
        error: ThemeColor::Rgb(Rgba::from_rgb_int(0xbf616a)),
        base_100: ThemeColor::Rgb(Rgba::from_rgb_int(0xeceff4)),
        base_200: ThemeColor::Rgb(Rgba::from_rgb_int(0xe5e9f0)),
        base_300: ThemeColor::Rgb(Rgba::from_rgb_int(0xd8dee9)),
        base_content: ThemeColor::Rgb(Rgba::from_rgb_int(0x2e3440)),
        text_muted: ThemeColor::Rgb(Rgba::from_rgb_int(0x4c566a)),
        border: ThemeColor::Rgb(Rgba::from_rgb_int(0xd8dee9)),
        border_focus: ThemeColor::Rgb(Rgba::from_rgb_int(0x5e81ac)),
    }
}

// =============================================================================
// Terminal Theme
// =============================================================================

/// Terminal theme - uses ANSI colors to respect user's terminal theme.
pub fn terminal() -> Theme {
    Theme {
        name: "terminal".to_string(),
        description: "Uses terminal default colors".to_string(),
        primary: ThemeColor::Ansi(12),   // bright blue
        secondary: ThemeColor::Ansi(13), // bright magenta
        accent: ThemeColor::Ansi(14),    // bright cyan
        neutral: ThemeColor::Ansi(8),
        info: ThemeColor::Ansi(6),
        success: ThemeColor::Ansi(2),
        warning: ThemeColor::Ansi(3),
        error: ThemeColor::Ansi(1),
        base_100: ThemeColor::Default,
        base_200: ThemeColor::Default,
        base_300: ThemeColor::Ansi(0),
        base_content: ThemeColor::Default,
        text_muted: ThemeColor::Ansi(8),
        border: ThemeColor::Ansi(7),
        border_focus: ThemeColor::Ansi(12),
    }
}

// =============================================================================
// Preset Lookup
// =============================================================================

/// Get a preset theme by name (case-insensitive).
pub fn get_preset(name: &str) -> Option<Theme> {
    match name.trim().to_lowercase().as_str() {
        "light" => Some(light()),
        "dark" => Some(dark()),
        "dracula" => Some(dracula()),
        "nord" => Some(nord()),
        "terminal" => Some(terminal()),
        _ => None,
    }
}

/// List all available preset names.
pub fn preset_names() -> &'static [&'static str] {
    &["light", "dark", "dracula", "nord", "terminal"]
}

// =============================================================================
// Tests
// =============================================================================
