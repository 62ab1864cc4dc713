//! Theme system for the terminal adapter.
//!
//! The widget's `theme` option is a token naming one of the built-in palette
//! presets (`light` by default). Preview fragments and controls never carry
//! concrete colors; they name a [`ColorSlot`] and the theme resolves it when a
//! frame is composed.
//!
//! # Example
//!
//! ```rust
//! use gridview_builder::theme::{resolve_theme, ColorSlot};
//!
//! let theme = resolve_theme("dark");
//! let primary = theme.color(ColorSlot::Primary);
//! assert!(!primary.is_terminal_default());
//! ```

use crate::types::Rgba;

pub mod presets;

pub use presets::*;

// =============================================================================
// ThemeColor - A color that can be ANSI, RGB, or terminal default
// =============================================================================

/// Theme color can be:
/// - `Default`: Terminal's default color
/// - `Ansi(n)`: ANSI palette index (0-255)
/// - `Rgb(rgba)`: Explicit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeColor {
    /// Use terminal's default color.
    #[default]
    Default,
    /// ANSI palette index (0-255).
    Ansi(u8),
    /// Explicit RGB color.
    Rgb(Rgba),
}

impl ThemeColor {
    /// Resolve to Rgba.
    pub fn resolve(&self) -> Rgba {
        match self {
            Self::Default => Rgba::TERMINAL_DEFAULT,
            Self::Ansi(i) => Rgba::ansi(*i),
            Self::Rgb(c) => *c,
        }
    }

    /// Check if this is the terminal default.
    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }
}

/// `()` means terminal default.
impl From<()> for ThemeColor {
    fn from(_: ()) -> Self {
        Self::Default
    }
}

/// `u8` is an ANSI index.
impl From<u8> for ThemeColor {
    fn from(index: u8) -> Self {
        Self::Ansi(index)
    }
}

/// `Rgba` is an RGB color.
impl From<Rgba> for ThemeColor {
    fn from(color: Rgba) -> Self {
        Self::Rgb(color)
    }
}

/// `u32` is an RGB integer (0xRRGGBB).
impl From<u32> for ThemeColor {
    fn from(rgb: u32) -> Self {
        Self::Rgb(Rgba::from_rgb_int(rgb))
    }
}

// =============================================================================
// ColorSlot - Semantic color names used by fragments
// =============================================================================

/// Semantic palette slot.
///
/// Preview items and controls refer to colors by slot so the same derived
/// fragment renders under every theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSlot {
    Primary,
    Secondary,
    Accent,
    Neutral,
    Info,
    Success,
    Warning,
    Error,
    /// Page background.
    Base100,
    /// Panel background.
    Base200,
    /// Inset background (code block, tile placeholders).
    Base300,
    /// Text on base backgrounds.
    BaseContent,
}

// =============================================================================
// Theme - All semantic colors
// =============================================================================

/// Theme definition with all semantic colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Theme name (e.g., "light", "dracula").
    pub name: String,
    /// Theme description.
    pub description: String,

    pub primary: ThemeColor,
    pub secondary: ThemeColor,
    pub accent: ThemeColor,
    pub neutral: ThemeColor,

    pub info: ThemeColor,
    pub success: ThemeColor,
    pub warning: ThemeColor,
    pub error: ThemeColor,

    pub base_100: ThemeColor,
    pub base_200: ThemeColor,
    pub base_300: ThemeColor,
    pub base_content: ThemeColor,

    /// Muted text (descriptions, hints).
    pub text_muted: ThemeColor,
    /// Default panel border.
    pub border: ThemeColor,
    /// Border and marker of the focused control.
    pub border_focus: ThemeColor,
}

impl Default for Theme {
    fn default() -> Self {
        light()
    }
}

impl Theme {
    /// Create a new theme with all default colors.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            primary: ThemeColor::Default,
            secondary: ThemeColor::Default,
            accent: ThemeColor::Default,
            neutral: ThemeColor::Default,
            info: ThemeColor::Default,
            success: ThemeColor::Default,
            warning: ThemeColor::Default,
            error: ThemeColor::Default,
            base_100: ThemeColor::Default,
            base_200: ThemeColor::Default,
            base_300: ThemeColor::Default,
            base_content: ThemeColor::Default,
            text_muted: ThemeColor::Default,
            border: ThemeColor::Default,
            border_focus: ThemeColor::Default,
        }
    }

    /// The theme color stored in a slot.
    pub fn slot(&self, slot: ColorSlot) -> ThemeColor {
        match slot {
            ColorSlot::Primary => self.primary,
            ColorSlot::Secondary => self.secondary,
            ColorSlot::Accent => self.accent,
            ColorSlot::Neutral => self.neutral,
            ColorSlot::Info => self.info,
            ColorSlot::Success => self.success,
            ColorSlot::Warning => self.warning,
            ColorSlot::Error => self.error,
            ColorSlot::Base100 => self.base_100,
            ColorSlot::Base200 => self.base_200,
            ColorSlot::Base300 => self.base_300,
            ColorSlot::BaseContent => self.base_content,
        }
    }

    /// Resolve a slot to a concrete color.
    #[inline]
    pub fn color(&self, slot: ColorSlot) -> Rgba {
        self.slot(slot).resolve()
    }
}

/// Resolve a theme token, falling back to `light` for unknown names.
pub fn resolve_theme(token: &str) -> Theme {
    match get_preset(token) {
        Some(theme) => theme,
        None => {
            tracing::warn!(token, "unknown theme token, falling back to light");
            light()
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_color_resolve() {
        assert!(ThemeColor::Default.resolve().is_terminal_default());
        assert_eq!(ThemeColor::Ansi(12).resolve().ansi_index(), 12);
        assert_eq!(ThemeColor::Rgb(Rgba::WHITE).resolve(), Rgba::WHITE);
    }

    #[test]
    fn test_theme_color_from() {
        let c: ThemeColor = ().into();
        assert!(c.is_default());
        let c: ThemeColor = 3u8.into();
        assert_eq!(c, ThemeColor::Ansi(3));
        let c: ThemeColor = 0xff0000u32.into();
        assert_eq!(c, ThemeColor::Rgb(Rgba::rgb(255, 0, 0)));
    }

    #[test]
    fn test_theme_new_is_all_default() {
        let theme = Theme::new("custom", "Custom theme");
        assert_eq!(theme.name, "custom");
        assert!(theme.primary.is_default());
        assert!(theme.color(ColorSlot::Base100).is_terminal_default());
    }

    #[test]
    fn test_theme_default_is_light() {
        assert_eq!(Theme::default().name, "light");
    }

    #[test]
    fn test_slot_lookup() {
        let theme = light();
        assert_eq!(theme.slot(ColorSlot::Primary), theme.primary);
        assert_eq!(theme.slot(ColorSlot::Success), theme.success);
        assert_eq!(theme.slot(ColorSlot::BaseContent), theme.base_content);
    }

    #[test]
    fn test_resolve_theme_fallback() {
        assert_eq!(resolve_theme("dracula").name, "dracula");
        assert_eq!(resolve_theme("no-such-theme").name, "light");
    }
}
