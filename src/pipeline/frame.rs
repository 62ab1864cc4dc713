//! Frame Derived - the widget drawn into a FrameBuffer.
//!
//! Reads the configuration, both output deriveds, focus, copy status, scroll
//! offsets and the terminal size, and paints the four screen areas:
//!
//! ```text
//! ┌ header ──────────────────────────────────────────────┐
//! │ controls │ preview grid            │ flutter code    │
//! └ footer (hint + key help) ────────────────────────────┘
//! ```
//!
//! Painting is pure; the mount loop decides when to pull a new frame.

use std::rc::Rc;

use spark_signals::{derived, Signal};

use crate::catalog::{CaptionPlacement, Fill, PreviewItem};
use crate::controls::{Control, ControlPanel, ControlView, CONTROLS};
use crate::layout::{
    compute_grid_layout, compute_screen_layout, string_width, truncate_text, PanelOptions,
};
use crate::model::Configuration;
use crate::options::BuilderOptions;
use crate::preview::PreviewGrid;
use crate::renderer::{BorderStyle, FrameBuffer};
use crate::state::copy_feedback::CopyStatus;
use crate::theme::{ColorSlot, Theme};
use crate::types::{Attr, ClipRect, Rgba};
use crate::widget::{GridViewBuilder, Reader, ScrollState};

/// Rows used by one labelled control (title, value, spacer).
const CONTROL_ROWS: u16 = 3;

/// Rows the control panel needs, border included.
pub const CONTROLS_HEIGHT: u16 = 2 + (CONTROLS.len() as u16 - 1) * CONTROL_ROWS + 1;

/// Smallest screen the frame is drawn on.
pub const MIN_WIDTH: u16 = 24;
pub const MIN_HEIGHT: u16 = 8;

const KEY_HELP: &str = "Tab focus  ←→ adjust  c copy  q quit";

// =============================================================================
// Frame sources
// =============================================================================

/// Everything a frame is drawn from. Cloned out of a widget.
#[derive(Clone)]
pub struct FrameSources {
    theme: Theme,
    panels: PanelOptions,
    config: Signal<Configuration>,
    panel: ControlPanel,
    preview: Reader<PreviewGrid>,
    code: Reader<String>,
    copy_status: Signal<CopyStatus>,
    scroll: ScrollState,
}

fn panel_options(options: &BuilderOptions) -> PanelOptions {
    PanelOptions {
        show_controls: options.show_controls,
        show_preview: options.show_preview,
        show_code: options.show_code_output,
        compact: options.compact,
        controls_height: CONTROLS_HEIGHT,
    }
}

impl FrameSources {
    pub fn from_widget(widget: &GridViewBuilder) -> Self {
        Self {
            theme: widget.theme().clone(),
            panels: panel_options(widget.options()),
            config: widget.store().signal(),
            panel: widget.panel().clone(),
            preview: widget.preview_reader(),
            code: widget.code_reader(),
            copy_status: widget.feedback().signal(),
            scroll: widget.scroll().clone(),
        }
    }

    /// Paint a full frame of `width` x `height` cells.
    pub fn compose(&self, width: u16, height: u16) -> FrameBuffer {
        let theme = &self.theme;
        let mut buffer = FrameBuffer::with_background(width, height, theme.color(ColorSlot::Base100));

        if width < MIN_WIDTH || height < MIN_HEIGHT {
            let y = height / 2;
            buffer.draw_text_centered(0, y, width, "Terminal too small", theme.color(ColorSlot::Warning), None, Attr::BOLD, None);
            return buffer;
        }

        let config = self.config.get();
        let screen = compute_screen_layout(width, height, &self.panels);

        draw_header(&mut buffer, screen.header, &config, theme);

        if let Some(rect) = screen.controls {
            let views = self.panel.views(&config);
            draw_controls(&mut buffer, rect, &views, self.copy_status.get(), theme);
        }
        if let Some(rect) = screen.preview {
            let grid = (self.preview)();
            draw_preview(&mut buffer, rect, &grid, self.scroll.preview.get(), theme);
        }
        if let Some(rect) = screen.code {
            let code = (self.code)();
            draw_code(&mut buffer, rect, &code, self.scroll.code.get(), &config, theme);
        }

        draw_footer(&mut buffer, screen.footer, self.panel.hint(&config), theme);
        buffer
    }
}

/// Compose one frame from a widget without any reactive wiring.
pub fn compose_frame(widget: &GridViewBuilder, width: u16, height: u16) -> FrameBuffer {
    FrameSources::from_widget(widget).compose(width, height)
}

/// Create the frame derived over a widget and a terminal-size signal.
pub fn create_frame_derived(widget: &GridViewBuilder, size: Signal<(u16, u16)>) -> Reader<FrameBuffer> {
    let sources = FrameSources::from_widget(widget);
    let frame = derived(move || {
        let (width, height) = size.get();
        sources.compose(width, height)
    });
    Rc::new(move || frame.get())
}

// =============================================================================
// Header and footer
// =============================================================================

fn draw_header(buffer: &mut FrameBuffer, rect: ClipRect, config: &Configuration, theme: &Theme) {
    let bg = theme.color(ColorSlot::Base200);
    buffer.fill_rect(rect, bg, None);
    let used = buffer.draw_text(rect.x + 1, rect.y, "GridView Builder", theme.color(ColorSlot::Primary), None, Attr::BOLD, Some(&rect));

    let summary = format!(
        "{} · {} columns · {} items · {} ",
        config.code_style.label(),
        config.columns,
        config.item_count,
        theme.name
    );
    let room = rect.width.saturating_sub(used + 3);
    if string_width(&summary) <= room {
        buffer.draw_text_right(rect.x, rect.y, rect.width, &summary, theme.text_muted.resolve(), None, Attr::NONE, Some(&rect));
    }
}

fn draw_footer(buffer: &mut FrameBuffer, rect: ClipRect, hint: &str, theme: &Theme) {
    let muted = theme.text_muted.resolve();
    let help_width = string_width(KEY_HELP) + 1;
    let show_help = rect.width > help_width + 10;
    let hint_room = if show_help { rect.width - help_width - 2 } else { rect.width.saturating_sub(2) };

    buffer.draw_text(rect.x + 1, rect.y, &truncate_text(hint, hint_room), muted, None, Attr::ITALIC, Some(&rect));
    if show_help {
        buffer.draw_text_right(rect.x, rect.y, rect.width - 1, KEY_HELP, muted, None, Attr::NONE, Some(&rect));
    }
}

fn draw_panel_frame(buffer: &mut FrameBuffer, rect: ClipRect, title: &str, theme: &Theme) -> ClipRect {
    buffer.draw_border(rect, BorderStyle::Rounded, theme.border.resolve(), None);
    if rect.width > 4 {
        let title = truncate_text(title, rect.width - 4);
        buffer.draw_text(rect.x + 2, rect.y, &title, theme.color(ColorSlot::BaseContent), None, Attr::BOLD, Some(&rect));
    }
    rect.inset(1)
}

// =============================================================================
// Controls
// =============================================================================

fn draw_controls(buffer: &mut FrameBuffer, rect: ClipRect, views: &[ControlView], status: CopyStatus, theme: &Theme) {
    let inner = draw_panel_frame(buffer, rect, " Controls ", theme);
    if inner.is_empty() {
        return;
    }
    let clip = inner;
    let content = theme.color(ColorSlot::BaseContent);
    let focus = theme.border_focus.resolve();
    let mut y = inner.y;

    for view in views {
        if y >= inner.y + inner.height {
            break;
        }

        if view.control == Control::Copy {
            draw_copy_button(buffer, inner, y, status, view.focused, theme);
            y += 1;
            continue;
        }

        let (marker, attrs) = if view.focused { ("▸ ", Attr::BOLD) } else { ("  ", Attr::NONE) };
        buffer.draw_text(inner.x, y, marker, focus, None, Attr::BOLD, Some(&clip));
        buffer.draw_text(inner.x + 2, y, view.title, content, None, attrs, Some(&clip));

        match view.fraction {
            Some(fraction) => {
                buffer.draw_text_right(inner.x, y, inner.width.saturating_sub(1), &view.value, content, None, Attr::BOLD, Some(&clip));
                let accent = view.accent.map_or(focus, |slot| theme.color(slot));
                draw_slider(buffer, inner.x + 2, y + 1, inner.width.saturating_sub(4), fraction, accent, theme, &clip);
            }
            None => {
                let value = format!("‹ {} ›", view.value);
                let fg = if view.focused { focus } else { content };
                buffer.draw_text(inner.x + 2, y + 1, &value, fg, None, Attr::NONE, Some(&clip));
            }
        }
        y += CONTROL_ROWS;
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_slider(buffer: &mut FrameBuffer, x: u16, y: u16, width: u16, fraction: f64, accent: Rgba, theme: &Theme, clip: &ClipRect) {
    if width < 2 {
        return;
    }
    let knob = (fraction.clamp(0.0, 1.0) * f64::from(width - 1)).round() as u16;
    buffer.draw_hline(x, y, knob, '━', accent, None, Some(clip));
    buffer.draw_hline(x + knob + 1, y, width - knob - 1, '─', theme.border.resolve(), None, Some(clip));
    buffer.set_cell(x + knob, y, '●' as u32, accent, None, Attr::BOLD, Some(clip));
}

fn draw_copy_button(buffer: &mut FrameBuffer, inner: ClipRect, y: u16, status: CopyStatus, focused: bool, theme: &Theme) {
    let bg = theme.color(status.color());
    let fg = Rgba::readable_on(bg);
    let row = ClipRect::new(inner.x, y, inner.width, 1);
    buffer.fill_rect(row, bg, Some(&inner));

    let label = if focused {
        format!("▸ {} ◂", status.label())
    } else {
        status.label().to_string()
    };
    let label = truncate_text(&label, inner.width);
    buffer.draw_text_centered(inner.x, y, inner.width, &label, fg, None, Attr::BOLD, Some(&row));
}

// =============================================================================
// Preview
// =============================================================================

fn draw_preview(buffer: &mut FrameBuffer, rect: ClipRect, grid: &PreviewGrid, scroll_row: usize, theme: &Theme) {
    let title = format!(" Preview · {} items ", grid.items.len());
    let inner = draw_panel_frame(buffer, rect, &title, theme);
    if inner.is_empty() {
        return;
    }
    buffer.fill_rect(inner, theme.color(ColorSlot::Base200), None);

    if grid.items.is_empty() {
        let y = inner.y + inner.height / 2;
        buffer.draw_text_centered(inner.x, y, inner.width, "No items", theme.text_muted.resolve(), None, Attr::ITALIC, Some(&inner));
        return;
    }

    let layout = compute_grid_layout(grid, inner.width);
    let last_row = grid.rows().saturating_sub(1) as usize;
    let offset = layout.row_offset(scroll_row.min(last_row), grid.columns as usize);

    for (item, cell) in grid.items.iter().zip(&layout.cells) {
        let top = i32::from(inner.y) + i32::from(cell.y) - i32::from(offset);
        let area = ItemArea {
            x: inner.x + cell.x,
            top,
            width: cell.width,
            height: cell.height,
        };
        if let Some(clip) = area.visible(&inner) {
            draw_item(buffer, item, &area, &clip, theme);
        }
    }

    let muted = theme.text_muted.resolve();
    let right = rect.x + rect.width - 1;
    if offset > 0 {
        buffer.set_cell(right, rect.y + 1, '▲' as u32, muted, None, Attr::NONE, None);
    }
    if layout.content_height.saturating_sub(offset) > inner.height {
        buffer.set_cell(right, rect.y + rect.height - 2, '▼' as u32, muted, None, Attr::NONE, None);
    }
}

/// An item rect whose top may sit above the pane when scrolled.
struct ItemArea {
    x: u16,
    top: i32,
    width: u16,
    height: u16,
}

impl ItemArea {
    fn visible(&self, pane: &ClipRect) -> Option<ClipRect> {
        let y0 = self.top.max(i32::from(pane.y));
        let y1 = (self.top + i32::from(self.height)).min(i32::from(pane.y) + i32::from(pane.height));
        if y1 <= y0 || self.width == 0 {
            return None;
        }
        ClipRect::new(self.x, y0 as u16, self.width, (y1 - y0) as u16).intersect(pane)
    }

    /// Screen row of item row `dy`, if it lies within `clip`.
    fn row(&self, dy: u16, clip: &ClipRect) -> Option<u16> {
        let y = self.top + i32::from(dy);
        (y >= i32::from(clip.y) && y < i32::from(clip.y) + i32::from(clip.height)).then_some(y as u16)
    }
}

fn fill_color(fill: Fill, dx: u16, dy: u16, area: &ItemArea, theme: &Theme) -> Rgba {
    match fill {
        Fill::Solid(slot) => theme.color(slot),
        Fill::Gradient { from, to } => {
            let tx = f32::from(dx) / f32::from(area.width.saturating_sub(1).max(1));
            let ty = f32::from(dy) / f32::from(area.height.saturating_sub(1).max(1));
            Rgba::lerp(theme.color(from), theme.color(to), (tx + ty) / 2.0)
        }
    }
}

fn draw_item(buffer: &mut FrameBuffer, item: &PreviewItem, area: &ItemArea, clip: &ClipRect, theme: &Theme) {
    for dy in 0..area.height {
        let Some(y) = area.row(dy, clip) else { continue };
        for dx in 0..area.width {
            let bg = fill_color(item.fill, dx, dy, area, theme);
            buffer.set_cell(area.x + dx, y, ' ' as u32, bg, Some(bg), Attr::NONE, Some(clip));
        }
    }

    let h = area.height;
    let mid = h / 2;
    let text_room = area.width.saturating_sub(2);

    // Centered text on the fill, contrasting with the fill under it.
    let centered = |buffer: &mut FrameBuffer, dy: u16, text: &str, attrs: Attr| {
        let Some(y) = area.row(dy, clip) else { return };
        let fg = Rgba::readable_on(fill_color(item.fill, area.width / 2, dy, area, theme));
        let text = truncate_text(text, text_room.max(1));
        buffer.draw_text_centered(area.x, y, area.width, &text, fg, None, attrs, Some(clip));
    };

    match item.caption {
        CaptionPlacement::Center => centered(buffer, mid, &item.label, Attr::BOLD),
        CaptionPlacement::TopOverlay | CaptionPlacement::BottomOverlay => {
            let band = if item.caption == CaptionPlacement::TopOverlay { 0 } else { h.saturating_sub(1) };
            if let Some(icon) = item.icon {
                if mid != band {
                    centered(buffer, mid, icon, Attr::NONE);
                }
            }
            if let Some(y) = area.row(band, clip) {
                let bg = fill_color(item.fill, area.width / 2, band, area, theme).dim(0.55);
                buffer.tint_rect(ClipRect::new(area.x, y, area.width, 1), bg, Some(clip));
                let label = truncate_text(&item.label, text_room);
                buffer.draw_text(area.x + 1, y, &label, Rgba::readable_on(bg), None, Attr::BOLD, Some(clip));
            }
        }
        CaptionPlacement::Below => draw_card_caption(buffer, item, area, clip, theme),
    }
}

fn draw_card_caption(buffer: &mut FrameBuffer, item: &PreviewItem, area: &ItemArea, clip: &ClipRect, theme: &Theme) {
    let h = area.height;
    let content = theme.color(ColorSlot::BaseContent);
    let text_room = area.width.saturating_sub(2).max(1);

    let Some(price) = &item.price else {
        // Icon above the label, both on the card surface.
        let mid = h / 2;
        let icon_row = mid.saturating_sub(1);
        let label_row = if h > 2 { mid + 1 } else { mid };
        if let (Some(icon), true) = (item.icon, icon_row != label_row) {
            if let Some(y) = area.row(icon_row, clip) {
                buffer.draw_text_centered(area.x, y, area.width, icon, content, None, Attr::NONE, Some(clip));
            }
        }
        if let Some(y) = area.row(label_row, clip) {
            let label = truncate_text(&item.label, text_room);
            buffer.draw_text_centered(area.x, y, area.width, &label, content, None, Attr::BOLD, Some(clip));
        }
        return;
    };

    // Image area on top, name and price on a surface band below it.
    let band_rows = h.min(2);
    let image_rows = h - band_rows;
    if let (Some(icon), true) = (item.icon, image_rows > 0) {
        if let Some(y) = area.row(image_rows / 2, clip) {
            buffer.draw_text_centered(area.x, y, area.width, icon, Rgba::WHITE, None, Attr::NONE, Some(clip));
        }
    }

    let surface = theme.color(ColorSlot::Base100);
    let lines = [
        (item.label.as_str(), content, Attr::BOLD),
        (price.as_str(), theme.color(ColorSlot::Primary), Attr::BOLD),
    ];
    for (i, (text, fg, attrs)) in lines.iter().enumerate().take(band_rows as usize) {
        let Some(y) = area.row(image_rows + i as u16, clip) else { continue };
        buffer.fill_rect(ClipRect::new(area.x, y, area.width, 1), surface, Some(clip));
        let text = truncate_text(text, text_room);
        buffer.draw_text(area.x + 1, y, &text, *fg, None, *attrs, Some(clip));
    }
}

// =============================================================================
// Code
// =============================================================================

fn draw_code(buffer: &mut FrameBuffer, rect: ClipRect, code: &str, scroll: usize, config: &Configuration, theme: &Theme) {
    let title = format!(" Flutter Code · {} ", config.code_style.label());
    let inner = draw_panel_frame(buffer, rect, &title, theme);
    if inner.is_empty() {
        return;
    }

    let lines: Vec<&str> = code.lines().collect();
    let gutter = lines.len().to_string().len() as u16 + 1;
    let text_width = inner.width.saturating_sub(gutter + 1);
    let start = scroll.min(lines.len().saturating_sub(inner.height as usize));

    let muted = theme.text_muted.resolve();
    let content = theme.color(ColorSlot::BaseContent);

    for (row, (n, line)) in lines.iter().enumerate().skip(start).take(inner.height as usize).enumerate() {
        let y = inner.y + row as u16;
        let number = format!("{:>width$}", n + 1, width = gutter as usize - 1);
        buffer.draw_text(inner.x, y, &number, muted, None, Attr::DIM, Some(&inner));
        buffer.draw_text(inner.x + gutter + 1, y, &truncate_text(line, text_width), content, None, Attr::NONE, Some(&inner));
    }

    if start + (inner.height as usize) < lines.len() {
        let right = rect.x + rect.width - 1;
        buffer.set_cell(right, rect.y + rect.height - 2, '▼' as u32, muted, None, Attr::NONE, None);
    }
}
