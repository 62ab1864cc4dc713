//! Control Panel - keyboard-driven inputs bound to configuration fields.
//!
//! Panel order: code-style choice, template select, the six sliders of
//! [`FIELD_SPECS`](crate::model::FIELD_SPECS), copy button. The panel does not own the configuration;
//! [`ControlPanel::handle_key`] reads the current snapshot and returns a
//! [`PanelAction`] for the widget to apply. Control displays are rebuilt from
//! the store on every frame through [`ControlPanel::views`].
//!
//! # Key bindings
//!
//! | Key | Action |
//! |-----|--------|
//! | `Tab` / `↓` | next control |
//! | `Shift+Tab` / `↑` | previous control |
//! | `←` / `→` | step slider, toggle style, cycle template |
//! | `Home` / `End` | slider min / max |
//! | `Space` | toggle style, next template, copy (on the button) |
//! | `Enter` | copy (on the button) |
//! | `c` | copy from anywhere |
//! | `PageUp` / `PageDown` | scroll the code pane |
//! | `[` / `]` | scroll the preview |
//! | `q` / `Esc` / `Ctrl+C` | quit |

use crate::catalog;
use crate::model::{Configuration, Field, FieldSpec, FieldValue, field_spec, format_number};
use crate::state::focus::FocusRing;
use crate::state::keyboard::KeyboardEvent;
use crate::theme::ColorSlot;

/// Lines scrolled by PageUp / PageDown in the code pane.
pub const CODE_PAGE: i32 = 10;

const COPY_HINT: &str = "Copy the generated code to the clipboard";

// =============================================================================
// Control
// =============================================================================

/// One focusable control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    CodeStyle,
    Template,
    Slider(Field),
    Copy,
}

/// Controls in panel (and focus) order.
pub const CONTROLS: [Control; 9] = [
    Control::CodeStyle,
    Control::Template,
    Control::Slider(Field::Columns),
    Control::Slider(Field::MainSpacing),
    Control::Slider(Field::CrossSpacing),
    Control::Slider(Field::AspectRatio),
    Control::Slider(Field::Padding),
    Control::Slider(Field::ItemCount),
    Control::Copy,
];

impl Control {
    fn spec(self) -> Option<&'static FieldSpec> {
        match self {
            Self::Slider(field) => field_spec(field),
            _ => None,
        }
    }

    /// Heading shown above the control.
    pub fn title(self) -> &'static str {
        match self {
            Self::CodeStyle => "Code Style",
            Self::Template => "Content Template",
            Self::Slider(_) => self.spec().map(|s| s.label).unwrap_or(""),
            Self::Copy => "",
        }
    }

    /// Hint shown while the control has focus.
    pub fn description(self, config: &Configuration) -> &'static str {
        match self {
            Self::CodeStyle => config.code_style.hint(),
            Self::Template => catalog::lookup(config.content_template).description,
            Self::Slider(_) => self.spec().map(|s| s.description).unwrap_or(""),
            Self::Copy => COPY_HINT,
        }
    }
}

// =============================================================================
// PanelAction
// =============================================================================

/// What a key press asks the widget to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelAction {
    /// Write a field value into the store.
    Update(Field, FieldValue),
    Copy,
    Quit,
    /// Focus moved to the control at this position.
    FocusChanged(usize),
    /// Scroll the code pane by lines.
    ScrollCode(i32),
    /// Scroll the preview by rows.
    ScrollPreview(i32),
    None,
}

// =============================================================================
// ControlView - per-frame display data
// =============================================================================

/// Display state of one control, rebuilt from the configuration each frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlView {
    pub control: Control,
    pub title: &'static str,
    /// Current value as text (`3`, `1.5`, `GridView.count`, template label).
    pub value: String,
    /// Slider fill in `[0, 1]`; `None` for non-sliders.
    pub fraction: Option<f64>,
    pub accent: Option<ColorSlot>,
    pub focused: bool,
}

fn slider_fraction(spec: &FieldSpec, value: f64) -> f64 {
    let span = spec.max - spec.min;
    if span <= 0.0 {
        return 0.0;
    }
    ((value - spec.min) / span).clamp(0.0, 1.0)
}

// =============================================================================
// ControlPanel
// =============================================================================

/// Focus state and key bindings of the control panel.
#[derive(Clone)]
pub struct ControlPanel {
    focus: FocusRing,
}

impl ControlPanel {
    pub fn new() -> Self {
        Self {
            focus: FocusRing::new(CONTROLS.len()),
        }
    }

    pub fn focused_control(&self) -> Control {
        CONTROLS[self.focus.focused().min(CONTROLS.len() - 1)]
    }

    /// Move focus to a control. Returns false if it is not in the panel.
    pub fn focus_control(&self, control: Control) -> bool {
        match CONTROLS.iter().position(|c| *c == control) {
            Some(slot) => self.focus.focus(slot),
            None => false,
        }
    }

    /// Hint line for the focused control.
    pub fn hint(&self, config: &Configuration) -> &'static str {
        self.focused_control().description(config)
    }

    /// Display state for every control.
    pub fn views(&self, config: &Configuration) -> Vec<ControlView> {
        let focused = self.focus.focused();
        CONTROLS
            .iter()
            .enumerate()
            .map(|(slot, control)| {
                let (value, fraction, accent) = match control {
                    Control::CodeStyle => (config.code_style.label().to_string(), None, None),
                    Control::Template => (
                        catalog::lookup(config.content_template).label.to_string(),
                        None,
                        None,
                    ),
                    Control::Slider(field) => {
                        let n = config.value(*field).as_number().unwrap_or_default();
                        let spec = control.spec();
                        (
                            format_number(n),
                            spec.map(|s| slider_fraction(s, n)),
                            spec.and_then(|s| s.accent),
                        )
                    }
                    Control::Copy => (String::new(), None, None),
                };
                ControlView {
                    control: *control,
                    title: control.title(),
                    value,
                    fraction,
                    accent,
                    focused: slot == focused,
                }
            })
            .collect()
    }

    /// Translate a key press into an action against the current configuration.
    pub fn handle_key(&self, event: &KeyboardEvent, config: &Configuration) -> PanelAction {
        if !event.is_actionable() {
            return PanelAction::None;
        }
        if event.is_interrupt() {
            return PanelAction::Quit;
        }
        if event.modifiers.ctrl || event.modifiers.alt {
            return PanelAction::None;
        }

        match event.key.as_str() {
            "q" | "Escape" => return PanelAction::Quit,
            "Tab" if event.modifiers.shift => return self.move_focus(false),
            "Tab" | "ArrowDown" => return self.move_focus(true),
            "ArrowUp" => return self.move_focus(false),
            "PageUp" => return PanelAction::ScrollCode(-CODE_PAGE),
            "PageDown" => return PanelAction::ScrollCode(CODE_PAGE),
            "[" => return PanelAction::ScrollPreview(-1),
            "]" => return PanelAction::ScrollPreview(1),
            "c" => return PanelAction::Copy,
            _ => {}
        }

        let control = self.focused_control();
        let action = match control {
            Control::CodeStyle => match event.key.as_str() {
                "ArrowLeft" | "ArrowRight" | "Space" => {
                    PanelAction::Update(Field::CodeStyle, FieldValue::CodeStyle(config.code_style.toggled()))
                }
                _ => PanelAction::None,
            },
            Control::Template => {
                let next = match event.key.as_str() {
                    "ArrowRight" | "Space" => Some(config.content_template.next()),
                    "ArrowLeft" => Some(config.content_template.previous()),
                    _ => None,
                };
                next.map_or(PanelAction::None, |t| {
                    PanelAction::Update(Field::ContentTemplate, FieldValue::Template(t))
                })
            }
            Control::Slider(field) => {
                let Some(spec) = control.spec() else {
                    return PanelAction::None;
                };
                let current = config.value(field).as_number().unwrap_or(spec.min);
                let next = match event.key.as_str() {
                    "ArrowRight" => Some(spec.step_by(current, 1)),
                    "ArrowLeft" => Some(spec.step_by(current, -1)),
                    "Home" => Some(spec.min),
                    "End" => Some(spec.max),
                    _ => None,
                };
                next.map_or(PanelAction::None, |v| PanelAction::Update(field, FieldValue::Number(v)))
            }
            Control::Copy => match event.key.as_str() {
                "Enter" | "Space" => PanelAction::Copy,
                _ => PanelAction::None,
            },
        };

        if let PanelAction::Update(field, value) = action {
            tracing::debug!(%field, %value, "control changed");
        }
        action
    }

    fn move_focus(&self, forward: bool) -> PanelAction {
        if forward {
            self.focus.focus_next();
        } else {
            self.focus.focus_previous();
        }
        PanelAction::FocusChanged(self.focus.focused())
    }
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
