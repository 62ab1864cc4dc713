//! The configurator widget.
//!
//! [`GridViewBuilder`] owns one configuration and everything derived from it:
//!
//! ```text
//! StateStore signal ─┬─> previewDerived ─┐
//!                    └─> codeDerived ────┴─> on_code_generated callback
//! ```
//!
//! Every mutation goes through [`GridViewBuilder::set_state`] or
//! [`GridViewBuilder::set_one`], which apply the change, re-read the preview,
//! re-read the code and then invoke the callback, in that order.
//!
//! # Example
//!
//! ```rust
//! use gridview_builder::model::{CodeStyle, ConfigPatch};
//! use gridview_builder::options::BuilderOptions;
//! use gridview_builder::state::MemoryClipboard;
//! use gridview_builder::widget::GridViewBuilder;
//!
//! let clipboard = MemoryClipboard::new();
//! let mut widget = GridViewBuilder::with_clipboard(BuilderOptions::default(), Box::new(clipboard.clone()));
//! widget.set_state(ConfigPatch::new().code_style(CodeStyle::IndexBuilder).item_count(5));
//! assert!(widget.get_code().contains("itemCount: 5,"));
//!
//! widget.copy_code();
//! assert_eq!(clipboard.contents(), Some(widget.get_code()));
//! ```

use std::rc::Rc;
use std::time::Instant;

use spark_signals::{derived, signal, Signal};

use crate::codegen;
use crate::controls::{ControlPanel, PanelAction};
use crate::model::{ConfigPatch, Configuration, Field, FieldValue};
use crate::options::BuilderOptions;
use crate::preview::{self, PreviewGrid};
use crate::state::clipboard::{default_clipboard, Clipboard};
use crate::state::copy_feedback::{CopyFeedback, CopyStatus};
use crate::state::keyboard::KeyboardEvent;
use crate::state::store::StateStore;
use crate::theme::{resolve_theme, Theme};

/// Memoized read of a derived value.
pub type Reader<T> = Rc<dyn Fn() -> T>;

type CodeCallback = Box<dyn FnMut(&str)>;

/// Scroll offsets of the output panes.
#[derive(Clone)]
pub struct ScrollState {
    /// First visible line of the code pane.
    pub code: Signal<usize>,
    /// First visible row of the preview grid.
    pub preview: Signal<usize>,
}

impl ScrollState {
    fn new() -> Self {
        Self {
            code: signal(0),
            preview: signal(0),
        }
    }
}

/// Interactive GridView configurator.
pub struct GridViewBuilder {
    options: BuilderOptions,
    theme: Theme,
    store: StateStore,
    panel: ControlPanel,
    feedback: CopyFeedback,
    scroll: ScrollState,
    clipboard: Box<dyn Clipboard>,
    preview: Reader<PreviewGrid>,
    code: Reader<String>,
    on_code_generated: Option<CodeCallback>,
}

impl GridViewBuilder {
    /// Create a widget writing to the default clipboard.
    pub fn new(options: BuilderOptions) -> Self {
        Self::with_clipboard(options, default_clipboard())
    }

    /// Create a widget with an explicit clipboard sink.
    pub fn with_clipboard(options: BuilderOptions, clipboard: Box<dyn Clipboard>) -> Self {
        let store = StateStore::new(options.initial_configuration());
        let theme = resolve_theme(&options.theme);

        let config = store.signal();
        let preview_derived = derived(move || preview::render(&config.get()));
        let preview: Reader<PreviewGrid> = Rc::new(move || preview_derived.get());

        let config = store.signal();
        let code_derived = derived(move || codegen::generate(&config.get()));
        let code: Reader<String> = Rc::new(move || code_derived.get());

        tracing::debug!(
            theme = %theme.name,
            clipboard = clipboard.name(),
            "gridview builder created"
        );

        Self {
            options,
            theme,
            store,
            panel: ControlPanel::new(),
            feedback: CopyFeedback::new(),
            scroll: ScrollState::new(),
            clipboard,
            preview,
            code,
            on_code_generated: None,
        }
    }

    // =========================================================================
    // Public operations
    // =========================================================================

    /// Generated Flutter code for the current configuration.
    pub fn get_code(&self) -> String {
        (self.code)()
    }

    /// Snapshot of the current configuration.
    pub fn get_state(&self) -> Configuration {
        self.store.get()
    }

    /// Current preview grid.
    pub fn preview(&self) -> PreviewGrid {
        (self.preview)()
    }

    /// Merge `patch` into the configuration and re-derive.
    pub fn set_state(&mut self, patch: ConfigPatch) {
        if self.store.set(&patch).is_empty() {
            return;
        }
        self.refresh();
    }

    /// Single-field update, as a control would make it.
    pub fn set_one(&mut self, field: Field, value: FieldValue) {
        if self.store.set_one(field, value) {
            self.refresh();
        }
    }

    /// Register the code callback. It is invoked once right away with the
    /// current code, then after every mutation.
    pub fn on_code_generated<F>(&mut self, callback: F)
    where
        F: FnMut(&str) + 'static,
    {
        let mut callback: CodeCallback = Box::new(callback);
        callback(&self.get_code());
        self.on_code_generated = Some(callback);
    }

    /// Copy the current code to the clipboard and start the feedback window.
    pub fn copy_code(&mut self) -> CopyStatus {
        self.copy_code_at(Instant::now())
    }

    pub(crate) fn copy_code_at(&mut self, now: Instant) -> CopyStatus {
        let code = self.get_code();
        match self.clipboard.write_text(&code) {
            Ok(()) => {
                tracing::info!(bytes = code.len(), clipboard = self.clipboard.name(), "code copied");
                self.feedback.record(true, now);
            }
            Err(e) => {
                tracing::warn!(error = %e, "copy failed");
                self.feedback.record(false, now);
            }
        }
        self.feedback.status()
    }

    // =========================================================================
    // Interactive surface
    // =========================================================================

    /// Route a key press through the control panel and apply the result.
    pub fn handle_key(&mut self, event: &KeyboardEvent) -> PanelAction {
        let config = self.store.get();
        let action = self.panel.handle_key(event, &config);
        match action {
            PanelAction::Update(field, value) => self.set_one(field, value),
            PanelAction::Copy => {
                self.copy_code();
            }
            PanelAction::ScrollCode(delta) => {
                let lines = self.get_code().lines().count();
                scroll_by(&self.scroll.code, delta, lines);
            }
            PanelAction::ScrollPreview(delta) => {
                let rows = self.preview().rows() as usize;
                scroll_by(&self.scroll.preview, delta, rows);
            }
            PanelAction::Quit | PanelAction::FocusChanged(_) | PanelAction::None => {}
        }
        action
    }

    /// Advance time-based state. Returns true if anything changed.
    pub fn tick(&self, now: Instant) -> bool {
        self.feedback.tick(now)
    }

    pub fn options(&self) -> &BuilderOptions {
        &self.options
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub(crate) fn store(&self) -> &StateStore {
        &self.store
    }

    pub fn panel(&self) -> &ControlPanel {
        &self.panel
    }

    pub fn feedback(&self) -> &CopyFeedback {
        &self.feedback
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    /// Reader over the preview derived, for composing further deriveds.
    pub fn preview_reader(&self) -> Reader<PreviewGrid> {
        self.preview.clone()
    }

    /// Reader over the code derived.
    pub fn code_reader(&self) -> Reader<String> {
        self.code.clone()
    }

    fn refresh(&mut self) {
        let grid = (self.preview)();
        let code = (self.code)();
        tracing::debug!(items = grid.items.len(), bytes = code.len(), "outputs re-derived");
        if let Some(callback) = self.on_code_generated.as_mut() {
            callback(&code);
        }
    }
}

fn scroll_by(offset: &Signal<usize>, delta: i32, len: usize) {
    let max = len.saturating_sub(1);
    let current = offset.get();
    let next = if delta < 0 {
        current.saturating_sub(delta.unsigned_abs() as usize)
    } else {
        current.saturating_add(delta as usize).min(max)
    };
    if next != current {
        offset.set(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CodeStyle, ContentTemplate};
    use crate::state::clipboard::{MemoryClipboard, UnavailableClipboard};
    use std::cell::RefCell;
    use std::time::Duration;

    fn setup() -> (GridViewBuilder, MemoryClipboard) {
        let clipboard = MemoryClipboard::new();
        let widget = GridViewBuilder::with_clipboard(BuilderOptions::default(), Box::new(clipboard.clone()));
        (widget, clipboard)
    }

    #[test]
    fn test_initial_state_from_options() {
        let options = BuilderOptions {
            default_columns: Some(5),
            theme: "nord".to_string(),
            ..BuilderOptions::default()
        };
        let widget = GridViewBuilder::with_clipboard(options, Box::new(MemoryClipboard::new()));
        assert_eq!(widget.get_state().columns, 5);
        assert_eq!(widget.theme().name, "nord");
        assert!(widget.get_code().contains("crossAxisCount: 5,"));
    }

    #[test]
    fn test_set_state_rederives() {
        let (mut widget, _) = setup();
        assert_eq!(widget.preview().items.len(), 12);
        widget.set_state(ConfigPatch::new().item_count(4).content_template(ContentTemplate::IconCard));
        assert_eq!(widget.preview().items.len(), 4);
        assert_eq!(widget.get_code().matches("Card(").count(), 4);
    }

    #[test]
    fn test_set_state_round_trip_is_noop() {
        let (mut widget, _) = setup();
        widget.set_state(ConfigPatch::new().aspect_ratio(1.3).code_style(CodeStyle::IndexBuilder));
        let before = widget.get_code();
        let state = widget.get_state();
        widget.set_state(state.into());
        assert_eq!(widget.get_code(), before);
    }

    #[test]
    fn test_callback_receives_code_in_order() {
        let (mut widget, _) = setup();
        let seen = Rc::new(RefCell::new(Vec::<String>::new()));
        let sink = seen.clone();
        widget.on_code_generated(move |code| sink.borrow_mut().push(code.to_string()));
        assert_eq!(seen.borrow().len(), 1);

        widget.set_one(Field::Columns, FieldValue::Number(2.0));
        widget.set_one(Field::Columns, FieldValue::Number(6.0));
        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert!(seen[1].contains("crossAxisCount: 2,"));
        assert!(seen[2].contains("crossAxisCount: 6,"));
        assert_eq!(seen[2], widget.get_code());
    }

    #[test]
    fn test_mismatched_set_one_skips_callback() {
        let (mut widget, _) = setup();
        let count = Rc::new(RefCell::new(0));
        let sink = count.clone();
        widget.on_code_generated(move |_| *sink.borrow_mut() += 1);
        widget.set_one(Field::Columns, FieldValue::Template(ContentTemplate::ProductCard));
        widget.set_state(ConfigPatch::new());
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_copy_success_and_revert() {
        let (mut widget, clipboard) = setup();
        let now = Instant::now();
        assert_eq!(widget.copy_code_at(now), CopyStatus::Copied);
        assert_eq!(clipboard.contents(), Some(widget.get_code()));
        assert!(!widget.tick(now + Duration::from_secs(1)));
        assert!(widget.tick(now + Duration::from_secs(2)));
        assert_eq!(widget.feedback().status(), CopyStatus::Idle);
    }

    #[test]
    fn test_copy_failure_reported() {
        let mut widget = GridViewBuilder::with_clipboard(BuilderOptions::default(), Box::new(UnavailableClipboard));
        assert_eq!(widget.copy_code(), CopyStatus::Failed);
    }

    #[test]
    fn test_keys_drive_state() {
        let (mut widget, clipboard) = setup();
        // Focus the columns slider: code style -> template -> columns.
        widget.handle_key(&KeyboardEvent::new("Tab"));
        widget.handle_key(&KeyboardEvent::new("Tab"));
        let action = widget.handle_key(&KeyboardEvent::new("ArrowRight"));
        assert_eq!(action, PanelAction::Update(Field::Columns, FieldValue::Number(4.0)));
        assert_eq!(widget.get_state().columns, 4);

        widget.handle_key(&KeyboardEvent::new("c"));
        assert!(clipboard.contents().unwrap().contains("crossAxisCount: 4,"));
    }

    #[test]
    fn test_every_mutation_path_notifies() {
        let (mut widget, _) = setup();
        let seen = Rc::new(RefCell::new(Vec::<String>::new()));
        let sink = seen.clone();
        widget.on_code_generated(move |code| sink.borrow_mut().push(code.to_string()));

        widget.set_state(ConfigPatch::new().columns(5));
        widget.set_one(Field::ItemCount, FieldValue::Number(3.0));
        widget.handle_key(&KeyboardEvent::new("ArrowRight"));

        let seen = seen.borrow();
        assert_eq!(seen.len(), 4);
        assert!(seen[1].contains("crossAxisCount: 5,"));
        assert!(seen[2].contains("crossAxisCount: 5,"));
        assert!(seen[3].starts_with("GridView.builder("));
        assert_eq!(seen[3], widget.get_code());
        assert_eq!(widget.store().get(), widget.get_state());
    }

    #[test]
    fn test_scroll_is_bounded() {
        let (mut widget, _) = setup();
        widget.handle_key(&KeyboardEvent::new("PageUp"));
        assert_eq!(widget.scroll().code.get(), 0);
        for _ in 0..100 {
            widget.handle_key(&KeyboardEvent::new("PageDown"));
        }
        let lines = widget.get_code().lines().count();
        assert_eq!(widget.scroll().code.get(), lines - 1);

        widget.handle_key(&KeyboardEvent::new("]"));
        widget.handle_key(&KeyboardEvent::new("]"));
        assert_eq!(widget.scroll().preview.get(), 2);
    }
}
