//! Integration tests for the widget surface.

use std::cell::RefCell;
use std::rc::Rc;

use gridview_builder::catalog::Fill;
use gridview_builder::state::UnavailableClipboard;
use gridview_builder::theme::ColorSlot;
use gridview_builder::{
    BuilderOptions, CodeStyle, ConfigPatch, Configuration, ContentTemplate, CopyStatus,
    GridViewBuilder, MemoryClipboard,
};

fn setup() -> (GridViewBuilder, MemoryClipboard) {
    let clipboard = MemoryClipboard::new();
    let widget = GridViewBuilder::with_clipboard(BuilderOptions::default(), Box::new(clipboard.clone()));
    (widget, clipboard)
}

#[test]
fn test_default_configuration_code() {
    let (widget, _) = setup();
    assert_eq!(widget.get_state(), Configuration::default());

    let code = widget.get_code();
    assert!(code.starts_with("GridView.count("));
    assert!(code.contains("crossAxisCount: 3,"));
    assert!(code.contains("mainAxisSpacing: 16,"));
    assert!(code.contains("childAspectRatio: 1,"));
    assert!(code.contains("padding: EdgeInsets.all(16),"));
    assert_eq!(code.matches("Container(").count(), 12);
    for i in 1..=12 {
        assert!(code.contains(&format!("'{i}',")), "missing item {i}");
    }
}

#[test]
fn test_builder_with_product_cards() {
    let (mut widget, _) = setup();
    widget.set_state(
        ConfigPatch::new()
            .code_style(CodeStyle::IndexBuilder)
            .content_template(ContentTemplate::ProductCard)
            .item_count(5),
    );

    let code = widget.get_code();
    assert!(code.contains("SliverGridDelegateWithFixedCrossAxisCount("));
    assert!(code.contains("itemCount: 5,"));
    assert_eq!(code.matches("itemBuilder:").count(), 1);
    assert_eq!(code.matches("Card(").count(), 1);
    assert!(code.contains(r"'\$${index + 1}0.00'"));
}

#[test]
fn test_unknown_template_falls_back_to_plain_box() {
    let (mut widget, _) = setup();
    widget.set_state(ConfigPatch::new().content_template(ContentTemplate::MediaTile));

    let patch: ConfigPatch = serde_json::from_str(r#"{"contentTemplate": "carousel"}"#).unwrap();
    widget.set_state(patch);

    assert_eq!(widget.get_state().content_template, ContentTemplate::PlainBox);
    assert_eq!(widget.get_code().matches("Container(").count(), 12);

    let grid = widget.preview();
    assert_eq!(grid.items.len(), 12);
    assert!(grid.items.iter().all(|item| item.template == ContentTemplate::PlainBox));
    assert_eq!(grid.items[0].fill, Fill::Solid(ColorSlot::Primary));
}

#[test]
fn test_set_state_round_trip_keeps_code() {
    let (mut widget, _) = setup();
    widget.set_state(ConfigPatch::new().columns(5).aspect_ratio(0.8).content_template(ContentTemplate::IconCard));
    let before = widget.get_code();

    widget.set_state(ConfigPatch::from(widget.get_state()));
    assert_eq!(widget.get_code(), before);
}

#[test]
fn test_preview_tracks_configuration() {
    let (mut widget, _) = setup();
    widget.set_state(ConfigPatch::new().columns(4).main_spacing(8.0).cross_spacing(2.0).item_count(6));

    let grid = widget.preview();
    assert_eq!(grid.columns, 4);
    assert_eq!(grid.row_gap, 8.0);
    assert_eq!(grid.column_gap, 2.0);
    assert_eq!(grid.items.len(), 6);
    assert_eq!(grid.rows(), 2);
}

#[test]
fn test_callback_runs_after_every_mutation() {
    let (mut widget, _) = setup();
    let seen: Rc<RefCell<Vec<String>>> = Rc::default();
    let sink = seen.clone();
    widget.on_code_generated(move |code| sink.borrow_mut().push(code.to_string()));

    assert_eq!(seen.borrow().len(), 1);

    widget.set_state(ConfigPatch::new().columns(2));
    widget.set_state(ConfigPatch::new().item_count(3));

    let seen = seen.borrow();
    assert_eq!(seen.len(), 3);
    assert!(seen[1].contains("crossAxisCount: 2,"));
    assert_eq!(seen[2], widget.get_code());
}

#[test]
fn test_empty_patch_does_not_notify() {
    let (mut widget, _) = setup();
    let calls = Rc::new(RefCell::new(0));
    let counter = calls.clone();
    widget.on_code_generated(move |_| *counter.borrow_mut() += 1);

    widget.set_state(ConfigPatch::new());
    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn test_copy_code_writes_clipboard() {
    let (mut widget, clipboard) = setup();
    assert_eq!(widget.copy_code(), CopyStatus::Copied);
    assert_eq!(clipboard.contents(), Some(widget.get_code()));
}

#[test]
fn test_copy_failure_is_reported() {
    let mut widget = GridViewBuilder::with_clipboard(BuilderOptions::default(), Box::new(UnavailableClipboard));
    assert_eq!(widget.copy_code(), CopyStatus::Failed);
    assert_eq!(widget.feedback().status(), CopyStatus::Failed);
}

#[test]
fn test_options_seed_initial_state() {
    let options = BuilderOptions::from_json_str(
        r#"{"defaultColumns": 2, "defaultItemCount": 4, "defaultCodeStyle": "builder", "theme": "nord"}"#,
    )
    .unwrap();
    let widget = GridViewBuilder::with_clipboard(options, Box::new(MemoryClipboard::new()));

    let state = widget.get_state();
    assert_eq!(state.columns, 2);
    assert_eq!(state.item_count, 4);
    assert_eq!(state.code_style, CodeStyle::IndexBuilder);
    assert_eq!(widget.theme().name, "nord");
    assert!(widget.get_code().contains("itemCount: 4,"));
}
