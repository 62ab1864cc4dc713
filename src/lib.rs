//! # gridview-builder
//!
//! Interactive configurator for Flutter `GridView` layouts.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for fine-grained reactivity.
//!
//! ## Architecture
//!
//! One [`Configuration`] lives in a signal owned by the widget. Two deriveds
//! hang off it: the preview grid and the generated Flutter code. Every
//! mutation re-reads both and then notifies the code callback:
//!
//! ```text
//! controls ─▶ StateStore ─┬─▶ previewDerived ─┐
//!                         └─▶ codeDerived ────┴─▶ on_code_generated
//!                                                 frame derived ─▶ terminal
//! ```
//!
//! The core (catalog, preview, codegen) is pure and knows nothing about
//! terminals. The terminal adapter (layout, renderer, pipeline) draws the
//! widget with [Taffy](https://github.com/DioxusLabs/taffy) layout and
//! crossterm output.
//!
//! ## Example
//!
//! ```rust
//! use gridview_builder::{BuilderOptions, ConfigPatch, ContentTemplate, GridViewBuilder};
//! use gridview_builder::state::MemoryClipboard;
//!
//! let mut widget = GridViewBuilder::with_clipboard(BuilderOptions::default(), Box::new(MemoryClipboard::new()));
//! widget.set_state(ConfigPatch::new().columns(2).content_template(ContentTemplate::IconCard));
//!
//! let code = widget.get_code();
//! assert!(code.contains("crossAxisCount: 2,"));
//! assert!(code.contains("Icons.star"));
//! ```
//!
//! ## Modules
//!
//! - [`model`] - Configuration, patches, field metadata
//! - [`catalog`] - The five content templates (preview + code fragments)
//! - [`preview`] / [`codegen`] - Pure derivations from a configuration
//! - [`state`] - Store, copy feedback, clipboard, focus, keyboard input
//! - [`controls`] - Control panel views and key bindings
//! - [`widget`] - [`GridViewBuilder`], the public widget surface
//! - [`layout`] / [`renderer`] / [`pipeline`] - Terminal adapter

pub mod catalog;
pub mod codegen;
pub mod controls;
pub mod error;
pub mod layout;
pub mod logging;
pub mod model;
pub mod options;
pub mod pipeline;
pub mod preview;
pub mod renderer;
pub mod state;
pub mod theme;
pub mod types;
pub mod widget;

// Re-export commonly used items
pub use error::{Error, Result};

pub use model::{
    CodeStyle, ConfigPatch, Configuration, ContentTemplate, Field, FieldSpec, FieldValue,
    FIELD_SPECS,
};

pub use catalog::{descriptors, lookup, lookup_id, PreviewItem, TemplateDescriptor};

pub use codegen::generate;

pub use preview::{render as render_preview, PreviewGrid};

pub use options::BuilderOptions;

pub use widget::GridViewBuilder;

pub use state::{Clipboard, CopyStatus, KeyboardEvent, MemoryClipboard, Modifiers};

pub use pipeline::{mount, unmount, MountHandle};

pub use theme::{get_preset, preset_names, Theme};
