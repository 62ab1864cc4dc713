//! Template catalog.
//!
//! A closed table mapping each [`ContentTemplate`] to its menu metadata and
//! two pure renderers: one producing a [`PreviewItem`] for the live grid, one
//! producing the Flutter widget source for the generated code. Dispatch is a
//! table lookup; adding a template means adding a row.
//!
//! # Example
//!
//! ```rust
//! use gridview_builder::catalog;
//! use gridview_builder::model::ContentTemplate;
//!
//! let card = catalog::lookup(ContentTemplate::IconCard);
//! assert_eq!(card.label, "Card (Icon + Text)");
//! assert!(card.render_code_item("5", "").contains("'Item 5'"));
//!
//! // Unknown identifiers resolve to the plain box.
//! assert_eq!(catalog::lookup_id("carousel").id, "container");
//! ```

mod code;
pub mod preview;

pub use preview::{CaptionPlacement, Fill, PreviewItem};

use crate::model::ContentTemplate;

/// Metadata and renderers for one content template.
#[derive(Debug)]
pub struct TemplateDescriptor {
    pub template: ContentTemplate,
    /// Wire identifier (`container`, `gridtile`, ...).
    pub id: &'static str,
    /// Label shown in the template select.
    pub label: &'static str,
    pub description: &'static str,
    preview: fn(u32, f64) -> PreviewItem,
    code: fn(&str, &str) -> String,
}

impl TemplateDescriptor {
    /// Preview fragment for the 1-based `index`.
    pub fn render_preview_item(&self, index: u32, aspect_ratio: f64) -> PreviewItem {
        (self.preview)(index, aspect_ratio)
    }

    /// Flutter source for one item.
    ///
    /// `index_expression` is spliced in verbatim and `indent` prefixes every
    /// emitted line.
    pub fn render_code_item(&self, index_expression: &str, indent: &str) -> String {
        (self.code)(index_expression, indent)
    }
}

static DESCRIPTORS: [TemplateDescriptor; 5] = [
    TemplateDescriptor {
        template: ContentTemplate::PlainBox,
        id: "container",
        label: "Container (Default)",
        description: "Simple colored box - good for basic layouts",
        preview: preview::plain_box,
        code: code::plain_box,
    },
    TemplateDescriptor {
        template: ContentTemplate::MediaTile,
        id: "gridtile",
        label: "GridTile (Image Gallery)",
        description: "Image with header/footer - perfect for galleries",
        preview: preview::media_tile,
        code: code::media_tile,
    },
    TemplateDescriptor {
        template: ContentTemplate::IconCard,
        id: "card",
        label: "Card (Icon + Text)",
        description: "Icon and text card - ideal for dashboards",
        preview: preview::icon_card,
        code: code::icon_card,
    },
    TemplateDescriptor {
        template: ContentTemplate::OverlayStack,
        id: "stack",
        label: "Stack (Image Overlay)",
        description: "Image with overlay - great for portfolios",
        preview: preview::overlay_stack,
        code: code::overlay_stack,
    },
    TemplateDescriptor {
        template: ContentTemplate::ProductCard,
        id: "product",
        label: "Product Card",
        description: "Product card with image and price - for e-commerce",
        preview: preview::product_card,
        code: code::product_card,
    },
];

/// All descriptors in menu order.
pub fn descriptors() -> &'static [TemplateDescriptor] {
    &DESCRIPTORS
}

/// Descriptor for a template.
pub fn lookup(template: ContentTemplate) -> &'static TemplateDescriptor {
    DESCRIPTORS
        .iter()
        .find(|d| d.template == template)
        .unwrap_or(&DESCRIPTORS[0])
}

/// Descriptor for a wire identifier; unknown ids get the plain box.
pub fn lookup_id(id: &str) -> &'static TemplateDescriptor {
    match DESCRIPTORS.iter().find(|d| d.id == id) {
        Some(descriptor) => descriptor,
        None => {
            tracing::warn!(id, "unknown template id, using container");
            &DESCRIPTORS[0]
        }
    }
}
