//! Preview fragments.
//!
//! A [`PreviewItem`] is the presentation-independent description of one grid
//! cell: what to paint, where the caption goes, and which theme slots color
//! it. The frame composer maps it onto cells.

use crate::model::ContentTemplate;
use crate::theme::ColorSlot;

/// Background of a preview item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Solid(ColorSlot),
    /// Diagonal gradient, top-left to bottom-right.
    Gradient { from: ColorSlot, to: ColorSlot },
}

/// Where the caption is drawn inside the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptionPlacement {
    /// Centered over the fill.
    Center,
    /// Dark bar along the top edge.
    TopOverlay,
    /// Dark bar along the bottom edge.
    BottomOverlay,
    /// Below the icon, on the card surface.
    Below,
}

/// One rendered grid cell.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewItem {
    /// 1-based position in the grid.
    pub index: u32,
    pub template: ContentTemplate,
    pub fill: Fill,
    pub icon: Option<&'static str>,
    pub label: String,
    pub caption: CaptionPlacement,
    /// Price line, product cards only.
    pub price: Option<String>,
    /// Width / height of the cell.
    pub aspect_ratio: f64,
}

const BOX_COLORS: [ColorSlot; 3] = [ColorSlot::Primary, ColorSlot::Secondary, ColorSlot::Accent];

pub(crate) fn plain_box(index: u32, aspect_ratio: f64) -> PreviewItem {
    let slot = BOX_COLORS[(index.saturating_sub(1) % 3) as usize];
    PreviewItem {
        index,
        template: ContentTemplate::PlainBox,
        fill: Fill::Solid(slot),
        icon: None,
        label: index.to_string(),
        caption: CaptionPlacement::Center,
        price: None,
        aspect_ratio,
    }
}

pub(crate) fn media_tile(index: u32, aspect_ratio: f64) -> PreviewItem {
    PreviewItem {
        index,
        template: ContentTemplate::MediaTile,
        fill: Fill::Gradient {
            from: ColorSlot::Primary,
            to: ColorSlot::Secondary,
        },
        icon: Some("📷"),
        label: format!("Item {index}"),
        caption: CaptionPlacement::TopOverlay,
        price: None,
        aspect_ratio,
    }
}

pub(crate) fn icon_card(index: u32, aspect_ratio: f64) -> PreviewItem {
    PreviewItem {
        index,
        template: ContentTemplate::IconCard,
        fill: Fill::Solid(ColorSlot::Base100),
        icon: Some("⭐"),
        label: format!("Item {index}"),
        caption: CaptionPlacement::Below,
        price: None,
        aspect_ratio,
    }
}

pub(crate) fn overlay_stack(index: u32, aspect_ratio: f64) -> PreviewItem {
    PreviewItem {
        index,
        template: ContentTemplate::OverlayStack,
        fill: Fill::Gradient {
            from: ColorSlot::Accent,
            to: ColorSlot::Secondary,
        },
        icon: Some("🖼️"),
        label: format!("Item {index}"),
        caption: CaptionPlacement::BottomOverlay,
        price: None,
        aspect_ratio,
    }
}

pub(crate) fn product_card(index: u32, aspect_ratio: f64) -> PreviewItem {
    PreviewItem {
        index,
        template: ContentTemplate::ProductCard,
        fill: Fill::Gradient {
            from: ColorSlot::Info,
            to: ColorSlot::Primary,
        },
        icon: Some("🛍️"),
        label: format!("Product {index}"),
        caption: CaptionPlacement::Below,
        price: Some(format!("${index}0.00")),
        aspect_ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_box_color_cycle() {
        let fills: Vec<Fill> = (1..=4).map(|i| plain_box(i, 1.0).fill).collect();
        assert_eq!(
            fills,
            vec![
                Fill::Solid(ColorSlot::Primary),
                Fill::Solid(ColorSlot::Secondary),
                Fill::Solid(ColorSlot::Accent),
                Fill::Solid(ColorSlot::Primary),
            ]
        );
        assert_eq!(plain_box(2, 1.0).label, "2");
    }

    #[test]
    fn test_product_price() {
        let item = product_card(3, 0.8);
        assert_eq!(item.label, "Product 3");
        assert_eq!(item.price.as_deref(), Some("$30.00"));
        assert_eq!(item.aspect_ratio, 0.8);
    }

    #[test]
    fn test_caption_placement() {
        assert_eq!(media_tile(1, 1.0).caption, CaptionPlacement::TopOverlay);
        assert_eq!(overlay_stack(1, 1.0).caption, CaptionPlacement::BottomOverlay);
        assert_eq!(icon_card(1, 1.0).icon, Some("⭐"));
    }
}
