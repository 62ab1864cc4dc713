//! Configuration model.
//!
//! [`Configuration`] is the record every derivation reads: preview, code and
//! the control displays. [`ConfigPatch`] is a partial configuration used by
//! `set_state`, and [`Field`] / [`FieldValue`] address a single field the way a
//! control does.
//!
//! # Example
//!
//! ```rust
//! use gridview_builder::model::{ConfigPatch, Configuration, ContentTemplate};
//!
//! let mut config = Configuration::default();
//! config.apply(&ConfigPatch::new().columns(4).content_template(ContentTemplate::IconCard));
//! assert_eq!(config.columns, 4);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::theme::ColorSlot;

// =============================================================================
// Number display
// =============================================================================

/// Format a number the way the configurator displays it.
///
/// Integral values print without a fractional part (`16`, `1`), everything
/// else in its shortest decimal form (`1.5`).
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Covers -0.0 as well.
        return "0".to_string();
    }
    value.to_string()
}

// =============================================================================
// CodeStyle
// =============================================================================

/// Structural style of the generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CodeStyle {
    /// `GridView.count` with an explicit children list.
    #[default]
    FixedList,
    /// `GridView.builder` with a single item builder.
    IndexBuilder,
}

impl CodeStyle {
    pub const ALL: [CodeStyle; 2] = [CodeStyle::FixedList, CodeStyle::IndexBuilder];

    /// Wire identifier (`count` / `builder`).
    pub fn id(self) -> &'static str {
        match self {
            Self::FixedList => "count",
            Self::IndexBuilder => "builder",
        }
    }

    /// Radio label.
    pub fn label(self) -> &'static str {
        match self {
            Self::FixedList => "GridView.count",
            Self::IndexBuilder => "GridView.builder",
        }
    }

    /// Hint shown under the radio label.
    pub fn hint(self) -> &'static str {
        match self {
            Self::FixedList => "Best for static layouts",
            Self::IndexBuilder => "Best for dynamic data lists",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.id() == id)
    }

    /// Parse an identifier, falling back to `FixedList`.
    pub fn parse_lenient(id: &str) -> Self {
        Self::from_id(id).unwrap_or_else(|| {
            tracing::warn!(id, "unknown code style, falling back to count");
            Self::FixedList
        })
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::FixedList => Self::IndexBuilder,
            Self::IndexBuilder => Self::FixedList,
        }
    }
}

impl From<String> for CodeStyle {
    fn from(id: String) -> Self {
        Self::parse_lenient(&id)
    }
}

impl From<CodeStyle> for String {
    fn from(style: CodeStyle) -> Self {
        style.id().to_string()
    }
}

// =============================================================================
// ContentTemplate
// =============================================================================

/// Visual/code template used for every grid item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContentTemplate {
    /// Colored box with the item number.
    #[default]
    PlainBox,
    /// Image tile with a header bar.
    MediaTile,
    /// Card with an icon and a caption.
    IconCard,
    /// Image with a caption overlay at the bottom.
    OverlayStack,
    /// Product card with image, name and price.
    ProductCard,
}

impl ContentTemplate {
    /// Menu order.
    pub const ALL: [ContentTemplate; 5] = [
        ContentTemplate::PlainBox,
        ContentTemplate::MediaTile,
        ContentTemplate::IconCard,
        ContentTemplate::OverlayStack,
        ContentTemplate::ProductCard,
    ];

    /// Wire identifier.
    pub fn id(self) -> &'static str {
        match self {
            Self::PlainBox => "container",
            Self::MediaTile => "gridtile",
            Self::IconCard => "card",
            Self::OverlayStack => "stack",
            Self::ProductCard => "product",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|template| template.id() == id)
    }

    /// Parse an identifier, falling back to `PlainBox`.
    pub fn parse_lenient(id: &str) -> Self {
        Self::from_id(id).unwrap_or_else(|| {
            tracing::warn!(id, "unknown content template, falling back to container");
            Self::PlainBox
        })
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// Next template in menu order (wrapping).
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Previous template in menu order (wrapping).
    pub fn previous(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.position() + len - 1) % len]
    }
}

impl From<String> for ContentTemplate {
    fn from(id: String) -> Self {
        Self::parse_lenient(&id)
    }
}

impl From<ContentTemplate> for String {
    fn from(template: ContentTemplate) -> Self {
        template.id().to_string()
    }
}

// =============================================================================
// Field / FieldValue
// =============================================================================

/// An addressable configuration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Columns,
    MainSpacing,
    CrossSpacing,
    AspectRatio,
    Padding,
    ItemCount,
    CodeStyle,
    ContentTemplate,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Columns,
        Field::MainSpacing,
        Field::CrossSpacing,
        Field::AspectRatio,
        Field::Padding,
        Field::ItemCount,
        Field::CodeStyle,
        Field::ContentTemplate,
    ];

    /// Fields driven by sliders, in panel order.
    pub const NUMERIC: [Field; 6] = [
        Field::Columns,
        Field::MainSpacing,
        Field::CrossSpacing,
        Field::AspectRatio,
        Field::Padding,
        Field::ItemCount,
    ];

    /// camelCase key used in JSON and by `get_state`.
    pub fn key(self) -> &'static str {
        match self {
            Self::Columns => "columns",
            Self::MainSpacing => "mainSpacing",
            Self::CrossSpacing => "crossSpacing",
            Self::AspectRatio => "aspectRatio",
            Self::Padding => "padding",
            Self::ItemCount => "itemCount",
            Self::CodeStyle => "codeStyle",
            Self::ContentTemplate => "contentTemplate",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    pub fn is_numeric(self) -> bool {
        Self::NUMERIC.contains(&self)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Value carried by a single-field update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    Number(f64),
    CodeStyle(CodeStyle),
    Template(ContentTemplate),
}

impl FieldValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::CodeStyle(style) => f.write_str(style.id()),
            Self::Template(template) => f.write_str(template.id()),
        }
    }
}

// =============================================================================
// FieldSpec - slider bounds and labels
// =============================================================================

/// Bounds, step and presentation of a numeric field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub field: Field,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Slider accent; `None` renders in the default range color.
    pub accent: Option<ColorSlot>,
    pub description: &'static str,
}

/// Slider table in panel order.
pub const FIELD_SPECS: [FieldSpec; 6] = [
    FieldSpec {
        field: Field::Columns,
        label: "Cross Axis Count",
        min: 2.0,
        max: 6.0,
        step: 1.0,
        accent: Some(ColorSlot::Primary),
        description: "Number of columns in the grid",
    },
    FieldSpec {
        field: Field::MainSpacing,
        label: "Main Axis Spacing",
        min: 0.0,
        max: 40.0,
        step: 1.0,
        accent: Some(ColorSlot::Secondary),
        description: "Vertical spacing between items",
    },
    FieldSpec {
        field: Field::CrossSpacing,
        label: "Cross Axis Spacing",
        min: 0.0,
        max: 40.0,
        step: 1.0,
        accent: Some(ColorSlot::Secondary),
        description: "Horizontal spacing between items",
    },
    FieldSpec {
        field: Field::AspectRatio,
        label: "Child Aspect Ratio",
        min: 0.5,
        max: 2.0,
        step: 0.1,
        accent: Some(ColorSlot::Accent),
        description: "Width to height ratio of each cell",
    },
    FieldSpec {
        field: Field::Padding,
        label: "Padding",
        min: 0.0,
        max: 40.0,
        step: 1.0,
        accent: Some(ColorSlot::Info),
        description: "Padding around the entire grid",
    },
    FieldSpec {
        field: Field::ItemCount,
        label: "Item Count",
        min: 4.0,
        max: 24.0,
        step: 1.0,
        accent: None,
        description: "Number of items to display",
    },
];

/// Slider spec for a numeric field.
pub fn field_spec(field: Field) -> Option<&'static FieldSpec> {
    FIELD_SPECS.iter().find(|spec| spec.field == field)
}

impl FieldSpec {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    /// Round to the nearest step (0.1 steps round to one decimal).
    pub fn snap(&self, value: f64) -> f64 {
        let scale = (1.0 / self.step).round().max(1.0);
        (value * scale).round() / scale
    }

    /// Move `steps` steps from `value`, clamped and snapped.
    pub fn step_by(&self, value: f64, steps: i32) -> f64 {
        self.clamp(self.snap(value + self.step * steps as f64))
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// The full set of adjustable grid parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Configuration {
    pub columns: u32,
    pub main_spacing: f64,
    pub cross_spacing: f64,
    pub aspect_ratio: f64,
    pub padding: f64,
    pub item_count: u32,
    pub code_style: CodeStyle,
    pub content_template: ContentTemplate,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            columns: 3,
            main_spacing: 16.0,
            cross_spacing: 16.0,
            aspect_ratio: 1.0,
            padding: 16.0,
            item_count: 12,
            code_style: CodeStyle::FixedList,
            content_template: ContentTemplate::PlainBox,
        }
    }
}

impl Configuration {
    /// Merge the fields present in `patch`. Returns the fields that were set.
    pub fn apply(&mut self, patch: &ConfigPatch) -> Vec<Field> {
        let mut set = Vec::new();
        if let Some(v) = patch.columns {
            self.columns = v;
            set.push(Field::Columns);
        }
        if let Some(v) = patch.main_spacing {
            self.main_spacing = v;
            set.push(Field::MainSpacing);
        }
        if let Some(v) = patch.cross_spacing {
            self.cross_spacing = v;
            set.push(Field::CrossSpacing);
        }
        if let Some(v) = patch.aspect_ratio {
            self.aspect_ratio = v;
            set.push(Field::AspectRatio);
        }
        if let Some(v) = patch.padding {
            self.padding = v;
            set.push(Field::Padding);
        }
        if let Some(v) = patch.item_count {
            self.item_count = v;
            set.push(Field::ItemCount);
        }
        if let Some(v) = patch.code_style {
            self.code_style = v;
            set.push(Field::CodeStyle);
        }
        if let Some(v) = patch.content_template {
            self.content_template = v;
            set.push(Field::ContentTemplate);
        }
        set
    }

    /// Current value of a field.
    pub fn value(&self, field: Field) -> FieldValue {
        match field {
            Field::Columns => FieldValue::Number(self.columns as f64),
            Field::MainSpacing => FieldValue::Number(self.main_spacing),
            Field::CrossSpacing => FieldValue::Number(self.cross_spacing),
            Field::AspectRatio => FieldValue::Number(self.aspect_ratio),
            Field::Padding => FieldValue::Number(self.padding),
            Field::ItemCount => FieldValue::Number(self.item_count as f64),
            Field::CodeStyle => FieldValue::CodeStyle(self.code_style),
            Field::ContentTemplate => FieldValue::Template(self.content_template),
        }
    }

    /// Numeric fields whose value lies outside the slider range.
    pub fn out_of_range_fields(&self) -> Vec<Field> {
        FIELD_SPECS
            .iter()
            .filter(|spec| match self.value(spec.field) {
                FieldValue::Number(n) => !spec.contains(n),
                _ => false,
            })
            .map(|spec| spec.field)
            .collect()
    }
}

// =============================================================================
// ConfigPatch
// =============================================================================

/// A partial configuration; absent fields are left untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_style: Option<CodeStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_template: Option<ContentTemplate>,
}

impl ConfigPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn columns(mut self, v: u32) -> Self {
        self.columns = Some(v);
        self
    }

    pub fn main_spacing(mut self, v: f64) -> Self {
        self.main_spacing = Some(v);
        self
    }

    pub fn cross_spacing(mut self, v: f64) -> Self {
        self.cross_spacing = Some(v);
        self
    }

    pub fn aspect_ratio(mut self, v: f64) -> Self {
        self.aspect_ratio = Some(v);
        self
    }

    pub fn padding(mut self, v: f64) -> Self {
        self.padding = Some(v);
        self
    }

    pub fn item_count(mut self, v: u32) -> Self {
        self.item_count = Some(v);
        self
    }

    pub fn code_style(mut self, v: CodeStyle) -> Self {
        self.code_style = Some(v);
        self
    }

    pub fn content_template(mut self, v: ContentTemplate) -> Self {
        self.content_template = Some(v);
        self
    }

    /// Patch for a single control update.
    ///
    /// Returns `None` when the value kind does not match the field. Integer
    /// fields round the number and saturate at zero.
    pub fn single(field: Field, value: FieldValue) -> Option<Self> {
        let patch = Self::new();
        let patch = match (field, value) {
            (Field::Columns, FieldValue::Number(n)) => patch.columns(to_count(n)),
            (Field::MainSpacing, FieldValue::Number(n)) => patch.main_spacing(n),
            (Field::CrossSpacing, FieldValue::Number(n)) => patch.cross_spacing(n),
            (Field::AspectRatio, FieldValue::Number(n)) => patch.aspect_ratio(n),
            (Field::Padding, FieldValue::Number(n)) => patch.padding(n),
            (Field::ItemCount, FieldValue::Number(n)) => patch.item_count(to_count(n)),
            (Field::CodeStyle, FieldValue::CodeStyle(s)) => patch.code_style(s),
            (Field::ContentTemplate, FieldValue::Template(t)) => patch.content_template(t),
            _ => return None,
        };
        Some(patch)
    }

    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }

    /// Fields present in the patch.
    pub fn fields(&self) -> Vec<Field> {
        let present = [
            self.columns.is_some(),
            self.main_spacing.is_some(),
            self.cross_spacing.is_some(),
            self.aspect_ratio.is_some(),
            self.padding.is_some(),
            self.item_count.is_some(),
            self.code_style.is_some(),
            self.content_template.is_some(),
        ];
        Field::ALL
            .into_iter()
            .zip(present)
            .filter_map(|(field, set)| set.then_some(field))
            .collect()
    }
}

/// A full configuration as a patch that sets every field.
impl From<Configuration> for ConfigPatch {
    fn from(config: Configuration) -> Self {
        Self {
            columns: Some(config.columns),
            main_spacing: Some(config.main_spacing),
            cross_spacing: Some(config.cross_spacing),
            aspect_ratio: Some(config.aspect_ratio),
            padding: Some(config.padding),
            item_count: Some(config.item_count),
            code_style: Some(config.code_style),
            content_template: Some(config.content_template),
        }
    }
}

fn to_count(n: f64) -> u32 {
    if n.is_nan() || n <= 0.0 {
        0
    } else {
        n.round().min(u32::MAX as f64) as u32
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = Configuration::default();
        assert_eq!(c.columns, 3);
        assert_eq!(c.main_spacing, 16.0);
        assert_eq!(c.cross_spacing, 16.0);
        assert_eq!(c.aspect_ratio, 1.0);
        assert_eq!(c.padding, 16.0);
        assert_eq!(c.item_count, 12);
        assert_eq!(c.code_style, CodeStyle::FixedList);
        assert_eq!(c.content_template, ContentTemplate::PlainBox);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(16.0), "16");
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(0.7), "0.7");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_code_style_ids() {
        assert_eq!(CodeStyle::FixedList.id(), "count");
        assert_eq!(CodeStyle::from_id("builder"), Some(CodeStyle::IndexBuilder));
        assert_eq!(CodeStyle::parse_lenient("sliver"), CodeStyle::FixedList);
        assert_eq!(CodeStyle::FixedList.toggled(), CodeStyle::IndexBuilder);
    }

    #[test]
    fn test_template_cycle() {
        assert_eq!(ContentTemplate::PlainBox.next(), ContentTemplate::MediaTile);
        assert_eq!(ContentTemplate::ProductCard.next(), ContentTemplate::PlainBox);
        assert_eq!(ContentTemplate::PlainBox.previous(), ContentTemplate::ProductCard);
        assert_eq!(ContentTemplate::parse_lenient("carousel"), ContentTemplate::PlainBox);
    }

    #[test]
    fn test_serde_camel_case() {
        let json = serde_json::to_value(Configuration::default()).unwrap();
        assert_eq!(json["mainSpacing"], 16.0);
        assert_eq!(json["itemCount"], 12);
        assert_eq!(json["codeStyle"], "count");
        assert_eq!(json["contentTemplate"], "container");
    }

    #[test]
    fn test_serde_unknown_template_falls_back() {
        let patch: ConfigPatch =
            serde_json::from_str(r#"{"contentTemplate": "carousel", "columns": 5}"#).unwrap();
        assert_eq!(patch.content_template, Some(ContentTemplate::PlainBox));
        assert_eq!(patch.columns, Some(5));
        assert_eq!(patch.fields(), vec![Field::Columns, Field::ContentTemplate]);
    }

    #[test]
    fn test_apply_patch() {
        let mut c = Configuration::default();
        let set = c.apply(&ConfigPatch::new().item_count(5).code_style(CodeStyle::IndexBuilder));
        assert_eq!(set, vec![Field::ItemCount, Field::CodeStyle]);
        assert_eq!(c.item_count, 5);
        assert_eq!(c.code_style, CodeStyle::IndexBuilder);
        assert_eq!(c.columns, 3);
    }

    #[test]
    fn test_apply_full_patch_is_identity() {
        let mut c = Configuration::default();
        c.aspect_ratio = 1.7;
        let snapshot = c;
        c.apply(&ConfigPatch::from(snapshot));
        assert_eq!(c, snapshot);
    }

    #[test]
    fn test_single_patch_kinds() {
        let p = ConfigPatch::single(Field::Columns, FieldValue::Number(4.4)).unwrap();
        assert_eq!(p.columns, Some(4));
        let p = ConfigPatch::single(Field::ItemCount, FieldValue::Number(-3.0)).unwrap();
        assert_eq!(p.item_count, Some(0));
        assert!(ConfigPatch::single(Field::Columns, FieldValue::CodeStyle(CodeStyle::FixedList)).is_none());
        assert!(ConfigPatch::new().is_empty());
    }

    #[test]
    fn test_field_keys() {
        for field in Field::ALL {
            assert_eq!(Field::from_key(field.key()), Some(field));
        }
        assert!(Field::AspectRatio.is_numeric());
        assert!(!Field::CodeStyle.is_numeric());
    }

    #[test]
    fn test_field_spec_step() {
        let ratio = field_spec(Field::AspectRatio).unwrap();
        assert_eq!(ratio.step_by(1.0, 1), 1.1);
        assert_eq!(ratio.step_by(0.5, -1), 0.5);
        assert_eq!(ratio.step_by(1.95, 1), 2.0);
        assert_eq!(ratio.snap(0.30000000000000004), 0.3);

        let columns = field_spec(Field::Columns).unwrap();
        assert_eq!(columns.step_by(6.0, 1), 6.0);
        assert_eq!(columns.step_by(3.0, -1), 2.0);
        assert_eq!(columns.label, "Cross Axis Count");
    }

    #[test]
    fn test_out_of_range_fields() {
        let mut c = Configuration::default();
        assert!(c.out_of_range_fields().is_empty());
        c.columns = 10;
        c.aspect_ratio = 0.1;
        assert_eq!(c.out_of_range_fields(), vec![Field::Columns, Field::AspectRatio]);
    }

    #[test]
    fn test_field_value_display() {
        assert_eq!(FieldValue::Number(1.0).to_string(), "1");
        assert_eq!(FieldValue::Template(ContentTemplate::ProductCard).to_string(), "product");
    }
}
