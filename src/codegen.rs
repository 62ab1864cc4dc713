//! Flutter code generation.
//!
//! [`generate`] is a pure function of the configuration. `GridView.count`
//! lists every child explicitly; `GridView.builder` emits a single item with
//! the runtime index expression [`RUNTIME_INDEX`].
//!
//! # Example
//!
//! ```rust
//! use gridview_builder::codegen;
//! use gridview_builder::model::Configuration;
//!
//! let code = codegen::generate(&Configuration::default());
//! assert!(code.starts_with("GridView.count(\n  crossAxisCount: 3,"));
//! ```

use crate::catalog;
use crate::model::{CodeStyle, Configuration, format_number};

/// Index expression used inside `itemBuilder` (Dart string interpolation).
pub const RUNTIME_INDEX: &str = "${index + 1}";

/// Indent applied to each child item.
const ITEM_INDENT: &str = "    ";

/// Generate the Flutter source for a configuration.
pub fn generate(config: &Configuration) -> String {
    let code = match config.code_style {
        CodeStyle::FixedList => fixed_list(config),
        CodeStyle::IndexBuilder => index_builder(config),
    };
    tracing::debug!(
        style = config.code_style.id(),
        template = config.content_template.id(),
        bytes = code.len(),
        "code generated"
    );
    code
}

fn fixed_list(config: &Configuration) -> String {
    let descriptor = catalog::lookup(config.content_template);
    let children = (1..=config.item_count)
        .map(|i| format!("{},", descriptor.render_code_item(&i.to_string(), ITEM_INDENT)))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "GridView.count(
  crossAxisCount: {columns},
  mainAxisSpacing: {main},
  crossAxisSpacing: {cross},
  childAspectRatio: {ratio},
  padding: EdgeInsets.all({padding}),
  children: [
{children}
  ],
)",
        columns = config.columns,
        main = format_number(config.main_spacing),
        cross = format_number(config.cross_spacing),
        ratio = format_number(config.aspect_ratio),
        padding = format_number(config.padding),
    )
}

fn index_builder(config: &Configuration) -> String {
    let descriptor = catalog::lookup(config.content_template);
    let item = descriptor.render_code_item(RUNTIME_INDEX, ITEM_INDENT);
    // The first line follows `return ` directly.
    let item = item.strip_prefix(ITEM_INDENT).unwrap_or(&item);

    format!(
        "GridView.builder(
  gridDelegate: SliverGridDelegateWithFixedCrossAxisCount(
    crossAxisCount: {columns},
    mainAxisSpacing: {main},
    crossAxisSpacing: {cross},
    childAspectRatio: {ratio},
  ),
  padding: EdgeInsets.all({padding}),
  itemCount: {count},
  itemBuilder: (context, index) {{
    return {item};
  }},
)",
        columns = config.columns,
        main = format_number(config.main_spacing),
        cross = format_number(config.cross_spacing),
        ratio = format_number(config.aspect_ratio),
        padding = format_number(config.padding),
        count = config.item_count,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContentTemplate;

    fn builder_config(template: ContentTemplate) -> Configuration {
        Configuration {
            code_style: CodeStyle::IndexBuilder,
            content_template: template,
            ..Configuration::default()
        }
    }

    #[test]
    fn test_default_header() {
        let code = generate(&Configuration::default());
        let expected_head = "GridView.count(
  crossAxisCount: 3,
  mainAxisSpacing: 16,
  crossAxisSpacing: 16,
  childAspectRatio: 1,
  padding: EdgeInsets.all(16),
  children: [
    Container(";
        assert!(code.starts_with(expected_head));
        assert!(code.ends_with("    ),\n  ],\n)"));
    }

    #[test]
    fn test_fixed_list_block_count() {
        let code = generate(&Configuration::default());
        assert_eq!(code.matches("    Container(").count(), 12);
        assert!(code.contains("      '12',"));
        assert!(!code.contains(RUNTIME_INDEX));
    }

    #[test]
    fn test_builder_product() {
        let config = Configuration {
            item_count: 5,
            ..builder_config(ContentTemplate::ProductCard)
        };
        let code = generate(&config);
        assert!(code.contains("  itemCount: 5,\n"));
        assert!(code.contains("    return Card(\n      clipBehavior: Clip.antiAlias,"));
        assert_eq!(code.matches("'Product ${index + 1}'").count(), 1);
        assert_eq!(code.matches(r"'\$${index + 1}0.00'").count(), 1);
        assert!(code.ends_with("    );\n  },\n)"));
    }

    #[test]
    fn test_builder_single_item() {
        let code = generate(&builder_config(ContentTemplate::PlainBox));
        assert_eq!(code.matches("Container(").count(), 1);
        assert_eq!(code.matches(RUNTIME_INDEX).count(), 1);
    }

    #[test]
    fn test_fractional_numbers() {
        let config = Configuration {
            aspect_ratio: 1.5,
            main_spacing: 0.0,
            ..Configuration::default()
        };
        let code = generate(&config);
        assert!(code.contains("childAspectRatio: 1.5,"));
        assert!(code.contains("mainAxisSpacing: 0,"));
    }
}
